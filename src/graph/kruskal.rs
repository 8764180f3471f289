use tracing::debug;

use super::{Graph, MstResult, UnionFind};
use crate::error::GraphError;

/// Greedily take edges in ascending weight order unless they close a cycle.
///
/// The sort is stable, so equal weights keep their edge list order. Components are never
/// required to meet: a disconnected graph yields a spanning forest. O(E log E) time.
pub fn kruskal_mst(graph: &Graph) -> Result<MstResult, GraphError> {
    let mut mst = MstResult::default();
    if graph.is_empty() {
        return Ok(mst);
    }

    let mut sorted_edges = graph.edges().iter().collect::<Vec<_>>();
    sorted_edges.sort_by_key(|edge| edge.weight);

    let mut components = UnionFind::new(graph.vertices().iter().map(String::as_str));
    // No further union can succeed once the forest has this many edges
    let max_edges = graph.vertices().len().saturating_sub(1);
    for edge in sorted_edges {
        if components.union(&edge.city_a.as_str(), &edge.city_b.as_str())? {
            mst.push(edge.clone());
            if mst.edge_count() == max_edges {
                break;
            }
        }
    }

    debug!(
        "Kruskal: {} edges, cost {}",
        mst.edge_count(),
        mst.total_cost
    );
    Ok(mst)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Edge;
    use pretty_assertions::assert_eq;

    #[test]
    fn disconnected_graph_builds_a_forest() {
        let mut graph = Graph::new();
        graph.add_edge("X", "Y", 1).unwrap();
        graph.add_edge("Z", "W", 1).unwrap();
        let result = kruskal_mst(&graph).unwrap();
        assert_eq!(
            result.edges,
            [Edge::new("X", "Y", 1), Edge::new("Z", "W", 1)]
        );
        assert_eq!(result.total_cost, 2);
        assert!(!result.spans(&graph));
    }

    #[test]
    fn equal_weights_keep_input_order() {
        let mut graph = Graph::new();
        graph.add_edge("A", "B", 3).unwrap();
        graph.add_edge("C", "D", 1).unwrap();
        graph.add_edge("B", "C", 3).unwrap();
        graph.add_edge("A", "C", 3).unwrap();
        graph.add_edge("B", "D", 1).unwrap();
        let result = kruskal_mst(&graph).unwrap();
        assert_eq!(
            result.edges,
            [
                Edge::new("C", "D", 1),
                Edge::new("B", "D", 1),
                Edge::new("A", "B", 3),
            ]
        );
        assert_eq!(result.total_cost, 5);
    }

    #[test]
    fn skips_edges_that_close_cycles() {
        let result = kruskal_mst(&Graph::sample()).unwrap();
        assert!(!result
            .edges
            .contains(&Edge::new("Chennai", "Hyderabad", 630)));
        assert!(!result
            .edges
            .contains(&Edge::new("Mumbai", "Bangalore", 980)));
        assert_eq!(result.edges.first(), Some(&Edge::new("Mumbai", "Pune", 150)));
        assert_eq!(result.edges.last(), Some(&Edge::new("Delhi", "Kolkata", 1500)));
        assert_eq!(result.total_cost, 5580);
    }

    #[test]
    fn parallel_edges_keep_the_lighter_one() {
        let mut graph = Graph::new();
        graph.add_edge("A", "B", 9).unwrap();
        graph.add_edge("B", "A", 2).unwrap();
        let result = kruskal_mst(&graph).unwrap();
        assert_eq!(result.edges, [Edge::new("B", "A", 2)]);
    }
}
