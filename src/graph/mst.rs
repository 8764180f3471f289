use serde::Serialize;
use std::{fmt, str::FromStr};

use super::{kruskal::kruskal_mst, prim::prim_mst, Edge, Graph};
use crate::error::GraphError;

/// Selected tree edges in the order they were chosen, plus their summed weight.
///
/// For a disconnected graph this is whatever the algorithm's own stopping rule leaves behind:
/// Prim covers only the component of its start vertex, Kruskal a spanning forest.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MstResult {
    pub edges: Vec<Edge>,
    pub total_cost: u64,
}

impl MstResult {
    pub(crate) fn push(&mut self, edge: Edge) {
        self.total_cost += u64::from(edge.weight);
        self.edges.push(edge);
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Whether the tree touches every vertex of `graph`.
    pub fn spans(&self, graph: &Graph) -> bool {
        self.edges.len() + 1 == graph.vertices().len()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    Prim,
    Kruskal,
}

impl Algorithm {
    pub const ALL: [Algorithm; 2] = [Algorithm::Prim, Algorithm::Kruskal];

    pub fn name(self) -> &'static str {
        match self {
            Self::Prim => "prim",
            Self::Kruskal => "kruskal",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Prim => write!(f, "Prim's"),
            Self::Kruskal => write!(f, "Kruskal's"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown algorithm '{0}', expected prim or kruskal")]
pub struct UnknownAlgorithm(pub String);

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input.trim().to_lowercase().as_str() {
            "prim" | "prims" | "prim's" => Ok(Self::Prim),
            "kruskal" | "kruskals" | "kruskal's" => Ok(Self::Kruskal),
            _ => Err(UnknownAlgorithm(input.to_owned())),
        }
    }
}

/// Run one engine over `graph`. `start` only matters to Prim; `None` means the first vertex.
///
/// An edgeless graph yields an empty tree of cost 0.
pub fn compute_mst(
    graph: &Graph,
    algorithm: Algorithm,
    start: Option<&str>,
) -> Result<MstResult, GraphError> {
    match algorithm {
        Algorithm::Prim => prim_mst(graph, start),
        Algorithm::Kruskal => kruskal_mst(graph),
    }
}

/// "1 edge", "3 edges".
pub(crate) fn edges_label(count: usize) -> String {
    match count {
        1 => "1 edge".to_owned(),
        n => format!("{} edges", n),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use crate::graph::testing::random_connected_graph;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    #[test]
    fn triangle_scenario() {
        let mut graph = Graph::new();
        graph.add_edge("A", "B", 10).unwrap();
        graph.add_edge("B", "C", 5).unwrap();
        graph.add_edge("A", "C", 8).unwrap();

        for algorithm in Algorithm::ALL {
            let result = compute_mst(&graph, algorithm, None).unwrap();
            assert_eq!(result.total_cost, 13, "{algorithm}");
            assert_eq!(result.edge_count(), 2, "{algorithm}");
            assert!(result.edges.contains(&Edge::new("B", "C", 5)));
            assert!(result.edges.contains(&Edge::new("A", "C", 8)));
        }
    }

    #[test]
    fn empty_graph_yields_empty_tree() {
        let mut graph = Graph::sample();
        graph.reset();
        for algorithm in Algorithm::ALL {
            assert_eq!(
                compute_mst(&graph, algorithm, None),
                Ok(MstResult::default())
            );
        }
    }

    #[test]
    fn connected_graphs_span_with_both_engines() {
        let mut rng = StdRng::seed_from_u64(0x6d7374);
        for vertices in 2..24 {
            let graph = random_connected_graph(&mut rng, vertices, vertices * 2, false);
            let prim = compute_mst(&graph, Algorithm::Prim, None).unwrap();
            let kruskal = compute_mst(&graph, Algorithm::Kruskal, None).unwrap();
            assert_eq!(prim.edge_count(), vertices - 1);
            assert_eq!(kruskal.edge_count(), vertices - 1);
            assert!(prim.spans(&graph) && kruskal.spans(&graph));
            // minimum weight is unique even when the tree isn't
            assert_eq!(prim.total_cost, kruskal.total_cost);
        }
    }

    #[test]
    fn unique_weights_agree_on_tree() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..50 {
            let vertices = rng.gen_range(2..30);
            let graph = random_connected_graph(&mut rng, vertices, vertices * 3, true);
            let prim = compute_mst(&graph, Algorithm::Prim, None).unwrap();
            let kruskal = compute_mst(&graph, Algorithm::Kruskal, None).unwrap();
            assert_eq!(prim.total_cost, kruskal.total_cost);

            let mut prim_edges = prim.edges.clone();
            let mut kruskal_edges = kruskal.edges.clone();
            prim_edges.sort_by_key(|edge| edge.weight);
            kruskal_edges.sort_by_key(|edge| edge.weight);
            assert_eq!(prim_edges, kruskal_edges);
        }
    }

    #[test]
    fn sample_minimum_cost() {
        let graph = Graph::sample();
        for algorithm in Algorithm::ALL {
            let result = compute_mst(&graph, algorithm, None).unwrap();
            assert_eq!(result.total_cost, 5580);
            assert_eq!(result.edge_count(), 10);
        }
    }

    #[test]
    fn algorithm_names_parse() {
        assert_eq!("Prim".parse::<Algorithm>(), Ok(Algorithm::Prim));
        assert_eq!(" kruskal ".parse::<Algorithm>(), Ok(Algorithm::Kruskal));
        assert_eq!(
            "dijkstra".parse::<Algorithm>(),
            Err(UnknownAlgorithm("dijkstra".into()))
        );
        assert_eq!(Algorithm::Kruskal.name(), "kruskal");
        assert_eq!(
            serde_json::to_string(&Algorithm::Prim).unwrap(),
            "\"prim\""
        );
    }

    #[test]
    fn result_serializes_with_camel_case() {
        let mut result = MstResult::default();
        result.push(Edge::new("A", "B", 3));
        assert_eq!(
            serde_json::to_string(&result).unwrap(),
            r#"{"edges":[{"cityA":"A","cityB":"B","weight":3}],"totalCost":3}"#
        );
    }

    #[test]
    fn edge_counts_read_in_the_singular_for_one() {
        assert_eq!(edges_label(0), "0 edges");
        assert_eq!(edges_label(1), "1 edge");
        assert_eq!(edges_label(10), "10 edges");
    }
}
