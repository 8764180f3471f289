use serde::Serialize;
use tracing::info;

use crate::{
    error::GraphError,
    graph::{compute_mst, edges_label, Algorithm, Graph, MstResult},
};

/// Side by side totals of the two engines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Comparison {
    pub prim_cost: u64,
    pub prim_edge_count: usize,
    pub kruskal_cost: u64,
    pub kruskal_edge_count: usize,
    pub costs_equal: bool,
}

impl Comparison {
    pub fn new(prim: &MstResult, kruskal: &MstResult) -> Self {
        Self {
            prim_cost: prim.total_cost,
            prim_edge_count: prim.edge_count(),
            kruskal_cost: kruskal.total_cost,
            kruskal_edge_count: kruskal.edge_count(),
            costs_equal: prim.total_cost == kruskal.total_cost,
        }
    }

    pub fn edge_counts_equal(&self) -> bool {
        self.prim_edge_count == self.kruskal_edge_count
    }

    /// One line verdict for the user.
    pub fn summary(&self) -> String {
        if self.costs_equal {
            format!(
                "Both algorithms produced identical minimum spanning trees with total cost of {} km",
                self.prim_cost
            )
        } else {
            format!(
                "Different results: Prim's costs {} km over {}, Kruskal's {} km over {}",
                self.prim_cost,
                edges_label(self.prim_edge_count),
                self.kruskal_cost,
                edges_label(self.kruskal_edge_count)
            )
        }
    }
}

/// Both trees for one graph snapshot and how they compare.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Evaluation {
    pub prim: MstResult,
    pub kruskal: MstResult,
    pub comparison: Comparison,
}

impl Evaluation {
    pub fn result(&self, algorithm: Algorithm) -> &MstResult {
        match algorithm {
            Algorithm::Prim => &self.prim,
            Algorithm::Kruskal => &self.kruskal,
        }
    }
}

/// Run both engines on `graph`. Unlike [compute_mst], an edgeless graph is an error here
/// since there is nothing to compare.
pub fn evaluate(graph: &Graph, start: Option<&str>) -> Result<Evaluation, GraphError> {
    if graph.is_empty() {
        return Err(GraphError::EmptyGraph);
    }
    let prim = compute_mst(graph, Algorithm::Prim, start)?;
    let kruskal = compute_mst(graph, Algorithm::Kruskal, start)?;
    let comparison = Comparison::new(&prim, &kruskal);
    info!(
        "Prim's: {} km / {} edges, Kruskal's: {} km / {} edges",
        comparison.prim_cost,
        comparison.prim_edge_count,
        comparison.kruskal_cost,
        comparison.kruskal_edge_count
    );
    Ok(Evaluation {
        prim,
        kruskal,
        comparison,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Edge;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_graph_cannot_be_compared() {
        assert_eq!(evaluate(&Graph::new(), None), Err(GraphError::EmptyGraph));
    }

    #[test]
    fn sample_costs_match() {
        let evaluation = evaluate(&Graph::sample(), None).unwrap();
        assert_eq!(
            evaluation.comparison,
            Comparison {
                prim_cost: 5580,
                prim_edge_count: 10,
                kruskal_cost: 5580,
                kruskal_edge_count: 10,
                costs_equal: true,
            }
        );
        assert_eq!(
            evaluation.comparison.summary(),
            "Both algorithms produced identical minimum spanning trees with total cost of 5580 km"
        );
    }

    #[test]
    fn disconnected_graph_surfaces_the_divergence() {
        let mut graph = Graph::new();
        graph.add_edge("X", "Y", 1).unwrap();
        graph.add_edge("Z", "W", 1).unwrap();
        let evaluation = evaluate(&graph, Some("X")).unwrap();
        assert_eq!(evaluation.prim.edges, [Edge::new("X", "Y", 1)]);
        assert_eq!(evaluation.result(Algorithm::Kruskal).total_cost, 2);
        assert!(!evaluation.comparison.costs_equal);
        assert!(!evaluation.comparison.edge_counts_equal());
        assert_eq!(
            evaluation.comparison.summary(),
            "Different results: Prim's costs 1 km over 1 edge, Kruskal's 2 km over 2 edges"
        );
    }

    #[test]
    fn comparison_serializes_for_renderers() {
        let mut graph = Graph::new();
        graph.add_edge("A", "B", 10).unwrap();
        graph.add_edge("B", "C", 5).unwrap();
        graph.add_edge("A", "C", 8).unwrap();
        let evaluation = evaluate(&graph, None).unwrap();
        assert_eq!(
            serde_json::to_string(&evaluation.comparison).unwrap(),
            r#"{"primCost":13,"primEdgeCount":2,"kruskalCost":13,"kruskalEdgeCount":2,"costsEqual":true}"#
        );
    }
}
