use rustc_hash::{FxHashMap as HashMap, FxHashSet as HashSet};
use std::{cmp::Reverse, collections::BinaryHeap};
use tracing::debug;

use super::{Graph, MstResult};
use crate::error::GraphError;

/// An edge leaving the tree towards `target`.
///
/// Ordered by weight first, then by position in the edge list, so the heap hands out the
/// same edge a front-to-back scan for the strictly smaller weight would pick. An edge index
/// maps to one target at a time: it is pushed from whichever endpoint joined the tree first.
#[derive(PartialEq, Eq, PartialOrd, Ord, Debug, Clone, Copy)]
struct FrontierEdge<'a> {
    weight: u32,
    index: usize,
    target: &'a str,
}

/// Grow a tree from `start` (the first inserted vertex when `None`) in O(E log E) time.
///
/// Stops early once no edge leaves the visited set, so a disconnected graph only gets the
/// tree of the component containing `start`.
pub fn prim_mst(graph: &Graph, start: Option<&str>) -> Result<MstResult, GraphError> {
    let mut mst = MstResult::default();
    if graph.is_empty() {
        return Ok(mst);
    }
    let start = match start {
        Some(city) if graph.contains_vertex(city) => city,
        Some(city) => return Err(GraphError::UnknownVertex(city.to_owned())),
        None => graph
            .vertices()
            .first()
            .map(String::as_str)
            .ok_or(GraphError::EmptyGraph)?,
    };

    let edges = graph.edges();
    let mut edges_by_vertex: HashMap<&str, Vec<FrontierEdge>> = HashMap::default();
    edges_by_vertex.reserve(graph.vertices().len());
    for (index, edge) in edges.iter().enumerate() {
        edges_by_vertex
            .entry(edge.city_a.as_str())
            .or_default()
            .push(FrontierEdge {
                weight: edge.weight,
                index,
                target: edge.city_b.as_str(),
            });
        edges_by_vertex
            .entry(edge.city_b.as_str())
            .or_default()
            .push(FrontierEdge {
                weight: edge.weight,
                index,
                target: edge.city_a.as_str(),
            });
    }

    let mut visited: HashSet<&str> = HashSet::default();
    visited.reserve(graph.vertices().len());
    let mut frontier = BinaryHeap::new();

    // Kickstart the tree with the start vertex
    visited.insert(start);
    frontier.extend(edges_by_vertex[start].iter().copied().map(Reverse));

    while visited.len() < graph.vertices().len() {
        let Some(Reverse(FrontierEdge { index, target, .. })) = frontier.pop() else {
            debug!(
                "Prim stopped after reaching {} of {} vertices",
                visited.len(),
                graph.vertices().len()
            );
            break;
        };
        // Reached through a lighter edge since this one was pushed
        if !visited.insert(target) {
            continue;
        }
        mst.push(edges[index].clone());
        frontier.extend(
            edges_by_vertex[target]
                .iter()
                .filter(|candidate| !visited.contains(candidate.target))
                .copied()
                .map(Reverse),
        );
    }

    debug!(
        "Prim from {}: {} edges, cost {}",
        start,
        mst.edge_count(),
        mst.total_cost
    );
    Ok(mst)
}
