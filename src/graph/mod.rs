/// Weighted undirected city graph
mod store;
/// Disjoint sets with path compression and union by rank
pub mod union_find;
/// Grow a [Minimum Spanning Tree (MST)](https://en.wikipedia.org/wiki/Minimum_spanning_tree) with [Prim's algorithm](https://en.wikipedia.org/wiki/Prim%27s_algorithm)
pub mod prim;
/// Build a minimum spanning forest with [Kruskal's algorithm](https://en.wikipedia.org/wiki/Kruskal%27s_algorithm)
pub mod kruskal;
pub mod mst;

pub(crate) use mst::edges_label;
pub use mst::{compute_mst, Algorithm, MstResult};
pub use store::{Edge, Graph, GraphFile, SAMPLE_EDGES};
pub use union_find::UnionFind;
