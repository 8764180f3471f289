//! Build a weighted graph of city connections and compare the minimum spanning trees found
//! by Prim's and Kruskal's algorithms.

pub mod color;
/// Run both engines on one graph and compare their totals
pub mod compare;
pub mod error;
pub mod graph;
/// Place vertices on a circle for drawing
pub mod layout;
/// SVG and plain text output
pub mod render;
/// Line based command interpreter over one graph
pub mod session;

pub use compare::{evaluate, Comparison, Evaluation};
pub use error::{Error, GraphError, Result, ValidationError};
pub use graph::{compute_mst, Algorithm, Edge, Graph, MstResult};
