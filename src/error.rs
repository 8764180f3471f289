use thiserror::Error;

use crate::session::CommandError;

/// Rejected edge input. The graph is left untouched when one of these is returned.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ValidationError {
    #[error("city names must not be empty")]
    EmptyLabel,
    #[error("distance must be a positive integer, got {0}")]
    InvalidWeight(i64),
    #[error("cities must be different: '{0}' and '{1}'")]
    SelfLoop(String, String),
}

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum GraphError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("no edge at index {index}, the edge count is {len}")]
    IndexOutOfBounds { index: usize, len: usize },
    #[error("vertex {0} is not registered")]
    UnknownVertex(String),
    #[error("please add some city connections first")]
    EmptyGraph,
}

/// Everything the command line front end can run into.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Graph(#[from] GraphError),
    #[error(transparent)]
    Command(#[from] CommandError),
    #[error("failed to read or write: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed graph file: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to render svg: {0}")]
    Render(#[from] cairo::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
