use thiserror::Error;

use crate::NodeId;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Negative cycle detected through node {node}")]
    NegativeCycle { node: NodeId },
    #[error("Unknown node name: {0}")]
    UnknownNode(String),
    #[error("Invalid data: {0}")]
    InvalidData(String),
}
