use thiserror::Error;

#[derive(Debug, Error)]
pub enum GraphError {
    #[error("node not found: {0}")]
    NodeNotFound(String),
    #[error("invalid graph: {0}")]
    InvalidGraph(String),
    #[error("dataset error: {0}")]
    Dataset(String),
    #[error("command error: {0}")]
    Command(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl GraphError {
    pub fn not_found<T: Into<String>>(msg: T) -> Self {
        GraphError::NodeNotFound(msg.into())
    }

    pub fn invalid_graph<T: Into<String>>(msg: T) -> Self {
        GraphError::InvalidGraph(msg.into())
    }

    pub fn dataset<T: Into<String>>(msg: T) -> Self {
        GraphError::Dataset(msg.into())
    }

    pub fn command<T: Into<String>>(msg: T) -> Self {
        GraphError::Command(msg.into())
    }
}
