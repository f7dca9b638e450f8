use thiserror::Error;

#[derive(Debug, Error)]
pub enum DfsError {
    #[error("invalid graph: {0}")]
    InvalidGraph(String),
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("parse error: {0}")]
    Parse(String),
    #[error("io error: {0}")]
    Io(String),
}

impl DfsError {
    pub fn invalid_graph<T: Into<String>>(msg: T) -> Self {
        DfsError::InvalidGraph(msg.into())
    }

    pub fn invalid_argument<T: Into<String>>(msg: T) -> Self {
        DfsError::InvalidArgument(msg.into())
    }

    pub fn parse<T: Into<String>>(msg: T) -> Self {
        DfsError::Parse(msg.into())
    }

    pub fn io<T: Into<String>>(msg: T) -> Self {
        DfsError::Io(msg.into())
    }
}

/// A recorded enter/leave sequence that is not a depth-first order of the graph.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum OrderViolation {
    #[error("no events were recorded")]
    Empty,
    #[error("start vertex {start} is not entered first")]
    StartNotFirst { start: usize },
    #[error("start vertex {start} is not left last")]
    StartNotLast { start: usize },
    #[error("vertex {vertex} is reachable but was never explored")]
    Unexplored { vertex: usize },
    #[error("vertex {vertex} is not reachable but was explored")]
    Unreachable { vertex: usize },
    #[error("vertex {vertex} was entered more than once")]
    Reentered { vertex: usize },
    #[error("vertex {from} does not have {to} as a neighbour")]
    NotANeighbour { from: usize, to: usize },
    #[error("left vertex {found} while {expected} was open")]
    MismatchedLeave { expected: usize, found: usize },
    #[error("vertex {vertex} was entered with no open vertex to come from")]
    Detached { vertex: usize },
    #[error("event refers to vertex {vertex} outside the graph")]
    OutOfRange { vertex: usize },
}
