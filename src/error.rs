//! Error types for graph construction and analysis

use thiserror::Error;

/// Errors raised by the graph store, the edge-list parser and the analysis session
#[derive(Debug, Error)]
pub enum GraphError {
    /// An edge or query referenced a vertex id outside `0..vertex_count`
    #[error("vertex id {vertex} is out of range for a graph of {vertex_count} vertices")]
    OutOfRange { vertex: usize, vertex_count: usize },

    /// A record in the edge list could not be parsed
    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },

    /// An edge record appeared before the `g <n>` header, or the header is missing
    #[error("line {line}: edge list has no `g <vertex count>` header before its edges")]
    MissingHeader { line: usize },

    /// Centrality was requested before connected components were labeled
    #[error("connected components have not been labeled yet")]
    Unlabeled,

    /// Centrality was requested for a component id that does not exist
    #[error("component {component} does not exist ({component_count} components found)")]
    UnknownComponent {
        component: usize,
        component_count: usize,
    },

    /// A traversal finished without discovering its target
    #[error("vertex {to} is not reachable from vertex {from}")]
    Unreachable { from: usize, to: usize },

    /// A distance was requested between vertices of different components
    #[error("vertices {from} and {to} lie in different connected components")]
    NotConnected { from: usize, to: usize },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, GraphError>;
