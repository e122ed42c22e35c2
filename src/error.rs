use thiserror::Error;

/// Structural findings reported by the graph validator.
///
/// These are collected into a [`ValidationReport`](crate::graph::ValidationReport)
/// and never returned as a hard failure; generation does not require a clean
/// report to run.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Node '{node_id}' participates in a cycle")]
    Cycle { node_id: String },

    #[error("Node '{node_id}' is not connected to any other node")]
    Disconnected { node_id: String },

    #[error(
        "Node '{node_id}' has {found} {direction} connection(s), but between {min} and {max} are required"
    )]
    ArityViolation {
        node_id: String,
        direction: &'static str,
        found: usize,
        min: usize,
        max: usize,
    },

    #[error(
        "Node '{node_id}' is missing a required incoming connection from node '{dependency_id}'"
    )]
    MissingDependency {
        node_id: String,
        dependency_id: String,
    },
}

/// Non-fatal issues recorded while generating code.
///
/// The generator is total: none of these abort a run. They ride alongside the
/// generated text so callers can surface problems without re-parsing output.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerationWarning {
    #[error("Node '{node_id}' has kind '{kind}' with no registered handler")]
    UnregisteredKind { node_id: String, kind: String },

    #[error(
        "Input '{socket_id}' on node '{node_id}' could not be resolved; a fallback value was emitted"
    )]
    UnresolvedInput { node_id: String, socket_id: String },

    #[error("Language '{requested}' is not registered; fell back to '{fallback}'")]
    UnknownLanguage { requested: String, fallback: String },

    #[error("Edge references missing node '{node_id}'")]
    MissingEdgeEndpoint { node_id: String },
}

/// Errors that can occur when converting a custom editor format into a
/// kumiki [`Graph`](crate::graph::Graph).
#[derive(Error, Debug, Clone)]
pub enum GraphConversionError {
    #[error("Invalid graph data: {0}")]
    ValidationError(String),

    #[error("Failed to parse graph JSON: {0}")]
    JsonParseError(String),
}
