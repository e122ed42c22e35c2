use super::definition::Graph;
use crate::error::GraphConversionError;

/// A trait for custom editor data models that can be converted into a kumiki
/// [`Graph`].
///
/// This is the primary extension point for making kumiki editor-agnostic. The
/// engine only ever consumes the canonical `Graph`; by implementing this
/// trait on your own document structs you provide the translation layer from
/// whatever on-disk or in-memory format your editor uses.
///
/// # Example
///
/// ```rust,no_run
/// use kumiki::prelude::*;
/// use kumiki::error::GraphConversionError;
///
/// struct MyCanvasNode { id: String, op: String }
/// struct MyCanvasDocument { nodes: Vec<MyCanvasNode> }
///
/// impl IntoGraph for MyCanvasDocument {
///     fn into_graph(self) -> std::result::Result<Graph, GraphConversionError> {
///         let mut graph = Graph::default();
///         for node in self.nodes {
///             // Map `op` onto a NodeKind and build the node through the
///             // registry's factory, then push it onto `graph.nodes`.
///             let _ = node;
///         }
///         Ok(graph)
///     }
/// }
/// ```
pub trait IntoGraph {
    /// Consumes the object and converts it into a kumiki-compatible graph.
    fn into_graph(self) -> Result<Graph, GraphConversionError>;
}

impl IntoGraph for Graph {
    fn into_graph(self) -> Result<Graph, GraphConversionError> {
        Ok(self)
    }
}

impl Graph {
    /// Parses a graph from its JSON serialization.
    pub fn from_json(json: &str) -> Result<Graph, GraphConversionError> {
        serde_json::from_str(json)
            .map_err(|e| GraphConversionError::JsonParseError(e.to_string()))
    }
}
