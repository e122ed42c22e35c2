use super::socket::Socket;
use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The closed catalog of built-in node kinds.
///
/// Dispatch is a tagged union plus an explicit kind-to-handler registry, so
/// new kinds extend the system by registering a handler rather than by
/// modifying the traversal engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    // Flow control
    If,
    While,
    ForLoop,
    FunctionDef,
    FunctionCall,
    Return,

    // Variables
    VariableDef,
    VariableGet,

    // Arithmetic
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulo,

    // Logic and comparison
    And,
    Or,
    Not,
    Equal,
    NotEqual,
    Greater,
    GreaterEq,
    Less,
    LessEq,

    // I/O
    Print,
    Input,
}

impl NodeKind {
    /// True for kinds whose only purpose is to produce a value: arithmetic,
    /// logic, and comparison. These are the kinds that synthesize temporary
    /// variables when read after having been emitted as statements.
    pub fn is_expression(&self) -> bool {
        matches!(
            self,
            NodeKind::Add
                | NodeKind::Subtract
                | NodeKind::Multiply
                | NodeKind::Divide
                | NodeKind::Modulo
                | NodeKind::And
                | NodeKind::Or
                | NodeKind::Not
                | NodeKind::Equal
                | NodeKind::NotEqual
                | NodeKind::Greater
                | NodeKind::GreaterEq
                | NodeKind::Less
                | NodeKind::LessEq
        )
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NodeKind::If => "if",
            NodeKind::While => "while",
            NodeKind::ForLoop => "for_loop",
            NodeKind::FunctionDef => "function_def",
            NodeKind::FunctionCall => "function_call",
            NodeKind::Return => "return",
            NodeKind::VariableDef => "variable_def",
            NodeKind::VariableGet => "variable_get",
            NodeKind::Add => "add",
            NodeKind::Subtract => "subtract",
            NodeKind::Multiply => "multiply",
            NodeKind::Divide => "divide",
            NodeKind::Modulo => "modulo",
            NodeKind::And => "and",
            NodeKind::Or => "or",
            NodeKind::Not => "not",
            NodeKind::Equal => "equal",
            NodeKind::NotEqual => "not_equal",
            NodeKind::Greater => "greater",
            NodeKind::GreaterEq => "greater_eq",
            NodeKind::Less => "less",
            NodeKind::LessEq => "less_eq",
            NodeKind::Print => "print",
            NodeKind::Input => "input",
        };
        write!(f, "{}", name)
    }
}

/// A single operation instance in the graph.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node {
    pub id: String,
    pub kind: NodeKind,
    #[serde(default)]
    pub inputs: Vec<Socket>,
    #[serde(default)]
    pub outputs: Vec<Socket>,
    /// String-keyed bag of editor-supplied values (variable names, literal
    /// operands, free-text comments). Resolution consults this before socket
    /// defaults.
    #[serde(default)]
    pub properties: AHashMap<String, serde_json::Value>,
    /// Canvas position; irrelevant to generation but round-tripped for the
    /// editor's benefit.
    #[serde(default)]
    pub position: (f32, f32),
}

impl Node {
    pub fn input_socket(&self, socket_id: &str) -> Option<&Socket> {
        self.inputs.iter().find(|s| s.id == socket_id)
    }

    pub fn output_socket(&self, socket_id: &str) -> Option<&Socket> {
        self.outputs.iter().find(|s| s.id == socket_id)
    }

    /// Flow-kind input sockets, in declaration order.
    pub fn flow_inputs(&self) -> impl Iterator<Item = &Socket> {
        self.inputs.iter().filter(|s| s.is_flow())
    }

    /// Flow-kind output sockets, in declaration order.
    pub fn flow_outputs(&self) -> impl Iterator<Item = &Socket> {
        self.outputs.iter().filter(|s| s.is_flow())
    }

    pub fn property(&self, key: &str) -> Option<&serde_json::Value> {
        self.properties.get(key)
    }

    /// A property read as a plain string, accepting JSON strings directly and
    /// stringifying other scalar values.
    pub fn property_str(&self, key: &str) -> Option<String> {
        match self.properties.get(key) {
            Some(serde_json::Value::String(s)) => Some(s.clone()),
            Some(serde_json::Value::Number(n)) => Some(n.to_string()),
            Some(serde_json::Value::Bool(b)) => Some(b.to_string()),
            _ => None,
        }
    }
}

/// A directed connection from one node's output socket to another node's
/// input socket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    pub source_node: String,
    pub source_socket: String,
    pub target_node: String,
    pub target_socket: String,
}

impl Edge {
    pub fn new(
        source_node: &str,
        source_socket: &str,
        target_node: &str,
        target_socket: &str,
    ) -> Self {
        Self {
            source_node: source_node.to_string(),
            source_socket: source_socket.to_string(),
            target_node: target_node.to_string(),
            target_socket: target_socket.to_string(),
        }
    }
}

/// The complete, canonical definition of a computation graph, ready for
/// generation. This is the target structure for any custom editor-format
/// conversion.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Graph {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
}

impl Graph {
    pub fn node(&self, node_id: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == node_id)
    }

    /// Edges feeding a specific input socket, in edge-list order.
    pub fn edges_into(&self, node_id: &str, socket_id: &str) -> impl Iterator<Item = &Edge> {
        self.edges
            .iter()
            .filter(move |e| e.target_node == node_id && e.target_socket == socket_id)
    }

    /// Edges leaving a specific output socket, in edge-list order.
    pub fn edges_out_of(&self, node_id: &str, socket_id: &str) -> impl Iterator<Item = &Edge> {
        self.edges
            .iter()
            .filter(move |e| e.source_node == node_id && e.source_socket == socket_id)
    }

    /// Whether any edge touches the node, as source or target.
    pub fn is_connected(&self, node_id: &str) -> bool {
        self.edges
            .iter()
            .any(|e| e.source_node == node_id || e.target_node == node_id)
    }
}
