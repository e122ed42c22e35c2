use serde::{Deserialize, Serialize};
use std::fmt;

/// The value-kind carried by a socket.
///
/// `Flow` sockets sequence execution and never carry data; `Any` is the
/// wildcard that connects to every data kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocketKind {
    Boolean,
    Number,
    String,
    Any,
    Flow,
}

impl fmt::Display for SocketKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SocketKind::Boolean => "boolean",
            SocketKind::Number => "number",
            SocketKind::String => "string",
            SocketKind::Any => "any",
            SocketKind::Flow => "flow",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocketDirection {
    Input,
    Output,
}

/// A typed connection point on a node.
///
/// The `id` is unique per node and direction; the `name` is what the editor
/// displays and what property-bag fallbacks are keyed on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Socket {
    pub id: String,
    pub name: String,
    pub kind: SocketKind,
    pub direction: SocketDirection,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<serde_json::Value>,
}

impl Socket {
    pub fn new(id: &str, name: &str, kind: SocketKind, direction: SocketDirection) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            kind,
            direction,
            default: None,
        }
    }

    pub fn with_default(mut self, default: serde_json::Value) -> Self {
        self.default = Some(default);
        self
    }

    /// Shorthand for a flow input socket.
    pub fn flow_in(id: &str, name: &str) -> Self {
        Self::new(id, name, SocketKind::Flow, SocketDirection::Input)
    }

    /// Shorthand for a flow output socket.
    pub fn flow_out(id: &str, name: &str) -> Self {
        Self::new(id, name, SocketKind::Flow, SocketDirection::Output)
    }

    pub fn input(id: &str, name: &str, kind: SocketKind) -> Self {
        Self::new(id, name, kind, SocketDirection::Input)
    }

    pub fn output(id: &str, name: &str, kind: SocketKind) -> Self {
        Self::new(id, name, kind, SocketDirection::Output)
    }

    pub fn is_flow(&self) -> bool {
        self.kind == SocketKind::Flow
    }
}

/// Connection compatibility between a source and a target socket.
///
/// Two sockets with the same direction are never compatible. Otherwise `Any`
/// on either side connects to everything, and identical kinds connect to each
/// other. This is the editor's live-validation rule; the generator trusts the
/// graph it is handed and does not re-check compatibility.
pub fn compatible(source: &Socket, target: &Socket) -> bool {
    if source.direction == target.direction {
        return false;
    }
    if source.kind == SocketKind::Any || target.kind == SocketKind::Any {
        return true;
    }
    source.kind == target.kind
}
