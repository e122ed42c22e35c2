//! Common test utilities for building graphs.
use kumiki::prelude::*;
use serde_json::json;

/// Instantiates a node through the default registry's factory and applies
/// property overrides.
#[allow(dead_code)]
pub fn make_node(
    registry: &NodeRegistry,
    kind: NodeKind,
    id: &str,
    properties: &[(&str, serde_json::Value)],
) -> Node {
    let mut node = registry
        .create_node(kind, id)
        .expect("kind missing from default registry");
    for (key, value) in properties {
        node.properties.insert(key.to_string(), value.clone());
    }
    node
}

/// One variable-definition node (`x = 10`), no edges.
#[allow(dead_code)]
pub fn variable_graph(registry: &NodeRegistry) -> Graph {
    Graph {
        nodes: vec![make_node(
            registry,
            NodeKind::VariableDef,
            "n1",
            &[("name", json!("x")), ("value", json!(10))],
        )],
        edges: vec![],
    }
}

/// An if node (condition default `x > 10`) whose then-branch feeds a print
/// of the literal `"hi"`.
#[allow(dead_code)]
pub fn if_print_graph(registry: &NodeRegistry) -> Graph {
    Graph {
        nodes: vec![
            make_node(
                registry,
                NodeKind::If,
                "if1",
                &[("condition", json!("x > 10"))],
            ),
            make_node(registry, NodeKind::Print, "p1", &[("value", json!("hi"))]),
        ],
        edges: vec![Edge::new("if1", "then", "p1", "exec")],
    }
}

/// An add node with both operands defaulting to 0, read by a print node over
/// a data edge. The add node comes first in input order, so the entry sweep
/// emits its temporary before the print resolves it.
#[allow(dead_code)]
pub fn add_print_graph(registry: &NodeRegistry) -> Graph {
    Graph {
        nodes: vec![
            make_node(registry, NodeKind::Add, "a1", &[]),
            make_node(registry, NodeKind::Print, "p1", &[]),
        ],
        edges: vec![Edge::new("a1", "result", "p1", "value")],
    }
}

/// Two print nodes whose flow edges form a directed cycle.
#[allow(dead_code)]
pub fn flow_cycle_graph(registry: &NodeRegistry) -> Graph {
    Graph {
        nodes: vec![
            make_node(registry, NodeKind::Print, "p1", &[("value", json!("one"))]),
            make_node(registry, NodeKind::Print, "p2", &[("value", json!("two"))]),
        ],
        edges: vec![
            Edge::new("p1", "next", "p2", "exec"),
            Edge::new("p2", "next", "p1", "exec"),
        ],
    }
}
