//! Socket-shape factories shared by node families.
//!
//! One parameterized factory per family keeps the socket wiring in a single
//! place instead of repeating it for every operator.

use crate::graph::{Node, NodeKind, Socket, SocketKind};
use ahash::AHashMap;
use serde_json::json;

fn node(id: &str, kind: NodeKind, inputs: Vec<Socket>, outputs: Vec<Socket>) -> Node {
    Node {
        id: id.to_string(),
        kind,
        inputs,
        outputs,
        properties: AHashMap::new(),
        position: (0.0, 0.0),
    }
}

fn with_properties(mut node: Node, pairs: &[(&str, serde_json::Value)]) -> Node {
    for (key, value) in pairs {
        node.properties.insert(key.to_string(), value.clone());
    }
    node
}

/// A binary operation node: two data inputs and one result output, shaped
/// only by the operand kind. The operator itself lives in the language
/// configuration, not the socket layout.
pub fn binary_op_node(id: &str, kind: NodeKind, operand: SocketKind, result: SocketKind) -> Node {
    let zero = match operand {
        SocketKind::Boolean => json!(false),
        _ => json!(0),
    };
    node(
        id,
        kind,
        vec![
            Socket::input("a", "A", operand).with_default(zero.clone()),
            Socket::input("b", "B", operand).with_default(zero),
        ],
        vec![Socket::output("result", "Result", result)],
    )
}

pub fn not_node(id: &str) -> Node {
    node(
        id,
        NodeKind::Not,
        vec![Socket::input("value", "Value", SocketKind::Boolean).with_default(json!(false))],
        vec![Socket::output("result", "Result", SocketKind::Boolean)],
    )
}

pub fn if_node(id: &str) -> Node {
    node(
        id,
        NodeKind::If,
        vec![
            Socket::flow_in("exec", "Exec"),
            Socket::input("condition", "Condition", SocketKind::Boolean),
        ],
        vec![
            Socket::flow_out("then", "Then"),
            Socket::flow_out("else", "Else"),
            Socket::flow_out("next", "Next"),
        ],
    )
}

pub fn while_node(id: &str) -> Node {
    node(
        id,
        NodeKind::While,
        vec![
            Socket::flow_in("exec", "Exec"),
            Socket::input("condition", "Condition", SocketKind::Boolean),
        ],
        vec![Socket::flow_out("body", "Body"), Socket::flow_out("next", "Next")],
    )
}

pub fn for_loop_node(id: &str) -> Node {
    let base = node(
        id,
        NodeKind::ForLoop,
        vec![
            Socket::flow_in("exec", "Exec"),
            Socket::input("start", "Start", SocketKind::Number).with_default(json!(0)),
            Socket::input("end", "End", SocketKind::Number).with_default(json!(10)),
        ],
        vec![Socket::flow_out("body", "Body"), Socket::flow_out("next", "Next")],
    );
    with_properties(base, &[("variable", json!("i"))])
}

pub fn function_def_node(id: &str) -> Node {
    let base = node(
        id,
        NodeKind::FunctionDef,
        vec![],
        vec![Socket::flow_out("body", "Body"), Socket::flow_out("next", "Next")],
    );
    with_properties(base, &[("name", json!("my_function")), ("params", json!(""))])
}

pub fn function_call_node(id: &str) -> Node {
    let base = node(
        id,
        NodeKind::FunctionCall,
        vec![Socket::flow_in("exec", "Exec")],
        vec![
            Socket::flow_out("next", "Next"),
            Socket::output("result", "Result", SocketKind::Any),
        ],
    );
    with_properties(base, &[("name", json!("my_function")), ("args", json!(""))])
}

pub fn return_node(id: &str) -> Node {
    node(
        id,
        NodeKind::Return,
        vec![
            Socket::flow_in("exec", "Exec"),
            Socket::input("value", "Value", SocketKind::Any),
        ],
        vec![],
    )
}

pub fn variable_def_node(id: &str) -> Node {
    let base = node(
        id,
        NodeKind::VariableDef,
        vec![
            Socket::flow_in("exec", "Exec"),
            Socket::input("value", "Value", SocketKind::Any).with_default(json!(0)),
        ],
        vec![
            Socket::flow_out("next", "Next"),
            Socket::output("value", "Value", SocketKind::Any),
        ],
    );
    with_properties(base, &[("name", json!("my_var"))])
}

pub fn variable_get_node(id: &str) -> Node {
    let base = node(
        id,
        NodeKind::VariableGet,
        vec![],
        vec![Socket::output("value", "Value", SocketKind::Any)],
    );
    with_properties(base, &[("name", json!("my_var"))])
}

pub fn print_node(id: &str) -> Node {
    node(
        id,
        NodeKind::Print,
        vec![
            Socket::flow_in("exec", "Exec"),
            Socket::input("value", "Value", SocketKind::Any).with_default(json!("")),
        ],
        vec![Socket::flow_out("next", "Next")],
    )
}

pub fn input_node(id: &str) -> Node {
    let base = node(
        id,
        NodeKind::Input,
        vec![Socket::flow_in("exec", "Exec")],
        vec![
            Socket::flow_out("next", "Next"),
            Socket::output("value", "Value", SocketKind::String),
        ],
    );
    with_properties(base, &[("name", json!("user_input")), ("prompt", json!(""))])
}
