//! Unit tests for sockets, templates, registries, and the graph model.
mod common;
use common::*;
use kumiki::lang::{catalog, fill_template};
use kumiki::prelude::*;
use serde_json::json;

#[test]
fn sockets_with_equal_directions_are_never_compatible() {
    let a = Socket::output("a", "A", SocketKind::Number);
    let b = Socket::output("b", "B", SocketKind::Number);
    assert!(!compatible(&a, &b));

    let c = Socket::input("c", "C", SocketKind::Any);
    let d = Socket::input("d", "D", SocketKind::Any);
    assert!(!compatible(&c, &d));
}

#[test]
fn any_connects_to_every_kind_across_directions() {
    let any_out = Socket::output("o", "O", SocketKind::Any);
    for kind in [
        SocketKind::Boolean,
        SocketKind::Number,
        SocketKind::String,
        SocketKind::Any,
        SocketKind::Flow,
    ] {
        let target = Socket::input("i", "I", kind);
        assert!(compatible(&any_out, &target), "any -> {} failed", kind);
    }
}

#[test]
fn matching_kinds_connect_and_mismatched_kinds_do_not() {
    let number_out = Socket::output("o", "O", SocketKind::Number);
    assert!(compatible(
        &number_out,
        &Socket::input("i", "I", SocketKind::Number)
    ));
    assert!(!compatible(
        &number_out,
        &Socket::input("i", "I", SocketKind::String)
    ));
    assert!(!compatible(
        &number_out,
        &Socket::input("i", "I", SocketKind::Flow)
    ));
}

#[test]
fn fill_template_replaces_only_known_placeholders() {
    let out = fill_template("{name} = {value}", &[("name", "x"), ("value", "1")]);
    assert_eq!(out, "x = 1");

    // Unknown placeholders stay put; unused pairs are ignored.
    let out = fill_template("{name} = {value}", &[("name", "x"), ("extra", "?")]);
    assert_eq!(out, "x = {value}");
}

#[test]
fn default_registry_covers_the_closed_catalog() {
    let registry = NodeRegistry::with_defaults();
    for kind in [
        NodeKind::If,
        NodeKind::While,
        NodeKind::ForLoop,
        NodeKind::FunctionDef,
        NodeKind::FunctionCall,
        NodeKind::Return,
        NodeKind::VariableDef,
        NodeKind::VariableGet,
        NodeKind::Add,
        NodeKind::Subtract,
        NodeKind::Multiply,
        NodeKind::Divide,
        NodeKind::Modulo,
        NodeKind::And,
        NodeKind::Or,
        NodeKind::Not,
        NodeKind::Equal,
        NodeKind::NotEqual,
        NodeKind::Greater,
        NodeKind::GreaterEq,
        NodeKind::Less,
        NodeKind::LessEq,
        NodeKind::Print,
        NodeKind::Input,
    ] {
        assert!(registry.contains(kind), "{} not registered", kind);
    }
}

#[test]
fn factories_share_the_binary_operation_shape() {
    let registry = NodeRegistry::with_defaults();
    for kind in [NodeKind::Add, NodeKind::Multiply, NodeKind::Greater] {
        let node = registry.create_node(kind, "n").unwrap();
        assert_eq!(node.inputs.len(), 2);
        assert_eq!(node.inputs[0].id, "a");
        assert_eq!(node.inputs[1].id, "b");
        assert_eq!(node.outputs.len(), 1);
        assert_eq!(node.outputs[0].id, "result");
    }
}

#[test]
fn flow_sockets_are_distinct_from_data_sockets() {
    let registry = NodeRegistry::with_defaults();
    let node = registry.create_node(NodeKind::If, "n").unwrap();
    assert_eq!(node.flow_inputs().count(), 1);
    assert_eq!(node.flow_outputs().count(), 3);
    assert!(node.input_socket("condition").is_some_and(|s| !s.is_flow()));
}

#[test]
fn graph_round_trips_through_json() {
    let registry = NodeRegistry::with_defaults();
    let graph = if_print_graph(&registry);

    let json = serde_json::to_string(&graph).unwrap();
    let restored: Graph = serde_json::from_str(&json).unwrap();
    assert_eq!(restored.nodes.len(), graph.nodes.len());
    assert_eq!(restored.edges, graph.edges);
    assert_eq!(restored.nodes[0].kind, NodeKind::If);
}

#[test]
fn hydrate_fills_sockets_for_compact_graphs() {
    let registry = NodeRegistry::with_defaults();
    let mut graph: Graph = serde_json::from_value(json!({
        "nodes": [
            {"id": "v1", "kind": "variable_def", "properties": {"name": "x", "value": 3}}
        ],
        "edges": []
    }))
    .unwrap();

    assert!(graph.nodes[0].inputs.is_empty());
    registry.hydrate(&mut graph);
    assert!(graph.nodes[0].input_socket("value").is_some());
    // Editor-set properties win over factory defaults.
    assert_eq!(graph.nodes[0].property_str("name").as_deref(), Some("x"));

    let languages = LanguageRegistry::with_defaults();
    let generated = Generator::new(&registry, &languages).generate(&graph, "python");
    assert!(generated.source.contains("x = 3"));
}

#[test]
fn graph_from_json_reports_parse_failures() {
    let err = Graph::from_json("{ not json").unwrap_err();
    assert!(matches!(err, GraphConversionError::JsonParseError(_)));

    let graph = Graph::from_json(r#"{"nodes": [], "edges": []}"#).unwrap();
    assert!(graph.nodes.is_empty());
}

#[test]
fn into_graph_is_identity_for_the_canonical_model() {
    let registry = NodeRegistry::with_defaults();
    let graph = variable_graph(&registry);
    let converted = graph.clone().into_graph().unwrap();
    assert_eq!(converted.nodes.len(), 1);
}

#[test]
fn language_registry_names_are_sorted() {
    let languages = LanguageRegistry::with_defaults();
    assert_eq!(
        languages.names(),
        vec!["javascript", "lua", "python", "ruby"]
    );
}

#[test]
fn fallback_language_is_python() {
    let languages = LanguageRegistry::with_defaults();
    assert_eq!(languages.fallback().name, "python");
}

#[test]
fn comment_rendering_uses_each_language_token() {
    assert_eq!(catalog::python().comment("hello"), "# hello");
    assert_eq!(catalog::javascript().comment("hello"), "// hello");
    assert_eq!(catalog::lua().comment("hello"), "-- hello");
}
