//! Tests for the traversal engine: entry points, resolution, totality.
mod common;
use common::*;
use kumiki::prelude::*;
use serde_json::json;

fn generate(graph: &Graph, language: &str) -> GeneratedCode {
    let nodes = NodeRegistry::with_defaults();
    let languages = LanguageRegistry::with_defaults();
    Generator::new(&nodes, &languages).generate(graph, language)
}

#[test]
fn empty_graph_emits_only_the_no_nodes_comment() {
    let generated = generate(&Graph::default(), "python");
    assert_eq!(generated.source, "# No nodes to generate\n");
    assert!(generated.warnings.is_empty());
}

#[test]
fn output_begins_with_a_header_comment_in_every_language() {
    let registry = NodeRegistry::with_defaults();
    let graph = variable_graph(&registry);
    let languages = LanguageRegistry::with_defaults();
    for name in languages.names() {
        let config = languages.get(name).unwrap();
        let generated = generate(&graph, name);
        let comment_token = config.comment("").trim_end().to_string();
        assert!(
            generated.source.starts_with(comment_token.trim()),
            "{} output does not start with its comment token: {}",
            name,
            generated.source
        );
        assert_eq!(generated.file_extension, config.file_extension);
    }
}

#[test]
fn single_variable_definition_emits_a_binding() {
    let registry = NodeRegistry::with_defaults();
    let graph = variable_graph(&registry);

    let generated = generate(&graph, "python");
    assert!(generated.source.contains("x = 10"));

    let generated = generate(&graph, "javascript");
    assert!(generated.source.contains("let x = 10;"));
}

#[test]
fn if_branch_indents_its_children() {
    let registry = NodeRegistry::with_defaults();
    let graph = if_print_graph(&registry);

    let generated = generate(&graph, "python");
    assert!(generated.source.contains("if x > 10:\n    print(\"hi\")\n"));
}

#[test]
fn expression_read_through_data_edge_uses_a_temporary() {
    let registry = NodeRegistry::with_defaults();
    let graph = add_print_graph(&registry);

    let generated = generate(&graph, "python");
    assert!(generated.source.contains("_temp_a1 = (0 + 0)"));
    assert!(generated.source.contains("print(_temp_a1)"));
    // The assignment precedes the use.
    let def = generated.source.find("_temp_a1 = ").unwrap();
    let use_site = generated.source.find("print(_temp_a1)").unwrap();
    assert!(def < use_site);
}

#[test]
fn expression_listed_after_its_consumer_is_inlined() {
    let registry = NodeRegistry::with_defaults();
    let mut graph = add_print_graph(&registry);
    graph.nodes.reverse(); // print first in input order

    let generated = generate(&graph, "python");
    assert!(generated.source.contains("print((0 + 0))"));
    // The add node was consumed inline; no stray temporary statement.
    assert!(!generated.source.contains("_temp_a1 ="));
}

#[test]
fn expression_fanout_after_inlining_defines_the_temporary() {
    let registry = NodeRegistry::with_defaults();
    // The first consumer inlines the add; the second must still find a bound
    // temporary to reference.
    let graph = Graph {
        nodes: vec![
            make_node(&registry, NodeKind::Print, "p1", &[]),
            make_node(&registry, NodeKind::Print, "p2", &[]),
            make_node(&registry, NodeKind::Add, "a1", &[]),
        ],
        edges: vec![
            Edge::new("a1", "result", "p1", "value"),
            Edge::new("a1", "result", "p2", "value"),
        ],
    };

    let generated = generate(&graph, "python");
    assert!(generated.source.contains("print((0 + 0))"));
    assert!(generated.source.contains("_temp_a1 = (0 + 0)"));
    assert!(generated.source.contains("print(_temp_a1)"));
    // The binding precedes the reference.
    let def = generated.source.find("_temp_a1 = ").unwrap();
    let use_site = generated.source.find("print(_temp_a1)").unwrap();
    assert!(def < use_site);
}

#[test]
fn expression_fanout_shares_one_temporary() {
    let registry = NodeRegistry::with_defaults();
    let graph = Graph {
        nodes: vec![
            make_node(&registry, NodeKind::Add, "a1", &[]),
            make_node(&registry, NodeKind::Print, "p1", &[]),
            make_node(&registry, NodeKind::Print, "p2", &[]),
        ],
        edges: vec![
            Edge::new("a1", "result", "p1", "value"),
            Edge::new("a1", "result", "p2", "value"),
        ],
    };

    let generated = generate(&graph, "python");
    assert_eq!(generated.source.matches("_temp_a1 = ").count(), 1);
    assert_eq!(generated.source.matches("print(_temp_a1)").count(), 2);
}

#[test]
fn generation_is_idempotent() {
    let registry = NodeRegistry::with_defaults();
    let graph = if_print_graph(&registry);
    let first = generate(&graph, "python");
    let second = generate(&graph, "python");
    assert_eq!(first.source, second.source);
}

#[test]
fn flow_cycle_terminates_and_emits_each_node_once() {
    let registry = NodeRegistry::with_defaults();
    let graph = flow_cycle_graph(&registry);

    let generated = generate(&graph, "python");
    assert_eq!(generated.source.matches("print(\"one\")").count(), 1);
    assert_eq!(generated.source.matches("print(\"two\")").count(), 1);
}

#[test]
fn connected_flow_input_is_not_an_entry_point() {
    let registry = NodeRegistry::with_defaults();
    let graph = if_print_graph(&registry);

    // The print node's exec input is connected, so it only appears inside
    // the if block, indented, never at top level.
    let generated = generate(&graph, "python");
    assert!(generated.source.contains("    print(\"hi\")"));
    assert!(!generated.source.contains("\nprint(\"hi\")"));
}

#[test]
fn unknown_language_falls_back_to_python() {
    let registry = NodeRegistry::with_defaults();
    let graph = variable_graph(&registry);

    let fallback = generate(&graph, "cobol");
    let python = generate(&graph, "python");
    assert_eq!(fallback.source, python.source);
    assert_eq!(fallback.file_extension, "py");
    assert!(fallback.warnings.iter().any(|w| matches!(
        w,
        GenerationWarning::UnknownLanguage { requested, .. } if requested == "cobol"
    )));
}

#[test]
fn unregistered_kind_degrades_to_a_comment_marker() {
    let nodes = NodeRegistry::new(); // nothing registered
    let languages = LanguageRegistry::with_defaults();
    let full = NodeRegistry::with_defaults();
    let graph = variable_graph(&full);

    let generated = Generator::new(&nodes, &languages).generate(&graph, "python");
    assert!(generated.source.contains("# unsupported node: variable_def"));
    assert!(generated.warnings.iter().any(|w| matches!(
        w,
        GenerationWarning::UnregisteredKind { node_id, .. } if node_id == "n1"
    )));
}

#[test]
fn unconnected_inputs_fall_back_to_typed_zero_values() {
    let registry = NodeRegistry::with_defaults();
    // A print node with no property and no connection: its Any-kind value
    // socket defaults to "" from the factory.
    let graph = Graph {
        nodes: vec![make_node(&registry, NodeKind::Print, "p1", &[])],
        edges: vec![],
    };
    let generated = generate(&graph, "python");
    assert!(generated.source.contains("print(\"\")"));
}

#[test]
fn node_comment_property_is_emitted_before_its_statement() {
    let registry = NodeRegistry::with_defaults();
    let graph = Graph {
        nodes: vec![make_node(
            &registry,
            NodeKind::VariableDef,
            "n1",
            &[
                ("name", json!("x")),
                ("value", json!(1)),
                ("comment", json!("initial state")),
            ],
        )],
        edges: vec![],
    };
    let generated = generate(&graph, "python");
    assert!(generated.source.contains("# initial state\nx = 1\n"));
}

#[test]
fn variable_getter_resolves_to_its_name() {
    let registry = NodeRegistry::with_defaults();
    let graph = Graph {
        nodes: vec![
            make_node(
                &registry,
                NodeKind::VariableGet,
                "g1",
                &[("name", json!("count"))],
            ),
            make_node(&registry, NodeKind::Print, "p1", &[]),
        ],
        edges: vec![Edge::new("g1", "value", "p1", "value")],
    };
    let generated = generate(&graph, "python");
    assert!(generated.source.contains("print(count)"));
}

#[test]
fn function_call_read_as_value_is_inlined() {
    let registry = NodeRegistry::with_defaults();
    let call = make_node(
        &registry,
        NodeKind::FunctionCall,
        "c1",
        &[("name", json!("get_x")), ("args", json!(""))],
    );
    let graph = Graph {
        nodes: vec![call, make_node(&registry, NodeKind::Print, "p1", &[])],
        edges: vec![Edge::new("c1", "result", "p1", "value")],
    };
    let generated = generate(&graph, "python");
    assert!(generated.source.contains("print(get_x())"));
}

#[test]
fn while_and_for_loops_emit_headers_and_bodies() {
    let registry = NodeRegistry::with_defaults();
    let graph = Graph {
        nodes: vec![
            make_node(
                &registry,
                NodeKind::While,
                "w1",
                &[("condition", json!("x < 5"))],
            ),
            make_node(
                &registry,
                NodeKind::Print,
                "p1",
                &[("value", json!("tick"))],
            ),
        ],
        edges: vec![Edge::new("w1", "body", "p1", "exec")],
    };
    let generated = generate(&graph, "python");
    assert!(generated.source.contains("while x < 5:\n    print(\"tick\")"));

    let graph = Graph {
        nodes: vec![
            make_node(&registry, NodeKind::ForLoop, "f1", &[]),
            make_node(&registry, NodeKind::Print, "p1", &[("value", json!("i"))]),
        ],
        edges: vec![Edge::new("f1", "body", "p1", "exec")],
    };
    let generated = generate(&graph, "python");
    assert!(generated.source.contains("for i in range(0, 10):"));
}

#[test]
fn function_definition_wraps_its_body_and_return() {
    let registry = NodeRegistry::with_defaults();
    let graph = Graph {
        nodes: vec![
            make_node(
                &registry,
                NodeKind::FunctionDef,
                "d1",
                &[("name", json!("answer")), ("params", json!(""))],
            ),
            make_node(&registry, NodeKind::Return, "r1", &[("value", json!(42))]),
        ],
        edges: vec![Edge::new("d1", "body", "r1", "exec")],
    };
    let generated = generate(&graph, "python");
    assert!(generated.source.contains("def answer():\n    return 42"));
}

#[test]
fn edge_to_missing_node_warns_and_continues() {
    let registry = NodeRegistry::with_defaults();
    let mut graph = variable_graph(&registry);
    graph.edges.push(Edge::new("ghost", "value", "n1", "value"));

    let generated = generate(&graph, "python");
    assert!(generated.warnings.iter().any(|w| matches!(
        w,
        GenerationWarning::MissingEdgeEndpoint { node_id } if node_id == "ghost"
    )));
    // The binding still resolved through the fallback chain.
    assert!(generated.source.contains("x = 10"));
}
