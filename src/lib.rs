//! # Kumiki - Node-Graph Code Generation Engine
//!
//! **Kumiki** renders a directed graph of computation nodes (branches, loops,
//! arithmetic, logic, variables, I/O) as syntactically valid source code in
//! any of several target languages. One language-agnostic traversal walks the
//! graph from its entry points; everything language-specific (statement
//! templates, operators, literals, indentation, boilerplate) is read from an
//! immutable [`LanguageConfig`](lang::LanguageConfig).
//!
//! ## Core Workflow
//!
//! 1. **Build or load a graph**: the engine consumes a canonical
//!    [`Graph`](graph::Graph) of nodes and edges. Custom editor formats
//!    convert through the [`IntoGraph`](graph::IntoGraph) trait.
//! 2. **(Optionally) validate**: the [`Validator`](graph::Validator) reports
//!    structural findings (cycles, disconnection, arity, dependencies) as
//!    data; it never blocks generation.
//! 3. **Generate**: a [`Generator`](generator::Generator) borrows an explicit
//!    [`NodeRegistry`](registry::NodeRegistry) and
//!    [`LanguageRegistry`](lang::LanguageRegistry) and renders the graph.
//!    Generation is total: incomplete or partially-invalid graphs still
//!    produce output, with non-fatal warnings collected alongside it.
//!
//! ## Quick Start
//!
//! ```rust
//! use kumiki::prelude::*;
//! use serde_json::json;
//!
//! let nodes = NodeRegistry::with_defaults();
//! let languages = LanguageRegistry::with_defaults();
//!
//! // One variable binding: x = 10
//! let mut variable = nodes.create_node(NodeKind::VariableDef, "n1").unwrap();
//! variable.properties.insert("name".to_string(), json!("x"));
//! variable.properties.insert("value".to_string(), json!(10));
//! let graph = Graph {
//!     nodes: vec![variable],
//!     edges: vec![],
//! };
//!
//! let generator = Generator::new(&nodes, &languages);
//! let generated = generator.generate(&graph, "python");
//! assert!(generated.source.contains("x = 10"));
//! assert_eq!(generated.file_extension, "py");
//! ```

pub mod error;
pub mod generator;
pub mod graph;
pub mod lang;
pub mod prelude;
pub mod registry;
