//! Prelude module for convenient imports
//!
//! Re-exports the most commonly used types from the kumiki crate. Import this
//! module to get access to the core functionality without having to import
//! each type individually.
//!
//! # Example
//!
//! ```rust
//! use kumiki::prelude::*;
//!
//! let nodes = NodeRegistry::with_defaults();
//! let languages = LanguageRegistry::with_defaults();
//! let generator = Generator::new(&nodes, &languages);
//! let generated = generator.generate(&Graph::default(), "lua");
//! assert!(generated.source.starts_with("--"));
//! ```

// Graph model
pub use crate::graph::{
    ArityRule, Edge, Graph, IntoGraph, Node, NodeKind, Socket, SocketDirection, SocketKind,
    ValidationReport, Validator, compatible,
};

// Registries and generation
pub use crate::generator::{EmitContext, GeneratedCode, Generator};
pub use crate::lang::{BinaryOp, LanguageConfig, LanguageRegistry, fill_template};
pub use crate::registry::{NodeCategory, NodeHandler, NodeRegistry, NodeSpec};

// Error types
pub use crate::error::{GenerationWarning, GraphConversionError, ValidationError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
