pub mod factories;
pub mod handlers;

use crate::generator::EmitContext;
use crate::graph::{Graph, Node, NodeKind, SocketKind};
use ahash::AHashMap;

/// The contract for emitting one node kind's code.
///
/// A handler, after writing its own statement(s) through the context's
/// primitives, must propagate to its connected flow-output targets:
/// selectively per named branch for branching kinds, unconditionally for
/// linear kinds. This propagation contract is enforced by convention, not by
/// the type system.
pub trait NodeHandler: Send + Sync {
    fn emit(&self, node: &Node, ctx: &mut EmitContext<'_>);

    /// The code fragment referencing this node's output value, if it has
    /// one. Input resolution consults this after the node has been
    /// processed; returning `None` falls through to the structural label.
    fn value_ref(&self, node: &Node, ctx: &mut EmitContext<'_>) -> Option<String> {
        let _ = (node, ctx);
        None
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeCategory {
    FlowControl,
    Variable,
    Arithmetic,
    Logic,
    Io,
}

/// Everything the engine knows about one node kind: its display label, its
/// palette category, a pure factory producing its socket layout and default
/// property bag, and its generation handler.
pub struct NodeSpec {
    pub label: &'static str,
    pub category: NodeCategory,
    factory: fn(&str) -> Node,
    handler: Box<dyn NodeHandler>,
}

impl NodeSpec {
    pub fn new(
        label: &'static str,
        category: NodeCategory,
        factory: fn(&str) -> Node,
        handler: Box<dyn NodeHandler>,
    ) -> Self {
        Self {
            label,
            category,
            factory,
            handler,
        }
    }

    pub fn handler(&self) -> &dyn NodeHandler {
        self.handler.as_ref()
    }

    /// Instantiates a node of this kind with its default sockets and
    /// properties.
    pub fn create(&self, id: &str) -> Node {
        (self.factory)(id)
    }
}

/// Registers the shared expression handler for a family of operator kinds,
/// all of which use the parameterized binary-op socket factory.
macro_rules! register_binary_ops {
    ( $registry:expr; $( ($kind:path, $label:expr, $category:expr, $operand:path, $result:path) ),* $(,)? ) => {
        $(
            $registry.register(
                $kind,
                NodeSpec::new(
                    $label,
                    $category,
                    |id| factories::binary_op_node(id, $kind, $operand, $result),
                    Box::new(handlers::ExpressionHandler),
                ),
            );
        )*
    };
}

/// An explicit catalog mapping each closed node kind to its
/// [`NodeSpec`]. Constructed once and passed into the generator and
/// validator; there is no ambient global registry.
#[derive(Default)]
pub struct NodeRegistry {
    specs: AHashMap<NodeKind, NodeSpec>,
}

impl NodeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The full built-in catalog.
    pub fn with_defaults() -> Self {
        use NodeCategory::*;
        let mut registry = Self::new();

        registry.register(
            NodeKind::If,
            NodeSpec::new("If", FlowControl, factories::if_node, Box::new(handlers::IfHandler)),
        );
        registry.register(
            NodeKind::While,
            NodeSpec::new(
                "While",
                FlowControl,
                factories::while_node,
                Box::new(handlers::WhileHandler),
            ),
        );
        registry.register(
            NodeKind::ForLoop,
            NodeSpec::new(
                "For Loop",
                FlowControl,
                factories::for_loop_node,
                Box::new(handlers::ForLoopHandler),
            ),
        );
        registry.register(
            NodeKind::FunctionDef,
            NodeSpec::new(
                "Function",
                FlowControl,
                factories::function_def_node,
                Box::new(handlers::FunctionDefHandler),
            ),
        );
        registry.register(
            NodeKind::FunctionCall,
            NodeSpec::new(
                "Call Function",
                FlowControl,
                factories::function_call_node,
                Box::new(handlers::FunctionCallHandler),
            ),
        );
        registry.register(
            NodeKind::Return,
            NodeSpec::new(
                "Return",
                FlowControl,
                factories::return_node,
                Box::new(handlers::ReturnHandler),
            ),
        );

        registry.register(
            NodeKind::VariableDef,
            NodeSpec::new(
                "Set Variable",
                Variable,
                factories::variable_def_node,
                Box::new(handlers::VariableDefHandler),
            ),
        );
        registry.register(
            NodeKind::VariableGet,
            NodeSpec::new(
                "Get Variable",
                Variable,
                factories::variable_get_node,
                Box::new(handlers::VariableGetHandler),
            ),
        );

        registry.register(
            NodeKind::Not,
            NodeSpec::new(
                "Not",
                Logic,
                factories::not_node,
                Box::new(handlers::ExpressionHandler),
            ),
        );

        register_binary_ops! { registry;
            (NodeKind::Add, "Add", Arithmetic, SocketKind::Number, SocketKind::Number),
            (NodeKind::Subtract, "Subtract", Arithmetic, SocketKind::Number, SocketKind::Number),
            (NodeKind::Multiply, "Multiply", Arithmetic, SocketKind::Number, SocketKind::Number),
            (NodeKind::Divide, "Divide", Arithmetic, SocketKind::Number, SocketKind::Number),
            (NodeKind::Modulo, "Modulo", Arithmetic, SocketKind::Number, SocketKind::Number),
            (NodeKind::And, "And", Logic, SocketKind::Boolean, SocketKind::Boolean),
            (NodeKind::Or, "Or", Logic, SocketKind::Boolean, SocketKind::Boolean),
            (NodeKind::Equal, "Equal", Logic, SocketKind::Any, SocketKind::Boolean),
            (NodeKind::NotEqual, "Not Equal", Logic, SocketKind::Any, SocketKind::Boolean),
            (NodeKind::Greater, "Greater Than", Logic, SocketKind::Number, SocketKind::Boolean),
            (NodeKind::GreaterEq, "Greater Or Equal", Logic, SocketKind::Number, SocketKind::Boolean),
            (NodeKind::Less, "Less Than", Logic, SocketKind::Number, SocketKind::Boolean),
            (NodeKind::LessEq, "Less Or Equal", Logic, SocketKind::Number, SocketKind::Boolean),
        }

        registry.register(
            NodeKind::Print,
            NodeSpec::new("Print", Io, factories::print_node, Box::new(handlers::PrintHandler)),
        );
        registry.register(
            NodeKind::Input,
            NodeSpec::new("Input", Io, factories::input_node, Box::new(handlers::InputHandler)),
        );

        registry
    }

    pub fn register(&mut self, kind: NodeKind, spec: NodeSpec) {
        self.specs.insert(kind, spec);
    }

    pub fn spec(&self, kind: NodeKind) -> Option<&NodeSpec> {
        self.specs.get(&kind)
    }

    pub fn contains(&self, kind: NodeKind) -> bool {
        self.specs.contains_key(&kind)
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    /// Instantiates a node of the given kind through its registered factory.
    pub fn create_node(&self, kind: NodeKind, id: &str) -> Option<Node> {
        self.specs.get(&kind).map(|spec| spec.create(id))
    }

    /// Fills in socket layouts for nodes that arrived without any, merging
    /// factory default properties under whatever the editor already set.
    /// Lets callers ship compact graph files carrying only id, kind, and
    /// properties.
    pub fn hydrate(&self, graph: &mut Graph) {
        for node in &mut graph.nodes {
            if !node.inputs.is_empty() || !node.outputs.is_empty() {
                continue;
            }
            if let Some(spec) = self.specs.get(&node.kind) {
                let template = spec.create(&node.id);
                node.inputs = template.inputs;
                node.outputs = template.outputs;
                for (key, value) in template.properties {
                    node.properties.entry(key).or_insert(value);
                }
            }
        }
    }
}
