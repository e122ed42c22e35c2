use crate::error::GenerationWarning;
use crate::graph::{Graph, Node, NodeKind, Socket};
use crate::lang::{BinaryOp, LanguageConfig, fill_template};
use crate::registry::NodeRegistry;
use ahash::{AHashMap, AHashSet};

/// Per-run generation state plus the emission primitives handlers write
/// through.
///
/// A context is created at the start of a run and discarded at its end. The
/// graph is read-only; every piece of mutable state (buffer, indent depth,
/// visited and declared sets, warnings) lives here, which is what makes
/// concurrent runs over one graph safe.
pub struct EmitContext<'a> {
    graph: &'a Graph,
    registry: &'a NodeRegistry,
    config: &'a LanguageConfig,

    buffer: String,
    indent: usize,
    visited: AHashSet<String>,
    /// Expression nodes consumed inline whose temporary binding has not been
    /// emitted yet. A repeat read moves the node out of this set by writing
    /// the binding first.
    inlined: AHashSet<String>,
    declared_vars: AHashSet<String>,
    declared_fns: AHashSet<String>,
    warnings: Vec<GenerationWarning>,

    /// (target node, target socket) -> connected (source node, source socket)
    /// pairs, in edge-list order. Built once up front.
    incoming: AHashMap<(String, String), Vec<(String, String)>>,
    /// (source node, source socket) -> connected target node ids, in
    /// edge-list order.
    outgoing: AHashMap<(String, String), Vec<String>>,
}

impl<'a> EmitContext<'a> {
    pub(crate) fn new(
        graph: &'a Graph,
        registry: &'a NodeRegistry,
        config: &'a LanguageConfig,
    ) -> Self {
        let mut incoming: AHashMap<(String, String), Vec<(String, String)>> = AHashMap::new();
        let mut outgoing: AHashMap<(String, String), Vec<String>> = AHashMap::new();
        for edge in &graph.edges {
            incoming
                .entry((edge.target_node.clone(), edge.target_socket.clone()))
                .or_default()
                .push((edge.source_node.clone(), edge.source_socket.clone()));
            outgoing
                .entry((edge.source_node.clone(), edge.source_socket.clone()))
                .or_default()
                .push(edge.target_node.clone());
        }

        Self {
            graph,
            registry,
            config,
            buffer: String::new(),
            indent: 0,
            visited: AHashSet::new(),
            inlined: AHashSet::new(),
            declared_vars: AHashSet::new(),
            declared_fns: AHashSet::new(),
            warnings: Vec::new(),
            incoming,
            outgoing,
        }
    }

    /// The active language configuration.
    pub fn config(&self) -> &'a LanguageConfig {
        self.config
    }

    // --- Run driver -----------------------------------------------------

    pub(crate) fn run(&mut self) {
        if self.graph.nodes.is_empty() {
            let comment = self.config.comment("No nodes to generate");
            self.write_line(&comment);
            return;
        }

        let header = self.config.comment("Code generated from a node graph");
        self.write_line(&header);
        for line in self.config.headers.clone() {
            self.write_line(&line);
        }
        self.write_line("");

        for node_id in self.entry_points() {
            self.process(&node_id);
        }

        for line in self.config.footers.clone() {
            self.write_line(&line);
        }
    }

    /// Entry points are nodes none of whose flow inputs has an incoming edge;
    /// a node without flow inputs qualifies vacuously. A graph with no entry
    /// points at all (every flow input fed, e.g. a pure flow cycle) falls
    /// back to all nodes in input order rather than generating nothing.
    fn entry_points(&self) -> Vec<String> {
        let entries: Vec<String> = self
            .graph
            .nodes
            .iter()
            .filter(|n| {
                n.flow_inputs()
                    .all(|s| !self.incoming.contains_key(&(n.id.clone(), s.id.clone())))
            })
            .map(|n| n.id.clone())
            .collect();

        if entries.is_empty() {
            self.graph.nodes.iter().map(|n| n.id.clone()).collect()
        } else {
            entries
        }
    }

    /// Emits a node's code at most once per run. The visited guard is also
    /// what terminates traversal on cyclic graphs, independent of whether the
    /// validator ever ran.
    pub fn process(&mut self, node_id: &str) {
        if !self.visited.insert(node_id.to_string()) {
            return;
        }
        let graph = self.graph;
        let Some(node) = graph.node(node_id) else {
            self.warn(GenerationWarning::MissingEdgeEndpoint {
                node_id: node_id.to_string(),
            });
            return;
        };

        if let Some(comment) = node.property_str("comment") {
            for line in comment.lines() {
                let rendered = self.config.comment(line);
                self.write_line(&rendered);
            }
        }

        let registry = self.registry;
        match registry.spec(node.kind) {
            Some(spec) => spec.handler().emit(node, self),
            None => {
                let marker = self
                    .config
                    .comment(&format!("unsupported node: {}", node.kind));
                self.write_line(&marker);
                self.warn(GenerationWarning::UnregisteredKind {
                    node_id: node.id.clone(),
                    kind: node.kind.to_string(),
                });
                // No handler to propagate control, so follow every flow
                // output here to keep downstream nodes reachable.
                let sockets: Vec<String> = node.flow_outputs().map(|s| s.id.clone()).collect();
                for socket_id in sockets {
                    self.follow_flow(node, &socket_id);
                }
            }
        }
    }

    pub(crate) fn finish(self) -> (String, Vec<GenerationWarning>) {
        (self.buffer, self.warnings)
    }

    // --- Emission primitives --------------------------------------------

    /// Writes one line at the current indent depth.
    pub fn write_line(&mut self, text: &str) {
        if text.is_empty() {
            self.buffer.push('\n');
            return;
        }
        for _ in 0..self.indent {
            self.buffer.push_str(&self.config.indent_unit);
        }
        self.buffer.push_str(text);
        self.buffer.push('\n');
    }

    /// Writes a simple statement line, appending the language's terminator.
    pub fn write_stmt(&mut self, text: &str) {
        let terminator = &self.config.terminator;
        if terminator.is_empty() {
            self.write_line(text);
        } else {
            let line = format!("{}{}", text, terminator);
            self.write_line(&line);
        }
    }

    /// Writes a block header and increases the indent depth. Emits the
    /// block-start token on its own line where the language keeps it distinct
    /// from the header.
    pub fn open_block(&mut self, header: &str) {
        self.write_line(header);
        if let Some(start) = self.config.block_start.clone() {
            self.write_line(&start);
        }
        self.indent += 1;
    }

    /// Dedents and writes the else header at the enclosing depth, then
    /// re-indents for the else branch. The else template carries any block
    /// transition token itself.
    pub fn else_block(&mut self) {
        self.indent = self.indent.saturating_sub(1);
        let header = self.config.statements.else_header.clone();
        self.write_line(&header);
        self.indent += 1;
    }

    /// Decreases the indent depth and writes the block-end token, if the
    /// language uses one.
    pub fn close_block(&mut self) {
        self.indent = self.indent.saturating_sub(1);
        if let Some(end) = self.config.block_end.clone() {
            self.write_line(&end);
        }
    }

    pub fn warn(&mut self, warning: GenerationWarning) {
        self.warnings.push(warning);
    }

    // --- Flow traversal -------------------------------------------------

    /// Recursively processes every target connected to the named flow output,
    /// in edge-discovery order.
    pub fn follow_flow(&mut self, node: &Node, socket_id: &str) {
        let targets = self
            .outgoing
            .get(&(node.id.clone(), socket_id.to_string()))
            .cloned()
            .unwrap_or_default();
        for target in targets {
            self.process(&target);
        }
    }

    pub fn has_flow_targets(&self, node: &Node, socket_id: &str) -> bool {
        self.outgoing
            .contains_key(&(node.id.clone(), socket_id.to_string()))
    }

    // --- Declared-name tracking -----------------------------------------

    /// Records a variable name; returns true the first time it is seen, so
    /// handlers can pick the definition template over plain assignment.
    pub fn declare_var(&mut self, name: &str) -> bool {
        self.declared_vars.insert(name.to_string())
    }

    pub fn declare_function(&mut self, name: &str) -> bool {
        self.declared_fns.insert(name.to_string())
    }

    /// Writes the statement binding an expression node's value to its
    /// temporary name, picking the definition template on first declaration
    /// and the assignment template afterwards.
    pub fn write_temp_binding(&mut self, node: &Node) {
        let expr = self.expression_text(node);
        let temp = self.temp_name(node);
        let template = if self.declare_var(&temp) {
            self.config.statements.variable_def.clone()
        } else {
            self.config.statements.assignment.clone()
        };
        let stmt = fill_template(&template, &[("name", &temp), ("value", &expr)]);
        self.write_stmt(&stmt);
    }

    /// The synthesized temporary name binding a processed expression node's
    /// result.
    pub fn temp_name(&self, node: &Node) -> String {
        let sanitized: String = node
            .id
            .chars()
            .map(|c| if c.is_alphanumeric() { c } else { '_' })
            .collect();
        format!("_temp_{}", sanitized)
    }

    // --- Value resolution ------------------------------------------------

    /// Resolves the named input socket to a code fragment. Never fails: a
    /// connected socket resolves through its source, an unconnected one walks
    /// the fallback chain (node property keyed by socket id or lower-cased
    /// socket name, then the socket default, then a typed zero value).
    pub fn resolve_input(&mut self, node: &Node, socket_id: &str) -> String {
        let Some(socket) = node.input_socket(socket_id) else {
            self.warn(GenerationWarning::UnresolvedInput {
                node_id: node.id.clone(),
                socket_id: socket_id.to_string(),
            });
            return self.config.null_literal.clone();
        };

        let sources = self
            .incoming
            .get(&(node.id.clone(), socket_id.to_string()))
            .cloned()
            .unwrap_or_default();

        if let Some((source_id, source_socket)) = sources.first() {
            let graph = self.graph;
            match graph.node(source_id) {
                Some(source) => return self.resolve_source(source, source_socket),
                None => {
                    self.warn(GenerationWarning::MissingEdgeEndpoint {
                        node_id: source_id.clone(),
                    });
                }
            }
        }

        let property = node
            .property(socket_id)
            .or_else(|| node.property(&socket.name.to_lowercase()));
        if let Some(value) = property {
            return self.render_socket_value(socket, value);
        }
        if let Some(default) = &socket.default {
            return self.render_socket_value(socket, default);
        }
        self.config.zero_value(socket.kind)
    }

    /// Derives a reference to a source node's output value.
    ///
    /// Expression sources whose temporary binding was already emitted are
    /// referenced through that name; unvisited ones are inlined as an
    /// operator expression and marked visited so the statement sweep will not
    /// emit them again. An inlined source read a second time gets its binding
    /// written on the spot, so fan-out never references an unassigned name.
    /// Everything else is processed first (emitting its statement if needed),
    /// then asked for a value reference through its handler's extraction
    /// hook, with a structural label as the last resort.
    fn resolve_source(&mut self, source: &'a Node, source_socket: &str) -> String {
        if source.kind.is_expression() {
            if self.visited.contains(&source.id) {
                if self.inlined.remove(&source.id) {
                    self.write_temp_binding(source);
                }
                return self.temp_name(source);
            }
            self.visited.insert(source.id.clone());
            self.inlined.insert(source.id.clone());
            return self.expression_text(source);
        }

        if !self.visited.contains(&source.id) {
            self.process(&source.id);
        }

        let registry = self.registry;
        if let Some(spec) = registry.spec(source.kind) {
            if let Some(reference) = spec.handler().value_ref(source, self) {
                return reference;
            }
        }

        let label = registry
            .spec(source.kind)
            .map(|s| s.label.to_string())
            .unwrap_or_else(|| source.kind.to_string());
        let socket_name = source
            .output_socket(source_socket)
            .map(|s| s.name.clone())
            .unwrap_or_else(|| source_socket.to_string());
        self.warn(GenerationWarning::UnresolvedInput {
            node_id: source.id.clone(),
            socket_id: source_socket.to_string(),
        });
        format!("{}.{}", label, socket_name)
    }

    /// Renders a property or default value for a socket. A string on a
    /// boolean or number socket is treated as an expression snippet typed in
    /// by the user (`x > 10`) and inserted verbatim; everywhere else strings
    /// are quoted literals.
    fn render_socket_value(&self, socket: &Socket, value: &serde_json::Value) -> String {
        use crate::graph::SocketKind;
        match value {
            serde_json::Value::String(s)
                if matches!(socket.kind, SocketKind::Boolean | SocketKind::Number) =>
            {
                s.clone()
            }
            other => self.config.render_value(other),
        }
    }

    /// The inline operator expression for an arithmetic/logic/comparison
    /// node, with operands resolved recursively.
    pub fn expression_text(&mut self, node: &Node) -> String {
        if let Some(op) = BinaryOp::for_node_kind(node.kind) {
            let a = self.resolve_input(node, "a");
            let b = self.resolve_input(node, "b");
            return self.config.binary_expression(op, &a, &b);
        }
        if node.kind == NodeKind::Not {
            let value = self.resolve_input(node, "value");
            return match &self.config.operators.not {
                Some(template) => fill_template(template, &[("value", &value)]),
                None => {
                    // The language declared no unary-not spelling; degrade to
                    // the operand rather than failing the run.
                    self.warn(GenerationWarning::UnresolvedInput {
                        node_id: node.id.clone(),
                        socket_id: "value".to_string(),
                    });
                    value
                }
            };
        }
        self.config.null_literal.clone()
    }
}
