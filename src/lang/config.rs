use crate::graph::{NodeKind, SocketKind};

/// A binary operator understood by every language configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulo,
    And,
    Or,
    Equal,
    NotEqual,
    Greater,
    GreaterEq,
    Less,
    LessEq,
}

impl BinaryOp {
    /// Maps an expression node kind onto its operator, if it has one.
    pub fn for_node_kind(kind: NodeKind) -> Option<BinaryOp> {
        match kind {
            NodeKind::Add => Some(BinaryOp::Add),
            NodeKind::Subtract => Some(BinaryOp::Subtract),
            NodeKind::Multiply => Some(BinaryOp::Multiply),
            NodeKind::Divide => Some(BinaryOp::Divide),
            NodeKind::Modulo => Some(BinaryOp::Modulo),
            NodeKind::And => Some(BinaryOp::And),
            NodeKind::Or => Some(BinaryOp::Or),
            NodeKind::Equal => Some(BinaryOp::Equal),
            NodeKind::NotEqual => Some(BinaryOp::NotEqual),
            NodeKind::Greater => Some(BinaryOp::Greater),
            NodeKind::GreaterEq => Some(BinaryOp::GreaterEq),
            NodeKind::Less => Some(BinaryOp::Less),
            NodeKind::LessEq => Some(BinaryOp::LessEq),
            _ => None,
        }
    }
}

/// Statement templates, one per emittable statement form.
///
/// Templates use `{placeholder}` substitution. Block headers carry their own
/// block-opening token where the language fuses the two (`if {condition}:`,
/// `if ({condition}) {`); the statement terminator is appended by the
/// generator and must not appear in the templates themselves.
#[derive(Debug, Clone)]
pub struct StatementTemplates {
    /// `{condition}`
    pub if_header: String,
    /// No placeholders; carries any block transition (`} else {`).
    pub else_header: String,
    /// `{var}`, `{start}`, `{end}`
    pub for_header: String,
    /// `{condition}`
    pub while_header: String,
    /// `{name}`, `{params}`
    pub function_def: String,
    /// `{name}`, `{args}`
    pub function_call: String,
    /// `{value}`
    pub return_statement: String,
    /// `{name}`, `{value}` — first binding of a name.
    pub variable_def: String,
    /// `{name}`, `{value}` — re-binding of an already-declared name.
    pub assignment: String,
    /// `{value}`
    pub print: String,
    /// `{name}`, `{prompt}`
    pub input: String,
}

/// Operator templates; binary entries use `{a}` and `{b}`, unary not uses
/// `{value}`. Binary templates are parenthesized so nested inline expressions
/// keep their grouping without a precedence table.
#[derive(Debug, Clone)]
pub struct OperatorTemplates {
    pub add: String,
    pub subtract: String,
    pub multiply: String,
    pub divide: String,
    pub modulo: String,
    pub and: String,
    pub or: String,
    pub equal: String,
    pub not_equal: String,
    pub greater: String,
    pub greater_eq: String,
    pub less: String,
    pub less_eq: String,
    pub not: Option<String>,
}

impl OperatorTemplates {
    pub fn binary(&self, op: BinaryOp) -> &str {
        match op {
            BinaryOp::Add => &self.add,
            BinaryOp::Subtract => &self.subtract,
            BinaryOp::Multiply => &self.multiply,
            BinaryOp::Divide => &self.divide,
            BinaryOp::Modulo => &self.modulo,
            BinaryOp::And => &self.and,
            BinaryOp::Or => &self.or,
            BinaryOp::Equal => &self.equal,
            BinaryOp::NotEqual => &self.not_equal,
            BinaryOp::Greater => &self.greater,
            BinaryOp::GreaterEq => &self.greater_eq,
            BinaryOp::Less => &self.less,
            BinaryOp::LessEq => &self.less_eq,
        }
    }
}

/// The immutable descriptor parameterizing the generator for one target
/// language. One language-agnostic traversal reads everything
/// language-specific from here.
#[derive(Debug, Clone)]
pub struct LanguageConfig {
    pub name: String,
    pub file_extension: String,
    /// Identifier for syntax highlighting in downstream viewers.
    pub syntax: String,

    /// `{text}`
    pub line_comment: String,
    pub block_comment: Option<(String, String)>,

    pub statements: StatementTemplates,
    pub operators: OperatorTemplates,

    pub indent_unit: String,
    pub terminator: String,
    /// Emitted on its own line after a block header, where the language keeps
    /// the two distinct. `None` when the header template carries the token.
    pub block_start: Option<String>,
    pub block_end: Option<String>,

    pub true_literal: String,
    pub false_literal: String,
    pub null_literal: String,

    pub string_quote: char,
    /// Escape-sequence table applied inside string literals, in order.
    pub escapes: Vec<(char, String)>,

    /// Standard imports/boilerplate emitted after the header comment.
    pub headers: Vec<String>,
    /// Closing boilerplate appended by the post-pass.
    pub footers: Vec<String>,
}

impl LanguageConfig {
    /// Renders `text` as a line comment.
    pub fn comment(&self, text: &str) -> String {
        fill_template(&self.line_comment, &[("text", text)])
    }

    /// Renders a JSON scalar in this language's literal syntax. Integral
    /// numbers keep their integer spelling; strings are quoted and escaped.
    /// Non-scalar values degrade to the null literal.
    pub fn render_value(&self, value: &serde_json::Value) -> String {
        match value {
            serde_json::Value::Bool(true) => self.true_literal.clone(),
            serde_json::Value::Bool(false) => self.false_literal.clone(),
            serde_json::Value::Number(n) => {
                // Integer-backed numbers stay exact; only float-backed values
                // take the f64 path.
                if let Some(i) = n.as_i64() {
                    i.to_string()
                } else if let Some(u) = n.as_u64() {
                    u.to_string()
                } else {
                    match n.as_f64() {
                        Some(f) if f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", f as i64),
                        Some(f) => format!("{}", f),
                        None => self.null_literal.clone(),
                    }
                }
            }
            serde_json::Value::String(s) => self.render_string(s),
            _ => self.null_literal.clone(),
        }
    }

    /// Quotes and escapes a string literal. Multiline content is handled by
    /// the escape table's newline entry.
    pub fn render_string(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len() + 2);
        out.push(self.string_quote);
        for ch in text.chars() {
            match self.escapes.iter().find(|(c, _)| *c == ch) {
                Some((_, replacement)) => out.push_str(replacement),
                None => out.push(ch),
            }
        }
        out.push(self.string_quote);
        out
    }

    /// The kind-appropriate zero value, rendered in this language. This is
    /// the final step of the resolution fallback chain; it never fails.
    pub fn zero_value(&self, kind: SocketKind) -> String {
        match kind {
            SocketKind::Number => "0".to_string(),
            SocketKind::String => self.render_string(""),
            SocketKind::Boolean => self.false_literal.clone(),
            SocketKind::Any | SocketKind::Flow => self.null_literal.clone(),
        }
    }

    /// Applies a binary operator template to two rendered operands.
    pub fn binary_expression(&self, op: BinaryOp, a: &str, b: &str) -> String {
        fill_template(self.operators.binary(op), &[("a", a), ("b", b)])
    }
}

/// Replaces each `{key}` occurrence with its value. Unknown placeholders are
/// left in place; unused pairs are ignored, so templates may omit
/// placeholders they have no use for.
pub fn fill_template(template: &str, pairs: &[(&str, &str)]) -> String {
    let mut out = template.to_string();
    for (key, value) in pairs {
        out = out.replace(&format!("{{{}}}", key), value);
    }
    out
}
