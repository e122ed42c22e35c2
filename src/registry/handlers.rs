//! Generation handlers for the built-in node kinds.
//!
//! Every handler emits its own statement(s) through the context's primitives
//! and then propagates to its connected flow outputs: selectively per named
//! branch for branching kinds, unconditionally for linear kinds.

use super::NodeHandler;
use crate::generator::EmitContext;
use crate::graph::Node;
use crate::lang::fill_template;

/// Shared statement handler for every arithmetic, logic, and comparison
/// kind. Processed as a statement, an expression node binds its value to a
/// synthesized temporary; consumers resolving it afterwards reference that
/// name.
pub struct ExpressionHandler;

impl NodeHandler for ExpressionHandler {
    fn emit(&self, node: &Node, ctx: &mut EmitContext<'_>) {
        ctx.write_temp_binding(node);
    }
}

pub struct IfHandler;

impl NodeHandler for IfHandler {
    fn emit(&self, node: &Node, ctx: &mut EmitContext<'_>) {
        let condition = ctx.resolve_input(node, "condition");
        let header = fill_template(
            &ctx.config().statements.if_header,
            &[("condition", &condition)],
        );
        ctx.open_block(&header);
        ctx.follow_flow(node, "then");
        if ctx.has_flow_targets(node, "else") {
            ctx.else_block();
            ctx.follow_flow(node, "else");
        }
        ctx.close_block();
        ctx.follow_flow(node, "next");
    }
}

pub struct WhileHandler;

impl NodeHandler for WhileHandler {
    fn emit(&self, node: &Node, ctx: &mut EmitContext<'_>) {
        let condition = ctx.resolve_input(node, "condition");
        let header = fill_template(
            &ctx.config().statements.while_header,
            &[("condition", &condition)],
        );
        ctx.open_block(&header);
        ctx.follow_flow(node, "body");
        ctx.close_block();
        ctx.follow_flow(node, "next");
    }
}

pub struct ForLoopHandler;

impl NodeHandler for ForLoopHandler {
    fn emit(&self, node: &Node, ctx: &mut EmitContext<'_>) {
        let var = node
            .property_str("variable")
            .unwrap_or_else(|| "i".to_string());
        let start = ctx.resolve_input(node, "start");
        let end = ctx.resolve_input(node, "end");
        let header = fill_template(
            &ctx.config().statements.for_header,
            &[("var", &var), ("start", &start), ("end", &end)],
        );
        ctx.declare_var(&var);
        ctx.open_block(&header);
        ctx.follow_flow(node, "body");
        ctx.close_block();
        ctx.follow_flow(node, "next");
    }
}

pub struct FunctionDefHandler;

impl NodeHandler for FunctionDefHandler {
    fn emit(&self, node: &Node, ctx: &mut EmitContext<'_>) {
        let name = node
            .property_str("name")
            .unwrap_or_else(|| "my_function".to_string());
        let params = node.property_str("params").unwrap_or_default();
        if ctx.declare_function(&name) {
            let header = fill_template(
                &ctx.config().statements.function_def,
                &[("name", &name), ("params", &params)],
            );
            ctx.open_block(&header);
            ctx.follow_flow(node, "body");
            ctx.close_block();
        } else {
            let marker = ctx
                .config()
                .comment(&format!("duplicate definition of {}", name));
            ctx.write_line(&marker);
        }
        ctx.follow_flow(node, "next");
    }
}

pub struct FunctionCallHandler;

impl FunctionCallHandler {
    fn call_text(node: &Node, ctx: &EmitContext<'_>) -> String {
        let name = node
            .property_str("name")
            .unwrap_or_else(|| "my_function".to_string());
        let args = node.property_str("args").unwrap_or_default();
        fill_template(
            &ctx.config().statements.function_call,
            &[("name", &name), ("args", &args)],
        )
    }
}

impl NodeHandler for FunctionCallHandler {
    fn emit(&self, node: &Node, ctx: &mut EmitContext<'_>) {
        let stmt = Self::call_text(node, ctx);
        ctx.write_stmt(&stmt);
        ctx.follow_flow(node, "next");
    }

    /// Read as a data source, a call is re-spelled inline at the point of
    /// use; the target languages all nest call expressions.
    fn value_ref(&self, node: &Node, ctx: &mut EmitContext<'_>) -> Option<String> {
        Some(Self::call_text(node, ctx))
    }
}

pub struct ReturnHandler;

impl NodeHandler for ReturnHandler {
    fn emit(&self, node: &Node, ctx: &mut EmitContext<'_>) {
        let value = ctx.resolve_input(node, "value");
        let stmt = fill_template(
            &ctx.config().statements.return_statement,
            &[("value", &value)],
        );
        ctx.write_stmt(&stmt);
    }
}

pub struct VariableDefHandler;

impl NodeHandler for VariableDefHandler {
    fn emit(&self, node: &Node, ctx: &mut EmitContext<'_>) {
        let name = node
            .property_str("name")
            .unwrap_or_else(|| "my_var".to_string());
        let value = ctx.resolve_input(node, "value");
        let statements = &ctx.config().statements;
        let template = if ctx.declare_var(&name) {
            statements.variable_def.clone()
        } else {
            statements.assignment.clone()
        };
        let stmt = fill_template(&template, &[("name", &name), ("value", &value)]);
        ctx.write_stmt(&stmt);
        ctx.follow_flow(node, "next");
    }

    fn value_ref(&self, node: &Node, _ctx: &mut EmitContext<'_>) -> Option<String> {
        Some(
            node.property_str("name")
                .unwrap_or_else(|| "my_var".to_string()),
        )
    }
}

pub struct VariableGetHandler;

impl NodeHandler for VariableGetHandler {
    /// A getter emits no statement of its own.
    fn emit(&self, _node: &Node, _ctx: &mut EmitContext<'_>) {}

    fn value_ref(&self, node: &Node, _ctx: &mut EmitContext<'_>) -> Option<String> {
        Some(
            node.property_str("name")
                .unwrap_or_else(|| "my_var".to_string()),
        )
    }
}

pub struct PrintHandler;

impl NodeHandler for PrintHandler {
    fn emit(&self, node: &Node, ctx: &mut EmitContext<'_>) {
        let value = ctx.resolve_input(node, "value");
        let stmt = fill_template(&ctx.config().statements.print, &[("value", &value)]);
        ctx.write_stmt(&stmt);
        ctx.follow_flow(node, "next");
    }
}

pub struct InputHandler;

impl NodeHandler for InputHandler {
    fn emit(&self, node: &Node, ctx: &mut EmitContext<'_>) {
        let name = node
            .property_str("name")
            .unwrap_or_else(|| "user_input".to_string());
        let prompt_text = node.property_str("prompt").unwrap_or_default();
        let prompt = ctx.config().render_string(&prompt_text);
        let stmt = fill_template(
            &ctx.config().statements.input,
            &[("name", &name), ("prompt", &prompt)],
        );
        ctx.declare_var(&name);
        ctx.write_stmt(&stmt);
        ctx.follow_flow(node, "next");
    }

    fn value_ref(&self, node: &Node, _ctx: &mut EmitContext<'_>) -> Option<String> {
        Some(
            node.property_str("name")
                .unwrap_or_else(|| "user_input".to_string()),
        )
    }
}
