use super::definition::Graph;
use crate::error::ValidationError;
use ahash::{AHashMap, AHashSet};
use itertools::Itertools;

/// Optional per-node bounds on connection counts.
#[derive(Debug, Clone, Copy)]
pub struct ArityRule {
    pub min_inbound: usize,
    pub max_inbound: usize,
    pub min_outbound: usize,
    pub max_outbound: usize,
}

impl Default for ArityRule {
    fn default() -> Self {
        Self {
            min_inbound: 0,
            max_inbound: usize::MAX,
            min_outbound: 0,
            max_outbound: usize::MAX,
        }
    }
}

/// The outcome of a validation pass: all findings, collected and ordered.
#[derive(Debug, Clone)]
pub struct ValidationReport {
    pub valid: bool,
    pub errors: Vec<ValidationError>,
}

/// Advisory structural checks over a graph.
///
/// Validation is opt-in and never required for generation to run; the
/// generator has its own visited-set brake against cycles. Findings are
/// collected into a [`ValidationReport`], never thrown, and callers decide
/// whether to block on them.
#[derive(Debug, Default)]
pub struct Validator {
    arity_rules: AHashMap<String, ArityRule>,
    dependencies: AHashMap<String, Vec<String>>,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Requires the named node's inbound/outbound edge counts to fall within
    /// the rule's bounds.
    pub fn with_arity_rule(mut self, node_id: &str, rule: ArityRule) -> Self {
        self.arity_rules.insert(node_id.to_string(), rule);
        self
    }

    /// Requires the named node to have a direct incoming edge from
    /// `dependency_id`.
    pub fn with_dependency(mut self, node_id: &str, dependency_id: &str) -> Self {
        self.dependencies
            .entry(node_id.to_string())
            .or_default()
            .push(dependency_id.to_string());
        self
    }

    pub fn validate(&self, graph: &Graph) -> ValidationReport {
        let mut errors = Vec::new();

        self.check_cycles(graph, &mut errors);
        self.check_disconnected(graph, &mut errors);
        self.check_arity(graph, &mut errors);
        self.check_dependencies(graph, &mut errors);

        ValidationReport {
            valid: errors.is_empty(),
            errors,
        }
    }

    /// DFS with an explicit recursion stack; any edge back to a node still on
    /// the stack closes a cycle, and the node it points at is reported.
    fn check_cycles(&self, graph: &Graph, errors: &mut Vec<ValidationError>) {
        let mut adjacency: AHashMap<&str, Vec<&str>> = AHashMap::new();
        for edge in &graph.edges {
            adjacency
                .entry(edge.source_node.as_str())
                .or_default()
                .push(edge.target_node.as_str());
        }

        let mut visited: AHashSet<&str> = AHashSet::new();
        let mut on_stack: AHashSet<&str> = AHashSet::new();
        let mut reported: AHashSet<&str> = AHashSet::new();

        for node in &graph.nodes {
            if !visited.contains(node.id.as_str()) {
                Self::cycle_dfs(
                    node.id.as_str(),
                    &adjacency,
                    &mut visited,
                    &mut on_stack,
                    &mut reported,
                    errors,
                );
            }
        }
    }

    fn cycle_dfs<'a>(
        node_id: &'a str,
        adjacency: &AHashMap<&'a str, Vec<&'a str>>,
        visited: &mut AHashSet<&'a str>,
        on_stack: &mut AHashSet<&'a str>,
        reported: &mut AHashSet<&'a str>,
        errors: &mut Vec<ValidationError>,
    ) {
        visited.insert(node_id);
        on_stack.insert(node_id);

        if let Some(targets) = adjacency.get(node_id) {
            for target in targets {
                if on_stack.contains(target) {
                    if reported.insert(target) {
                        errors.push(ValidationError::Cycle {
                            node_id: target.to_string(),
                        });
                    }
                } else if !visited.contains(target) {
                    Self::cycle_dfs(target, adjacency, visited, on_stack, reported, errors);
                }
            }
        }

        on_stack.remove(node_id);
    }

    /// Flags nodes that touch no edge at all. Nodes that declare no sockets
    /// cannot be connected in the first place and are skipped.
    fn check_disconnected(&self, graph: &Graph, errors: &mut Vec<ValidationError>) {
        for node in &graph.nodes {
            if node.inputs.is_empty() && node.outputs.is_empty() {
                continue;
            }
            if !graph.is_connected(&node.id) {
                errors.push(ValidationError::Disconnected {
                    node_id: node.id.clone(),
                });
            }
        }
    }

    fn check_arity(&self, graph: &Graph, errors: &mut Vec<ValidationError>) {
        for (node_id, rule) in self.arity_rules.iter().sorted_by_key(|(id, _)| id.as_str()) {
            let inbound = graph.edges.iter().filter(|e| &e.target_node == node_id).count();
            let outbound = graph.edges.iter().filter(|e| &e.source_node == node_id).count();

            if inbound < rule.min_inbound || inbound > rule.max_inbound {
                errors.push(ValidationError::ArityViolation {
                    node_id: node_id.clone(),
                    direction: "inbound",
                    found: inbound,
                    min: rule.min_inbound,
                    max: rule.max_inbound,
                });
            }
            if outbound < rule.min_outbound || outbound > rule.max_outbound {
                errors.push(ValidationError::ArityViolation {
                    node_id: node_id.clone(),
                    direction: "outbound",
                    found: outbound,
                    min: rule.min_outbound,
                    max: rule.max_outbound,
                });
            }
        }
    }

    fn check_dependencies(&self, graph: &Graph, errors: &mut Vec<ValidationError>) {
        for (node_id, required) in self.dependencies.iter().sorted_by_key(|(id, _)| id.as_str()) {
            for dependency_id in required {
                let satisfied = graph
                    .edges
                    .iter()
                    .any(|e| &e.target_node == node_id && &e.source_node == dependency_id);
                if !satisfied {
                    errors.push(ValidationError::MissingDependency {
                        node_id: node_id.clone(),
                        dependency_id: dependency_id.clone(),
                    });
                }
            }
        }
    }
}
