mod session;

pub use session::EmitContext;

use crate::error::GenerationWarning;
use crate::graph::Graph;
use crate::lang::LanguageRegistry;
use crate::registry::NodeRegistry;

/// The result of one generation run: the rendered source plus the metadata a
/// caller needs to present or save it, and any non-fatal warnings collected
/// along the way.
#[derive(Debug, Clone)]
pub struct GeneratedCode {
    pub source: String,
    pub file_extension: String,
    pub syntax: String,
    pub warnings: Vec<GenerationWarning>,
}

/// The code-generation engine.
///
/// A generator borrows its two registries and owns no per-run state; each
/// call to [`generate`](Generator::generate) builds an independent
/// [`EmitContext`], so one generator can serve concurrent runs over the same
/// read-only graph (for example, rendering several target languages at once).
///
/// Generation is total: it always returns a [`GeneratedCode`] for any graph
/// whose edges are direction-consistent. Unresolvable inputs degrade to safe
/// literals, unregistered kinds to inline comment markers, and unknown
/// language names to the registry's fallback, each recorded as a warning.
pub struct Generator<'a> {
    nodes: &'a NodeRegistry,
    languages: &'a LanguageRegistry,
}

impl<'a> Generator<'a> {
    pub fn new(nodes: &'a NodeRegistry, languages: &'a LanguageRegistry) -> Self {
        Self { nodes, languages }
    }

    /// Renders the graph as source code in the named language. An
    /// unregistered name falls back to the registry's default language and
    /// records a warning; the output is otherwise identical to requesting the
    /// fallback directly.
    pub fn generate(&self, graph: &Graph, language: &str) -> GeneratedCode {
        let (config, fallback_warning) = match self.languages.get(language) {
            Some(config) => (config, None),
            None => {
                let fallback = self.languages.fallback();
                let warning = GenerationWarning::UnknownLanguage {
                    requested: language.to_string(),
                    fallback: fallback.name.clone(),
                };
                (fallback, Some(warning))
            }
        };

        let mut ctx = EmitContext::new(graph, self.nodes, config);
        if let Some(warning) = fallback_warning {
            ctx.warn(warning);
        }
        ctx.run();
        let (source, warnings) = ctx.finish();

        GeneratedCode {
            source,
            file_extension: config.file_extension.clone(),
            syntax: config.syntax.clone(),
            warnings,
        }
    }
}
