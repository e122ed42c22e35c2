pub mod catalog;
pub mod config;

pub use config::*;

use ahash::AHashMap;
use itertools::Itertools;

/// An explicit catalog of language configurations, passed into the generator
/// by value reference rather than living as a module-level singleton, so
/// concurrent or test-isolated sessions cannot interfere.
///
/// Lookup is case-insensitive. A name that was never registered resolves to
/// the fallback configuration (Python for [`LanguageRegistry::with_defaults`]).
#[derive(Debug, Clone)]
pub struct LanguageRegistry {
    fallback: String,
    languages: AHashMap<String, LanguageConfig>,
}

impl LanguageRegistry {
    /// Creates a registry containing only `fallback`, which also becomes the
    /// configuration unregistered names resolve to.
    pub fn new(fallback: LanguageConfig) -> Self {
        let fallback_name = fallback.name.to_lowercase();
        let mut languages = AHashMap::new();
        languages.insert(fallback_name.clone(), fallback);
        Self {
            fallback: fallback_name,
            languages,
        }
    }

    /// The built-in catalog: Python (fallback), JavaScript, Lua, and Ruby.
    pub fn with_defaults() -> Self {
        Self::new(catalog::python())
            .with_language(catalog::javascript())
            .with_language(catalog::lua())
            .with_language(catalog::ruby())
    }

    pub fn register(&mut self, config: LanguageConfig) {
        self.languages.insert(config.name.to_lowercase(), config);
    }

    pub fn with_language(mut self, config: LanguageConfig) -> Self {
        self.register(config);
        self
    }

    pub fn get(&self, name: &str) -> Option<&LanguageConfig> {
        self.languages.get(&name.to_lowercase())
    }

    pub fn fallback(&self) -> &LanguageConfig {
        // The fallback entry is inserted at construction and never removed.
        &self.languages[&self.fallback]
    }

    /// Registered language names, sorted for stable display.
    pub fn names(&self) -> Vec<&str> {
        self.languages.keys().map(String::as_str).sorted().collect()
    }
}

impl Default for LanguageRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
