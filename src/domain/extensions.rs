//! Markdown extensions and the renderer's registration capability.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use tracing::debug;

use super::ConfigError;

/// Markdown extension supplied by the external renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum MarkdownExtension {
    /// GitHub-style `- [ ]` task list checkboxes
    TaskLists,
    /// `==highlighted==` text
    Mark,
    /// `[^1]` footnotes
    Footnote,
    /// Mermaid diagrams in fenced code blocks
    Mermaid,
}

impl MarkdownExtension {
    /// All recognized extensions.
    pub const ALL: &'static [MarkdownExtension] = &[
        MarkdownExtension::TaskLists,
        MarkdownExtension::Mark,
        MarkdownExtension::Footnote,
        MarkdownExtension::Mermaid,
    ];

    /// Canonical identifier used in configuration files.
    pub fn identifier(self) -> &'static str {
        match self {
            MarkdownExtension::TaskLists => "task-lists",
            MarkdownExtension::Mark => "mark",
            MarkdownExtension::Footnote => "footnote",
            MarkdownExtension::Mermaid => "mermaid",
        }
    }

    /// Package name the extension ships under, accepted as an alias.
    pub fn package(self) -> &'static str {
        match self {
            MarkdownExtension::TaskLists => "markdown-it-task-lists",
            MarkdownExtension::Mark => "markdown-it-mark",
            MarkdownExtension::Footnote => "markdown-it-footnote",
            MarkdownExtension::Mermaid => "vitepress-plugin-mermaid",
        }
    }
}

impl fmt::Display for MarkdownExtension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}

impl FromStr for MarkdownExtension {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|ext| ext.identifier() == id || ext.package() == id)
            .ok_or_else(|| ConfigError::UnknownExtension {
                identifier: s.to_string(),
            })
    }
}

/// Extension registry provided by the renderer.
///
/// Extensions may install rendering hooks that run in registration order, so
/// implementors receive them exactly in the order they were declared.
pub trait ExtensionRegistry {
    /// Wire one extension into the markdown pipeline.
    fn register(&mut self, extension: MarkdownExtension);
}

/// Registry that only records what was registered.
#[derive(Debug, Default, Clone)]
pub struct RecordingRegistry {
    registered: Vec<MarkdownExtension>,
}

impl RecordingRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Extensions in registration order.
    pub fn registered(&self) -> &[MarkdownExtension] {
        &self.registered
    }
}

impl ExtensionRegistry for RecordingRegistry {
    fn register(&mut self, extension: MarkdownExtension) {
        self.registered.push(extension);
    }
}

/// Resolve identifiers against the recognized set, preserving order.
pub fn resolve_all(identifiers: &[String]) -> Result<Vec<MarkdownExtension>, ConfigError> {
    identifiers.iter().map(|id| id.parse()).collect()
}

/// Register each extension once, in declaration order.
pub fn register_all(extensions: &[MarkdownExtension], registry: &mut dyn ExtensionRegistry) {
    for ext in extensions {
        debug!("Registering markdown extension: {}", ext);
        registry.register(*ext);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_identifiers_and_aliases() {
        assert_eq!(
            "task-lists".parse::<MarkdownExtension>().unwrap(),
            MarkdownExtension::TaskLists
        );
        assert_eq!(
            "markdown-it-footnote".parse::<MarkdownExtension>().unwrap(),
            MarkdownExtension::Footnote
        );
        assert_eq!(
            "vitepress-plugin-mermaid".parse::<MarkdownExtension>().unwrap(),
            MarkdownExtension::Mermaid
        );
    }

    #[test]
    fn test_unknown_identifier_is_named() {
        let err = "emoji".parse::<MarkdownExtension>().unwrap_err();
        match err {
            ConfigError::UnknownExtension { identifier } => assert_eq!(identifier, "emoji"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_resolve_all_stops_at_first_unknown() {
        let ids = vec!["mark".to_string(), "nope".to_string(), "also-nope".to_string()];
        let err = resolve_all(&ids).unwrap_err();
        assert!(err.to_string().contains("'nope'"));
    }

    #[test]
    fn test_register_all_preserves_order() {
        let ids = vec![
            "task-lists".to_string(),
            "mark".to_string(),
            "footnote".to_string(),
        ];
        let exts = resolve_all(&ids).unwrap();
        let mut registry = RecordingRegistry::new();
        register_all(&exts, &mut registry);

        assert_eq!(
            registry.registered(),
            &[
                MarkdownExtension::TaskLists,
                MarkdownExtension::Mark,
                MarkdownExtension::Footnote
            ]
        );
    }
}
