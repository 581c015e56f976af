//! Configuration data types.

use serde::{Deserialize, Serialize};

use super::validation;
use crate::domain::{ConfigError, MarkdownExtension, NavEntry, Sidebar, SidebarGroup};

/// Complete site configuration handed to the renderer.
///
/// Built once by [`ConfigService`](super::ConfigService) and read-only afterwards.
/// `ConfigService::load` and `ConfigService::load_str` are the only supported
/// constructors: deserializing this type directly skips validation, leaves
/// [`SiteConfig::extensions`] empty and leaves `active_match` patterns
/// uncompiled.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    /// Site identity
    pub site: SiteMetadata,

    /// Markdown rendering options
    #[serde(default)]
    pub markdown: MarkdownOptions,

    /// Theme chrome (logo, edit link, footer)
    #[serde(default)]
    pub theme: ThemeOptions,

    /// Top navigation bar, in display order
    #[serde(default)]
    pub nav: Vec<NavEntry>,

    /// Social icons shown in the nav bar
    #[serde(default)]
    pub social_links: Vec<SocialLink>,

    /// Sidebar sections keyed by path prefix
    #[serde(default)]
    pub sidebar: Sidebar,
}

impl SiteConfig {
    /// Validate configuration and return the first error found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validation::validate(self)
    }

    /// Sidebar groups for the page at `path` (longest-prefix match).
    pub fn resolve_sidebar(&self, path: &str) -> &[SidebarGroup] {
        self.sidebar.resolve(path)
    }

    /// Top-level nav entries that are active for the page at `path`.
    pub fn active_nav(&self, path: &str) -> Vec<&NavEntry> {
        let path = crate::domain::paths::normalize(path);
        self.nav.iter().filter(|entry| entry.is_active(&path)).collect()
    }

    /// Extensions in registration order. Empty until the config is loaded.
    pub fn extensions(&self) -> &[MarkdownExtension] {
        &self.markdown.resolved
    }
}

/// Site identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SiteMetadata {
    /// Site title
    pub title: String,

    /// Language tag (e.g. "zh-CN")
    #[serde(alias = "language")]
    pub lang: String,

    /// Site description
    pub description: String,

    /// Show the last-updated time on each page
    #[serde(default)]
    pub last_updated: bool,
}

/// Markdown rendering options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MarkdownOptions {
    /// Show line numbers in code blocks
    pub line_numbers: bool,

    /// Heading levels included in the table of contents
    pub toc_levels: Vec<u8>,

    /// Extension identifiers, registered in this order
    pub extensions: Vec<String>,

    /// `extensions` resolved against the recognized set, populated at load time
    #[serde(skip)]
    pub(crate) resolved: Vec<MarkdownExtension>,
}

impl Default for MarkdownOptions {
    fn default() -> Self {
        Self {
            line_numbers: false,
            toc_levels: vec![2, 3],
            extensions: Vec::new(),
            resolved: Vec::new(),
        }
    }
}

/// Theme chrome.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeOptions {
    /// Title shown in the nav bar, defaults to the site title
    pub site_title: Option<String>,

    /// Site-relative logo path
    pub logo: Option<String>,

    /// "Edit this page" link
    pub edit_link: Option<EditLink>,

    /// Page footer
    pub footer: Option<Footer>,
}

/// "Edit this page" link template.
///
/// ```toml
/// [theme.edit_link]
/// pattern = "https://github.com/jojojotarou/edit/main/docs/:path"
/// text = "Edit this page on GitHub"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EditLink {
    /// URL template; `:path` is replaced with the page's source file
    pub pattern: String,

    /// Link label
    pub text: String,
}

/// Placeholder in [`EditLink::pattern`].
pub const EDIT_LINK_PLACEHOLDER: &str = ":path";

impl EditLink {
    /// Edit URL for the page served at `page`.
    ///
    /// `/spring/java/juc` maps to `spring/java/juc.md`, directory pages
    /// like `/spring/` map to `spring/index.md`.
    pub fn url_for(&self, page: &str) -> String {
        let page = page.split('#').next().unwrap_or(page);
        let page = page.trim_start_matches('/');
        let source = if page.is_empty() || page.ends_with('/') {
            format!("{}index.md", page)
        } else if page.ends_with(".md") {
            page.to_string()
        } else {
            format!("{}.md", page.trim_end_matches(".html"))
        };
        self.pattern.replace(EDIT_LINK_PLACEHOLDER, &source)
    }
}

/// Page footer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Footer {
    /// Line shown above the copyright (e.g. the license)
    pub message: Option<String>,

    /// Copyright notice
    pub copyright: Option<String>,
}

/// Social icon linking to an external profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SocialLink {
    pub icon: SocialIcon,
    pub link: String,
}

/// Icons the theme ships.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialIcon {
    Discord,
    Facebook,
    Github,
    Instagram,
    Linkedin,
    Mastodon,
    Slack,
    Twitter,
    Youtube,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edit_link() -> EditLink {
        EditLink {
            pattern: "https://github.com/jojojotarou/edit/main/docs/:path".to_string(),
            text: "Edit this page on GitHub".to_string(),
        }
    }

    #[test]
    fn test_edit_link_url_for_page() {
        assert_eq!(
            edit_link().url_for("/spring/java/juc"),
            "https://github.com/jojojotarou/edit/main/docs/spring/java/juc.md"
        );
    }

    #[test]
    fn test_edit_link_url_for_directory_page() {
        assert_eq!(
            edit_link().url_for("/spring/"),
            "https://github.com/jojojotarou/edit/main/docs/spring/index.md"
        );
        assert_eq!(
            edit_link().url_for("/"),
            "https://github.com/jojojotarou/edit/main/docs/index.md"
        );
    }

    #[test]
    fn test_edit_link_ignores_fragment() {
        assert_eq!(
            edit_link().url_for("/favorites/#ulm"),
            "https://github.com/jojojotarou/edit/main/docs/favorites/index.md"
        );
    }

    #[test]
    fn test_footer_fields_are_optional() {
        let footer: Footer = toml::from_str("message = \"Released under the MIT License.\"").unwrap();
        assert_eq!(footer.message.as_deref(), Some("Released under the MIT License."));
        assert!(footer.copyright.is_none());
    }

    #[test]
    fn test_markdown_defaults() {
        let md = MarkdownOptions::default();
        assert!(!md.line_numbers);
        assert_eq!(md.toc_levels, vec![2, 3]);
        assert!(md.extensions.is_empty());
    }

    #[test]
    fn test_unknown_social_icon_is_rejected() {
        let result: Result<SocialLink, _> =
            toml::from_str("icon = \"myspace\"\nlink = \"https://myspace.com/x\"");
        assert!(result.is_err());
    }
}
