//! Configuration validation.

use tracing::debug;

use super::types::{MarkdownOptions, SiteMetadata, ThemeOptions, EDIT_LINK_PLACEHOLDER};
use super::SiteConfig;
use crate::domain::{extensions, paths, ConfigError};

/// Validate configuration.
///
/// Checks run in declaration order (site, markdown, theme, nav, social links,
/// sidebar) and stop at the first failure.
pub fn validate(config: &SiteConfig) -> Result<(), ConfigError> {
    validate_site(&config.site)?;
    validate_markdown(&config.markdown)?;
    validate_theme(&config.theme)?;

    for entry in &config.nav {
        entry.validate()?;
    }

    for (i, social) in config.social_links.iter().enumerate() {
        if !is_http_url(&social.link) {
            return Err(ConfigError::shape(format!(
                "social_links[{}]: link '{}' must be an http(s) URL",
                i, social.link
            )));
        }
    }

    config.sidebar.validate()?;

    debug!(
        "Configuration valid: {} nav entries, {} sidebar sections",
        config.nav.len(),
        config.sidebar.len()
    );
    Ok(())
}

fn validate_site(site: &SiteMetadata) -> Result<(), ConfigError> {
    if site.title.trim().is_empty() {
        return Err(ConfigError::shape("site.title cannot be empty"));
    }
    if site.description.trim().is_empty() {
        return Err(ConfigError::shape("site.description cannot be empty"));
    }
    if !is_language_tag(&site.lang) {
        return Err(ConfigError::shape(format!(
            "site.lang: '{}' is not a language tag (e.g. \"en\", \"zh-CN\")",
            site.lang
        )));
    }
    Ok(())
}

fn validate_markdown(markdown: &MarkdownOptions) -> Result<(), ConfigError> {
    for (i, level) in markdown.toc_levels.iter().enumerate() {
        if !(1..=6).contains(level) {
            return Err(ConfigError::shape(format!(
                "markdown.toc_levels[{}]: heading level {} must be between 1 and 6",
                i, level
            )));
        }
        if markdown.toc_levels[..i].contains(level) {
            return Err(ConfigError::shape(format!(
                "markdown.toc_levels[{}]: heading level {} listed twice",
                i, level
            )));
        }
    }

    extensions::resolve_all(&markdown.extensions)?;
    Ok(())
}

fn validate_theme(theme: &ThemeOptions) -> Result<(), ConfigError> {
    if let Some(logo) = &theme.logo {
        paths::validate_link("theme.logo", logo)?;
    }

    if let Some(edit_link) = &theme.edit_link {
        if !is_http_url(&edit_link.pattern) {
            return Err(ConfigError::shape(format!(
                "theme.edit_link: pattern '{}' must be an http(s) URL",
                edit_link.pattern
            )));
        }
        if !edit_link.pattern.contains(EDIT_LINK_PLACEHOLDER) {
            return Err(ConfigError::shape(format!(
                "theme.edit_link: pattern must contain {} placeholder",
                EDIT_LINK_PLACEHOLDER
            )));
        }
        if edit_link.text.trim().is_empty() {
            return Err(ConfigError::shape("theme.edit_link: text cannot be empty"));
        }
    }

    Ok(())
}

/// Loose BCP 47 shape: alphabetic primary subtag of 2-8 letters followed by
/// alphanumeric subtags of 1-8 characters, separated by '-'.
fn is_language_tag(tag: &str) -> bool {
    let mut parts = tag.split('-');
    let primary_ok = parts
        .next()
        .is_some_and(|p| (2..=8).contains(&p.len()) && p.chars().all(|c| c.is_ascii_alphabetic()));

    primary_ok
        && parts.all(|p| (1..=8).contains(&p.len()) && p.chars().all(|c| c.is_ascii_alphanumeric()))
}

fn is_http_url(url: &str) -> bool {
    ["https://", "http://"]
        .iter()
        .any(|scheme| url.len() > scheme.len() && url.starts_with(scheme))
}
