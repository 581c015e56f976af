//! Queries the renderer runs against a loaded configuration.

use anyhow::Result;
use serde::Serialize;
use tracing::debug;

use crate::config::SiteConfig;
use crate::domain::{paths, NavEntry, SidebarGroup};

/// Everything the renderer needs to lay out one page.
#[derive(Debug, Serialize)]
pub struct PageContext<'a> {
    /// Normalized page path
    pub path: String,
    /// Sidebar prefix that matched, if any
    pub section: Option<&'a str>,
    /// Sidebar groups for the page
    pub sidebar: &'a [SidebarGroup],
    /// Labels of the active top-level nav entries
    pub active_nav: Vec<&'a str>,
    /// "Edit this page" URL, when configured
    pub edit_url: Option<String>,
}

/// One-line overview of a loaded configuration.
#[derive(Debug, Serialize)]
pub struct Summary<'a> {
    pub title: &'a str,
    pub lang: &'a str,
    pub nav_entries: usize,
    pub nav_links: usize,
    pub social_links: usize,
    pub sidebar_sections: usize,
    pub extensions: Vec<&'static str>,
}

/// Service answering page-level queries.
pub struct SiteService {
    config: SiteConfig,
}

impl SiteService {
    pub fn new(config: SiteConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    /// Layout context for the page at `path`.
    pub fn page(&self, path: &str) -> PageContext<'_> {
        let path = paths::normalize(path);
        debug!("Building page context for {}", path);

        PageContext {
            section: self.config.sidebar.matching_prefix(&path),
            sidebar: self.config.resolve_sidebar(&path),
            active_nav: self
                .config
                .active_nav(&path)
                .into_iter()
                .map(NavEntry::text)
                .collect(),
            edit_url: self
                .config
                .theme
                .edit_link
                .as_ref()
                .map(|edit| edit.url_for(&path)),
            path,
        }
    }

    pub fn summary(&self) -> Summary<'_> {
        let config = &self.config;
        Summary {
            title: &config.site.title,
            lang: &config.site.lang,
            nav_entries: config.nav.len(),
            nav_links: config.nav.iter().map(|e| e.links().len()).sum(),
            social_links: config.social_links.len(),
            sidebar_sections: config.sidebar.len(),
            extensions: config.extensions().iter().map(|e| e.identifier()).collect(),
        }
    }

    /// Sidebar for `path` as pretty JSON.
    pub fn sidebar_json(&self, path: &str) -> Result<String> {
        Ok(serde_json::to_string_pretty(
            self.config.resolve_sidebar(path),
        )?)
    }

    /// Navigation as pretty JSON, optionally only the entries active for `active`.
    pub fn nav_json(&self, active: Option<&str>) -> Result<String> {
        let json = match active {
            Some(path) => serde_json::to_string_pretty(&self.config.active_nav(path))?,
            None => serde_json::to_string_pretty(&self.config.nav)?,
        };
        Ok(json)
    }

    pub fn page_json(&self, path: &str) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.page(path))?)
    }

    pub fn summary_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.summary())?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigService;
    use crate::domain::RecordingRegistry;

    fn service() -> SiteService {
        let config = ConfigService::load(&mut RecordingRegistry::new()).unwrap();
        SiteService::new(config)
    }

    #[test]
    fn test_page_context_for_spring_page() {
        let service = service();
        let page = service.page("spring/java/juc");

        assert_eq!(page.path, "/spring/java/juc");
        assert_eq!(page.section, Some("/spring/"));
        assert_eq!(page.sidebar[0].text, "Java");
        assert_eq!(page.active_nav, vec!["🍃 Spring"]);
        assert_eq!(
            page.edit_url.as_deref(),
            Some("https://github.com/jojojotarou/edit/main/docs/spring/java/juc.md")
        );
    }

    #[test]
    fn test_page_context_outside_sidebar() {
        let service = service();
        let page = service.page("/blog/post");

        assert_eq!(page.section, None);
        assert!(page.sidebar.is_empty());
        assert_eq!(page.active_nav, vec!["✏️ Blog"]);
    }

    #[test]
    fn test_duplicate_targets_activate_every_entry() {
        let service = service();
        let page = service.page("/db/redis/data-type");

        // "/db/redis/" is linked from both the Java and the database dropdowns
        assert_eq!(page.active_nav, vec!["☕ Java", "📦 数据库"]);
    }

    #[test]
    fn test_summary() {
        let service = service();
        let summary = service.summary();

        assert_eq!(summary.lang, "zh-CN");
        assert_eq!(summary.nav_entries, 6);
        assert_eq!(summary.nav_links, 10);
        assert_eq!(summary.sidebar_sections, 4);
        assert_eq!(
            summary.extensions,
            vec!["task-lists", "mark", "footnote", "mermaid"]
        );
    }

    #[test]
    fn test_sidebar_json_is_empty_array_without_match() {
        let service = service();
        assert_eq!(service.sidebar_json("/blog/post").unwrap(), "[]");
    }
}
