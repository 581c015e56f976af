//! Sidebar sections and longest-prefix resolution.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{paths, ConfigError};

/// Mapping from path prefix to the sidebar shown beneath it.
///
/// # Example
///
/// ```toml
/// [[sidebar."/db/redis/"]]
/// text = "Redis"
///
/// [[sidebar."/db/redis/".items]]
/// text = "Redis 数据类型"
/// link = "/db/redis/data-type"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Sidebar {
    sections: BTreeMap<String, SidebarSection>,
}

/// Sidebar groups shown for every page under one prefix.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SidebarSection {
    pub groups: Vec<SidebarGroup>,
}

/// Titled, optionally collapsible block of sidebar items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SidebarGroup {
    pub text: String,

    #[serde(default)]
    pub collapsible: bool,

    #[serde(default)]
    pub items: Vec<SidebarItem>,
}

/// Entry inside a sidebar group: a link, or a nested group with `items`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged, try_from = "RawSidebarItem")]
pub enum SidebarItem {
    Link(SidebarLink),
    Group(SidebarGroup),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SidebarLink {
    pub text: String,
    pub link: String,
}

/// Sidebar item as written, before deciding between link and nested group.
#[derive(Deserialize)]
struct RawSidebarItem {
    text: String,
    link: Option<String>,
    collapsible: Option<bool>,
    items: Option<Vec<SidebarItem>>,
    #[serde(flatten)]
    unknown: BTreeMap<String, toml::Value>,
}

impl TryFrom<RawSidebarItem> for SidebarItem {
    type Error = String;

    fn try_from(raw: RawSidebarItem) -> Result<Self, Self::Error> {
        if let Some(field) = raw.unknown.keys().next() {
            return Err(format!(
                "sidebar item '{}': unknown field `{}`, expected `text`, `link`, `collapsible` or `items`",
                raw.text, field
            ));
        }

        match (raw.link, raw.items) {
            (Some(link), None) => {
                if raw.collapsible.is_some() {
                    return Err(format!(
                        "sidebar item '{}': `collapsible` only applies to items with `items`",
                        raw.text
                    ));
                }
                Ok(SidebarItem::Link(SidebarLink {
                    text: raw.text,
                    link,
                }))
            }
            (None, Some(items)) => Ok(SidebarItem::Group(SidebarGroup {
                text: raw.text,
                collapsible: raw.collapsible.unwrap_or(false),
                items,
            })),
            (Some(_), Some(_)) => Err(format!(
                "sidebar item '{}': has both `link` and `items`, use one",
                raw.text
            )),
            (None, None) => Err(format!(
                "sidebar item '{}': needs either `link` or `items`",
                raw.text
            )),
        }
    }
}

impl Sidebar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `groups` under `prefix`, replacing any previous section.
    pub fn insert(&mut self, prefix: impl Into<String>, groups: Vec<SidebarGroup>) {
        self.sections
            .insert(prefix.into(), SidebarSection { groups });
    }

    /// Iterate over `(prefix, section)` pairs, ordered by prefix.
    pub fn sections(&self) -> impl Iterator<Item = (&str, &SidebarSection)> {
        self.sections.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Registered prefix that governs `path`, if any.
    ///
    /// Picks the longest registered prefix that `path` starts with.
    pub fn matching_prefix(&self, path: &str) -> Option<&str> {
        let path = paths::normalize(path);
        self.sections
            .keys()
            .filter(|prefix| path.starts_with(prefix.as_str()))
            .max_by_key(|prefix| prefix.len())
            .map(String::as_str)
    }

    /// Sidebar groups for the page at `path`.
    ///
    /// Pages outside every registered prefix get an empty slice.
    pub fn resolve(&self, path: &str) -> &[SidebarGroup] {
        match self.matching_prefix(path) {
            Some(prefix) => {
                debug!("Sidebar for {} resolved to section {}", path, prefix);
                &self.sections[prefix].groups
            }
            None => {
                debug!("No sidebar section for {}", path);
                &[]
            }
        }
    }

    /// Validate every prefix and every link below it.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (prefix, section) in &self.sections {
            paths::validate_link(&format!("sidebar[{}]", prefix), prefix)?;
            for group in &section.groups {
                group.validate()?;
            }
        }
        Ok(())
    }
}

impl SidebarGroup {
    pub fn new(text: impl Into<String>, items: Vec<SidebarItem>) -> Self {
        Self {
            text: text.into(),
            collapsible: false,
            items,
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.text.trim().is_empty() {
            return Err(ConfigError::shape("sidebar group text cannot be empty"));
        }
        self.items.iter().try_for_each(SidebarItem::validate)
    }
}

impl SidebarItem {
    pub fn link(text: impl Into<String>, link: impl Into<String>) -> Self {
        SidebarItem::Link(SidebarLink {
            text: text.into(),
            link: link.into(),
        })
    }

    pub fn text(&self) -> &str {
        match self {
            SidebarItem::Link(link) => &link.text,
            SidebarItem::Group(group) => &group.text,
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        match self {
            SidebarItem::Link(link) => {
                if link.text.trim().is_empty() {
                    return Err(ConfigError::shape(format!(
                        "sidebar link '{}': text cannot be empty",
                        link.link
                    )));
                }
                paths::validate_link(&link.text, &link.link)
            }
            SidebarItem::Group(group) => group.validate(),
        }
    }
}
