//! Top navigation bar entries.

use std::collections::BTreeMap;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::{paths, ConfigError};

/// One item in the top navigation bar.
///
/// Declared as a table with `text` plus either `link` (and optionally
/// `active_match`) or `items`:
///
/// ```toml
/// [[nav]]
/// text = "📦 数据库"
///
/// [[nav.items]]
/// text = "Redis"
/// link = "/db/redis/"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged, try_from = "RawNavEntry")]
pub enum NavEntry {
    /// Direct link to a page
    Link(NavLink),
    /// Dropdown holding further entries
    Group(NavGroup),
}

/// Navigation link.
#[derive(Debug, Clone, Serialize)]
pub struct NavLink {
    /// Label shown in the nav bar
    pub text: String,

    /// Site-relative target path
    pub link: String,

    /// Regex tested against the current page path to highlight this link
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_match: Option<String>,

    /// Compiled `active_match`, populated at load time
    #[serde(skip)]
    active_regex: Option<Regex>,
}

/// Navigation dropdown.
#[derive(Debug, Clone, Serialize)]
pub struct NavGroup {
    /// Label shown in the nav bar
    pub text: String,

    /// Entries inside the dropdown, in declaration order
    pub items: Vec<NavEntry>,
}

/// Nav entry as written, before deciding between link and dropdown.
#[derive(Deserialize)]
struct RawNavEntry {
    text: String,
    link: Option<String>,
    active_match: Option<String>,
    items: Option<Vec<NavEntry>>,
    #[serde(flatten)]
    unknown: BTreeMap<String, toml::Value>,
}

impl TryFrom<RawNavEntry> for NavEntry {
    type Error = String;

    fn try_from(raw: RawNavEntry) -> Result<Self, Self::Error> {
        if let Some(field) = raw.unknown.keys().next() {
            return Err(format!(
                "nav entry '{}': unknown field `{}`, expected `text`, `link`, `active_match` or `items`",
                raw.text, field
            ));
        }

        match (raw.link, raw.items) {
            (Some(link), None) => Ok(NavEntry::Link(NavLink {
                text: raw.text,
                link,
                active_match: raw.active_match,
                active_regex: None,
            })),
            (None, Some(items)) => {
                if raw.active_match.is_some() {
                    return Err(format!(
                        "nav entry '{}': `active_match` only applies to entries with a `link`",
                        raw.text
                    ));
                }
                Ok(NavEntry::Group(NavGroup {
                    text: raw.text,
                    items,
                }))
            }
            (Some(_), Some(_)) => Err(format!(
                "nav entry '{}': has both `link` and `items`, use one",
                raw.text
            )),
            (None, None) => Err(format!(
                "nav entry '{}': needs either `link` or `items`",
                raw.text
            )),
        }
    }
}

impl NavLink {
    pub fn new(text: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            link: link.into(),
            active_match: None,
            active_regex: None,
        }
    }

    /// Set the active-match pattern. Compiled by [`NavLink::compile`].
    pub fn with_active_match(mut self, pattern: impl Into<String>) -> Self {
        self.active_match = Some(pattern.into());
        self.active_regex = None;
        self
    }

    /// Compile the active-match pattern, if any.
    pub fn compile(&mut self) -> Result<(), ConfigError> {
        self.active_regex = match &self.active_match {
            Some(pattern) => Some(Regex::new(pattern).map_err(|e| {
                ConfigError::shape(format!(
                    "nav entry '{}': invalid active_match pattern '{}': {}",
                    self.text, pattern, e
                ))
            })?),
            None => None,
        };
        Ok(())
    }

    /// Whether this link is the active one for `page`.
    ///
    /// Uses the active-match pattern when present, otherwise the link target.
    pub fn is_active(&self, page: &str) -> bool {
        match (&self.active_regex, &self.active_match) {
            (Some(re), _) => re.is_match(page),
            // Not compiled yet; fall back to a one-off compile
            (None, Some(pattern)) => Regex::new(pattern)
                .map(|re| re.is_match(page))
                .unwrap_or(false),
            (None, None) => paths::covers(&self.link, page),
        }
    }
}

impl NavEntry {
    /// Label shown in the nav bar.
    pub fn text(&self) -> &str {
        match self {
            NavEntry::Link(link) => &link.text,
            NavEntry::Group(group) => &group.text,
        }
    }

    /// Validate labels and link targets of this entry and every entry below it.
    ///
    /// Active-match patterns are checked by [`NavEntry::compile`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self {
            NavEntry::Link(link) => {
                if link.text.trim().is_empty() {
                    return Err(ConfigError::shape(format!(
                        "nav link '{}': text cannot be empty",
                        link.link
                    )));
                }
                paths::validate_link(&link.text, &link.link)
            }
            NavEntry::Group(group) => {
                if group.text.trim().is_empty() {
                    return Err(ConfigError::shape("nav group text cannot be empty"));
                }
                group.items.iter().try_for_each(NavEntry::validate)
            }
        }
    }

    /// Compile active-match patterns in this entry and its children.
    pub fn compile(&mut self) -> Result<(), ConfigError> {
        match self {
            NavEntry::Link(link) => link.compile(),
            NavEntry::Group(group) => group.items.iter_mut().try_for_each(NavEntry::compile),
        }
    }

    /// Whether this entry, or any link inside it, is active for `page`.
    pub fn is_active(&self, page: &str) -> bool {
        match self {
            NavEntry::Link(link) => link.is_active(page),
            NavEntry::Group(group) => group.items.iter().any(|item| item.is_active(page)),
        }
    }

    /// All links in this entry, depth first, in declaration order.
    pub fn links(&self) -> Vec<&NavLink> {
        let mut out = Vec::new();
        self.collect_links(&mut out);
        out
    }

    fn collect_links<'a>(&'a self, out: &mut Vec<&'a NavLink>) {
        match self {
            NavEntry::Link(link) => out.push(link),
            NavEntry::Group(group) => {
                for item in &group.items {
                    item.collect_links(out);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group(text: &str, items: Vec<NavEntry>) -> NavEntry {
        NavEntry::Group(NavGroup {
            text: text.to_string(),
            items,
        })
    }

    #[test]
    fn test_active_match_pattern() {
        let mut link = NavLink::new("🍃 Spring", "/spring/").with_active_match("/spring/");
        link.compile().unwrap();
        assert!(link.is_active("/spring/java/juc"));
        assert!(!link.is_active("/blog/"));
    }

    #[test]
    fn test_active_without_pattern_uses_target() {
        let link = NavLink::new("MySQL", "/db/mysql/installation");
        assert!(link.is_active("/db/mysql/installation"));
        assert!(!link.is_active("/db/mysql/indexes"));
    }

    #[test]
    fn test_group_is_active_through_children() {
        let entry = group(
            "📦 数据库",
            vec![
                NavEntry::Link(NavLink::new("Redis", "/db/redis/")),
                NavEntry::Link(NavLink::new("Elasticsearch", "/db/es/")),
            ],
        );
        assert!(entry.is_active("/db/redis/data-type"));
        assert!(!entry.is_active("/java/jvm/"));
    }

    #[test]
    fn test_validate_names_bad_link() {
        let entry = group(
            "☕ Java",
            vec![
                NavEntry::Link(NavLink::new("基础", "/db/redis/")),
                NavEntry::Link(NavLink::new("JVM", "java/jvm/")),
            ],
        );
        match entry.validate().unwrap_err() {
            ConfigError::InvalidPath { label, path } => {
                assert_eq!(label, "JVM");
                assert_eq!(path, "java/jvm/");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_compile_rejects_bad_pattern() {
        let mut entry =
            NavEntry::Link(NavLink::new("Blog", "/blog/").with_active_match("/blog/("));
        match entry.compile().unwrap_err() {
            ConfigError::Shape(msg) => assert!(msg.contains("'Blog'"), "{msg}"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    fn parse(source: &str) -> Result<Vec<NavEntry>, toml::de::Error> {
        #[derive(Deserialize)]
        struct Doc {
            nav: Vec<NavEntry>,
        }
        toml::from_str::<Doc>(source).map(|doc| doc.nav)
    }

    #[test]
    fn test_parse_link_and_group() {
        let nav = parse(
            "[[nav]]\ntext = \"Blog\"\nlink = \"/blog/\"\nactive_match = \"/blog/\"\n\n\
             [[nav]]\ntext = \"☕ Java\"\n\n[[nav.items]]\ntext = \"JVM\"\nlink = \"/java/jvm/\"\n",
        )
        .unwrap();

        assert!(matches!(&nav[0], NavEntry::Link(link) if link.active_match.as_deref() == Some("/blog/")));
        assert!(matches!(&nav[1], NavEntry::Group(group) if group.items.len() == 1));
    }

    #[test]
    fn test_parse_entry_without_link_or_items_names_it() {
        let err = parse("[[nav]]\ntext = \"Orphan\"\n").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("nav entry 'Orphan'"), "{msg}");
        assert!(msg.contains("needs either `link` or `items`"), "{msg}");
    }

    #[test]
    fn test_parse_entry_with_link_and_items_names_it() {
        let err = parse(
            "[[nav]]\ntext = \"X\"\nlink = \"/x/\"\n\n[[nav.items]]\ntext = \"Y\"\nlink = \"/y/\"\n",
        )
        .unwrap_err();
        assert!(err.to_string().contains("nav entry 'X': has both `link` and `items`"));
    }

    #[test]
    fn test_parse_misspelled_field_names_it() {
        let err = parse("[[nav]]\ntext = \"Blog\"\nlnk = \"/blog/\"\n").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("nav entry 'Blog': unknown field `lnk`"), "{msg}");
    }

    #[test]
    fn test_parse_active_match_on_group_is_rejected() {
        let err = parse(
            "[[nav]]\ntext = \"G\"\nactive_match = \"/g/\"\n\n[[nav.items]]\ntext = \"Y\"\nlink = \"/y/\"\n",
        )
        .unwrap_err();
        assert!(err.to_string().contains("`active_match` only applies"));
    }

    #[test]
    fn test_links_in_declaration_order() {
        let entry = group(
            "🧩 收藏",
            vec![
                NavEntry::Link(NavLink::new("ULM", "/favorites/#ulm")),
                NavEntry::Link(NavLink::new("JS 库", "/favorites/#js-库")),
            ],
        );
        let texts: Vec<&str> = entry.links().iter().map(|l| l.text.as_str()).collect();
        assert_eq!(texts, vec!["ULM", "JS 库"]);
    }
}
