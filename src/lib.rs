//! site-config: configuration loader for a static documentation site
//!
//! Parses the site declaration (identity, markdown extensions, navigation,
//! sidebar), validates it, and hands an immutable [`SiteConfig`] to the
//! external renderer.
//!
//! ```no_run
//! use site_config::{ConfigService, RecordingRegistry};
//!
//! let mut registry = RecordingRegistry::new();
//! let config = ConfigService::load(&mut registry)?;
//! let groups = config.resolve_sidebar("/spring/java/juc");
//! # Ok::<(), site_config::ConfigError>(())
//! ```

pub mod config;
pub mod domain;
pub mod service;

pub use config::{ConfigService, SiteConfig};
pub use domain::{ConfigError, ExtensionRegistry, MarkdownExtension, RecordingRegistry};
pub use service::SiteService;
