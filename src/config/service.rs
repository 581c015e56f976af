//! Configuration service for loading and generating declarations.

use std::fs;
use std::path::Path;

use tracing::{debug, info};

use super::SiteConfig;
use crate::domain::{extensions, ConfigError, ExtensionRegistry};

/// Declaration shipped with the site.
pub const EMBEDDED_DECLARATION: &str = include_str!("site.toml");

/// Configuration service.
pub struct ConfigService;

impl ConfigService {
    /// Load the embedded declaration.
    ///
    /// Configured markdown extensions are registered with `registry` once
    /// each, in declaration order, after the whole declaration validated.
    pub fn load(registry: &mut dyn ExtensionRegistry) -> Result<SiteConfig, ConfigError> {
        Self::load_str(EMBEDDED_DECLARATION, registry)
    }

    /// Load a declaration from a TOML string.
    pub fn load_str(
        source: &str,
        registry: &mut dyn ExtensionRegistry,
    ) -> Result<SiteConfig, ConfigError> {
        let mut config: SiteConfig = toml::from_str(source)?;

        config.validate()?;

        config.markdown.resolved = extensions::resolve_all(&config.markdown.extensions)?;
        for entry in &mut config.nav {
            entry.compile()?;
        }

        extensions::register_all(&config.markdown.resolved, registry);

        info!(
            "Loaded site '{}' ({} extensions, {} sidebar sections)",
            config.site.title,
            config.markdown.resolved.len(),
            config.sidebar.len()
        );
        Ok(config)
    }

    /// Load a declaration from a file.
    pub fn load_file(
        path: &Path,
        registry: &mut dyn ExtensionRegistry,
    ) -> Result<SiteConfig, ConfigError> {
        debug!("Reading declaration from {}", path.display());
        let content = fs::read_to_string(path)?;
        Self::load_str(&content, registry)
    }

    /// Write the embedded declaration to `path`.
    pub fn generate_at(path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(path, EMBEDDED_DECLARATION)?;
        Ok(())
    }
}
