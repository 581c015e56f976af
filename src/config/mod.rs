//! Configuration management module.
//!
//! Handles TOML declaration loading, validation, and default generation.

mod service;
mod types;
mod validation;

pub use service::{ConfigService, EMBEDDED_DECLARATION};
pub use types::{
    EditLink, Footer, MarkdownOptions, SiteConfig, SiteMetadata, SocialIcon, SocialLink,
    ThemeOptions,
};
pub use validation::validate;
