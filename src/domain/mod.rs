//! Domain layer containing the configuration model's rules.
//!
//! This module contains:
//! - Error taxonomy for loading
//! - Markdown extensions and the registry capability
//! - Navigation entries and sidebar resolution
//! - Logger with rotation

mod error;
pub mod extensions;
pub mod logger;
pub mod nav;
pub mod paths;
pub mod sidebar;

pub use error::ConfigError;
pub use extensions::{ExtensionRegistry, MarkdownExtension, RecordingRegistry};
pub use nav::{NavEntry, NavGroup, NavLink};
pub use sidebar::{Sidebar, SidebarGroup, SidebarItem, SidebarLink, SidebarSection};
