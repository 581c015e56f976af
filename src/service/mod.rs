//! Service layer answering renderer queries over a loaded configuration.

mod site_service;

pub use site_service::{PageContext, SiteService, Summary};
