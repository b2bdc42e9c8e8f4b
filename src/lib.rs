pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::default_services;
pub use crate::core::{host::MultiServiceHost, listener::ServiceListener, page::StaticPage};
pub use domain::{model::ServiceDescriptor, ports::PageRenderer};
pub use utils::error::{HostError, Result};
