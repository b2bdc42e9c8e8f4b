#[cfg(feature = "cli")]
pub mod cli;

#[cfg(feature = "cli")]
pub use cli::CliConfig;

use crate::domain::model::ServiceDescriptor;

pub const WEB_APP_PORT: u16 = 8000;
pub const API_SERVICE_PORT: u16 = 8001;
pub const ADMIN_PANEL_PORT: u16 = 8002;

/// The fixed service table. The last entry is served on the primary task.
pub fn default_services() -> Vec<ServiceDescriptor> {
    vec![
        ServiceDescriptor::new("Web App", WEB_APP_PORT),
        ServiceDescriptor::new("API Service", API_SERVICE_PORT),
        ServiceDescriptor::new("Admin Panel", ADMIN_PANEL_PORT),
    ]
}
