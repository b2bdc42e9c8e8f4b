use thiserror::Error;

#[derive(Error, Debug)]
pub enum HostError {
    #[error("{service} could not bind port {port}: {source}")]
    Bind {
        service: String,
        port: u16,
        #[source]
        source: std::io::Error,
    },

    #[error("{service} on port {port} stopped serving: {source}")]
    Serve {
        service: String,
        port: u16,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Validation error: {message}")]
    ValidationError { message: String },
}

impl HostError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            HostError::Bind { service, port, .. } => {
                format!("{} could not start: port {} is unavailable", service, port)
            }
            HostError::Serve { service, port, .. } => {
                format!("{} on port {} stopped unexpectedly", service, port)
            }
            HostError::IoError(e) => format!("System I/O failure: {}", e),
            HostError::InvalidConfigValueError { field, reason, .. } => {
                format!("Service table is invalid ({}): {}", field, reason)
            }
            HostError::ValidationError { message } => {
                format!("Service table is invalid: {}", message)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            HostError::Bind { port, source, .. } => match source.kind() {
                std::io::ErrorKind::PermissionDenied => {
                    format!("Run with privileges that allow binding port {}", port)
                }
                _ => format!(
                    "Stop the process holding port {} (e.g. `lsof -i :{}`) and restart",
                    port, port
                ),
            },
            HostError::Serve { .. } | HostError::IoError(_) => {
                "Check system resource limits (open files, sockets) and restart".to_string()
            }
            HostError::InvalidConfigValueError { .. } | HostError::ValidationError { .. } => {
                "Give every service a non-empty name and a distinct port".to_string()
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, HostError>;
