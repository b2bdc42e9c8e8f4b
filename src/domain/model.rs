use std::fmt;

/// The (name, port) pair a single listener is configured by.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceDescriptor {
    pub name: String,
    /// `0` asks the OS for a free port; the bound listener reports the real one.
    pub port: u16,
}

impl ServiceDescriptor {
    pub fn new(name: impl Into<String>, port: u16) -> Self {
        Self {
            name: name.into(),
            port,
        }
    }

    pub(crate) fn with_port(&self, port: u16) -> Self {
        Self {
            name: self.name.clone(),
            port,
        }
    }
}

impl fmt::Display for ServiceDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (port {})", self.name, self.port)
    }
}
