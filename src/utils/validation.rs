use crate::domain::model::ServiceDescriptor;
use crate::utils::error::{HostError, Result};
use std::collections::HashMap;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(HostError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// Port `0` is exempt: every such listener gets its own OS-assigned port.
pub fn validate_distinct_ports(services: &[ServiceDescriptor]) -> Result<()> {
    let mut seen: HashMap<u16, &str> = HashMap::new();

    for service in services.iter().filter(|s| s.port != 0) {
        if let Some(first) = seen.insert(service.port, &service.name) {
            return Err(HostError::InvalidConfigValueError {
                field: "port".to_string(),
                value: service.port.to_string(),
                reason: format!(
                    "Port is assigned to both '{}' and '{}'",
                    first, service.name
                ),
            });
        }
    }

    Ok(())
}

impl Validate for ServiceDescriptor {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("name", &self.name)
    }
}

impl Validate for [ServiceDescriptor] {
    fn validate(&self) -> Result<()> {
        if self.is_empty() {
            return Err(HostError::ValidationError {
                message: "At least one service is required".to_string(),
            });
        }

        for service in self {
            service.validate()?;
        }

        validate_distinct_ports(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_default_table() {
        let services = crate::config::default_services();
        assert!(services.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_table() {
        let services: Vec<ServiceDescriptor> = vec![];
        assert!(matches!(
            services.validate(),
            Err(HostError::ValidationError { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_blank_name() {
        let services = vec![
            ServiceDescriptor::new("Web App", 8000),
            ServiceDescriptor::new("   ", 8001),
        ];
        assert!(services.validate().is_err());
    }

    #[test]
    fn test_validate_distinct_ports() {
        let duplicated = vec![
            ServiceDescriptor::new("Web App", 8000),
            ServiceDescriptor::new("API Service", 8000),
        ];
        let err = validate_distinct_ports(&duplicated).unwrap_err();
        assert!(err.to_string().contains("Web App"));
        assert!(err.to_string().contains("API Service"));

        let ephemeral = vec![
            ServiceDescriptor::new("Web App", 0),
            ServiceDescriptor::new("API Service", 0),
        ];
        assert!(validate_distinct_ports(&ephemeral).is_ok());
    }
}
