use crate::domain::model::ServiceDescriptor;

/// Produces the page body a listener serves for every request.
///
/// Called once per listener, after the socket is bound, so `service.port` is
/// always the port actually in use.
pub trait PageRenderer: Send + Sync + 'static {
    fn render(&self, service: &ServiceDescriptor) -> String;
}
