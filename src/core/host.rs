use crate::core::listener::ServiceListener;
use crate::domain::model::ServiceDescriptor;
use crate::domain::ports::PageRenderer;
use crate::utils::error::{HostError, Result};
use crate::utils::validation::Validate;
use std::sync::Arc;

/// Runs one listener per service: all but the last on detached background
/// tasks, the last on the caller's task.
pub struct MultiServiceHost<R: PageRenderer> {
    services: Vec<ServiceDescriptor>,
    renderer: Arc<R>,
}

impl<R: PageRenderer> MultiServiceHost<R> {
    pub fn new(services: Vec<ServiceDescriptor>, renderer: R) -> Result<Self> {
        services.validate()?;
        Ok(Self {
            services,
            renderer: Arc::new(renderer),
        })
    }

    /// Serves every configured service. Never returns while the primary
    /// listener is up; an `Err` means the primary listener failed.
    pub async fn run(self) -> Result<()> {
        let Some((primary, background)) = self.services.split_last() else {
            return Err(HostError::ValidationError {
                message: "At least one service is required".to_string(),
            });
        };

        tracing::info!(
            "Starting {} background listener(s) and 1 primary listener",
            background.len()
        );

        for service in background {
            Self::spawn_background(service.clone(), Arc::clone(&self.renderer));
        }

        Self::serve_primary(primary, self.renderer.as_ref()).await
    }

    /// Starts a listener on a detached task. The handle is dropped: the task
    /// is never joined and ends with the runtime. Its failure stays local.
    pub fn spawn_background(service: ServiceDescriptor, renderer: Arc<R>) {
        tokio::spawn(async move {
            let listener = match ServiceListener::bind(&service, renderer.as_ref()).await {
                Ok(listener) => listener,
                Err(e) => {
                    tracing::error!("❌ Background listener stopped: {}", e);
                    tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
                    return;
                }
            };

            if let Err(e) = listener.serve().await {
                tracing::error!("❌ Background listener stopped: {}", e);
            }
        });
    }

    /// Binds and serves on the calling task.
    pub async fn serve_primary(service: &ServiceDescriptor, renderer: &R) -> Result<()> {
        let listener = ServiceListener::bind(service, renderer).await?;
        tracing::debug!("{} is the primary listener", listener.descriptor());
        listener.serve().await
    }
}
