use crate::domain::model::ServiceDescriptor;
use crate::domain::ports::PageRenderer;
use crate::utils::error::{HostError, Result};
use axum::{body::Bytes, extract::State, response::Html, routing::get, Router};
use std::net::{Ipv4Addr, SocketAddr};
use tokio::net::TcpListener;

/// Page body rendered once at bind time and shared by every request.
#[derive(Debug, Clone)]
pub struct RenderedPage(Bytes);

impl RenderedPage {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

/// A bound listener for one service. Holding one means the service is serving
/// or about to enter its accept loop; there is no way back to unbound.
pub struct ServiceListener {
    service: ServiceDescriptor,
    listener: TcpListener,
    page: RenderedPage,
}

impl ServiceListener {
    /// Binds `0.0.0.0:<port>` and renders the page for the port actually bound.
    pub async fn bind<R: PageRenderer>(service: &ServiceDescriptor, renderer: &R) -> Result<Self> {
        let addr = SocketAddr::from((Ipv4Addr::UNSPECIFIED, service.port));
        tracing::debug!("Binding {} on {}", service.name, addr);

        let bind_error = |source| HostError::Bind {
            service: service.name.clone(),
            port: service.port,
            source,
        };
        let listener = TcpListener::bind(addr).await.map_err(bind_error)?;
        let bound_port = listener.local_addr().map_err(bind_error)?.port();

        let service = service.with_port(bound_port);
        let page = RenderedPage(Bytes::from(renderer.render(&service)));

        println!("{}", startup_line(&service));
        tracing::info!(service = %service.name, port = service.port, "Listener started");

        Ok(Self {
            service,
            listener,
            page,
        })
    }

    pub fn descriptor(&self) -> &ServiceDescriptor {
        &self.service
    }

    pub fn local_addr(&self) -> Result<SocketAddr> {
        Ok(self.listener.local_addr()?)
    }

    pub fn page(&self) -> &RenderedPage {
        &self.page
    }

    /// Runs the accept loop. Only returns if the server itself fails.
    pub async fn serve(self) -> Result<()> {
        let Self {
            service,
            listener,
            page,
        } = self;

        axum::serve(listener, router(page))
            .await
            .map_err(|source| HostError::Serve {
                service: service.name,
                port: service.port,
                source,
            })
    }
}

/// The line printed to stdout once a listener is bound.
pub fn startup_line(service: &ServiceDescriptor) -> String {
    format!("{} running on port {}", service.name, service.port)
}

// The path is never inspected: `/` and every nested path get the same page.
fn router(page: RenderedPage) -> Router {
    Router::new()
        .route("/", get(serve_page))
        .route("/{*path}", get(serve_page))
        .with_state(page)
}

async fn serve_page(State(page): State<RenderedPage>) -> Html<Bytes> {
    Html(page.0)
}
