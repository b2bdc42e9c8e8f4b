use crate::domain::model::ServiceDescriptor;
use crate::domain::ports::PageRenderer;

/// Sibling links shown on every page. These point at the host-side ports of
/// the compose example and do not follow the ports the listeners bind.
pub const SIBLING_LINKS: [(&str, u16); 3] = [("Web App", 3000), ("API", 4000), ("Admin", 5000)];

/// The informational page every listener serves by default.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticPage;

impl PageRenderer for StaticPage {
    fn render(&self, service: &ServiceDescriptor) -> String {
        let links: String = SIBLING_LINKS
            .iter()
            .map(|(label, port)| {
                format!(
                    "            <li><a href=\"http://localhost:{port}\">{label} (port {port})</a></li>\n"
                )
            })
            .collect();

        format!(
            r#"
        <h1>{name}</h1>
        <p>Running on container port {port}</p>
        <p>Service: {name}</p>
        <hr>
        <p>Try the other services:</p>
        <ul>
{links}        </ul>
        "#,
            name = service.name,
            port = service.port,
        )
    }
}
