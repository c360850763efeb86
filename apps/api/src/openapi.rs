//! OpenAPI documentation configuration

use utoipa::OpenApi;

/// Combined OpenAPI documentation for the Ecoleta API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Ecoleta API",
        version = "0.1.0",
        description = "REST service for registering and discovering waste-collection points",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    nest(
        (path = "/items", api = domain_items::handlers::ApiDoc),
        (path = "/points", api = domain_points::handlers::ApiDoc)
    )
)]
pub struct ApiDoc;
