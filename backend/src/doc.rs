//! OpenAPI document for the JSON API and health probes.

use utoipa::OpenApi;

use crate::domain::{Category, Error, ErrorCode, Product};

/// OpenAPI document served by Swagger UI in debug builds.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Catalog API",
        description = "Read-only product catalog and health probes."
    ),
    servers((url = "/", description = "Relative to the deployment base URL")),
    paths(
        crate::inbound::http::api::list_products,
        crate::inbound::http::api::get_product,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(Product, Category, Error, ErrorCode)),
    tags(
        (name = "products", description = "Product catalog"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
