//! Read-only JSON API over the catalog.
//!
//! ```text
//! GET /api/products
//! GET /api/products/all
//! GET /api/products/{id}
//! ```
//!
//! Names are returned as stored, without the listing page's uppercasing.

use actix_web::{HttpResponse, get, web};

use crate::domain::{ApiResult, Error, Product, ProductId};
use crate::inbound::http::state::HttpState;

/// List every product ordered by name.
#[utoipa::path(
    get,
    path = "/api/products",
    responses(
        (status = 200, description = "All products", body = [Product]),
        (status = 503, description = "Store unavailable", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["products"],
    operation_id = "listProducts"
)]
pub async fn list_products(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    let products = state.catalog.list_products().await?;
    Ok(HttpResponse::Ok().json(products))
}

/// Fetch one product.
#[utoipa::path(
    get,
    path = "/api/products/{id}",
    params(("id" = String, Path, description = "Product identifier")),
    responses(
        (status = 200, description = "The product", body = Product),
        (status = 404, description = "No product with this id", body = Error),
        (status = 503, description = "Store unavailable", body = Error)
    ),
    tags = ["products"],
    operation_id = "getProduct"
)]
#[get("/api/products/{id}")]
pub async fn get_product(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let not_found = || Error::not_found(format!("product {} not found", path.as_str()));
    let id: ProductId = path.parse().map_err(|_| not_found())?;
    let product = state.catalog.find_product(&id).await?.ok_or_else(not_found)?;
    Ok(HttpResponse::Ok().json(product))
}

/// Register the JSON API; `/api/products/all` aliases the listing.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource(["/api/products", "/api/products/all"]).route(web::get().to(list_products)),
    )
    .service(get_product);
}
