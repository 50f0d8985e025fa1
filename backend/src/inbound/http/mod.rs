//! HTTP inbound adapter: HTML pages, the JSON API, picture downloads and
//! health probes.

pub mod api;
pub mod error;
pub mod health;
pub mod product_form;
pub mod products;
pub mod state;
pub mod uploads;
pub mod views;

use actix_web::web;

/// Register every catalog route.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.configure(api::configure)
        .configure(products::configure)
        .service(uploads::download_picture);
}
