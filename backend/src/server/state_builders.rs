//! Builders for HTTP state ports.

use std::sync::Arc;

use actix_web::web;

use catalog::domain::ProductCatalogService;
use catalog::domain::ports::{
    FixtureProductCommand, FixtureProductQuery, ProductCommand, ProductQuery,
};
use catalog::inbound::http::state::HttpState;
use catalog::inbound::http::views::Views;
use catalog::outbound::persistence::{DbPool, DieselCategoryRepository, DieselProductRepository};
use catalog::outbound::storage::PictureDirectory;

use super::ServerConfig;

/// Build a command/query port pair using the real service when a pool is
/// available, otherwise using fixture implementations.
fn build_service_pair<Pool, S, Cmd, Query, MakeService, Cast>(
    pool: &Option<Pool>,
    make_service: MakeService,
    fixtures: (Arc<Cmd>, Arc<Query>),
    cast: Cast,
) -> (Arc<Cmd>, Arc<Query>)
where
    S: 'static,
    Cmd: ?Sized + 'static,
    Query: ?Sized + 'static,
    MakeService: FnOnce(&Pool) -> S,
    Cast: FnOnce(Arc<S>) -> (Arc<Cmd>, Arc<Query>),
{
    match pool {
        Some(pool) => {
            let service = Arc::new(make_service(pool));
            cast(service)
        }
        None => fixtures,
    }
}

type DieselCatalogService =
    ProductCatalogService<DieselProductRepository, DieselCategoryRepository, PictureDirectory>;

fn diesel_catalog_service(pool: &DbPool, pictures: &PictureDirectory) -> DieselCatalogService {
    ProductCatalogService::new(
        Arc::new(DieselProductRepository::new(pool.clone())),
        Arc::new(DieselCategoryRepository::new(pool.clone())),
        Arc::new(pictures.clone()),
        Arc::new(mockable::DefaultClock),
    )
}

fn build_product_pair(config: &ServerConfig) -> (Arc<dyn ProductCommand>, Arc<dyn ProductQuery>) {
    build_service_pair(
        &config.db_pool,
        |pool| diesel_catalog_service(pool, &config.pictures),
        (
            Arc::new(FixtureProductCommand) as Arc<dyn ProductCommand>,
            Arc::new(FixtureProductQuery) as Arc<dyn ProductQuery>,
        ),
        |service| {
            (
                service.clone() as Arc<dyn ProductCommand>,
                service as Arc<dyn ProductQuery>,
            )
        },
    )
}

/// Assemble the shared handler state.
///
/// # Errors
/// Returns [`std::io::Error`] when the embedded templates fail to compile.
pub(super) fn build_http_state(config: &ServerConfig) -> std::io::Result<web::Data<HttpState>> {
    let views = Views::new()
        .map_err(|err| std::io::Error::other(format!("template compilation failed: {err}")))?;
    let (products, catalog) = build_product_pair(config);
    Ok(web::Data::new(HttpState::new(
        products,
        catalog,
        Arc::new(views),
    )))
}
