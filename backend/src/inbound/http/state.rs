//! Shared HTTP adapter state.
//!
//! Handlers receive this via `web::Data` and only talk to domain ports, so
//! they can be exercised with fixture or mock ports.

use std::sync::Arc;

use crate::domain::ports::{FixtureProductCommand, FixtureProductQuery, ProductCommand, ProductQuery};
use crate::inbound::http::views::Views;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub products: Arc<dyn ProductCommand>,
    pub catalog: Arc<dyn ProductQuery>,
    pub views: Arc<Views>,
}

impl HttpState {
    /// Bundle the ports and compiled views.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use catalog::domain::ports::{FixtureProductCommand, FixtureProductQuery};
    /// use catalog::inbound::http::state::HttpState;
    /// use catalog::inbound::http::views::Views;
    ///
    /// let state = HttpState::new(
    ///     Arc::new(FixtureProductCommand),
    ///     Arc::new(FixtureProductQuery),
    ///     Arc::new(Views::new().expect("templates compile")),
    /// );
    /// let _ = state.catalog.clone();
    /// ```
    pub fn new(
        products: Arc<dyn ProductCommand>,
        catalog: Arc<dyn ProductQuery>,
        views: Arc<Views>,
    ) -> Self {
        Self {
            products,
            catalog,
            views,
        }
    }

    /// State over an empty catalog.
    ///
    /// # Errors
    ///
    /// Returns the Tera error when the embedded templates fail to compile.
    pub fn fixture() -> Result<Self, tera::Error> {
        Ok(Self::new(
            Arc::new(FixtureProductCommand),
            Arc::new(FixtureProductQuery),
            Arc::new(Views::new()?),
        ))
    }
}
