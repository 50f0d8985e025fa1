//! Product catalog service library.
//!
//! Layers follow a ports-and-adapters split:
//! - [`domain`]: entities, validation, the catalog service and its ports.
//! - [`outbound`]: PostgreSQL and upload-directory adapters.
//! - [`inbound`]: actix-web pages, JSON API and probes.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod settings;

pub use doc::ApiDoc;
pub use middleware::Trace;
