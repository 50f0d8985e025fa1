//! Domain ports for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod category_repository;
mod picture_store;
mod product_command;
mod product_query;
mod product_repository;

#[cfg(test)]
pub use category_repository::MockCategoryRepository;
pub use category_repository::{
    CategoryRepository, CategoryRepositoryError, FixtureCategoryRepository,
};
#[cfg(test)]
pub use picture_store::MockPictureStore;
pub use picture_store::{FixturePictureStore, PictureStore, PictureStoreError};
#[cfg(test)]
pub use product_command::MockProductCommand;
pub use product_command::{
    DeleteOutcome, FixtureProductCommand, ProductCommand, SaveProductOutcome,
};
#[cfg(test)]
pub use product_query::MockProductQuery;
pub use product_query::{FixtureProductQuery, ProductQuery};
#[cfg(test)]
pub use product_repository::MockProductRepository;
pub use product_repository::{
    FixtureProductRepository, ProductRepository, ProductRepositoryError,
};
