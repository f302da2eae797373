use std::sync::{Arc, Mutex, MutexGuard};

use crate::domain::product::{NewProduct, Product, UpdateProduct};
use crate::domain::types::ProductId;

pub mod errors;
pub mod product;

pub use errors::{RepositoryError, RepositoryResult};

/// Products held in insertion order together with the last id handed out.
#[derive(Debug, Default)]
struct CatalogState {
    products: Vec<Product>,
    last_id: i32,
}

/// Repository implementation backed by a process-local, mutex guarded list.
///
/// Clones share the same underlying catalog, so the repository can be passed
/// around freely between actix workers.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    state: Arc<Mutex<CatalogState>>, // cloned per worker, one catalog per process
}

impl InMemoryRepository {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Acquire the catalog lock.
    fn lock(&self) -> RepositoryResult<MutexGuard<'_, CatalogState>> {
        self.state.lock().map_err(|_| RepositoryError::LockPoisoned)
    }
}

/// Read-only operations for product entities.
pub trait ProductReader {
    /// List every product in insertion order.
    fn list_products(&self) -> RepositoryResult<Vec<Product>>;
    /// Retrieve a product by its identifier.
    fn get_product_by_id(&self, id: ProductId) -> RepositoryResult<Option<Product>>;
}

/// Write operations for product entities.
pub trait ProductWriter {
    /// Assign the next identifier and append the product to the catalog.
    fn create_product(&self, product: &NewProduct) -> RepositoryResult<Product>;
    /// Overwrite all mutable fields. Returns `None` when the id is unknown.
    fn update_product(
        &self,
        id: ProductId,
        update: &UpdateProduct,
    ) -> RepositoryResult<Option<Product>>;
    /// Remove a product, returning it. Returns `None` when the id is unknown.
    fn delete_product(&self, id: ProductId) -> RepositoryResult<Option<Product>>;
}
