use async_trait::async_trait;

use crate::error::ProductResult;
use crate::models::{CreateProduct, Product};

/// Repository trait for Product persistence
///
/// `update` and `delete` take a product previously returned by `get_by_id`;
/// callers resolve "not found" before mutating.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// All products, newest id first
    async fn list(&self) -> ProductResult<Vec<Product>>;

    async fn get_by_id(&self, id: i32) -> ProductResult<Option<Product>>;

    /// Insert a product; availability defaults to `true`
    async fn create(&self, input: CreateProduct) -> ProductResult<Product>;

    /// Persist the full state of `product`
    async fn update(&self, product: &Product) -> ProductResult<Product>;

    async fn delete(&self, product: &Product) -> ProductResult<()>;
}
