use async_trait::async_trait;
use chrono::Utc;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

use crate::{
    error::{ProductError, ProductResult},
    models::{CreateProduct, Product},
    repository::ProductRepository,
};

#[derive(Default)]
struct Store {
    products: BTreeMap<i32, Product>,
    last_id: i32,
}

/// In-process [`ProductRepository`] with serial ids, for tests and local runs.
#[derive(Default)]
pub struct InMemoryProductRepository {
    store: RwLock<Store>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn list(&self) -> ProductResult<Vec<Product>> {
        let store = self.store.read().await;
        Ok(store.products.values().rev().cloned().collect())
    }

    async fn get_by_id(&self, id: i32) -> ProductResult<Option<Product>> {
        Ok(self.store.read().await.products.get(&id).cloned())
    }

    async fn create(&self, input: CreateProduct) -> ProductResult<Product> {
        let mut store = self.store.write().await;
        store.last_id += 1;

        let now = Utc::now();
        let product = Product {
            id: store.last_id,
            name: input.name,
            price: input.price,
            availability: input.availability.unwrap_or(true),
            created_at: now,
            updated_at: now,
        };
        store.products.insert(product.id, product.clone());

        tracing::info!(product_id = product.id, "Created product");
        Ok(product)
    }

    async fn update(&self, product: &Product) -> ProductResult<Product> {
        let mut store = self.store.write().await;
        let stored = store
            .products
            .get_mut(&product.id)
            .ok_or(ProductError::NotFound(product.id))?;

        *stored = Product {
            created_at: stored.created_at,
            updated_at: Utc::now(),
            ..product.clone()
        };

        tracing::info!(product_id = product.id, "Updated product");
        Ok(stored.clone())
    }

    async fn delete(&self, product: &Product) -> ProductResult<()> {
        self.store
            .write()
            .await
            .products
            .remove(&product.id)
            .ok_or(ProductError::NotFound(product.id))?;

        tracing::info!(product_id = product.id, "Deleted product");
        Ok(())
    }
}
