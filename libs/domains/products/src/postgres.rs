use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, QueryOrder};

use crate::{
    entity,
    error::{ProductError, ProductResult},
    models::{CreateProduct, Product},
    repository::ProductRepository,
};

/// PostgreSQL implementation of [`ProductRepository`]
pub struct PgProductRepository {
    db: DatabaseConnection,
}

impl PgProductRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn list(&self) -> ProductResult<Vec<Product>> {
        let models = entity::Entity::find()
            .order_by_desc(entity::Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Product::from).collect())
    }

    async fn get_by_id(&self, id: i32) -> ProductResult<Option<Product>> {
        let model = entity::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(Product::from))
    }

    async fn create(&self, input: CreateProduct) -> ProductResult<Product> {
        let active_model: entity::ActiveModel = input.into();
        let model = active_model.insert(&self.db).await?;

        tracing::info!(product_id = model.id, "Created product");
        Ok(model.into())
    }

    async fn update(&self, product: &Product) -> ProductResult<Product> {
        let active_model: entity::ActiveModel = product.into();

        let model = active_model.update(&self.db).await.map_err(|e| match e {
            DbErr::RecordNotUpdated => ProductError::NotFound(product.id),
            other => ProductError::Database(other),
        })?;

        tracing::info!(product_id = model.id, "Updated product");
        Ok(model.into())
    }

    async fn delete(&self, product: &Product) -> ProductResult<()> {
        let result = entity::Entity::delete_by_id(product.id)
            .exec(&self.db)
            .await?;

        if result.rows_affected == 0 {
            return Err(ProductError::NotFound(product.id));
        }

        tracing::info!(product_id = product.id, "Deleted product");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    fn model(id: i32, name: &str, availability: bool) -> entity::Model {
        let now = Utc::now();
        entity::Model {
            id,
            name: name.to_string(),
            price: 100.0,
            availability,
            created_at: now.into(),
            updated_at: now.into(),
        }
    }

    #[tokio::test]
    async fn test_list_maps_models() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![model(2, "Teclado", true), model(1, "Mouse", false)]])
            .into_connection();

        let products = PgProductRepository::new(db).list().await.unwrap();

        assert_eq!(products.len(), 2);
        assert_eq!(products[0].id, 2);
        assert_eq!(products[1].name, "Mouse");
    }

    #[tokio::test]
    async fn test_list_orders_by_id_desc() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<entity::Model>::new()])
            .into_connection();
        let repo = PgProductRepository::new(db);
        repo.list().await.unwrap();

        let log = repo.db.into_transaction_log();
        let sql = format!("{:?}", log[0]);
        assert!(sql.contains(r#"ORDER BY \"products\".\"id\" DESC"#), "{sql}");
    }

    #[tokio::test]
    async fn test_get_by_id_missing() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<entity::Model>::new()])
            .into_connection();

        let product = PgProductRepository::new(db).get_by_id(2000).await.unwrap();
        assert!(product.is_none());
    }

    #[tokio::test]
    async fn test_create_returns_inserted_row() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![model(7, "Monitor", true)]])
            .into_connection();

        let product = PgProductRepository::new(db)
            .create(CreateProduct {
                name: "Monitor".to_string(),
                price: 100.0,
                availability: None,
            })
            .await
            .unwrap();

        assert_eq!(product.id, 7);
        assert!(product.availability);
    }

    #[tokio::test]
    async fn test_update_returns_updated_row() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![model(3, "Monitor", false)]])
            .into_connection();

        let mut product: Product = model(3, "Monitor", true).into();
        product.toggle_availability();

        let updated = PgProductRepository::new(db).update(&product).await.unwrap();
        assert_eq!(updated.id, 3);
        assert!(!updated.availability);
    }

    #[tokio::test]
    async fn test_update_vanished_row_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<entity::Model>::new()])
            .into_connection();

        let product: Product = model(3, "Monitor", true).into();
        let err = PgProductRepository::new(db).update(&product).await.unwrap_err();
        assert!(matches!(err, ProductError::NotFound(3)));
    }

    #[tokio::test]
    async fn test_delete() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([
                MockExecResult {
                    last_insert_id: 0,
                    rows_affected: 1,
                },
                MockExecResult {
                    last_insert_id: 0,
                    rows_affected: 0,
                },
            ])
            .into_connection();
        let repo = PgProductRepository::new(db);
        let product: Product = model(5, "Monitor", true).into();

        assert!(repo.delete(&product).await.is_ok());
        assert!(matches!(
            repo.delete(&product).await,
            Err(ProductError::NotFound(5))
        ));
    }

    #[tokio::test]
    async fn test_query_error_is_database_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom("connection reset".to_string())])
            .into_connection();

        let err = PgProductRepository::new(db).list().await.unwrap_err();
        assert!(matches!(err, ProductError::Database(_)));
    }
}
