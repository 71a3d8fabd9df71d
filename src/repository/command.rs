use crate::{
    abstract_trait::ProductCommandRepositoryTrait,
    config::ConnectionPool,
    domain::requests::{CreateProductRequest, UpdateProductRequest},
    errors::RepositoryError,
    model::Product,
};
use async_trait::async_trait;
use tracing::{error, info};

#[derive(Clone)]
pub struct ProductCommandRepository {
    db: ConnectionPool,
}

impl ProductCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductCommandRepositoryTrait for ProductCommandRepository {
    async fn create(&self, req: &CreateProductRequest) -> Result<Product, RepositoryError> {
        let product = sqlx::query_as::<_, Product>(
            r#"
            INSERT INTO products (name, price)
            VALUES (?, ?)
            RETURNING id, name, price, availability, created_at, updated_at
            "#,
        )
        .bind(&req.name)
        .bind(req.price)
        .fetch_one(&self.db)
        .await
        .map_err(|err| {
            error!("❌ Failed to create product {}: {:?}", req.name, err);
            RepositoryError::from(err)
        })?;

        info!("✅ Created product ID {} ({})", product.id, product.name);
        Ok(product)
    }

    async fn update(
        &self,
        id: i64,
        req: &UpdateProductRequest,
    ) -> Result<Option<Product>, RepositoryError> {
        let product = sqlx::query_as::<_, Product>(
            r#"
            UPDATE products
            SET name = ?,
                price = ?,
                availability = ?,
                updated_at = CURRENT_TIMESTAMP
            WHERE id = ?
            RETURNING id, name, price, availability, created_at, updated_at
            "#,
        )
        .bind(&req.name)
        .bind(req.price)
        .bind(req.availability)
        .bind(id)
        .fetch_optional(&self.db)
        .await
        .map_err(|err| {
            error!("❌ Failed to update product ID {}: {:?}", id, err);
            RepositoryError::from(err)
        })?;

        if product.is_some() {
            info!("🔄 Updated product ID {}", id);
        }
        Ok(product)
    }

    async fn toggle_availability(&self, id: i64) -> Result<Option<Product>, RepositoryError> {
        let product = sqlx::query_as::<_, Product>(
            r#"
            UPDATE products
            SET availability = NOT availability,
                updated_at = CURRENT_TIMESTAMP
            WHERE id = ?
            RETURNING id, name, price, availability, created_at, updated_at
            "#,
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await
        .map_err(|err| {
            error!("❌ Failed to toggle availability for ID {}: {:?}", id, err);
            RepositoryError::from(err)
        })?;

        if let Some(p) = &product {
            info!("🔄 Toggled availability of product ID {} to {}", id, p.availability);
        }
        Ok(product)
    }

    async fn delete(&self, id: i64) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM products WHERE id = ?")
            .bind(id)
            .execute(&self.db)
            .await
            .map_err(|err| {
                error!("❌ Failed to delete product ID {}: {:?}", id, err);
                RepositoryError::from(err)
            })?;

        let removed = result.rows_affected() > 0;
        if removed {
            info!("🗑️ Deleted product ID {}", id);
        }
        Ok(removed)
    }
}
