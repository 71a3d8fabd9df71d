use crate::{
    abstract_trait::ProductQueryRepositoryTrait, config::ConnectionPool, errors::RepositoryError,
    model::Product,
};
use async_trait::async_trait;
use tracing::{error, info};

#[derive(Clone)]
pub struct ProductQueryRepository {
    db: ConnectionPool,
}

impl ProductQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductQueryRepositoryTrait for ProductQueryRepository {
    async fn find_all(&self) -> Result<Vec<Product>, RepositoryError> {
        info!("🔍 Fetching all products");

        let products = sqlx::query_as::<_, Product>(
            r#"
            SELECT id, name, price, availability, created_at, updated_at
            FROM products
            ORDER BY id DESC
            "#,
        )
        .fetch_all(&self.db)
        .await
        .map_err(|err| {
            error!("❌ Failed to fetch products: {:?}", err);
            RepositoryError::from(err)
        })?;

        Ok(products)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Product>, RepositoryError> {
        info!("🆔 Fetching product by ID: {}", id);

        let product = sqlx::query_as::<_, Product>(
            r#"
            SELECT id, name, price, availability, created_at, updated_at
            FROM products
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await
        .map_err(|err| {
            error!("❌ Failed to fetch product ID {}: {:?}", id, err);
            RepositoryError::from(err)
        })?;

        Ok(product)
    }
}
