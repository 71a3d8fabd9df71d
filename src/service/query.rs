use crate::{
    abstract_trait::{DynProductQueryRepository, ProductQueryServiceTrait},
    errors::{RepositoryError, ServiceError},
    model::Product,
};
use async_trait::async_trait;

#[derive(Clone)]
pub struct ProductQueryService {
    query: DynProductQueryRepository,
}

impl ProductQueryService {
    pub fn new(query: DynProductQueryRepository) -> Self {
        Self { query }
    }
}

#[async_trait]
impl ProductQueryServiceTrait for ProductQueryService {
    async fn find_all(&self) -> Result<Vec<Product>, ServiceError> {
        let products = self.query.find_all().await?;
        Ok(products)
    }

    async fn find_by_id(&self, id: i64) -> Result<Product, ServiceError> {
        let product = self.query.find_by_id(id).await?;
        product.ok_or(ServiceError::Repo(RepositoryError::NotFound))
    }
}
