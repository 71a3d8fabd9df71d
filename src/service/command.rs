use crate::{
    abstract_trait::{DynProductCommandRepository, ProductCommandServiceTrait},
    domain::requests::{CreateProductRequest, UpdateProductRequest},
    errors::{RepositoryError, ServiceError},
    model::Product,
};
use async_trait::async_trait;

#[derive(Clone)]
pub struct ProductCommandService {
    command: DynProductCommandRepository,
}

impl ProductCommandService {
    pub fn new(command: DynProductCommandRepository) -> Self {
        Self { command }
    }
}

#[async_trait]
impl ProductCommandServiceTrait for ProductCommandService {
    async fn create(&self, req: &CreateProductRequest) -> Result<Product, ServiceError> {
        let product = self.command.create(req).await?;
        Ok(product)
    }

    async fn update(&self, id: i64, req: &UpdateProductRequest) -> Result<Product, ServiceError> {
        let product = self.command.update(id, req).await?;
        product.ok_or(ServiceError::Repo(RepositoryError::NotFound))
    }

    async fn toggle_availability(&self, id: i64) -> Result<Product, ServiceError> {
        let product = self.command.toggle_availability(id).await?;
        product.ok_or(ServiceError::Repo(RepositoryError::NotFound))
    }

    async fn delete(&self, id: i64) -> Result<(), ServiceError> {
        let removed = self.command.delete(id).await?;
        if removed {
            Ok(())
        } else {
            Err(ServiceError::Repo(RepositoryError::NotFound))
        }
    }
}
