use crate::{
    domain::requests::{CreateProductRequest, UpdateProductRequest},
    errors::{RepositoryError, ServiceError},
    model::Product,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynProductQueryRepository = Arc<dyn ProductQueryRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait ProductQueryRepositoryTrait {
    async fn find_all(&self) -> Result<Vec<Product>, RepositoryError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Product>, RepositoryError>;
}

pub type DynProductCommandRepository = Arc<dyn ProductCommandRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait ProductCommandRepositoryTrait {
    async fn create(&self, req: &CreateProductRequest) -> Result<Product, RepositoryError>;
    async fn update(&self, id: i64, req: &UpdateProductRequest)
    -> Result<Option<Product>, RepositoryError>;
    async fn toggle_availability(&self, id: i64) -> Result<Option<Product>, RepositoryError>;
    async fn delete(&self, id: i64) -> Result<bool, RepositoryError>;
}

pub type DynProductQueryService = Arc<dyn ProductQueryServiceTrait + Send + Sync>;

#[async_trait]
pub trait ProductQueryServiceTrait {
    async fn find_all(&self) -> Result<Vec<Product>, ServiceError>;
    async fn find_by_id(&self, id: i64) -> Result<Product, ServiceError>;
}

pub type DynProductCommandService = Arc<dyn ProductCommandServiceTrait + Send + Sync>;

#[async_trait]
pub trait ProductCommandServiceTrait {
    async fn create(&self, req: &CreateProductRequest) -> Result<Product, ServiceError>;
    async fn update(&self, id: i64, req: &UpdateProductRequest)
    -> Result<Product, ServiceError>;
    async fn toggle_availability(&self, id: i64) -> Result<Product, ServiceError>;
    async fn delete(&self, id: i64) -> Result<(), ServiceError>;
}
