use crate::{
    domain::requests::product::UpdateProductRequest,
    model::product::{NewProduct, Product as ProductModel},
};
use anyhow::Result;
use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::sync::Arc;

pub type DynProductCommandRepository = Arc<dyn ProductCommandRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait ProductCommandRepositoryTrait {
    async fn create_product(&self, product: &NewProduct) -> Result<ProductModel, RepositoryError>;
    /// Overwrites name, brand and stock of the product with `req.uuid`.
    /// Returns `RepositoryError::NotFound` when no row matched.
    async fn update_product(&self, req: &UpdateProductRequest) -> Result<(), RepositoryError>;
    async fn delete_product(&self, uuid: &str) -> Result<(), RepositoryError>;
}
