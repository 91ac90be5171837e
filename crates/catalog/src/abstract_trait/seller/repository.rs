use crate::model::seller::Seller as SellerModel;
use anyhow::Result;
use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::sync::Arc;

pub type DynSellerRepository = Arc<dyn SellerRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait SellerRepositoryTrait {
    async fn find_all(&self) -> Result<Vec<SellerModel>, RepositoryError>;
    /// An unknown seller is `Ok(None)`, not an error.
    async fn find_by_uuid(&self, uuid: &str) -> Result<Option<SellerModel>, RepositoryError>;
    /// Sellers ranked by the summed stock of their products, highest first.
    async fn top_by_product_stock(&self, limit: i64)
    -> Result<Vec<SellerModel>, RepositoryError>;
}
