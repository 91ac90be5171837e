use crate::domain::response::seller::SellerResponse;
use anyhow::Result;
use async_trait::async_trait;
use shared::errors::ServiceError;
use std::sync::Arc;

pub type DynSellerService = Arc<dyn SellerServiceTrait + Send + Sync>;

#[async_trait]
pub trait SellerServiceTrait {
    async fn find_all(&self) -> Result<Vec<SellerResponse>, ServiceError>;
    async fn find_by_uuid(&self, uuid: &str) -> Result<SellerResponse, ServiceError>;
    async fn top_by_product_stock(&self) -> Result<Vec<SellerResponse>, ServiceError>;
}
