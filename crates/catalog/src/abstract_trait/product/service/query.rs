use crate::{domain::requests::product::FindAllProducts, model::product::Product as ProductModel};
use anyhow::Result;
use async_trait::async_trait;
use shared::errors::ServiceError;
use std::sync::Arc;

pub type DynProductQueryService = Arc<dyn ProductQueryServiceTrait + Send + Sync>;

#[async_trait]
pub trait ProductQueryServiceTrait {
    async fn find_all(&self, req: &FindAllProducts) -> Result<Vec<ProductModel>, ServiceError>;
    async fn find_by_uuid(&self, uuid: &str) -> Result<ProductModel, ServiceError>;
}
