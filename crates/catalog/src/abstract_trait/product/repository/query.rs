use crate::model::product::Product as ProductModel;
use anyhow::Result;
use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::sync::Arc;

pub type DynProductQueryRepository = Arc<dyn ProductQueryRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait ProductQueryRepositoryTrait {
    /// `offset` is forwarded to the store untouched, negative values included.
    async fn find_all(&self, offset: i64, limit: i64)
    -> Result<Vec<ProductModel>, RepositoryError>;
    async fn find_by_uuid(&self, uuid: &str) -> Result<Option<ProductModel>, RepositoryError>;
}
