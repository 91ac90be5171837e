use crate::{
    abstract_trait::product::repository::ProductQueryRepositoryTrait,
    model::product::Product as ProductModel,
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
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
    async fn find_all(
        &self,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<ProductModel>, RepositoryError> {
        info!("🔍 Fetching products | offset: {offset}, limit: {limit}");

        let mut conn = self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {:?}", e);
            RepositoryError::from(e)
        })?;

        let products = sqlx::query_as::<_, ProductModel>(
            r#"
            SELECT
                p.id_product AS product_id,
                p.uuid,
                p.name,
                p.brand,
                p.stock,
                s.uuid AS seller_uuid
            FROM product p
            INNER JOIN seller s ON s.id_seller = p.fk_seller
            ORDER BY p.id_product
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch products: {:?}", e);
            RepositoryError::from(e)
        })?;

        Ok(products)
    }

    async fn find_by_uuid(&self, uuid: &str) -> Result<Option<ProductModel>, RepositoryError> {
        info!("🆔 Fetching product by UUID: {uuid}");

        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query_as::<_, ProductModel>(
            r#"
            SELECT
                p.id_product AS product_id,
                p.uuid,
                p.name,
                p.brand,
                p.stock,
                s.uuid AS seller_uuid
            FROM product p
            INNER JOIN seller s ON s.id_seller = p.fk_seller
            WHERE p.uuid = $1
            "#,
        )
        .bind(uuid)
        .fetch_optional(&mut *conn)
        .await
        .map_err(RepositoryError::from)?;

        Ok(result)
    }
}
