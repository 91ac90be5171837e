use crate::{abstract_trait::seller::SellerRepositoryTrait, model::seller::Seller as SellerModel};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use tracing::{error, info};

#[derive(Clone)]
pub struct SellerRepository {
    db: ConnectionPool,
}

impl SellerRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SellerRepositoryTrait for SellerRepository {
    async fn find_all(&self) -> Result<Vec<SellerModel>, RepositoryError> {
        info!("🔍 Fetching all sellers");

        let mut conn = self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {:?}", e);
            RepositoryError::from(e)
        })?;

        sqlx::query_as::<_, SellerModel>(
            r#"
            SELECT id_seller AS seller_id, uuid, name, email, phone
            FROM seller
            ORDER BY id_seller
            "#,
        )
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch sellers: {:?}", e);
            RepositoryError::from(e)
        })
    }

    async fn find_by_uuid(&self, uuid: &str) -> Result<Option<SellerModel>, RepositoryError> {
        info!("🆔 Fetching seller by UUID: {uuid}");

        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        sqlx::query_as::<_, SellerModel>(
            r#"
            SELECT id_seller AS seller_id, uuid, name, email, phone
            FROM seller
            WHERE uuid = $1
            "#,
        )
        .bind(uuid)
        .fetch_optional(&mut *conn)
        .await
        .map_err(RepositoryError::from)
    }

    async fn top_by_product_stock(
        &self,
        limit: i64,
    ) -> Result<Vec<SellerModel>, RepositoryError> {
        info!("🏆 Fetching top {limit} sellers by product stock");

        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        sqlx::query_as::<_, SellerModel>(
            r#"
            SELECT
                s.id_seller AS seller_id,
                s.uuid,
                s.name,
                s.email,
                s.phone
            FROM seller s
            INNER JOIN product p ON p.fk_seller = s.id_seller
            GROUP BY s.id_seller, s.uuid, s.name, s.email, s.phone
            ORDER BY SUM(p.stock) DESC, s.id_seller
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch top sellers: {:?}", e);
            RepositoryError::from(e)
        })
    }
}
