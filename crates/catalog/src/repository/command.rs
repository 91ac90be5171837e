use crate::{
    abstract_trait::product::repository::ProductCommandRepositoryTrait,
    domain::requests::product::UpdateProductRequest,
    model::product::{NewProduct, Product as ProductModel},
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use tracing::{error, info};

#[derive(Clone)]
pub struct ProductCommandRepository {
    db: ConnectionPool,
}

impl ProductCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductCommandRepositoryTrait for ProductCommandRepository {
    async fn create_product(&self, product: &NewProduct) -> Result<ProductModel, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        // Inserts nothing when the seller row is gone, which surfaces as NotFound.
        let result = sqlx::query_as::<_, ProductModel>(
            r#"
            INSERT INTO product (uuid, name, brand, stock, fk_seller)
            SELECT $1, $2, $3, $4, s.id_seller
            FROM seller s
            WHERE s.uuid = $5
            RETURNING
                id_product AS product_id,
                uuid,
                name,
                brand,
                stock,
                $5::VARCHAR AS seller_uuid
            "#,
        )
        .bind(&product.uuid)
        .bind(&product.name)
        .bind(&product.brand)
        .bind(product.stock)
        .bind(&product.seller_uuid)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to create product {}: {:?}", product.name, err);
            RepositoryError::from(err)
        })?
        .ok_or(RepositoryError::NotFound)?;

        info!(
            "✅ Created product ID {} ({})",
            result.product_id, result.uuid
        );
        Ok(result)
    }

    async fn update_product(&self, req: &UpdateProductRequest) -> Result<(), RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query(
            r#"
            UPDATE product
            SET name = $1,
                brand = $2,
                stock = $3
            WHERE uuid = $4
            "#,
        )
        .bind(&req.name)
        .bind(&req.brand)
        .bind(req.stock)
        .bind(&req.uuid)
        .execute(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to update product {}: {:?}", req.uuid, err);
            RepositoryError::from(err)
        })?;

        if result.rows_affected() == 0 {
            error!("❌ No product row matched UUID {}", req.uuid);
            return Err(RepositoryError::NotFound);
        }

        info!("🔄 Updated product {}", req.uuid);
        Ok(())
    }

    async fn delete_product(&self, uuid: &str) -> Result<(), RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        sqlx::query("DELETE FROM product WHERE uuid = $1")
            .bind(uuid)
            .execute(&mut *conn)
            .await
            .map_err(|err| {
                error!("❌ Failed to delete product {uuid}: {:?}", err);
                RepositoryError::from(err)
            })?;

        info!("🗑️ Deleted product {uuid}");
        Ok(())
    }
}
