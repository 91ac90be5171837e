use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A stored product joined with its owning seller's public UUID.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Product {
    pub product_id: i32,
    pub uuid: String,
    pub name: String,
    pub brand: String,
    pub stock: i32,
    pub seller_uuid: String,
}

/// Insert payload; the store resolves `seller_uuid` into its foreign key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProduct {
    pub uuid: String,
    pub name: String,
    pub brand: String,
    pub stock: i32,
    pub seller_uuid: String,
}
