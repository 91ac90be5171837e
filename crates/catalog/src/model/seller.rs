use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Seller {
    pub seller_id: i32,
    pub uuid: String,
    pub name: String,
    pub email: String,
    pub phone: String,
}
