use crate::model::seller::Seller as SellerModel;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq, Eq)]
pub struct SellerResponse {
    pub id: i32,
    pub uuid: String,
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl From<SellerModel> for SellerResponse {
    fn from(value: SellerModel) -> Self {
        SellerResponse {
            id: value.seller_id,
            uuid: value.uuid,
            name: value.name,
            email: value.email,
            phone: value.phone,
        }
    }
}
