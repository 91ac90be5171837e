use crate::model::product::Product as ProductModel;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// v1 shape: the owning seller is a flat UUID field.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq, Eq)]
pub struct ProductResponseV1 {
    pub id: i32,
    pub uuid: String,
    pub name: String,
    pub brand: String,
    pub stock: i32,
    pub seller_uuid: String,
}

/// v2 shape: the owning seller is nested together with a link to its resource.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq, Eq)]
pub struct ProductResponseV2 {
    pub id: i32,
    pub uuid: String,
    pub name: String,
    pub brand: String,
    pub stock: i32,
    pub seller: SellerInfo,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq, Eq)]
pub struct SellerInfo {
    pub uuid: String,
    #[serde(rename = "_links")]
    pub links: SellerLinks,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq, Eq)]
pub struct SellerLinks {
    #[serde(rename = "self")]
    pub self_link: SelfLink,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq, Eq)]
pub struct SelfLink {
    pub href: String,
}

impl From<&ProductModel> for ProductResponseV1 {
    fn from(value: &ProductModel) -> Self {
        ProductResponseV1 {
            id: value.product_id,
            uuid: value.uuid.clone(),
            name: value.name.clone(),
            brand: value.brand.clone(),
            stock: value.stock,
            seller_uuid: value.seller_uuid.clone(),
        }
    }
}

/// Builds the versioned read models. Holds the public base URL so seller
/// links are computed without touching process-wide state.
#[derive(Debug, Clone)]
pub struct ProductProjector {
    base_url: String,
}

impl ProductProjector {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Seller links always target the v1 seller route.
    pub fn seller_link(&self, seller_uuid: &str) -> String {
        format!("{}/api/v1/sellers/{seller_uuid}", self.base_url)
    }

    pub fn seller_info(&self, seller_uuid: &str) -> SellerInfo {
        SellerInfo {
            uuid: seller_uuid.to_string(),
            links: SellerLinks {
                self_link: SelfLink {
                    href: self.seller_link(seller_uuid),
                },
            },
        }
    }

    pub fn project_v1(&self, product: &ProductModel) -> ProductResponseV1 {
        ProductResponseV1::from(product)
    }

    pub fn project_v2(&self, product: &ProductModel) -> ProductResponseV2 {
        ProductResponseV2 {
            id: product.product_id,
            uuid: product.uuid.clone(),
            name: product.name.clone(),
            brand: product.brand.clone(),
            stock: product.stock,
            seller: self.seller_info(&product.seller_uuid),
        }
    }
}
