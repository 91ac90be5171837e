use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct FindAllProducts {
    /// 1-based page number. Zero or negative pages are passed through as-is.
    #[serde(default = "default_page")]
    pub page: i64,
}

fn default_page() -> i64 {
    1
}

impl Default for FindAllProducts {
    fn default() -> Self {
        Self {
            page: default_page(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ProductIdQuery {
    /// Product UUID.
    #[validate(length(min = 1, message = "id is required"))]
    pub id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateProductRequest {
    #[serde(default)]
    #[schema(example = "Running Shoe")]
    pub name: String,

    #[serde(default)]
    #[schema(example = "GFG")]
    pub brand: String,

    #[serde(default)]
    #[validate(range(min = 0, message = "Stock cannot be negative"))]
    #[schema(example = 100)]
    pub stock: i32,

    /// UUID of the owning seller.
    #[serde(default)]
    #[validate(length(min = 1, message = "Seller is required"))]
    #[schema(example = "e6461ea4-d698-11eb-890b-0242ac1a0003")]
    pub seller: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateProductRequest {
    /// Taken from the `id` query parameter, never from the body.
    #[serde(skip)]
    pub uuid: String,

    #[serde(default)]
    #[schema(example = "Running Shoe")]
    pub name: String,

    #[serde(default)]
    #[schema(example = "GFG")]
    pub brand: String,

    #[serde(default)]
    #[validate(range(min = 0, message = "Stock cannot be negative"))]
    #[schema(example = 100)]
    pub stock: i32,
}
