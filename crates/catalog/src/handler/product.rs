use crate::{
    abstract_trait::product::service::{DynProductCommandService, DynProductQueryService},
    domain::{
        requests::product::{
            CreateProductRequest, FindAllProducts, ProductIdQuery, UpdateProductRequest,
        },
        response::product::{ProductProjector, ProductResponseV1, ProductResponseV2},
    },
    middleware::validate::{SimpleValidatedJson, ValidatedQuery},
    state::AppState,
};
use axum::{
    Json,
    extract::Extension,
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, post, put},
};
use serde_json::json;
use shared::errors::{ErrorResponse, HttpError};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/api/v1/products",
    tag = "Product",
    params(FindAllProducts),
    responses(
        (status = 200, description = "Page of products", body = Vec<ProductResponseV1>),
        (status = 400, description = "Malformed query", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn get_products_v1(
    Extension(service): Extension<DynProductQueryService>,
    Extension(projector): Extension<ProductProjector>,
    ValidatedQuery(params): ValidatedQuery<FindAllProducts>,
) -> Result<impl IntoResponse, HttpError> {
    let products = service
        .find_all(&params)
        .await
        .map_err(|e| HttpError::from_service(e, "Fail to query product list"))?;

    let body: Vec<ProductResponseV1> = products.iter().map(|p| projector.project_v1(p)).collect();
    Ok((StatusCode::OK, Json(body)))
}

#[utoipa::path(
    get,
    path = "/api/v1/product",
    tag = "Product",
    params(ProductIdQuery),
    responses(
        (status = 200, description = "Product", body = ProductResponseV1),
        (status = 400, description = "Missing id", body = ErrorResponse),
        (status = 404, description = "Product not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn get_product_v1(
    Extension(service): Extension<DynProductQueryService>,
    Extension(projector): Extension<ProductProjector>,
    ValidatedQuery(params): ValidatedQuery<ProductIdQuery>,
) -> Result<impl IntoResponse, HttpError> {
    let product = service
        .find_by_uuid(&params.id)
        .await
        .map_err(|e| HttpError::from_service(e, "Fail to query product by uuid"))?;

    Ok((StatusCode::OK, Json(projector.project_v1(&product))))
}

#[utoipa::path(
    post,
    path = "/api/v1/product",
    tag = "Product",
    request_body = CreateProductRequest,
    responses(
        (status = 200, description = "Product created", body = ProductResponseV1),
        (status = 400, description = "Invalid body", body = ErrorResponse),
        (status = 404, description = "Seller not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn create_product(
    Extension(service): Extension<DynProductCommandService>,
    Extension(projector): Extension<ProductProjector>,
    SimpleValidatedJson(body): SimpleValidatedJson<CreateProductRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let product = service
        .create_product(&body)
        .await
        .map_err(|e| HttpError::from_service(e, "Fail to insert product"))?;

    Ok((StatusCode::OK, Json(projector.project_v1(&product))))
}

#[utoipa::path(
    put,
    path = "/api/v1/product",
    tag = "Product",
    params(ProductIdQuery),
    request_body = UpdateProductRequest,
    responses(
        (status = 200, description = "Product updated", body = ProductResponseV1),
        (status = 400, description = "Invalid id or body", body = ErrorResponse),
        (status = 404, description = "Product or seller not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn update_product(
    Extension(service): Extension<DynProductCommandService>,
    Extension(projector): Extension<ProductProjector>,
    ValidatedQuery(params): ValidatedQuery<ProductIdQuery>,
    SimpleValidatedJson(mut body): SimpleValidatedJson<UpdateProductRequest>,
) -> Result<impl IntoResponse, HttpError> {
    body.uuid = params.id;

    let product = service
        .update_product(&body)
        .await
        .map_err(|e| HttpError::from_service(e, "Fail to update product"))?;

    Ok((StatusCode::OK, Json(projector.project_v1(&product))))
}

#[utoipa::path(
    delete,
    path = "/api/v1/product",
    tag = "Product",
    params(ProductIdQuery),
    responses(
        (status = 200, description = "Product deleted, empty object body"),
        (status = 400, description = "Missing id", body = ErrorResponse),
        (status = 404, description = "Product not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn delete_product(
    Extension(service): Extension<DynProductCommandService>,
    ValidatedQuery(params): ValidatedQuery<ProductIdQuery>,
) -> Result<impl IntoResponse, HttpError> {
    service
        .delete_product(&params.id)
        .await
        .map_err(|e| HttpError::from_service(e, "Fail to delete product"))?;

    Ok((StatusCode::OK, Json(json!({}))))
}

#[utoipa::path(
    get,
    path = "/api/v2/products",
    tag = "Product",
    params(FindAllProducts),
    responses(
        (status = 200, description = "Page of products with seller links", body = Vec<ProductResponseV2>),
        (status = 400, description = "Malformed query", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn get_products_v2(
    Extension(service): Extension<DynProductQueryService>,
    Extension(projector): Extension<ProductProjector>,
    ValidatedQuery(params): ValidatedQuery<FindAllProducts>,
) -> Result<impl IntoResponse, HttpError> {
    let products = service
        .find_all(&params)
        .await
        .map_err(|e| HttpError::from_service(e, "Fail to query product list"))?;

    let body: Vec<ProductResponseV2> = products.iter().map(|p| projector.project_v2(p)).collect();
    Ok((StatusCode::OK, Json(body)))
}

#[utoipa::path(
    get,
    path = "/api/v2/product",
    tag = "Product",
    params(ProductIdQuery),
    responses(
        (status = 200, description = "Product with seller link", body = ProductResponseV2),
        (status = 400, description = "Missing id", body = ErrorResponse),
        (status = 404, description = "Product not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn get_product_v2(
    Extension(service): Extension<DynProductQueryService>,
    Extension(projector): Extension<ProductProjector>,
    ValidatedQuery(params): ValidatedQuery<ProductIdQuery>,
) -> Result<impl IntoResponse, HttpError> {
    let product = service
        .find_by_uuid(&params.id)
        .await
        .map_err(|e| HttpError::from_service(e, "Fail to query product by uuid"))?;

    Ok((StatusCode::OK, Json(projector.project_v2(&product))))
}

pub fn product_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/v1/products", get(get_products_v1))
        .route("/api/v1/product", get(get_product_v1))
        .route("/api/v1/product", post(create_product))
        .route("/api/v1/product", put(update_product))
        .route("/api/v1/product", delete(delete_product))
        .route("/api/v2/products", get(get_products_v2))
        .route("/api/v2/product", get(get_product_v2))
        .layer(Extension(app_state.di_container.product_query.clone()))
        .layer(Extension(app_state.di_container.product_command.clone()))
        .layer(Extension(app_state.di_container.projector.clone()))
}
