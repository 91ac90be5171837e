use crate::{
    abstract_trait::seller::DynSellerService, domain::response::seller::SellerResponse,
    state::AppState,
};
use axum::{
    Json,
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use shared::errors::{ErrorResponse, HttpError};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/api/v1/sellers",
    tag = "Seller",
    responses(
        (status = 200, description = "All sellers", body = Vec<SellerResponse>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn get_sellers(
    Extension(service): Extension<DynSellerService>,
) -> Result<impl IntoResponse, HttpError> {
    let sellers = service
        .find_all()
        .await
        .map_err(|e| HttpError::from_service(e, "Fail to query seller list"))?;

    Ok((StatusCode::OK, Json(sellers)))
}

#[utoipa::path(
    get,
    path = "/api/v1/sellers/{uuid}",
    tag = "Seller",
    params(("uuid" = String, Path, description = "Seller UUID")),
    responses(
        (status = 200, description = "Seller", body = SellerResponse),
        (status = 404, description = "Seller not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn get_seller(
    Extension(service): Extension<DynSellerService>,
    Path(uuid): Path<String>,
) -> Result<impl IntoResponse, HttpError> {
    let seller = service
        .find_by_uuid(&uuid)
        .await
        .map_err(|e| HttpError::from_service(e, "Fail to query seller by uuid"))?;

    Ok((StatusCode::OK, Json(seller)))
}

#[utoipa::path(
    get,
    path = "/api/v2/sellers/top10",
    tag = "Seller",
    responses(
        (status = 200, description = "Sellers ranked by total product stock", body = Vec<SellerResponse>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn get_top_sellers(
    Extension(service): Extension<DynSellerService>,
) -> Result<impl IntoResponse, HttpError> {
    let sellers = service
        .top_by_product_stock()
        .await
        .map_err(|e| HttpError::from_service(e, "Fail to query top 10 seller"))?;

    Ok((StatusCode::OK, Json(sellers)))
}

pub fn seller_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/v1/sellers", get(get_sellers))
        .route("/api/v1/sellers/{uuid}", get(get_seller))
        .route("/api/v2/sellers/top10", get(get_top_sellers))
        .layer(Extension(app_state.di_container.seller.clone()))
}
