use crate::{
    abstract_trait::seller::{DynSellerRepository, SellerServiceTrait},
    domain::response::seller::SellerResponse,
};
use async_trait::async_trait;
use prometheus_client::registry::Registry;
use shared::{
    errors::ServiceError,
    utils::{Method, Metrics, Status as StatusUtils, TracingContext},
};
use tokio::time::Instant;
use tracing::{error, info, info_span};

/// How many sellers the top-by-stock ranking returns.
pub const TOP_SELLERS_LIMIT: i64 = 10;

pub struct SellerService {
    pub repository: DynSellerRepository,
    pub metrics: Metrics,
}

impl SellerService {
    pub fn new(repository: DynSellerRepository, registry: &mut Registry) -> Self {
        let metrics = Metrics::new();
        metrics.register(registry, "seller_service", "SellerService");

        Self {
            repository,
            metrics,
        }
    }

    fn start_tracing(&self, operation_name: &str) -> TracingContext {
        let start_time = Instant::now();
        let span = info_span!("seller_service", operation = operation_name);

        span.in_scope(|| info!("Starting operation: {operation_name}"));

        TracingContext { span, start_time }
    }

    fn complete_tracing(&self, tracing_ctx: &TracingContext, is_success: bool, message: &str) {
        let status = if is_success {
            StatusUtils::Success
        } else {
            StatusUtils::Error
        };
        let elapsed = tracing_ctx.elapsed_secs();
        let _entered = tracing_ctx.span.enter();

        if is_success {
            info!(duration_secs = elapsed, "✅ Operation completed successfully: {message}");
        } else {
            error!(duration_secs = elapsed, "❌ Operation failed: {message}");
        }

        self.metrics.record(Method::Get, status, elapsed);
    }
}

#[async_trait]
impl SellerServiceTrait for SellerService {
    async fn find_all(&self) -> Result<Vec<SellerResponse>, ServiceError> {
        let tracing_ctx = self.start_tracing("FindAllSellers");

        match self.repository.find_all().await {
            Ok(sellers) => {
                self.complete_tracing(
                    &tracing_ctx,
                    true,
                    &format!("Fetched {} sellers", sellers.len()),
                );
                Ok(sellers.into_iter().map(SellerResponse::from).collect())
            }
            Err(e) => {
                self.complete_tracing(&tracing_ctx, false, &format!("Failed to fetch sellers: {e}"));
                Err(ServiceError::Repo(e))
            }
        }
    }

    async fn find_by_uuid(&self, uuid: &str) -> Result<SellerResponse, ServiceError> {
        let tracing_ctx = self.start_tracing("FindSellerByUuid");

        match self.repository.find_by_uuid(uuid).await {
            Ok(Some(seller)) => {
                self.complete_tracing(&tracing_ctx, true, &format!("Found seller {uuid}"));
                Ok(SellerResponse::from(seller))
            }
            Ok(None) => {
                self.complete_tracing(&tracing_ctx, false, &format!("Seller {uuid} not found"));
                Err(ServiceError::SellerNotFound(uuid.to_string()))
            }
            Err(e) => {
                self.complete_tracing(
                    &tracing_ctx,
                    false,
                    &format!("Failed to fetch seller {uuid}: {e}"),
                );
                Err(ServiceError::Repo(e))
            }
        }
    }

    async fn top_by_product_stock(&self) -> Result<Vec<SellerResponse>, ServiceError> {
        let tracing_ctx = self.start_tracing("TopSellersByStock");

        match self.repository.top_by_product_stock(TOP_SELLERS_LIMIT).await {
            Ok(sellers) => {
                self.complete_tracing(
                    &tracing_ctx,
                    true,
                    &format!("Ranked {} sellers", sellers.len()),
                );
                Ok(sellers.into_iter().map(SellerResponse::from).collect())
            }
            Err(e) => {
                self.complete_tracing(
                    &tracing_ctx,
                    false,
                    &format!("Failed to rank sellers: {e}"),
                );
                Err(ServiceError::Repo(e))
            }
        }
    }
}
