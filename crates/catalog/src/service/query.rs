use crate::{
    abstract_trait::product::{
        repository::DynProductQueryRepository, service::ProductQueryServiceTrait,
    },
    domain::requests::product::FindAllProducts,
    model::product::Product as ProductModel,
};
use async_trait::async_trait;
use prometheus_client::registry::Registry;
use shared::{
    errors::ServiceError,
    utils::{Method, Metrics, Status as StatusUtils, TracingContext},
};
use tokio::time::Instant;
use tracing::{error, info, info_span};

/// Page size used by the product listing.
pub const DEFAULT_LIST_PAGE_SIZE: i64 = 10;

pub struct ProductQueryService {
    pub query: DynProductQueryRepository,
    pub page_size: i64,
    pub metrics: Metrics,
}

pub struct ProductQueryServiceDeps {
    pub query: DynProductQueryRepository,
    pub page_size: i64,
}

impl ProductQueryService {
    pub fn new(deps: ProductQueryServiceDeps, registry: &mut Registry) -> Self {
        let ProductQueryServiceDeps { query, page_size } = deps;

        let metrics = Metrics::new();
        metrics.register(registry, "product_query_service", "ProductQueryService");

        Self {
            query,
            page_size,
            metrics,
        }
    }

    /// `(page - 1) * page_size`. Pages below 1 give a negative offset, which is
    /// handed to the store untouched.
    pub fn offset_for(&self, page: i64) -> i64 {
        page.saturating_sub(1).saturating_mul(self.page_size)
    }

    fn start_tracing(&self, operation_name: &str, subject: &str) -> TracingContext {
        let start_time = Instant::now();
        let span = info_span!(
            "product_query_service",
            operation = operation_name,
            subject = subject
        );

        span.in_scope(|| info!("Starting operation: {operation_name}"));

        TracingContext { span, start_time }
    }

    fn complete_tracing_success(&self, tracing_ctx: &TracingContext, method: Method, message: &str) {
        self.complete_tracing_internal(tracing_ctx, method, true, message);
    }

    fn complete_tracing_error(
        &self,
        tracing_ctx: &TracingContext,
        method: Method,
        error_message: &str,
    ) {
        self.complete_tracing_internal(tracing_ctx, method, false, error_message);
    }

    fn complete_tracing_internal(
        &self,
        tracing_ctx: &TracingContext,
        method: Method,
        is_success: bool,
        message: &str,
    ) {
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

        self.metrics.record(method, status, elapsed);
    }
}

#[async_trait]
impl ProductQueryServiceTrait for ProductQueryService {
    async fn find_all(&self, req: &FindAllProducts) -> Result<Vec<ProductModel>, ServiceError> {
        let offset = self.offset_for(req.page);

        info!(
            "🔍 Listing products | page: {}, offset: {offset}, limit: {}",
            req.page, self.page_size
        );

        let tracing_ctx = self.start_tracing("FindAllProducts", &req.page.to_string());

        match self.query.find_all(offset, self.page_size).await {
            Ok(products) => {
                self.complete_tracing_success(
                    &tracing_ctx,
                    Method::Get,
                    &format!("Fetched {} products", products.len()),
                );
                Ok(products)
            }
            Err(e) => {
                self.complete_tracing_error(
                    &tracing_ctx,
                    Method::Get,
                    &format!("Failed to fetch products: {e}"),
                );
                Err(ServiceError::Repo(e))
            }
        }
    }

    async fn find_by_uuid(&self, uuid: &str) -> Result<ProductModel, ServiceError> {
        let tracing_ctx = self.start_tracing("FindProductByUuid", uuid);

        match self.query.find_by_uuid(uuid).await {
            Ok(Some(product)) => {
                self.complete_tracing_success(
                    &tracing_ctx,
                    Method::Get,
                    &format!("Found product {uuid}"),
                );
                Ok(product)
            }
            Ok(None) => {
                self.complete_tracing_error(
                    &tracing_ctx,
                    Method::Get,
                    &format!("Product {uuid} not found"),
                );
                Err(ServiceError::ProductNotFound(uuid.to_string()))
            }
            Err(e) => {
                self.complete_tracing_error(
                    &tracing_ctx,
                    Method::Get,
                    &format!("Failed to fetch product {uuid}: {e}"),
                );
                Err(ServiceError::Repo(e))
            }
        }
    }
}
