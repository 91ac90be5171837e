use crate::{
    abstract_trait::{
        notification::DynNotificationProvider,
        product::{
            repository::{DynProductCommandRepository, DynProductQueryRepository},
            service::ProductCommandServiceTrait,
        },
        seller::DynSellerRepository,
    },
    domain::requests::product::{CreateProductRequest, UpdateProductRequest},
    model::product::{NewProduct, Product as ProductModel},
};
use async_trait::async_trait;
use prometheus_client::registry::Registry;
use shared::{
    errors::{RepositoryError, ServiceError},
    utils::{Method, Metrics, Status as StatusUtils, TracingContext},
};
use tokio::time::Instant;
use tracing::{error, info, info_span};
use uuid::Uuid;

pub struct ProductCommandService {
    pub command: DynProductCommandRepository,
    pub query: DynProductQueryRepository,
    pub seller: DynSellerRepository,
    pub notifier: DynNotificationProvider,
    pub metrics: Metrics,
}

pub struct ProductCommandServiceDeps {
    pub command: DynProductCommandRepository,
    pub query: DynProductQueryRepository,
    pub seller: DynSellerRepository,
    pub notifier: DynNotificationProvider,
}

impl ProductCommandService {
    pub fn new(deps: ProductCommandServiceDeps, registry: &mut Registry) -> Self {
        let ProductCommandServiceDeps {
            command,
            query,
            seller,
            notifier,
        } = deps;

        let metrics = Metrics::new();
        metrics.register(registry, "product_command_service", "ProductCommandService");

        Self {
            command,
            query,
            seller,
            notifier,
            metrics,
        }
    }

    fn start_tracing(&self, operation_name: &str, subject: &str) -> TracingContext {
        let start_time = Instant::now();
        let span = info_span!(
            "product_command_service",
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
impl ProductCommandServiceTrait for ProductCommandService {
    async fn create_product(
        &self,
        req: &CreateProductRequest,
    ) -> Result<ProductModel, ServiceError> {
        info!("🏗️ Creating product {} for seller {}", req.name, req.seller);

        let tracing_ctx = self.start_tracing("CreateProduct", &req.seller);

        match self.seller.find_by_uuid(&req.seller).await {
            Ok(Some(_)) => {}
            Ok(None) => {
                self.complete_tracing_error(
                    &tracing_ctx,
                    Method::Post,
                    &format!("Seller {} not found", req.seller),
                );
                return Err(ServiceError::SellerNotFound(req.seller.clone()));
            }
            Err(e) => {
                self.complete_tracing_error(
                    &tracing_ctx,
                    Method::Post,
                    &format!("Failed to resolve seller {}: {e}", req.seller),
                );
                return Err(ServiceError::Repo(e));
            }
        }

        let new_product = NewProduct {
            uuid: Uuid::new_v4().to_string(),
            name: req.name.clone(),
            brand: req.brand.clone(),
            stock: req.stock,
            seller_uuid: req.seller.clone(),
        };

        match self.command.create_product(&new_product).await {
            Ok(product) => {
                self.complete_tracing_success(
                    &tracing_ctx,
                    Method::Post,
                    &format!("Created product {}", product.uuid),
                );
                Ok(product)
            }
            // The seller disappeared between the lookup and the insert.
            Err(RepositoryError::NotFound) => {
                self.complete_tracing_error(
                    &tracing_ctx,
                    Method::Post,
                    &format!("Seller {} vanished before insert", req.seller),
                );
                Err(ServiceError::SellerNotFound(req.seller.clone()))
            }
            Err(e) => {
                self.complete_tracing_error(
                    &tracing_ctx,
                    Method::Post,
                    &format!("Failed to create product: {e}"),
                );
                Err(ServiceError::Repo(e))
            }
        }
    }

    async fn update_product(
        &self,
        req: &UpdateProductRequest,
    ) -> Result<ProductModel, ServiceError> {
        info!("🔄 Updating product {}", req.uuid);

        let tracing_ctx = self.start_tracing("UpdateProduct", &req.uuid);

        let current = match self.query.find_by_uuid(&req.uuid).await {
            Ok(Some(product)) => product,
            Ok(None) => {
                self.complete_tracing_error(
                    &tracing_ctx,
                    Method::Put,
                    &format!("Product {} not found", req.uuid),
                );
                return Err(ServiceError::ProductNotFound(req.uuid.clone()));
            }
            Err(e) => {
                self.complete_tracing_error(
                    &tracing_ctx,
                    Method::Put,
                    &format!("Failed to fetch product {}: {e}", req.uuid),
                );
                return Err(ServiceError::Repo(e));
            }
        };

        let old_stock = current.stock;

        if let Err(e) = self.command.update_product(req).await {
            self.complete_tracing_error(
                &tracing_ctx,
                Method::Put,
                &format!("Failed to persist product {}: {e}", req.uuid),
            );
            return Err(ServiceError::Repo(e));
        }

        let updated = ProductModel {
            name: req.name.clone(),
            brand: req.brand.clone(),
            stock: req.stock,
            ..current
        };

        if old_stock != updated.stock {
            // The write above stays committed whatever happens from here on.
            let seller = match self.seller.find_by_uuid(&updated.seller_uuid).await {
                Ok(Some(seller)) => seller,
                Ok(None) => {
                    self.complete_tracing_error(
                        &tracing_ctx,
                        Method::Put,
                        &format!("Seller {} not found", updated.seller_uuid),
                    );
                    return Err(ServiceError::SellerNotFound(updated.seller_uuid.clone()));
                }
                Err(e) => {
                    self.complete_tracing_error(
                        &tracing_ctx,
                        Method::Put,
                        &format!("Failed to resolve seller {}: {e}", updated.seller_uuid),
                    );
                    return Err(ServiceError::Repo(e));
                }
            };

            self.notifier
                .stock_changed(old_stock, updated.stock, &updated.name, &seller)
                .await;
        }

        self.complete_tracing_success(
            &tracing_ctx,
            Method::Put,
            &format!("Updated product {}", updated.uuid),
        );

        Ok(updated)
    }

    async fn delete_product(&self, uuid: &str) -> Result<(), ServiceError> {
        info!("🗑️ Deleting product {uuid}");

        let tracing_ctx = self.start_tracing("DeleteProduct", uuid);

        match self.query.find_by_uuid(uuid).await {
            Ok(Some(_)) => {}
            Ok(None) => {
                self.complete_tracing_error(
                    &tracing_ctx,
                    Method::Delete,
                    &format!("Product {uuid} not found"),
                );
                return Err(ServiceError::ProductNotFound(uuid.to_string()));
            }
            Err(e) => {
                self.complete_tracing_error(
                    &tracing_ctx,
                    Method::Delete,
                    &format!("Failed to fetch product {uuid}: {e}"),
                );
                return Err(ServiceError::Repo(e));
            }
        }

        match self.command.delete_product(uuid).await {
            Ok(()) => {
                self.complete_tracing_success(
                    &tracing_ctx,
                    Method::Delete,
                    &format!("Deleted product {uuid}"),
                );
                Ok(())
            }
            Err(e) => {
                self.complete_tracing_error(
                    &tracing_ctx,
                    Method::Delete,
                    &format!("Failed to delete product {uuid}: {e}"),
                );
                Err(ServiceError::Repo(e))
            }
        }
    }
}
