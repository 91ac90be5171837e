use crate::{
    abstract_trait::{
        notification::DynNotificationProvider,
        product::{
            repository::{DynProductCommandRepository, DynProductQueryRepository},
            service::{DynProductCommandService, DynProductQueryService},
        },
        seller::{DynSellerRepository, DynSellerService},
    },
    domain::response::product::ProductProjector,
    repository::{
        command::ProductCommandRepository, query::ProductQueryRepository,
        seller::SellerRepository,
    },
    service::{
        command::{ProductCommandService, ProductCommandServiceDeps},
        query::{DEFAULT_LIST_PAGE_SIZE, ProductQueryService, ProductQueryServiceDeps},
        seller::SellerService,
    },
};
use prometheus_client::registry::Registry;
use shared::config::ConnectionPool;
use std::{fmt, sync::Arc};

#[derive(Clone)]
pub struct DependenciesInject {
    pub product_query: DynProductQueryService,
    pub product_command: DynProductCommandService,
    pub seller: DynSellerService,
    pub projector: ProductProjector,
}

impl fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("product_query", &"DynProductQueryService")
            .field("product_command", &"DynProductCommandService")
            .field("seller", &"DynSellerService")
            .field("projector", &self.projector)
            .finish()
    }
}

/// Store seams and process-wide settings the container is wired from.
#[derive(Clone)]
pub struct DependenciesInjectDeps {
    pub product_query_repo: DynProductQueryRepository,
    pub product_command_repo: DynProductCommandRepository,
    pub seller_repo: DynSellerRepository,
    pub notifier: DynNotificationProvider,
    pub base_url: String,
}

impl DependenciesInjectDeps {
    pub fn postgres(
        pool: ConnectionPool,
        notifier: DynNotificationProvider,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            product_query_repo: Arc::new(ProductQueryRepository::new(pool.clone())),
            product_command_repo: Arc::new(ProductCommandRepository::new(pool.clone())),
            seller_repo: Arc::new(SellerRepository::new(pool)),
            notifier,
            base_url: base_url.into(),
        }
    }
}

impl DependenciesInject {
    pub fn new(deps: DependenciesInjectDeps, registry: &mut Registry) -> Self {
        let DependenciesInjectDeps {
            product_query_repo,
            product_command_repo,
            seller_repo,
            notifier,
            base_url,
        } = deps;

        let product_query: DynProductQueryService = Arc::new(ProductQueryService::new(
            ProductQueryServiceDeps {
                query: product_query_repo.clone(),
                page_size: DEFAULT_LIST_PAGE_SIZE,
            },
            registry,
        ));

        let product_command: DynProductCommandService = Arc::new(ProductCommandService::new(
            ProductCommandServiceDeps {
                command: product_command_repo,
                query: product_query_repo,
                seller: seller_repo.clone(),
                notifier,
            },
            registry,
        ));

        let seller: DynSellerService = Arc::new(SellerService::new(seller_repo, registry));

        Self {
            product_query,
            product_command,
            seller,
            projector: ProductProjector::new(base_url),
        }
    }
}
