use crate::{
    abstract_trait::notification::DynNotificationProvider,
    config::Config,
    di::{DependenciesInject, DependenciesInjectDeps},
    service::notification::NotificationProvider,
};
use prometheus_client::registry::Registry;
use shared::config::ConnectionPool;
use std::{fmt, sync::Arc};
use tokio::sync::Mutex;
use tracing::info;

#[derive(Clone)]
pub struct AppState {
    pub di_container: DependenciesInject,
    pub registry: Arc<Mutex<Registry>>,
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("di_container", &self.di_container)
            .finish()
    }
}

impl AppState {
    pub fn new(pool: ConnectionPool, config: &Config) -> Self {
        let notifier: DynNotificationProvider =
            Arc::new(NotificationProvider::from_kind(config.notification_provider));

        info!(
            "🔔 Stock change notifications go through the {} provider",
            config.notification_provider
        );

        let deps = DependenciesInjectDeps::postgres(pool, notifier, config.base_url.clone());

        Self::from_deps(deps)
    }

    pub fn from_deps(deps: DependenciesInjectDeps) -> Self {
        let mut registry = Registry::default();

        let di_container = DependenciesInject::new(deps, &mut registry);

        Self {
            di_container,
            registry: Arc::new(Mutex::new(registry)),
        }
    }
}
