use crate::model::seller::Seller as SellerModel;
use async_trait::async_trait;
use shared::errors::ConfigError;
use std::{fmt, str::FromStr, sync::Arc};

/// Channel used to warn a seller about stock changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderKind {
    Email,
    Sms,
}

impl ProviderKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderKind::Email => "email",
            ProviderKind::Sms => "sms",
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProviderKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "email" => Ok(ProviderKind::Email),
            "sms" => Ok(ProviderKind::Sms),
            _ => Err(ConfigError::UnsupportedProvider(s.to_string())),
        }
    }
}

pub type DynNotificationProvider = Arc<dyn NotificationProviderTrait + Send + Sync>;

#[async_trait]
pub trait NotificationProviderTrait {
    /// Fire-and-forget: delivery problems are logged by the provider and
    /// never reach the caller.
    async fn stock_changed(
        &self,
        old_stock: i32,
        new_stock: i32,
        product: &str,
        seller: &SellerModel,
    );

    fn kind(&self) -> ProviderKind;
}
