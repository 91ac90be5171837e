use crate::{
    abstract_trait::notification::{NotificationProviderTrait, ProviderKind},
    model::seller::Seller as SellerModel,
};
use async_trait::async_trait;
use tracing::info;

fn stock_warning(
    kind: ProviderKind,
    seller: &SellerModel,
    contact: &str,
    product: &str,
    old_stock: i32,
    new_stock: i32,
) -> String {
    format!(
        "{kind} Warning sent to {} ({contact}): {product} Product stock changed from {old_stock} to {new_stock}",
        seller.uuid
    )
}

/// Warns the seller at their email address.
#[derive(Debug, Clone, Default)]
pub struct EmailProvider;

impl EmailProvider {
    pub fn new() -> Self {
        Self
    }

    pub fn message(
        &self,
        old_stock: i32,
        new_stock: i32,
        product: &str,
        seller: &SellerModel,
    ) -> String {
        stock_warning(
            self.kind(),
            seller,
            &format!("Email: {}", seller.email),
            product,
            old_stock,
            new_stock,
        )
    }
}

#[async_trait]
impl NotificationProviderTrait for EmailProvider {
    async fn stock_changed(
        &self,
        old_stock: i32,
        new_stock: i32,
        product: &str,
        seller: &SellerModel,
    ) {
        info!("📧 {}", self.message(old_stock, new_stock, product, seller));
    }

    fn kind(&self) -> ProviderKind {
        ProviderKind::Email
    }
}

/// Warns the seller at their phone number.
#[derive(Debug, Clone, Default)]
pub struct SmsProvider;

impl SmsProvider {
    pub fn new() -> Self {
        Self
    }

    pub fn message(
        &self,
        old_stock: i32,
        new_stock: i32,
        product: &str,
        seller: &SellerModel,
    ) -> String {
        stock_warning(
            self.kind(),
            seller,
            &format!("Phone: {}", seller.phone),
            product,
            old_stock,
            new_stock,
        )
    }
}

#[async_trait]
impl NotificationProviderTrait for SmsProvider {
    async fn stock_changed(
        &self,
        old_stock: i32,
        new_stock: i32,
        product: &str,
        seller: &SellerModel,
    ) {
        info!("📱 {}", self.message(old_stock, new_stock, product, seller));
    }

    fn kind(&self) -> ProviderKind {
        ProviderKind::Sms
    }
}

/// The configured channel, chosen once at startup.
#[derive(Debug, Clone)]
pub enum NotificationProvider {
    Email(EmailProvider),
    Sms(SmsProvider),
}

impl NotificationProvider {
    pub fn from_kind(kind: ProviderKind) -> Self {
        match kind {
            ProviderKind::Email => NotificationProvider::Email(EmailProvider::new()),
            ProviderKind::Sms => NotificationProvider::Sms(SmsProvider::new()),
        }
    }
}

#[async_trait]
impl NotificationProviderTrait for NotificationProvider {
    async fn stock_changed(
        &self,
        old_stock: i32,
        new_stock: i32,
        product: &str,
        seller: &SellerModel,
    ) {
        match self {
            NotificationProvider::Email(p) => {
                p.stock_changed(old_stock, new_stock, product, seller).await
            }
            NotificationProvider::Sms(p) => {
                p.stock_changed(old_stock, new_stock, product, seller).await
            }
        }
    }

    fn kind(&self) -> ProviderKind {
        match self {
            NotificationProvider::Email(p) => p.kind(),
            NotificationProvider::Sms(p) => p.kind(),
        }
    }
}
