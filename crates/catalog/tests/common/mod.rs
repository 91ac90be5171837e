#![allow(dead_code)]

use async_trait::async_trait;
use catalog::{
    abstract_trait::{
        notification::{DynNotificationProvider, NotificationProviderTrait, ProviderKind},
        product::repository::{ProductCommandRepositoryTrait, ProductQueryRepositoryTrait},
        seller::SellerRepositoryTrait,
    },
    di::DependenciesInjectDeps,
    domain::requests::product::UpdateProductRequest,
    model::{
        product::{NewProduct, Product},
        seller::Seller,
    },
};
use shared::errors::RepositoryError;
use std::sync::{
    Arc, Mutex,
    atomic::{AtomicBool, Ordering},
};

pub const BASE_URL: &str = "http://localhost:8080";

#[derive(Default)]
struct Tables {
    products: Vec<Product>,
    sellers: Vec<Seller>,
    next_product_id: i32,
}

/// In-memory stand-in for the three Postgres repositories. Negative offsets
/// are rejected the way Postgres rejects them.
#[derive(Default)]
pub struct InMemoryStore {
    tables: Mutex<Tables>,
    fail_writes: AtomicBool,
    pub inserts: Mutex<Vec<NewProduct>>,
    pub updates: Mutex<Vec<UpdateProductRequest>>,
    pub list_calls: Mutex<Vec<(i64, i64)>>,
}

impl InMemoryStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Seller `s1` owning product `p1` with stock 5.
    pub fn seeded() -> Arc<Self> {
        let store = Self::new();
        store.add_seller(seller("s1"));
        store.add_product("p1", "product1", "GFG", 5, "s1");
        store
    }

    pub fn add_seller(&self, seller: Seller) {
        self.tables.lock().unwrap().sellers.push(seller);
    }

    pub fn remove_seller(&self, uuid: &str) {
        self.tables.lock().unwrap().sellers.retain(|s| s.uuid != uuid);
    }

    pub fn add_product(&self, uuid: &str, name: &str, brand: &str, stock: i32, seller_uuid: &str) {
        let mut tables = self.tables.lock().unwrap();
        tables.next_product_id += 1;
        let product_id = tables.next_product_id;
        tables.products.push(Product {
            product_id,
            uuid: uuid.into(),
            name: name.into(),
            brand: brand.into(),
            stock,
            seller_uuid: seller_uuid.into(),
        });
    }

    pub fn product(&self, uuid: &str) -> Option<Product> {
        self.tables
            .lock()
            .unwrap()
            .products
            .iter()
            .find(|p| p.uuid == uuid)
            .cloned()
    }

    pub fn product_count(&self) -> usize {
        self.tables.lock().unwrap().products.len()
    }

    pub fn fail_writes(&self) {
        self.fail_writes.store(true, Ordering::SeqCst);
    }

    fn check_writes(&self) -> Result<(), RepositoryError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(RepositoryError::Custom("connection reset by peer".into()));
        }
        Ok(())
    }
}

pub fn seller(uuid: &str) -> Seller {
    Seller {
        seller_id: uuid.trim_start_matches('s').parse().unwrap_or(0),
        uuid: uuid.into(),
        name: format!("seller {uuid}"),
        email: format!("{uuid}@example.com"),
        phone: "+62-811-000".into(),
    }
}

#[async_trait]
impl ProductQueryRepositoryTrait for InMemoryStore {
    async fn find_all(&self, offset: i64, limit: i64) -> Result<Vec<Product>, RepositoryError> {
        self.list_calls.lock().unwrap().push((offset, limit));

        if offset < 0 {
            return Err(RepositoryError::Custom(
                "OFFSET must not be negative".into(),
            ));
        }

        let tables = self.tables.lock().unwrap();
        Ok(tables
            .products
            .iter()
            .skip(offset as usize)
            .take(limit as usize)
            .cloned()
            .collect())
    }

    async fn find_by_uuid(&self, uuid: &str) -> Result<Option<Product>, RepositoryError> {
        Ok(self.product(uuid))
    }
}

#[async_trait]
impl ProductCommandRepositoryTrait for InMemoryStore {
    async fn create_product(&self, product: &NewProduct) -> Result<Product, RepositoryError> {
        self.check_writes()?;
        self.inserts.lock().unwrap().push(product.clone());

        let mut tables = self.tables.lock().unwrap();
        if !tables.sellers.iter().any(|s| s.uuid == product.seller_uuid) {
            return Err(RepositoryError::NotFound);
        }

        tables.next_product_id += 1;
        let stored = Product {
            product_id: tables.next_product_id,
            uuid: product.uuid.clone(),
            name: product.name.clone(),
            brand: product.brand.clone(),
            stock: product.stock,
            seller_uuid: product.seller_uuid.clone(),
        };
        tables.products.push(stored.clone());
        Ok(stored)
    }

    async fn update_product(&self, req: &UpdateProductRequest) -> Result<(), RepositoryError> {
        self.check_writes()?;
        self.updates.lock().unwrap().push(req.clone());

        let mut tables = self.tables.lock().unwrap();
        let product = tables
            .products
            .iter_mut()
            .find(|p| p.uuid == req.uuid)
            .ok_or(RepositoryError::NotFound)?;

        product.name = req.name.clone();
        product.brand = req.brand.clone();
        product.stock = req.stock;
        Ok(())
    }

    async fn delete_product(&self, uuid: &str) -> Result<(), RepositoryError> {
        self.check_writes()?;
        self.tables
            .lock()
            .unwrap()
            .products
            .retain(|p| p.uuid != uuid);
        Ok(())
    }
}

#[async_trait]
impl SellerRepositoryTrait for InMemoryStore {
    async fn find_all(&self) -> Result<Vec<Seller>, RepositoryError> {
        Ok(self.tables.lock().unwrap().sellers.clone())
    }

    async fn find_by_uuid(&self, uuid: &str) -> Result<Option<Seller>, RepositoryError> {
        Ok(self
            .tables
            .lock()
            .unwrap()
            .sellers
            .iter()
            .find(|s| s.uuid == uuid)
            .cloned())
    }

    async fn top_by_product_stock(&self, limit: i64) -> Result<Vec<Seller>, RepositoryError> {
        let tables = self.tables.lock().unwrap();

        let mut ranked: Vec<(i64, Seller)> = tables
            .sellers
            .iter()
            .filter_map(|s| {
                let owned: Vec<&Product> = tables
                    .products
                    .iter()
                    .filter(|p| p.seller_uuid == s.uuid)
                    .collect();
                if owned.is_empty() {
                    return None;
                }
                let total = owned.iter().map(|p| i64::from(p.stock)).sum();
                Some((total, s.clone()))
            })
            .collect();

        ranked.sort_by(|(a_total, a), (b_total, b)| {
            b_total.cmp(a_total).then(a.seller_id.cmp(&b.seller_id))
        });

        Ok(ranked
            .into_iter()
            .take(limit as usize)
            .map(|(_, s)| s)
            .collect())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockChange {
    pub old_stock: i32,
    pub new_stock: i32,
    pub product: String,
    pub seller: Seller,
}

/// Notifier that only remembers what it was asked to send.
#[derive(Default)]
pub struct RecordingNotifier {
    pub sent: Mutex<Vec<StockChange>>,
}

impl RecordingNotifier {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn sent(&self) -> Vec<StockChange> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl NotificationProviderTrait for RecordingNotifier {
    async fn stock_changed(&self, old_stock: i32, new_stock: i32, product: &str, seller: &Seller) {
        self.sent.lock().unwrap().push(StockChange {
            old_stock,
            new_stock,
            product: product.to_string(),
            seller: seller.clone(),
        });
    }

    fn kind(&self) -> ProviderKind {
        ProviderKind::Email
    }
}

pub fn deps(store: &Arc<InMemoryStore>, notifier: &Arc<RecordingNotifier>) -> DependenciesInjectDeps {
    let notifier: DynNotificationProvider = notifier.clone();
    DependenciesInjectDeps {
        product_query_repo: store.clone(),
        product_command_repo: store.clone(),
        seller_repo: store.clone(),
        notifier,
        base_url: BASE_URL.to_string(),
    }
}
