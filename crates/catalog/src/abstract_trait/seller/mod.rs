mod repository;
mod service;

pub use self::repository::{DynSellerRepository, SellerRepositoryTrait};
pub use self::service::{DynSellerService, SellerServiceTrait};
