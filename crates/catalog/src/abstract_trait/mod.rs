pub mod notification;
pub mod product;
pub mod seller;
