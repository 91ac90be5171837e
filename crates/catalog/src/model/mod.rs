pub mod product;
pub mod seller;
