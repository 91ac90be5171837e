pub mod command;
pub mod notification;
pub mod query;
pub mod seller;
