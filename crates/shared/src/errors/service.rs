use crate::errors::repository::RepositoryError;
use thiserror::Error;

/// Every failure a workflow can surface. Not-found kinds carry the identifier
/// that was looked up.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Product is not found with id={0}")]
    ProductNotFound(String),

    #[error("Seller is not found with id={0}")]
    SellerNotFound(String),

    #[error("Repository error: {0}")]
    Repo(#[from] RepositoryError),
}

impl ServiceError {
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            ServiceError::ProductNotFound(_)
                | ServiceError::SellerNotFound(_)
                | ServiceError::Repo(RepositoryError::NotFound)
        )
    }
}
