use async_trait::async_trait;

use crate::domain::catalog::model::Product;
use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::ProductId;

use super::model::Wishlist;

/// Session-scoped wishlist store; mutations run whole under one lock.
#[async_trait]
pub trait WishlistStore: Send + Sync {
    async fn get(&self) -> Result<Wishlist, RepositoryError>;
    async fn add(&self, product: Product) -> Result<Wishlist, RepositoryError>;
    async fn remove(&self, product_id: &ProductId) -> Result<Wishlist, RepositoryError>;
}
