use async_trait::async_trait;

use crate::domain::catalog::model::Product;
use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::ProductId;

use super::model::Cart;

/// Session-scoped cart store.
///
/// Each mutating method runs the whole mutation under a single lock and
/// returns the resulting cart snapshot, so concurrent callers observe
/// the run-to-completion semantics the aggregate's invariants assume.
#[async_trait]
pub trait CartStore: Send + Sync {
    async fn get(&self) -> Result<Cart, RepositoryError>;
    async fn add_item(&self, product: Product, quantity: u32) -> Result<Cart, RepositoryError>;
    async fn remove_item(&self, product_id: &ProductId) -> Result<Cart, RepositoryError>;
    async fn set_quantity(
        &self,
        product_id: &ProductId,
        quantity: i64,
    ) -> Result<Cart, RepositoryError>;
    async fn clear(&self) -> Result<(), RepositoryError>;
}
