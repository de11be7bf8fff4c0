use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::CartSummary;

/// Test-mode checkout result: what was charged, nothing fulfilled.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutReceipt {
    pub item_count: u32,
    pub summary: CartSummary,
}

#[async_trait]
pub trait CheckoutUseCase: Send + Sync {
    async fn execute(&self) -> Result<CheckoutReceipt, CartError>;
}
