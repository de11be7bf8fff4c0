use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::repository::CartStore;
use crate::domain::cart::use_cases::checkout::{CheckoutReceipt, CheckoutUseCase};
use crate::domain::logger::Logger;

pub struct CheckoutUseCaseImpl {
    pub store: Arc<dyn CartStore>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CheckoutUseCase for CheckoutUseCaseImpl {
    async fn execute(&self) -> Result<CheckoutReceipt, CartError> {
        let cart = self.store.get().await?;
        if cart.is_empty() {
            return Err(CartError::Empty);
        }

        let receipt = CheckoutReceipt {
            item_count: cart.total_count(),
            summary: cart.summary(),
        };

        // Test-mode checkout: no payment, no fulfillment. The cart is
        // emptied and the charged totals are echoed back.
        self.store.clear().await?;

        self.logger.info(&format!(
            "Order placed: {} items, {:.2} charged",
            receipt.item_count, receipt.summary.total
        ));
        Ok(receipt)
    }
}
