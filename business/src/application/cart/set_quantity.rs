use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::cart::repository::CartStore;
use crate::domain::cart::use_cases::set_quantity::{SetCartQuantityParams, SetCartQuantityUseCase};
use crate::domain::logger::Logger;

pub struct SetCartQuantityUseCaseImpl {
    pub store: Arc<dyn CartStore>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl SetCartQuantityUseCase for SetCartQuantityUseCaseImpl {
    async fn execute(&self, params: SetCartQuantityParams) -> Result<Cart, CartError> {
        let cart = self
            .store
            .set_quantity(&params.product_id, params.quantity)
            .await?;

        self.logger.info(&format!(
            "Set quantity of {} to {} ({} items total)",
            params.product_id,
            params.quantity,
            cart.total_count()
        ));
        Ok(cart)
    }
}
