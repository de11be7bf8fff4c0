use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::shared::value_objects::ProductId;

pub struct SetCartQuantityParams {
    pub product_id: ProductId,
    /// Zero and negative values remove the line.
    pub quantity: i64,
}

#[async_trait]
pub trait SetCartQuantityUseCase: Send + Sync {
    async fn execute(&self, params: SetCartQuantityParams) -> Result<Cart, CartError>;
}
