use async_trait::async_trait;
use parking_lot::RwLock;

use business::domain::cart::model::Cart;
use business::domain::cart::repository::CartStore;
use business::domain::catalog::model::Product;
use business::domain::errors::RepositoryError;
use business::domain::shared::value_objects::ProductId;

/// Session cart behind a single lock. Every mutation runs whole under
/// one write guard, which preserves the run-to-completion semantics the
/// aggregate relies on even with concurrent HTTP handlers.
#[derive(Default)]
pub struct CartStoreInMemory {
    cart: RwLock<Cart>,
}

impl CartStoreInMemory {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CartStore for CartStoreInMemory {
    async fn get(&self) -> Result<Cart, RepositoryError> {
        Ok(self.cart.read().clone())
    }

    async fn add_item(&self, product: Product, quantity: u32) -> Result<Cart, RepositoryError> {
        let mut cart = self.cart.write();
        cart.add_item(product, quantity);
        Ok(cart.clone())
    }

    async fn remove_item(&self, product_id: &ProductId) -> Result<Cart, RepositoryError> {
        let mut cart = self.cart.write();
        cart.remove_item(product_id);
        Ok(cart.clone())
    }

    async fn set_quantity(
        &self,
        product_id: &ProductId,
        quantity: i64,
    ) -> Result<Cart, RepositoryError> {
        let mut cart = self.cart.write();
        cart.set_quantity(product_id, quantity);
        Ok(cart.clone())
    }

    async fn clear(&self) -> Result<(), RepositoryError> {
        self.cart.write().clear();
        Ok(())
    }
}
