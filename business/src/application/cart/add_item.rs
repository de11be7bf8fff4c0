use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::cart::repository::CartStore;
use crate::domain::cart::use_cases::add_item::{AddCartItemParams, AddCartItemUseCase};
use crate::domain::catalog::repository::CatalogRepository;
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;

pub struct AddCartItemUseCaseImpl {
    pub catalog: Arc<dyn CatalogRepository>,
    pub store: Arc<dyn CartStore>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AddCartItemUseCase for AddCartItemUseCaseImpl {
    async fn execute(&self, params: AddCartItemParams) -> Result<Cart, CartError> {
        // Snapshot the product at add time; later catalog changes must
        // not reprice the line.
        let product = self
            .catalog
            .get_by_id(&params.product_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => CartError::ProductNotFound,
                other => CartError::Repository(other),
            })?;

        let cart = self.store.add_item(product, params.quantity).await?;

        self.logger.info(&format!(
            "Added {}x {} to cart ({} items total)",
            params.quantity.max(1),
            params.product_id,
            cart.total_count()
        ));
        Ok(cart)
    }
}
