use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::catalog::repository::CatalogRepository;
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::wishlist::errors::WishlistError;
use crate::domain::wishlist::model::Wishlist;
use crate::domain::wishlist::repository::WishlistStore;
use crate::domain::wishlist::use_cases::add::{AddToWishlistParams, AddToWishlistUseCase};

pub struct AddToWishlistUseCaseImpl {
    pub catalog: Arc<dyn CatalogRepository>,
    pub store: Arc<dyn WishlistStore>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AddToWishlistUseCase for AddToWishlistUseCaseImpl {
    async fn execute(&self, params: AddToWishlistParams) -> Result<Wishlist, WishlistError> {
        let product = self
            .catalog
            .get_by_id(&params.product_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => WishlistError::ProductNotFound,
                other => WishlistError::Repository(other),
            })?;

        // Idempotent: the store ignores a product that is already saved.
        let wishlist = self.store.add(product).await?;

        self.logger.info(&format!(
            "Wishlisted {} ({} entries)",
            params.product_id,
            wishlist.count()
        ));
        Ok(wishlist)
    }
}
