use async_trait::async_trait;

use crate::domain::shared::value_objects::ProductId;
use crate::domain::wishlist::errors::WishlistError;
use crate::domain::wishlist::model::Wishlist;

pub struct RemoveFromWishlistParams {
    pub product_id: ProductId,
}

#[async_trait]
pub trait RemoveFromWishlistUseCase: Send + Sync {
    async fn execute(&self, params: RemoveFromWishlistParams) -> Result<Wishlist, WishlistError>;
}
