use async_trait::async_trait;

use crate::domain::shared::value_objects::ProductId;
use crate::domain::wishlist::errors::WishlistError;
use crate::domain::wishlist::model::Wishlist;

pub struct AddToWishlistParams {
    pub product_id: ProductId,
}

#[async_trait]
pub trait AddToWishlistUseCase: Send + Sync {
    async fn execute(&self, params: AddToWishlistParams) -> Result<Wishlist, WishlistError>;
}
