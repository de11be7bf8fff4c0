use poem_openapi::Object;

use business::domain::wishlist::model::Wishlist;

use crate::api::catalog::dto::ProductResponse;

#[derive(Debug, Clone, Object)]
pub struct WishlistResponse {
    /// Saved products in insertion order
    pub entries: Vec<ProductResponse>,
    /// Set size
    pub count: u64,
}

impl From<Wishlist> for WishlistResponse {
    fn from(wishlist: Wishlist) -> Self {
        Self {
            count: wishlist.count() as u64,
            entries: wishlist
                .entries()
                .iter()
                .cloned()
                .map(|p| p.into())
                .collect(),
        }
    }
}
