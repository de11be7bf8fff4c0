use async_trait::async_trait;
use parking_lot::RwLock;

use business::domain::catalog::model::Product;
use business::domain::errors::RepositoryError;
use business::domain::shared::value_objects::ProductId;
use business::domain::wishlist::model::Wishlist;
use business::domain::wishlist::repository::WishlistStore;

/// Session wishlist behind a single lock; see `CartStoreInMemory` for
/// the locking discipline.
#[derive(Default)]
pub struct WishlistStoreInMemory {
    wishlist: RwLock<Wishlist>,
}

impl WishlistStoreInMemory {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl WishlistStore for WishlistStoreInMemory {
    async fn get(&self) -> Result<Wishlist, RepositoryError> {
        Ok(self.wishlist.read().clone())
    }

    async fn add(&self, product: Product) -> Result<Wishlist, RepositoryError> {
        let mut wishlist = self.wishlist.write();
        wishlist.add(product);
        Ok(wishlist.clone())
    }

    async fn remove(&self, product_id: &ProductId) -> Result<Wishlist, RepositoryError> {
        let mut wishlist = self.wishlist.write();
        wishlist.remove(product_id);
        Ok(wishlist.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::Dataset;

    #[tokio::test]
    async fn should_add_idempotently_and_remove() {
        let store = WishlistStoreInMemory::new();
        let product = Dataset::seed().products.remove(0);
        let id = product.id.clone();

        store.add(product.clone()).await.expect("add failed");
        let wishlist = store.add(product).await.expect("add failed");
        assert_eq!(wishlist.count(), 1);
        assert!(wishlist.contains(&id));

        let wishlist = store.remove(&id).await.expect("remove failed");
        assert_eq!(wishlist.count(), 0);
    }
}
