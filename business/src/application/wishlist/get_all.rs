use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::wishlist::errors::WishlistError;
use crate::domain::wishlist::model::Wishlist;
use crate::domain::wishlist::repository::WishlistStore;
use crate::domain::wishlist::use_cases::get_all::GetWishlistUseCase;

pub struct GetWishlistUseCaseImpl {
    pub store: Arc<dyn WishlistStore>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetWishlistUseCase for GetWishlistUseCaseImpl {
    async fn execute(&self) -> Result<Wishlist, WishlistError> {
        let wishlist = self.store.get().await?;
        self.logger
            .debug(&format!("Wishlist read: {} entries", wishlist.count()));
        Ok(wishlist)
    }
}

#[cfg(test)]
mod tests {
    use mockall::mock;

    use super::*;
    use crate::domain::catalog::model::Product;
    use crate::domain::errors::RepositoryError;
    use crate::domain::shared::value_objects::ProductId;

    mock! {
        pub Store {}

        #[async_trait]
        impl WishlistStore for Store {
            async fn get(&self) -> Result<Wishlist, RepositoryError>;
            async fn add(&self, product: Product) -> Result<Wishlist, RepositoryError>;
            async fn remove(&self, product_id: &ProductId) -> Result<Wishlist, RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    #[tokio::test]
    async fn should_return_the_stored_wishlist() {
        let mut mock_store = MockStore::new();
        mock_store.expect_get().returning(|| Ok(Wishlist::new()));

        let use_case = GetWishlistUseCaseImpl {
            store: Arc::new(mock_store),
            logger: mock_logger(),
        };

        let result = use_case.execute().await;

        assert!(result.is_ok());
        assert_eq!(result.unwrap().count(), 0);
    }
}
