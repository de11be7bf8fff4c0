use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::cart::repository::CartStore;
use crate::domain::cart::use_cases::remove_item::{RemoveCartItemParams, RemoveCartItemUseCase};
use crate::domain::logger::Logger;

pub struct RemoveCartItemUseCaseImpl {
    pub store: Arc<dyn CartStore>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RemoveCartItemUseCase for RemoveCartItemUseCaseImpl {
    async fn execute(&self, params: RemoveCartItemParams) -> Result<Cart, CartError> {
        // Removing an absent product is a no-op, not an error.
        let cart = self.store.remove_item(&params.product_id).await?;

        self.logger
            .info(&format!("Removed {} from cart", params.product_id));
        Ok(cart)
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
        impl CartStore for Store {
            async fn get(&self) -> Result<Cart, RepositoryError>;
            async fn add_item(&self, product: Product, quantity: u32) -> Result<Cart, RepositoryError>;
            async fn remove_item(&self, product_id: &ProductId) -> Result<Cart, RepositoryError>;
            async fn set_quantity(&self, product_id: &ProductId, quantity: i64) -> Result<Cart, RepositoryError>;
            async fn clear(&self) -> Result<(), RepositoryError>;
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
    async fn should_delegate_removal_to_the_store() {
        let mut mock_store = MockStore::new();
        mock_store
            .expect_remove_item()
            .withf(|id| id.as_str() == "p-1")
            .returning(|_| Ok(Cart::new()));

        let use_case = RemoveCartItemUseCaseImpl {
            store: Arc::new(mock_store),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(RemoveCartItemParams {
                product_id: ProductId::new("p-1"),
            })
            .await;

        assert!(result.is_ok());
    }
}
