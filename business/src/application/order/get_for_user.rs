use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::order::errors::OrderError;
use crate::domain::order::model::Order;
use crate::domain::order::repository::OrderRepository;
use crate::domain::order::use_cases::get_for_user::{
    GetOrdersForUserParams, GetOrdersForUserUseCase,
};

pub struct GetOrdersForUserUseCaseImpl {
    pub repository: Arc<dyn OrderRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetOrdersForUserUseCase for GetOrdersForUserUseCaseImpl {
    async fn execute(&self, params: GetOrdersForUserParams) -> Result<Vec<Order>, OrderError> {
        let orders = self.repository.find_by_user(&params.user_id).await?;

        self.logger.info(&format!(
            "Found {} orders for user {}",
            orders.len(),
            params.user_id
        ));
        Ok(orders)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use mockall::mock;

    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::order::model::OrderStatus;
    use crate::domain::shared::value_objects::{OrderId, UserId};

    mock! {
        pub OrderRepo {}

        #[async_trait]
        impl OrderRepository for OrderRepo {
            async fn get_all(&self) -> Result<Vec<Order>, RepositoryError>;
            async fn find_by_user(&self, user_id: &UserId) -> Result<Vec<Order>, RepositoryError>;
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
    async fn should_return_only_the_users_orders() {
        let mut mock_repo = MockOrderRepo::new();
        mock_repo
            .expect_find_by_user()
            .withf(|id| id.as_str() == "u-1")
            .returning(|user_id| {
                Ok(vec![Order {
                    id: OrderId::new("o-1"),
                    user_id: user_id.clone(),
                    lines: vec![],
                    total_amount: 120.0,
                    status: OrderStatus::Delivered,
                    created_at: Utc::now(),
                }])
            });

        let use_case = GetOrdersForUserUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetOrdersForUserParams {
                user_id: UserId::new("u-1"),
            })
            .await;

        assert!(result.is_ok());
        let orders = result.unwrap();
        assert_eq!(orders.len(), 1);
        assert_eq!(orders[0].id.as_str(), "o-1");
    }

    #[tokio::test]
    async fn should_return_empty_list_for_user_without_orders() {
        let mut mock_repo = MockOrderRepo::new();
        mock_repo.expect_find_by_user().returning(|_| Ok(vec![]));

        let use_case = GetOrdersForUserUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetOrdersForUserParams {
                user_id: UserId::new("u-9"),
            })
            .await;

        assert!(result.is_ok());
        assert!(result.unwrap().is_empty());
    }
}
