use async_trait::async_trait;

use business::domain::errors::RepositoryError;
use business::domain::order::model::Order;
use business::domain::order::repository::OrderRepository;
use business::domain::shared::value_objects::UserId;

pub struct OrderRepositoryInMemory {
    orders: Vec<Order>,
}

impl OrderRepositoryInMemory {
    pub fn new(orders: Vec<Order>) -> Self {
        Self { orders }
    }
}

#[async_trait]
impl OrderRepository for OrderRepositoryInMemory {
    async fn get_all(&self) -> Result<Vec<Order>, RepositoryError> {
        Ok(self.orders.clone())
    }

    async fn find_by_user(&self, user_id: &UserId) -> Result<Vec<Order>, RepositoryError> {
        Ok(self
            .orders
            .iter()
            .filter(|o| &o.user_id == user_id)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::Dataset;

    #[tokio::test]
    async fn should_filter_orders_by_owning_user() {
        let repo = OrderRepositoryInMemory::new(Dataset::seed().orders);

        let orders = repo.find_by_user(&UserId::new("u-1")).await;

        assert!(orders.is_ok());
        let orders = orders.unwrap();
        assert!(!orders.is_empty());
        assert!(orders.iter().all(|o| o.user_id.as_str() == "u-1"));
    }

    #[tokio::test]
    async fn should_return_empty_list_for_user_without_orders() {
        let repo = OrderRepositoryInMemory::new(Dataset::seed().orders);

        let orders = repo.find_by_user(&UserId::new("u-2")).await;

        assert!(orders.is_ok());
        assert!(orders.unwrap().is_empty());
    }
}
