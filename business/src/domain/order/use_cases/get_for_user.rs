use async_trait::async_trait;

use crate::domain::order::errors::OrderError;
use crate::domain::order::model::Order;
use crate::domain::shared::value_objects::UserId;

pub struct GetOrdersForUserParams {
    pub user_id: UserId,
}

#[async_trait]
pub trait GetOrdersForUserUseCase: Send + Sync {
    async fn execute(&self, params: GetOrdersForUserParams) -> Result<Vec<Order>, OrderError>;
}
