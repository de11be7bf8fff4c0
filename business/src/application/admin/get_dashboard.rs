use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::admin::errors::AdminError;
use crate::domain::admin::model::{DashboardReport, RECENT_ORDERS_LIMIT};
use crate::domain::admin::use_cases::get_dashboard::GetDashboardUseCase;
use crate::domain::auth::repository::UserRepository;
use crate::domain::catalog::repository::CatalogRepository;
use crate::domain::logger::Logger;
use crate::domain::order::repository::OrderRepository;

pub struct GetDashboardUseCaseImpl {
    pub catalog: Arc<dyn CatalogRepository>,
    pub users: Arc<dyn UserRepository>,
    pub orders: Arc<dyn OrderRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetDashboardUseCase for GetDashboardUseCaseImpl {
    async fn execute(&self) -> Result<DashboardReport, AdminError> {
        let orders = self.orders.get_all().await?;
        let users = self.users.get_all().await?;
        let products = self.catalog.get_all().await?;

        let report = DashboardReport {
            total_revenue: orders.iter().map(|o| o.total_amount).sum(),
            total_sales: orders.len(),
            total_customers: users.iter().filter(|u| !u.is_admin()).count(),
            total_products: products.len(),
            recent_orders: orders.into_iter().take(RECENT_ORDERS_LIMIT).collect(),
        };

        self.logger.info(&format!(
            "Dashboard report: {} sales, {:.2} revenue",
            report.total_sales, report.total_revenue
        ));
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use mockall::mock;

    use super::*;
    use crate::domain::auth::model::{Role, User};
    use crate::domain::catalog::model::Product;
    use crate::domain::catalog::value_objects::Category;
    use crate::domain::errors::RepositoryError;
    use crate::domain::order::model::{Order, OrderStatus};
    use crate::domain::shared::value_objects::{OrderId, ProductId, UserId};

    mock! {
        pub CatalogRepo {}

        #[async_trait]
        impl CatalogRepository for CatalogRepo {
            async fn get_all(&self) -> Result<Vec<Product>, RepositoryError>;
            async fn get_by_id(&self, id: &ProductId) -> Result<Product, RepositoryError>;
            async fn find_by_category(&self, category: Category) -> Result<Vec<Product>, RepositoryError>;
        }
    }

    mock! {
        pub UserRepo {}

        #[async_trait]
        impl UserRepository for UserRepo {
            async fn get_all(&self) -> Result<Vec<User>, RepositoryError>;
            async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError>;
        }
    }

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

    fn order(id: &str, total: f64) -> Order {
        Order {
            id: OrderId::new(id),
            user_id: UserId::new("u-1"),
            lines: vec![],
            total_amount: total,
            status: OrderStatus::Pending,
            created_at: Utc::now(),
        }
    }

    fn user(id: &str, role: Role) -> User {
        User {
            id: UserId::new(id),
            name: format!("User {id}"),
            email: format!("{id}@example.com"),
            role,
            created_at: Utc::now(),
        }
    }

    fn product(id: &str) -> Product {
        Product {
            id: ProductId::new(id),
            name: format!("Product {id}"),
            category: Category::Fashion,
            price: 10.0,
            stock: 1,
            rating: 4.0,
            reviews: 1,
            images: vec!["img".to_string()],
            is_trending: false,
            is_eco_friendly: false,
            description: String::new(),
        }
    }

    #[tokio::test]
    async fn should_aggregate_revenue_counts_and_recent_orders() {
        let mut mock_orders = MockOrderRepo::new();
        mock_orders.expect_get_all().returning(|| {
            Ok((1..=7).map(|n| order(&format!("o-{n}"), 10.0)).collect())
        });

        let mut mock_users = MockUserRepo::new();
        mock_users.expect_get_all().returning(|| {
            Ok(vec![
                user("u-1", Role::Customer),
                user("u-2", Role::Customer),
                user("u-3", Role::Admin),
            ])
        });

        let mut mock_catalog = MockCatalogRepo::new();
        mock_catalog
            .expect_get_all()
            .returning(|| Ok(vec![product("p-1"), product("p-2")]));

        let use_case = GetDashboardUseCaseImpl {
            catalog: Arc::new(mock_catalog),
            users: Arc::new(mock_users),
            orders: Arc::new(mock_orders),
            logger: mock_logger(),
        };

        let result = use_case.execute().await;

        assert!(result.is_ok());
        let report = result.unwrap();
        assert_eq!(report.total_revenue, 70.0);
        assert_eq!(report.total_sales, 7);
        assert_eq!(report.total_customers, 2);
        assert_eq!(report.total_products, 2);
        assert_eq!(report.recent_orders.len(), RECENT_ORDERS_LIMIT);
        assert_eq!(report.recent_orders[0].id.as_str(), "o-1");
    }
}
