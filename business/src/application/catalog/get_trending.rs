use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::model::Product;
use crate::domain::catalog::repository::CatalogRepository;
use crate::domain::catalog::use_cases::get_trending::{GetTrendingProductsUseCase, TRENDING_LIMIT};
use crate::domain::logger::Logger;

pub struct GetTrendingProductsUseCaseImpl {
    pub repository: Arc<dyn CatalogRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetTrendingProductsUseCase for GetTrendingProductsUseCaseImpl {
    async fn execute(&self) -> Result<Vec<Product>, CatalogError> {
        let trending: Vec<Product> = self
            .repository
            .get_all()
            .await?
            .into_iter()
            .filter(|p| p.is_trending)
            .take(TRENDING_LIMIT)
            .collect();

        self.logger
            .info(&format!("Serving {} trending products", trending.len()));
        Ok(trending)
    }
}
