use async_trait::async_trait;

use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::model::Product;

/// Upper bound on the home page "trending now" strip.
pub const TRENDING_LIMIT: usize = 4;

#[async_trait]
pub trait GetTrendingProductsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<Product>, CatalogError>;
}
