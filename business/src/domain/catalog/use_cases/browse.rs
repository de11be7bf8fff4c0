use async_trait::async_trait;

use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::model::Product;
use crate::domain::catalog::query::CatalogQuery;

pub struct BrowseCatalogParams {
    pub query: CatalogQuery,
}

#[async_trait]
pub trait BrowseCatalogUseCase: Send + Sync {
    async fn execute(&self, params: BrowseCatalogParams) -> Result<Vec<Product>, CatalogError>;
}
