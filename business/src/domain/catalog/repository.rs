use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::ProductId;

use super::model::Product;
use super::value_objects::Category;

#[async_trait]
pub trait CatalogRepository: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError>;
    async fn get_by_id(&self, id: &ProductId) -> Result<Product, RepositoryError>;
    async fn find_by_category(&self, category: Category) -> Result<Vec<Product>, RepositoryError>;
}
