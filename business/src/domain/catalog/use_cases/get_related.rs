use async_trait::async_trait;

use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::model::Product;
use crate::domain::shared::value_objects::ProductId;

/// Upper bound on the "you might also like" strip.
pub const RELATED_LIMIT: usize = 4;

pub struct GetRelatedProductsParams {
    pub id: ProductId,
}

#[async_trait]
pub trait GetRelatedProductsUseCase: Send + Sync {
    async fn execute(
        &self,
        params: GetRelatedProductsParams,
    ) -> Result<Vec<Product>, CatalogError>;
}
