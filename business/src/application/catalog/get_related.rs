use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::model::Product;
use crate::domain::catalog::repository::CatalogRepository;
use crate::domain::catalog::use_cases::get_related::{
    GetRelatedProductsParams, GetRelatedProductsUseCase, RELATED_LIMIT,
};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;

pub struct GetRelatedProductsUseCaseImpl {
    pub repository: Arc<dyn CatalogRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetRelatedProductsUseCase for GetRelatedProductsUseCaseImpl {
    async fn execute(
        &self,
        params: GetRelatedProductsParams,
    ) -> Result<Vec<Product>, CatalogError> {
        let product = self
            .repository
            .get_by_id(&params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => CatalogError::NotFound,
                other => CatalogError::Repository(other),
            })?;

        // Same category, the product itself excluded, collection order.
        let related: Vec<Product> = self
            .repository
            .find_by_category(product.category)
            .await?
            .into_iter()
            .filter(|p| p.id != product.id)
            .take(RELATED_LIMIT)
            .collect();

        self.logger.info(&format!(
            "Found {} related products for {}",
            related.len(),
            params.id
        ));
        Ok(related)
    }
}
