use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::model::Product;
use crate::domain::catalog::query;
use crate::domain::catalog::repository::CatalogRepository;
use crate::domain::catalog::use_cases::browse::{BrowseCatalogParams, BrowseCatalogUseCase};
use crate::domain::logger::Logger;

pub struct BrowseCatalogUseCaseImpl {
    pub repository: Arc<dyn CatalogRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl BrowseCatalogUseCase for BrowseCatalogUseCaseImpl {
    async fn execute(&self, params: BrowseCatalogParams) -> Result<Vec<Product>, CatalogError> {
        self.logger.debug(&format!(
            "Browsing catalog: search={:?} category={:?} sort={}",
            params.query.search, params.query.category, params.query.sort
        ));

        let collection = self.repository.get_all().await?;
        let view = query::apply(&collection, &params.query);

        self.logger.info(&format!(
            "Catalog query matched {} of {} products",
            view.len(),
            collection.len()
        ));
        Ok(view)
    }
}
