use async_trait::async_trait;

use business::domain::catalog::model::Product;
use business::domain::catalog::repository::CatalogRepository;
use business::domain::catalog::value_objects::Category;
use business::domain::errors::RepositoryError;
use business::domain::shared::value_objects::ProductId;

/// Read-only catalog backed by the seeded collection. Collection order
/// is preserved by every query.
pub struct CatalogRepositoryInMemory {
    products: Vec<Product>,
}

impl CatalogRepositoryInMemory {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }
}

#[async_trait]
impl CatalogRepository for CatalogRepositoryInMemory {
    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError> {
        Ok(self.products.clone())
    }

    async fn get_by_id(&self, id: &ProductId) -> Result<Product, RepositoryError> {
        self.products
            .iter()
            .find(|p| &p.id == id)
            .cloned()
            .ok_or(RepositoryError::NotFound)
    }

    async fn find_by_category(&self, category: Category) -> Result<Vec<Product>, RepositoryError> {
        Ok(self
            .products
            .iter()
            .filter(|p| p.category == category)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::Dataset;

    #[tokio::test]
    async fn should_find_seeded_product_by_id() {
        let repo = CatalogRepositoryInMemory::new(Dataset::seed().products);

        let product = repo.get_by_id(&ProductId::new("p-01")).await;

        assert!(product.is_ok());
        assert_eq!(product.unwrap().name, "Oversized Denim Jacket");
    }

    #[tokio::test]
    async fn should_report_not_found_for_unknown_id() {
        let repo = CatalogRepositoryInMemory::new(Dataset::seed().products);

        let result = repo.get_by_id(&ProductId::new("p-999")).await;

        assert!(matches!(result, Err(RepositoryError::NotFound)));
    }

    #[tokio::test]
    async fn should_scope_category_queries() {
        let repo = CatalogRepositoryInMemory::new(Dataset::seed().products);

        let beauty = repo.find_by_category(Category::Beauty).await;

        assert!(beauty.is_ok());
        let beauty = beauty.unwrap();
        assert!(!beauty.is_empty());
        assert!(beauty.iter().all(|p| p.category == Category::Beauty));
    }
}
