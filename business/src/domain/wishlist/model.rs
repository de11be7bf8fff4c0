use std::collections::HashSet;

use crate::domain::catalog::model::Product;
use crate::domain::shared::value_objects::ProductId;

/// The wishlist: an insertion-ordered set of product snapshots.
///
/// Membership is queried on every catalog card render, so a separate id
/// index keeps `contains` O(1) while the entry list preserves the order
/// products were saved in.
#[derive(Debug, Clone, Default)]
pub struct Wishlist {
    entries: Vec<Product>,
    index: HashSet<ProductId>,
}

impl Wishlist {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[Product] {
        &self.entries
    }

    /// Inserts the product; no-op when already present.
    pub fn add(&mut self, product: Product) {
        if self.index.insert(product.id.clone()) {
            self.entries.push(product);
        }
    }

    /// Removes the product; no-op when absent.
    pub fn remove(&mut self, product_id: &ProductId) {
        if self.index.remove(product_id) {
            self.entries.retain(|p| &p.id != product_id);
        }
    }

    pub fn contains(&self, product_id: &ProductId) -> bool {
        self.index.contains(product_id)
    }

    pub fn count(&self) -> usize {
        self.entries.len()
    }
}
