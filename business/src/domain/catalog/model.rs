use crate::domain::shared::value_objects::ProductId;

use super::value_objects::Category;

/// A storefront product.
///
/// Products are immutable once seeded: the catalog is a read-only
/// collection loaded at startup, and every mutation surface (cart,
/// wishlist) works on snapshots of these records.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub category: Category,
    /// Unit price in dollars, non-negative.
    pub price: f64,
    /// Units available. Cart quantities are not clamped against this.
    pub stock: u32,
    /// Average review rating in the 0.0..=5.0 range.
    pub rating: f64,
    pub reviews: u32,
    /// Ordered image references, never empty.
    pub images: Vec<String>,
    pub is_trending: bool,
    pub is_eco_friendly: bool,
    pub description: String,
}

impl Product {
    /// Rating rounded to the nearest integer, half rounding up.
    ///
    /// The rating filter compares against this value, not the raw
    /// decimal: a 3.6 product counts as 4 stars, a 3.4 as 3.
    pub fn rounded_rating(&self) -> u8 {
        self.rating.round() as u8
    }
}
