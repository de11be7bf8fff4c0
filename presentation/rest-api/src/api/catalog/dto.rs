use poem_openapi::{Enum, Object};
use serde::{Deserialize, Serialize};

use business::domain::catalog::model::Product;
use business::domain::catalog::value_objects::{Category, PriceRange, SortKey};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Enum)]
pub enum CategoryDto {
    #[oai(rename = "fashion")]
    Fashion,
    #[oai(rename = "tech_gadgets")]
    TechGadgets,
    #[oai(rename = "beauty")]
    Beauty,
    #[oai(rename = "home_living")]
    HomeLiving,
    #[oai(rename = "sports_outdoors")]
    SportsOutdoors,
}

impl From<Category> for CategoryDto {
    fn from(category: Category) -> Self {
        match category {
            Category::Fashion => CategoryDto::Fashion,
            Category::TechGadgets => CategoryDto::TechGadgets,
            Category::Beauty => CategoryDto::Beauty,
            Category::HomeLiving => CategoryDto::HomeLiving,
            Category::SportsOutdoors => CategoryDto::SportsOutdoors,
        }
    }
}

impl From<CategoryDto> for Category {
    fn from(dto: CategoryDto) -> Self {
        match dto {
            CategoryDto::Fashion => Category::Fashion,
            CategoryDto::TechGadgets => Category::TechGadgets,
            CategoryDto::Beauty => Category::Beauty,
            CategoryDto::HomeLiving => Category::HomeLiving,
            CategoryDto::SportsOutdoors => Category::SportsOutdoors,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Enum)]
pub enum SortKeyDto {
    #[oai(rename = "trending")]
    Trending,
    #[oai(rename = "rating")]
    Rating,
    #[oai(rename = "price-asc")]
    PriceAsc,
    #[oai(rename = "price-desc")]
    PriceDesc,
}

impl From<SortKeyDto> for SortKey {
    fn from(dto: SortKeyDto) -> Self {
        match dto {
            SortKeyDto::Trending => SortKey::Trending,
            SortKeyDto::Rating => SortKey::Rating,
            SortKeyDto::PriceAsc => SortKey::PriceAsc,
            SortKeyDto::PriceDesc => SortKey::PriceDesc,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct ProductResponse {
    /// Product unique identifier
    pub id: String,
    /// Product name
    pub name: String,
    /// Product category
    pub category: CategoryDto,
    /// Category label as shown on the storefront
    pub category_label: String,
    /// Unit price in dollars
    pub price: f64,
    /// Units available
    pub stock: u32,
    /// Average review rating (0-5)
    pub rating: f64,
    /// Number of reviews
    pub reviews: u32,
    /// Ordered image references
    pub images: Vec<String>,
    /// Whether the product is trending
    pub is_trending: bool,
    /// Whether the product is eco-friendly
    pub is_eco_friendly: bool,
    /// Free-text description
    pub description: String,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id.to_string(),
            name: product.name,
            category: product.category.into(),
            category_label: product.category.label().to_string(),
            price: product.price,
            stock: product.stock,
            rating: product.rating,
            reviews: product.reviews,
            images: product.images,
            is_trending: product.is_trending,
            is_eco_friendly: product.is_eco_friendly,
            description: product.description,
        }
    }
}

/// Parses the `price` query parameter.
///
/// Accepted forms: `all` (or empty) for no filter, `min-max` for an
/// inclusive bucket, and `min-` for a bucket with no upper bound.
pub fn parse_price_filter(raw: &str) -> Result<Option<PriceRange>, String> {
    let raw = raw.trim();
    if raw.is_empty() || raw == "all" {
        return Ok(None);
    }

    let (min, max) = raw
        .split_once('-')
        .ok_or_else(|| format!("Invalid price filter: {raw}"))?;
    let min: f64 = min
        .trim()
        .parse()
        .map_err(|_| format!("Invalid price filter: {raw}"))?;
    let max = match max.trim() {
        "" => None,
        value => Some(
            value
                .parse::<f64>()
                .map_err(|_| format!("Invalid price filter: {raw}"))?,
        ),
    };

    if min < 0.0 || max.is_some_and(|max| max < min) {
        return Err(format!("Invalid price filter: {raw}"));
    }

    Ok(Some(PriceRange { min, max }))
}
