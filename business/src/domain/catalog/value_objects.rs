use serde::{Deserialize, Serialize};

/// The fixed set of storefront categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Fashion,
    TechGadgets,
    Beauty,
    HomeLiving,
    SportsOutdoors,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Fashion,
        Category::TechGadgets,
        Category::Beauty,
        Category::HomeLiving,
        Category::SportsOutdoors,
    ];

    /// Human-facing label, as shown on the storefront.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Fashion => "Fashion",
            Category::TechGadgets => "Tech & Gadgets",
            Category::Beauty => "Beauty",
            Category::HomeLiving => "Home & Living",
            Category::SportsOutdoors => "Sports & Outdoors",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::Fashion => write!(f, "fashion"),
            Category::TechGadgets => write!(f, "tech_gadgets"),
            Category::Beauty => write!(f, "beauty"),
            Category::HomeLiving => write!(f, "home_living"),
            Category::SportsOutdoors => write!(f, "sports_outdoors"),
        }
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fashion" => Ok(Category::Fashion),
            "tech_gadgets" => Ok(Category::TechGadgets),
            "beauty" => Ok(Category::Beauty),
            "home_living" => Ok(Category::HomeLiving),
            "sports_outdoors" => Ok(Category::SportsOutdoors),
            _ => Err(format!("Invalid category: {}", s)),
        }
    }
}

/// An inclusive price bucket. `max` of `None` means unbounded above.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceRange {
    pub min: f64,
    pub max: Option<f64>,
}

impl PriceRange {
    pub fn contains(&self, price: f64) -> bool {
        price >= self.min && self.max.is_none_or(|max| price <= max)
    }
}

/// Ordering applied after filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// Trending products first, ties keep collection order.
    #[default]
    Trending,
    /// Higher rating first.
    Rating,
    PriceAsc,
    PriceDesc,
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortKey::Trending => write!(f, "trending"),
            SortKey::Rating => write!(f, "rating"),
            SortKey::PriceAsc => write!(f, "price-asc"),
            SortKey::PriceDesc => write!(f, "price-desc"),
        }
    }
}

impl std::str::FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "trending" => Ok(SortKey::Trending),
            "rating" => Ok(SortKey::Rating),
            "price-asc" => Ok(SortKey::PriceAsc),
            "price-desc" => Ok(SortKey::PriceDesc),
            _ => Err(format!("Invalid sort key: {}", s)),
        }
    }
}
