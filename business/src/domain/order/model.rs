use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::catalog::model::Product;
use crate::domain::shared::value_objects::{OrderId, UserId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Pending,
    Shipped,
    Delivered,
    Cancelled,
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderStatus::Pending => write!(f, "pending"),
            OrderStatus::Shipped => write!(f, "shipped"),
            OrderStatus::Delivered => write!(f, "delivered"),
            OrderStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}

impl std::str::FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(OrderStatus::Pending),
            "shipped" => Ok(OrderStatus::Shipped),
            "delivered" => Ok(OrderStatus::Delivered),
            "cancelled" => Ok(OrderStatus::Cancelled),
            _ => Err(format!("Invalid order status: {}", s)),
        }
    }
}

/// A (product snapshot, quantity) line inside a placed order.
#[derive(Debug, Clone)]
pub struct OrderLine {
    pub product: Product,
    pub quantity: u32,
}

/// A historical order from the seeded dataset. Read-only: the service
/// never creates or transitions orders.
#[derive(Debug, Clone)]
pub struct Order {
    pub id: OrderId,
    pub user_id: UserId,
    pub lines: Vec<OrderLine>,
    pub total_amount: f64,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
}

impl Order {
    /// Sum of line quantities, the "Items: N" figure on the order card.
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|line| line.quantity).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::value_objects::Category;
    use crate::domain::shared::value_objects::ProductId;

    #[test]
    fn should_sum_line_quantities() {
        let product = Product {
            id: ProductId::new("p-1"),
            name: "Canvas Tote".to_string(),
            category: Category::Fashion,
            price: 18.0,
            stock: 20,
            rating: 4.1,
            reviews: 33,
            images: vec!["img".to_string()],
            is_trending: false,
            is_eco_friendly: true,
            description: String::new(),
        };
        let order = Order {
            id: OrderId::new("o-1"),
            user_id: UserId::new("u-1"),
            lines: vec![
                OrderLine { product: product.clone(), quantity: 2 },
                OrderLine { product, quantity: 3 },
            ],
            total_amount: 90.0,
            status: OrderStatus::Delivered,
            created_at: Utc::now(),
        };

        assert_eq!(order.item_count(), 5);
    }
}
