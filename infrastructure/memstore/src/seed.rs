use chrono::{DateTime, Utc};

use business::domain::auth::model::{Role, User};
use business::domain::catalog::model::Product;
use business::domain::catalog::value_objects::Category;
use business::domain::order::model::{Order, OrderLine, OrderStatus};
use business::domain::shared::value_objects::{OrderId, ProductId, UserId};

/// The fixed dataset the storefront runs against. Seeded once at
/// startup; products, users, and orders are read-only afterwards.
pub struct Dataset {
    pub products: Vec<Product>,
    pub users: Vec<User>,
    pub orders: Vec<Order>,
}

impl Dataset {
    pub fn seed() -> Self {
        let products = seed_products();
        let users = seed_users();
        let orders = seed_orders(&products);
        Self {
            products,
            users,
            orders,
        }
    }
}

fn ts(rfc3339: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(rfc3339)
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(|_| Utc::now())
}

struct ProductSeed {
    id: &'static str,
    name: &'static str,
    category: Category,
    price: f64,
    stock: u32,
    rating: f64,
    reviews: u32,
    is_trending: bool,
    is_eco_friendly: bool,
    description: &'static str,
}

fn seed_products() -> Vec<Product> {
    let seeds = [
        ProductSeed {
            id: "p-01",
            name: "Oversized Denim Jacket",
            category: Category::Fashion,
            price: 79.99,
            stock: 24,
            rating: 4.6,
            reviews: 132,
            is_trending: true,
            is_eco_friendly: false,
            description: "A relaxed-fit jacket in washed indigo denim with drop shoulders.",
        },
        ProductSeed {
            id: "p-02",
            name: "Organic Cotton Hoodie",
            category: Category::Fashion,
            price: 54.00,
            stock: 40,
            rating: 4.8,
            reviews: 215,
            is_trending: true,
            is_eco_friendly: true,
            description: "Heavyweight hoodie in GOTS-certified organic cotton.",
        },
        ProductSeed {
            id: "p-03",
            name: "Canvas High-Top Sneakers",
            category: Category::Fashion,
            price: 64.50,
            stock: 18,
            rating: 4.1,
            reviews: 87,
            is_trending: false,
            is_eco_friendly: false,
            description: "Classic high-tops with a vulcanized rubber sole.",
        },
        ProductSeed {
            id: "p-04",
            name: "Recycled Canvas Tote",
            category: Category::Fashion,
            price: 18.00,
            stock: 60,
            rating: 4.3,
            reviews: 41,
            is_trending: false,
            is_eco_friendly: true,
            description: "Everyday tote cut from recycled cotton canvas.",
        },
        ProductSeed {
            id: "p-05",
            name: "Wireless Noise-Cancelling Earbuds",
            category: Category::TechGadgets,
            price: 129.99,
            stock: 32,
            rating: 4.7,
            reviews: 542,
            is_trending: true,
            is_eco_friendly: false,
            description: "Hybrid ANC earbuds with 30 hours of combined playtime.",
        },
        ProductSeed {
            id: "p-06",
            name: "Smart LED Desk Light",
            category: Category::TechGadgets,
            price: 45.90,
            stock: 26,
            rating: 4.2,
            reviews: 96,
            is_trending: false,
            is_eco_friendly: false,
            description: "App-controlled desk lamp with tunable color temperature.",
        },
        ProductSeed {
            id: "p-07",
            name: "Portable Bluetooth Speaker",
            category: Category::TechGadgets,
            price: 89.00,
            stock: 15,
            rating: 3.9,
            reviews: 203,
            is_trending: false,
            is_eco_friendly: false,
            description: "Water-resistant speaker with a 12-hour battery.",
        },
        ProductSeed {
            id: "p-08",
            name: "Vegan Skincare Set",
            category: Category::Beauty,
            price: 42.00,
            stock: 50,
            rating: 4.9,
            reviews: 318,
            is_trending: true,
            is_eco_friendly: true,
            description: "Cleanser, serum, and moisturizer in refillable glass.",
        },
        ProductSeed {
            id: "p-09",
            name: "Bamboo Hairbrush",
            category: Category::Beauty,
            price: 14.25,
            stock: 75,
            rating: 3.6,
            reviews: 29,
            is_trending: false,
            is_eco_friendly: true,
            description: "Detangling brush with a bamboo handle and wooden pins.",
        },
        ProductSeed {
            id: "p-10",
            name: "Ceramic Pour-Over Coffee Set",
            category: Category::HomeLiving,
            price: 68.00,
            stock: 12,
            rating: 4.5,
            reviews: 77,
            is_trending: false,
            is_eco_friendly: false,
            description: "Hand-glazed dripper, carafe, and two cups.",
        },
        ProductSeed {
            id: "p-11",
            name: "Linen Throw Blanket",
            category: Category::HomeLiving,
            price: 95.00,
            stock: 9,
            rating: 4.4,
            reviews: 64,
            is_trending: false,
            is_eco_friendly: false,
            description: "Stonewashed linen throw in a herringbone weave.",
        },
        ProductSeed {
            id: "p-12",
            name: "Insulated Steel Water Bottle",
            category: Category::SportsOutdoors,
            price: 29.95,
            stock: 100,
            rating: 4.8,
            reviews: 689,
            is_trending: true,
            is_eco_friendly: true,
            description: "Double-walled bottle that keeps drinks cold for 24 hours.",
        },
        ProductSeed {
            id: "p-13",
            name: "Trail Running Shoes",
            category: Category::SportsOutdoors,
            price: 119.00,
            stock: 21,
            rating: 4.3,
            reviews: 154,
            is_trending: false,
            is_eco_friendly: false,
            description: "Grippy, cushioned trainers for mixed terrain.",
        },
    ];

    seeds
        .into_iter()
        .map(|seed| Product {
            id: ProductId::new(seed.id),
            name: seed.name.to_string(),
            category: seed.category,
            price: seed.price,
            stock: seed.stock,
            rating: seed.rating,
            reviews: seed.reviews,
            images: vec![
                format!("https://picsum.photos/seed/{}-a/600/600", seed.id),
                format!("https://picsum.photos/seed/{}-b/600/600", seed.id),
                format!("https://picsum.photos/seed/{}-c/600/600", seed.id),
            ],
            is_trending: seed.is_trending,
            is_eco_friendly: seed.is_eco_friendly,
            description: seed.description.to_string(),
        })
        .collect()
}

fn seed_users() -> Vec<User> {
    vec![
        User {
            id: UserId::new("u-1"),
            name: "Zoe Martin".to_string(),
            email: "zoe@example.com".to_string(),
            role: Role::Customer,
            created_at: ts("2023-06-12T09:30:00Z"),
        },
        User {
            id: UserId::new("u-2"),
            name: "Avery Cole".to_string(),
            email: "admin@vibecart.com".to_string(),
            role: Role::Admin,
            created_at: ts("2022-11-03T14:00:00Z"),
        },
        User {
            id: UserId::new("u-3"),
            name: "Liam Patel".to_string(),
            email: "liam@example.com".to_string(),
            role: Role::Customer,
            created_at: ts("2024-01-28T18:45:00Z"),
        },
    ]
}

/// Builds an order with its total derived from the lines, so the seeded
/// figures can never drift from the line items.
fn order(
    id: &str,
    user_id: &str,
    products: &[Product],
    lines: &[(&str, u32)],
    status: OrderStatus,
    created_at: &str,
) -> Order {
    let lines: Vec<OrderLine> = lines
        .iter()
        .filter_map(|(product_id, quantity)| {
            products
                .iter()
                .find(|p| p.id.as_str() == *product_id)
                .map(|p| OrderLine {
                    product: p.clone(),
                    quantity: *quantity,
                })
        })
        .collect();
    let total_amount = lines
        .iter()
        .map(|line| line.product.price * line.quantity as f64)
        .sum();

    Order {
        id: OrderId::new(id),
        user_id: UserId::new(user_id),
        lines,
        total_amount,
        status,
        created_at: ts(created_at),
    }
}

fn seed_orders(products: &[Product]) -> Vec<Order> {
    vec![
        order(
            "o-1001",
            "u-1",
            products,
            &[("p-12", 2), ("p-05", 1)],
            OrderStatus::Delivered,
            "2024-03-02T10:12:00Z",
        ),
        order(
            "o-1002",
            "u-1",
            products,
            &[("p-02", 1)],
            OrderStatus::Shipped,
            "2024-05-19T16:40:00Z",
        ),
        order(
            "o-1003",
            "u-3",
            products,
            &[("p-09", 3), ("p-08", 1)],
            OrderStatus::Pending,
            "2024-06-30T08:05:00Z",
        ),
        order(
            "o-1004",
            "u-1",
            products,
            &[("p-11", 1)],
            OrderStatus::Cancelled,
            "2024-04-11T12:20:00Z",
        ),
        order(
            "o-1005",
            "u-3",
            products,
            &[("p-13", 1), ("p-12", 1)],
            OrderStatus::Delivered,
            "2024-07-22T19:55:00Z",
        ),
        order(
            "o-1006",
            "u-3",
            products,
            &[("p-04", 2)],
            OrderStatus::Pending,
            "2025-01-05T11:15:00Z",
        ),
    ]
}
