use chrono::{DateTime, Utc};
use poem_openapi::{Enum, Object};
use serde::{Deserialize, Serialize};

use business::domain::auth::model::{Role, User};
use business::domain::order::model::{Order, OrderLine, OrderStatus};

use crate::api::catalog::dto::ProductResponse;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Enum)]
pub enum RoleDto {
    #[oai(rename = "admin")]
    Admin,
    #[oai(rename = "customer")]
    Customer,
}

impl From<Role> for RoleDto {
    fn from(role: Role) -> Self {
        match role {
            Role::Admin => RoleDto::Admin,
            Role::Customer => RoleDto::Customer,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Enum)]
pub enum OrderStatusDto {
    #[oai(rename = "pending")]
    Pending,
    #[oai(rename = "shipped")]
    Shipped,
    #[oai(rename = "delivered")]
    Delivered,
    #[oai(rename = "cancelled")]
    Cancelled,
}

impl From<OrderStatus> for OrderStatusDto {
    fn from(status: OrderStatus) -> Self {
        match status {
            OrderStatus::Pending => OrderStatusDto::Pending,
            OrderStatus::Shipped => OrderStatusDto::Shipped,
            OrderStatus::Delivered => OrderStatusDto::Delivered,
            OrderStatus::Cancelled => OrderStatusDto::Cancelled,
        }
    }
}

/// Request to sign in. Credentials are a lookup against the seeded
/// accounts; the password is accepted but not verified (demo dataset,
/// not a security boundary).
#[derive(Debug, Clone, Object)]
pub struct LoginRequest {
    pub email: String,
    #[oai(skip_serializing_if_is_none)]
    pub password: Option<String>,
}

#[derive(Debug, Clone, Object)]
pub struct UserResponse {
    /// User unique identifier
    pub id: String,
    pub name: String,
    pub email: String,
    /// Role driving admin authorization
    pub role: RoleDto,
    /// Account creation timestamp
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.to_string(),
            name: user.name,
            email: user.email,
            role: user.role.into(),
            created_at: user.created_at,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct OrderLineResponse {
    pub product: ProductResponse,
    pub quantity: u32,
}

impl From<OrderLine> for OrderLineResponse {
    fn from(line: OrderLine) -> Self {
        Self {
            product: line.product.into(),
            quantity: line.quantity,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct OrderResponse {
    /// Order unique identifier
    pub id: String,
    /// Owning user identifier
    pub user_id: String,
    pub lines: Vec<OrderLineResponse>,
    /// Sum of all line quantities
    pub item_count: u32,
    pub total_amount: f64,
    pub status: OrderStatusDto,
    /// Placement timestamp
    pub created_at: DateTime<Utc>,
}

impl From<Order> for OrderResponse {
    fn from(order: Order) -> Self {
        Self {
            id: order.id.to_string(),
            user_id: order.user_id.to_string(),
            item_count: order.item_count(),
            lines: order.lines.into_iter().map(|l| l.into()).collect(),
            total_amount: order.total_amount,
            status: order.status.into(),
            created_at: order.created_at,
        }
    }
}
