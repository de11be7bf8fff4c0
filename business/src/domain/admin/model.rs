use crate::domain::order::model::Order;

/// Number of orders shown in the dashboard "recent" panel.
pub const RECENT_ORDERS_LIMIT: usize = 5;

/// Aggregated figures for the admin dashboard.
#[derive(Debug, Clone)]
pub struct DashboardReport {
    /// Sum of all order totals.
    pub total_revenue: f64,
    /// Number of orders placed.
    pub total_sales: usize,
    /// Number of accounts with the customer role.
    pub total_customers: usize,
    pub total_products: usize,
    /// First orders in collection order, capped to `RECENT_ORDERS_LIMIT`.
    pub recent_orders: Vec<Order>,
}
