use poem_openapi::Object;

use business::domain::admin::model::DashboardReport;

use crate::api::account::dto::OrderResponse;

#[derive(Debug, Clone, Object)]
pub struct DashboardResponse {
    /// Sum of all order totals
    pub total_revenue: f64,
    /// Number of orders placed
    pub total_sales: u64,
    /// Number of customer accounts
    pub total_customers: u64,
    /// Number of catalog products
    pub total_products: u64,
    /// First orders in collection order
    pub recent_orders: Vec<OrderResponse>,
}

impl From<DashboardReport> for DashboardResponse {
    fn from(report: DashboardReport) -> Self {
        Self {
            total_revenue: report.total_revenue,
            total_sales: report.total_sales as u64,
            total_customers: report.total_customers as u64,
            total_products: report.total_products as u64,
            recent_orders: report
                .recent_orders
                .into_iter()
                .map(|o| o.into())
                .collect(),
        }
    }
}

/// A management table rendered to display strings.
#[derive(Debug, Clone, Object)]
pub struct TableResponse {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}
