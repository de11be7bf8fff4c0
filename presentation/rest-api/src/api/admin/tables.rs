use business::domain::auth::model::User;
use business::domain::catalog::model::Product;
use business::domain::order::model::Order;

/// A column of a management table: a header plus a pure function from
/// entity to display string. The set of columns per entity is a fixed
/// enumeration; nothing is looked up by field name at render time.
pub struct Column<T> {
    pub header: &'static str,
    pub cell: fn(&T) -> String,
}

pub fn product_columns() -> Vec<Column<Product>> {
    vec![
        Column {
            header: "Name",
            cell: |p| p.name.clone(),
        },
        Column {
            header: "Category",
            cell: |p| p.category.label().to_string(),
        },
        Column {
            header: "Price",
            cell: |p| format!("${:.2}", p.price),
        },
        Column {
            header: "Stock",
            cell: |p| p.stock.to_string(),
        },
        Column {
            header: "Rating",
            cell: |p| format!("{:.1}", p.rating),
        },
    ]
}

pub fn order_columns() -> Vec<Column<Order>> {
    vec![
        Column {
            header: "Order ID",
            cell: |o| o.id.to_string(),
        },
        Column {
            header: "User ID",
            cell: |o| o.user_id.to_string(),
        },
        Column {
            header: "Date",
            cell: |o| o.created_at.format("%Y-%m-%d").to_string(),
        },
        Column {
            header: "Amount",
            cell: |o| format!("${:.2}", o.total_amount),
        },
        Column {
            header: "Status",
            cell: |o| o.status.to_string(),
        },
    ]
}

pub fn user_columns() -> Vec<Column<User>> {
    vec![
        Column {
            header: "Name",
            cell: |u| u.name.clone(),
        },
        Column {
            header: "Email",
            cell: |u| u.email.clone(),
        },
        Column {
            header: "Role",
            cell: |u| u.role.to_string(),
        },
        Column {
            header: "Joined",
            cell: |u| u.created_at.format("%Y-%m-%d").to_string(),
        },
    ]
}

/// Renders entities through the column set into header + string rows.
pub fn render<T>(columns: &[Column<T>], entities: &[T]) -> (Vec<String>, Vec<Vec<String>>) {
    let headers = columns.iter().map(|c| c.header.to_string()).collect();
    let rows = entities
        .iter()
        .map(|entity| columns.iter().map(|c| (c.cell)(entity)).collect())
        .collect();
    (headers, rows)
}
