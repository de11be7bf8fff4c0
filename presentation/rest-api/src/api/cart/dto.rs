use poem_openapi::Object;

use business::domain::cart::model::{Cart, CartLineItem, CartSummary};
use business::domain::cart::use_cases::checkout::CheckoutReceipt;

use crate::api::catalog::dto::ProductResponse;

#[derive(Debug, Clone, Object)]
pub struct CartLineItemResponse {
    /// Product snapshot taken at add time
    pub product: ProductResponse,
    /// Units of the product in the cart
    pub quantity: u32,
    /// Snapshotted price times quantity
    pub line_total: f64,
}

impl From<CartLineItem> for CartLineItemResponse {
    fn from(item: CartLineItem) -> Self {
        let line_total = item.product.price * item.quantity as f64;
        Self {
            product: item.product.into(),
            quantity: item.quantity,
            line_total,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct CartSummaryResponse {
    pub subtotal: f64,
    /// Flat charge, waived above the free-shipping threshold
    pub shipping: f64,
    pub total: f64,
}

impl From<CartSummary> for CartSummaryResponse {
    fn from(summary: CartSummary) -> Self {
        Self {
            subtotal: summary.subtotal,
            shipping: summary.shipping,
            total: summary.total,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct CartResponse {
    pub items: Vec<CartLineItemResponse>,
    /// Sum of all line quantities
    pub total_count: u32,
    pub summary: CartSummaryResponse,
}

impl From<Cart> for CartResponse {
    fn from(cart: Cart) -> Self {
        Self {
            total_count: cart.total_count(),
            summary: cart.summary().into(),
            items: cart.items().iter().cloned().map(|i| i.into()).collect(),
        }
    }
}

/// Request to add a product to the cart.
#[derive(Debug, Clone, Object)]
pub struct AddCartItemRequest {
    /// Product identifier
    pub product_id: String,
    /// Units to add; defaults to 1, values below 1 are normalized to 1
    #[oai(skip_serializing_if_is_none)]
    pub quantity: Option<u32>,
}

/// Request to replace a line's quantity.
#[derive(Debug, Clone, Object)]
pub struct SetCartQuantityRequest {
    /// New quantity; zero or below removes the line
    pub quantity: i64,
}

#[derive(Debug, Clone, Object)]
pub struct CheckoutResponse {
    /// Number of items in the placed order
    pub item_count: u32,
    pub summary: CartSummaryResponse,
}

impl From<CheckoutReceipt> for CheckoutResponse {
    fn from(receipt: CheckoutReceipt) -> Self {
        Self {
            item_count: receipt.item_count,
            summary: receipt.summary.into(),
        }
    }
}
