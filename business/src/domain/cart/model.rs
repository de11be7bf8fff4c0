use crate::domain::catalog::model::Product;
use crate::domain::shared::value_objects::ProductId;

/// Subtotal above which shipping is waived.
const FREE_SHIPPING_THRESHOLD: f64 = 50.0;
/// Flat shipping charge below the threshold.
const FLAT_SHIPPING: f64 = 10.0;

/// A (product, quantity) pair inside a cart.
///
/// The product is a snapshot taken at add time: later catalog price
/// changes do not retroactively reprice the line.
#[derive(Debug, Clone)]
pub struct CartLineItem {
    pub product: Product,
    pub quantity: u32,
}

/// Totals shown on the order summary panel.
#[derive(Debug, Clone, PartialEq)]
pub struct CartSummary {
    pub subtotal: f64,
    pub shipping: f64,
    pub total: f64,
}

/// The shopping cart aggregate.
///
/// Invariants: at most one line item per product id, and every line has
/// quantity >= 1. A mutation that would drive a quantity to zero or
/// below removes the line instead.
#[derive(Debug, Clone, Default)]
pub struct Cart {
    items: Vec<CartLineItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[CartLineItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Adds `quantity` units of the product, merging into an existing
    /// line when one is present. A quantity below 1 is normalized to 1.
    /// Quantities are not clamped against `product.stock`.
    pub fn add_item(&mut self, product: Product, quantity: u32) {
        let quantity = quantity.max(1);
        match self.items.iter_mut().find(|item| item.product.id == product.id) {
            Some(existing) => existing.quantity += quantity,
            None => self.items.push(CartLineItem { product, quantity }),
        }
    }

    /// Removes the line for the product; no-op when absent.
    pub fn remove_item(&mut self, product_id: &ProductId) {
        self.items.retain(|item| &item.product.id != product_id);
    }

    /// Replaces the line's quantity. A quantity of zero or below removes
    /// the line. No-op when the product is not in the cart.
    pub fn set_quantity(&mut self, product_id: &ProductId, quantity: i64) {
        if quantity <= 0 {
            self.remove_item(product_id);
            return;
        }
        let quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        if let Some(item) = self.items.iter_mut().find(|i| &i.product.id == product_id) {
            item.quantity = quantity;
        }
    }

    /// Sum of all line quantities.
    pub fn total_count(&self) -> u32 {
        self.items.iter().map(|item| item.quantity).sum()
    }

    /// Sum of snapshotted price * quantity over all lines.
    pub fn total_amount(&self) -> f64 {
        self.items
            .iter()
            .map(|item| item.product.price * item.quantity as f64)
            .sum()
    }

    pub fn summary(&self) -> CartSummary {
        let subtotal = self.total_amount();
        let shipping = if subtotal > FREE_SHIPPING_THRESHOLD {
            0.0
        } else {
            FLAT_SHIPPING
        };
        CartSummary {
            subtotal,
            shipping,
            total: subtotal + shipping,
        }
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::domain::catalog::value_objects::Category;

    fn product(id: &str, price: f64) -> Product {
        Product {
            id: ProductId::new(id),
            name: format!("Product {id}"),
            category: Category::Fashion,
            price,
            stock: 3,
            rating: 4.0,
            reviews: 5,
            images: vec!["img".to_string()],
            is_trending: false,
            is_eco_friendly: false,
            description: String::new(),
        }
    }

    #[test]
    fn should_merge_repeated_adds_into_one_line() {
        let mut cart = Cart::new();

        cart.add_item(product("a", 10.0), 2);
        cart.add_item(product("a", 10.0), 3);

        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.items()[0].quantity, 5);
        assert_eq!(cart.total_count(), 5);
    }

    #[test]
    fn should_normalize_add_quantity_below_one() {
        let mut cart = Cart::new();

        cart.add_item(product("a", 10.0), 0);

        assert_eq!(cart.total_count(), 1);
    }

    #[test]
    fn should_allow_quantity_beyond_stock() {
        let mut cart = Cart::new();

        cart.add_item(product("a", 10.0), 50);

        assert_eq!(cart.total_count(), 50);
    }

    #[test]
    fn should_remove_line_when_quantity_set_to_zero_or_below() {
        for quantity in [0, -5] {
            let mut cart = Cart::new();
            cart.add_item(product("a", 10.0), 2);

            cart.set_quantity(&ProductId::new("a"), quantity);

            assert!(cart.is_empty());
        }
    }

    #[test]
    fn should_replace_quantity_exactly() {
        let mut cart = Cart::new();
        cart.add_item(product("a", 10.0), 2);

        cart.set_quantity(&ProductId::new("a"), 7);

        assert_eq!(cart.total_count(), 7);
    }

    #[test]
    fn should_ignore_remove_of_absent_product() {
        let mut cart = Cart::new();
        cart.add_item(product("a", 10.0), 1);

        cart.remove_item(&ProductId::new("missing"));

        assert_eq!(cart.items().len(), 1);
    }

    #[test]
    fn should_total_with_snapshotted_prices() {
        let mut cart = Cart::new();
        cart.add_item(product("a", 10.0), 2);
        // Same id arriving with a different catalog price: the original
        // snapshot keeps pricing the line.
        cart.add_item(product("a", 99.0), 1);
        cart.add_item(product("b", 5.5), 4);

        assert!((cart.total_amount() - (10.0 * 3.0 + 5.5 * 4.0)).abs() < f64::EPSILON);
    }

    #[test]
    fn should_charge_flat_shipping_below_threshold() {
        let mut cart = Cart::new();
        cart.add_item(product("a", 20.0), 2);

        let summary = cart.summary();

        assert_eq!(summary.subtotal, 40.0);
        assert_eq!(summary.shipping, 10.0);
        assert_eq!(summary.total, 50.0);
    }

    #[test]
    fn should_waive_shipping_above_threshold() {
        let mut cart = Cart::new();
        cart.add_item(product("a", 30.0), 2);

        let summary = cart.summary();

        assert_eq!(summary.shipping, 0.0);
        assert_eq!(summary.total, 60.0);
    }

    proptest! {
        #[test]
        fn repeated_adds_accumulate_to_the_requested_sum(
            quantities in proptest::collection::vec(1u32..20, 1..12),
        ) {
            let mut cart = Cart::new();
            for &q in &quantities {
                cart.add_item(product("a", 12.5), q);
            }

            prop_assert_eq!(cart.items().len(), 1);
            prop_assert_eq!(cart.total_count(), quantities.iter().sum::<u32>());
        }

        #[test]
        fn total_amount_is_price_times_count_for_a_single_product(
            price in 0.0f64..200.0,
            quantities in proptest::collection::vec(1u32..10, 1..8),
        ) {
            let mut cart = Cart::new();
            for &q in &quantities {
                cart.add_item(product("a", price), q);
            }

            let expected = price * cart.total_count() as f64;
            prop_assert!((cart.total_amount() - expected).abs() < 1e-6);
        }
    }
}
