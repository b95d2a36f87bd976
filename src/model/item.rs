//! The item capability an [`Order`](crate::order::Order) depends on, plus the
//! plain [`LineItem`] value type that implements it.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::Product;

/// Capability set required of anything stored as an order line.
///
/// The order reads the product, price and quantity when validating and
/// matching, and writes the quantity when consolidating a duplicate line.
/// Any type providing these four operations can be stored, which is how the
/// [`MockItem`](crate::mock::MockItem) test double plugs in.
pub trait Item {
    fn product(&self) -> &Product;

    /// Unit price. Not validated until the item is offered to an order.
    fn price(&self) -> f64;

    /// Signed so that zero and negative quantities can reach admission and be rejected there.
    fn quantity(&self) -> i32;

    fn set_quantity(&mut self, quantity: i32);
}

/// A product reference with a unit price and a quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub product: Arc<Product>,
    pub price: f64,
    pub quantity: i32,
}

impl LineItem {
    /// Creates a new LineItem.
    ///
    /// # Arguments
    /// * `product` - Shared product reference
    /// * `price` - Unit price
    /// * `quantity` - Number of units
    pub fn new(product: Arc<Product>, price: f64, quantity: i32) -> Self {
        Self {
            product,
            price,
            quantity,
        }
    }
}

impl Item for LineItem {
    fn product(&self) -> &Product {
        &self.product
    }

    fn price(&self) -> f64 {
        self.price
    }

    fn quantity(&self) -> i32 {
        self.quantity
    }

    fn set_quantity(&mut self, quantity: i32) {
        self.quantity = quantity;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_item_exposes_capabilities() {
        let product = Arc::new(Product::new(3));
        let mut item = LineItem::new(product.clone(), 12.5, 4);

        assert_eq!(item.product().id(), product.id());
        assert_eq!(item.price(), 12.5);
        assert_eq!(item.quantity(), 4);

        item.set_quantity(9);
        assert_eq!(item.quantity(), 9);
    }

    #[test]
    fn test_line_items_share_product() {
        let product = Arc::new(Product::new(1));
        let a = LineItem::new(product.clone(), 1.0, 1);
        let b = LineItem::new(product.clone(), 2.0, 1);

        assert!(Arc::ptr_eq(&a.product, &b.product));
        assert_eq!(Arc::strong_count(&product), 3);
    }
}
