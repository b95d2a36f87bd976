//! # Mock Items
//!
//! A recording test double for the [`Item`] capability.
//!
//! [`MockItem`] behaves like a plain line item but logs every quantity write the
//! order performs on it. The log is shared, so a test can keep a [`WriteLog`]
//! handle after the item has been moved into an [`Order`](crate::order::Order)
//! and check what happened to it.
//!
//! # Example
//! ```
//! use order_lines::mock::MockItem;
//! use order_lines::order::Order;
//!
//! let first = MockItem::new(1).with_price(10.0).with_quantity(2);
//! let log = first.write_log();
//!
//! let mut order = Order::new();
//! order.add_item(first).unwrap();
//! order.add_item(MockItem::new(1).with_price(10.0).with_quantity(3)).unwrap();
//!
//! log.verify(&[5]);
//! ```

use std::sync::{Arc, Mutex};

use crate::model::{Item, Product, ProductId};

/// Shared record of the quantities written to a [`MockItem`].
#[derive(Debug, Clone, Default)]
pub struct WriteLog {
    writes: Arc<Mutex<Vec<i32>>>,
}

impl WriteLog {
    fn record(&self, quantity: i32) {
        self.writes.lock().unwrap().push(quantity);
    }

    /// All quantities written so far, oldest first.
    pub fn writes(&self) -> Vec<i32> {
        self.writes.lock().unwrap().clone()
    }

    /// Panics unless the recorded writes are exactly `expected`.
    pub fn verify(&self, expected: &[i32]) {
        let actual = self.writes();
        assert_eq!(
            actual, expected,
            "quantity writes mismatch: expected {:?}, got {:?}",
            expected, actual
        );
    }

    /// Panics if the order ever wrote a quantity.
    pub fn verify_untouched(&self) {
        self.verify(&[]);
    }
}

/// An [`Item`] whose quantity writes are observable from the test.
#[derive(Debug, Clone)]
pub struct MockItem {
    product: Arc<Product>,
    price: f64,
    quantity: i32,
    log: WriteLog,
}

impl MockItem {
    /// Creates a mock for a fresh product with the given id, priced at zero with quantity one.
    pub fn new(product_id: impl Into<ProductId>) -> Self {
        Self::for_product(Arc::new(Product::new(product_id)))
    }

    /// Creates a mock sharing an existing product reference.
    pub fn for_product(product: Arc<Product>) -> Self {
        Self {
            product,
            price: 0.0,
            quantity: 1,
            log: WriteLog::default(),
        }
    }

    pub fn with_price(mut self, price: f64) -> Self {
        self.price = price;
        self
    }

    pub fn with_quantity(mut self, quantity: i32) -> Self {
        self.quantity = quantity;
        self
    }

    /// Returns a handle on this mock's write log.
    pub fn write_log(&self) -> WriteLog {
        self.log.clone()
    }
}

impl Item for MockItem {
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
        self.log.record(quantity);
        self.quantity = quantity;
    }
}
