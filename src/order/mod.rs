//! The order aggregate: admission rules and line consolidation.
//!
//! An [`Order`] accumulates lines through [`Order::add_item`]. Each offered item
//! is validated first and only then merged, so a rejected item never leaves a
//! partial change behind:
//!
//! 1. `price >= 0`, else [`IncorrectItemReason::NegativePrice`]
//! 2. `quantity > 0`, else [`IncorrectItemReason::NonPositiveQuantity`]
//! 3. If a stored line has the same product id **and** exactly the same price,
//!    its quantity grows by the incoming quantity and the incoming item is dropped.
//!    Otherwise the item is appended as a new line.
//!
//! ```
//! use std::sync::Arc;
//! use order_lines::model::{LineItem, Product};
//! use order_lines::order::Order;
//!
//! let widget = Arc::new(Product::new(1));
//! let mut order = Order::new();
//! order.add_item(LineItem::new(widget.clone(), 10.0, 2)).unwrap();
//! order.add_item(LineItem::new(widget.clone(), 10.0, 3)).unwrap();
//!
//! assert_eq!(order.len(), 1);
//! assert_eq!(order.items()[0].quantity, 5);
//! ```

pub mod error;

pub use error::*;

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

use crate::model::{Item, LineItem, ProductId};

/// An ordered collection of lines, at most one per (product id, price) pair.
///
/// Deserializing replays every stored line through [`Order::add_item`], so a
/// snapshot with invalid lines is refused and duplicate lines are merged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    try_from = "OrderSnapshot<I>",
    bound(deserialize = "I: Item + Deserialize<'de>")
)]
pub struct Order<I = LineItem> {
    items: Vec<I>,
}

/// Wire shape of an [`Order`] before its lines are admitted.
#[derive(Deserialize)]
struct OrderSnapshot<I> {
    items: Vec<I>,
}

impl<I: Item> TryFrom<OrderSnapshot<I>> for Order<I> {
    type Error = OrderError;

    fn try_from(snapshot: OrderSnapshot<I>) -> Result<Self, Self::Error> {
        let mut order = Order::new();
        for item in snapshot.items {
            order.add_item(item)?;
        }
        Ok(order)
    }
}

impl<I> Default for Order<I> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<I: Item> Order<I> {
    /// Creates an empty order.
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates `item` and merges it into the order.
    ///
    /// # Errors
    /// Returns [`OrderError::IncorrectItem`] when the price is negative, the
    /// quantity is not strictly positive, or consolidation would overflow the
    /// stored quantity. The order is unchanged in every error case.
    #[instrument(
        skip_all,
        fields(product_id = %item.product().id(), price = item.price(), quantity = item.quantity())
    )]
    pub fn add_item(&mut self, item: I) -> Result<(), OrderError> {
        if let Err(error) = Self::validate(&item) {
            warn!(%error, "Rejected item");
            return Err(error);
        }

        let product_id = item.product().id();
        let price = item.price();

        match self.position(product_id, price) {
            Some(index) => {
                let line = &mut self.items[index];
                let merged = match line.quantity().checked_add(item.quantity()) {
                    Some(merged) => merged,
                    None => {
                        let error = OrderError::from(IncorrectItemReason::QuantityOverflow);
                        warn!(%error, existing = line.quantity(), "Rejected item");
                        return Err(error);
                    }
                };
                line.set_quantity(merged);
                debug!(line = index, quantity = merged, "Merged into existing line");
            }
            None => {
                self.items.push(item);
                debug!(line = self.items.len() - 1, "Appended new line");
            }
        }

        Ok(())
    }

    /// Returns the stored line matching `product_id` and `price`, if any.
    pub fn find_line(&self, product_id: ProductId, price: f64) -> Option<&I> {
        self.position(product_id, price).map(|index| &self.items[index])
    }

    fn validate(item: &I) -> Result<(), OrderError> {
        let price = item.price();
        if price < 0.0 || price.is_nan() {
            return Err(IncorrectItemReason::NegativePrice.into());
        }
        if item.quantity() <= 0 {
            return Err(IncorrectItemReason::NonPositiveQuantity.into());
        }
        Ok(())
    }

    // Exact float comparison on price: 0.1 + 0.2 and 0.3 land on separate lines.
    fn position(&self, product_id: ProductId, price: f64) -> Option<usize> {
        self.items
            .iter()
            .position(|line| line.product().id() == product_id && line.price() == price)
    }
}

impl<I> Order<I> {
    /// The lines in first-insertion order, with their current quantities.
    pub fn items(&self) -> &[I] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, I> {
        self.items.iter()
    }
}

impl<'a, I> IntoIterator for &'a Order<I> {
    type Item = &'a I;
    type IntoIter = std::slice::Iter<'a, I>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
