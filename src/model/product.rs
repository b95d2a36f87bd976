//! Catalog products referenced by order lines.
//!
//! Products are created outside the order and shared between items through an
//! [`Arc`](std::sync::Arc). An [`Order`](crate::order::Order) never mutates them;
//! it only compares their [`ProductId`] when consolidating lines.

use serde::{Deserialize, Serialize};

use std::fmt::Display;

/// Type-safe identifier for Products.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ProductId(pub i64);

impl From<i64> for ProductId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "product_{}", self.0)
    }
}

/// Identity-bearing product reference.
///
/// Two products are the same product when their ids are equal, regardless of
/// whether they are the same allocation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
}

impl Product {
    /// Creates a new Product instance.
    ///
    /// # Arguments
    /// * `id` - Catalog identifier used for line matching
    pub fn new(id: impl Into<ProductId>) -> Self {
        Self { id: id.into() }
    }

    pub fn id(&self) -> ProductId {
        self.id
    }

    pub fn set_id(&mut self, id: impl Into<ProductId>) {
        self.id = id.into();
    }
}
