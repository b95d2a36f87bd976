#![doc(html_logo_url = "https://www.rust-lang.org/logos/rust-logo-128x128.png")]
#![doc(html_favicon_url = "https://www.rust-lang.org/favicon.ico")]
//! # Order Lines
//!
//! > **Line consolidation for shopping orders.**
//!
//! An [`Order`](order::Order) collects items that each reference a
//! [`Product`](model::Product), a unit price and a quantity. Adding an item either
//! folds it into an existing line (same product id, same price) or appends a new one.
//!
//! ## 🏗️ Design
//!
//! ### Admission before mutation
//! [`Order::add_item`](order::Order::add_item) checks the price and quantity before it
//! touches the lines. A rejected item returns
//! [`OrderError::IncorrectItem`](order::OrderError::IncorrectItem) and the order is
//! exactly as it was.
//!
//! ### Items as a capability
//! The order is generic over the [`Item`](model::Item) trait rather than a concrete
//! struct. [`LineItem`](model::LineItem) is the everyday implementation;
//! [`MockItem`](mock::MockItem) records what the order does to it.
//!
//! ### Exact price matching
//! Prices are `f64` and lines match on exact equality. Two prices that print the same
//! but differ in their last bit end up on separate lines. Callers that need tolerant
//! matching should normalise prices (e.g. to minor units) before building items.
//!
//! ### Ownership
//! `add_item` takes `&mut self`. Sharing an order between threads means wrapping it
//! in a lock of the caller's choosing.
//!
//! ## 🗺️ Module Tour
//!
//! - [`model`]: [`Product`](model::Product), [`ProductId`](model::ProductId), the
//!   [`Item`](model::Item) trait and [`LineItem`](model::LineItem).
//! - [`order`]: the [`Order`](order::Order) aggregate and its errors.
//! - [`mock`]: test doubles for the `Item` capability.
//! - [`lifecycle`]: tracing setup for binaries.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! RUST_LOG=debug cargo run
//! cargo test
//! ```

pub mod lifecycle;
pub mod mock;
pub mod model;
pub mod order;
