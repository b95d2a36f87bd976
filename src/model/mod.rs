//! Pure data structures shared by orders: products and line items.

pub mod item;
pub mod product;

pub use item::*;
pub use product::*;
