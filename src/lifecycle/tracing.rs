//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a `tracing` subscriber for binaries built on this crate.
//! The library itself only emits events; it never installs a subscriber.
//!
//! ## Configuration
//!
//! Verbosity comes from the `RUST_LOG` environment variable. The output uses the
//! compact format without module targets (`with_target(false)`), so each line
//! carries the span name and its structured fields.
//!
//! ```bash
//! # Rejections only
//! RUST_LOG=warn cargo run
//!
//! # Every merge and append, with the offered item's fields
//! RUST_LOG=debug cargo run
//!
//! # Only this crate
//! RUST_LOG=order_lines=debug cargo run
//! ```
//!
//! ## What Gets Traced
//!
//! [`Order::add_item`](crate::order::Order::add_item) opens an `add_item` span with
//! `product_id`, `price` and `quantity` fields. Inside it:
//!
//! ```text
//! DEBUG add_item{product_id=product_1 price=10.0 quantity=2}: Appended new line line=0
//! DEBUG add_item{product_id=product_1 price=10.0 quantity=3}: Merged into existing line line=0 quantity=5
//!  WARN add_item{product_id=product_2 price=-5.0 quantity=1}: Rejected item error=Incorrect item: negative price
//! ```

/// Error returned when the global subscriber cannot be installed.
pub type TracingInitError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Installs the global subscriber with `RUST_LOG` filtering.
///
/// # Errors
/// Fails if a global subscriber or `log` logger is already set.
pub fn setup_tracing() -> Result<(), TracingInitError> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .try_init()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_setup_reports_error() {
        // Nothing else in this test binary installs a subscriber.
        assert!(setup_tracing().is_ok());
        assert!(setup_tracing().is_err());
    }
}
