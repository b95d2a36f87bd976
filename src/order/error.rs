//! Error types for order operations.

use thiserror::Error;

/// Errors that can occur while adding items to an order.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum OrderError {
    /// The offered item breaks an admission rule. The order is left untouched.
    #[error("Incorrect item: {reason}")]
    IncorrectItem {
        #[source]
        reason: IncorrectItemReason,
    },
}

/// Why an item was refused.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum IncorrectItemReason {
    /// Price below zero, or not a number.
    #[error("negative price")]
    NegativePrice,

    /// Quantity of zero or less.
    #[error("non-positive quantity")]
    NonPositiveQuantity,

    /// Consolidating with the existing line would overflow its quantity.
    #[error("quantity overflow")]
    QuantityOverflow,
}

impl From<IncorrectItemReason> for OrderError {
    fn from(reason: IncorrectItemReason) -> Self {
        OrderError::IncorrectItem { reason }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_error_messages() {
        let err = OrderError::from(IncorrectItemReason::NegativePrice);
        assert_eq!(err.to_string(), "Incorrect item: negative price");

        let err = OrderError::from(IncorrectItemReason::NonPositiveQuantity);
        assert_eq!(err.to_string(), "Incorrect item: non-positive quantity");

        let err = OrderError::from(IncorrectItemReason::QuantityOverflow);
        assert_eq!(err.to_string(), "Incorrect item: quantity overflow");
    }

    #[test]
    fn test_reason_is_error_source() {
        let err = OrderError::from(IncorrectItemReason::NonPositiveQuantity);
        let source = err.source().expect("reason should be the source");
        assert_eq!(source.to_string(), "non-positive quantity");
        assert!(source.source().is_none());
    }
}
