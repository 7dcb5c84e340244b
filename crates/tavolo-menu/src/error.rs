//! Ordering error types.

use thiserror::Error;

/// Errors that can occur in an ordering session.
///
/// Cart mutations are total and never fail; errors exist only at the screen
/// transition and catalog seams.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OrderingError {
    /// Invalid screen transition.
    #[error("Invalid screen transition from {from} to {to}")]
    InvalidTransition {
        from: &'static str,
        to: &'static str,
    },

    /// Order placement attempted with nothing in the cart.
    #[error("Cannot place an order from an empty cart")]
    EmptyCart,

    /// The menu could not be loaded from its source.
    #[error("Menu unavailable: {0}")]
    MenuUnavailable(String),
}
