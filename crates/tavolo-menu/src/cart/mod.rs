//! Shopping cart module.
//!
//! Contains the order-in-progress: cart lines and their totals.

mod cart;

pub use cart::{Cart, CartLine};
