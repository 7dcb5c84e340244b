//! Per-session context.

use crate::ids::{OrderNumber, TableNumber};
use crate::session::table::resolve_table;
use serde::{Deserialize, Serialize};

/// State fixed for the lifetime of one customer's session.
///
/// Constructed explicitly once when the interface loads and handed to the
/// view layer, rather than living in ambient globals.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionContext {
    /// Restaurant display name.
    pub restaurant_name: String,
    /// The table this session belongs to.
    pub table: TableNumber,
    /// Display order number, assigned once per session.
    pub order_number: OrderNumber,
}

impl SessionContext {
    /// Create a context with explicit values.
    pub fn new(
        restaurant_name: impl Into<String>,
        table: TableNumber,
        order_number: OrderNumber,
    ) -> Self {
        Self {
            restaurant_name: restaurant_name.into(),
            table,
            order_number,
        }
    }

    /// Create a context from the navigation path the interface loaded under.
    ///
    /// The table is parsed from a `table/<digits>` segment (falling back to
    /// table 1) and the order number is generated fresh.
    pub fn from_path(restaurant_name: impl Into<String>, path: &str) -> Self {
        Self::new(restaurant_name, resolve_table(path), OrderNumber::generate())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_path() {
        let context = SessionContext::from_path("Bella Vista", "/table/9");
        assert_eq!(context.restaurant_name, "Bella Vista");
        assert_eq!(context.table, TableNumber::new(9));
        assert!((1..=999).contains(&context.order_number.value()));
    }

    #[test]
    fn test_from_path_without_table() {
        let context = SessionContext::from_path("Bella Vista", "/");
        assert_eq!(context.table, TableNumber::FALLBACK);
    }
}
