//! Table identification from the navigation path.

use crate::ids::TableNumber;

impl TableNumber {
    /// The table assumed when the path carries no usable table number.
    pub const FALLBACK: TableNumber = TableNumber::new(1);

    /// Parse a table number out of a navigation path.
    ///
    /// Looks for a `table/<digits>` segment pair anywhere in the path, e.g.
    /// `/table/7` or `/bella-vista/table/12/menu`.
    pub fn from_path(path: &str) -> Option<Self> {
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        segments.windows(2).find_map(|pair| {
            if pair[0] != "table" || !pair[1].bytes().all(|b| b.is_ascii_digit()) {
                return None;
            }
            pair[1].parse().ok().map(TableNumber::new)
        })
    }
}

/// Resolve the table for a session, defaulting when the path has none.
///
/// A QR code should always carry a table number; a missing or garbled one is
/// most likely a hand-typed or stale deep link, so the fallback is logged
/// rather than silent.
pub fn resolve_table(path: &str) -> TableNumber {
    match TableNumber::from_path(path) {
        Some(table) => table,
        None => {
            tracing::warn!(path, fallback = %TableNumber::FALLBACK, "no table number in path");
            TableNumber::FALLBACK
        }
    }
}
