//! Cart and cart line types.

use crate::catalog::MenuItem;
use crate::ids::ItemId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// One distinct menu item queued for order, with its quantity.
///
/// The line keeps a copy of the item's display fields so the cart renders
/// consistently even if the catalog were to change mid-session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartLine {
    /// The menu item this line is for.
    pub item_id: ItemId,
    /// Item name at the time it was added.
    pub name: String,
    /// Unit price at the time it was added.
    pub unit_price: Money,
    /// Emoji token for display.
    pub image: String,
    /// Quantity queued; always at least 1.
    pub quantity: u32,
}

impl CartLine {
    fn from_item(item: &MenuItem) -> Self {
        Self {
            item_id: item.id,
            name: item.name.clone(),
            unit_price: item.price,
            image: item.image.clone(),
            quantity: 1,
        }
    }

    /// Line total (unit price × quantity).
    pub fn line_total(&self) -> Money {
        self.unit_price.multiply(self.quantity as i64)
    }
}

/// The order-in-progress: an insertion-ordered list of cart lines.
///
/// Invariants:
/// - at most one line per item id
/// - every line has quantity >= 1; a line that would drop to 0 is removed
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Create a new empty cart.
    pub fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Add one of the given item.
    ///
    /// Increments the existing line's quantity, or appends a new line with
    /// quantity 1. Always succeeds.
    pub fn add_item(&mut self, item: &MenuItem) {
        if let Some(line) = self.lines.iter_mut().find(|l| l.item_id == item.id) {
            line.quantity += 1;
        } else {
            self.lines.push(CartLine::from_item(item));
        }
    }

    /// Remove one of the given item.
    ///
    /// Decrements the matching line's quantity, deleting the line entirely
    /// when it would drop to 0. Removing an item that is not in the cart is
    /// a no-op. Returns whether the cart changed.
    pub fn remove_item(&mut self, item_id: ItemId) -> bool {
        let Some(index) = self.lines.iter().position(|l| l.item_id == item_id) else {
            return false;
        };
        if self.lines[index].quantity > 1 {
            self.lines[index].quantity -= 1;
        } else {
            self.lines.remove(index);
        }
        true
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Sum of line totals; zero for an empty cart.
    pub fn total_price(&self) -> Money {
        let currency = self
            .lines
            .first()
            .map(|l| l.unit_price.currency)
            .unwrap_or_default();
        self.lines
            .iter()
            .fold(Money::zero(currency), |acc, line| acc + line.line_total())
    }

    /// Sum of quantities across all lines.
    pub fn total_item_count(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Number of distinct lines.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// All lines in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Get the line for an item, if present.
    pub fn get_line(&self, item_id: ItemId) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.item_id == item_id)
    }
}
