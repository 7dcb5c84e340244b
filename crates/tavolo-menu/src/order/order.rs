//! Order snapshot types.

use crate::cart::{Cart, CartLine};
use crate::ids::{ItemId, OrderNumber, TableNumber};
use crate::money::Money;
use crate::session::SessionContext;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An order as placed: the cart contents and total frozen at the moment the
/// customer confirmed, plus the session's numbers and a timestamp.
///
/// Later cart mutation does not touch a placed order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    /// Display order number for this session.
    pub number: OrderNumber,
    /// Table the order was placed from.
    pub table: TableNumber,
    /// Ordered lines, frozen from the cart.
    pub lines: Vec<OrderLine>,
    /// Total at placement time.
    pub total: Money,
    /// When the order was placed.
    pub placed_at: DateTime<Utc>,
}

impl Order {
    /// Freeze the current cart into an order for the given session.
    pub fn from_cart(context: &SessionContext, cart: &Cart) -> Self {
        Self {
            number: context.order_number,
            table: context.table,
            lines: cart.lines().iter().map(OrderLine::from).collect(),
            total: cart.total_price(),
            placed_at: Utc::now(),
        }
    }

    /// Total quantity across all lines.
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }
}

/// A line in a placed order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderLine {
    /// The menu item ordered.
    pub item_id: ItemId,
    /// Item name at placement time.
    pub name: String,
    /// Unit price at placement time.
    pub unit_price: Money,
    /// Quantity ordered.
    pub quantity: u32,
}

impl From<&CartLine> for OrderLine {
    fn from(line: &CartLine) -> Self {
        Self {
            item_id: line.item_id,
            name: line.name.clone(),
            unit_price: line.unit_price,
            quantity: line.quantity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::MenuItem;
    use crate::money::Currency;

    fn context() -> SessionContext {
        SessionContext::new("Bella Vista", TableNumber::new(5), OrderNumber::new(321))
    }

    fn item(id: u32, price_units: i64) -> MenuItem {
        MenuItem::new(
            ItemId::new(id),
            format!("Item {}", id),
            Money::from_units(price_units, Currency::USD),
            "",
            "🍽",
            false,
        )
    }

    #[test]
    fn test_snapshot_freezes_cart() {
        let mut cart = Cart::new();
        cart.add_item(&item(1, 14));
        cart.add_item(&item(4, 48));
        cart.add_item(&item(4, 48));

        let order = Order::from_cart(&context(), &cart);
        assert_eq!(order.number, OrderNumber::new(321));
        assert_eq!(order.table, TableNumber::new(5));
        assert_eq!(order.item_count(), 3);
        assert_eq!(order.total.amount_cents, 11000);

        // Mutating the cart afterwards leaves the snapshot untouched.
        cart.clear();
        assert_eq!(order.lines.len(), 2);
        assert_eq!(order.total.amount_cents, 11000);
    }
}
