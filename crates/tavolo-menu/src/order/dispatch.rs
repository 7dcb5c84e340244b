//! Outbound order dispatch.
//!
//! A placed order is handed to the kitchen system as a single fire-and-forget
//! message; no acknowledgement is consumed here. Fulfillment, retries, and
//! failure handling belong to the kitchen side of the seam.

use crate::order::Order;
use serde::{Deserialize, Serialize};

/// Where placed orders are sent.
pub trait OrderDispatcher {
    /// Hand the order off. Fire-and-forget.
    fn dispatch(&self, order: &Order);
}

/// The wire document sent to the kitchen.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct KitchenTicket {
    /// Display order number.
    pub order_number: u32,
    /// Table to deliver to.
    pub table_number: u32,
    /// Ordered lines.
    pub items: Vec<TicketLine>,
    /// Computed total, in cents.
    pub total_cents: i64,
    /// ISO-8601 placement timestamp.
    pub timestamp: String,
}

/// One line of a kitchen ticket.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TicketLine {
    pub id: u32,
    pub name: String,
    pub price_cents: i64,
    pub quantity: u32,
}

impl KitchenTicket {
    /// Format as a JSON string.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| format!("order #{}", self.order_number))
    }
}

impl From<&Order> for KitchenTicket {
    fn from(order: &Order) -> Self {
        Self {
            order_number: order.number.value(),
            table_number: order.table.value(),
            items: order
                .lines
                .iter()
                .map(|line| TicketLine {
                    id: line.item_id.value(),
                    name: line.name.clone(),
                    price_cents: line.unit_price.amount_cents,
                    quantity: line.quantity,
                })
                .collect(),
            total_cents: order.total.amount_cents,
            timestamp: order.placed_at.to_rfc3339(),
        }
    }
}

/// Dispatcher that logs the ticket instead of transmitting it.
///
/// Stands in for the kitchen/POS uplink during development.
#[derive(Debug, Clone, Copy, Default)]
pub struct KitchenLog;

impl OrderDispatcher for KitchenLog {
    fn dispatch(&self, order: &Order) {
        let ticket = KitchenTicket::from(order);
        tracing::info!(target: "kitchen", ticket = %ticket.to_json(), "order placed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::Cart;
    use crate::catalog::MenuItem;
    use crate::ids::{ItemId, OrderNumber, TableNumber};
    use crate::money::{Currency, Money};
    use crate::session::SessionContext;

    fn placed_order() -> Order {
        let mut cart = Cart::new();
        cart.add_item(&MenuItem::new(
            ItemId::new(9),
            "Craft Beer",
            Money::from_units(8, Currency::USD),
            "Local IPA, citrus notes",
            "🍺",
            true,
        ));
        let context =
            SessionContext::new("Bella Vista", TableNumber::new(2), OrderNumber::new(77));
        Order::from_cart(&context, &cart)
    }

    #[test]
    fn test_ticket_fields() {
        let ticket = KitchenTicket::from(&placed_order());
        assert_eq!(ticket.order_number, 77);
        assert_eq!(ticket.table_number, 2);
        assert_eq!(ticket.items.len(), 1);
        assert_eq!(ticket.items[0].price_cents, 800);
        assert_eq!(ticket.total_cents, 800);
    }

    #[test]
    fn test_ticket_json_shape() {
        let json = KitchenTicket::from(&placed_order()).to_json();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["orderNumber"], 77);
        assert_eq!(value["tableNumber"], 2);
        assert_eq!(value["items"][0]["name"], "Craft Beer");
        assert_eq!(value["items"][0]["quantity"], 1);
        assert_eq!(value["totalCents"], 800);
        // RFC 3339 timestamps parse back.
        let ts = value["timestamp"].as_str().unwrap();
        assert!(chrono::DateTime::parse_from_rfc3339(ts).is_ok());
    }

    #[test]
    fn test_log_dispatch_does_not_panic() {
        KitchenLog.dispatch(&placed_order());
    }
}
