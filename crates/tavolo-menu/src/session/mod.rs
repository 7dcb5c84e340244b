//! Session module.
//!
//! One customer's interaction with the interface, from page load to
//! navigation away: fixed per-session context, the cart being built, the
//! screen flow, and the latest placed order.

mod context;
mod flow;
mod table;

pub use context::SessionContext;
pub use flow::{Screen, SessionFlow};
pub use table::resolve_table;

use crate::cart::Cart;
use crate::catalog::MenuItem;
use crate::error::OrderingError;
use crate::ids::ItemId;
use crate::order::Order;

/// A table-side ordering session.
///
/// Owns the cart and the screen flow and exposes the discrete user actions
/// the views wire their controls to. All mutation happens synchronously
/// inside these methods, one action at a time.
#[derive(Debug, Clone, PartialEq)]
pub struct TableSession {
    context: SessionContext,
    cart: Cart,
    flow: SessionFlow,
    placed: Option<Order>,
}

impl TableSession {
    /// Start a fresh session on the menu screen with an empty cart.
    pub fn new(context: SessionContext) -> Self {
        Self {
            context,
            cart: Cart::new(),
            flow: SessionFlow::new(),
            placed: None,
        }
    }

    /// Per-session context (restaurant, table, order number).
    pub fn context(&self) -> &SessionContext {
        &self.context
    }

    /// The order-in-progress.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// The currently active screen.
    pub fn screen(&self) -> Screen {
        self.flow.screen()
    }

    /// The order captured by the last `place_order`, until the session is
    /// reset with `order_more`.
    pub fn placed_order(&self) -> Option<&Order> {
        self.placed.as_ref()
    }

    /// Add one of the given item to the cart.
    pub fn add_item(&mut self, item: &MenuItem) {
        self.cart.add_item(item);
    }

    /// Remove one of the given item from the cart; no-op if absent.
    pub fn remove_item(&mut self, item_id: ItemId) -> bool {
        self.cart.remove_item(item_id)
    }

    /// Switch from the menu to cart review.
    pub fn view_cart(&mut self) -> Result<Screen, OrderingError> {
        self.flow.view_cart()
    }

    /// Switch from cart review back to the menu.
    pub fn back_to_menu(&mut self) -> Result<Screen, OrderingError> {
        self.flow.back_to_menu()
    }

    /// Place the order: freeze the cart into a snapshot, hold it for the
    /// confirmation screen, and move there.
    ///
    /// The snapshot is the cart exactly as it stood at this call; the cart
    /// itself is left alone until `order_more` resets the session.
    pub fn place_order(&mut self) -> Result<Order, OrderingError> {
        if self.cart.is_empty() {
            return Err(OrderingError::EmptyCart);
        }
        self.flow.place_order()?;
        let order = Order::from_cart(&self.context, &self.cart);
        self.placed = Some(order.clone());
        Ok(order)
    }

    /// Reset from the confirmation screen: empty the cart, drop the held
    /// snapshot, and return to the menu.
    pub fn order_more(&mut self) -> Result<Screen, OrderingError> {
        let screen = self.flow.order_more()?;
        self.cart.clear();
        self.placed = None;
        Ok(screen)
    }
}
