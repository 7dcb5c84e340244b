//! Screen flow state machine.

use crate::error::OrderingError;
use serde::{Deserialize, Serialize};

/// The three mutually exclusive screens of the interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Screen {
    /// Browsing the menu.
    #[default]
    Browsing,
    /// Reviewing the cart before placing the order.
    ReviewingCart,
    /// Order placed, confirmation shown.
    Confirmed,
}

impl Screen {
    pub fn as_str(&self) -> &'static str {
        match self {
            Screen::Browsing => "menu",
            Screen::ReviewingCart => "cart",
            Screen::Confirmed => "confirmation",
        }
    }
}

/// Session flow over [`Screen`].
///
/// Only four transitions exist; anything else is rejected. The views never
/// surface an action that is invalid on the current screen, so to a customer
/// an invalid action simply has no effect.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SessionFlow {
    screen: Screen,
}

impl SessionFlow {
    /// Create a new flow on the menu screen.
    pub fn new() -> Self {
        Self::default()
    }

    /// The currently active screen.
    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// "View cart": menu -> cart review.
    pub fn view_cart(&mut self) -> Result<Screen, OrderingError> {
        self.transition(Screen::Browsing, Screen::ReviewingCart)
    }

    /// "Back to menu": cart review -> menu.
    pub fn back_to_menu(&mut self) -> Result<Screen, OrderingError> {
        self.transition(Screen::ReviewingCart, Screen::Browsing)
    }

    /// "Place order": cart review -> confirmation.
    pub fn place_order(&mut self) -> Result<Screen, OrderingError> {
        self.transition(Screen::ReviewingCart, Screen::Confirmed)
    }

    /// "Order more items": confirmation -> menu.
    pub fn order_more(&mut self) -> Result<Screen, OrderingError> {
        self.transition(Screen::Confirmed, Screen::Browsing)
    }

    fn transition(&mut self, from: Screen, to: Screen) -> Result<Screen, OrderingError> {
        if self.screen != from {
            return Err(OrderingError::InvalidTransition {
                from: self.screen.as_str(),
                to: to.as_str(),
            });
        }
        self.screen = to;
        Ok(to)
    }
}
