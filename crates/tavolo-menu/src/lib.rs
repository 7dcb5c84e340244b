//! Menu, cart, and ordering domain types for Tavolo.
//!
//! This crate holds the pure logic behind a table-side ordering session:
//!
//! - **Catalog**: the categorized menu and the source seam it is loaded through
//! - **Cart**: the order-in-progress, a list of lines with quantities
//! - **Session**: per-table context and the three-screen flow state machine
//! - **Order**: the snapshot captured at placement and its kitchen dispatch
//!
//! # Example
//!
//! ```rust,ignore
//! use tavolo_menu::prelude::*;
//!
//! let context = SessionContext::from_path("Bella Vista", "/table/7");
//! let mut session = TableSession::new(context);
//!
//! let menu = HouseMenu.menu()?;
//! let arancini = menu.find_item(ItemId::new(1)).unwrap();
//! session.add_item(arancini);
//!
//! session.view_cart()?;
//! let order = session.place_order()?;
//! println!("Order #{} — {}", order.number, order.total);
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod order;
pub mod session;

pub use error::OrderingError;
pub use ids::{ItemId, OrderNumber, TableNumber};
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::OrderingError;
    pub use crate::ids::{ItemId, OrderNumber, TableNumber};
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{HouseMenu, Menu, MenuCategory, MenuItem, MenuSection, MenuSource};

    // Cart
    pub use crate::cart::{Cart, CartLine};

    // Session
    pub use crate::session::{Screen, SessionContext, SessionFlow, TableSession};

    // Order
    pub use crate::order::{KitchenLog, KitchenTicket, Order, OrderDispatcher, OrderLine};
}
