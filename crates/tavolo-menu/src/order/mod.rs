//! Order module.
//!
//! Contains the snapshot captured at order placement and the outbound
//! dispatch seam the kitchen system sits behind.

mod dispatch;
mod order;

pub use dispatch::{KitchenLog, KitchenTicket, OrderDispatcher, TicketLine};
pub use order::{Order, OrderLine};
