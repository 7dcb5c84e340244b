//! End-to-end exercise of a table-side ordering session against the house
//! menu: browse, build a cart, review, place, reset, order again.

use tavolo_menu::prelude::*;

fn start_session(path: &str) -> (TableSession, Menu) {
    let context = SessionContext::from_path("Bella Vista", path);
    let menu = HouseMenu.menu().expect("house menu always loads");
    (TableSession::new(context), menu)
}

#[test]
fn full_ordering_session() {
    let (mut session, menu) = start_session("/table/7");
    assert_eq!(session.context().table, TableNumber::new(7));
    assert_eq!(session.screen(), Screen::Browsing);
    assert!(session.cart().is_empty());

    // Build the worked example: one arancini, two ribeyes.
    let arancini = menu.find_item(ItemId::new(1)).unwrap().clone();
    let ribeye = menu.find_item(ItemId::new(4)).unwrap().clone();
    session.add_item(&arancini);
    session.add_item(&ribeye);
    session.add_item(&ribeye);

    assert_eq!(session.cart().total_item_count(), 3);
    assert_eq!(session.cart().total_price().amount_cents, 11000);

    // Review and adjust: one ribeye comes back off.
    session.view_cart().unwrap();
    session.remove_item(ribeye.id);
    assert_eq!(session.cart().get_line(ribeye.id).unwrap().quantity, 1);
    assert_eq!(session.cart().total_price().amount_cents, 6200);

    // Place the order and check the frozen snapshot.
    let order = session.place_order().unwrap();
    assert_eq!(session.screen(), Screen::Confirmed);
    assert_eq!(order.table, TableNumber::new(7));
    assert_eq!(order.item_count(), 2);
    assert_eq!(order.total.amount_cents, 6200);

    // The logging dispatcher accepts the order as-is.
    KitchenLog.dispatch(&order);

    // The ticket carries the same numbers the customer saw.
    let ticket = KitchenTicket::from(&order);
    assert_eq!(ticket.order_number, order.number.value());
    assert_eq!(ticket.table_number, 7);
    assert_eq!(ticket.total_cents, 6200);
    assert_eq!(ticket.items.len(), 2);

    // "Order more items" resets to a browsable, empty session.
    session.order_more().unwrap();
    assert_eq!(session.screen(), Screen::Browsing);
    assert!(session.cart().is_empty());
    assert!(session.placed_order().is_none());

    // A second round in the same session keeps the same order number.
    let coffee = menu.find_item(ItemId::new(11)).unwrap().clone();
    session.add_item(&coffee);
    session.view_cart().unwrap();
    let second = session.place_order().unwrap();
    assert_eq!(second.number, order.number);
    assert_eq!(second.total.amount_cents, 500);
}

#[test]
fn session_without_table_in_path_defaults() {
    let (session, _) = start_session("/menu");
    assert_eq!(session.context().table, TableNumber::new(1));
}
