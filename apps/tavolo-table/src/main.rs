//! Table-side ordering interface for Tavolo.
//!
//! A customer scans a table QR code and lands here: browse the menu, build a
//! cart, place the order. Single page, three screens, all state in-memory
//! for the lifetime of the session.

mod app;
mod config;

use app::App;

fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(App);
}
