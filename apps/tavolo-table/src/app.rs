//! Application components and screens.

use leptos::logging;
use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Title};

use tavolo_menu::prelude::*;

use crate::config::TableAppConfig;

// ============================================================================
// Navigation input
// ============================================================================

/// The path the interface was loaded under, read once at startup.
fn current_path() -> String {
    #[cfg(target_arch = "wasm32")]
    {
        window()
            .location()
            .pathname()
            .unwrap_or_else(|_| "/".to_string())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        "/".to_string()
    }
}

// ============================================================================
// App Component
// ============================================================================

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = TableAppConfig::default();
    let menu = match HouseMenu.menu() {
        Ok(menu) => menu,
        Err(e) => {
            logging::error!("menu failed to load: {e}");
            Menu::default()
        }
    };

    let context = SessionContext::from_path(config.restaurant_name.clone(), &current_path());
    let session = RwSignal::new(TableSession::new(context));

    let title = config.restaurant_name.clone();
    view! {
        <Title text=title/>

        <div class="page">
            {move || match session.with(|s| s.screen()) {
                Screen::Browsing => view! {
                    <MenuScreen session=session menu=menu.clone() config=config.clone()/>
                }
                .into_any(),
                Screen::ReviewingCart => view! {
                    <CartScreen session=session menu=menu.clone()/>
                }
                .into_any(),
                Screen::Confirmed => view! {
                    <ConfirmationScreen session=session config=config.clone()/>
                }
                .into_any(),
            }}
        </div>
    }
}

// ============================================================================
// Menu Screen
// ============================================================================

#[component]
fn MenuScreen(session: RwSignal<TableSession>, menu: Menu, config: TableAppConfig) -> impl IntoView {
    let context = session.with_untracked(|s| s.context().clone());

    view! {
        <div class="screen screen-menu">
            <header class="masthead">
                <div>
                    <h1>{config.restaurant_name.clone()}</h1>
                    <p class="tagline">{config.tagline.clone()}</p>
                </div>
                <div class="session-badge">
                    <span>"Order #" {context.order_number.value()}</span>
                    <span>"📍 Table " {context.table.value()}</span>
                </div>
            </header>

            <main class="menu-sections">
                {menu
                    .sections()
                    .iter()
                    .map(|section| {
                        view! { <MenuSectionView section=section.clone() session=session/> }
                    })
                    .collect::<Vec<_>>()}
            </main>

            <CartSummaryButton session=session/>
        </div>
    }
}

#[component]
fn MenuSectionView(section: MenuSection, session: RwSignal<TableSession>) -> impl IntoView {
    view! {
        <section class="menu-section">
            <h2>{section.category.display_name()}</h2>
            <div class="menu-items">
                {section
                    .items
                    .into_iter()
                    .map(|item| view! { <MenuItemCard item=item session=session/> })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
}

#[component]
fn MenuItemCard(item: MenuItem, session: RwSignal<TableSession>) -> impl IntoView {
    let add = {
        let item = item.clone();
        move |_| session.update(|s| s.add_item(&item))
    };

    view! {
        <article class="menu-item">
            <div class="item-heading">
                <span class="item-image">{item.image.clone()}</span>
                <h3>{item.name.clone()}</h3>
                {item.popular.then(|| view! { <span class="badge-popular">"★ Popular"</span> })}
            </div>
            <p class="item-description">{item.description.clone()}</p>
            <div class="item-footer">
                <span class="item-price">{item.price.display()}</span>
                <button class="btn btn-add" on:click=add>
                    "+ Add to Cart"
                </button>
            </div>
        </article>
    }
}

/// Floating cart summary, shown only while the cart has something in it.
#[component]
fn CartSummaryButton(session: RwSignal<TableSession>) -> impl IntoView {
    move || {
        let (count, total) =
            session.with(|s| (s.cart().total_item_count(), s.cart().total_price()));
        (count > 0).then(|| {
            let open = move |_| {
                session.update(|s| {
                    if let Err(e) = s.view_cart() {
                        logging::warn!("view cart: {e}");
                    }
                })
            };
            view! {
                <button class="btn cart-fab" on:click=open>
                    "🛒 View Cart (" {count} ") • " {total.display()}
                </button>
            }
        })
    }
}

// ============================================================================
// Cart Screen
// ============================================================================

#[component]
fn CartScreen(session: RwSignal<TableSession>, menu: Menu) -> impl IntoView {
    let context = session.with_untracked(|s| s.context().clone());

    let back = move |_| {
        session.update(|s| {
            if let Err(e) = s.back_to_menu() {
                logging::warn!("back to menu: {e}");
            }
        })
    };
    let place = move |_| {
        session.update(|s| match s.place_order() {
            Ok(order) => KitchenLog.dispatch(&order),
            Err(e) => logging::warn!("place order: {e}"),
        })
    };

    view! {
        <div class="screen screen-cart">
            <header class="masthead">
                <div class="masthead-row">
                    <button class="btn-link" on:click=back>
                        "← Back to Menu"
                    </button>
                    <h1>"Your Order"</h1>
                </div>
                <div class="session-badge">
                    <span>
                        "Order #" {context.order_number.value()} " • "
                        {context.restaurant_name.clone()}
                    </span>
                    <span>"📍 Table " {context.table.value()}</span>
                </div>
            </header>

            <section class="cart-body">
                {move || {
                    let cart = session.with(|s| s.cart().clone());
                    if cart.is_empty() {
                        view! {
                            <div class="cart-empty">
                                <span class="cart-empty-icon">"🛒"</span>
                                <p>"Your cart is empty"</p>
                            </div>
                        }
                        .into_any()
                    } else {
                        view! {
                            <div class="cart-lines">
                                {cart
                                    .lines()
                                    .iter()
                                    .map(|line| {
                                        view! {
                                            <CartLineRow
                                                line=line.clone()
                                                menu=menu.clone()
                                                session=session
                                            />
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </div>
                            <div class="cart-total">
                                <span>"Total:"</span>
                                <strong>{cart.total_price().display()}</strong>
                            </div>
                            <button class="btn btn-place" on:click=place>
                                "✓ Place Order"
                            </button>
                        }
                        .into_any()
                    }
                }}
            </section>
        </div>
    }
}

#[component]
fn CartLineRow(line: CartLine, menu: Menu, session: RwSignal<TableSession>) -> impl IntoView {
    let id = line.item_id;
    let decrement = move |_| {
        session.update(|s| {
            s.remove_item(id);
        })
    };
    // Incrementing is the same action as adding from the menu.
    let increment = move |_| {
        if let Some(item) = menu.find_item(id) {
            session.update(|s| s.add_item(item));
        }
    };

    view! {
        <div class="cart-line">
            <div class="line-item">
                <span class="item-image">{line.image.clone()}</span>
                <div>
                    <h3>{line.name.clone()}</h3>
                    <p class="line-price">{line.unit_price.display()}</p>
                </div>
            </div>
            <div class="line-controls">
                <button class="btn-round btn-minus" on:click=decrement>
                    "−"
                </button>
                <span class="line-quantity">{line.quantity}</span>
                <button class="btn-round btn-plus" on:click=increment>
                    "+"
                </button>
            </div>
        </div>
    }
}

// ============================================================================
// Confirmation Screen
// ============================================================================

#[component]
fn ConfirmationScreen(session: RwSignal<TableSession>, config: TableAppConfig) -> impl IntoView {
    let reset = move |_| {
        session.update(|s| {
            if let Err(e) = s.order_more() {
                logging::warn!("order more: {e}");
            }
        })
    };

    view! {
        <div class="screen screen-confirmation">
            <header class="masthead masthead-success">
                <div class="success-check">"✓"</div>
                <h1>"Order Confirmed!"</h1>
                <p>"Thank you for your order"</p>
            </header>

            <section class="confirmation-body">
                {move || {
                    session
                        .with(|s| s.placed_order().cloned())
                        .map(|order| {
                            view! {
                                <div class="order-summary">
                                    <h3>"Order Summary"</h3>
                                    <dl>
                                        <div>
                                            <dt>"Order #:"</dt>
                                            <dd>{order.number.value()}</dd>
                                        </div>
                                        <div>
                                            <dt>"Table:"</dt>
                                            <dd>{order.table.value()}</dd>
                                        </div>
                                        <div>
                                            <dt>"Items:"</dt>
                                            <dd>{order.item_count()}</dd>
                                        </div>
                                        <div>
                                            <dt>"Total:"</dt>
                                            <dd class="summary-total">{order.total.display()}</dd>
                                        </div>
                                    </dl>
                                </div>
                                <p class="prep-estimate">
                                    "⏱ Estimated time: " {config.prep_estimate.clone()}
                                </p>
                                <p class="kitchen-note">
                                    "Your order has been sent to the kitchen. We'll bring it to your table when ready!"
                                </p>
                                <div class="table-reminder">"📍 Table " {order.table.value()}</div>
                            }
                        })
                }}
                <button class="btn btn-reset" on:click=reset>
                    "Order More Items"
                </button>
            </section>
        </div>
    }
}
