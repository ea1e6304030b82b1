//! Cart Page
//!
//! Edit quantities of the received cart and place the order. The edits live
//! in the session, so they survive a trip to the summary and back.

use leptos::prelude::*;

use food_order_core::{format_price, CartLine, CartScreen};
use crate::context::AppContext;
use super::{LineRow, QuantityStepper};

#[component]
pub fn CartPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let session = ctx.session;

    let place_order = move |_| ctx.place_order();

    let row = move |line: CartLine| {
        let id = line.item.id.clone();
        let received = line.quantity;
        let quantity = Signal::derive({
            let id = id.clone();
            move || session.with(|s| s.cart().and_then(|c| c.quantity(&id)).unwrap_or(received))
        });
        let on_change = Callback::new(move |delta: i32| {
            session.update(|s| {
                if let Some(cart) = s.cart_mut() {
                    if delta < 0 {
                        cart.decrement(&id);
                    } else {
                        cart.increment(&id);
                    }
                }
            });
        });

        view! {
            <LineRow item=line.item quantity=quantity>
                <QuantityStepper quantity=quantity on_change=on_change />
            </LineRow>
        }
    };

    view! {
        <div class="screen cart-screen">
            <h1>"🛒 Your Cart"</h1>

            <Show
                when=move || !session.with(|s| s.cart().map_or(true, CartScreen::is_empty))
                fallback=|| view! { <p class="empty-text">"Your cart is empty."</p> }
            >
                <div class="line-list">
                    <For
                        each=move || session.with_untracked(|s| s.cart().map(|c| c.lines().to_vec()).unwrap_or_default())
                        key=|line| line.item.id.clone()
                        children=row
                    />
                </div>

                <footer class="screen-footer">
                    <div class="total">{move || format!("Total: {}", format_price(session.with(|s| s.cart().map_or(0.0, CartScreen::total))))}</div>
                    <button class="primary-btn" on:click=place_order>"Place Order"</button>
                </footer>
            </Show>
        </div>
    }
}
