//! Menu Page
//!
//! Catalog grid with per-item quantity selectors and a cart badge.
//! The catalog is read once per ordering session.

use leptos::prelude::*;
use leptos::task::spawn_local;

use food_order_core::FoodItem;
use crate::catalog;
use crate::context::AppContext;
use super::{FoodCard, Notice, NoticeHandle};

#[component]
pub fn MenuPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let session = ctx.session;
    let notice = NoticeHandle::new();

    // Load menu on mount, unless this session already has it
    Effect::new(move |_| {
        if session.with_untracked(|s| s.menu().is_loaded()) {
            return;
        }
        spawn_local(async move {
            let items = catalog::load_menu().await;
            session.try_update(|s| s.menu_mut().show_items(items));
        });
    });

    let go_to_cart = move |_| ctx.checkout();

    let card = move |item: FoodItem| {
        let id = item.id.clone();
        let quantity = Signal::derive({
            let id = id.clone();
            move || session.with(|s| s.menu().selected_quantity(&id))
        });
        let on_change = Callback::new(move |delta: i32| {
            session.update(|s| {
                let menu = s.menu_mut();
                if delta < 0 {
                    menu.decrease(&id);
                } else {
                    menu.increase(&id);
                }
            });
        });
        let added = item.clone();
        let on_add = Callback::new(move |_: ()| {
            if session.try_update(|s| s.menu_mut().add_to_cart(&added)).flatten().is_some() {
                notice.show("🛒 Added to Cart", format!("{} added successfully.", added.name));
            }
        });

        view! { <FoodCard item=item quantity=quantity on_change=on_change on_add=on_add /> }
    };

    view! {
        <div class="screen menu-screen">
            <header class="screen-header">
                <h1>"🍕 Food Menu"</h1>
                <button class="cart-badge" on:click=go_to_cart>
                    {move || format!("🛒 {}", session.with(|s| s.menu().total_items()))}
                </button>
            </header>

            <Notice handle=notice />

            <div class="food-grid">
                <For
                    each=move || session.with(|s| s.menu().items().to_vec())
                    key=|item| item.id.clone()
                    children=card
                />
            </div>
        </div>
    }
}
