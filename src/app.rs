//! Food Order Frontend App
//!
//! Owns the ordering session and switches between the menu, cart and summary
//! screens.

use leptos::prelude::*;

use food_order_core::{Route, Session};
use crate::context::{current_route, AppContext};
use crate::components::{CartPage, MenuPage, SummaryPage};

#[component]
pub fn App() -> impl IntoView {
    // Reloading the page restores the screen (and cart) from the URL hash
    let session = RwSignal::new(Session::restore(current_route()));

    let ctx = AppContext::new(session);
    provide_context(ctx);

    let _ = window_event_listener(leptos::ev::hashchange, move |_| ctx.sync_from_location());

    // Pages remount on a route change only, not on edits inside a screen
    let route = Memo::new(move |_| ctx.route());

    view! {
        <div class="app-layout">
            {move || match route.get() {
                Route::Menu => view! { <MenuPage /> }.into_any(),
                Route::Cart { .. } => view! { <CartPage /> }.into_any(),
                Route::Summary { .. } => view! { <SummaryPage /> }.into_any(),
            }}
        </div>
    }
}
