//! Quantity Stepper Component
//!
//! `−  n  +` control shared by the menu cards and the cart rows.

use leptos::prelude::*;

/// Emits -1 / +1 through `on_change`; the floor is enforced by the owner
#[component]
pub fn QuantityStepper(
    #[prop(into)] quantity: Signal<u32>,
    #[prop(into)] on_change: Callback<i32>,
) -> impl IntoView {
    view! {
        <div class="qty-controls">
            <button class="qty-btn" on:click=move |_| on_change.run(-1)>"−"</button>
            <span class="qty-value">{move || quantity.get()}</span>
            <button class="qty-btn" on:click=move |_| on_change.run(1)>"+"</button>
        </div>
    }
}
