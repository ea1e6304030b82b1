//! Cart Line Row Component
//!
//! Image, name and `₹price × qty = ₹subtotal`, with optional controls below.

use leptos::prelude::*;

use food_order_core::{format_price, FoodItem};

#[component]
pub fn LineRow(
    item: FoodItem,
    #[prop(into)] quantity: Signal<u32>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let price = item.price;
    let breakdown = move || {
        let qty = quantity.get();
        format!("{} × {} = {}", format_price(price), qty, format_price(price * f64::from(qty)))
    };

    view! {
        <div class="line-row">
            <img class="line-image" src=item.image.clone() alt=item.name.clone() />
            <div class="line-details">
                <div class="line-name">{item.name.clone()}</div>
                <div class="line-breakdown">{breakdown}</div>
                {children.map(|c| c())}
            </div>
        </div>
    }
}
