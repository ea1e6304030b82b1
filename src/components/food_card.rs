//! Food Card Component
//!
//! One menu grid cell: image, name, price, quantity selector, add button.

use leptos::prelude::*;

use food_order_core::{format_price, FoodItem};
use super::QuantityStepper;

#[component]
pub fn FoodCard(
    item: FoodItem,
    #[prop(into)] quantity: Signal<u32>,
    #[prop(into)] on_change: Callback<i32>,
    #[prop(into)] on_add: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="food-card">
            <img class="food-image" src=item.image.clone() alt=item.name.clone() />
            <div class="food-name">{item.name.clone()}</div>
            <div class="food-price">{format_price(item.price)}</div>
            <QuantityStepper quantity=quantity on_change=on_change />
            <button class="primary-btn" on:click=move |_| on_add.run(())>"Add to Cart"</button>
        </div>
    }
}
