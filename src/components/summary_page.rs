//! Order Summary Page
//!
//! Read-only breakdown; submitting shows the confirmation and returns to a
//! fresh menu.

use leptos::prelude::*;

use food_order_core::format_price;
use crate::context::AppContext;
use super::{ConfirmDialog, LineRow};

#[component]
pub fn SummaryPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let (confirming, set_confirming) = signal(false);

    let (lines, total) = ctx.session.with_untracked(|s| {
        s.summary()
            .map(|summary| (summary.lines().to_vec(), summary.total()))
            .unwrap_or_default()
    });

    let done = Callback::new(move |_: ()| ctx.confirm());

    view! {
        <div class="screen summary-screen">
            <h1>"📋 Order Summary"</h1>

            <div class="line-list">
                {lines.into_iter().map(|line| {
                    let quantity = line.quantity;
                    view! { <LineRow item=line.item quantity=Signal::derive(move || quantity) /> }
                }).collect_view()}
            </div>

            <div class="total">{format!("Total: {}", format_price(total))}</div>

            <button class="primary-btn" on:click=move |_| set_confirming.set(true)>"Submit Order"</button>

            <Show when=move || confirming.get()>
                <ConfirmDialog
                    title="✅ Order Confirmed"
                    message="Thank you! Your order has been submitted."
                    action_label="Done"
                    on_dismiss=done
                />
            </Show>
        </div>
    }
}
