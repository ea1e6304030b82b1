//! Confirm Dialog Component
//!
//! Modal acknowledgement with a single dismiss action.

use leptos::prelude::*;

/// # Arguments
/// * `title` - Heading, e.g. "✅ Order Confirmed"
/// * `message` - Body text
/// * `action_label` - Label of the only button
/// * `on_dismiss` - Run when the button is pressed
#[component]
pub fn ConfirmDialog(
    #[prop(into)] title: String,
    #[prop(into)] message: String,
    #[prop(into)] action_label: String,
    #[prop(into)] on_dismiss: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="dialog-backdrop">
            <div class="dialog" role="alertdialog">
                <div class="dialog-title">{title}</div>
                <div class="dialog-message">{message}</div>
                <button
                    class="primary-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        on_dismiss.run(());
                    }
                >
                    {action_label}
                </button>
            </div>
        </div>
    }
}
