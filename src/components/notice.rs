//! Transient Notice
//!
//! Small banner that hides itself after a few seconds.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

const NOTICE_MS: u32 = 2_000;

/// Handle for showing notices; cheap to copy into event handlers
#[derive(Clone, Copy)]
pub struct NoticeHandle {
    message: RwSignal<Option<(String, String)>>,
    generation: RwSignal<u32>,
}

impl NoticeHandle {
    pub fn new() -> Self {
        Self {
            message: RwSignal::new(None),
            generation: RwSignal::new(0),
        }
    }

    /// Show `title`/`body`, replacing whatever is showing
    pub fn show(&self, title: &str, body: String) {
        self.message.set(Some((title.to_string(), body)));
        self.generation.update(|g| *g = g.wrapping_add(1));
        let shown = self.generation.get_untracked();

        let handle = *self;
        spawn_local(async move {
            TimeoutFuture::new(NOTICE_MS).await;
            // A newer notice owns the banner now; the screen may also be gone
            if handle.generation.try_get_untracked() == Some(shown) {
                let _ = handle.message.try_set(None);
            }
        });
    }
}

#[component]
pub fn Notice(handle: NoticeHandle) -> impl IntoView {
    view! {
        {move || handle.message.get().map(|(title, body)| view! {
            <div class="notice" role="status">
                <div class="notice-title">{title}</div>
                <div class="notice-body">{body}</div>
            </div>
        })}
    }
}
