//! Application Context
//!
//! Navigation provided via Leptos Context API. The context holds the ordering
//! session; each screen inside it owns its own cart.

use leptos::prelude::*;
use food_order_core::{Route, Session};

/// App-wide session signal provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Screens of the current order, alive across Back navigation
    pub session: RwSignal<Session>,
}

impl AppContext {
    pub fn new(session: RwSignal<Session>) -> Self {
        Self { session }
    }

    /// Screen currently shown (tracked)
    pub fn route(&self) -> Route {
        self.session.with(|s| s.route().clone())
    }

    /// Menu → cart
    pub fn checkout(&self) {
        if let Some(route) = self.session.try_update(|s| s.checkout()) {
            push_hash(&route);
        }
    }

    /// Cart → summary
    pub fn place_order(&self) {
        if let Some(route) = self.session.try_update(|s| s.place_order()).flatten() {
            push_hash(&route);
        }
    }

    /// End the order and show a fresh menu. The finished order must not be
    /// reachable with Back, so the history entry is replaced.
    pub fn confirm(&self) {
        if let Some(route) = self.session.try_update(|s| s.confirm()) {
            let url = format!("#{}", route.to_path());
            if let Err(e) = window().location().replace(&url) {
                log::warn!("failed to replace location: {:?}", e);
            }
        }
    }

    /// Follow a hash change made outside the app (back/forward buttons)
    pub fn sync_from_location(&self) {
        let parsed = current_route();
        if self.session.with_untracked(|s| *s.route() != parsed) {
            self.session.update(|s| s.revisit(parsed));
        }
    }
}

fn push_hash(route: &Route) {
    if let Err(e) = window().location().set_hash(&route.to_path()) {
        log::warn!("failed to update location hash: {:?}", e);
    }
}

/// Route encoded in the current URL hash; the menu when there is none
pub fn current_route() -> Route {
    match window().location().hash() {
        Ok(hash) => Route::parse(&hash),
        Err(e) => {
            log::warn!("failed to read location hash: {:?}", e);
            Route::Menu
        }
    }
}
