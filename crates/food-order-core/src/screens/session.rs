//! Ordering Session
//!
//! The screens of one ordering session. A screen stays alive while the user
//! moves to the next route, so going Back shows it exactly as it was left:
//! the menu keeps its catalog, selectors and cart, the cart screen keeps its
//! edits. Screens are still separate values; moving forward hands the cart
//! over as a serialized copy. Confirming the order ends the session.

use super::cart::CartScreen;
use super::menu::MenuScreen;
use super::route::Route;
use super::summary::SummaryScreen;

#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    route: Route,
    menu: MenuScreen,
    /// Cart screen with the route it was opened from
    cart: Option<(Route, CartScreen)>,
    summary: Option<(Route, SummaryScreen)>,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            route: Route::Menu,
            menu: MenuScreen::new(),
            cart: None,
            summary: None,
        }
    }
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Session for a route found at startup (reload, shared link)
    pub fn restore(route: Route) -> Self {
        let mut session = Self::new();
        session.open(route);
        session
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    pub fn menu(&self) -> &MenuScreen {
        &self.menu
    }

    pub fn menu_mut(&mut self) -> &mut MenuScreen {
        &mut self.menu
    }

    pub fn cart(&self) -> Option<&CartScreen> {
        self.cart.as_ref().map(|(_, screen)| screen)
    }

    pub fn cart_mut(&mut self) -> Option<&mut CartScreen> {
        self.cart.as_mut().map(|(_, screen)| screen)
    }

    pub fn summary(&self) -> Option<&SummaryScreen> {
        self.summary.as_ref().map(|(_, screen)| screen)
    }

    /// Move forward to `route`. Cart and summary screens are rebuilt from the
    /// payload the route carries.
    pub fn open(&mut self, route: Route) {
        match &route {
            Route::Menu => {}
            Route::Cart { cart } => {
                self.cart = Some((route.clone(), CartScreen::from_param(cart.as_deref())));
            }
            Route::Summary { cart } => {
                self.summary = Some((route.clone(), SummaryScreen::from_param(cart.as_deref())));
            }
        }
        self.route = route;
    }

    /// Return to `route` through browser history. A screen still alive for
    /// that exact route is shown as it was left; anything else is opened.
    pub fn revisit(&mut self, route: Route) {
        let alive = match &route {
            Route::Menu => true,
            Route::Cart { .. } => self.cart.as_ref().is_some_and(|(opened, _)| *opened == route),
            Route::Summary { .. } => self.summary.as_ref().is_some_and(|(opened, _)| *opened == route),
        };
        if alive {
            self.route = route;
        } else {
            self.open(route);
        }
    }

    /// Menu → cart with a copy of the menu's cart
    pub fn checkout(&mut self) -> Route {
        let route = self.menu.checkout();
        self.open(route.clone());
        route
    }

    /// Cart → summary with a copy of the edited cart. `None` when no cart
    /// screen is open.
    pub fn place_order(&mut self) -> Option<Route> {
        let route = self.cart()?.place_order();
        self.open(route.clone());
        Some(route)
    }

    /// Acknowledge the order and start over with a fresh menu
    pub fn confirm(&mut self) -> Route {
        let route = match self.summary.take() {
            Some((_, summary)) => summary.confirm(),
            None => Route::Menu,
        };
        *self = Self::new();
        self.route = route.clone();
        route
    }
}
