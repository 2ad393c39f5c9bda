//! View and modal visibility state.
//!
//! Pure routing state: which top-level view is active, which modals are
//! open, and whether the cart panel is showing. No storage, no side
//! effects - [`crate::state::AppState`] wires this to the other
//! components.

use std::collections::BTreeSet;

/// Top-level views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// The storefront.
    #[default]
    Shop,
    /// The admin dashboard. Reachable only with an admin session.
    AdminDashboard,
}

/// Modal dialogs the storefront can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Modal {
    Login,
    Signup,
    Checkout,
    About,
    Faq,
}

/// Current view, open modals, and cart panel visibility.
#[derive(Debug, Default)]
pub struct ViewState {
    current_view: View,
    open_modals: BTreeSet<Modal>,
    cart_visible: bool,
}

impl ViewState {
    /// The active top-level view.
    #[must_use]
    pub const fn current_view(&self) -> View {
        self.current_view
    }

    /// Switch the top-level view.
    ///
    /// Access control (admin gating) lives in the coordinator; this is
    /// plain state.
    pub fn navigate(&mut self, view: View) {
        self.current_view = view;
    }

    /// Open a modal.
    pub fn open(&mut self, modal: Modal) {
        self.open_modals.insert(modal);
    }

    /// Close a modal. Closing a modal that is not open is a no-op.
    pub fn close(&mut self, modal: Modal) {
        self.open_modals.remove(&modal);
    }

    /// Whether a modal is currently open.
    #[must_use]
    pub fn is_open(&self, modal: Modal) -> bool {
        self.open_modals.contains(&modal)
    }

    /// Whether the cart panel is showing.
    #[must_use]
    pub const fn cart_visible(&self) -> bool {
        self.cart_visible
    }

    /// Toggle the cart panel.
    pub fn toggle_cart(&mut self) {
        self.cart_visible = !self.cart_visible;
    }

    /// Hide the cart panel.
    pub fn hide_cart(&mut self) {
        self.cart_visible = false;
    }
}
