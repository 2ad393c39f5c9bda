//! Application state shared by every front end.
//!
//! [`AppState`] is the single coordinating component: it owns the store,
//! the catalog, the filter, the cart ledger, the auth directory, and the
//! view state, and routes user actions between them. Front ends hold one
//! `AppState` and only call the operations here - no ambient globals.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use auramart_core::{ProductId, UserRole};

use crate::auth::AuthDirectory;
use crate::cart::CartLedger;
use crate::catalog::{self, FilterSelection, FilterState};
use crate::config::AppConfig;
use crate::error::AppError;
use crate::models::{Product, User};
use crate::storage::Store;
use crate::view::{Modal, View, ViewState};

/// Confirmation notice shown after a successful signup.
pub const SIGNUP_NOTICE: &str =
    "Signup successful! You can now log in with your email and the password you just created.";

/// Receipt for a confirmed (simulated) order.
///
/// No payment gateway is involved; confirmation always succeeds.
#[derive(Debug, Clone)]
pub struct OrderConfirmation {
    /// Payment method the shopper picked.
    pub payment_method: String,
    /// Tax-inclusive total at confirmation time.
    pub total: Decimal,
    /// When the order was placed.
    pub placed_at: DateTime<Utc>,
}

impl OrderConfirmation {
    /// The user-visible confirmation message.
    #[must_use]
    pub fn message(&self) -> String {
        format!(
            "Order successfully placed using {}! Thank you for shopping with AuraMart.",
            self.payment_method
        )
    }
}

/// The storefront's entire mutable state.
pub struct AppState {
    store: Store,
    catalog: Vec<Product>,
    filter: FilterState,
    cart: CartLedger,
    auth: AuthDirectory,
    view: ViewState,
}

impl AppState {
    /// Create state over `store` with the seed catalog, restoring the
    /// persisted cart, directory, and session.
    #[must_use]
    pub fn new(store: Store) -> Self {
        Self::with_catalog(store, catalog::seed())
    }

    /// Create state with an explicit catalog (testing).
    #[must_use]
    pub fn with_catalog(store: Store, catalog: Vec<Product>) -> Self {
        let cart = CartLedger::load(&store);
        let auth = AuthDirectory::load(&store);

        Self {
            store,
            catalog,
            filter: FilterState::default(),
            cart,
            auth,
            view: ViewState::default(),
        }
    }

    /// Create state with a file-backed store under the configured data
    /// directory.
    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(Store::file(&config.data_dir))
    }

    // =========================================================================
    // Catalog & filter
    // =========================================================================

    /// The full, immutable catalog.
    #[must_use]
    pub fn catalog(&self) -> &[Product] {
        &self.catalog
    }

    /// The products the current filter state displays.
    #[must_use]
    pub fn displayed_products(&self) -> Vec<Product> {
        self.filter.displayed(&self.catalog)
    }

    /// The current filter state.
    #[must_use]
    pub const fn filter(&self) -> &FilterState {
        &self.filter
    }

    /// Change the category selector. Clears any active search term.
    pub fn select_filter(&mut self, selection: FilterSelection) {
        self.filter.select(selection);
    }

    /// Change the free-text search term.
    pub fn search(&mut self, term: impl Into<String>) {
        self.filter.set_search(term);
    }

    // =========================================================================
    // Cart
    // =========================================================================

    /// The cart ledger (read-only; mutate through the methods below).
    #[must_use]
    pub const fn cart(&self) -> &CartLedger {
        &self.cart
    }

    /// Add one unit of a catalog product to the cart.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::UnknownProduct`] if the id is not in the
    /// catalog.
    pub fn add_to_cart(&mut self, product_id: &ProductId) -> Result<(), AppError> {
        let product = self
            .catalog
            .iter()
            .find(|p| p.id == *product_id)
            .cloned()
            .ok_or_else(|| AppError::UnknownProduct(product_id.clone()))?;

        self.cart.add(&product, &self.store);
        Ok(())
    }

    /// Remove a cart entry. Absent ids are a no-op.
    pub fn remove_from_cart(&mut self, product_id: &ProductId) {
        self.cart.remove(product_id, &self.store);
    }

    /// Overwrite a cart entry's quantity. Below-1 and unknown ids are
    /// no-ops.
    pub fn set_quantity(&mut self, product_id: &ProductId, quantity: u32) {
        self.cart.set_quantity(product_id, quantity, &self.store);
    }

    /// Total units in the cart.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.cart.item_count()
    }

    /// Tax-inclusive cart total.
    #[must_use]
    pub fn cart_total(&self) -> Decimal {
        self.cart.total()
    }

    // =========================================================================
    // Auth
    // =========================================================================

    /// The currently authenticated user, if any.
    #[must_use]
    pub const fn session(&self) -> Option<&User> {
        self.auth.session()
    }

    /// Log in. On success the login modal closes; an admin is also taken
    /// straight to the dashboard.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Auth`] with
    /// [`AuthError::InvalidCredentials`](crate::auth::AuthError::InvalidCredentials)
    /// on any mismatch; session and view are left unchanged.
    pub fn login(&mut self, email: &str, password: &str) -> Result<User, AppError> {
        let user = self.auth.login(email, password, &self.store)?;

        self.view.close(Modal::Login);
        if user.role == UserRole::Admin {
            self.view.navigate(View::AdminDashboard);
        }

        Ok(user)
    }

    /// Sign up a new customer. On success the signup modal closes and the
    /// new account becomes the session; the caller surfaces
    /// [`SIGNUP_NOTICE`].
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Auth`] for a duplicate or malformed email.
    pub fn signup(&mut self, email: &str, password: &str) -> Result<User, AppError> {
        let user = self.auth.signup(email, password, &self.store)?;
        self.view.close(Modal::Signup);
        Ok(user)
    }

    /// Log out: clears the session and returns to the storefront view.
    pub fn logout(&mut self) {
        self.auth.logout(&self.store);
        self.view.navigate(View::Shop);
    }

    /// The customer accounts shown on the admin dashboard.
    #[must_use]
    pub fn customer_accounts(&self) -> Vec<&User> {
        self.auth.customers().collect()
    }

    // =========================================================================
    // View routing
    // =========================================================================

    /// The view and modal visibility state.
    #[must_use]
    pub const fn view(&self) -> &ViewState {
        &self.view
    }

    /// Switch the top-level view.
    ///
    /// The admin dashboard is reachable only with an admin session; any
    /// other attempt is silently ignored - no redirect, no error.
    pub fn navigate(&mut self, view: View) {
        if view == View::AdminDashboard
            && !self.session().is_some_and(|u| u.role.is_admin())
        {
            tracing::debug!("Ignoring admin dashboard navigation without admin session");
            return;
        }
        self.view.navigate(view);
    }

    /// Open a modal.
    pub fn open_modal(&mut self, modal: Modal) {
        self.view.open(modal);
    }

    /// Close a modal.
    pub fn close_modal(&mut self, modal: Modal) {
        self.view.close(modal);
    }

    /// Toggle the cart panel.
    pub fn toggle_cart(&mut self) {
        self.view.toggle_cart();
    }

    /// Proceed to checkout: hides the cart panel and opens the checkout
    /// modal.
    pub fn open_checkout(&mut self) {
        self.view.hide_cart();
        self.view.open(Modal::Checkout);
    }

    /// Confirm the order. Always succeeds (payment is simulated): the
    /// ledger is cleared, the checkout modal closes, and a receipt is
    /// returned.
    pub fn confirm_order(&mut self, payment_method: &str) -> OrderConfirmation {
        let confirmation = OrderConfirmation {
            payment_method: payment_method.to_owned(),
            total: self.cart.total(),
            placed_at: Utc::now(),
        };

        tracing::info!(payment_method, total = %confirmation.total, "Order confirmed");
        self.cart.clear(&self.store);
        self.view.close(Modal::Checkout);

        confirmation
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::auth::{ADMIN_EMAIL, ADMIN_PASSWORD};

    fn state() -> AppState {
        AppState::new(Store::in_memory())
    }

    #[test]
    fn test_displayed_products_follow_filter() {
        let mut app = state();
        assert_eq!(app.displayed_products().len(), app.catalog().len());

        app.search("tent");
        assert_eq!(app.displayed_products().len(), 1);

        // Changing the selector clears the search term.
        app.select_filter(FilterSelection::NewArrivals);
        assert_eq!(app.filter().search_term(), "");
        assert_eq!(app.displayed_products().len(), 5);
    }

    #[test]
    fn test_add_to_cart_unknown_product() {
        let mut app = state();
        let err = app.add_to_cart(&ProductId::new("999")).unwrap_err();
        assert!(matches!(err, AppError::UnknownProduct(_)));
        assert_eq!(app.item_count(), 0);
    }

    #[test]
    fn test_cart_flow_through_state() {
        let mut app = state();
        let id = ProductId::new("1");
        app.add_to_cart(&id).unwrap();
        app.add_to_cart(&id).unwrap();
        assert_eq!(app.item_count(), 2);

        app.set_quantity(&id, 5);
        assert_eq!(app.item_count(), 5);

        app.remove_from_cart(&id);
        assert_eq!(app.item_count(), 0);
    }

    #[test]
    fn test_admin_login_navigates_to_dashboard() {
        let mut app = state();
        app.open_modal(Modal::Login);

        let user = app.login(ADMIN_EMAIL, ADMIN_PASSWORD).unwrap();
        assert!(user.role.is_admin());
        assert_eq!(app.view().current_view(), View::AdminDashboard);
        assert!(!app.view().is_open(Modal::Login));
    }

    #[test]
    fn test_customer_login_stays_on_shop() {
        let mut app = state();
        app.signup("jane@example.com", "pw").unwrap();
        app.logout();

        app.open_modal(Modal::Login);
        app.login("jane@example.com", "pw").unwrap();
        assert_eq!(app.view().current_view(), View::Shop);
        assert!(!app.view().is_open(Modal::Login));
    }

    #[test]
    fn test_failed_login_keeps_view_and_session() {
        let mut app = state();
        app.open_modal(Modal::Login);

        assert!(app.login(ADMIN_EMAIL, "wrong").is_err());
        assert!(app.session().is_none());
        assert!(app.view().is_open(Modal::Login));
        assert_eq!(app.view().current_view(), View::Shop);
    }

    #[test]
    fn test_navigate_to_dashboard_requires_admin() {
        let mut app = state();

        // Anonymous: ignored.
        app.navigate(View::AdminDashboard);
        assert_eq!(app.view().current_view(), View::Shop);

        // Customer: still ignored.
        app.signup("jane@example.com", "pw").unwrap();
        app.navigate(View::AdminDashboard);
        assert_eq!(app.view().current_view(), View::Shop);

        // Admin: allowed.
        app.logout();
        app.login(ADMIN_EMAIL, ADMIN_PASSWORD).unwrap();
        app.navigate(View::Shop);
        app.navigate(View::AdminDashboard);
        assert_eq!(app.view().current_view(), View::AdminDashboard);
    }

    #[test]
    fn test_logout_returns_to_shop() {
        let mut app = state();
        app.login(ADMIN_EMAIL, ADMIN_PASSWORD).unwrap();
        assert_eq!(app.view().current_view(), View::AdminDashboard);

        app.logout();
        assert!(app.session().is_none());
        assert_eq!(app.view().current_view(), View::Shop);
    }

    #[test]
    fn test_signup_closes_modal_and_sets_session() {
        let mut app = state();
        app.open_modal(Modal::Signup);
        app.signup("jane@example.com", "pw").unwrap();

        assert!(!app.view().is_open(Modal::Signup));
        assert_eq!(app.session().unwrap().email.as_str(), "jane@example.com");
    }

    #[test]
    fn test_open_checkout_hides_cart_panel() {
        let mut app = state();
        app.toggle_cart();
        assert!(app.view().cart_visible());

        app.open_checkout();
        assert!(!app.view().cart_visible());
        assert!(app.view().is_open(Modal::Checkout));
    }

    #[test]
    fn test_confirm_order_clears_cart_and_closes_modal() {
        let mut app = state();
        app.add_to_cart(&ProductId::new("1")).unwrap();
        app.open_checkout();

        let confirmation = app.confirm_order("Credit Card");
        assert_eq!(app.item_count(), 0);
        assert!(!app.view().is_open(Modal::Checkout));
        assert!(confirmation.total > Decimal::ZERO);
        assert!(confirmation.message().contains("Credit Card"));
    }

    #[test]
    fn test_customer_accounts_excludes_admin() {
        let mut app = state();
        app.signup("jane@example.com", "pw").unwrap();
        let accounts = app.customer_accounts();
        assert_eq!(accounts.len(), 1);
        assert_eq!(accounts[0].email.as_str(), "jane@example.com");
    }
}
