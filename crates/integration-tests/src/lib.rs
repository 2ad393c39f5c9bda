//! Integration tests for AuraMart.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p auramart-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `storefront_flow` - full browse/cart/checkout flows over `AppState`
//! - `auth_directory` - directory invariants and session lifecycle
//! - `persistence` - file-backed storage across `AppState` reloads
//!
//! Each test builds its own [`auramart_app::state::AppState`] over either
//! an in-memory store or a file store in a fresh temp directory, so tests
//! are independent and need no external services.
