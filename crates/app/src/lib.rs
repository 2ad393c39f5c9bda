//! AuraMart application layer - storefront state and logic.
//!
//! This crate holds everything between the domain types
//! ([`auramart_core`]) and a front end: the persistent store adapter, the
//! catalog filter, the cart ledger, the auth directory, and the view
//! coordinator. All state lives in an explicit [`state::AppState`] owned
//! by the caller - there are no globals.
//!
//! # Architecture
//!
//! - [`storage`] - JSON key/value persistence with a pluggable backend
//! - [`catalog`] - fixed product catalog and category/search filtering
//! - [`cart`] - cart ledger with derived item count and taxed total
//! - [`auth`] - user directory, session, login/signup/logout
//! - [`view`] - view and modal visibility state
//! - [`state`] - the coordinating state object that routes user actions
//!
//! Everything is synchronous and single-actor: each operation runs to
//! completion on the calling thread and mirrors its state to storage
//! before returning. Storage failures are logged and swallowed; they are
//! never fatal.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod auth;
pub mod cart;
pub mod catalog;
pub mod config;
pub mod error;
pub mod models;
pub mod state;
pub mod storage;
pub mod view;

pub use error::AppError;
pub use state::AppState;
