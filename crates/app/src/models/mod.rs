//! Domain models persisted by the storefront.

pub mod product;
pub mod user;

pub use product::{CartItem, Product};
pub use user::User;
