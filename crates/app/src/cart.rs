//! Cart ledger.
//!
//! A mapping from product id to quantity (with denormalized product
//! fields), persisted in full after every mutation. Derived values are
//! the total item count and the tax-inclusive monetary total.

use rust_decimal::Decimal;

use auramart_core::ProductId;

use crate::models::{CartItem, Product};
use crate::storage::{Store, keys};

/// Flat 8% sales tax applied to the cart total. Not configurable.
fn sales_tax_multiplier() -> Decimal {
    Decimal::new(108, 2)
}

/// The shopping cart.
///
/// Invariant: at most one entry per product id, each with quantity >= 1.
/// Every mutation re-saves the full item list under
/// [`keys::CART`].
#[derive(Debug, Default)]
pub struct CartLedger {
    items: Vec<CartItem>,
}

impl CartLedger {
    /// Load the persisted cart, falling back to an empty ledger for a
    /// missing or corrupted record.
    #[must_use]
    pub fn load(store: &Store) -> Self {
        Self {
            items: store.load(keys::CART, Vec::new()),
        }
    }

    /// The current entries, in insertion order.
    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Whether the ledger has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Add one unit of `product`: increments an existing entry, else
    /// inserts a new entry with quantity 1.
    pub fn add(&mut self, product: &Product, store: &Store) {
        if let Some(item) = self.items.iter_mut().find(|i| i.product.id == product.id) {
            item.quantity += 1;
        } else {
            self.items.push(CartItem::single(product.clone()));
        }
        self.persist(store);
    }

    /// Remove the entry for `product_id`. Absent ids are a no-op.
    pub fn remove(&mut self, product_id: &ProductId, store: &Store) {
        let before = self.items.len();
        self.items.retain(|i| i.product.id != *product_id);
        if self.items.len() != before {
            self.persist(store);
        }
    }

    /// Overwrite the quantity of an existing entry.
    ///
    /// Quantities below 1 are silently ignored - a deliberate floor, not
    /// an error. Unknown ids are also a no-op; removal is explicit via
    /// [`Self::remove`].
    pub fn set_quantity(&mut self, product_id: &ProductId, quantity: u32, store: &Store) {
        if quantity < 1 {
            return;
        }
        if let Some(item) = self.items.iter_mut().find(|i| i.product.id == *product_id) {
            item.quantity = quantity;
            self.persist(store);
        }
    }

    /// Empty the ledger. Invoked on order confirmation.
    pub fn clear(&mut self, store: &Store) {
        self.items.clear();
        self.persist(store);
    }

    /// Total number of units across all entries.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Tax-inclusive cart total: sum of price x quantity, times 1.08.
    #[must_use]
    pub fn total(&self) -> Decimal {
        let subtotal: Decimal = self.items.iter().map(CartItem::line_total).sum();
        subtotal * sales_tax_multiplier()
    }

    fn persist(&self, store: &Store) {
        store.save(keys::CART, &self.items);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use auramart_core::{Price, ProductCategory};

    fn product(id: &str, cents: u32) -> Product {
        Product {
            id: ProductId::new(id),
            name: format!("Product {id}"),
            price: Price::from_cents(cents),
            description: "test".to_owned(),
            image_url: String::new(),
            category: ProductCategory::Electronics,
        }
    }

    #[test]
    fn test_add_same_product_twice_increments_quantity() {
        let store = Store::in_memory();
        let mut cart = CartLedger::load(&store);

        cart.add(&product("1", 10_00), &store);
        cart.add(&product("1", 10_00), &store);

        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.items()[0].quantity, 2);
        assert_eq!(cart.item_count(), 2);
    }

    #[test]
    fn test_item_count_sums_quantities_not_entries() {
        let store = Store::in_memory();
        let mut cart = CartLedger::load(&store);

        cart.add(&product("1", 10_00), &store);
        cart.add(&product("2", 20_00), &store);
        cart.set_quantity(&ProductId::new("2"), 4, &store);

        assert_eq!(cart.items().len(), 2);
        assert_eq!(cart.item_count(), 5);
    }

    #[test]
    fn test_set_quantity_below_floor_is_noop() {
        let store = Store::in_memory();
        let mut cart = CartLedger::load(&store);
        cart.add(&product("1", 10_00), &store);

        cart.set_quantity(&ProductId::new("1"), 0, &store);
        assert_eq!(cart.items()[0].quantity, 1);

        cart.set_quantity(&ProductId::new("1"), 3, &store);
        assert_eq!(cart.items()[0].quantity, 3);
    }

    #[test]
    fn test_set_quantity_unknown_id_is_noop() {
        let store = Store::in_memory();
        let mut cart = CartLedger::load(&store);
        cart.set_quantity(&ProductId::new("404"), 3, &store);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let store = Store::in_memory();
        let mut cart = CartLedger::load(&store);
        cart.add(&product("1", 10_00), &store);

        cart.remove(&ProductId::new("404"), &store);
        assert_eq!(cart.items().len(), 1);

        cart.remove(&ProductId::new("1"), &store);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_total_applies_fixed_eight_percent_tax() {
        let store = Store::in_memory();
        let mut cart = CartLedger::load(&store);

        // 100.00 x 2 x 1.08 = 216.00, exactly.
        cart.add(&product("1", 100_00), &store);
        cart.set_quantity(&ProductId::new("1"), 2, &store);

        assert_eq!(cart.total(), Decimal::new(216_00, 2));
    }

    #[test]
    fn test_total_of_empty_cart_is_zero() {
        let store = Store::in_memory();
        let cart = CartLedger::load(&store);
        assert_eq!(cart.total(), Decimal::ZERO);
    }

    #[test]
    fn test_mutations_persist_and_reload() {
        let store = Store::in_memory();
        let mut cart = CartLedger::load(&store);
        cart.add(&product("1", 10_00), &store);
        cart.add(&product("2", 20_00), &store);

        let reloaded = CartLedger::load(&store);
        assert_eq!(reloaded.items(), cart.items());
    }

    #[test]
    fn test_clear_empties_ledger_and_persisted_record() {
        let store = Store::in_memory();
        let mut cart = CartLedger::load(&store);
        cart.add(&product("1", 10_00), &store);

        cart.clear(&store);
        assert_eq!(cart.item_count(), 0);

        let reloaded = CartLedger::load(&store);
        assert!(reloaded.is_empty());
    }

    #[test]
    fn test_load_corrupted_record_yields_empty_cart() {
        use crate::storage::{MemoryBackend, StorageBackend};

        let backend = MemoryBackend::new();
        backend.write(keys::CART, "not a cart").unwrap();
        let store = Store::new(Box::new(backend));

        let cart = CartLedger::load(&store);
        assert!(cart.is_empty());
    }
}
