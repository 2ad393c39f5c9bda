//! Product catalog and filtering.
//!
//! The catalog is a fixed seed list, never mutated at runtime. Filtering
//! is a pure function over it: a selection (all / new arrivals / one
//! category) combined with a free-text search term produces the displayed
//! subset, in stable catalog order.

use std::cmp::Reverse;

use auramart_core::{Price, ProductCategory, ProductId};

use crate::models::Product;

/// How many products the "new arrivals" view shows.
pub const NEW_ARRIVALS_COUNT: usize = 5;

/// The active category selector.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FilterSelection {
    /// Every product.
    #[default]
    All,
    /// The most recent [`NEW_ARRIVALS_COUNT`] products by id.
    NewArrivals,
    /// Products of a single category.
    Category(ProductCategory),
}

/// Apply a selection and search term to the catalog.
///
/// New arrivals sorts a copy by numeric id descending and truncates; a
/// category keeps matching products in catalog order; `All` keeps
/// everything. A non-empty search term then retains items whose name or
/// description contains the lowercased term. Deterministic and
/// idempotent for identical inputs.
#[must_use]
pub fn apply(catalog: &[Product], selection: &FilterSelection, search_term: &str) -> Vec<Product> {
    let mut filtered: Vec<Product> = match selection {
        FilterSelection::All => catalog.to_vec(),
        FilterSelection::NewArrivals => {
            let mut recent = catalog.to_vec();
            recent.sort_by_key(|p| Reverse(p.id.recency()));
            recent.truncate(NEW_ARRIVALS_COUNT);
            recent
        }
        FilterSelection::Category(category) => catalog
            .iter()
            .filter(|p| p.category == *category)
            .cloned()
            .collect(),
    };

    if !search_term.is_empty() {
        let term = search_term.to_lowercase();
        filtered.retain(|p| {
            p.name.to_lowercase().contains(&term) || p.description.to_lowercase().contains(&term)
        });
    }

    filtered
}

/// The current filter choice plus search term.
#[derive(Debug, Clone, Default)]
pub struct FilterState {
    selection: FilterSelection,
    search_term: String,
}

impl FilterState {
    /// The active selection.
    #[must_use]
    pub const fn selection(&self) -> &FilterSelection {
        &self.selection
    }

    /// The active search term.
    #[must_use]
    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// Change the selection. Switching selector clears the search term.
    pub fn select(&mut self, selection: FilterSelection) {
        self.selection = selection;
        self.search_term.clear();
    }

    /// Change the search term, keeping the selection.
    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    /// The products currently displayed for this filter state.
    #[must_use]
    pub fn displayed(&self, catalog: &[Product]) -> Vec<Product> {
        apply(catalog, &self.selection, &self.search_term)
    }
}

fn product(
    id: &str,
    name: &str,
    cents: u32,
    description: &str,
    category: ProductCategory,
) -> Product {
    Product {
        id: ProductId::new(id),
        name: name.to_owned(),
        price: Price::from_cents(cents),
        description: description.to_owned(),
        image_url: format!("https://picsum.photos/seed/aura{id}/400/300"),
        category,
    }
}

/// The fixed seed catalog.
///
/// Ids are assigned in insertion order, so the highest ids are the newest
/// arrivals.
#[must_use]
pub fn seed() -> Vec<Product> {
    use ProductCategory::{Apparel, Beauty, Books, Electronics, HomeGoods, Outdoors, Sports};

    vec![
        product(
            "1",
            "Aura Wireless Headphones",
            129_99,
            "Over-ear wireless headphones with active noise cancellation and 30-hour battery life.",
            Electronics,
        ),
        product(
            "2",
            "Classic Linen Shirt",
            49_50,
            "Breathable linen shirt in a relaxed fit, available in natural tones.",
            Apparel,
        ),
        product(
            "3",
            "Handmade Ceramic Vase",
            38_00,
            "Hand-thrown stoneware vase with a matte glaze, perfect for dried arrangements.",
            HomeGoods,
        ),
        product(
            "4",
            "The Silent Orbit",
            18_99,
            "A slow-burn science fiction novel about a deep-space listening post.",
            Books,
        ),
        product(
            "5",
            "Eco Yoga Mat",
            42_00,
            "Non-slip natural rubber yoga mat with alignment guides.",
            Sports,
        ),
        product(
            "6",
            "Vitamin C Glow Serum",
            27_50,
            "Brightening facial serum with 15% vitamin C and hyaluronic acid.",
            Beauty,
        ),
        product(
            "7",
            "Ridgeline Trail Backpack",
            89_00,
            "35L hiking backpack with rain cover and ventilated back panel.",
            Outdoors,
        ),
        product(
            "8",
            "Pulse Fitness Smartwatch",
            199_00,
            "Fitness smartwatch with heart-rate tracking, GPS, and a week of battery.",
            Electronics,
        ),
        product(
            "9",
            "Vintage Denim Jacket",
            74_95,
            "Stonewashed denim jacket with a classic trucker cut.",
            Apparel,
        ),
        product(
            "10",
            "Walnut Cutting Board",
            56_00,
            "End-grain walnut cutting board with juice groove, oiled and ready to use.",
            HomeGoods,
        ),
        product(
            "11",
            "Weeknight Kitchen Cookbook",
            24_00,
            "Ninety unfussy recipes built around pantry staples.",
            Books,
        ),
        product(
            "12",
            "Carbon Pro Tennis Racket",
            149_00,
            "Lightweight carbon-fiber racket strung for control and spin.",
            Sports,
        ),
        product(
            "13",
            "Hydrating Rose Face Mist",
            16_00,
            "Rosewater facial mist for an instant midday refresh.",
            Beauty,
        ),
        product(
            "14",
            "Summit Two-Person Tent",
            189_00,
            "Three-season backpacking tent that packs down to two liters.",
            Outdoors,
        ),
    ]
}
