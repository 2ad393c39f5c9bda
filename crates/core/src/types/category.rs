//! Product category enumeration.

use core::fmt;

use serde::{Deserialize, Serialize};

/// The fixed set of product categories.
///
/// Serialized names match the catalog's display strings (`"Home Goods"`,
/// not `"HOME_GOODS"`), which is also the persisted wire form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProductCategory {
    Electronics,
    Apparel,
    #[serde(rename = "Home Goods")]
    HomeGoods,
    Books,
    Sports,
    Beauty,
    Outdoors,
}

impl ProductCategory {
    /// Every category, in display order.
    pub const ALL: [Self; 7] = [
        Self::Electronics,
        Self::Apparel,
        Self::HomeGoods,
        Self::Books,
        Self::Sports,
        Self::Beauty,
        Self::Outdoors,
    ];

    /// Display name of the category.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Electronics => "Electronics",
            Self::Apparel => "Apparel",
            Self::HomeGoods => "Home Goods",
            Self::Books => "Books",
            Self::Sports => "Sports",
            Self::Beauty => "Beauty",
            Self::Outdoors => "Outdoors",
        }
    }
}

impl fmt::Display for ProductCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown category name.
#[derive(thiserror::Error, Debug, Clone)]
#[error("unknown category: {0}. Valid categories: Electronics, Apparel, Home Goods, Books, Sports, Beauty, Outdoors")]
pub struct UnknownCategory(pub String);

impl std::str::FromStr for ProductCategory {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|c| c.name().eq_ignore_ascii_case(s))
            .copied()
            .ok_or_else(|| UnknownCategory(s.to_owned()))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_serde_uses_display_names() {
        let json = serde_json::to_string(&ProductCategory::HomeGoods).unwrap();
        assert_eq!(json, "\"Home Goods\"");

        let parsed: ProductCategory = serde_json::from_str("\"Home Goods\"").unwrap();
        assert_eq!(parsed, ProductCategory::HomeGoods);
    }

    #[test]
    fn test_from_str_case_insensitive() {
        assert_eq!(
            "home goods".parse::<ProductCategory>().unwrap(),
            ProductCategory::HomeGoods
        );
        assert_eq!(
            "ELECTRONICS".parse::<ProductCategory>().unwrap(),
            ProductCategory::Electronics
        );
        assert!("Groceries".parse::<ProductCategory>().is_err());
    }

    #[test]
    fn test_all_covers_every_variant() {
        assert_eq!(ProductCategory::ALL.len(), 7);
    }
}
