//! Menu item type.

use crate::ids::ItemId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A dish or drink on the menu.
///
/// Items are defined once when the menu is loaded and never mutated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MenuItem {
    /// Unique item identifier.
    pub id: ItemId,
    /// Display name.
    pub name: String,
    /// Price per unit.
    pub price: Money,
    /// One-line description.
    pub description: String,
    /// Emoji token shown in place of a photo.
    pub image: String,
    /// Whether the item gets a "Popular" badge.
    pub popular: bool,
}

impl MenuItem {
    /// Create a new menu item.
    pub fn new(
        id: ItemId,
        name: impl Into<String>,
        price: Money,
        description: impl Into<String>,
        image: impl Into<String>,
        popular: bool,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            description: description.into(),
            image: image.into(),
            popular,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;

    #[test]
    fn test_item_creation() {
        let item = MenuItem::new(
            ItemId::new(1),
            "Truffle Arancini",
            Money::from_units(14, Currency::USD),
            "Crispy risotto balls with truffle oil & parmesan",
            "\u{1f35a}",
            true,
        );
        assert_eq!(item.id, ItemId::new(1));
        assert_eq!(item.price.amount_cents, 1400);
        assert!(item.popular);
    }
}
