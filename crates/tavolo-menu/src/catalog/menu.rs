//! The categorized menu and its source seam.

use crate::catalog::{MenuCategory, MenuItem};
use crate::error::OrderingError;
use crate::ids::ItemId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// One section of the menu: a category and its items, in display order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MenuSection {
    pub category: MenuCategory,
    pub items: Vec<MenuItem>,
}

/// The full menu for a session.
///
/// Sections keep the order their source supplied them in; the menu is read
/// once at startup and never changes afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Menu {
    sections: Vec<MenuSection>,
}

impl Menu {
    /// Create a menu from ordered sections.
    pub fn new(sections: Vec<MenuSection>) -> Self {
        Self { sections }
    }

    /// All sections in display order.
    pub fn sections(&self) -> &[MenuSection] {
        &self.sections
    }

    /// Items in a given category, if the menu has that section.
    pub fn items_in(&self, category: MenuCategory) -> Option<&[MenuItem]> {
        self.sections
            .iter()
            .find(|s| s.category == category)
            .map(|s| s.items.as_slice())
    }

    /// Look up an item anywhere on the menu.
    pub fn find_item(&self, id: ItemId) -> Option<&MenuItem> {
        self.sections
            .iter()
            .flat_map(|s| s.items.iter())
            .find(|i| i.id == id)
    }

    /// Total number of items across all sections.
    pub fn item_count(&self) -> usize {
        self.sections.iter().map(|s| s.items.len()).sum()
    }
}

/// Source of the menu catalog.
///
/// The interface keeps the cart and session flow independent of where the
/// menu comes from; a backend catalog service slots in behind it.
pub trait MenuSource {
    fn menu(&self) -> Result<Menu, OrderingError>;
}

/// The built-in house menu.
#[derive(Debug, Clone, Copy, Default)]
pub struct HouseMenu;

impl MenuSource for HouseMenu {
    fn menu(&self) -> Result<Menu, OrderingError> {
        let usd = |units| Money::from_units(units, Currency::USD);
        let item = |id, name, price, description, image, popular| {
            MenuItem::new(ItemId::new(id), name, price, description, image, popular)
        };

        Ok(Menu::new(vec![
            MenuSection {
                category: MenuCategory::Appetizers,
                items: vec![
                    item(
                        1,
                        "Truffle Arancini",
                        usd(14),
                        "Crispy risotto balls with truffle oil & parmesan",
                        "🍚",
                        true,
                    ),
                    item(
                        2,
                        "Burrata Caprese",
                        usd(16),
                        "Fresh burrata, heirloom tomatoes, basil oil",
                        "🧀",
                        false,
                    ),
                    item(
                        3,
                        "Crispy Calamari",
                        usd(13),
                        "Golden fried squid with spicy marinara",
                        "🦑",
                        true,
                    ),
                ],
            },
            MenuSection {
                category: MenuCategory::Mains,
                items: vec![
                    item(
                        4,
                        "Wagyu Ribeye",
                        usd(48),
                        "12oz premium cut, herb butter, seasonal vegetables",
                        "🥩",
                        true,
                    ),
                    item(
                        5,
                        "Lobster Ravioli",
                        usd(28),
                        "Handmade pasta, lobster filling, saffron cream",
                        "🦞",
                        false,
                    ),
                    item(
                        6,
                        "Duck Confit",
                        usd(32),
                        "Slow-cooked duck leg, cherry gastrique",
                        "🦆",
                        true,
                    ),
                ],
            },
            MenuSection {
                category: MenuCategory::Desserts,
                items: vec![
                    item(
                        7,
                        "Tiramisu",
                        usd(12),
                        "Classic Italian dessert, mascarpone, espresso",
                        "🍰",
                        true,
                    ),
                    item(
                        8,
                        "Chocolate Lava Cake",
                        usd(14),
                        "Warm chocolate cake, vanilla bean ice cream",
                        "🍫",
                        false,
                    ),
                ],
            },
            MenuSection {
                category: MenuCategory::Beverages,
                items: vec![
                    item(9, "Craft Beer", usd(8), "Local IPA, citrus notes", "🍺", true),
                    item(
                        10,
                        "House Wine",
                        usd(12),
                        "Cabernet Sauvignon, glass",
                        "🍷",
                        false,
                    ),
                    item(
                        11,
                        "Artisan Coffee",
                        usd(5),
                        "Single origin, freshly roasted",
                        "☕",
                        true,
                    ),
                ],
            },
        ]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_house_menu_shape() {
        let menu = HouseMenu.menu().unwrap();
        assert_eq!(menu.sections().len(), 4);
        assert_eq!(menu.item_count(), 11);

        let categories: Vec<_> = menu.sections().iter().map(|s| s.category).collect();
        assert_eq!(categories, MenuCategory::ALL.to_vec());
    }

    #[test]
    fn test_house_menu_ids_unique() {
        let menu = HouseMenu.menu().unwrap();
        let mut ids: Vec<_> = menu
            .sections()
            .iter()
            .flat_map(|s| s.items.iter().map(|i| i.id))
            .collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 11);
    }

    #[test]
    fn test_find_item() {
        let menu = HouseMenu.menu().unwrap();
        let ribeye = menu.find_item(ItemId::new(4)).unwrap();
        assert_eq!(ribeye.name, "Wagyu Ribeye");
        assert_eq!(ribeye.price.amount_cents, 4800);
        assert!(menu.find_item(ItemId::new(99)).is_none());
    }

    #[test]
    fn test_items_in_category() {
        let menu = HouseMenu.menu().unwrap();
        assert_eq!(menu.items_in(MenuCategory::Desserts).unwrap().len(), 2);
    }
}
