//! Menu categories.

use serde::{Deserialize, Serialize};

/// Sections of the menu, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MenuCategory {
    /// Starters and small plates.
    Appetizers,
    /// Main courses.
    Mains,
    /// Desserts.
    Desserts,
    /// Drinks.
    Beverages,
}

impl MenuCategory {
    /// All categories in the order they appear on the menu.
    pub const ALL: [MenuCategory; 4] = [
        MenuCategory::Appetizers,
        MenuCategory::Mains,
        MenuCategory::Desserts,
        MenuCategory::Beverages,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MenuCategory::Appetizers => "appetizers",
            MenuCategory::Mains => "mains",
            MenuCategory::Desserts => "desserts",
            MenuCategory::Beverages => "beverages",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            MenuCategory::Appetizers => "Appetizers",
            MenuCategory::Mains => "Main Courses",
            MenuCategory::Desserts => "Desserts",
            MenuCategory::Beverages => "Beverages",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "appetizers" => Some(MenuCategory::Appetizers),
            "mains" => Some(MenuCategory::Mains),
            "desserts" => Some(MenuCategory::Desserts),
            "beverages" => Some(MenuCategory::Beverages),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_order() {
        assert_eq!(MenuCategory::ALL[0], MenuCategory::Appetizers);
        assert_eq!(MenuCategory::ALL[3], MenuCategory::Beverages);
    }

    #[test]
    fn test_category_round_trip() {
        for category in MenuCategory::ALL {
            assert_eq!(MenuCategory::from_str(category.as_str()), Some(category));
        }
        assert_eq!(MenuCategory::from_str("sides"), None);
    }

    #[test]
    fn test_display_name() {
        assert_eq!(MenuCategory::Mains.display_name(), "Main Courses");
    }
}
