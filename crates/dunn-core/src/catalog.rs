//! # Delivery Catalog
//!
//! The three immutable tables the engine works from:
//!
//! ```text
//! ┌───────────────────────┐    ┌───────────────────────┐    ┌─────────────────────────────┐
//! │  Menu                 │    │  Prices               │    │  Locations                  │
//! │  category → [items]   │───►│  item → Money         │    │  name → base minutes        │
//! │  "Lunch" → [Falafel…] │    │  "Falafel Wrap" $8.99 │    │  "Library" → 10             │
//! └───────────────────────┘    └───────────────────────┘    └─────────────────────────────┘
//! ```
//!
//! Every table keeps insertion order so listings and searches come out in
//! the same order the menu was written. The tables are built once and never
//! mutated, which is what makes the engine `Send + Sync` without locks.

use serde::Serialize;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Money;
use crate::types::MenuEntry;
use crate::validation::ValidationResult;

/// A menu category and its item names, in menu order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Category {
    pub name: String,
    pub items: Vec<String>,
}

/// A delivery destination and its base transit time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Location {
    pub name: String,
    pub base_minutes: u32,
}

/// Immutable menu, price, and location tables.
#[derive(Debug, Clone, Serialize)]
pub struct DeliveryCatalog {
    menu: Vec<Category>,
    prices: Vec<MenuEntry>,
    locations: Vec<Location>,
}

impl DeliveryCatalog {
    /// Builds a catalog from explicit tables.
    ///
    /// ## Errors
    /// - `MissingPrice` if a menu item has no price entry
    /// - `Duplicate` if an item, category, or location appears twice
    pub fn new(
        menu: Vec<Category>,
        prices: Vec<MenuEntry>,
        locations: Vec<Location>,
    ) -> CoreResult<Self> {
        let catalog = DeliveryCatalog {
            menu,
            prices,
            locations,
        };
        catalog.validate()?;
        Ok(catalog)
    }

    /// The Dunn campus tables.
    pub fn campus() -> Self {
        fn category(name: &str, items: &[&str]) -> Category {
            Category {
                name: name.to_string(),
                items: items.iter().map(|s| s.to_string()).collect(),
            }
        }
        fn location(name: &str, base_minutes: u32) -> Location {
            Location {
                name: name.to_string(),
                base_minutes,
            }
        }

        let menu = vec![
            category("Energy Drinks", &["Monster", "Rockstar"]),
            category("Coffee Drinks", &["Latte", "Cappuccino"]),
            category("Breakfast", &["Bagel", "Muffin", "Scone"]),
            category("Lunch", &["Falafel Wrap", "Hummus & Pita", "Chicken Wrap"]),
        ];

        let prices = [
            ("Monster", 399),
            ("Rockstar", 399),
            ("Latte", 499),
            ("Cappuccino", 499),
            ("Bagel", 299),
            ("Muffin", 299),
            ("Scone", 299),
            ("Falafel Wrap", 899),
            ("Hummus & Pita", 799),
            ("Chicken Wrap", 899),
        ]
        .into_iter()
        .map(|(item, cents)| MenuEntry::new(item, Money::from_cents(cents)))
        .collect();

        let locations = vec![
            location("Library", 10),
            location("Academic Success Center", 8),
            location("ITEC Computer Lab", 5),
        ];

        DeliveryCatalog {
            menu,
            prices,
            locations,
        }
    }

    /// Checks the table invariants.
    pub fn validate(&self) -> ValidationResult<()> {
        for (i, entry) in self.prices.iter().enumerate() {
            if self.prices[..i].iter().any(|e| e.item == entry.item) {
                return Err(ValidationError::Duplicate {
                    field: "item".to_string(),
                    value: entry.item.clone(),
                });
            }
            if entry.price.is_negative() {
                return Err(ValidationError::OutOfRange {
                    field: format!("price of {}", entry.item),
                    min: 0,
                    max: i64::MAX,
                });
            }
        }

        for (i, category) in self.menu.iter().enumerate() {
            if self.menu[..i].iter().any(|c| c.name == category.name) {
                return Err(ValidationError::Duplicate {
                    field: "category".to_string(),
                    value: category.name.clone(),
                });
            }
            for item in &category.items {
                if self.price_of(item).is_none() {
                    return Err(ValidationError::MissingPrice {
                        category: category.name.clone(),
                        item: item.clone(),
                    });
                }
            }
        }

        for (i, location) in self.locations.iter().enumerate() {
            if self.locations[..i].iter().any(|l| l.name == location.name) {
                return Err(ValidationError::Duplicate {
                    field: "location".to_string(),
                    value: location.name.clone(),
                });
            }
        }

        Ok(())
    }

    // =========================================================================
    // Lookups
    // =========================================================================

    /// Unit price of an item, if it is on the price table.
    pub fn price_of(&self, item: &str) -> Option<Money> {
        self.prices
            .iter()
            .find(|entry| entry.item == item)
            .map(|entry| entry.price)
    }

    /// Unit price of an item, or `UnknownItem`.
    pub fn require_price(&self, item: &str) -> CoreResult<Money> {
        self.price_of(item)
            .ok_or_else(|| CoreError::UnknownItem(item.to_string()))
    }

    /// Base transit minutes for a location, if it exists.
    pub fn base_minutes(&self, location: &str) -> Option<u32> {
        self.locations
            .iter()
            .find(|l| l.name == location)
            .map(|l| l.base_minutes)
    }

    /// Items of a category, if it exists.
    pub fn category(&self, name: &str) -> Option<&Category> {
        self.menu.iter().find(|c| c.name == name)
    }

    pub fn categories(&self) -> &[Category] {
        &self.menu
    }

    /// The price table, in table order.
    pub fn prices(&self) -> &[MenuEntry] {
        &self.prices
    }

    pub fn locations(&self) -> &[Location] {
        &self.locations
    }
}

impl Default for DeliveryCatalog {
    fn default() -> Self {
        DeliveryCatalog::campus()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
