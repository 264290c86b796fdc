//! # Domain Types
//!
//! Small value types passed between the console and the engine.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │     Order       │   │   MenuSection   │   │     Rating      │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  items          │   │  category       │   │  1..=5 (u8)     │       │
//! │  │  location       │   │  entries ───────┼──►│                 │       │
//! │  │  current_hour   │   └─────────────────┘   └─────────────────┘       │
//! │  │  student / prio │   ┌─────────────────┐                             │
//! │  └─────────────────┘   │   MenuEntry     │                             │
//! │                        │  item, price    │                             │
//! │                        └─────────────────┘                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! None of these are stored by the engine. An `Order` lives only as long as
//! the console session that built it.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::money::Money;

// =============================================================================
// Menu
// =============================================================================

/// One priced line of the menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuEntry {
    /// Item name as typed at the prompt.
    pub item: String,

    /// Unit price.
    pub price: Money,
}

impl MenuEntry {
    pub fn new(item: impl Into<String>, price: Money) -> Self {
        MenuEntry {
            item: item.into(),
            price,
        }
    }
}

/// Renders the menu line: `Latte: $4.99`.
impl fmt::Display for MenuEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.item, self.price)
    }
}

/// A menu category with its priced items, in menu order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuSection {
    pub category: String,
    pub entries: Vec<MenuEntry>,
}

/// Renders the section the way it appears on the console:
///
/// ```text
/// === Coffee Drinks ===
/// Latte: $4.99
/// Cappuccino: $4.99
/// ```
impl fmt::Display for MenuSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== {} ===", self.category)?;
        for entry in &self.entries {
            writeln!(f, "{}", entry)?;
        }
        Ok(())
    }
}

// =============================================================================
// Order
// =============================================================================

/// A customer's order as collected by the console.
///
/// Items keep their entry order and may repeat; every occurrence is priced
/// on its own.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    /// Item names, duplicates allowed.
    pub items: Vec<String>,

    /// Delivery location name.
    pub location: String,

    /// Hour of day the order is placed (0-23).
    pub current_hour: u8,

    /// Whether the customer showed a student ID.
    pub has_student_id: bool,

    /// Whether the customer paid for priority delivery.
    pub priority_delivery: bool,
}

impl Order {
    /// Creates an order for a location with no items and no extras.
    pub fn new(location: impl Into<String>, current_hour: u8) -> Self {
        Order {
            location: location.into(),
            current_hour,
            ..Default::default()
        }
    }

    /// Appends one item.
    pub fn add_item(&mut self, item: impl Into<String>) {
        self.items.push(item.into());
    }
}

// =============================================================================
// Rating
// =============================================================================

/// A delivery rating, guaranteed to be within 1-5.
///
/// Only constructed through [`crate::validation::validate_rating`]. It is
/// serialize-only so no input path can skip the 1-5 check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct Rating(u8);

impl Rating {
    /// Crate-private: callers go through validation.
    pub(crate) const fn new_unchecked(stars: u8) -> Self {
        Rating(stars)
    }

    /// Returns the number of stars.
    #[inline]
    pub const fn stars(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/5", self.0)
    }
}

/// Confirmation returned for an accepted rating.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RatingAck {
    pub rating: Rating,
    pub message: String,
}

impl fmt::Display for RatingAck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_entry_display() {
        let entry = MenuEntry::new("Hummus & Pita", Money::from_cents(799));
        assert_eq!(entry.to_string(), "Hummus & Pita: $7.99");
    }

    #[test]
    fn test_menu_section_display() {
        let section = MenuSection {
            category: "Coffee Drinks".to_string(),
            entries: vec![
                MenuEntry::new("Latte", Money::from_cents(499)),
                MenuEntry::new("Cappuccino", Money::from_cents(499)),
            ],
        };
        assert_eq!(
            section.to_string(),
            "=== Coffee Drinks ===\nLatte: $4.99\nCappuccino: $4.99\n"
        );
    }

    #[test]
    fn test_order_keeps_duplicates_in_order() {
        let mut order = Order::new("Library", 12);
        order.add_item("Bagel");
        order.add_item("Latte");
        order.add_item("Bagel");

        assert_eq!(order.items, vec!["Bagel", "Latte", "Bagel"]);
        assert!(!order.has_student_id);
        assert!(!order.priority_delivery);
    }

    #[test]
    fn test_rating_display() {
        assert_eq!(Rating::new_unchecked(4).to_string(), "4/5");
        assert_eq!(Rating::new_unchecked(4).stars(), 4);
    }

    #[test]
    fn test_rating_ack_serializes_stars() {
        let ack = RatingAck {
            rating: Rating::new_unchecked(5),
            message: "thanks".to_string(),
        };
        let json = serde_json::to_value(&ack).unwrap();
        assert_eq!(json["rating"], 5);
        assert_eq!(json["message"], "thanks");
    }
}
