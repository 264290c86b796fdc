//! # Delivery Engine
//!
//! Pricing, delivery estimation, menu search, and rating for one catalog.
//!
//! ## Pricing Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  items ──► sum unit prices ──► subtotal                                 │
//! │                                   │                                     │
//! │                 student ID and subtotal > $10.00?                       │
//! │                                   │ yes: -10% of subtotal               │
//! │                                   ▼                                     │
//! │                          priority delivery?                             │
//! │                                   │ yes: +$2.00                         │
//! │                                   ▼                                     │
//! │                                 total                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The discount is computed from the subtotal only, and the surcharge is
//! never discounted.
//!
//! ## Delivery Estimate
//! ```text
//! base minutes ──► +5 in a peak hour ──► -3 for priority (never below 0)
//! ```
//!
//! Every method is a pure function of its arguments and the catalog.

use tracing::{debug, warn};

use crate::catalog::DeliveryCatalog;
use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::receipt::{Receipt, ReceiptLine};
use crate::types::{MenuEntry, MenuSection, Order, RatingAck};
use crate::validation::{validate_hour, validate_rating};
use crate::{
    PEAK_HOUR_EXTRA_MINUTES, PEAK_HOUR_WINDOWS, PRIORITY_MINUTES_SAVED, PRIORITY_SURCHARGE,
    STUDENT_DISCOUNT_BPS, STUDENT_DISCOUNT_THRESHOLD,
};

/// The delivery catalog together with the pricing and delivery rules.
#[derive(Debug, Clone, Default)]
pub struct DeliveryEngine {
    catalog: DeliveryCatalog,
}

impl DeliveryEngine {
    pub fn new(catalog: DeliveryCatalog) -> Self {
        DeliveryEngine { catalog }
    }

    pub fn catalog(&self) -> &DeliveryCatalog {
        &self.catalog
    }

    // =========================================================================
    // Menu
    // =========================================================================

    /// Lists the menu.
    ///
    /// With a category, returns that single section; an unknown category is
    /// `UnknownCategory`. Without one, returns every section in menu order.
    pub fn list_menu(&self, category: Option<&str>) -> CoreResult<Vec<MenuSection>> {
        debug!(category = ?category, "list_menu");

        match category {
            Some(name) => {
                let category = self.catalog.category(name).ok_or_else(|| {
                    warn!(category = %name, "unknown menu category");
                    CoreError::UnknownCategory(name.to_string())
                })?;
                Ok(vec![self.section(&category.name, &category.items)?])
            }
            None => self
                .catalog
                .categories()
                .iter()
                .map(|c| self.section(&c.name, &c.items))
                .collect(),
        }
    }

    fn section(&self, category: &str, items: &[String]) -> CoreResult<MenuSection> {
        let entries = items
            .iter()
            .map(|item| Ok(MenuEntry::new(item.clone(), self.catalog.require_price(item)?)))
            .collect::<CoreResult<Vec<_>>>()?;

        Ok(MenuSection {
            category: category.to_string(),
            entries,
        })
    }

    /// Items priced at or below `max_price`, in price-table order.
    ///
    /// An empty result is a normal answer, not an error.
    pub fn search_by_price(&self, max_price: Money) -> Vec<MenuEntry> {
        let matches: Vec<MenuEntry> = self
            .catalog
            .prices()
            .iter()
            .filter(|entry| entry.price <= max_price)
            .cloned()
            .collect();

        debug!(max_price = %max_price, matches = matches.len(), "search_by_price");
        matches
    }

    pub fn is_known_item(&self, item: &str) -> bool {
        self.catalog.price_of(item).is_some()
    }

    pub fn is_known_location(&self, location: &str) -> bool {
        self.catalog.base_minutes(location).is_some()
    }

    // =========================================================================
    // Pricing
    // =========================================================================

    /// Sum of raw unit prices, one per item occurrence.
    pub fn subtotal<S: AsRef<str>>(&self, items: &[S]) -> CoreResult<Money> {
        items
            .iter()
            .map(|item| self.catalog.require_price(item.as_ref()))
            .sum()
    }

    /// Prices an order.
    ///
    /// ## Rules (in order)
    /// 1. Sum the unit prices (`UnknownItem` if any item is not priced)
    /// 2. Student ID and subtotal > $10.00: take 10% off the subtotal
    /// 3. Priority delivery: add $2.00
    ///
    /// ## Example
    /// ```rust
    /// use dunn_core::{DeliveryEngine, Money};
    ///
    /// let engine = DeliveryEngine::default();
    /// let items = ["Chicken Wrap", "Falafel Wrap"]; // $17.98
    ///
    /// assert_eq!(engine.price_order(&items, false, false).unwrap(), Money::from_cents(1798));
    /// assert_eq!(engine.price_order(&items, true, false).unwrap(), Money::from_cents(1618));
    /// assert_eq!(engine.price_order(&items, true, true).unwrap(), Money::from_cents(1818));
    /// ```
    pub fn price_order<S: AsRef<str>>(
        &self,
        items: &[S],
        has_student_id: bool,
        priority_delivery: bool,
    ) -> CoreResult<Money> {
        let subtotal = self.subtotal(items)?;
        let mut total = subtotal;

        if has_student_id && subtotal > STUDENT_DISCOUNT_THRESHOLD {
            total = subtotal.apply_percentage_discount(STUDENT_DISCOUNT_BPS);
        }

        if priority_delivery {
            total += PRIORITY_SURCHARGE;
        }

        debug!(
            items = items.len(),
            subtotal = %subtotal,
            total = %total,
            has_student_id,
            priority_delivery,
            "price_order"
        );
        Ok(total)
    }

    // =========================================================================
    // Delivery
    // =========================================================================

    /// Whether an hour falls in one of the peak windows.
    pub fn is_peak_hour(hour: u8) -> bool {
        PEAK_HOUR_WINDOWS
            .iter()
            .any(|&(start, end)| (start..=end).contains(&hour))
    }

    /// Estimates delivery time in minutes.
    ///
    /// ## Errors
    /// - `UnknownLocation` if the location is not in the table
    /// - `Validation(OutOfRange)` if `current_hour` is not 0-23
    pub fn estimate_delivery(
        &self,
        location: &str,
        current_hour: u8,
        priority_delivery: bool,
    ) -> CoreResult<u32> {
        let base = self
            .catalog
            .base_minutes(location)
            .ok_or_else(|| CoreError::UnknownLocation(location.to_string()))?;
        let hour = validate_hour(current_hour)?;

        let mut minutes = base;
        if Self::is_peak_hour(hour) {
            minutes += PEAK_HOUR_EXTRA_MINUTES;
        }
        if priority_delivery {
            minutes = minutes.saturating_sub(PRIORITY_MINUTES_SAVED);
        }

        debug!(location, hour, priority_delivery, minutes, "estimate_delivery");
        Ok(minutes)
    }

    // =========================================================================
    // Receipt
    // =========================================================================

    /// Builds the structured receipt for an order.
    pub fn build_receipt(&self, order: &Order) -> CoreResult<Receipt> {
        let lines = order
            .items
            .iter()
            .map(|item| {
                Ok(ReceiptLine {
                    item: item.clone(),
                    price: self.catalog.require_price(item)?,
                })
            })
            .collect::<CoreResult<Vec<_>>>()?;

        let subtotal: Money = lines.iter().map(|line| line.price).sum();
        let total = self.price_order(
            order.items.as_slice(),
            order.has_student_id,
            order.priority_delivery,
        )?;
        let delivery_minutes = self.estimate_delivery(
            &order.location,
            order.current_hour,
            order.priority_delivery,
        )?;

        // Compare without the surcharge, which would otherwise mask the discount.
        let before_surcharge = if order.priority_delivery {
            total - PRIORITY_SURCHARGE
        } else {
            total
        };

        Ok(Receipt {
            location: order.location.clone(),
            lines,
            subtotal,
            student_discount_applied: order.has_student_id && before_surcharge < subtotal,
            priority_delivery: order.priority_delivery,
            priority_surcharge: if order.priority_delivery {
                PRIORITY_SURCHARGE
            } else {
                Money::zero()
            },
            total,
            delivery_minutes,
        })
    }

    /// Renders the receipt text for an order.
    pub fn render_receipt<S: AsRef<str>>(
        &self,
        location: &str,
        items: &[S],
        current_hour: u8,
        has_student_id: bool,
        priority_delivery: bool,
    ) -> CoreResult<String> {
        let order = Order {
            items: items.iter().map(|s| s.as_ref().to_string()).collect(),
            location: location.to_string(),
            current_hour,
            has_student_id,
            priority_delivery,
        };
        Ok(self.build_receipt(&order)?.to_string())
    }

    // =========================================================================
    // Rating
    // =========================================================================

    /// Accepts a delivery rating of 1-5.
    ///
    /// Anything else is `InvalidRating` carrying the raw input; the console
    /// re-prompts.
    pub fn rate_delivery(&self, input: &str) -> CoreResult<RatingAck> {
        let rating = validate_rating(input).map_err(|e| {
            debug!(input, error = %e, "rejected rating");
            CoreError::InvalidRating(input.trim().to_string())
        })?;

        debug!(stars = rating.stars(), "rate_delivery");
        Ok(RatingAck {
            rating,
            message: format!("Thank you for rating your delivery {}!", rating),
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> DeliveryEngine {
        DeliveryEngine::default()
    }

    fn cents(c: i64) -> Money {
        Money::from_cents(c)
    }

    // -------------------------------------------------------------------------
    // Menu
    // -------------------------------------------------------------------------

    #[test]
    fn test_list_menu_single_category() {
        let sections = engine().list_menu(Some("Coffee Drinks")).unwrap();
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].category, "Coffee Drinks");
        assert_eq!(
            sections[0].entries,
            vec![
                MenuEntry::new("Latte", cents(499)),
                MenuEntry::new("Cappuccino", cents(499)),
            ]
        );
    }

    #[test]
    fn test_list_menu_all_categories_in_order() {
        let sections = engine().list_menu(None).unwrap();
        let names: Vec<&str> = sections.iter().map(|s| s.category.as_str()).collect();
        assert_eq!(names, vec!["Energy Drinks", "Coffee Drinks", "Breakfast", "Lunch"]);

        let item_count: usize = sections.iter().map(|s| s.entries.len()).sum();
        assert_eq!(item_count, 10);
    }

    #[test]
    fn test_list_menu_unknown_category() {
        assert_eq!(
            engine().list_menu(Some("Dinner")),
            Err(CoreError::UnknownCategory("Dinner".to_string()))
        );
    }

    #[test]
    fn test_search_by_price() {
        let found = engine().search_by_price(cents(300));
        let names: Vec<&str> = found.iter().map(|e| e.item.as_str()).collect();
        assert_eq!(names, vec!["Bagel", "Muffin", "Scone"]);

        assert!(engine().search_by_price(Money::zero()).is_empty());
        assert_eq!(engine().search_by_price(cents(899)).len(), 10);
    }

    #[test]
    fn test_search_by_price_boundary_is_inclusive() {
        let found = engine().search_by_price(cents(799));
        assert!(found.iter().any(|e| e.item == "Hummus & Pita"));
        assert!(!found.iter().any(|e| e.item == "Falafel Wrap"));
    }

    #[test]
    fn test_known_item_and_location() {
        let engine = engine();
        assert!(engine.is_known_item("Scone"));
        assert!(!engine.is_known_item("Pizza"));
        assert!(engine.is_known_location("Library"));
        assert!(!engine.is_known_location("Dorm"));
    }

    // -------------------------------------------------------------------------
    // Pricing
    // -------------------------------------------------------------------------

    #[test]
    fn test_price_order_plain_sum() {
        let total = engine().price_order(&["Latte", "Bagel"], false, false).unwrap();
        assert_eq!(total, cents(798));
    }

    #[test]
    fn test_price_order_duplicates_priced_each() {
        let total = engine().price_order(&["Bagel", "Bagel", "Bagel"], false, false).unwrap();
        assert_eq!(total, cents(897));
    }

    #[test]
    fn test_student_discount_rounds_half_cent_up() {
        // 5 x $3.99 = $19.95; 90% is $17.955
        let total = engine().price_order(&["Monster"; 5], true, false).unwrap();
        assert_eq!(total, cents(1796));
    }

    #[test]
    fn test_student_discount_not_applied_at_or_below_threshold() {
        let total = engine().price_order(&["Latte", "Bagel"], true, false).unwrap();
        assert_eq!(total, cents(798));
    }

    #[test]
    fn test_student_discount_applied_above_threshold() {
        let total = engine()
            .price_order(&["Chicken Wrap", "Falafel Wrap"], true, false)
            .unwrap();
        assert_eq!(total, cents(1618));
    }

    #[test]
    fn test_student_discount_requires_student_id() {
        let total = engine()
            .price_order(&["Chicken Wrap", "Falafel Wrap"], false, false)
            .unwrap();
        assert_eq!(total, cents(1798));
    }

    #[test]
    fn test_threshold_is_strict() {
        // Build a catalog where an order lands exactly on $10.00
        let catalog = DeliveryCatalog::new(
            vec![crate::catalog::Category {
                name: "Test".to_string(),
                items: vec!["Ten".to_string()],
            }],
            vec![MenuEntry::new("Ten", cents(1000))],
            vec![],
        )
        .unwrap();
        let engine = DeliveryEngine::new(catalog);
        assert_eq!(engine.price_order(&["Ten"], true, false).unwrap(), cents(1000));
        assert_eq!(engine.price_order(&["Ten", "Ten"], true, false).unwrap(), cents(1800));
    }

    #[test]
    fn test_priority_surcharge_after_discount() {
        let total = engine()
            .price_order(&["Chicken Wrap", "Falafel Wrap"], true, true)
            .unwrap();
        assert_eq!(total, cents(1818));
    }

    #[test]
    fn test_priority_surcharge_does_not_unlock_discount() {
        // $7.98 + $2.00 surcharge crosses $10.00, but the discount looks at the subtotal
        let total = engine().price_order(&["Latte", "Bagel"], true, true).unwrap();
        assert_eq!(total, cents(998));
    }

    #[test]
    fn test_empty_order() {
        assert_eq!(engine().price_order::<&str>(&[], true, false).unwrap(), Money::zero());
        assert_eq!(engine().price_order::<&str>(&[], false, true).unwrap(), cents(200));
    }

    #[test]
    fn test_price_order_unknown_item() {
        assert_eq!(
            engine().price_order(&["Latte", "Pizza"], false, false),
            Err(CoreError::UnknownItem("Pizza".to_string()))
        );
    }

    // -------------------------------------------------------------------------
    // Delivery
    // -------------------------------------------------------------------------

    #[test]
    fn test_peak_hours() {
        let peak: Vec<u8> = (0..24).filter(|&h| DeliveryEngine::is_peak_hour(h)).collect();
        assert_eq!(peak, vec![9, 10, 11, 12, 13]);
    }

    #[test]
    fn test_estimate_delivery_peak() {
        let engine = engine();
        assert_eq!(engine.estimate_delivery("ITEC Computer Lab", 9, false).unwrap(), 10);
        assert_eq!(engine.estimate_delivery("ITEC Computer Lab", 9, true).unwrap(), 7);
    }

    #[test]
    fn test_estimate_delivery_off_peak() {
        let engine = engine();
        assert_eq!(engine.estimate_delivery("Library", 8, false).unwrap(), 10);
        assert_eq!(engine.estimate_delivery("Library", 14, false).unwrap(), 10);
        assert_eq!(engine.estimate_delivery("Academic Success Center", 0, true).unwrap(), 5);
    }

    #[test]
    fn test_estimate_delivery_floors_at_zero() {
        let catalog = DeliveryCatalog::new(
            vec![],
            vec![],
            vec![crate::catalog::Location {
                name: "Next Door".to_string(),
                base_minutes: 2,
            }],
        )
        .unwrap();
        let engine = DeliveryEngine::new(catalog);
        assert_eq!(engine.estimate_delivery("Next Door", 20, true).unwrap(), 0);
        assert_eq!(engine.estimate_delivery("Next Door", 12, true).unwrap(), 4);
    }

    #[test]
    fn test_estimate_delivery_unknown_location() {
        assert_eq!(
            engine().estimate_delivery("Gym", 9, false),
            Err(CoreError::UnknownLocation("Gym".to_string()))
        );
    }

    #[test]
    fn test_estimate_delivery_invalid_hour() {
        assert!(matches!(
            engine().estimate_delivery("Library", 24, false),
            Err(CoreError::Validation(_))
        ));
    }

    // -------------------------------------------------------------------------
    // Receipt
    // -------------------------------------------------------------------------

    #[test]
    fn test_build_receipt_discounted_priority() {
        let order = Order {
            items: vec!["Chicken Wrap".to_string(), "Falafel Wrap".to_string()],
            location: "Library".to_string(),
            current_hour: 12,
            has_student_id: true,
            priority_delivery: true,
        };
        let receipt = engine().build_receipt(&order).unwrap();

        assert_eq!(receipt.subtotal, cents(1798));
        assert_eq!(receipt.total, cents(1818));
        assert!(receipt.student_discount_applied);
        assert!(receipt.priority_delivery);
        assert_eq!(receipt.priority_surcharge, cents(200));
        assert_eq!(receipt.delivery_minutes, 12);
        assert_eq!(receipt.lines.len(), 2);
    }

    #[test]
    fn test_build_receipt_student_below_threshold() {
        let mut order = Order::new("ITEC Computer Lab", 9);
        order.add_item("Latte");
        order.add_item("Bagel");
        order.has_student_id = true;

        let receipt = engine().build_receipt(&order).unwrap();
        assert_eq!(receipt.subtotal, cents(798));
        assert_eq!(receipt.total, cents(798));
        assert!(!receipt.student_discount_applied);
        assert_eq!(receipt.delivery_minutes, 10);
    }

    #[test]
    fn test_build_receipt_unknown_item_and_location() {
        let mut order = Order::new("Library", 9);
        order.add_item("Pizza");
        assert_eq!(
            engine().build_receipt(&order),
            Err(CoreError::UnknownItem("Pizza".to_string()))
        );

        let mut order = Order::new("Gym", 9);
        order.add_item("Latte");
        assert_eq!(
            engine().build_receipt(&order),
            Err(CoreError::UnknownLocation("Gym".to_string()))
        );
    }

    #[test]
    fn test_render_receipt_text() {
        let text = engine()
            .render_receipt("ITEC Computer Lab", &["Latte", "Bagel"], 9, true, false)
            .unwrap();
        assert!(text.contains("Delivery to: ITEC Computer Lab"));
        assert!(text.contains("- Latte: $4.99"));
        assert!(text.contains("Subtotal: $7.98"));
        assert!(!text.contains("Student Discount Applied!"));
        assert!(text.contains("Total after discount: $7.98"));
        assert!(text.contains("Estimated delivery time: 10 minutes"));
    }

    // -------------------------------------------------------------------------
    // Rating
    // -------------------------------------------------------------------------

    #[test]
    fn test_rate_delivery_accepts_one_to_five() {
        for stars in 1..=5u8 {
            let ack = engine().rate_delivery(&stars.to_string()).unwrap();
            assert_eq!(ack.rating.stars(), stars);
        }
        let ack = engine().rate_delivery("5").unwrap();
        assert_eq!(ack.to_string(), "Thank you for rating your delivery 5/5!");
    }

    #[test]
    fn test_rate_delivery_rejects_out_of_range_and_text() {
        for input in ["0", "6", "abc", "", "3.5"] {
            assert_eq!(
                engine().rate_delivery(input),
                Err(CoreError::InvalidRating(input.to_string()))
            );
        }
    }

    #[test]
    fn test_rate_delivery_rejects_nine() {
        assert_eq!(
            engine().rate_delivery("9"),
            Err(CoreError::InvalidRating("9".to_string()))
        );
    }

    #[test]
    fn test_engine_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<DeliveryEngine>();
    }
}
