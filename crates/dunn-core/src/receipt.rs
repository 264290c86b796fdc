//! # Order Receipt
//!
//! The priced, estimated summary of one order.
//!
//! ## Text Layout
//! ```text
//! === Order Summary ===
//! Delivery to: ITEC Computer Lab
//!
//! Items ordered:
//! - Latte: $4.99
//! - Bagel: $2.99
//!
//! Subtotal: $7.98
//! Student Discount Applied!          ← only when it lowered the price
//! Priority Delivery: +$2.00          ← only when requested
//! Total after discount: $7.98
//! Estimated delivery time: 10 minutes
//! ```
//!
//! The same data serializes to JSON for the console's `--json` output.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::money::Money;

/// One line of the receipt: an item occurrence and its unit price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceiptLine {
    pub item: String,
    pub price: Money,
}

/// A fully priced order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receipt {
    /// Delivery location.
    pub location: String,

    /// Ordered items in entry order, duplicates kept.
    pub lines: Vec<ReceiptLine>,

    /// Raw sum of item prices, before any discount or surcharge.
    pub subtotal: Money,

    /// True only when the student discount actually lowered the price.
    pub student_discount_applied: bool,

    pub priority_delivery: bool,

    /// Zero unless priority delivery was selected.
    pub priority_surcharge: Money,

    /// Amount due.
    pub total: Money,

    /// Estimated delivery time.
    pub delivery_minutes: u32,
}

impl Receipt {
    /// Money taken off by the student discount.
    pub fn discount_amount(&self) -> Money {
        self.subtotal + self.priority_surcharge - self.total
    }
}

impl fmt::Display for Receipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Order Summary ===")?;
        writeln!(f, "Delivery to: {}", self.location)?;
        writeln!(f)?;
        writeln!(f, "Items ordered:")?;
        if self.lines.is_empty() {
            writeln!(f, "(none)")?;
        }
        for line in &self.lines {
            writeln!(f, "- {}: {}", line.item, line.price)?;
        }
        writeln!(f)?;
        writeln!(f, "Subtotal: {}", self.subtotal)?;
        if self.student_discount_applied {
            writeln!(f, "Student Discount Applied! (-{})", self.discount_amount())?;
        }
        if self.priority_delivery {
            writeln!(f, "Priority Delivery: +{}", self.priority_surcharge)?;
        }
        writeln!(f, "Total after discount: {}", self.total)?;
        write!(f, "Estimated delivery time: {} minutes", self.delivery_minutes)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
