//! # dunn-core: Pure Business Logic for Dunn Delivery
//!
//! This crate is the **heart** of Dunn Delivery. It owns the campus menu,
//! the price and location tables, and every pricing and delivery rule, as
//! pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Dunn Delivery Architecture                         │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Console (apps/cli)                           │   │
//! │  │   Menu ──► Location ──► Items ──► Flags ──► Receipt ──► Rating │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ plain function calls                   │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ dunn-core (THIS CRATE) ★                        │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  catalog  │  │   money   │  │  engine   │  │ validation│  │   │
//! │  │   │  menu     │  │   Money   │  │  pricing  │  │  rating   │  │   │
//! │  │   │  prices   │  │  discount │  │  delivery │  │  hour     │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO CLOCK • NO STDIN • PURE FUNCTIONS                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`catalog`] - Immutable menu, price and location tables
//! - [`engine`] - Pricing, delivery estimation, search and rating
//! - [`receipt`] - Structured order receipt and its text rendering
//! - [`types`] - Small value types (Order, MenuEntry, Rating)
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation for console-supplied values
//!
//! ## Example Usage
//!
//! ```rust
//! use dunn_core::{DeliveryEngine, Money};
//!
//! let engine = DeliveryEngine::default();
//!
//! // Two wraps with a student ID: $17.98 - 10% = $16.18
//! let total = engine
//!     .price_order(&["Chicken Wrap", "Falafel Wrap"], true, false)
//!     .unwrap();
//! assert_eq!(total, Money::from_cents(1618));
//!
//! // Peak hour at the computer lab: 5 + 5 minutes
//! assert_eq!(engine.estimate_delivery("ITEC Computer Lab", 9, false).unwrap(), 10);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod engine;
pub mod error;
pub mod money;
pub mod receipt;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use catalog::DeliveryCatalog;
pub use engine::DeliveryEngine;
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use receipt::{Receipt, ReceiptLine};
pub use types::*;

// =============================================================================
// Pricing Policy Constants
// =============================================================================

/// Student discount in basis points (1000 = 10%).
pub const STUDENT_DISCOUNT_BPS: u32 = 1000;

/// Subtotal that must be strictly exceeded before the student discount applies.
pub const STUDENT_DISCOUNT_THRESHOLD: Money = Money::from_cents(1000);

/// Flat surcharge for priority delivery, added after any discount.
pub const PRIORITY_SURCHARGE: Money = Money::from_cents(200);

// =============================================================================
// Delivery Policy Constants
// =============================================================================

/// Inclusive hour windows during which deliveries are slower.
///
/// Two separate windows: the morning rush (9-10) and lunch (11-13).
pub const PEAK_HOUR_WINDOWS: [(u8, u8); 2] = [(9, 10), (11, 13)];

/// Minutes added to the base transit time during a peak hour.
pub const PEAK_HOUR_EXTRA_MINUTES: u32 = 5;

/// Minutes saved by priority delivery (floored at zero).
pub const PRIORITY_MINUTES_SAVED: u32 = 3;

/// Lowest accepted delivery rating.
pub const MIN_RATING: u8 = 1;

/// Highest accepted delivery rating.
pub const MAX_RATING: u8 = 5;
