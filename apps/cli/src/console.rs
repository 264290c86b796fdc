//! # Console Session
//!
//! Prompts the customer, re-prompts on rejected input, and prints what the
//! engine returns. All business rules live in `dunn-core`; this module only
//! moves text between the terminal and the engine.
//!
//! ## Session Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Interactive Session                             │
//! │                                                                         │
//! │  show full menu                                                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  location? ◄──┐ unknown          item? ◄──┐ unknown  (until "done")    │
//! │       │───────┘                      │────┘                             │
//! │       ▼                              ▼                                  │
//! │  student ID? (y/n) ──► priority? (y/n) ──► hour? (0-23)                │
//! │                                              │                          │
//! │                                              ▼                          │
//! │                                          receipt                        │
//! │                                              │                          │
//! │                                              ▼                          │
//! │                       max price? ──► matching items                     │
//! │                                              │                          │
//! │                                              ▼                          │
//! │                                  rating? ◄──┐ not 1-5                   │
//! │                                      │──────┘                           │
//! │                                      ▼                                  │
//! │                                thank-you line                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Reader and writer are generic so tests can drive a whole session from a
//! `Cursor`.

use std::io::{BufRead, Write};

use chrono::Timelike;
use tracing::{debug, info};

use dunn_core::validation::{parse_hour, parse_yes_no};
use dunn_core::{DeliveryEngine, MenuEntry, Money, Order, RatingAck, Receipt};

use crate::config::{CliConfig, OutputFormat, RunMode};
use crate::error::{CliError, CliResult};

/// Typed at the item prompt to finish the order.
pub const DONE_SENTINEL: &str = "done";

/// What an interactive session produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionOutcome {
    pub receipt: Receipt,
    pub matches: Vec<MenuEntry>,
    pub rating: RatingAck,
}

/// A console bound to an engine, a configuration, and a terminal.
pub struct Console<'a, R, W> {
    engine: &'a DeliveryEngine,
    config: &'a CliConfig,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Console<'a, R, W> {
    pub fn new(engine: &'a DeliveryEngine, config: &'a CliConfig, input: R, output: W) -> Self {
        Console {
            engine,
            config,
            input,
            output,
        }
    }

    /// Returns the writer, so tests can inspect what was printed.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Runs the session selected by the configuration.
    pub fn run(&mut self) -> CliResult<()> {
        match self.config.mode {
            RunMode::Demo => self.run_demo().map(|_| ()),
            RunMode::Interactive => self.run_session().map(|_| ()),
        }
    }

    /// The fixed sample run: coffee menu, then a student order at 9 AM.
    pub fn run_demo(&mut self) -> CliResult<Receipt> {
        info!("running demo order");
        self.show_menu(Some("Coffee Drinks"))?;

        let mut order = Order::new("ITEC Computer Lab", 9);
        order.add_item("Latte");
        order.add_item("Bagel");
        order.has_student_id = true;

        let receipt = self.engine.build_receipt(&order)?;
        self.print_receipt(&receipt)?;
        Ok(receipt)
    }

    /// The full interactive ordering session.
    pub fn run_session(&mut self) -> CliResult<SessionOutcome> {
        writeln!(self.output, "Welcome to Dunn Delivery!")?;
        self.show_menu(None)?;

        let location = self.prompt_location()?;
        let mut order = Order::new(location, 0);
        order.items = self.prompt_items()?;
        order.has_student_id = self.prompt_yes_no("Do you have a student ID? (y/n): ", "student id")?;
        order.priority_delivery =
            self.prompt_yes_no("Add priority delivery for $2.00? (y/n): ", "priority delivery")?;
        order.current_hour = self.resolve_hour()?;

        let receipt = self.engine.build_receipt(&order)?;
        info!(
            location = %order.location,
            items = order.items.len(),
            total = %receipt.total,
            minutes = receipt.delivery_minutes,
            "order placed"
        );
        self.print_receipt(&receipt)?;

        let matches = self.prompt_price_search()?;
        let rating = self.prompt_rating()?;

        Ok(SessionOutcome {
            receipt,
            matches,
            rating,
        })
    }

    // =========================================================================
    // Output
    // =========================================================================

    /// Prints one category or the whole menu.
    ///
    /// An unknown category prints nothing; the engine logs it.
    pub fn show_menu(&mut self, category: Option<&str>) -> CliResult<()> {
        let sections = match self.engine.list_menu(category) {
            Ok(sections) => sections,
            Err(dunn_core::CoreError::UnknownCategory(_)) => return Ok(()),
            Err(e) => return Err(e.into()),
        };

        for section in sections {
            writeln!(self.output)?;
            write!(self.output, "{}", section)?;
        }
        Ok(())
    }

    fn print_receipt(&mut self, receipt: &Receipt) -> CliResult<()> {
        writeln!(self.output)?;
        match self.config.output {
            OutputFormat::Text => writeln!(self.output, "{}", receipt)?,
            OutputFormat::Json => writeln!(self.output, "{}", serde_json::to_string_pretty(receipt)?)?,
        }
        Ok(())
    }

    // =========================================================================
    // Prompts
    // =========================================================================

    /// Writes a prompt and reads one trimmed line.
    fn read_line(&mut self, prompt: &str) -> CliResult<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(CliError::InputClosed {
                prompt: prompt.trim().to_string(),
            });
        }
        Ok(line.trim().to_string())
    }

    fn prompt_location(&mut self) -> CliResult<String> {
        let names: Vec<String> = self
            .engine
            .catalog()
            .locations()
            .iter()
            .map(|l| l.name.clone())
            .collect();
        let choices = names.join(", ");

        loop {
            let location = self.read_line(&format!("\nDelivery location ({}): ", choices))?;
            if self.engine.is_known_location(&location) {
                return Ok(location);
            }
            debug!(location = %location, "unknown location entered");
            writeln!(self.output, "Unknown location '{}'. Please choose one of: {}", location, choices)?;
        }
    }

    fn prompt_items(&mut self) -> CliResult<Vec<String>> {
        let mut items = Vec::new();
        loop {
            let item = self.read_line(&format!("Add an item (or '{}' to finish): ", DONE_SENTINEL))?;
            if item.eq_ignore_ascii_case(DONE_SENTINEL) {
                return Ok(items);
            }
            if item.is_empty() {
                continue;
            }
            if self.engine.is_known_item(&item) {
                items.push(item);
            } else {
                debug!(item = %item, "unknown item entered");
                writeln!(self.output, "'{}' is not on the menu. Please try again.", item)?;
            }
        }
    }

    fn prompt_yes_no(&mut self, prompt: &str, field: &str) -> CliResult<bool> {
        loop {
            let answer = self.read_line(prompt)?;
            match parse_yes_no(field, &answer) {
                Ok(value) => return Ok(value),
                Err(e) => writeln!(self.output, "{}", e)?,
            }
        }
    }

    /// Fixed hour from configuration, then the local clock, then a prompt.
    fn resolve_hour(&mut self) -> CliResult<u8> {
        if let Some(hour) = self.config.current_hour {
            return Ok(hour);
        }
        if self.config.use_clock {
            let hour = chrono::Local::now().hour() as u8;
            debug!(hour, "using local clock hour");
            return Ok(hour);
        }

        loop {
            let raw = self.read_line("Current hour (0-23): ")?;
            match parse_hour(&raw) {
                Ok(hour) => return Ok(hour),
                Err(e) => writeln!(self.output, "{}", e)?,
            }
        }
    }

    fn prompt_price_search(&mut self) -> CliResult<Vec<MenuEntry>> {
        let max_price = loop {
            let raw = self.read_line("\nShow items up to what price? $")?;
            match Money::parse_dollars(&raw) {
                Ok(price) => break price,
                Err(e) => writeln!(self.output, "{}", e)?,
            }
        };

        let matches = self.engine.search_by_price(max_price);
        if matches.is_empty() {
            writeln!(self.output, "No items at or under {}.", max_price)?;
        } else {
            writeln!(self.output, "Items at or under {}:", max_price)?;
            for entry in &matches {
                writeln!(self.output, "{}", entry)?;
            }
        }
        Ok(matches)
    }

    fn prompt_rating(&mut self) -> CliResult<RatingAck> {
        loop {
            let raw = self.read_line("\nRate your delivery (1-5): ")?;
            match self.engine.rate_delivery(&raw) {
                Ok(ack) => {
                    writeln!(self.output, "{}", ack)?;
                    return Ok(ack);
                }
                Err(_) => writeln!(self.output, "Please enter a whole number from 1 to 5.")?,
            }
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
