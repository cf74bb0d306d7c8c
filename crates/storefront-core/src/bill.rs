//! # Bill Aggregator
//!
//! Derives line totals and the grand total from a cart snapshot.
//!
//! ```text
//! Cart                                 Bill
//! ────                                 ────
//! Tee  100.00 × 2      ──────────►     Tee   × 2    200.00
//! Cap   50.00 × 3      ──────────►     Cap   × 3    150.00
//! Mug   80.00 × 0      ──────────►     Mug   × 0      0.00
//!                                      ─────────────────────
//!                                      TOTAL        350.00
//! ```
//!
//! The bill is never cached. Callers recompute it every time they show
//! it, so it always matches the current cart.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::cart::Cart;
use crate::money::Money;
use crate::types::Product;

/// One line of a bill.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillLine {
    pub product: Product,
    pub quantity: u32,
    pub line_total: Money,
}

/// The derived summary of line totals and grand total for a cart.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bill {
    pub lines: Vec<BillLine>,
    pub grand_total: Money,
    pub generated_at: DateTime<Utc>,
}

impl Bill {
    /// True when the cart had no lines; the view renders an explicit
    /// "empty" state for this.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Computes the bill for the current cart contents.
///
/// `grand_total == Σ(price × quantity)` over every line, zero-quantity
/// lines included. An empty cart yields no lines and a zero total.
pub fn compute_bill(cart: &Cart) -> Bill {
    let lines: Vec<BillLine> = cart
        .lines()
        .iter()
        .map(|line| BillLine {
            product: line.product().clone(),
            quantity: line.quantity(),
            line_total: line.line_total(),
        })
        .collect();

    let grand_total = lines.iter().map(|l| l.line_total).sum();

    Bill {
        lines,
        grand_total,
        generated_at: Utc::now(),
    }
}
