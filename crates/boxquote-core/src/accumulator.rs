//! # Accumulator
//!
//! Per-quantity-tier running totals.
//!
//! ## Poison Semantics
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    RunningTotal state machine                           │
//! │                                                                         │
//! │   initialize(120.00)                                                    │
//! │        │                                                                │
//! │        ▼                        add("not available")                    │
//! │   Amount(120.00) ─────────────────────────────────► Unavailable        │
//! │        │  ▲                                           │   ▲            │
//! │        │  │ add(35.00) / subtract(150.00)             │   │ add(*)     │
//! │        └──┘                                           └───┘ (no-op)    │
//! │                                                                         │
//! │   Unavailable is terminal: nothing brings a tier back.                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Tiers are keyed by the quantity's decimal string, so iteration follows
//! string order ("1000" before "500"). Sums are checked; leaving the i64 sen
//! range aborts the request with `QuoteError::TotalOverflow`.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use tracing::debug;

use crate::error::{QuoteError, QuoteResult};
use crate::money::Money;
use crate::table::PriceCell;
use crate::{CURRENCY, NOT_AVAILABLE};

/// Running total of one quantity tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "status", content = "amount")]
pub enum RunningTotal {
    Amount(Money),
    Unavailable,
}

impl RunningTotal {
    #[inline]
    pub fn is_available(&self) -> bool {
        matches!(self, RunningTotal::Amount(_))
    }

    #[inline]
    pub fn amount(&self) -> Option<Money> {
        match self {
            RunningTotal::Amount(money) => Some(*money),
            RunningTotal::Unavailable => None,
        }
    }
}

impl From<PriceCell> for RunningTotal {
    fn from(cell: PriceCell) -> Self {
        match cell {
            PriceCell::Amount(money) => RunningTotal::Amount(money),
            PriceCell::NotAvailable => RunningTotal::Unavailable,
        }
    }
}

/// `RM155.00` or `not available`.
impl fmt::Display for RunningTotal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunningTotal::Amount(money) => write!(f, "{CURRENCY}{money}"),
            RunningTotal::Unavailable => f.write_str(NOT_AVAILABLE),
        }
    }
}

/// Request-scoped map of tier → running total.
#[derive(Debug, Clone, Default)]
pub struct Accumulator {
    totals: BTreeMap<String, RunningTotal>,
}

impl Accumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a tier at its base printing price.
    ///
    /// A "not available" base poisons the tier from the start.
    pub fn initialize(&mut self, tier: &str, base: PriceCell) {
        self.totals.insert(tier.to_string(), base.into());
    }

    /// Poisons a tier. Used when no base price row exists.
    pub fn mark_unavailable(&mut self, tier: &str) {
        self.totals
            .insert(tier.to_string(), RunningTotal::Unavailable);
    }

    /// Adds a decoded price to a tier.
    ///
    /// ## Behavior
    /// - tier unavailable → no-op
    /// - `PriceCell::NotAvailable` → tier becomes unavailable
    /// - otherwise the amount is summed
    /// - unknown tier → no-op (it was never quoted)
    ///
    /// ## Errors
    /// `QuoteError::TotalOverflow` when the sum leaves the i64 sen range.
    pub fn add(&mut self, tier: &str, delta: PriceCell) -> QuoteResult<()> {
        match delta {
            PriceCell::Amount(amount) => self.apply(tier, |current| current.checked_add(amount)),
            PriceCell::NotAvailable => {
                if let Some(total) = self.totals.get_mut(tier) {
                    if total.is_available() {
                        debug!(tier, "Tier marked not available");
                        *total = RunningTotal::Unavailable;
                    }
                }
                Ok(())
            }
        }
    }

    /// Subtracts a discount from a tier. No-op on unavailable tiers.
    pub fn subtract(&mut self, tier: &str, amount: Money) -> QuoteResult<()> {
        self.apply(tier, |current| current.checked_sub(amount))
    }

    fn apply(&mut self, tier: &str, op: impl FnOnce(Money) -> Option<Money>) -> QuoteResult<()> {
        let Some(total) = self.totals.get_mut(tier) else {
            debug!(tier, "Ignoring price for a tier that was never initialized");
            return Ok(());
        };
        if let RunningTotal::Amount(current) = *total {
            let next = op(current).ok_or_else(|| QuoteError::TotalOverflow {
                tier: tier.to_string(),
            })?;
            *total = RunningTotal::Amount(next);
        }
        Ok(())
    }

    pub fn get(&self, tier: &str) -> Option<RunningTotal> {
        self.totals.get(tier).copied()
    }

    /// Tiers in ascending string order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, RunningTotal)> + '_ {
        self.totals.iter().map(|(tier, total)| (tier.as_str(), *total))
    }

    pub fn len(&self) -> usize {
        self.totals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::TableId;

    fn amount(cents: i64) -> PriceCell {
        PriceCell::Amount(Money::from_cents(cents))
    }

    fn cell(raw: &str) -> PriceCell {
        PriceCell::parse(raw, TableId::AddOns).unwrap()
    }

    #[test]
    fn test_sum_at_two_decimals() {
        let mut acc = Accumulator::new();
        acc.initialize("500", amount(12000));
        acc.add("500", cell("35.5")).unwrap();
        acc.add("500", cell("0.25")).unwrap();

        assert_eq!(acc.get("500").unwrap().to_string(), "RM155.75");
    }

    #[test]
    fn test_poison_is_absorbing() {
        let mut acc = Accumulator::new();
        acc.initialize("500", amount(12000));
        acc.add("500", cell("not available")).unwrap();
        acc.add("500", amount(1000)).unwrap();
        acc.subtract("500", Money::from_major(150)).unwrap();
        acc.add("500", cell("20.00")).unwrap();

        assert_eq!(acc.get("500"), Some(RunningTotal::Unavailable));
        assert_eq!(acc.get("500").unwrap().to_string(), "not available");
    }

    #[test]
    fn test_unavailable_base_never_recovers() {
        let mut acc = Accumulator::new();
        acc.mark_unavailable("1000");
        acc.add("1000", amount(5000)).unwrap();

        assert!(!acc.get("1000").unwrap().is_available());
    }

    #[test]
    fn test_discount_can_go_negative() {
        let mut acc = Accumulator::new();
        acc.initialize("100", amount(10000));
        acc.subtract("100", Money::from_major(150)).unwrap();

        assert_eq!(acc.get("100").unwrap().to_string(), "RM-50.00");
    }

    #[test]
    fn test_overflow_is_an_error() {
        let mut acc = Accumulator::new();
        acc.initialize("500", amount(i64::MAX - 10));

        let err = acc.add("500", amount(11)).unwrap_err();
        assert!(matches!(err, QuoteError::TotalOverflow { ref tier } if tier == "500"));
        assert_eq!(acc.get("500").unwrap().amount(), Some(Money::from_cents(i64::MAX - 10)));

        acc.initialize("1000", amount(i64::MIN + 5));
        assert!(acc.subtract("1000", Money::from_cents(6)).is_err());
    }

    #[test]
    fn test_overflow_ignored_once_poisoned() {
        let mut acc = Accumulator::new();
        acc.mark_unavailable("500");
        assert!(acc.add("500", amount(i64::MAX)).is_ok());
        assert!(acc.add("500", amount(i64::MAX)).is_ok());
    }

    #[test]
    fn test_unknown_tier_is_ignored() {
        let mut acc = Accumulator::new();
        acc.add("300", amount(100)).unwrap();
        assert!(acc.is_empty());
    }

    #[test]
    fn test_iteration_uses_string_order() {
        let mut acc = Accumulator::new();
        acc.initialize("500", amount(1));
        acc.initialize("1000", amount(2));
        acc.initialize("200", amount(3));

        let tiers: Vec<&str> = acc.iter().map(|(tier, _)| tier).collect();
        assert_eq!(tiers, vec!["1000", "200", "500"]);
    }
}
