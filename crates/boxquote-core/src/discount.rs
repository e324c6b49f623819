//! # Readied-Size Discount
//!
//! Flat discount per size category when the customer takes a pre-cut
//! standard size instead of a custom shape.
//!
//! ```text
//! ┌──────┬──────────┐
//! │ size │ discount │
//! ├──────┼──────────┤
//! │ A1   │ RM300    │
//! │ A2   │ RM250    │
//! │ A3   │ RM200    │
//! │ A4   │ RM150    │
//! │ A5   │ RM100    │
//! └──────┴──────────┘
//! "+" sizes (A3+, A4+, A5+) have no entry and get no discount.
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::money::Money;

/// Size category → discount. Configured in whole ringgit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "BTreeMap<String, u32>", into = "BTreeMap<String, u32>")]
pub struct DiscountTable {
    entries: BTreeMap<String, Money>,
}

impl DiscountTable {
    /// Discount for a size, if the size has one.
    pub fn lookup(&self, size_category: &str) -> Option<Money> {
        self.entries.get(size_category).copied()
    }
}

impl Default for DiscountTable {
    fn default() -> Self {
        [("A1", 300), ("A2", 250), ("A3", 200), ("A4", 150), ("A5", 100)]
            .into_iter()
            .map(|(size, amount)| (size.to_string(), amount))
            .collect::<BTreeMap<_, _>>()
            .into()
    }
}

impl From<BTreeMap<String, u32>> for DiscountTable {
    fn from(whole_ringgit: BTreeMap<String, u32>) -> Self {
        DiscountTable {
            entries: whole_ringgit
                .into_iter()
                .map(|(size, amount)| (size, Money::from_major(i64::from(amount))))
                .collect(),
        }
    }
}

impl From<DiscountTable> for BTreeMap<String, u32> {
    fn from(table: DiscountTable) -> Self {
        table
            .entries
            .into_iter()
            .map(|(size, amount)| (size, amount.major().max(0) as u32))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table() {
        let table = DiscountTable::default();
        assert_eq!(table.lookup("A2"), Some(Money::from_major(250)));
        assert_eq!(table.lookup("A5"), Some(Money::from_major(100)));
        assert_eq!(table.lookup("A3+"), None);
        assert_eq!(table.lookup("a4"), None);
    }

    #[test]
    fn test_configured_in_whole_ringgit() {
        let table: DiscountTable = serde_json::from_str(r#"{"A4": 180}"#).unwrap();
        assert_eq!(table.lookup("A4"), Some(Money::from_cents(18_000)));
        assert_eq!(table.lookup("A2"), None);
    }
}
