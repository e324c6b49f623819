//! # Row Matcher
//!
//! Predicate-based row selection over a price table.
//!
//! ```text
//! PriceTable rows ──► RowSchema::decode ──► predicate ──► matches
//!                     (wrong shape: skip)   (string ==)   (sheet order)
//! ```

use crate::table::{PriceTable, RowSchema};

/// Returns every row of `table` that decodes as `R` and satisfies
/// `predicate`, in table order.
///
/// ## Example
/// ```rust
/// use boxquote_core::matcher::match_rows;
/// use boxquote_core::table::{PriceTable, PrintingRow, TableId};
///
/// let table = PriceTable::from_rows(
///     TableId::Printing,
///     [
///         vec!["price list"],
///         vec!["", "1colour", "art card 300gsm", "A4", "500", "120.00"],
///     ],
/// );
///
/// let hits: Vec<PrintingRow> =
///     match_rows(&table, |row: &PrintingRow| row.quantity == "500").collect();
/// assert_eq!(hits.len(), 1);
/// ```
pub fn match_rows<'a, R, P>(table: &'a PriceTable, predicate: P) -> impl Iterator<Item = R> + 'a
where
    R: RowSchema<'a> + 'a,
    P: Fn(&R) -> bool + 'a,
{
    table
        .rows()
        .iter()
        .filter_map(R::decode)
        .filter(move |row| predicate(row))
}
