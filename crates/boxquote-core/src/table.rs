//! # Price Tables
//!
//! Rows read from the pricing spreadsheet and their typed decoders.
//!
//! ## Table Schemas
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Printing / Double-side printing (exactly 6 columns)                   │
//! │  ┌────────┬─────────┬─────────────────┬──────┬──────────┬─────────┐    │
//! │  │ unused │ colour  │ material        │ size │ quantity │ price   │    │
//! │  │        │ 1colour │ art card 300gsm │ A4   │ 500      │ 120.00  │    │
//! │  └────────┴─────────┴─────────────────┴──────┴──────────┴─────────┘    │
//! │                                                                         │
//! │  Add-ons (4 or 5 columns)                                              │
//! │  ┌──────────────────┬────────────────────┬──────────┬────────┬───────┐ │
//! │  │ label            │ size-or-spec       │ quantity │ single │ double│ │
//! │  │ gloss lam 1side  │ A4                 │ 500      │ 35.00  │ 60.00 │ │
//! │  │ hot stamping     │ within 16 sq inch  │ 500      │ 80.00  │       │ │
//! │  └──────────────────┴────────────────────┴──────────┴────────┴───────┘ │
//! │                                                                         │
//! │  Rows of any other width (titles, notes, blank lines) never decode.    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Decoding checks the row shape only. Price cells stay text until a row
//! has actually matched, so a header row like `price` never fails a request
//! unless it is selected.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{QuoteError, QuoteResult};
use crate::money::Money;
use crate::{CURRENCY, NOT_AVAILABLE};

// =============================================================================
// Table Identity
// =============================================================================

/// The table regions the engine reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TableId {
    /// Single side printing prices.
    Printing,
    /// Primary, secondary and another-side finishing prices.
    AddOns,
    /// Printing prices for the second side.
    DoubleSidePrinting,
}

impl TableId {
    /// Spreadsheet range name the table lives under by default.
    pub const fn default_range(&self) -> &'static str {
        match self {
            TableId::Printing => "printing_raw",
            TableId::AddOns => "primary_secondary_addon_raw",
            TableId::DoubleSidePrinting => "third_addon_raw",
        }
    }
}

impl fmt::Display for TableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TableId::Printing => "printing",
            TableId::AddOns => "add-on",
            TableId::DoubleSidePrinting => "double side printing",
        };
        f.write_str(name)
    }
}

// =============================================================================
// Rows
// =============================================================================

/// One untyped spreadsheet row. Cells are compared as strings.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PriceRow(Vec<String>);

impl PriceRow {
    pub fn new<I, S>(cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        PriceRow(cells.into_iter().map(Into::into).collect())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub fn cell(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(String::as_str)
    }

    pub fn cells(&self) -> &[String] {
        &self.0
    }
}

/// All rows of one table region, in sheet order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceTable {
    id: TableId,
    rows: Vec<PriceRow>,
}

impl PriceTable {
    pub fn new(id: TableId, rows: Vec<PriceRow>) -> Self {
        PriceTable { id, rows }
    }

    /// Builds a table from string literals. Handy for tests and fixtures.
    pub fn from_rows<R, S>(id: TableId, rows: impl IntoIterator<Item = R>) -> Self
    where
        R: IntoIterator<Item = S>,
        S: Into<String>,
    {
        PriceTable {
            id,
            rows: rows.into_iter().map(PriceRow::new).collect(),
        }
    }

    #[inline]
    pub fn id(&self) -> TableId {
        self.id
    }

    #[inline]
    pub fn rows(&self) -> &[PriceRow] {
        &self.rows
    }
}

// =============================================================================
// Price Cells
// =============================================================================

/// A decoded price cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "status", content = "amount")]
pub enum PriceCell {
    Amount(Money),
    /// The sheet says "not available" (or the cell is blank).
    NotAvailable,
}

impl PriceCell {
    /// Parses a raw cell belonging to `table`.
    ///
    /// ## Errors
    /// `QuoteError::MalformedPriceCell` for anything that is neither an
    /// amount nor the "not available" literal.
    pub fn parse(raw: &str, table: TableId) -> QuoteResult<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case(NOT_AVAILABLE) {
            return Ok(PriceCell::NotAvailable);
        }

        trimmed
            .parse::<Money>()
            .map(PriceCell::Amount)
            .map_err(|_| QuoteError::malformed(table.to_string(), raw))
    }

    #[inline]
    pub fn amount(&self) -> Option<Money> {
        match self {
            PriceCell::Amount(money) => Some(*money),
            PriceCell::NotAvailable => None,
        }
    }
}

/// `RM120.00` or `not available`.
impl fmt::Display for PriceCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PriceCell::Amount(money) => write!(f, "{CURRENCY}{money}"),
            PriceCell::NotAvailable => f.write_str(NOT_AVAILABLE),
        }
    }
}

// =============================================================================
// Typed Row Decoders
// =============================================================================

/// A table schema that can be decoded from a raw row.
///
/// `decode` returns `None` for rows of the wrong shape; they are skipped.
pub trait RowSchema<'a>: Sized {
    fn decode(row: &'a PriceRow) -> Option<Self>;
}

/// A row of the printing or double-side printing table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrintingRow<'a> {
    pub colour: &'a str,
    pub material: &'a str,
    pub size: &'a str,
    pub quantity: &'a str,
    pub price: &'a str,
}

impl<'a> RowSchema<'a> for PrintingRow<'a> {
    fn decode(row: &'a PriceRow) -> Option<Self> {
        match row.cells() {
            [_, colour, material, size, quantity, price] => Some(PrintingRow {
                colour,
                material,
                size,
                quantity,
                price,
            }),
            _ => None,
        }
    }
}

impl PrintingRow<'_> {
    pub fn price(&self, table: TableId) -> QuoteResult<PriceCell> {
        PriceCell::parse(self.price, table)
    }
}

/// A row of the add-on table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddOnRow<'a> {
    pub label: &'a str,
    /// Size category for finishes, option value for sized add-ons.
    pub spec: &'a str,
    pub quantity: &'a str,
    pub single_side: &'a str,
    pub double_side: Option<&'a str>,
}

impl<'a> RowSchema<'a> for AddOnRow<'a> {
    fn decode(row: &'a PriceRow) -> Option<Self> {
        match row.cells() {
            [label, spec, quantity, single_side] => Some(AddOnRow {
                label,
                spec,
                quantity,
                single_side,
                double_side: None,
            }),
            [label, spec, quantity, single_side, double_side] => Some(AddOnRow {
                label,
                spec,
                quantity,
                single_side,
                double_side: Some(double_side),
            }),
            _ => None,
        }
    }
}

impl AddOnRow<'_> {
    pub fn single_side_price(&self) -> QuoteResult<PriceCell> {
        PriceCell::parse(self.single_side, TableId::AddOns)
    }

    /// Price when both sides are printed.
    ///
    /// A four-column row has no double-side price: not available.
    pub fn double_side_price(&self) -> QuoteResult<PriceCell> {
        match self.double_side {
            Some(raw) => PriceCell::parse(raw, TableId::AddOns),
            None => Ok(PriceCell::NotAvailable),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
