//! # boxquote-core: Pure Quotation Logic for Box Printing
//!
//! This crate is the **heart** of boxquote. It turns a structured box
//! printing order into a per-quantity price breakdown and the quotation text
//! sent to the customer, using price tables that were read elsewhere.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        boxquote Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    boxquote CLI (apps/)                         │   │
//! │  │        config ──► logging ──► read order ──► print text         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │            boxquote-tables (readers + QuoteService)             │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ PriceTables                            │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ boxquote-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌────────────┐  ┌───────────┐  │   │
//! │  │   │  matcher  │  │accumulator│  │  document  │  │  engine   │  │   │
//! │  │   │ RowSchema │  │ Running-  │  │ Slots +    │  │ 7 stages  │  │   │
//! │  │   │ match_rows│  │ Total     │  │ Fragments  │  │ + header  │  │   │
//! │  │   └───────────┘  └───────────┘  └────────────┘  └───────────┘  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`order`] - The order a customer submits (size, material, add-ons)
//! - [`catalog`] - Option catalog the order is validated against
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`table`] - Price rows, price cells and typed row decoders
//! - [`matcher`] - Predicate-based row selection
//! - [`accumulator`] - Per-tier running totals with "not available" poison
//! - [`document`] - Quotation document slots and placeholder tokens
//! - [`discount`] - Readied-size discount table
//! - [`machine`] - Machine-type classification
//! - [`header`] - Quotation header synthesis
//! - [`engine`] - The stage pipeline
//! - [`validation`] - Order validation
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use boxquote_core::money::Money;
//!
//! let base: Money = "120.00".parse().unwrap();
//! let lamination: Money = "35.50".parse().unwrap();
//! assert_eq!((base + lamination).to_string(), "155.50");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod accumulator;
pub mod catalog;
pub mod discount;
pub mod document;
pub mod engine;
pub mod error;
pub mod header;
pub mod machine;
pub mod matcher;
pub mod money;
pub mod order;
pub mod table;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use accumulator::{Accumulator, RunningTotal};
pub use catalog::Catalog;
pub use discount::DiscountTable;
pub use document::{Fragment, Placeholder, QuotationDocument, Slot};
pub use engine::{PriceTables, Quotation, QuotationEngine, QuoteSettings, TierQuote};
pub use error::{QuoteError, QuoteResult, ValidationError};
pub use header::HeaderTemplate;
pub use machine::MachineType;
pub use money::Money;
pub use order::{ColourCount, Order, PrimaryAddOn, SecondaryAddOns, SecondaryKind, ThirdAddOn};
pub use table::{PriceCell, PriceRow, PriceTable, TableId};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Literal used by the price tables and the rendered quotation for a price
/// that cannot be offered.
pub const NOT_AVAILABLE: &str = "not available";

/// Surface finish sentinel meaning "no finishing at all".
///
/// Selecting it never produces a priced line.
pub const NO_FINISHING: &str = "no finishing (may cause colour rubbing issue)";

/// Secondary add-on sentinel meaning "not selected".
pub const NONE_SELECTION: &str = "none";

/// Currency prefix printed before every amount.
pub const CURRENCY: &str = "RM";
