//! # boxquote-tables: Price Table Sources
//!
//! Reads the price table regions and feeds them to the quotation engine.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        boxquote Data Flow                               │
//! │                                                                         │
//! │  boxquote CLI (quote order.json)                                       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 boxquote-tables (THIS CRATE)                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌────────────────┐    ┌──────────────┐  │   │
//! │  │   │ QuoteService  │───►│  TableReader   │◄───│ JSON files   │  │   │
//! │  │   │ (service.rs)  │    │  (reader.rs)   │    │ (json.rs)    │  │   │
//! │  │   │               │    │                │    ├──────────────┤  │   │
//! │  │   │ validate      │    │ read(TableId)  │◄───│ In memory    │  │   │
//! │  │   │ try_join!     │    │                │    │ (memory.rs)  │  │   │
//! │  │   └───────┬───────┘    └────────────────┘    └──────────────┘  │   │
//! │  └───────────┼─────────────────────────────────────────────────────┘   │
//! │              ▼                                                          │
//! │  boxquote-core QuotationEngine::assemble                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`reader`] - The `TableReader` trait and range names
//! - [`json`] - Directory of exported ranges
//! - [`memory`] - In-process tables
//! - [`service`] - Validation, concurrent reads, assembly
//! - [`error`] - Table error types
//!
//! ## Usage
//!
//! ```rust,ignore
//! use boxquote_tables::{JsonDirectoryReader, QuoteService};
//!
//! let reader = Arc::new(JsonDirectoryReader::new("./tables"));
//! let service = QuoteService::new(QuotationEngine::default(), reader);
//! let text = service.quote_text(&order).await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod json;
pub mod memory;
pub mod reader;
pub mod service;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{TableError, TableResult};
pub use json::JsonDirectoryReader;
pub use memory::InMemoryReader;
pub use reader::{TableNames, TableReader};
pub use service::QuoteService;
