//! # Table Reader
//!
//! The seam between the quotation engine and wherever the price tables live.
//!
//! ```text
//! QuoteService ──► dyn TableReader ──┬── JsonDirectoryReader  (exported sheet ranges)
//!                                    └── InMemoryReader       (tests, embedding)
//! ```

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use boxquote_core::{PriceTable, TableId};

use crate::error::TableResult;

/// Range name of each table region in the source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableNames {
    pub printing: String,
    pub add_ons: String,
    pub double_side_printing: String,
}

impl TableNames {
    pub fn name(&self, id: TableId) -> &str {
        match id {
            TableId::Printing => &self.printing,
            TableId::AddOns => &self.add_ons,
            TableId::DoubleSidePrinting => &self.double_side_printing,
        }
    }
}

impl Default for TableNames {
    fn default() -> Self {
        TableNames {
            printing: TableId::Printing.default_range().to_string(),
            add_ons: TableId::AddOns.default_range().to_string(),
            double_side_printing: TableId::DoubleSidePrinting.default_range().to_string(),
        }
    }
}

/// Source of price table regions.
///
/// Implementations are shared read-only across requests. Retries, if any,
/// belong to the implementation.
#[async_trait]
pub trait TableReader: Send + Sync {
    /// Reads every row of one region, in sheet order.
    async fn read(&self, id: TableId) -> TableResult<PriceTable>;
}
