//! # In-Memory Reader
//!
//! Holds tables in process. Tables can be swapped while requests are in
//! flight. Each `read` returns a whole copy of one table, old or new, never
//! a half-replaced one. The three regions are read separately, so a request
//! that races a `replace` can pair a new table with an old one.

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::debug;

use boxquote_core::{PriceTable, TableId};

use crate::error::{TableError, TableResult};
use crate::reader::TableReader;

#[derive(Debug, Default)]
pub struct InMemoryReader {
    tables: RwLock<HashMap<TableId, PriceTable>>,
}

impl InMemoryReader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`InMemoryReader::replace`] for setup code.
    pub fn with_table(self, table: PriceTable) -> Self {
        let mut tables = self.tables.into_inner();
        tables.insert(table.id(), table);
        InMemoryReader {
            tables: RwLock::new(tables),
        }
    }

    /// Installs or replaces a table.
    pub async fn replace(&self, table: PriceTable) {
        debug!(table = %table.id(), rows = table.rows().len(), "Replacing price table");
        self.tables.write().await.insert(table.id(), table);
    }
}

#[async_trait]
impl TableReader for InMemoryReader {
    async fn read(&self, id: TableId) -> TableResult<PriceTable> {
        self.tables
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or_else(|| TableError::NotFound {
                table: id.default_range().to_string(),
                location: "memory".to_string(),
            })
    }
}
