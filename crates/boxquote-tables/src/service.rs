//! # Quote Service
//!
//! Answers one quotation request end to end.
//!
//! ```text
//! Order
//!   │ validate_against_catalog
//!   ▼
//! ┌────────────────────── try_join! ──────────────────────┐
//! │ read(Printing)    read(AddOns)    read(DoubleSide)     │
//! └───────────────────────────┬───────────────────────────┘
//!                             ▼ PriceTables
//!                 QuotationEngine::assemble
//!                             ▼
//!                         Quotation
//! ```
//!
//! The regions are independent, so they are read concurrently. The first
//! failed read fails the request.

use std::sync::Arc;
use tracing::{info, instrument};

use boxquote_core::validation::validate_against_catalog;
use boxquote_core::{Order, PriceTables, Quotation, QuotationEngine, QuoteResult, TableId};

use crate::reader::TableReader;

/// Quotation front door: catalog validation, table reads, assembly.
#[derive(Debug)]
pub struct QuoteService<R> {
    engine: QuotationEngine,
    reader: Arc<R>,
}

impl<R> Clone for QuoteService<R> {
    fn clone(&self) -> Self {
        QuoteService {
            engine: self.engine.clone(),
            reader: Arc::clone(&self.reader),
        }
    }
}

impl<R: TableReader> QuoteService<R> {
    pub fn new(engine: QuotationEngine, reader: Arc<R>) -> Self {
        QuoteService { engine, reader }
    }

    pub fn engine(&self) -> &QuotationEngine {
        &self.engine
    }

    /// Reads all three regions.
    pub async fn load_tables(&self) -> QuoteResult<PriceTables> {
        let (printing, add_ons, double_side_printing) = tokio::try_join!(
            self.reader.read(TableId::Printing),
            self.reader.read(TableId::AddOns),
            self.reader.read(TableId::DoubleSidePrinting),
        )?;

        Ok(PriceTables {
            printing,
            add_ons,
            double_side_printing,
        })
    }

    /// Validates, reads and prices an order.
    ///
    /// ## Errors
    /// - `QuoteError::Validation` when a selection is not in the catalog
    /// - `QuoteError::TableUnavailable` when any region cannot be read
    /// - anything [`QuotationEngine::assemble`] returns
    #[instrument(skip_all, fields(size = %order.size_category))]
    pub async fn quote(&self, order: &Order) -> QuoteResult<Quotation> {
        validate_against_catalog(order, &self.engine.settings().catalog)?;

        let tables = self.load_tables().await?;
        let quotation = self.engine.assemble(order, &tables)?;

        info!(id = %quotation.id, tiers = quotation.tiers.len(), "Quote ready");
        Ok(quotation)
    }

    /// The quotation text alone.
    pub async fn quote_text(&self, order: &Order) -> QuoteResult<String> {
        Ok(self.quote(order).await?.text)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::json::JsonDirectoryReader;
    use crate::memory::InMemoryReader;
    use boxquote_core::{
        ColourCount, PriceTable, PrimaryAddOn, QuoteError, QuoteSettings, RunningTotal,
        SecondaryAddOns, ThirdAddOn,
    };

    fn order() -> Order {
        Order {
            size_category: "A4".to_string(),
            quantities: vec![500, 1000],
            material: "art card 300gsm".to_string(),
            colour_count: ColourCount::One,
            readied_size: true,
            primary_add_on: PrimaryAddOn {
                surface_protection_printing: "gloss lam 1side".to_string(),
            },
            secondary_add_ons: SecondaryAddOns::default(),
            third_add_on: ThirdAddOn::default(),
        }
    }

    fn reader() -> InMemoryReader {
        InMemoryReader::new()
            .with_table(PriceTable::from_rows(
                TableId::Printing,
                [
                    vec!["", "1colour", "art card 300gsm", "A4", "500", "300.00"],
                    vec!["", "1colour", "art card 300gsm", "A4", "1000", "420.00"],
                ],
            ))
            .with_table(PriceTable::from_rows(
                TableId::AddOns,
                [
                    vec!["gloss lam 1side", "A4", "500", "35.00", "60.00"],
                    vec!["gloss lam 1side", "A4", "1000", "55.00", "95.00"],
                ],
            ))
            .with_table(PriceTable::from_rows(
                TableId::DoubleSidePrinting,
                Vec::<Vec<&str>>::new(),
            ))
    }

    fn service(reader: InMemoryReader) -> QuoteService<InMemoryReader> {
        QuoteService::new(
            QuotationEngine::new(Arc::new(QuoteSettings::default())),
            Arc::new(reader),
        )
    }

    #[tokio::test]
    async fn test_quote_end_to_end() {
        let quotation = service(reader()).quote(&order()).await.unwrap();

        // 300 + 35 - 150 and 420 + 55 - 150
        assert_eq!(quotation.tiers[0].total.to_string(), "RM185.00");
        assert_eq!(quotation.tiers[1].total.to_string(), "RM325.00");
        assert!(quotation.text.contains("[ Readied Size Shape ]"));
        assert!(quotation.text.contains("art card 300gsm + gloss lam 1side\n"));
    }

    #[tokio::test]
    async fn test_catalog_rejects_unknown_material() {
        let mut order = order();
        order.material = "tissue paper".to_string();

        let err = service(reader()).quote(&order).await.unwrap_err();
        assert!(matches!(err, QuoteError::Validation(_)));
    }

    #[tokio::test]
    async fn test_missing_region_fails_request() {
        let reader = InMemoryReader::new().with_table(PriceTable::from_rows(
            TableId::Printing,
            [vec!["", "1colour", "art card 300gsm", "A4", "500", "300.00"]],
        ));

        let err = service(reader).quote(&order()).await.unwrap_err();
        assert!(matches!(err, QuoteError::TableUnavailable { .. }));
    }

    #[tokio::test]
    async fn test_tables_swapped_between_requests() {
        let reader = Arc::new(reader());
        let service = QuoteService::new(QuotationEngine::default(), Arc::clone(&reader));

        let first = service.quote(&order()).await.unwrap();
        assert!(first.tiers[0].total.is_available());

        reader
            .replace(PriceTable::from_rows(
                TableId::Printing,
                [vec!["", "1colour", "art card 300gsm", "A4", "500", "not available"]],
            ))
            .await;

        let second = service.quote(&order()).await.unwrap();
        assert_eq!(second.tiers[0].total, RunningTotal::Unavailable);
        assert_eq!(second.tiers[1].total, RunningTotal::Unavailable);
    }

    #[tokio::test]
    async fn test_quote_from_json_directory() {
        let dir = tempfile::tempdir().unwrap();
        let files = [
            (
                "printing_raw.json",
                r#"{"range":"printing_raw","values":[
                    ["Printing"],
                    ["", "1colour", "art card 300gsm", "A4", 500, "300.00"],
                    ["", "1colour", "art card 300gsm", "A4", 1000, "not available"]
                ]}"#,
            ),
            (
                "primary_secondary_addon_raw.json",
                r#"{"values":[["gloss lam 1side", "A4", 500, 35, 60]]}"#,
            ),
            ("third_addon_raw.json", r#"{"range":"third_addon_raw"}"#),
        ];
        for (name, body) in files {
            tokio::fs::write(dir.path().join(name), body).await.unwrap();
        }

        let service = QuoteService::new(
            QuotationEngine::default(),
            Arc::new(JsonDirectoryReader::new(dir.path())),
        );
        let text = service.quote_text(&order()).await.unwrap();

        assert!(text.contains(
            "500 pcs: RM300.00 Printing + RM35.00 gloss lam 1side - 150.00 Readied Size = RM185.00\n"
        ));
        assert!(text.contains(
            "1000 pcs: not available Printing - 150.00 Readied Size = not available\n"
        ));
    }

    #[tokio::test]
    async fn test_unavailable_tier_in_breakdown() {
        let reader = InMemoryReader::new()
            .with_table(PriceTable::from_rows(
                TableId::Printing,
                [vec!["", "1colour", "art card 300gsm", "A4", "500", "300.00"]],
            ))
            .with_table(PriceTable::from_rows(TableId::AddOns, Vec::<Vec<&str>>::new()))
            .with_table(PriceTable::from_rows(
                TableId::DoubleSidePrinting,
                Vec::<Vec<&str>>::new(),
            ));

        let quotation = service(reader).quote(&order()).await.unwrap();
        assert_eq!(quotation.tiers[1].total, RunningTotal::Unavailable);
    }
}
