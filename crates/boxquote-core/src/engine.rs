//! # Quotation Engine
//!
//! Joins an [`Order`] against the three price tables and renders the
//! quotation.
//!
//! ## Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        assemble(order, tables)                          │
//! │                                                                         │
//! │  0. validate_order_shape                                               │
//! │  1. base printing      printing table      → line + initialize         │
//! │  2. primary add-on     add-on table        → Primary slot              │
//! │  3. secondary add-ons  add-on table        → Secondary slot            │
//! │  4. another side       double side table   → Third slot                │
//! │  5. finish other side  add-on table        → Third slot                │
//! │  6. readied size       DiscountTable       → ReadiedSizeDiscount slot  │
//! │  7. finalize           MachineType + HeaderTemplate → text             │
//! │                                                                         │
//! │  Every stage writes the same two things: a fragment into the           │
//! │  QuotationDocument and a delta into the Accumulator.                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A lookup miss is never an error. A malformed matched price cell aborts the
//! whole request and no partial quotation is returned.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::accumulator::{Accumulator, RunningTotal};
use crate::catalog::Catalog;
use crate::discount::DiscountTable;
use crate::document::{Fragment, QuotationDocument, Slot};
use crate::error::QuoteResult;
use crate::header::HeaderTemplate;
use crate::machine::MachineType;
use crate::matcher::match_rows;
use crate::order::{Order, SecondaryKind};
use crate::table::{AddOnRow, PriceCell, PriceTable, PrintingRow};
use crate::validation::validate_order_shape;

const PRINTING_ANOTHER_SIDE: &str = "printing another side";
const READIED_SIZE: &str = "Readied Size";

// =============================================================================
// Inputs
// =============================================================================

/// The three table regions one quotation reads.
#[derive(Debug, Clone)]
pub struct PriceTables {
    pub printing: PriceTable,
    pub add_ons: PriceTable,
    pub double_side_printing: PriceTable,
}

/// Read-only settings shared by every request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuoteSettings {
    pub catalog: Catalog,
    pub discounts: DiscountTable,
    pub header: HeaderTemplate,
}

// =============================================================================
// Output
// =============================================================================

/// Price breakdown of one quantity tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierQuote {
    pub quantity: u32,
    pub base: PriceCell,
    pub total: RunningTotal,
}

/// A finished quotation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quotation {
    pub id: Uuid,
    pub issued_at: DateTime<Utc>,
    pub size_category: String,
    pub machine: MachineType,
    /// Tiers in order of the request.
    pub tiers: Vec<TierQuote>,
    /// The customer-facing text.
    pub text: String,
}

// =============================================================================
// Engine
// =============================================================================

/// Request-scoped state threaded through the stages.
struct Assembly<'a> {
    order: &'a Order,
    tables: &'a PriceTables,
    document: QuotationDocument,
    totals: Accumulator,
}

/// Stateless quotation pipeline. Cheap to clone, safe to share.
#[derive(Debug, Clone, Default)]
pub struct QuotationEngine {
    settings: Arc<QuoteSettings>,
}

impl QuotationEngine {
    pub fn new(settings: Arc<QuoteSettings>) -> Self {
        QuotationEngine { settings }
    }

    pub fn settings(&self) -> &QuoteSettings {
        &self.settings
    }

    /// Prices `order` against `tables`.
    ///
    /// ## Errors
    /// - `QuoteError::Validation` for empty, zero or repeated tiers
    /// - `QuoteError::MalformedPriceCell` when a matched cell is not a price
    /// - `QuoteError::TotalOverflow` when a tier sum leaves the sen range
    /// - `QuoteError::UnclassifiableMachineType` for unsorted tier boundaries
    pub fn assemble(&self, order: &Order, tables: &PriceTables) -> QuoteResult<Quotation> {
        validate_order_shape(order)?;

        info!(
            size = %order.size_category,
            material = %order.material,
            tiers = order.quantities.len(),
            "Assembling quotation"
        );

        let mut job = Assembly {
            order,
            tables,
            document: QuotationDocument::new(),
            totals: Accumulator::new(),
        };

        self.price_base(&mut job)?;
        self.price_primary(&mut job)?;
        self.price_secondary(&mut job)?;
        self.price_another_side(&mut job)?;
        self.price_another_side_finish(&mut job)?;
        self.apply_readied_size_discount(&mut job)?;

        let quotation = self.finalize(job)?;
        info!(
            id = %quotation.id,
            machine = %quotation.machine,
            "Quotation assembled"
        );
        Ok(quotation)
    }

    /// Stage 1: one line per tier with its printing price.
    fn price_base(&self, job: &mut Assembly<'_>) -> QuoteResult<()> {
        let (order, tables) = (job.order, job.tables);
        let table = &tables.printing;

        for &quantity in &order.quantities {
            let tier = quantity.to_string();
            let mut matches = match_rows::<PrintingRow, _>(table, |row| {
                row.colour == order.colour_count.as_str()
                    && row.material == order.material
                    && row.size == order.size_category
                    && row.quantity == tier
            });

            let Some(row) = matches.next() else {
                debug!(tier = %tier, "No printing price, tier not available");
                job.document.push_line(quantity, None);
                job.totals.mark_unavailable(&tier);
                continue;
            };

            let base = row.price(table.id())?;
            if matches.next().is_some() {
                warn!(tier = %tier, "Printing table has duplicate rows, using the first");
            }
            job.document.push_line(quantity, Some(base));
            job.totals.initialize(&tier, base);
        }

        Ok(())
    }

    /// Stage 2: surface protection finish.
    fn price_primary(&self, job: &mut Assembly<'_>) -> QuoteResult<()> {
        let order = job.order;
        if !order.primary_add_on.is_finished() {
            return Ok(());
        }
        let finish = order.primary_add_on.surface_protection_printing.as_str();

        for &quantity in &order.quantities {
            let tier = quantity.to_string();
            let matches = match_rows::<AddOnRow, _>(&job.tables.add_ons, |row| {
                row.label == finish && row.spec == order.size_category && row.quantity == tier
            });

            for row in matches {
                let price = row.single_side_price()?;
                job.document
                    .append(quantity, Slot::Primary, Fragment::charge(price, finish));
                job.totals.add(&tier, price)?;
            }
        }

        debug!(finish, "Primary add-on priced");
        Ok(())
    }

    /// Stage 3: every active secondary finish, in pricing order.
    ///
    /// Spot UV rows are keyed by size category and priced from the double
    /// side column when both sides are printed.
    fn price_secondary(&self, job: &mut Assembly<'_>) -> QuoteResult<()> {
        let order = job.order;
        let double_side = order.third_add_on.is_double_side;

        for &quantity in &order.quantities {
            let tier = quantity.to_string();

            for (kind, selection) in order.secondary_add_ons.active() {
                let spec = match kind {
                    SecondaryKind::SpotUv => order.size_category.as_str(),
                    _ => selection,
                };
                let matches = match_rows::<AddOnRow, _>(&job.tables.add_ons, |row| {
                    row.label == kind.label() && row.spec == spec && row.quantity == tier
                });

                for row in matches {
                    let price = if kind == SecondaryKind::SpotUv && double_side {
                        row.double_side_price()?
                    } else {
                        row.single_side_price()?
                    };
                    job.document
                        .append(quantity, Slot::Secondary, Fragment::charge(price, kind.label()));
                    job.totals.add(&tier, price)?;
                }
            }
        }

        Ok(())
    }

    /// Stage 4: printing the second side.
    fn price_another_side(&self, job: &mut Assembly<'_>) -> QuoteResult<()> {
        let order = job.order;
        if !order.prints_another_side() {
            return Ok(());
        }
        let table = &job.tables.double_side_printing;

        for &quantity in &order.quantities {
            let tier = quantity.to_string();
            let matches = match_rows::<PrintingRow, _>(table, |row| {
                row.colour == order.colour_count.as_str()
                    && row.material == order.material
                    && row.size == order.size_category
                    && row.quantity == tier
            });

            for row in matches {
                let price = row.price(table.id())?;
                job.document.append(
                    quantity,
                    Slot::Third,
                    Fragment::charge(price, PRINTING_ANOTHER_SIDE),
                );
                job.totals.add(&tier, price)?;
            }
        }

        debug!("Another side printing priced");
        Ok(())
    }

    /// Stage 5: finish on the second side, from the double side column.
    fn price_another_side_finish(&self, job: &mut Assembly<'_>) -> QuoteResult<()> {
        let order = job.order;
        if !order.finishes_another_side() {
            return Ok(());
        }
        let finish = order.third_add_on.finishing_another_side.as_str();

        for &quantity in &order.quantities {
            let tier = quantity.to_string();
            let matches = match_rows::<AddOnRow, _>(&job.tables.add_ons, |row| {
                row.double_side.is_some()
                    && row.label == finish
                    && row.spec == order.size_category
                    && row.quantity == tier
            });

            for row in matches {
                let price = row.double_side_price()?;
                job.document
                    .append(quantity, Slot::Third, Fragment::charge(price, finish));
                job.totals.add(&tier, price)?;
            }
        }

        debug!(finish, "Another side finish priced");
        Ok(())
    }

    /// Stage 6: flat discount for pre-cut sizes.
    fn apply_readied_size_discount(&self, job: &mut Assembly<'_>) -> QuoteResult<()> {
        let order = job.order;
        if !order.readied_size {
            return Ok(());
        }
        let Some(discount) = self.settings.discounts.lookup(&order.size_category) else {
            debug!(size = %order.size_category, "No readied size discount for size");
            return Ok(());
        };

        for &quantity in &order.quantities {
            job.document.append(
                quantity,
                Slot::ReadiedSizeDiscount,
                Fragment::discount(discount, READIED_SIZE),
            );
            job.totals.subtract(&quantity.to_string(), discount)?;
        }
        Ok(())
    }

    /// Stage 7: header, totals and text.
    fn finalize(&self, job: Assembly<'_>) -> QuoteResult<Quotation> {
        let order = job.order;
        let machine = MachineType::classify(&order.quantities)?;
        let header = self.settings.header.render(order, machine);
        let text = job.document.finalize(&header, &job.totals);

        let tiers = order
            .quantities
            .iter()
            .map(|&quantity| TierQuote {
                quantity,
                base: job.document.base(quantity).unwrap_or(PriceCell::NotAvailable),
                total: job
                    .totals
                    .get(&quantity.to_string())
                    .unwrap_or(RunningTotal::Unavailable),
            })
            .collect();

        Ok(Quotation {
            id: Uuid::new_v4(),
            issued_at: Utc::now(),
            size_category: order.size_category.clone(),
            machine,
            tiers,
            text,
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
