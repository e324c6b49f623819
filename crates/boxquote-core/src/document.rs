//! # Quotation Document
//!
//! Structured form of the quotation text: one line per quantity tier, each
//! with named slots that pricing stages append fragments to.
//!
//! ## Slots and Tokens
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  <Header>                                                               │
//! │  500 pcs: RM120.00 Printing <Primary500><Secondary500><Third500>        │
//! │                             <ReadiedSizeDiscount500><Total500>          │
//! │                                                                         │
//! │  Stage                  Slot                 Stays open after append?   │
//! │  ─────                  ────                 ────────────────────────   │
//! │  primary add-on         Primary              no  (first match wins)     │
//! │  secondary add-ons      Secondary            yes (every add-on)         │
//! │  another side           Third                yes (printing + finish)    │
//! │  readied size           ReadiedSizeDiscount  yes                        │
//! │  finalize               Total                filled with the total      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Appending to a tier that has no line, or to a closed slot, is a silent
//! no-op: the stage's fragment is dropped and rendering continues.
//!
//! [`QuotationDocument::template`] shows the pending document in the token
//! grammar above; [`QuotationDocument::finalize`] renders the final text with
//! every token resolved or removed.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::accumulator::{Accumulator, RunningTotal};
use crate::money::Money;
use crate::table::PriceCell;

/// Line prefix for every tier.
pub const LINE_BULLET: &str = "📌 ";

// =============================================================================
// Slots
// =============================================================================

/// A per-tier slot that stages append into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    Primary,
    Secondary,
    Third,
    ReadiedSizeDiscount,
}

impl Slot {
    /// Render order within a line.
    pub const ALL: [Slot; 4] = [
        Slot::Primary,
        Slot::Secondary,
        Slot::Third,
        Slot::ReadiedSizeDiscount,
    ];

    /// Whether the slot accepts more fragments after the first.
    pub const fn stays_open(&self) -> bool {
        !matches!(self, Slot::Primary)
    }

    const fn index(&self) -> usize {
        match self {
            Slot::Primary => 0,
            Slot::Secondary => 1,
            Slot::Third => 2,
            Slot::ReadiedSizeDiscount => 3,
        }
    }
}

// =============================================================================
// Placeholder Tokens
// =============================================================================

/// A placeholder token such as `<Secondary500>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Placeholder {
    Header,
    Slot(Slot, u32),
    Total(u32),
}

impl fmt::Display for Placeholder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Placeholder::Header => f.write_str("<Header>"),
            Placeholder::Slot(Slot::Primary, qty) => write!(f, "<Primary{qty}>"),
            Placeholder::Slot(Slot::Secondary, qty) => write!(f, "<Secondary{qty}>"),
            Placeholder::Slot(Slot::Third, qty) => write!(f, "<Third{qty}>"),
            Placeholder::Slot(Slot::ReadiedSizeDiscount, qty) => {
                write!(f, "<ReadiedSizeDiscount{qty}>")
            }
            Placeholder::Total(qty) => write!(f, "<Total{qty}>"),
        }
    }
}

/// Token text that is not part of the placeholder grammar.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("not a placeholder token: '{0}'")]
pub struct ParsePlaceholderError(pub String);

impl FromStr for Placeholder {
    type Err = ParsePlaceholderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParsePlaceholderError(s.to_string());
        let inner = s
            .strip_prefix('<')
            .and_then(|rest| rest.strip_suffix('>'))
            .ok_or_else(err)?;

        if inner == "Header" {
            return Ok(Placeholder::Header);
        }

        let named: [(&str, fn(u32) -> Placeholder); 5] = [
            ("ReadiedSizeDiscount", |q| {
                Placeholder::Slot(Slot::ReadiedSizeDiscount, q)
            }),
            ("Secondary", |q| Placeholder::Slot(Slot::Secondary, q)),
            ("Primary", |q| Placeholder::Slot(Slot::Primary, q)),
            ("Third", |q| Placeholder::Slot(Slot::Third, q)),
            ("Total", Placeholder::Total),
        ];

        for (name, build) in named {
            if let Some(digits) = inner.strip_prefix(name) {
                if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
                    return Err(err());
                }
                let qty = digits.parse().map_err(|_| err())?;
                return Ok(build(qty));
            }
        }

        Err(err())
    }
}

// =============================================================================
// Fragments
// =============================================================================

/// A priced line item contributed by one stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment {
    /// `+ RM35.00 gloss lam 1side`
    Charge { price: PriceCell, label: String },
    /// `- 250.00 Readied Size`
    Discount { amount: Money, label: String },
}

impl Fragment {
    pub fn charge(price: PriceCell, label: impl Into<String>) -> Self {
        Fragment::Charge {
            price,
            label: label.into(),
        }
    }

    pub fn discount(amount: Money, label: impl Into<String>) -> Self {
        Fragment::Discount {
            amount,
            label: label.into(),
        }
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Fragment::Charge { price, label } => write!(f, "+ {price} {label}"),
            Fragment::Discount { amount, label } => write!(f, "- {amount} {label}"),
        }
    }
}

// =============================================================================
// Document
// =============================================================================

#[derive(Debug, Clone)]
struct TierLine {
    quantity: u32,
    base: PriceCell,
    slots: [Vec<Fragment>; 4],
}

impl TierLine {
    fn render_into(&self, out: &mut String, total: Option<RunningTotal>) {
        out.push_str(LINE_BULLET);
        out.push_str(&format!("{} pcs: {} Printing", self.quantity, self.base));
        for fragment in self.slots.iter().flatten() {
            out.push(' ');
            out.push_str(&fragment.to_string());
        }
        if let Some(total) = total {
            out.push_str(&format!(" = {total}\n"));
        }
        out.push('\n');
    }
}

/// Request-scoped quotation document.
#[derive(Debug, Clone, Default)]
pub struct QuotationDocument {
    lines: Vec<TierLine>,
}

impl QuotationDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the printing line for a tier. Lines render in insertion order.
    ///
    /// A tier without a printing price gets a "not available" base.
    pub fn push_line(&mut self, quantity: u32, base: Option<PriceCell>) {
        self.lines.push(TierLine {
            quantity,
            base: base.unwrap_or(PriceCell::NotAvailable),
            slots: Default::default(),
        });
    }

    /// Appends a fragment into a tier's slot.
    ///
    /// Returns `false` when the fragment was dropped: no line for the tier,
    /// or the slot is closed.
    pub fn append(&mut self, quantity: u32, slot: Slot, fragment: Fragment) -> bool {
        let Some(line) = self.lines.iter_mut().find(|l| l.quantity == quantity) else {
            return false;
        };

        let fragments = &mut line.slots[slot.index()];
        if !fragments.is_empty() && !slot.stays_open() {
            return false;
        }

        fragments.push(fragment);
        true
    }

    /// Fragments currently in a slot.
    pub fn fragments(&self, quantity: u32, slot: Slot) -> &[Fragment] {
        self.lines
            .iter()
            .find(|l| l.quantity == quantity)
            .map(|l| l.slots[slot.index()].as_slice())
            .unwrap_or(&[])
    }

    /// Base printing price of a tier's line.
    pub fn base(&self, quantity: u32) -> Option<PriceCell> {
        self.lines
            .iter()
            .find(|l| l.quantity == quantity)
            .map(|l| l.base)
    }

    /// The pending document in the placeholder grammar.
    ///
    /// Open slots keep their token after their fragments, a filled primary
    /// slot loses it.
    pub fn template(&self) -> String {
        let mut out = format!("{}\n", Placeholder::Header);
        for line in &self.lines {
            out.push_str(LINE_BULLET);
            out.push_str(&format!("{} pcs: {} Printing", line.quantity, line.base));
            for slot in Slot::ALL {
                let fragments = &line.slots[slot.index()];
                for fragment in fragments {
                    out.push_str(&format!(" {fragment}"));
                }
                if fragments.is_empty() || slot.stays_open() {
                    out.push_str(&Placeholder::Slot(slot, line.quantity).to_string());
                }
            }
            out.push_str(&Placeholder::Total(line.quantity).to_string());
            out.push('\n');
        }
        out
    }

    /// Renders the final quotation text.
    ///
    /// Totals come from `totals` (visited in its string key order); the
    /// header replaces `<Header>`; empty slots leave nothing behind. A tier
    /// missing from `totals` renders without a total.
    pub fn finalize(&self, header: &str, totals: &Accumulator) -> String {
        let resolved: HashMap<&str, RunningTotal> = totals.iter().collect();

        let mut out = String::with_capacity(header.len() + self.lines.len() * 96);
        out.push_str(header);
        out.push('\n');
        for line in &self.lines {
            let tier = line.quantity.to_string();
            line.render_into(&mut out, resolved.get(tier.as_str()).copied());
        }
        out
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn rm(cents: i64) -> PriceCell {
        PriceCell::Amount(Money::from_cents(cents))
    }

    #[test]
    fn test_placeholder_display() {
        assert_eq!(Placeholder::Header.to_string(), "<Header>");
        assert_eq!(
            Placeholder::Slot(Slot::Secondary, 500).to_string(),
            "<Secondary500>"
        );
        assert_eq!(
            Placeholder::Slot(Slot::ReadiedSizeDiscount, 1000).to_string(),
            "<ReadiedSizeDiscount1000>"
        );
        assert_eq!(Placeholder::Total(200).to_string(), "<Total200>");
    }

    #[test]
    fn test_placeholder_parse() {
        assert_eq!(
            "<Third1500>".parse::<Placeholder>().unwrap(),
            Placeholder::Slot(Slot::Third, 1500)
        );
        assert_eq!(
            "<Header>".parse::<Placeholder>().unwrap(),
            Placeholder::Header
        );
        assert!("<Total>".parse::<Placeholder>().is_err());
        assert!("<Totalx1>".parse::<Placeholder>().is_err());
        assert!("Primary500".parse::<Placeholder>().is_err());
        assert!("<Footer500>".parse::<Placeholder>().is_err());
    }

    #[test]
    fn test_secondary_slot_collects_every_fragment() {
        let mut doc = QuotationDocument::new();
        doc.push_line(500, Some(rm(12000)));

        assert!(doc.append(500, Slot::Secondary, Fragment::charge(rm(8000), "hot stamping")));
        assert!(doc.append(500, Slot::Secondary, Fragment::charge(rm(1500), "string")));
        assert_eq!(doc.fragments(500, Slot::Secondary).len(), 2);
    }

    #[test]
    fn test_primary_slot_closes_after_first_fragment() {
        let mut doc = QuotationDocument::new();
        doc.push_line(500, Some(rm(12000)));

        assert!(doc.append(500, Slot::Primary, Fragment::charge(rm(3500), "gloss lam 1side")));
        assert!(!doc.append(500, Slot::Primary, Fragment::charge(rm(3600), "gloss lam 1side")));
        assert_eq!(doc.fragments(500, Slot::Primary).len(), 1);
    }

    #[test]
    fn test_append_to_missing_tier_is_noop() {
        let mut doc = QuotationDocument::new();
        doc.push_line(500, Some(rm(12000)));

        assert!(!doc.append(300, Slot::Third, Fragment::charge(rm(100), "x")));
        assert!(doc.fragments(300, Slot::Third).is_empty());
    }

    #[test]
    fn test_template_keeps_open_tokens() {
        let mut doc = QuotationDocument::new();
        doc.push_line(500, Some(rm(12000)));
        doc.append(500, Slot::Primary, Fragment::charge(rm(3500), "gloss lam 1side"));
        doc.append(500, Slot::Secondary, Fragment::charge(rm(8000), "hot stamping"));

        let template = doc.template();
        assert!(template.starts_with("<Header>\n"));
        assert!(!template.contains("<Primary500>"));
        assert!(template.contains("+ RM80.00 hot stamping<Secondary500>"));
        assert!(template.contains("<Third500><ReadiedSizeDiscount500><Total500>"));
    }

    #[test]
    fn test_finalize_resolves_every_token() {
        let mut doc = QuotationDocument::new();
        doc.push_line(500, Some(rm(12000)));
        doc.push_line(1000, None);
        doc.append(500, Slot::ReadiedSizeDiscount, Fragment::discount(Money::from_major(150), "Readied Size"));

        let mut totals = Accumulator::new();
        totals.initialize("500", rm(12000));
        totals.subtract("500", Money::from_major(150)).unwrap();
        totals.mark_unavailable("1000");

        let text = doc.finalize("HEADER", &totals);
        assert!(text.starts_with("HEADER\n"));
        assert!(text.contains("500 pcs: RM120.00 Printing - 150.00 Readied Size = RM-30.00\n"));
        assert!(text.contains("1000 pcs: not available Printing = not available\n"));
        assert!(!text.contains('<'));
    }
}
