//! # Order Types
//!
//! The box printing order as submitted by the order form.
//!
//! ## Order Shape
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                              Order                                      │
//! │                                                                         │
//! │  sizeCategory: "A4"            quantity: [500, 1000]                    │
//! │  material: "art card 300gsm"   noOfColours: "1colour"                   │
//! │  readiedSize: false                                                     │
//! │                                                                         │
//! │  ┌────────────────┐  ┌──────────────────────────┐  ┌─────────────────┐ │
//! │  │ primaryAddOns  │  │ secondaryAddOns          │  │ thirdAddOns     │ │
//! │  │ ─────────────  │  │ ───────────────────────  │  │ ─────────────── │ │
//! │  │ surface finish │  │ window hole (no sheet)   │  │ isDoubleSide    │ │
//! │  │ (one value)    │  │ window hole (with sheet) │  │ finishing on    │ │
//! │  │                │  │ hot stamping             │  │ another side    │ │
//! │  │                │  │ emboss / deboss          │  │                 │ │
//! │  │                │  │ string                   │  │                 │ │
//! │  │                │  │ spot uv 1side            │  │                 │ │
//! │  └────────────────┘  └──────────────────────────┘  └─────────────────┘ │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Field names on the wire match the order form's JSON.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::ValidationError;
use crate::{NONE_SELECTION, NO_FINISHING};

// =============================================================================
// Colour Count
// =============================================================================

/// Number of printed colours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum ColourCount {
    /// Blank box, nothing printed.
    #[serde(rename = "0colour")]
    Zero,
    /// Single process colour.
    #[serde(rename = "1colour")]
    One,
    /// Full CMYK.
    #[serde(rename = "4colours")]
    Four,
}

impl ColourCount {
    /// All colour counts in catalog order.
    pub const ALL: [ColourCount; 3] = [ColourCount::Zero, ColourCount::One, ColourCount::Four];

    /// The key used in the printing tables.
    pub const fn as_str(&self) -> &'static str {
        match self {
            ColourCount::Zero => "0colour",
            ColourCount::One => "1colour",
            ColourCount::Four => "4colours",
        }
    }

    /// Customer-facing colour description for the quotation header.
    pub const fn description(&self) -> &'static str {
        match self {
            ColourCount::Zero => "no printing",
            ColourCount::One => "1colour printing (cyan / magenta / yellow / black)",
            ColourCount::Four => "colourful printing CMYK",
        }
    }
}

impl fmt::Display for ColourCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColourCount {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ColourCount::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| ValidationError::NotAllowed {
                field: "noOfColours".to_string(),
                allowed: ColourCount::ALL.iter().map(|c| c.to_string()).collect(),
            })
    }
}

// =============================================================================
// Add-ons
// =============================================================================

/// Surface protection finish on the printed side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase", default)]
pub struct PrimaryAddOn {
    pub surface_protection_printing: String,
}

impl PrimaryAddOn {
    /// True unless the "no finishing" sentinel is selected.
    pub fn is_finished(&self) -> bool {
        self.surface_protection_printing != NO_FINISHING
    }
}

impl Default for PrimaryAddOn {
    fn default() -> Self {
        PrimaryAddOn {
            surface_protection_printing: NO_FINISHING.to_string(),
        }
    }
}

/// The independent secondary finishes.
///
/// Declaration order is the order they are priced in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SecondaryKind {
    WindowHoleWithoutSheet,
    HotStamping,
    EmbossDeboss,
    String,
    WindowHoleWithSheet,
    SpotUv,
}

impl SecondaryKind {
    /// Pricing order.
    pub const PRICING_ORDER: [SecondaryKind; 6] = [
        SecondaryKind::WindowHoleWithoutSheet,
        SecondaryKind::HotStamping,
        SecondaryKind::EmbossDeboss,
        SecondaryKind::String,
        SecondaryKind::WindowHoleWithSheet,
        SecondaryKind::SpotUv,
    ];

    /// Order the finishes are listed in the quotation header.
    pub const HEADER_ORDER: [SecondaryKind; 6] = [
        SecondaryKind::WindowHoleWithoutSheet,
        SecondaryKind::WindowHoleWithSheet,
        SecondaryKind::HotStamping,
        SecondaryKind::EmbossDeboss,
        SecondaryKind::String,
        SecondaryKind::SpotUv,
    ];

    /// Label in column 0 of the add-on table, also printed on the quotation.
    pub const fn label(&self) -> &'static str {
        match self {
            SecondaryKind::WindowHoleWithoutSheet => "window hole without transparent pvc sheet",
            SecondaryKind::HotStamping => "hot stamping",
            SecondaryKind::EmbossDeboss => "emboss / deboss",
            SecondaryKind::String => "string",
            SecondaryKind::WindowHoleWithSheet => "window hole with transparent pvc sheet",
            SecondaryKind::SpotUv => "spot uv 1side",
        }
    }

    /// JSON field name, used in validation messages.
    pub const fn field(&self) -> &'static str {
        match self {
            SecondaryKind::WindowHoleWithoutSheet => "windowHoleWithoutTransparentPVCSheet",
            SecondaryKind::HotStamping => "hotstamping",
            SecondaryKind::EmbossDeboss => "embossDeboss",
            SecondaryKind::String => "string",
            SecondaryKind::WindowHoleWithSheet => "windowHoleWithTransparentPVCSheet",
            SecondaryKind::SpotUv => "spotUV1Side",
        }
    }
}

/// Secondary finishes. Each is `"none"` or a selected option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(default)]
pub struct SecondaryAddOns {
    #[serde(rename = "spotUV1Side")]
    pub spot_uv_1side: String,
    #[serde(rename = "windowHoleWithoutTransparentPVCSheet")]
    pub window_hole_without_sheet: String,
    #[serde(rename = "windowHoleWithTransparentPVCSheet")]
    pub window_hole_with_sheet: String,
    #[serde(rename = "hotstamping")]
    pub hot_stamping: String,
    #[serde(rename = "embossDeboss")]
    pub emboss_deboss: String,
    #[serde(rename = "string")]
    pub string: String,
}

impl SecondaryAddOns {
    /// Returns the raw selection for one finish.
    pub fn selection(&self, kind: SecondaryKind) -> &str {
        match kind {
            SecondaryKind::WindowHoleWithoutSheet => &self.window_hole_without_sheet,
            SecondaryKind::HotStamping => &self.hot_stamping,
            SecondaryKind::EmbossDeboss => &self.emboss_deboss,
            SecondaryKind::String => &self.string,
            SecondaryKind::WindowHoleWithSheet => &self.window_hole_with_sheet,
            SecondaryKind::SpotUv => &self.spot_uv_1side,
        }
    }

    /// Returns true if the finish is selected.
    pub fn is_active(&self, kind: SecondaryKind) -> bool {
        self.selection(kind) != NONE_SELECTION
    }

    /// Active finishes with their selections, in pricing order.
    pub fn active(&self) -> impl Iterator<Item = (SecondaryKind, &str)> + '_ {
        SecondaryKind::PRICING_ORDER
            .into_iter()
            .filter(|kind| self.is_active(*kind))
            .map(|kind| (kind, self.selection(kind)))
    }
}

impl Default for SecondaryAddOns {
    fn default() -> Self {
        SecondaryAddOns {
            spot_uv_1side: NONE_SELECTION.to_string(),
            window_hole_without_sheet: NONE_SELECTION.to_string(),
            window_hole_with_sheet: NONE_SELECTION.to_string(),
            hot_stamping: NONE_SELECTION.to_string(),
            emboss_deboss: NONE_SELECTION.to_string(),
            string: NONE_SELECTION.to_string(),
        }
    }
}

/// Double side printing and the finish on the second side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase", default)]
pub struct ThirdAddOn {
    pub is_double_side: bool,
    pub finishing_another_side: String,
}

impl Default for ThirdAddOn {
    fn default() -> Self {
        ThirdAddOn {
            is_double_side: false,
            finishing_another_side: NO_FINISHING.to_string(),
        }
    }
}

// =============================================================================
// Order
// =============================================================================

/// A quotation request.
///
/// ## Invariants
/// - `quantities` is non-empty and every tier is positive
/// - tiers are expected in ascending order (machine type depends on it)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub size_category: String,

    /// Quantity tiers in display order.
    #[serde(rename = "quantity")]
    pub quantities: Vec<u32>,

    pub material: String,

    #[serde(rename = "noOfColours")]
    pub colour_count: ColourCount,

    /// Pre-cut standard size (discounted) instead of a custom shape.
    #[serde(default)]
    pub readied_size: bool,

    #[serde(rename = "primaryAddOns", default)]
    pub primary_add_on: PrimaryAddOn,

    #[serde(rename = "secondaryAddOns", default)]
    pub secondary_add_ons: SecondaryAddOns,

    #[serde(rename = "thirdAddOns", default)]
    pub third_add_on: ThirdAddOn,
}

impl Order {
    /// True when a second printed side is priced.
    ///
    /// A blank box has nothing to print on the other side.
    pub fn prints_another_side(&self) -> bool {
        self.third_add_on.is_double_side && self.colour_count != ColourCount::Zero
    }

    /// True when the second side carries a finish.
    pub fn finishes_another_side(&self) -> bool {
        self.prints_another_side() && self.third_add_on.finishing_another_side != NO_FINISHING
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn form_json() -> &'static str {
        r#"{
            "sizeCategory": "A4",
            "quantity": [500, 1000],
            "material": "art card 300gsm",
            "noOfColours": "4colours",
            "readiedSize": true,
            "primaryAddOns": { "surfaceProtectionPrinting": "matt lam 1side" },
            "secondaryAddOns": {
                "spotUV1Side": "spotUV1side",
                "windowHoleWithoutTransparentPVCSheet": "none",
                "windowHoleWithTransparentPVCSheet": "within 45mm x 45mm",
                "hotstamping": "none",
                "embossDeboss": "none",
                "string": "12inch"
            },
            "thirdAddOns": {
                "isDoubleSide": true,
                "finishingAnotherSide": "uv varnish 1side"
            }
        }"#
    }

    #[test]
    fn test_order_from_form_json() {
        let order: Order = serde_json::from_str(form_json()).unwrap();

        assert_eq!(order.size_category, "A4");
        assert_eq!(order.quantities, vec![500, 1000]);
        assert_eq!(order.colour_count, ColourCount::Four);
        assert!(order.readied_size);
        assert!(order.primary_add_on.is_finished());
        assert!(order.prints_another_side());
        assert!(order.finishes_another_side());
    }

    #[test]
    fn test_missing_add_ons_default_to_none() {
        let order: Order = serde_json::from_str(
            r#"{"sizeCategory":"A5","quantity":[100],"material":"boxboard 300gsm","noOfColours":"1colour"}"#,
        )
        .unwrap();

        assert!(!order.readied_size);
        assert!(!order.primary_add_on.is_finished());
        assert_eq!(order.secondary_add_ons.active().count(), 0);
        assert!(!order.prints_another_side());
    }

    #[test]
    fn test_active_secondary_in_pricing_order() {
        let order: Order = serde_json::from_str(form_json()).unwrap();
        let active: Vec<_> = order.secondary_add_ons.active().collect();

        assert_eq!(
            active,
            vec![
                (SecondaryKind::String, "12inch"),
                (SecondaryKind::WindowHoleWithSheet, "within 45mm x 45mm"),
                (SecondaryKind::SpotUv, "spotUV1side"),
            ]
        );
    }

    #[test]
    fn test_blank_box_never_prints_another_side() {
        let mut order: Order = serde_json::from_str(form_json()).unwrap();
        order.colour_count = ColourCount::Zero;

        assert!(!order.prints_another_side());
        assert!(!order.finishes_another_side());
    }

    #[test]
    fn test_colour_count_round_trip_names() {
        assert_eq!("4colours".parse::<ColourCount>().unwrap(), ColourCount::Four);
        assert!("2colours".parse::<ColourCount>().is_err());
        assert_eq!(
            serde_json::to_string(&ColourCount::Zero).unwrap(),
            "\"0colour\""
        );
    }
}
