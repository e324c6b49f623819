//! # Option Catalog
//!
//! The fixed option lists the order form offers. Loaded once at startup
//! (built-in defaults or the `[catalog]` section of the config file) and
//! shared read-only behind an `Arc`.

use serde::{Deserialize, Serialize};

use crate::order::SecondaryKind;
use crate::{NONE_SELECTION, NO_FINISHING};

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

/// Every option list an order is checked against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Catalog {
    pub materials: Vec<String>,
    pub size_categories: Vec<String>,
    pub quantities: Vec<u32>,
    pub surface_protection_printing: Vec<String>,
    pub window_hole_without_sheet: Vec<String>,
    pub window_hole_with_sheet: Vec<String>,
    pub hot_stamping: Vec<String>,
    pub emboss_deboss: Vec<String>,
    pub string: Vec<String>,
    pub spot_uv_1side: Vec<String>,
    pub finishing_another_side: Vec<String>,
}

impl Catalog {
    /// Options for one secondary finish.
    pub fn secondary_options(&self, kind: SecondaryKind) -> &[String] {
        match kind {
            SecondaryKind::WindowHoleWithoutSheet => &self.window_hole_without_sheet,
            SecondaryKind::HotStamping => &self.hot_stamping,
            SecondaryKind::EmbossDeboss => &self.emboss_deboss,
            SecondaryKind::String => &self.string,
            SecondaryKind::WindowHoleWithSheet => &self.window_hole_with_sheet,
            SecondaryKind::SpotUv => &self.spot_uv_1side,
        }
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Catalog {
            materials: strings(&[
                "art card 350gsm",
                "art card 300gsm",
                "art card 260gsm",
                "boxboard 350gsm",
                "boxboard 300gsm",
                "boxboard 260gsm",
                "carton box e flute wrapped by art card 250gsm : ac250/bt115(f)/bt150",
                "carton box e flute wrapped by boxboard 250gsm : bb250/bt115(f)/bt150",
                "carton box e flute wrapped by brown testliner 180gsm : bt180/bt125(f)/bt150",
                "carton box e flute wrapped by white testliner 175gsm : wt175/bt125(f)/bt150",
                "white coated kraft 350gsm",
                "white coated kraft 300gsm",
            ]),
            size_categories: strings(&["A2", "A3+", "A3", "A4+", "A4", "A5", "A5+"]),
            quantities: vec![100, 200, 300, 400, 500, 1000, 1500, 2000],
            surface_protection_printing: strings(&[
                NO_FINISHING,
                "water base normal 1side",
                "water base food grade 1side",
                "uv varnish 1side",
                "spot uv 1side",
                "gloss lam 1side",
                "matt lam 1side",
            ]),
            window_hole_without_sheet: strings(&[
                NONE_SELECTION,
                "within 3mm to 50mm",
                "within 90mm x 54mm",
                "within 148mm x 105mm",
                "within 210mm x 148mm",
                "within 222mm x 190mm",
                "within 297mm x 210mm",
                "within 300mm x 297mm",
                "within 420mm x 297mm",
            ]),
            window_hole_with_sheet: strings(&[
                NONE_SELECTION,
                "within 45mm x 45mm",
                "within 90mm x 54mm",
                "within 90mm x 90mm",
                "within 148mm x 210mm",
                "within 297mm x 210mm",
            ]),
            hot_stamping: strings(&[
                NONE_SELECTION,
                "within 16 square inch",
                "within 24 square inch",
                "within 32 square inch",
            ]),
            emboss_deboss: strings(&[
                NONE_SELECTION,
                "within 16 square inch",
                "within 24 square inch",
                "within 32 square inch",
            ]),
            string: strings(&[
                NONE_SELECTION,
                "12inch",
                "14inch",
                "16inch",
                "18inch",
                "20inch",
                "22inch",
                "24inch",
                "26inch",
                "28inch",
                "30inch",
            ]),
            spot_uv_1side: strings(&[NONE_SELECTION, "spotUV1side"]),
            finishing_another_side: strings(&[
                NO_FINISHING,
                "uv varnish 1side",
                "spot uv 1side",
                "water base normal 1side",
                "water base food grade 1side",
                "matt lam 1side",
                "gloss lam 1side",
            ]),
        }
    }
}
