//! # Quotation Header
//!
//! The block of text above the tier lines. Fixed wording lives in a
//! configurable [`HeaderTemplate`]; everything else comes from the order.
//!
//! ```text
//! *QUOTATION : BOX PRINTING : A4 *
//! product : box
//! machine : litho offset                     ◄── MachineType
//! shape : ...                                ◄── template
//! material : (see below)
//! finishing : ...                            ◄── template
//! quantity : (see below) ...                 ◄── template
//! print side : Double Side Printing (4colours x 4colours)
//! colour : colourful printing CMYK           ◄── ColourCount
//! print process : ...                        ◄── template
//!
//!
//! estimated price :
//! [ Readied Size Shape ]
//! art card 300gsm + matt lam 1side + hot stamping within 16 square inch
//! ```

use serde::{Deserialize, Serialize};

use crate::machine::MachineType;
use crate::order::{Order, SecondaryKind};

/// Fixed header wording.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeaderTemplate {
    pub product: String,
    pub shape: String,
    pub finishing: String,
    /// Appended after "quantity : (see below)".
    pub quantity_note: String,
    pub print_process: String,
}

impl Default for HeaderTemplate {
    fn default() -> Self {
        HeaderTemplate {
            product: "box".to_string(),
            shape: "shape such like open lid / hinged / cake / top bottom / drawer & etc"
                .to_string(),
            finishing: "die cut / die cut + gluing".to_string(),
            quantity_note: "For quantity more than 2000pcs, please contact us to request \
                            quotation due to paper price fluctuation issue."
                .to_string(),
            print_process: "6-7days (art card) / 8-10days (with beautify finishing) / \
                            13-14days (carton material) excluded sat, sun, public holiday \
                            & pre-preparation works"
                .to_string(),
        }
    }
}

impl HeaderTemplate {
    /// Builds the header for an order. Ends with a newline.
    pub fn render(&self, order: &Order, machine: MachineType) -> String {
        let print_side = if order.third_add_on.is_double_side {
            "Double Side Printing"
        } else {
            "Single Side Printing"
        };
        let shape = if order.readied_size {
            "Readied Size Shape"
        } else {
            "Customed Size Shape"
        };
        let colour = order.colour_count;

        format!(
            "*QUOTATION : BOX PRINTING : {size} *\n\
             product : {product}\n\
             machine : {machine}\n\
             shape : {shape_note}\n\
             material : (see below)\n\
             finishing : {finishing}\n\
             quantity : (see below) {quantity_note}\n\
             print side : {print_side} ({colour} x {colour})\n\
             colour : {colour_desc}\n\
             print process : {print_process}\n\
             \n\
             \n\
             estimated price :\n\
             [ {shape} ] \n\
             {summary}\n",
            size = order.size_category,
            product = self.product,
            shape_note = self.shape,
            finishing = self.finishing,
            quantity_note = self.quantity_note,
            colour_desc = colour.description(),
            print_process = self.print_process,
            summary = add_on_summary(order),
        )
    }
}

/// Material followed by every selected add-on, `" + "` separated.
pub fn add_on_summary(order: &Order) -> String {
    let mut summary = order.material.clone();

    if order.primary_add_on.is_finished() {
        summary.push_str(" + ");
        summary.push_str(&order.primary_add_on.surface_protection_printing);
    }

    for kind in SecondaryKind::HEADER_ORDER {
        if !order.secondary_add_ons.is_active(kind) {
            continue;
        }
        summary.push_str(" + ");
        summary.push_str(kind.label());
        // Spot UV has a single option, its label says it all.
        if kind != SecondaryKind::SpotUv {
            summary.push(' ');
            summary.push_str(order.secondary_add_ons.selection(kind));
        }
    }

    if order.prints_another_side() {
        summary.push_str(" + printing another side");
        if order.finishes_another_side() {
            summary.push_str(" + ");
            summary.push_str(&order.third_add_on.finishing_another_side);
            summary.push_str(" another side");
        }
    }

    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::order::{ColourCount, PrimaryAddOn, SecondaryAddOns, ThirdAddOn};

    fn order() -> Order {
        Order {
            size_category: "A4".to_string(),
            quantities: vec![500, 1000],
            material: "art card 300gsm".to_string(),
            colour_count: ColourCount::One,
            readied_size: false,
            primary_add_on: PrimaryAddOn::default(),
            secondary_add_ons: SecondaryAddOns::default(),
            third_add_on: ThirdAddOn::default(),
        }
    }

    #[test]
    fn test_plain_order_header() {
        let header = HeaderTemplate::default().render(&order(), MachineType::Mixed);

        assert!(header.starts_with("*QUOTATION : BOX PRINTING : A4 *\nproduct : box\n"));
        assert!(header.contains(
            "machine : litho offset (1000pcs & above), digital offset (10-500pcs)\n"
        ));
        assert!(header.contains("print side : Single Side Printing (1colour x 1colour)\n"));
        assert!(header.contains("colour : 1colour printing (cyan / magenta / yellow / black)\n"));
        assert!(header.ends_with("[ Customed Size Shape ] \nart card 300gsm\n"));
    }

    #[test]
    fn test_summary_lists_selected_add_ons() {
        let mut order = order();
        order.colour_count = ColourCount::Four;
        order.primary_add_on.surface_protection_printing = "matt lam 1side".to_string();
        order.secondary_add_ons.hot_stamping = "within 16 square inch".to_string();
        order.secondary_add_ons.window_hole_with_sheet = "within 4 square inch".to_string();
        order.secondary_add_ons.spot_uv_1side = "spotUV1side".to_string();
        order.third_add_on.is_double_side = true;
        order.third_add_on.finishing_another_side = "matt lam 1side".to_string();

        assert_eq!(
            add_on_summary(&order),
            "art card 300gsm + matt lam 1side \
             + window hole with transparent pvc sheet within 4 square inch \
             + hot stamping within 16 square inch + spot uv 1side \
             + printing another side + matt lam 1side another side"
        );
    }

    #[test]
    fn test_blank_box_never_prints_another_side() {
        let mut order = order();
        order.colour_count = ColourCount::Zero;
        order.third_add_on.is_double_side = true;

        let header = HeaderTemplate::default().render(&order, MachineType::Litho);
        assert!(header.contains("print side : Double Side Printing (0colour x 0colour)\n"));
        assert!(!header.contains("printing another side"));
    }

    #[test]
    fn test_readied_size_shape() {
        let mut order = order();
        order.readied_size = true;
        let header = HeaderTemplate::default().render(&order, MachineType::Litho);
        assert!(header.contains("[ Readied Size Shape ] \n"));
    }
}
