//! # Machine Type
//!
//! Which press runs the job, decided by the first and last quantity tier.
//!
//! ```text
//!   first ≤ 500 and last ≤ 500   → digital offset / litho offset
//!   first < 500 and last ≥ 500   → litho offset (1000pcs & above), digital offset (10-500pcs)
//!   last > 500                   → litho offset
//!   anything else                → QuoteError::UnclassifiableMachineType
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{QuoteError, QuoteResult, ValidationError};

/// Small runs go digital, large runs go litho.
const DIGITAL_LIMIT: u32 = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MachineType {
    DigitalOrLitho,
    Mixed,
    Litho,
}

impl MachineType {
    /// Classifies ascending quantity tiers.
    ///
    /// ## Errors
    /// - empty tiers → `ValidationError::Required`
    /// - boundaries that fit no rule (unsorted tiers) →
    ///   `QuoteError::UnclassifiableMachineType`
    pub fn classify(quantities: &[u32]) -> QuoteResult<Self> {
        let (Some(&first), Some(&last)) = (quantities.first(), quantities.last()) else {
            return Err(ValidationError::Required {
                field: "quantity".to_string(),
            }
            .into());
        };

        if first <= DIGITAL_LIMIT && last <= DIGITAL_LIMIT {
            Ok(MachineType::DigitalOrLitho)
        } else if first < DIGITAL_LIMIT && last >= DIGITAL_LIMIT {
            Ok(MachineType::Mixed)
        } else if last > DIGITAL_LIMIT {
            Ok(MachineType::Litho)
        } else {
            Err(QuoteError::UnclassifiableMachineType { first, last })
        }
    }

    pub const fn label(&self) -> &'static str {
        match self {
            MachineType::DigitalOrLitho => "digital offset / litho offset",
            MachineType::Mixed => "litho offset (1000pcs & above), digital offset (10-500pcs)",
            MachineType::Litho => "litho offset",
        }
    }
}

impl fmt::Display for MachineType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
