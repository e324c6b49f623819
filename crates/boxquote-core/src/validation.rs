//! # Validation Module
//!
//! Order validation before any table is read.
//!
//! ## Validation Layers
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Layer 1: Deserialization                                              │
//! │  └── colour count is an enum, quantities are unsigned                  │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: validate_order_shape (engine)                                │
//! │  └── tiers non-empty, positive, unique                                 │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: validate_against_catalog (quote service)                     │
//! │  └── every selection is one the order form offers                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::HashSet;

use crate::catalog::Catalog;
use crate::error::ValidationError;
use crate::order::{Order, SecondaryKind};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Checks the quantity tiers the engine relies on.
///
/// ## Rules
/// - at least one tier
/// - every tier is positive
/// - no tier appears twice (tiers key the running totals)
///
/// ## Example
/// ```rust
/// use boxquote_core::validation::validate_quantities;
///
/// assert!(validate_quantities(&[500, 1000]).is_ok());
/// assert!(validate_quantities(&[]).is_err());
/// assert!(validate_quantities(&[500, 500]).is_err());
/// ```
pub fn validate_quantities(quantities: &[u32]) -> ValidationResult<()> {
    if quantities.is_empty() {
        return Err(ValidationError::Required {
            field: "quantity".to_string(),
        });
    }

    let mut seen = HashSet::with_capacity(quantities.len());
    for &quantity in quantities {
        if quantity == 0 {
            return Err(ValidationError::MustBePositive {
                field: "quantity".to_string(),
            });
        }
        if !seen.insert(quantity) {
            return Err(ValidationError::Duplicate {
                field: "quantity".to_string(),
                value: quantity.to_string(),
            });
        }
    }

    Ok(())
}

/// Structural checks that need no catalog.
pub fn validate_order_shape(order: &Order) -> ValidationResult<()> {
    if order.size_category.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "sizeCategory".to_string(),
        });
    }
    if order.material.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "material".to_string(),
        });
    }
    validate_quantities(&order.quantities)
}

/// Checks every selection against the option catalog.
pub fn validate_against_catalog(order: &Order, catalog: &Catalog) -> ValidationResult<()> {
    validate_order_shape(order)?;

    one_of("sizeCategory", &order.size_category, &catalog.size_categories)?;
    one_of("material", &order.material, &catalog.materials)?;

    for &quantity in &order.quantities {
        if !catalog.quantities.contains(&quantity) {
            return Err(ValidationError::NotAllowed {
                field: "quantity".to_string(),
                allowed: catalog.quantities.iter().map(u32::to_string).collect(),
            });
        }
    }

    one_of(
        "surfaceProtectionPrinting",
        &order.primary_add_on.surface_protection_printing,
        &catalog.surface_protection_printing,
    )?;

    for kind in SecondaryKind::PRICING_ORDER {
        one_of(
            kind.field(),
            order.secondary_add_ons.selection(kind),
            catalog.secondary_options(kind),
        )?;
    }

    one_of(
        "finishingAnotherSide",
        &order.third_add_on.finishing_another_side,
        &catalog.finishing_another_side,
    )
}

fn one_of(field: &str, value: &str, allowed: &[String]) -> ValidationResult<()> {
    if allowed.iter().any(|option| option == value) {
        Ok(())
    } else {
        Err(ValidationError::NotAllowed {
            field: field.to_string(),
            allowed: allowed.to_vec(),
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
