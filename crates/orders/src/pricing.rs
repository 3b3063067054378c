//! VAT-aware price and total computation.
//!
//! All arithmetic is integer-only: a 10% markup over whole won is
//! `(amount × 11 + 5) / 10`, which rounds half away from zero exactly
//! without touching floating point.

use crimson_core::Won;

use crate::OrderLineItem;

/// VAT markup applied when the unit prices do not already include tax.
const VAT_NUMERATOR: u64 = 11;
const VAT_DENOMINATOR: u64 = 10;

/// Apply the VAT rule to an amount.
///
/// When `vat_included` the amount already carries the tax and is returned
/// verbatim. Otherwise it is scaled by 1.10 and rounded to the nearest
/// whole won, half away from zero.
pub fn vat_adjusted_price(amount: Won, vat_included: bool) -> Won {
    if vat_included {
        return amount;
    }
    Won((amount.0 * VAT_NUMERATOR + VAT_DENOMINATOR / 2) / VAT_DENOMINATOR)
}

/// Order total: `Σ quantity × unit_price` with the VAT rule applied.
///
/// An empty item list yields zero.
pub fn total_amount(items: &[OrderLineItem], vat_included: bool) -> Won {
    let subtotal = items.iter().map(|item| item.amount().0).sum();
    vat_adjusted_price(Won(subtotal), vat_included)
}
