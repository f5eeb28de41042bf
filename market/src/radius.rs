//! Area-proportional circle radii.
//!
//! TAM is drawn at a fixed reference radius. The other tiers scale by the
//! square root of their ratio to TAM, so circle *area* tracks value:
//! `π·r²` doubles when the value doubles.

#[cfg(test)]
#[path = "radius_test.rs"]
mod radius_test;

use crate::model::MarketResult;

/// Radius of the TAM circle, in chart units.
pub const TAM_RADIUS: f64 = 225.0;

/// Display radii for the three tiers.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Radii {
    pub tam: f64,
    pub sam: f64,
    pub som: f64,
}

/// Compute display radii for a result.
///
/// A zero TAM yields zero SAM/SOM radii. Negative or non-finite ratios (only
/// reachable with out-of-range inputs) also map to zero so the renderer never
/// sees a NaN or negative radius. Ratios above 1 are kept.
#[must_use]
pub fn radii(result: &MarketResult) -> Radii {
    Radii {
        tam: TAM_RADIUS,
        sam: TAM_RADIUS * ratio(result.sam, result.tam).sqrt(),
        som: TAM_RADIUS * ratio(result.som, result.tam).sqrt(),
    }
}

fn ratio(part: f64, whole: f64) -> f64 {
    if whole == 0.0 {
        return 0.0;
    }
    let r = part / whole;
    if r.is_finite() && r > 0.0 { r } else { 0.0 }
}
