//! Market figure derivation.

#[cfg(test)]
#[path = "model_test.rs"]
mod model_test;

use crate::inputs::{MarketInputs, parse_numeric};
use crate::radius::Radii;

/// Derived market figures. Replaced wholesale on every calculation.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MarketResult {
    /// Total addressable market.
    pub tam: f64,
    /// Serviceable addressable market.
    pub sam: f64,
    /// Serviceable obtainable market.
    pub som: f64,
}

impl MarketResult {
    #[must_use]
    pub fn value(&self, segment: Segment) -> f64 {
        match segment {
            Segment::Tam => self.tam,
            Segment::Sam => self.sam,
            Segment::Som => self.som,
        }
    }
}

/// Derive TAM, SAM and SOM from the raw inputs.
///
/// Unparseable numeric fields count as zero. No range clamping is applied, so
/// negative or >100% inputs flow through unchanged. Products that overflow
/// saturate at `±f64::MAX`, so every figure is finite and a 0% share always
/// yields exactly zero.
#[must_use]
pub fn derive(inputs: &MarketInputs) -> MarketResult {
    let tam = saturate(parse_numeric(&inputs.total_customers) * parse_numeric(&inputs.revenue_per_customer));
    let sam = saturate(tam * (parse_numeric(&inputs.sam_percentage) / 100.0));
    let som = saturate(sam * (parse_numeric(&inputs.som_percentage) / 100.0));
    MarketResult { tam, sam, som }
}

fn saturate(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(f64::MIN, f64::MAX)
    }
}

/// One of the three nested market tiers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Segment {
    Tam,
    Sam,
    Som,
}

impl Segment {
    /// Outermost first.
    pub const ALL: [Self; 3] = [Self::Tam, Self::Sam, Self::Som];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Tam => "TAM",
            Self::Sam => "SAM",
            Self::Som => "SOM",
        }
    }

    #[must_use]
    pub fn radius(self, radii: &Radii) -> f64 {
        match self {
            Self::Tam => radii.tam,
            Self::Sam => radii.sam,
            Self::Som => radii.som,
        }
    }
}
