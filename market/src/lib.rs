//! Market sizing model for the TAM / SAM / SOM calculator.
//!
//! This crate is UI-framework agnostic so the `canvas` and `client` crates can
//! consume it directly. It holds the raw form inputs, derives the three market
//! figures, formats them as short currency strings, and maps them to circle
//! radii whose areas are proportional to the values.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`inputs`] | Raw text inputs and the field catalogue |
//! | [`model`] | Derivation of [`MarketResult`] and the [`Segment`] enum |
//! | [`format`] | Currency formatting with K/M/B suffixes |
//! | [`radius`] | Area-proportional circle radii |

pub mod format;
pub mod inputs;
pub mod model;
pub mod radius;

pub use format::format_currency;
pub use inputs::{InputField, MarketInputs, parse_numeric};
pub use model::{MarketResult, Segment, derive};
pub use radius::{Radii, TAM_RADIUS, radii};
