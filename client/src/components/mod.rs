//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the form, chart and export controls while reading/writing
//! the shared `MarketState` from the Leptos context provider.

pub mod copy_button;
pub mod input_panel;
pub mod market_chart;
pub mod market_legend;
