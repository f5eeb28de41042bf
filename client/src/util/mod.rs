//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (clipboard, alerts)
//! from component logic to improve reuse and testability.

pub mod export;
pub mod notify;
