//! Client-side state.
//!
//! DESIGN
//! ======
//! The whole session lives in one [`session::MarketState`] held in an
//! `RwSignal` and provided through context by [`crate::app::App`].

pub mod session;
