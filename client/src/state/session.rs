//! Calculator session state.
//!
//! SYSTEM CONTEXT
//! ==============
//! Holds the raw form inputs, the last computed result, and the status of the
//! clipboard export. Inputs change on every keystroke; the result only changes
//! when [`MarketState::calculate`] runs.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use canvas::scene::Scene;
use market::{InputField, MarketInputs, MarketResult, Radii, derive, radii};

/// Session state for one calculator.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MarketState {
    /// Raw text of the five form fields.
    pub inputs: MarketInputs,
    /// Result of the last calculation; zeros until the first one.
    pub result: MarketResult,
    /// Progress of the copy-to-clipboard action.
    pub export: ExportStatus,
}

impl MarketState {
    /// Record an edit to one field. Does not recompute.
    pub fn set_field(&mut self, field: InputField, value: impl Into<String>) {
        self.inputs.set(field, value);
    }

    /// Replace the result with a fresh derivation of the current inputs.
    pub fn calculate(&mut self) {
        self.result = derive(&self.inputs);
        log::debug!(
            "calculated tam={} sam={} som={}",
            self.result.tam,
            self.result.sam,
            self.result.som
        );
    }

    #[must_use]
    pub fn radii(&self) -> Radii {
        radii(&self.result)
    }

    /// Chart scene for the current title and last result.
    #[must_use]
    pub fn scene(&self) -> Scene {
        Scene::build(&self.inputs.title, &self.result)
    }

    /// Mark an export as started.
    ///
    /// Returns `false` (and changes nothing) if one is already running.
    pub fn begin_export(&mut self) -> bool {
        if self.export.is_busy() {
            return false;
        }
        self.export = ExportStatus::Copying;
        true
    }

    pub fn finish_export(&mut self, status: ExportStatus) {
        self.export = status;
    }
}

/// Lifecycle of the copy-to-clipboard action.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ExportStatus {
    #[default]
    Idle,
    Copying,
    Copied,
    /// Export failed; holds the underlying reason for logs and tooltips.
    Failed(String),
}

impl ExportStatus {
    #[must_use]
    pub fn is_busy(&self) -> bool {
        matches!(self, Self::Copying)
    }

    /// User-facing notice for a finished export.
    #[must_use]
    pub fn notice(&self) -> Option<&'static str> {
        match self {
            Self::Copied => Some("Visualization copied to clipboard!"),
            Self::Failed(_) => Some("Failed to copy visualization. Please try again."),
            Self::Idle | Self::Copying => None,
        }
    }

    /// Short text for the status line under the copy button.
    #[must_use]
    pub fn status_text(&self) -> &'static str {
        match self {
            Self::Idle => "",
            Self::Copying => "Copying…",
            Self::Copied => "Copied to clipboard.",
            Self::Failed(_) => "Copy failed.",
        }
    }
}
