//! Runtime-opties van de engine.

use serde::Deserialize;

use crate::command::{Journal, UndoStack};

/// Opties die de host bij het aanmaken van de engine kan meegeven.
///
/// Ontbrekende velden vallen terug op de standaardwaarde, zodat `{}` vanuit
/// JavaScript een geldige configuratie is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EngineOptions {
    /// Maximaal aantal commando's op de undo-stapel.
    pub history_depth: usize,
    /// Maximaal aantal records in het journal.
    pub journal_capacity: usize,
    /// Aantal samples per span voor previews.
    pub preview_samples_per_span: usize,
}

impl EngineOptions {
    pub const DEFAULT_PREVIEW_SAMPLES_PER_SPAN: usize = 8;
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            history_depth: UndoStack::DEFAULT_DEPTH,
            journal_capacity: Journal::DEFAULT_CAPACITY,
            preview_samples_per_span: Self::DEFAULT_PREVIEW_SAMPLES_PER_SPAN,
        }
    }
}
