//! Fouttypes van de commandolaag.

use thiserror::Error;

use super::syntax::ArgType;

/// Fouten bij het ontleden van een commandoregel of het converteren van een
/// vlagwaarde.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArgumentError {
    #[error("lege commandoregel")]
    EmptyCommand,
    #[error("ongesloten aanhalingsteken in commandoregel")]
    UnterminatedQuote,
    #[error("onbekende vlag `{flag}`")]
    UnknownFlag { flag: String },
    #[error("onverwacht argument `{token}`")]
    UnexpectedArgument { token: String },
    #[error("vlag `{flag}` verwacht een waarde")]
    MissingValue { flag: String },
    #[error("vlag `{flag}` is meer dan eens opgegeven")]
    DuplicateFlag { flag: String },
    #[error("vlag `-{flag}`: `{value}` is geen geldige {expected}")]
    InvalidValue {
        flag: &'static str,
        value: String,
        expected: ArgType,
    },
}

/// Fout van een commando of van de dispatcher.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CommandError {
    #[error(transparent)]
    Argument(#[from] ArgumentError),
    #[error("curve aanmaken mislukt: {reason}")]
    Construction { reason: String },
    #[error("curve verwijderen mislukt: {reason}")]
    Deletion { reason: String },
    #[error("`{operation}` is niet toegestaan in toestand {state}")]
    InvalidState {
        operation: &'static str,
        state: &'static str,
    },
    #[error("onbekend commando `{0}`")]
    UnknownCommand(String),
    #[error("er is niets om ongedaan te maken")]
    NothingToUndo,
    #[error("er is niets om opnieuw uit te voeren")]
    NothingToRedo,
}

impl CommandError {
    pub(crate) fn construction(reason: impl ToString) -> Self {
        Self::Construction {
            reason: reason.to_string(),
        }
    }

    pub(crate) fn deletion(reason: impl ToString) -> Self {
        Self::Deletion {
            reason: reason.to_string(),
        }
    }
}
