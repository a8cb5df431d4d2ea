//! Commandolaag: ontleden van commandoregels, het helix-commando en het
//! beheer van undo, redo en het journal.

use std::fmt;

pub mod coerce;
pub mod dispatcher;
pub mod error;
pub mod helix_tool;
pub mod history;
pub mod journal;
pub mod registry;
pub mod syntax;

use crate::scene::CurveHost;

pub use dispatcher::Dispatcher;
pub use error::{ArgumentError, CommandError};
pub use helix_tool::{COMMAND_NAME, CommandState, HelixToolCommand};
pub use history::UndoStack;
pub use journal::{Journal, JournalRecord};
pub use registry::{CommandKind, CommandRegistry};
pub use syntax::{ArgDatabase, ArgType, FlagSpec, Syntax, tokenize};

/// Trait die elk ongedaan te maken commando implementeert.
pub trait ToolCommand: fmt::Debug {
    fn name(&self) -> &'static str;

    /// Eerste uitvoering: argumenten overnemen en de scene aanpassen.
    fn do_it(&mut self, args: &ArgDatabase, host: &mut dyn CurveHost) -> Result<(), CommandError>;

    fn redo_it(&mut self, host: &mut dyn CurveHost) -> Result<(), CommandError>;

    fn undo_it(&mut self, host: &mut dyn CurveHost) -> Result<(), CommandError>;

    fn is_undoable(&self) -> bool;

    /// Levert de commandoregel voor het journal.
    fn finalize(&mut self) -> Result<JournalRecord, CommandError>;
}
