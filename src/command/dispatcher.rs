//! Voert commandoregels uit en beheert undo, redo en het journal.

use crate::config::EngineOptions;
use crate::scene::CurveHost;

use super::error::{ArgumentError, CommandError};
use super::history::UndoStack;
use super::journal::{Journal, JournalRecord};
use super::registry::CommandRegistry;
use super::syntax::tokenize;

/// Lineaire undo/redo rond een [`CommandRegistry`].
#[derive(Debug, Default)]
pub struct Dispatcher {
    registry: CommandRegistry,
    history: UndoStack,
    journal: Journal,
}

impl Dispatcher {
    #[must_use]
    pub fn new(registry: CommandRegistry, options: &EngineOptions) -> Self {
        Self {
            registry,
            history: UndoStack::new_with_capacity(options.history_depth),
            journal: Journal::with_capacity(options.journal_capacity),
        }
    }

    /// Voert één commandoregel uit, bijvoorbeeld
    /// `helixToolCmd -r 5 -ncv 10;`.
    pub fn execute(
        &mut self,
        line: &str,
        host: &mut dyn CurveHost,
    ) -> Result<JournalRecord, CommandError> {
        let tokens = tokenize(line)?;
        let Some((name, args)) = tokens.split_first() else {
            return Err(ArgumentError::EmptyCommand.into());
        };
        self.execute_args(name, args, host)
    }

    /// Als [`Dispatcher::execute`], met een al gesplitste commandoregel.
    pub fn execute_args<S: AsRef<str>>(
        &mut self,
        name: &str,
        args: &[S],
        host: &mut dyn CurveHost,
    ) -> Result<JournalRecord, CommandError> {
        let kind = self
            .registry
            .resolve(name)
            .ok_or_else(|| CommandError::UnknownCommand(name.to_owned()))?;

        let db = kind.syntax().parse(args)?;
        let mut command = kind.create();
        command.do_it(&db, host)?;

        let record = command.finalize();
        if command.is_undoable() {
            self.history.record(command);
        }
        let record = record?;

        log::debug!("uitgevoerd: {record}");
        self.journal.record(record.clone());
        Ok(record)
    }

    pub fn undo(&mut self, host: &mut dyn CurveHost) -> Result<(), CommandError> {
        let mut command = self.history.take_undo().ok_or(CommandError::NothingToUndo)?;
        match command.undo_it(host) {
            Ok(()) => {
                log::debug!("undo: {}", command.name());
                self.history.push_redo(command);
                Ok(())
            }
            Err(err) => {
                log::warn!("undo van {} mislukt: {err}", command.name());
                self.history.restore_undo(command);
                Err(err)
            }
        }
    }

    pub fn redo(&mut self, host: &mut dyn CurveHost) -> Result<(), CommandError> {
        let mut command = self.history.take_redo().ok_or(CommandError::NothingToRedo)?;
        match command.redo_it(host) {
            Ok(()) => {
                log::debug!("redo: {}", command.name());
                self.history.push_undo_after_redo(command);
                Ok(())
            }
            Err(err) => {
                log::warn!("redo van {} mislukt, commando vervalt: {err}", command.name());
                Err(err)
            }
        }
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    #[must_use]
    pub fn journal(&self) -> &Journal {
        &self.journal
    }

    #[must_use]
    pub fn history(&self) -> &UndoStack {
        &self.history
    }

    #[must_use]
    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut CommandRegistry {
        &mut self.registry
    }
}
