//! Undo- en redo-stapels van uitgevoerde commando's.

use super::ToolCommand;

/// Undo/redo-beheer met begrensde diepte.
///
/// De stapels bewaren de commando's zelf: elk commando weet hoe het zijn
/// eigen wijziging terugdraait of opnieuw uitvoert.
#[derive(Debug)]
pub struct UndoStack {
    undo_stack: Vec<Box<dyn ToolCommand>>,
    redo_stack: Vec<Box<dyn ToolCommand>>,
    max_depth: usize,
}

impl Default for UndoStack {
    fn default() -> Self {
        Self::new_with_capacity(Self::DEFAULT_DEPTH)
    }
}

impl UndoStack {
    pub const DEFAULT_DEPTH: usize = 100;

    #[must_use]
    pub fn new_with_capacity(max_depth: usize) -> Self {
        let max_depth = max_depth.max(1);
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            max_depth,
        }
    }

    #[must_use]
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Legt een nieuw uitgevoerd commando vast. Dit wist de redo-stapel.
    pub fn record(&mut self, command: Box<dyn ToolCommand>) {
        push_bounded(&mut self.undo_stack, command, self.max_depth);
        self.redo_stack.clear();
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    #[must_use]
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    #[must_use]
    pub fn undo_len(&self) -> usize {
        self.undo_stack.len()
    }

    #[must_use]
    pub fn redo_len(&self) -> usize {
        self.redo_stack.len()
    }

    /// Naam van het commando dat de volgende undo terugdraait.
    #[must_use]
    pub fn peek_undo(&self) -> Option<&str> {
        self.undo_stack.last().map(|command| command.name())
    }

    pub fn take_undo(&mut self) -> Option<Box<dyn ToolCommand>> {
        self.undo_stack.pop()
    }

    /// Zet een commando terug waarvan de undo mislukte.
    pub fn restore_undo(&mut self, command: Box<dyn ToolCommand>) {
        push_bounded(&mut self.undo_stack, command, self.max_depth);
    }

    pub fn push_redo(&mut self, command: Box<dyn ToolCommand>) {
        push_bounded(&mut self.redo_stack, command, self.max_depth);
    }

    pub fn take_redo(&mut self) -> Option<Box<dyn ToolCommand>> {
        self.redo_stack.pop()
    }

    /// Zet een opnieuw uitgevoerd commando terug op de undo-stapel zonder de
    /// rest van de redo-stapel te wissen.
    pub fn push_undo_after_redo(&mut self, command: Box<dyn ToolCommand>) {
        push_bounded(&mut self.undo_stack, command, self.max_depth);
    }
}

fn push_bounded(stack: &mut Vec<Box<dyn ToolCommand>>, command: Box<dyn ToolCommand>, max: usize) {
    if stack.len() >= max {
        let dropped = stack.remove(0);
        log::debug!("history vol, oudste `{}` vervalt", dropped.name());
    }
    stack.push(command);
}
