//! Registry van beschikbare commando's.

use std::collections::HashMap;

use super::ToolCommand;
use super::helix_tool::{self, HelixToolCommand};
use super::syntax::Syntax;

/// Beschikbare commandotypen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    HelixTool,
}

impl CommandKind {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::HelixTool => helix_tool::COMMAND_NAME,
        }
    }

    #[must_use]
    pub fn syntax(self) -> Syntax {
        match self {
            Self::HelixTool => helix_tool::syntax(),
        }
    }

    /// Verse instantie in de begintoestand.
    #[must_use]
    pub fn create(self) -> Box<dyn ToolCommand> {
        match self {
            Self::HelixTool => Box::new(HelixToolCommand::new()),
        }
    }
}

/// Metadata voor registraties in de commandoregistry.
#[derive(Debug, Clone, Copy)]
pub struct Registration {
    pub names: &'static [&'static str],
    pub kind: CommandKind,
}

/// Volledige lijst van ingebouwde commando's.
pub const REGISTRATIONS: &[Registration] = &[Registration {
    names: &[helix_tool::COMMAND_NAME],
    kind: CommandKind::HelixTool,
}];

/// Koppelt commandonamen aan hun type. Namen zijn hoofdlettergevoelig, net
/// als bij de host.
#[derive(Debug, Clone)]
pub struct CommandRegistry {
    by_name: HashMap<String, CommandKind>,
}

impl Default for CommandRegistry {
    fn default() -> Self {
        let mut registry = Self::new();
        for registration in REGISTRATIONS {
            for name in registration.names {
                registry.register(name, registration.kind);
            }
        }
        registry
    }
}

impl CommandRegistry {
    /// Lege registry, zonder ingebouwde commando's.
    #[must_use]
    pub fn new() -> Self {
        Self {
            by_name: HashMap::new(),
        }
    }

    /// Registreert een naam. Geeft `false` als de naam al bezet was.
    pub fn register(&mut self, name: &str, kind: CommandKind) -> bool {
        if self.by_name.contains_key(name) {
            log::warn!("commando `{name}` is al geregistreerd");
            return false;
        }
        self.by_name.insert(name.to_owned(), kind);
        true
    }

    /// Verwijdert een naam. Geeft `false` als de naam onbekend was.
    pub fn deregister(&mut self, name: &str) -> bool {
        self.by_name.remove(name).is_some()
    }

    #[must_use]
    pub fn resolve(&self, name: &str) -> Option<CommandKind> {
        self.by_name.get(name).copied()
    }

    /// Geregistreerde namen, gesorteerd.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.by_name.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}
