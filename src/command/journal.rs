//! Journal van afgeronde commando's, als herspeelbare commandoregels.

use std::fmt;

use serde::Serialize;

/// Tekstuele heraanroep van een commando.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JournalRecord {
    pub command: String,
    pub args: Vec<String>,
}

impl JournalRecord {
    #[must_use]
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            args: Vec::new(),
        }
    }

    /// Voegt een vlag met waarde toe. Getallen gebruiken de kortste notatie
    /// die exact terug te lezen is.
    #[must_use]
    pub fn with_flag(mut self, flag: &str, value: impl fmt::Display) -> Self {
        self.args.push(flag.to_owned());
        self.args.push(value.to_string());
        self
    }
}

impl fmt::Display for JournalRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.command)?;
        for arg in &self.args {
            if arg.is_empty() || arg.contains(char::is_whitespace) {
                write!(f, " \"{arg}\"")?;
            } else {
                write!(f, " {arg}")?;
            }
        }
        Ok(())
    }
}

/// Begrensde lijst van journal-records in uitvoeringsvolgorde.
#[derive(Debug, Clone)]
pub struct Journal {
    entries: Vec<JournalRecord>,
    capacity: usize,
}

impl Default for Journal {
    fn default() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }
}

impl Journal {
    pub const DEFAULT_CAPACITY: usize = 1000;

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::new(),
            capacity: capacity.max(1),
        }
    }

    /// Voegt een record toe. Bij een vol journal vervalt de oudste helft.
    pub fn record(&mut self, record: JournalRecord) {
        if self.entries.len() >= self.capacity {
            let drop = (self.capacity / 2).max(1);
            self.entries.drain(..drop);
        }
        self.entries.push(record);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn entries(&self) -> &[JournalRecord] {
        &self.entries
    }

    /// Het journal als script: één `;`-afgesloten regel per record.
    #[must_use]
    pub fn to_script(&self) -> String {
        self.entries
            .iter()
            .map(|record| format!("{record};\n"))
            .collect()
    }
}
