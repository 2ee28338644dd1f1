//! Verlauf der zuletzt ausgeführten Commands (Ringpuffer).

use super::AppCommand;
use std::collections::VecDeque;

/// Ringpuffer über ausgeführte Commands, ältester Eintrag fällt zuerst heraus.
pub struct CommandLog {
    entries: VecDeque<AppCommand>,
    capacity: usize,
}

impl Default for CommandLog {
    fn default() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }
}

impl CommandLog {
    /// Standard-Kapazität des Verlaufs.
    pub const DEFAULT_CAPACITY: usize = 1000;

    /// Erstellt einen leeren Verlauf mit Standard-Kapazität.
    pub fn new() -> Self {
        Self::default()
    }

    /// Erstellt einen leeren Verlauf mit eigener Kapazität (mindestens 1).
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn record(&mut self, command: &AppCommand) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(command.clone());
    }

    /// Zuletzt ausgeführter Command
    pub fn last(&self) -> Option<&AppCommand> {
        self.entries.back()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Alle Einträge, ältester zuerst.
    pub fn iter(&self) -> impl Iterator<Item = &AppCommand> + '_ {
        self.entries.iter()
    }
}
