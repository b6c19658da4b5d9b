//! Quest journal
//!
//! Every action the player takes leaves a short, timestamped message here.
//! The front end reads new entries after each action and shows them; the
//! core never prints anything itself.

use chrono::{DateTime, Local};
use std::fmt;

/// What kind of event a journal entry describes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JournalKind {
    /// A village was rescued
    Rescue,
    /// Items could not be collected because the bag was full
    Rejected,
    /// Items were added, removed or used from the bag
    Inventory,
    /// A search was run
    Search,
    /// A rescue attempt failed its precondition
    Blocked,
    /// Every village has been rescued
    Complete,
}

#[derive(Debug, Clone)]
pub struct JournalEntry {
    pub at: DateTime<Local>,
    pub kind: JournalKind,
    pub message: String,
}

impl fmt::Display for JournalEntry {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[{}] {}", self.at.format("%H:%M:%S"), self.message)
    }
}

#[derive(Debug, Clone, Default)]
pub struct Journal {
    entries: Vec<JournalEntry>,
}

impl Journal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, kind: JournalKind, message: impl Into<String>) {
        self.entries.push(JournalEntry {
            at: Local::now(),
            kind,
            message: message.into(),
        });
    }

    pub fn entries(&self) -> &[JournalEntry] {
        &self.entries
    }

    /// Entries recorded after the first `seen` ones
    pub fn entries_since(&self, seen: usize) -> &[JournalEntry] {
        self.entries.get(seen..).unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn last(&self) -> Option<&JournalEntry> {
        self.entries.last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entries_since() {
        let mut journal = Journal::new();
        journal.record(JournalKind::Rescue, "You have saved Aralık!");
        journal.record(JournalKind::Inventory, "Removed item: yiyecek");

        assert_eq!(journal.len(), 2);
        assert_eq!(journal.entries_since(1).len(), 1);
        assert_eq!(journal.entries_since(1)[0].kind, JournalKind::Inventory);
        assert!(journal.entries_since(2).is_empty());
        assert!(journal.entries_since(10).is_empty());
    }

    #[test]
    fn test_entry_display_includes_message() {
        let mut journal = Journal::new();
        journal.record(JournalKind::Complete, "All villages saved");

        let shown = journal.last().map(|e| e.to_string()).unwrap_or_default();
        assert!(shown.ends_with("All villages saved"));
        assert!(shown.starts_with('['));
    }
}
