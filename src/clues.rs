//! Collected clues, kept in a binary search tree
//!
//! Entries are ordered by byte-wise string comparison. Inserting a clue that is
//! already present walks down to the equal entry and stops there, leaving the
//! tree untouched, so every clue appears exactly once.

use crate::suspects::SuspectTable;
use log::debug;
use std::cmp::Ordering;

#[derive(Debug)]
struct ClueEntry {
    clue: String,
    left: Option<Box<ClueEntry>>,
    right: Option<Box<ClueEntry>>,
}

impl ClueEntry {
    fn new(clue: &str) -> Box<Self> {
        Box::new(ClueEntry {
            clue: clue.to_string(),
            left: None,
            right: None,
        })
    }
}

#[derive(Debug, Default)]
pub struct ClueCollection {
    root: Option<Box<ClueEntry>>,
    len: usize,
}

impl ClueCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a clue; returns false when it was already collected
    pub fn insert(&mut self, clue: &str) -> bool {
        let added = insert_entry(&mut self.root, clue);
        if added {
            self.len += 1;
            debug!("Clue collected: '{}' ({} total)", clue, self.len);
        }
        added
    }

    pub fn contains(&self, clue: &str) -> bool {
        let mut current = self.root.as_deref();
        while let Some(entry) = current {
            current = match clue.cmp(entry.clue.as_str()) {
                Ordering::Less => entry.left.as_deref(),
                Ordering::Greater => entry.right.as_deref(),
                Ordering::Equal => return true,
            };
        }
        false
    }

    /// All clues in ascending order
    pub fn traverse(&self) -> Vec<&str> {
        let mut out = Vec::with_capacity(self.len);
        in_order(self.root.as_deref(), &mut out);
        out
    }

    /// Number of collected clues whose suspect in `table` is exactly `suspect`.
    /// Clues missing from the table never match.
    pub fn count_matching(&self, suspect: &str, table: &SuspectTable) -> usize {
        count_entries(self.root.as_deref(), suspect, table)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }
}

fn insert_entry(slot: &mut Option<Box<ClueEntry>>, clue: &str) -> bool {
    match slot {
        None => {
            *slot = Some(ClueEntry::new(clue));
            true
        }
        Some(entry) => match clue.cmp(entry.clue.as_str()) {
            Ordering::Less => insert_entry(&mut entry.left, clue),
            Ordering::Greater => insert_entry(&mut entry.right, clue),
            Ordering::Equal => false,
        },
    }
}

fn in_order<'a>(entry: Option<&'a ClueEntry>, out: &mut Vec<&'a str>) {
    if let Some(entry) = entry {
        in_order(entry.left.as_deref(), out);
        out.push(&entry.clue);
        in_order(entry.right.as_deref(), out);
    }
}

fn count_entries(entry: Option<&ClueEntry>, suspect: &str, table: &SuspectTable) -> usize {
    let Some(entry) = entry else {
        return 0;
    };

    let here = match table.find(&entry.clue) {
        Some(found) if found == suspect => 1,
        _ => 0,
    };

    here + count_entries(entry.left.as_deref(), suspect, table)
        + count_entries(entry.right.as_deref(), suspect, table)
}
