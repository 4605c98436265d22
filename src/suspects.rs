//! Clue → suspect lookup table
//!
//! A fixed-size table of bucket chains. The bucket of a clue is the sum of its
//! bytes modulo [`BUCKET_COUNT`]; new links go to the head of their chain, so
//! re-inserting a clue shadows the older pairing on lookup. Links are never
//! removed.

use indexmap::IndexSet;
use log::debug;

/// Number of buckets; prime to spread the byte sums
pub const BUCKET_COUNT: usize = 11;

#[derive(Debug)]
struct SuspectLink {
    clue: String,
    suspect: String,
    next: Option<Box<SuspectLink>>,
}

#[derive(Debug)]
pub struct SuspectTable {
    buckets: Vec<Option<Box<SuspectLink>>>,
    roster: IndexSet<String>,
    len: usize,
}

/// Bucket index for a clue: unsigned byte sum modulo `BUCKET_COUNT`
pub fn bucket_index(clue: &str) -> usize {
    let sum = clue
        .bytes()
        .fold(0usize, |acc, b| acc.wrapping_add(b as usize));
    sum % BUCKET_COUNT
}

impl SuspectTable {
    pub fn new() -> Self {
        SuspectTable {
            buckets: (0..BUCKET_COUNT).map(|_| None).collect(),
            roster: IndexSet::new(),
            len: 0,
        }
    }

    /// Build a table by inserting the pairs in order
    pub fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        let mut table = SuspectTable::new();
        for (clue, suspect) in pairs {
            table.insert(clue, suspect);
        }
        table
    }

    pub fn insert(&mut self, clue: &str, suspect: &str) {
        let index = bucket_index(clue);
        debug!("Suspect table: '{}' -> '{}' (bucket {})", clue, suspect, index);

        let head = self.buckets[index].take();
        self.buckets[index] = Some(Box::new(SuspectLink {
            clue: clue.to_string(),
            suspect: suspect.to_string(),
            next: head,
        }));
        self.roster.insert(suspect.to_string());
        self.len += 1;
    }

    /// Suspect paired with `clue`, matching the clue byte for byte
    pub fn find(&self, clue: &str) -> Option<&str> {
        let mut current = self.buckets[bucket_index(clue)].as_deref();
        while let Some(link) = current {
            if link.clue == clue {
                return Some(&link.suspect);
            }
            current = link.next.as_deref();
        }
        None
    }

    /// Number of links stored, shadowed ones included
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Each distinct suspect once, in the order their first pairing was made
    pub fn suspects(&self) -> impl Iterator<Item = &str> {
        self.roster.iter().map(String::as_str)
    }
}

impl Default for SuspectTable {
    fn default() -> Self {
        Self::new()
    }
}
