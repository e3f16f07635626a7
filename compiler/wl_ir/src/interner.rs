//! String interner for variable names.
//!
//! One interner belongs to one interpreter instance. Interior mutability
//! lets the lexer intern through a shared reference while the parser and
//! executor hold the same interner for lookups.

use super::Name;
use parking_lot::RwLock;
use rustc_hash::FxHashMap;

#[derive(Default)]
struct InternTable {
    /// Map from string content to index.
    map: FxHashMap<Box<str>, u32>,
    /// Storage for string contents, indexed by `Name::index`.
    strings: Vec<Box<str>>,
}

/// Interner mapping variable text to compact [`Name`]s.
#[derive(Default)]
pub struct StringInterner {
    table: RwLock<InternTable>,
}

impl StringInterner {
    /// Create an empty interner.
    pub fn new() -> Self {
        Self::default()
    }

    /// Intern a string, returning its `Name`.
    ///
    /// Interning the same text twice yields the same `Name`.
    pub fn intern(&self, s: &str) -> Name {
        if let Some(&idx) = self.table.read().map.get(s) {
            return Name::from_raw(idx);
        }

        let mut table = self.table.write();
        // Another writer may have won the race between the two locks.
        if let Some(&idx) = table.map.get(s) {
            return Name::from_raw(idx);
        }
        let idx = u32::try_from(table.strings.len()).unwrap_or(u32::MAX);
        table.strings.push(s.into());
        table.map.insert(s.into(), idx);
        Name::from_raw(idx)
    }

    /// Look up an existing name without interning.
    pub fn get(&self, s: &str) -> Option<Name> {
        self.table.read().map.get(s).map(|&idx| Name::from_raw(idx))
    }

    /// Resolve a `Name` back to its text.
    ///
    /// Names from a different interner resolve to the empty string.
    pub fn lookup(&self, name: Name) -> String {
        self.table
            .read()
            .strings
            .get(name.index())
            .map(ToString::to_string)
            .unwrap_or_default()
    }

    /// Number of interned strings.
    pub fn len(&self) -> usize {
        self.table.read().strings.len()
    }

    /// Check if nothing has been interned yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
