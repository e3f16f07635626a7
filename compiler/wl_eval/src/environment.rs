//! Variable storage for one interpreter.
//!
//! A single flat scope: the language has no declarations and no nested
//! scopes, and blocks write straight through to the enclosing variables.

use std::collections::BTreeMap;

use rustc_hash::FxHashMap;
use wl_ir::{Name, StringInterner};

/// Mapping from variable name to its current value.
///
/// Reading a variable that was never assigned yields `0`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Environment {
    values: FxHashMap<Name, i64>,
}

impl Environment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value of `name`, or `0` if it was never assigned.
    #[inline]
    pub fn lookup_or_zero(&self, name: Name) -> i64 {
        self.values.get(&name).copied().unwrap_or(0)
    }

    /// Current value of `name`, if it was ever assigned.
    #[inline]
    pub fn get(&self, name: Name) -> Option<i64> {
        self.values.get(&name).copied()
    }

    /// Bind `name` to `value`, replacing any previous value.
    #[inline]
    pub fn set(&mut self, name: Name, value: i64) {
        self.values.insert(name, value);
    }

    /// Number of assigned variables.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over `(name, value)` pairs in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (Name, i64)> + '_ {
        self.values.iter().map(|(&name, &value)| (name, value))
    }

    /// Every variable, resolved to its text and sorted by name.
    pub fn snapshot(&self, interner: &StringInterner) -> BTreeMap<String, i64> {
        self.iter()
            .map(|(name, value)| (interner.lookup(name), value))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_undefined_reads_zero() {
        let interner = StringInterner::new();
        let env = Environment::new();
        let x = interner.intern("x");
        assert_eq!(env.lookup_or_zero(x), 0);
        assert_eq!(env.get(x), None);
        assert!(env.is_empty());
    }

    #[test]
    fn test_set_overwrites() {
        let interner = StringInterner::new();
        let mut env = Environment::new();
        let x = interner.intern("x");
        env.set(x, 3);
        env.set(x, -4);
        assert_eq!(env.lookup_or_zero(x), -4);
        assert_eq!(env.len(), 1);
    }

    #[test]
    fn test_snapshot_is_sorted() {
        let interner = StringInterner::new();
        let mut env = Environment::new();
        env.set(interner.intern("zeta"), 1);
        env.set(interner.intern("alpha"), 2);
        env.set(interner.intern("mid"), 3);

        let snapshot = env.snapshot(&interner);
        let names: Vec<_> = snapshot.keys().cloned().collect();
        assert_eq!(names, vec!["alpha", "mid", "zeta"]);
        assert_eq!(snapshot["alpha"], 2);
    }
}
