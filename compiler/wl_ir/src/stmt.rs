//! Control-flow tree stored as a flat arena.
//!
//! Statements form singly linked sibling chains: each [`Stmt`] knows the
//! statement after it in the same block. Nested blocks (`if` branches, loop
//! bodies) are themselves chains, referenced by their head. Nodes are
//! addressed by [`StmtId`] instead of boxed pointers, so the whole tree is
//! freed with the arena and a long program never recurses on drop.

use super::{Name, TokenRange};
use std::fmt;

/// Index into a [`StmtArena`].
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[repr(transparent)]
pub struct StmtId(u32);

impl StmtId {
    #[inline]
    pub const fn new(index: u32) -> Self {
        StmtId(index)
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for StmtId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StmtId({})", self.0)
    }
}

/// Head of a sibling chain; `None` is an empty block.
pub type Chain = Option<StmtId>;

/// What a statement does.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum StmtKind {
    /// Sentinel root of a program. Carries no payload.
    Start,
    /// `target := rvalue`
    Assign { target: Name, rvalue: TokenRange },
    /// `if predicate then { consequence } else { alternative }`
    If {
        predicate: TokenRange,
        consequence: Chain,
        alternative: Chain,
    },
    /// `while predicate do { body }`
    While { predicate: TokenRange, body: Chain },
}

/// A statement node plus its following sibling.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Stmt {
    pub kind: StmtKind,
    pub next: Option<StmtId>,
}

/// Arena owning every statement of one program.
#[derive(Clone, Default, Eq, PartialEq, Debug)]
pub struct StmtArena {
    stmts: Vec<Stmt>,
}

impl StmtArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a statement with no successor yet.
    pub fn alloc(&mut self, kind: StmtKind) -> StmtId {
        let id = StmtId::new(u32::try_from(self.stmts.len()).unwrap_or(u32::MAX));
        self.stmts.push(Stmt { kind, next: None });
        id
    }

    /// Link `next` after `stmt` in the same block.
    pub fn set_next(&mut self, stmt: StmtId, next: StmtId) {
        if let Some(node) = self.stmts.get_mut(stmt.index()) {
            node.next = Some(next);
        }
    }

    /// Get a statement by id.
    ///
    /// Ids are only minted by [`StmtArena::alloc`], so an id from this arena
    /// is always in bounds.
    #[inline]
    pub fn get(&self, id: StmtId) -> &Stmt {
        &self.stmts[id.index()]
    }

    /// Iterate a sibling chain from its head.
    pub fn chain(&self, head: Chain) -> ChainIter<'_> {
        ChainIter {
            arena: self,
            cursor: head,
        }
    }

    /// Total number of statements, including the `Start` root.
    #[inline]
    pub fn len(&self) -> usize {
        self.stmts.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.stmts.is_empty()
    }
}

/// Iterator over the ids of one sibling chain.
pub struct ChainIter<'a> {
    arena: &'a StmtArena,
    cursor: Chain,
}

impl Iterator for ChainIter<'_> {
    type Item = StmtId;

    fn next(&mut self) -> Option<StmtId> {
        let id = self.cursor?;
        self.cursor = self.arena.get(id).next;
        Some(id)
    }
}
