//! A per-function table mapping a local identifier to the classified form
//! (divide-by-b or decrease-by-c) it was last bound to.
//!
//! Implemented as a small insertion-ordered `Vec` scanned linearly rather than a `HashMap` —
//! function-local scopes are small enough that this is not a bottleneck, and it keeps
//! last-write-wins semantics obvious.

use crate::classify::Classification;

/// The kind of expression a local identifier was last bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AliasKind {
    /// `x = n / k` (or `int x = n / k;`), `k > 1`.
    DivideByB(i64),
    /// `x = n - c` (or `int x = n - c;`), `c >= 1`.
    DecreaseByC(i64),
}

#[derive(Debug, Clone)]
struct AliasEntry {
    name: String,
    kind: AliasKind,
}

/// Per-function alias table. Rebinding the same name overwrites the previous entry.
#[derive(Debug, Clone, Default)]
pub struct AliasTable {
    entries: Vec<AliasEntry>,
}

impl AliasTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records (or overwrites) the binding for `name` from a classification of its right-hand
    /// side. A classification with neither `divide_b` nor `decrease_c` set is not recorded —
    /// entries classified as "none" are simply absent.
    pub fn record(&mut self, name: &str, classification: Classification) {
        let kind = if let Some(b) = classification.divide_b {
            AliasKind::DivideByB(b)
        } else if let Some(c) = classification.decrease_c {
            AliasKind::DecreaseByC(c)
        } else {
            return;
        };

        if let Some(entry) = self.entries.iter_mut().find(|e| e.name == name) {
            entry.kind = kind;
        } else {
            self.entries.push(AliasEntry { name: name.to_string(), kind });
        }
    }

    /// Looks up the most recent binding for `name`, if any.
    pub fn lookup(&self, name: &str) -> Option<AliasKind> {
        self.entries.iter().find(|e| e.name == name).map(|e| e.kind)
    }
}
