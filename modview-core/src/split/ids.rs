//! Unique-id service
//!
//! Every new split node and every inserted pane receives a fresh id from an
//! [`IdGenerator`]. The default generator uses random v4 UUIDs; the
//! sequential generator produces readable ids for tests and hosts that
//! want deterministic output.

use uuid::Uuid;

use super::types::{PaneId, SplitId};

/// Source of globally unique id strings.
pub trait IdGenerator {
    /// Returns a fresh id that has never been returned before.
    fn next_id(&mut self) -> String;

    /// Returns a fresh split id.
    fn next_split_id(&mut self) -> SplitId {
        SplitId::new(self.next_id())
    }

    /// Returns a fresh pane id.
    fn next_pane_id(&mut self) -> PaneId {
        PaneId::new(self.next_id())
    }
}

/// Generates ids from random v4 UUIDs.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn next_id(&mut self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Generates `"{prefix}1"`, `"{prefix}2"`, ... in order.
#[derive(Debug, Clone)]
pub struct SequentialIdGenerator {
    prefix: String,
    next: u64,
}

impl SequentialIdGenerator {
    /// Creates a generator whose first id is `"{prefix}1"`.
    #[must_use]
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: 1,
        }
    }
}

impl Default for SequentialIdGenerator {
    fn default() -> Self {
        Self::new("n")
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&mut self) -> String {
        let id = format!("{}{}", self.prefix, self.next);
        self.next += 1;
        id
    }
}

impl<G: IdGenerator + ?Sized> IdGenerator for &mut G {
    fn next_id(&mut self) -> String {
        (**self).next_id()
    }
}
