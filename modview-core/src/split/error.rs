//! Error types for split tree operations
//!
//! This module defines the error type and outcome enums used by the tree
//! mutators. None of these conditions are fatal: the view controller turns
//! every error into a logged no-op.

use super::types::{PaneId, Slot, SplitId};

/// Errors that can occur during split tree operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    /// The referenced split is not (or no longer) part of the tree.
    #[error("split not found: {0}")]
    SplitNotFound(SplitId),

    /// The referenced pane is not (or no longer) part of the tree.
    #[error("pane not found: {0}")]
    PaneNotFound(PaneId),

    /// Inserting would create a split deeper than the configured limit.
    #[error("depth limit exceeded at split {split_id}: depth {depth} > max {max_depth}")]
    DepthLimitExceeded {
        /// The split that was targeted.
        split_id: SplitId,
        /// Depth the new nested split would have had.
        depth: usize,
        /// Configured maximum depth.
        max_depth: usize,
    },

    /// Neither a leaf nor a slot of the split was hit.
    #[error("no leaf hit inside split {0}")]
    NoLeafHit(SplitId),

    /// The slot holds a nested split, which cannot be removed as a leaf.
    #[error("slot {slot} of split {split_id} holds a container, not a leaf")]
    ContainerNotRemovable {
        /// The split whose slot was targeted.
        split_id: SplitId,
        /// The targeted slot.
        slot: Slot,
    },
}

/// Result type for split tree operations.
pub type LayoutResult<T> = Result<T, LayoutError>;

/// Where an insert will land, decided before the tree is touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// The target has an empty slot; the leaf goes straight into it.
    Fill(Slot),
    /// Both slots are occupied; the given slot is displaced into a new split.
    Nest(Slot),
}

/// Result of inserting a leaf into the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InsertOutcome {
    /// The leaf was placed in an empty slot of the target split.
    Placed {
        /// The split that received the leaf.
        split_id: SplitId,
        /// The slot the leaf now occupies.
        slot: Slot,
    },
    /// A new split was created in the target's slot to hold the displaced
    /// content and the new leaf.
    Nested {
        /// The split whose slot was replaced.
        parent_id: SplitId,
        /// The newly created split.
        split_id: SplitId,
        /// The parent slot the new split was installed in.
        slot: Slot,
    },
}

impl InsertOutcome {
    /// Returns true if a new split was created.
    #[must_use]
    pub const fn is_nested(&self) -> bool {
        matches!(self, Self::Nested { .. })
    }

    /// Returns the split that directly holds the new leaf.
    #[must_use]
    pub const fn holder(&self) -> &SplitId {
        match self {
            Self::Placed { split_id, .. } | Self::Nested { split_id, .. } => split_id,
        }
    }
}
