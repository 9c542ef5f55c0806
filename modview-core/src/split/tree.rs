//! Split tree structure for modular views
//!
//! This module provides the binary tree used to represent a split-pane
//! layout. Every interior node is a [`ViewNode`] with two slots, and each
//! slot is either empty, a leaf [`Pane`], or another nested split.
//!
//! # Tree Structure
//!
//! ```text
//! Split(r, Row)
//! ├── Leaf(A)
//! └── Split(n1, Column)
//!     ├── Leaf(B)
//!     └── Leaf(C)
//! ```
//!
//! All mutators work in place on the tree owned by the caller. Each one
//! locates and validates its target before changing anything, so an error
//! always leaves the tree exactly as it was.

use super::error::{InsertOutcome, LayoutError, LayoutResult, Placement};
use super::ids::IdGenerator;
use super::types::{Orientation, PaneId, Slot, SplitId};

/// Default division (50% of available space to each slot).
pub const DEFAULT_DIVISION: f64 = 0.5;

/// Minimum valid division.
pub const MIN_DIVISION: f64 = 0.0;

/// Maximum valid division.
pub const MAX_DIVISION: f64 = 1.0;

/// A leaf placed into a slot.
///
/// The content is opaque to the engine and owned by the caller; the pane
/// only adds the identity used to find it again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pane<L> {
    /// Unique identifier for this pane.
    pub id: PaneId,
    /// Caller-owned content.
    pub content: L,
}

impl<L> Pane<L> {
    /// Wraps content under the given id.
    #[must_use]
    pub fn new(id: impl Into<PaneId>, content: L) -> Self {
        Self {
            id: id.into(),
            content,
        }
    }
}

/// The content of one slot of a split.
#[derive(Debug, Clone, PartialEq)]
pub enum SlotContent<L> {
    /// Nothing in the slot.
    Empty,
    /// A terminal leaf.
    Leaf(Pane<L>),
    /// A nested split.
    Split(Box<ViewNode<L>>),
}

impl<L> Default for SlotContent<L> {
    fn default() -> Self {
        Self::Empty
    }
}

impl<L> SlotContent<L> {
    /// Creates a leaf slot.
    #[must_use]
    pub fn leaf(id: impl Into<PaneId>, content: L) -> Self {
        Self::Leaf(Pane::new(id, content))
    }

    /// Creates a slot holding a nested split.
    #[must_use]
    pub fn split(node: ViewNode<L>) -> Self {
        Self::Split(Box::new(node))
    }

    /// Returns true if the slot holds nothing.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Returns true if the slot holds a leaf or a split.
    #[must_use]
    pub const fn is_occupied(&self) -> bool {
        !self.is_empty()
    }

    /// Returns true if the slot holds a leaf.
    #[must_use]
    pub const fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf(_))
    }

    /// Returns true if the slot holds a nested split.
    ///
    /// Containers never offer a delete affordance; only leaves do.
    #[must_use]
    pub const fn is_container(&self) -> bool {
        matches!(self, Self::Split(_))
    }

    /// Returns the pane if the slot holds a leaf.
    #[must_use]
    pub const fn as_leaf(&self) -> Option<&Pane<L>> {
        match self {
            Self::Leaf(pane) => Some(pane),
            _ => None,
        }
    }

    /// Returns the nested split if the slot holds one.
    #[must_use]
    pub fn as_split(&self) -> Option<&ViewNode<L>> {
        match self {
            Self::Split(node) => Some(&**node),
            _ => None,
        }
    }

    /// Returns a mutable reference to the nested split if the slot holds one.
    #[must_use]
    pub fn as_split_mut(&mut self) -> Option<&mut ViewNode<L>> {
        match self {
            Self::Split(node) => Some(&mut **node),
            _ => None,
        }
    }

    /// Takes the content out, leaving the slot empty.
    pub fn take(&mut self) -> Self {
        std::mem::replace(self, Self::Empty)
    }

    /// Consumes the slot and returns its pane, if it held a leaf.
    #[must_use]
    pub fn into_leaf(self) -> Option<Pane<L>> {
        match self {
            Self::Leaf(pane) => Some(pane),
            _ => None,
        }
    }
}

/// A split node containing two slots.
///
/// Slot 1 is the start side (left for `Row`, top for `Column`) and slot 2
/// the end side. `division` is the share of slot 1 and only matters while
/// both slots are occupied.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewNode<L> {
    /// Unique identifier, stable for the node's lifetime.
    pub id: SplitId,
    /// Axis along which the two slots are arranged.
    pub orientation: Orientation,
    /// Distance from the tree root.
    pub depth: usize,
    /// Share of slot 1 (0.0 to 1.0, default 0.5).
    pub division: f64,
    /// First slot.
    pub slot1: SlotContent<L>,
    /// Second slot.
    pub slot2: SlotContent<L>,
}

impl<L> ViewNode<L> {
    /// Creates an empty split at depth 0 with the default division.
    #[must_use]
    pub fn new(id: impl Into<SplitId>, orientation: Orientation) -> Self {
        Self {
            id: id.into(),
            orientation,
            depth: 0,
            division: DEFAULT_DIVISION,
            slot1: SlotContent::Empty,
            slot2: SlotContent::Empty,
        }
    }

    /// Creates a split with the given slot contents.
    ///
    /// Depths inside the new subtree are recomputed relative to this node.
    #[must_use]
    pub fn with_slots(
        id: impl Into<SplitId>,
        orientation: Orientation,
        slot1: SlotContent<L>,
        slot2: SlotContent<L>,
    ) -> Self {
        let mut node = Self {
            slot1,
            slot2,
            ..Self::new(id, orientation)
        };
        node.normalize_depths();
        node
    }

    /// Returns the content of a slot.
    #[must_use]
    pub const fn slot(&self, slot: Slot) -> &SlotContent<L> {
        match slot {
            Slot::First => &self.slot1,
            Slot::Second => &self.slot2,
        }
    }

    /// Returns a mutable reference to the content of a slot.
    pub fn slot_mut(&mut self, slot: Slot) -> &mut SlotContent<L> {
        match slot {
            Slot::First => &mut self.slot1,
            Slot::Second => &mut self.slot2,
        }
    }

    /// Returns true if both slots are occupied.
    #[must_use]
    pub const fn is_full(&self) -> bool {
        self.slot1.is_occupied() && self.slot2.is_occupied()
    }

    /// Returns true if both slots are empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.slot1.is_empty() && self.slot2.is_empty()
    }

    /// Returns the number of occupied slots (0, 1 or 2).
    #[must_use]
    pub fn occupied_slots(&self) -> usize {
        usize::from(self.slot1.is_occupied()) + usize::from(self.slot2.is_occupied())
    }

    // ========================================================================
    // Tree Traversal Methods
    // ========================================================================

    /// Finds a split by its ID.
    ///
    /// Searches in pre-order (self, slot 1 subtree, slot 2 subtree). Absence
    /// is a normal outcome, e.g. a stale drop target.
    #[must_use]
    pub fn find_by_id(&self, id: &SplitId) -> Option<&Self> {
        if &self.id == id {
            return Some(self);
        }
        self.slot1
            .as_split()
            .and_then(|node| node.find_by_id(id))
            .or_else(|| self.slot2.as_split().and_then(|node| node.find_by_id(id)))
    }

    /// Finds a split by its ID and returns a mutable reference.
    #[must_use]
    pub fn find_by_id_mut(&mut self, id: &SplitId) -> Option<&mut Self> {
        if &self.id == id {
            return Some(self);
        }
        if let Some(found) = self.slot1.as_split_mut().and_then(|n| n.find_by_id_mut(id)) {
            return Some(found);
        }
        self.slot2.as_split_mut().and_then(|n| n.find_by_id_mut(id))
    }

    /// Returns true if the tree contains a split with the given ID.
    #[must_use]
    pub fn contains(&self, id: &SplitId) -> bool {
        self.find_by_id(id).is_some()
    }

    /// Locates a pane, returning the split holding it and its slot.
    #[must_use]
    pub fn find_pane(&self, pane_id: &PaneId) -> Option<(&SplitId, Slot)> {
        for slot in [Slot::First, Slot::Second] {
            match self.slot(slot) {
                SlotContent::Leaf(pane) if &pane.id == pane_id => return Some((&self.id, slot)),
                SlotContent::Split(node) => {
                    if let Some(found) = node.find_pane(pane_id) {
                        return Some(found);
                    }
                }
                _ => {}
            }
        }
        None
    }

    /// Returns all split IDs in the tree, in pre-order.
    #[must_use]
    pub fn split_ids(&self) -> Vec<SplitId> {
        let mut ids = Vec::new();
        self.collect_split_ids(&mut ids);
        ids
    }

    fn collect_split_ids(&self, ids: &mut Vec<SplitId>) {
        ids.push(self.id.clone());
        for content in [&self.slot1, &self.slot2] {
            if let SlotContent::Split(node) = content {
                node.collect_split_ids(ids);
            }
        }
    }

    /// Returns all pane IDs in the tree, in pre-order.
    #[must_use]
    pub fn pane_ids(&self) -> Vec<PaneId> {
        let mut ids = Vec::new();
        self.collect_pane_ids(&mut ids);
        ids
    }

    fn collect_pane_ids(&self, ids: &mut Vec<PaneId>) {
        for content in [&self.slot1, &self.slot2] {
            match content {
                SlotContent::Empty => {}
                SlotContent::Leaf(pane) => ids.push(pane.id.clone()),
                SlotContent::Split(node) => node.collect_pane_ids(ids),
            }
        }
    }

    /// Returns the number of split nodes, including this one.
    #[must_use]
    pub fn split_count(&self) -> usize {
        1 + [&self.slot1, &self.slot2]
            .into_iter()
            .filter_map(SlotContent::as_split)
            .map(Self::split_count)
            .sum::<usize>()
    }

    /// Returns the number of leaves in the tree.
    #[must_use]
    pub fn pane_count(&self) -> usize {
        [&self.slot1, &self.slot2]
            .into_iter()
            .map(|content| match content {
                SlotContent::Empty => 0,
                SlotContent::Leaf(_) => 1,
                SlotContent::Split(node) => node.pane_count(),
            })
            .sum()
    }

    /// Returns the largest `depth` of any split in this subtree.
    #[must_use]
    pub fn max_depth(&self) -> usize {
        [&self.slot1, &self.slot2]
            .into_iter()
            .filter_map(SlotContent::as_split)
            .map(Self::max_depth)
            .max()
            .unwrap_or(self.depth)
    }

    /// Recomputes `depth` for every split below this one.
    ///
    /// Nodes move between levels when compaction promotes them or when an
    /// insert wraps existing content in a new split.
    pub fn normalize_depths(&mut self) {
        let depth = self.depth;
        for content in [&mut self.slot1, &mut self.slot2] {
            if let SlotContent::Split(node) = content {
                node.depth = depth + 1;
                node.normalize_depths();
            }
        }
    }

    // ========================================================================
    // Tree Mutation Methods
    // ========================================================================

    /// Decides where a leaf dropped on `target` would land.
    ///
    /// Empty slot 1 wins over empty slot 2. When both are occupied the
    /// preferred slot (default slot 2) is displaced into a new split, unless
    /// that split would be deeper than `max_depth`.
    ///
    /// # Errors
    ///
    /// - `LayoutError::SplitNotFound` if the target doesn't exist
    /// - `LayoutError::DepthLimitExceeded` if nesting is refused
    pub fn placement_for(
        &self,
        target: &SplitId,
        preferred: Option<Slot>,
        max_depth: Option<usize>,
    ) -> LayoutResult<Placement> {
        let node = self
            .find_by_id(target)
            .ok_or_else(|| LayoutError::SplitNotFound(target.clone()))?;

        if node.slot1.is_empty() {
            return Ok(Placement::Fill(Slot::First));
        }
        if node.slot2.is_empty() {
            return Ok(Placement::Fill(Slot::Second));
        }

        let depth = node.depth + 1;
        if let Some(max_depth) = max_depth {
            if depth > max_depth {
                return Err(LayoutError::DepthLimitExceeded {
                    split_id: target.clone(),
                    depth,
                    max_depth,
                });
            }
        }

        Ok(Placement::Nest(preferred.unwrap_or(Slot::Second)))
    }

    /// Inserts a leaf into the split `target`.
    ///
    /// See [`ViewNode::placement_for`] for how the slot is chosen. A new
    /// split takes the complement of the target's orientation, holds the
    /// displaced content in slot 1 and the new leaf in slot 2.
    ///
    /// # Errors
    ///
    /// Same as [`ViewNode::placement_for`]; the tree is untouched on error.
    pub fn insert<G: IdGenerator>(
        &mut self,
        target: &SplitId,
        pane: Pane<L>,
        preferred: Option<Slot>,
        max_depth: Option<usize>,
        ids: &mut G,
    ) -> LayoutResult<InsertOutcome> {
        let placement = self.placement_for(target, preferred, max_depth)?;
        self.insert_at(target, pane, placement, ids)
            .map_err(|_| LayoutError::SplitNotFound(target.clone()))
    }

    /// Inserts a leaf at a placement decided by [`ViewNode::placement_for`].
    ///
    /// # Errors
    ///
    /// Hands the pane back if `target` is not in the tree.
    pub fn insert_at<G: IdGenerator>(
        &mut self,
        target: &SplitId,
        pane: Pane<L>,
        placement: Placement,
        ids: &mut G,
    ) -> Result<InsertOutcome, Pane<L>> {
        let Some(node) = self.find_by_id_mut(target) else {
            return Err(pane);
        };

        match placement {
            Placement::Fill(slot) => {
                *node.slot_mut(slot) = SlotContent::Leaf(pane);
                Ok(InsertOutcome::Placed {
                    split_id: target.clone(),
                    slot,
                })
            }
            Placement::Nest(slot) => {
                let displaced = node.slot_mut(slot).take();
                let mut nested = Self {
                    id: ids.next_split_id(),
                    orientation: node.orientation.complement(),
                    depth: node.depth + 1,
                    division: DEFAULT_DIVISION,
                    slot1: displaced,
                    slot2: SlotContent::Leaf(pane),
                };
                nested.normalize_depths();

                let split_id = nested.id.clone();
                *node.slot_mut(slot) = SlotContent::split(nested);
                Ok(InsertOutcome::Nested {
                    parent_id: target.clone(),
                    split_id,
                    slot,
                })
            }
        }
    }

    /// Empties `slot` of split `split_id` and compacts the whole tree.
    ///
    /// Returns whatever the slot held so the caller keeps ownership of the
    /// leaf content. Call this on the tree root.
    ///
    /// # Errors
    ///
    /// Returns `LayoutError::SplitNotFound` if the split doesn't exist.
    pub fn remove(&mut self, split_id: &SplitId, slot: Slot) -> LayoutResult<SlotContent<L>> {
        let node = self
            .find_by_id_mut(split_id)
            .ok_or_else(|| LayoutError::SplitNotFound(split_id.clone()))?;
        let detached = node.slot_mut(slot).take();
        self.compact();
        Ok(detached)
    }

    /// Removes a leaf by pane identity and compacts the whole tree.
    ///
    /// # Errors
    ///
    /// Returns `LayoutError::PaneNotFound` if no slot holds the pane.
    pub fn remove_pane(&mut self, pane_id: &PaneId) -> LayoutResult<Pane<L>> {
        let (split_id, slot) = self
            .find_pane(pane_id)
            .map(|(split_id, slot)| (split_id.clone(), slot))
            .ok_or_else(|| LayoutError::PaneNotFound(pane_id.clone()))?;
        self.remove(&split_id, slot)?
            .into_leaf()
            .ok_or_else(|| LayoutError::PaneNotFound(pane_id.clone()))
    }

    /// Flips the orientation of `split_id` and of every split below it.
    ///
    /// # Errors
    ///
    /// Returns `LayoutError::SplitNotFound` if the split doesn't exist.
    pub fn rotate(&mut self, split_id: &SplitId) -> LayoutResult<()> {
        let node = self
            .find_by_id_mut(split_id)
            .ok_or_else(|| LayoutError::SplitNotFound(split_id.clone()))?;
        node.rotate_subtree();
        Ok(())
    }

    fn rotate_subtree(&mut self) {
        self.orientation = self.orientation.complement();
        for content in [&mut self.slot1, &mut self.slot2] {
            if let SlotContent::Split(node) = content {
                node.rotate_subtree();
            }
        }
    }

    /// Sets the division of `split_id`, clamped to `[0, 1]`.
    ///
    /// Non-finite values leave the division unchanged. Returns the division
    /// now stored on the split.
    ///
    /// # Errors
    ///
    /// Returns `LayoutError::SplitNotFound` if the split doesn't exist.
    pub fn set_division(&mut self, split_id: &SplitId, division: f64) -> LayoutResult<f64> {
        let node = self
            .find_by_id_mut(split_id)
            .ok_or_else(|| LayoutError::SplitNotFound(split_id.clone()))?;
        if division.is_finite() {
            node.division = division.clamp(MIN_DIVISION, MAX_DIVISION);
        }
        Ok(node.division)
    }
}
