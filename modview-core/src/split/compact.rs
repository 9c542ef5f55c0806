//! Compaction of the split tree
//!
//! After a removal the tree can contain splits with one or no occupied
//! slot. Compaction rewrites the tree into its minimal form:
//!
//! | nested slot 1 | nested slot 2 | parent's other slot | action on parent's slot      |
//! |---------------|---------------|---------------------|------------------------------|
//! | empty         | empty         | any                 | cleared                      |
//! | occupied      | empty         | any                 | nested slot 1 promoted       |
//! | empty         | occupied      | any                 | nested slot 2 promoted       |
//! | occupied      | occupied      | empty               | parent absorbs both children |
//! | occupied      | occupied      | occupied            | unchanged                    |
//!
//! A node is re-checked until a pass changes nothing before compaction
//! descends into its children. The root is never removed itself, so it is
//! the only split allowed to keep a single occupied slot.

use super::tree::{SlotContent, ViewNode};
use super::types::Slot;

/// Rewrite applied to one slot of a parent split.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Collapse {
    /// The nested split is empty and disappears.
    Clear,
    /// The nested split's only occupied slot replaces it.
    Promote(Slot),
    /// The parent takes over both of the nested split's slots.
    Absorb,
}

impl<L> ViewNode<L> {
    /// Compacts this subtree into minimal form and renormalizes depths.
    pub fn compact(&mut self) {
        self.compact_subtree();
        self.normalize_depths();
    }

    /// Returns true if no split below this node can be collapsed.
    ///
    /// This node itself may still have a single occupied slot.
    #[must_use]
    pub fn is_compact(&self) -> bool {
        [Slot::First, Slot::Second].into_iter().all(|slot| {
            self.collapse_for(slot).is_none()
                && self.slot(slot).as_split().is_none_or(Self::is_compact)
        })
    }

    fn compact_subtree(&mut self) {
        loop {
            while self.compact_own_slots() {}

            for content in [&mut self.slot1, &mut self.slot2] {
                if let SlotContent::Split(node) = content {
                    node.compact_subtree();
                }
            }

            // Compacting a child can expose a new collapse here
            if !self.has_collapsible_slot() {
                break;
            }
        }
    }

    /// Runs one pass over both slots; returns true if anything changed.
    fn compact_own_slots(&mut self) -> bool {
        let mut changed = false;
        for slot in [Slot::First, Slot::Second] {
            if let Some(collapse) = self.collapse_for(slot) {
                self.apply_collapse(slot, collapse);
                changed = true;
            }
        }
        changed
    }

    fn has_collapsible_slot(&self) -> bool {
        self.collapse_for(Slot::First).is_some() || self.collapse_for(Slot::Second).is_some()
    }

    fn collapse_for(&self, slot: Slot) -> Option<Collapse> {
        let nested = self.slot(slot).as_split()?;
        match (nested.slot1.is_occupied(), nested.slot2.is_occupied()) {
            (false, false) => Some(Collapse::Clear),
            (true, false) => Some(Collapse::Promote(Slot::First)),
            (false, true) => Some(Collapse::Promote(Slot::Second)),
            (true, true) if self.slot(slot.other()).is_empty() => Some(Collapse::Absorb),
            (true, true) => None,
        }
    }

    fn apply_collapse(&mut self, slot: Slot, collapse: Collapse) {
        let mut nested = match self.slot_mut(slot).take() {
            SlotContent::Split(nested) => *nested,
            other => {
                *self.slot_mut(slot) = other;
                return;
            }
        };

        match collapse {
            Collapse::Clear => {}
            Collapse::Promote(inner) => {
                *self.slot_mut(slot) = nested.slot_mut(inner).take();
            }
            Collapse::Absorb => {
                self.slot1 = nested.slot1;
                self.slot2 = nested.slot2;
            }
        }
    }
}
