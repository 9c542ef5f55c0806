//! Render description of a split tree
//!
//! The presentation layer never walks the tree itself. It receives a
//! [`RenderBox`] tree: one box per split with its orientation and the
//! weighted flex share of each occupied slot. The description is pure data
//! and borrows leaf content from the tree it was built from.

use crate::split::{Orientation, PaneId, Slot, SlotContent, SplitId, ViewNode};

/// A box for one split.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderBox<'a, L> {
    /// Id of the split; the presentation layer registers it as a drop target.
    pub split_id: &'a SplitId,
    /// Flex direction of the box.
    pub orientation: Orientation,
    /// Depth of the split in the tree.
    pub depth: usize,
    /// Children in slot order; empty slots are omitted.
    pub children: Vec<RenderChild<'a, L>>,
}

/// One weighted child of a box.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderChild<'a, L> {
    /// The slot this child occupies.
    pub slot: Slot,
    /// Flex share along the parent's axis.
    pub weight: f64,
    /// What to draw in the slot.
    pub content: RenderContent<'a, L>,
}

/// What a child renders.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderContent<'a, L> {
    /// A nested split.
    Box(RenderBox<'a, L>),
    /// A leaf, passed through by reference.
    Leaf {
        /// The pane wrapping the leaf.
        pane_id: &'a PaneId,
        /// The caller's content.
        content: &'a L,
    },
}

impl<'a, L> RenderBox<'a, L> {
    /// Builds the description for a split and everything below it.
    ///
    /// With both slots occupied the weights are `division` and
    /// `1 - division`; a lone child gets the full share.
    #[must_use]
    pub fn from_node(node: &'a ViewNode<L>) -> Self {
        let full = node.is_full();
        let children = [Slot::First, Slot::Second]
            .into_iter()
            .filter_map(|slot| {
                let weight = match (full, slot) {
                    (false, _) => 1.0,
                    (true, Slot::First) => node.division,
                    (true, Slot::Second) => 1.0 - node.division,
                };
                let content = match node.slot(slot) {
                    SlotContent::Empty => return None,
                    SlotContent::Leaf(pane) => RenderContent::Leaf {
                        pane_id: &pane.id,
                        content: &pane.content,
                    },
                    SlotContent::Split(nested) => RenderContent::Box(Self::from_node(nested)),
                };
                Some(RenderChild {
                    slot,
                    weight,
                    content,
                })
            })
            .collect();

        Self {
            split_id: &node.id,
            orientation: node.orientation,
            depth: node.depth,
            children,
        }
    }

    /// Returns true if a resize handle should be drawn between the children.
    #[must_use]
    pub fn has_resize_handle(&self) -> bool {
        self.children.len() == 2
    }

    /// Returns the number of boxes, including this one.
    #[must_use]
    pub fn box_count(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(|child| match &child.content {
                RenderContent::Box(nested) => nested.box_count(),
                RenderContent::Leaf { .. } => 0,
            })
            .sum::<usize>()
    }

    /// Returns the number of leaves in the description.
    #[must_use]
    pub fn leaf_count(&self) -> usize {
        self.children
            .iter()
            .map(|child| match &child.content {
                RenderContent::Box(nested) => nested.leaf_count(),
                RenderContent::Leaf { .. } => 1,
            })
            .sum()
    }
}

impl<L> RenderChild<'_, L> {
    /// Returns true if a delete affordance should be offered on hover.
    ///
    /// Only leaves are removable; containers never are.
    #[must_use]
    pub const fn offers_removal(&self) -> bool {
        matches!(self.content, RenderContent::Leaf { .. })
    }
}
