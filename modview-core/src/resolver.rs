//! Interaction resolver for drop and pointer targets
//!
//! The presentation layer reports where a pointer or drop event landed as a
//! *hit chain*: the hit element followed by its ancestors up to the layout
//! root, each tagged with its role. This module maps such a chain to the
//! nearest enclosing split and the slot it was entered from, without any
//! knowledge of the UI toolkit and without touching the tree.

use crate::split::{PaneId, Slot, SplitId};

/// Role of an element in the presentation layer's layout tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitRole {
    /// The element of a split container. Carries the split id.
    Split,
    /// The wrapper of one of a split's slots.
    Slot(Slot),
    /// A split's resize handle. Never a drop target.
    ResizeHandle,
    /// The root element of a leaf. Carries the pane id.
    Leaf,
    /// Anything else (leaf internals, decorations).
    None,
}

/// One element of a hit chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HitNode {
    /// Role of the element.
    pub role: HitRole,
    /// Split id for `Split` elements, pane id for `Leaf` elements.
    pub id: Option<String>,
}

impl HitNode {
    /// A split container element.
    #[must_use]
    pub fn split(id: impl Into<String>) -> Self {
        Self {
            role: HitRole::Split,
            id: Some(id.into()),
        }
    }

    /// A slot wrapper element.
    #[must_use]
    pub const fn slot(slot: Slot) -> Self {
        Self {
            role: HitRole::Slot(slot),
            id: None,
        }
    }

    /// A resize handle element.
    #[must_use]
    pub const fn resize_handle() -> Self {
        Self {
            role: HitRole::ResizeHandle,
            id: None,
        }
    }

    /// The root element of a leaf.
    #[must_use]
    pub fn leaf(pane_id: impl Into<String>) -> Self {
        Self {
            role: HitRole::Leaf,
            id: Some(pane_id.into()),
        }
    }

    /// An untagged element.
    #[must_use]
    pub const fn plain() -> Self {
        Self {
            role: HitRole::None,
            id: None,
        }
    }
}

/// Capability provided by the presentation layer to walk up from a concrete
/// UI element to the layout root.
pub trait AncestorWalk {
    /// The toolkit's element handle.
    type Element;

    /// Returns the element itself followed by its ancestors, innermost
    /// first, each tagged with its role.
    fn hit_chain(&self, element: &Self::Element) -> Vec<HitNode>;
}

/// A resolved drop target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropTarget {
    /// The nearest enclosing split.
    pub split_id: SplitId,
    /// The slot the walk came from, if the step below the split was a slot.
    pub entered_slot: Option<Slot>,
}

/// Resolves a hit chain to the nearest enclosing split.
///
/// The walk stops with no match at a resize handle, at a split element
/// without an id, or when the chain runs out. No match means the event did
/// not land inside the layout and is not an error.
#[must_use]
pub fn resolve_drop(chain: &[HitNode]) -> Option<DropTarget> {
    let mut previous: Option<&HitNode> = None;

    for node in chain {
        match node.role {
            HitRole::ResizeHandle => return None,
            HitRole::Split => {
                let split_id = SplitId::new(node.id.clone()?);
                let entered_slot = previous.and_then(|prev| match prev.role {
                    HitRole::Slot(slot) => Some(slot),
                    _ => None,
                });
                return Some(DropTarget {
                    split_id,
                    entered_slot,
                });
            }
            _ => previous = Some(node),
        }
    }

    None
}

/// Resolves the element reported by `walker` to the nearest enclosing split.
#[must_use]
pub fn resolve_element<W: AncestorWalk>(walker: &W, element: &W::Element) -> Option<DropTarget> {
    resolve_drop(&walker.hit_chain(element))
}

/// Returns the split that owns the resize handle in the chain.
///
/// Only chains that pass through a resize handle before reaching any split
/// match; the owner is the first split above the handle.
#[must_use]
pub fn resolve_resize_handle(chain: &[HitNode]) -> Option<SplitId> {
    let mut ancestors = chain
        .iter()
        .skip_while(|node| !matches!(node.role, HitRole::ResizeHandle | HitRole::Split));

    match ancestors.next()?.role {
        HitRole::ResizeHandle => {}
        _ => return None,
    }

    ancestors
        .find(|node| node.role == HitRole::Split)
        .and_then(|node| node.id.clone())
        .map(SplitId::new)
}

/// Returns the pane id of the nearest leaf below the first split in the chain.
#[must_use]
pub fn leaf_in_chain(chain: &[HitNode]) -> Option<PaneId> {
    chain
        .iter()
        .take_while(|node| !matches!(node.role, HitRole::Split | HitRole::ResizeHandle))
        .find(|node| node.role == HitRole::Leaf)
        .and_then(|node| node.id.clone())
        .map(PaneId::new)
}
