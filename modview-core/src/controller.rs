//! View controller for a modular view
//!
//! This module provides [`ViewController`], which owns the split tree for
//! the lifetime of one view and exposes the command entry points the
//! presentation layer forwards pointer and drop events to.
//!
//! Commands never panic and never return errors. A stale id, a refused
//! nesting or a hit outside the layout is logged at debug level and the
//! command becomes a no-op. Every command either applies its whole change,
//! compaction included, or leaves the tree untouched.
//!
//! # Example
//!
//! ```
//! use modview_core::{HitNode, LayoutSettings, SequentialIdGenerator, Slot, ViewController};
//!
//! let mut view = ViewController::with_root_id(
//!     LayoutSettings::default(),
//!     "r",
//!     SequentialIdGenerator::new("p"),
//! );
//!
//! let a = view.on_drop(&[HitNode::split("r")], "left").unwrap();
//! view.on_drop(&[HitNode::split("r")], "right").unwrap();
//! assert_eq!(view.to_render_tree().leaf_count(), 2);
//!
//! let chain = [HitNode::leaf(a.as_str()), HitNode::slot(Slot::First), HitNode::split("r")];
//! let removed = view.on_request_remove(&chain).unwrap();
//! assert_eq!(removed.content, "left");
//! ```

use crate::config::LayoutSettings;
use crate::geometry::{Point, Rect, division_at};
use crate::render::RenderBox;
use crate::resolver::{DropTarget, HitNode, leaf_in_chain, resolve_drop, resolve_resize_handle};
use crate::split::{
    IdGenerator, LayoutError, LayoutResult, Pane, PaneId, Slot, SlotContent, SplitId,
    UuidIdGenerator, ViewNode,
};
use crate::tracing::span_names;

/// An in-progress resize drag on one split.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResizeSession {
    /// The split whose division follows the pointer.
    pub split_id: SplitId,
}

/// Owns the split tree of one view and applies commands to it.
///
/// # Lifecycle
///
/// The root split is created with the controller and lives until the
/// controller is dropped. It is never removed by compaction, so an empty
/// view is a root with two empty slots.
#[derive(Debug)]
pub struct ViewController<L, G: IdGenerator = UuidIdGenerator> {
    root: ViewNode<L>,
    settings: LayoutSettings,
    ids: G,
    active_resize: Option<ResizeSession>,
    revision: u64,
}

impl<L> ViewController<L> {
    /// Creates a controller with an empty root and random ids.
    #[must_use]
    pub fn new(settings: LayoutSettings) -> Self {
        Self::with_id_generator(settings, UuidIdGenerator)
    }
}

impl<L> Default for ViewController<L> {
    fn default() -> Self {
        Self::new(LayoutSettings::default())
    }
}

impl<L, G: IdGenerator> ViewController<L, G> {
    /// Creates a controller that draws every id, the root's included, from `ids`.
    #[must_use]
    pub fn with_id_generator(settings: LayoutSettings, mut ids: G) -> Self {
        let root_id = ids.next_split_id();
        Self::with_root_id(settings, root_id, ids)
    }

    /// Creates a controller whose root split has a fixed id.
    #[must_use]
    pub fn with_root_id(settings: LayoutSettings, root_id: impl Into<SplitId>, ids: G) -> Self {
        let root = ViewNode::new(root_id, settings.root_orientation);
        tracing::debug!(root_id = %root.id, orientation = %root.orientation, "Created view");
        Self {
            root,
            settings,
            ids,
            active_resize: None,
            revision: 0,
        }
    }

    /// Returns the root split.
    pub const fn root(&self) -> &ViewNode<L> {
        &self.root
    }

    /// Returns the settings the controller was created with.
    pub const fn settings(&self) -> &LayoutSettings {
        &self.settings
    }

    /// Returns a counter that changes after every applied mutation.
    ///
    /// The presentation layer re-registers its drop targets whenever this
    /// differs from the value it last rendered.
    pub const fn revision(&self) -> u64 {
        self.revision
    }

    /// Returns the active resize session, if any.
    pub const fn active_resize(&self) -> Option<&ResizeSession> {
        self.active_resize.as_ref()
    }

    /// Builds the render description of the current tree.
    pub fn to_render_tree(&self) -> RenderBox<'_, L> {
        RenderBox::from_node(&self.root)
    }

    // ========================================================================
    // Drop and Removal Commands
    // ========================================================================

    /// Inserts `payload` as a new leaf at the split the drop landed on.
    ///
    /// The slot entered on the way up is used as the preferred slot when the
    /// split is full. Returns the id of the new leaf, or `None` if the drop
    /// was refused, in which case the payload is dropped.
    pub fn on_drop(&mut self, chain: &[HitNode], payload: L) -> Option<PaneId> {
        self.try_drop(chain, payload).ok()
    }

    /// Like [`ViewController::on_drop`], but hands a refused payload back.
    ///
    /// # Errors
    ///
    /// Returns the payload if the drop landed outside the layout, on a
    /// split that no longer exists, or would nest past `max_depth`.
    pub fn try_drop(&mut self, chain: &[HitNode], payload: L) -> Result<PaneId, L> {
        let Some(target) = resolve_drop(chain) else {
            tracing::debug!("Drop outside layout ignored");
            return Err(payload);
        };
        let _span = crate::trace_operation!(
            span_names::LAYOUT_DROP,
            split_id = %target.split_id,
            slot = ?target.entered_slot.map(Slot::index)
        )
        .entered();

        let placement = match self.root.placement_for(
            &target.split_id,
            target.entered_slot,
            self.settings.max_depth,
        ) {
            Ok(placement) => placement,
            Err(err) => {
                tracing::debug!(%err, "Drop refused");
                return Err(payload);
            }
        };

        let pane_id = self.ids.next_pane_id();
        let pane = Pane::new(pane_id.clone(), payload);
        match self
            .root
            .insert_at(&target.split_id, pane, placement, &mut self.ids)
        {
            Ok(outcome) => {
                self.mark_changed();
                tracing::debug!(
                    pane_id = %pane_id,
                    holder = %outcome.holder(),
                    nested = outcome.is_nested(),
                    revision = self.revision,
                    "Leaf inserted"
                );
                Ok(pane_id)
            }
            Err(pane) => {
                tracing::debug!("Drop target vanished before insert");
                Err(pane.content)
            }
        }
    }

    /// Removes the leaf the remove request was raised on.
    ///
    /// The leaf is identified by the pane id found in the chain; without one
    /// the slot entered on the way up is used. Slots holding a nested split
    /// are never removed. Returns the detached leaf so the caller can
    /// dispose of its content.
    pub fn on_request_remove(&mut self, chain: &[HitNode]) -> Option<Pane<L>> {
        let Some(target) = resolve_drop(chain) else {
            tracing::debug!("Remove request outside layout ignored");
            return None;
        };
        let _span =
            crate::trace_operation!(span_names::LAYOUT_REMOVE, split_id = %target.split_id)
                .entered();

        let removed = self
            .locate_leaf(&target, chain)
            .and_then(|slot| self.root.remove(&target.split_id, slot));

        match removed {
            Ok(SlotContent::Leaf(pane)) => {
                self.mark_changed();
                tracing::debug!(pane_id = %pane.id, revision = self.revision, "Leaf removed");
                Some(pane)
            }
            Ok(_) => None,
            Err(err) => {
                tracing::debug!(%err, "Remove request ignored");
                None
            }
        }
    }

    /// Removes a leaf by its pane id.
    pub fn remove_pane(&mut self, pane_id: &PaneId) -> Option<Pane<L>> {
        let _span = crate::trace_operation!(span_names::LAYOUT_REMOVE, pane_id = %pane_id).entered();
        match self.root.remove_pane(pane_id) {
            Ok(pane) => {
                self.mark_changed();
                tracing::debug!(revision = self.revision, "Leaf removed");
                Some(pane)
            }
            Err(err) => {
                tracing::debug!(%err, "Remove ignored");
                None
            }
        }
    }

    /// Finds the slot of `target` holding the leaf the chain points at.
    fn locate_leaf(&self, target: &DropTarget, chain: &[HitNode]) -> LayoutResult<Slot> {
        let node = self
            .root
            .find_by_id(&target.split_id)
            .ok_or_else(|| LayoutError::SplitNotFound(target.split_id.clone()))?;

        if let Some(pane_id) = leaf_in_chain(chain) {
            return [Slot::First, Slot::Second]
                .into_iter()
                .find(|&slot| node.slot(slot).as_leaf().is_some_and(|pane| pane.id == pane_id))
                .ok_or(LayoutError::PaneNotFound(pane_id));
        }

        let slot = target
            .entered_slot
            .ok_or_else(|| LayoutError::NoLeafHit(target.split_id.clone()))?;
        match node.slot(slot) {
            SlotContent::Leaf(_) => Ok(slot),
            SlotContent::Split(_) => Err(LayoutError::ContainerNotRemovable {
                split_id: target.split_id.clone(),
                slot,
            }),
            SlotContent::Empty => Err(LayoutError::NoLeafHit(target.split_id.clone())),
        }
    }

    // ========================================================================
    // Rotate Command
    // ========================================================================

    /// Flips the orientation of `split_id` and every split below it.
    ///
    /// Returns false if the split no longer exists.
    pub fn on_rotate_request(&mut self, split_id: &SplitId) -> bool {
        let _span = crate::trace_operation!(span_names::LAYOUT_ROTATE, split_id = %split_id).entered();
        match self.root.rotate(split_id) {
            Ok(()) => {
                self.mark_changed();
                tracing::debug!(revision = self.revision, "Subtree rotated");
                true
            }
            Err(err) => {
                tracing::debug!(%err, "Rotate ignored");
                false
            }
        }
    }

    // ========================================================================
    // Resize Session
    // ========================================================================

    /// Handles a pointer press anywhere in the view.
    ///
    /// Any resize still active from a missed release ends here. A new
    /// session starts if the press hit the resize handle of a split with
    /// both slots occupied. Returns true if a session was started.
    pub fn on_pointer_down(&mut self, chain: &[HitNode]) -> bool {
        if let Some(stale) = self.active_resize.take() {
            tracing::debug!(split_id = %stale.split_id, "Ended stale resize");
        }

        let Some(split_id) = resolve_resize_handle(chain) else {
            return false;
        };
        if !self.root.find_by_id(&split_id).is_some_and(ViewNode::is_full) {
            tracing::debug!(split_id = %split_id, "Resize refused on split without two children");
            return false;
        }

        tracing::debug!(split_id = %split_id, "Resize started");
        self.active_resize = Some(ResizeSession { split_id });
        true
    }

    /// Moves the division of the split being resized to follow the pointer.
    ///
    /// `bounds` is the split element's bounding box. Ignored unless a
    /// session for `split_id` is active. Returns the division now stored on
    /// the split. Replaying the same pointer yields the same division.
    pub fn on_resize_drag(&mut self, split_id: &SplitId, pointer: Point, bounds: Rect) -> Option<f64> {
        if self
            .active_resize
            .as_ref()
            .is_none_or(|session| &session.split_id != split_id)
        {
            return None;
        }
        let _span = crate::trace_operation_debug!(span_names::LAYOUT_RESIZE, split_id = %split_id)
            .entered();

        let Some(node) = self.root.find_by_id(split_id) else {
            tracing::debug!("Resized split vanished, ending session");
            self.active_resize = None;
            return None;
        };
        let previous = node.division;
        let division = division_at(node.orientation, bounds, pointer)?;

        match self.root.set_division(split_id, division) {
            Ok(applied) => {
                if (applied - previous).abs() > f64::EPSILON {
                    self.revision += 1;
                }
                tracing::trace!(division = applied, "Division updated");
                Some(applied)
            }
            Err(err) => {
                tracing::debug!(%err, "Resize ignored");
                None
            }
        }
    }

    /// Ends the active resize on pointer release.
    pub fn on_pointer_release(&mut self) -> Option<ResizeSession> {
        let ended = self.active_resize.take();
        if let Some(session) = &ended {
            tracing::debug!(split_id = %session.split_id, "Resize finished");
        }
        ended
    }

    /// Ends the active resize when the pointer leaves the view.
    pub fn on_pointer_leave(&mut self) -> Option<ResizeSession> {
        let ended = self.active_resize.take();
        if let Some(session) = &ended {
            tracing::debug!(split_id = %session.split_id, "Resize abandoned");
        }
        ended
    }

    /// Bumps the revision and drops a resize session whose split is gone.
    fn mark_changed(&mut self) {
        self.revision += 1;
        if self
            .active_resize
            .as_ref()
            .is_some_and(|session| !self.root.contains(&session.split_id))
        {
            self.active_resize = None;
        }
    }
}
