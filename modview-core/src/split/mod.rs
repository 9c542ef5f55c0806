//! Split tree model
//!
//! This module provides the in-memory binary tree behind a modular view and
//! its pure structural operations. No I/O, no rendering.
//!
//! # Architecture
//!
//! - **Recursive slots**: each split has two slots holding nothing, a leaf,
//!   or another split
//! - **Stable identity**: splits and panes carry ids from an [`IdGenerator`]
//! - **Alternating axes**: nested splits take the complement of their
//!   parent's orientation
//! - **Compaction**: removal always leaves the tree in minimal form
//!
//! # Module Structure
//!
//! - `types` - Identifiers and enums (`SplitId`, `PaneId`, `Orientation`, `Slot`)
//! - `ids` - Unique-id service (`IdGenerator`)
//! - `tree` - Tree structure and mutators (`ViewNode`, `SlotContent`, `Pane`)
//! - `compact` - Compaction pass
//! - `error` - Error types (`LayoutError`, `InsertOutcome`)
//!
//! # Example
//!
//! ```
//! use modview_core::split::{
//!     Orientation, Pane, SequentialIdGenerator, SplitId, ViewNode,
//! };
//!
//! let mut ids = SequentialIdGenerator::new("n");
//! let mut root = ViewNode::new("r", Orientation::Row);
//! let r = SplitId::from("r");
//!
//! root.insert(&r, Pane::new("A", "first"), None, None, &mut ids).unwrap();
//! root.insert(&r, Pane::new("B", "second"), None, None, &mut ids).unwrap();
//! root.insert(&r, Pane::new("C", "third"), None, None, &mut ids).unwrap();
//!
//! // The third leaf nests slot 2 into a new column split
//! let nested = root.slot2.as_split().unwrap();
//! assert_eq!(nested.id.as_str(), "n1");
//! assert_eq!(nested.orientation, Orientation::Column);
//!
//! // Removing B promotes C and discards n1
//! root.remove(&SplitId::from("n1"), modview_core::split::Slot::First).unwrap();
//! assert_eq!(root.split_count(), 1);
//! ```

mod compact;
mod error;
mod ids;
mod tree;
mod types;

pub use error::{InsertOutcome, LayoutError, LayoutResult, Placement};
pub use ids::{IdGenerator, SequentialIdGenerator, UuidIdGenerator};
pub use tree::{DEFAULT_DIVISION, MAX_DIVISION, MIN_DIVISION, Pane, SlotContent, ViewNode};
pub use types::{Orientation, PaneId, Slot, SplitId};
