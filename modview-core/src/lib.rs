//! `modview` Core Library
//!
//! This crate provides a recursive split-pane layout engine: a binary tree of
//! resizable, re-orientable splits that host arbitrary caller-owned leaf
//! content. Leaves are inserted by drop, removed by request, resized by
//! dragging a split's handle and rotated a whole region at a time.
//!
//! The engine knows nothing about any UI toolkit. The presentation layer
//! reports events as hit chains, calls the [`ViewController`] commands and
//! draws the [`RenderBox`] description it gets back.
//!
//! # Crate Structure
//!
//! - [`split`] - Tree model (`ViewNode`, `SlotContent`), insert/remove/rotate and compaction
//! - [`resolver`] - Maps hit chains to the split and slot an event landed on
//! - [`controller`] - Owns the tree and exposes the command entry points
//! - [`render`] - Weighted box description of the tree
//! - [`geometry`] - Division from pointer position during a resize drag
//! - [`config`] - Layout settings loaded from TOML
//! - [`tracing`] - Structured logging setup and span names

// Enable missing_docs warning for public API documentation
#![warn(missing_docs)]

pub mod config;
pub mod controller;
pub mod geometry;
pub mod render;
pub mod resolver;
pub mod split;
pub mod tracing;

// =============================================================================
// Convenience re-exports
//
// Embedding hosts can import from the flat namespace
// (`modview_core::ViewController`) or via modular paths.
// =============================================================================

pub use config::{ConfigError, ConfigResult, LayoutSettings};
pub use controller::{ResizeSession, ViewController};
pub use geometry::{Point, Rect, division_at};
pub use render::{RenderBox, RenderChild, RenderContent};
pub use resolver::{
    AncestorWalk, DropTarget, HitNode, HitRole, leaf_in_chain, resolve_drop, resolve_element,
    resolve_resize_handle,
};
pub use split::{
    IdGenerator, InsertOutcome, LayoutError, LayoutResult, Orientation, Pane, PaneId, Placement,
    SequentialIdGenerator, Slot, SlotContent, SplitId, UuidIdGenerator, ViewNode,
};
pub use self::tracing::{
    TracingConfig, TracingError, TracingLevel, TracingOutput, TracingResult,
    get_tracing_config, init_tracing, is_tracing_initialized, span_names,
};
