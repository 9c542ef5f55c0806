//! Core type definitions for the split layout tree
//!
//! This module contains the identifier newtypes and the small enums used
//! throughout the layout engine.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Unique identifier for a split node.
///
/// Split ids are opaque strings produced by the unique-id service. They stay
/// stable for the lifetime of the split and are the external handle used by
/// commands and by the presentation layer to correlate drop targets.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SplitId(String);

impl SplitId {
    /// Creates a split id from any string-like value.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SplitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SplitId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for SplitId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Unique identifier for a pane (the wrapper around a leaf).
///
/// Leaf content is opaque to the engine, so removal by identity compares
/// pane ids rather than the content itself.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PaneId(String);

impl PaneId {
    /// Creates a pane id from any string-like value.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PaneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PaneId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for PaneId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Layout axis along which a split arranges its two slots.
///
/// `Row` places the slots side by side (left/right), `Column` stacks them
/// (top/bottom).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Slots arranged along the horizontal axis.
    #[default]
    Row,
    /// Slots arranged along the vertical axis.
    Column,
}

impl Orientation {
    /// Returns the other axis.
    ///
    /// New splits take the complement of their parent's orientation so that
    /// nesting alternates by default.
    #[must_use]
    pub const fn complement(self) -> Self {
        match self {
            Self::Row => Self::Column,
            Self::Column => Self::Row,
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Row => write!(f, "row"),
            Self::Column => write!(f, "column"),
        }
    }
}

impl FromStr for Orientation {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "row" | "horizontal" => Ok(Self::Row),
            "column" | "vertical" => Ok(Self::Column),
            _ => Err(()),
        }
    }
}

/// One of the two child positions of a split.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    /// Slot 1 (left for `Row`, top for `Column`).
    First,
    /// Slot 2 (right for `Row`, bottom for `Column`).
    Second,
}

impl Slot {
    /// Returns the opposite slot.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::First => Self::Second,
            Self::Second => Self::First,
        }
    }

    /// Returns the 1-based slot number.
    #[must_use]
    pub const fn index(self) -> u8 {
        match self {
            Self::First => 1,
            Self::Second => 2,
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.index())
    }
}

impl FromStr for Slot {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(Self::First),
            "2" => Ok(Self::Second),
            _ => Err(()),
        }
    }
}
