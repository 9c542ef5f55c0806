//! Configuration for the layout engine
//!
//! This module provides [`LayoutSettings`], loaded from and saved to TOML.
//! Only engine settings live here; the split tree itself is never
//! persisted.

mod settings;

pub use settings::{ConfigError, ConfigResult, LayoutSettings};
