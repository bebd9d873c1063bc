//! Shared utilities for the blp-plain CLI

pub mod format;
pub mod progress;

pub use format::*;
pub use progress::*;
