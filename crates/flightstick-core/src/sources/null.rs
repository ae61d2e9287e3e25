//! NullSource — inert input source that never reports input.
//!
//! Stands in for a real device when none is attached, so consumers can poll
//! unconditionally instead of guarding every call site.

use crate::source::{InputSource, SourceInfo, SourceKind};

static NULL_INFO: SourceInfo = SourceInfo {
    name: "null",
    description: "Inert device that never reports input",
    kind: SourceKind::Null,
    bias: 0.0,
};

/// Input source that answers `false` to every query. No state, no randomness.
#[derive(Debug)]
pub struct NullSource;

impl NullSource {
    pub fn new() -> Self {
        Self
    }
}

impl Default for NullSource {
    fn default() -> Self {
        Self::new()
    }
}

impl InputSource for NullSource {
    fn info(&self) -> &SourceInfo {
        &NULL_INFO
    }

    fn up(&mut self) -> bool {
        false
    }

    fn down(&mut self) -> bool {
        false
    }

    fn left(&mut self) -> bool {
        false
    }

    fn right(&mut self) -> bool {
        false
    }
}
