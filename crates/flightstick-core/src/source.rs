//! Abstract input source trait and per-device metadata.
//!
//! Every simulated device implements the [`InputSource`] trait, which exposes
//! four independent directional queries plus metadata via [`SourceInfo`].

/// Behavioral class of an input source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceKind {
    /// Draws pseudo-random directional state on every query.
    Simulated,
    /// Never reports input.
    Null,
}

impl std::fmt::Display for SourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Simulated => write!(f, "simulated"),
            Self::Null => write!(f, "null"),
        }
    }
}

/// Metadata about an input source.
///
/// Each device declares its registry name, a human-readable description, its
/// behavioral class, and the probability that any single query reports the
/// direction as active.
#[derive(Debug, Clone)]
pub struct SourceInfo {
    /// Unique registry name (e.g. `"keyboard"`).
    pub name: &'static str,
    /// One-line human-readable description.
    pub description: &'static str,
    /// Behavioral class.
    pub kind: SourceKind,
    /// Probability that a single query returns `true`.
    pub bias: f64,
}

/// Trait that every input source must implement.
///
/// The four queries are independent: answering `up` says nothing about
/// `down`, so a single frame can report both directions of an axis at once.
/// Resolving that conflict is the consumer's job, see
/// [`resolve_pitch`](crate::poll::resolve_pitch) and
/// [`resolve_roll`](crate::poll::resolve_roll). Queries never block and never
/// fail; the only side effect a device may have is advancing its own
/// generator state.
pub trait InputSource: std::fmt::Debug {
    /// Source metadata.
    fn info(&self) -> &SourceInfo;

    /// Whether the device currently reports "up".
    fn up(&mut self) -> bool;

    /// Whether the device currently reports "down".
    fn down(&mut self) -> bool;

    /// Whether the device currently reports "left".
    fn left(&mut self) -> bool;

    /// Whether the device currently reports "right".
    fn right(&mut self) -> bool;

    /// Convenience: name from info.
    fn name(&self) -> &'static str {
        self.info().name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_display() {
        assert_eq!(SourceKind::Simulated.to_string(), "simulated");
        assert_eq!(SourceKind::Null.to_string(), "null");
    }
}
