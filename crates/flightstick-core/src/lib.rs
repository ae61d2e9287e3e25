//! # flightstick-core
//!
//! Simulated directional input devices for a toy flight-control display.
//!
//! Three devices live behind the [`InputSource`] trait: a "keyboard" that
//! fires every direction with even odds, a "gamecontroller" with a lower
//! trigger rate, and a "null" device that never fires. The registry builds a
//! device from its name, and [`PollLoop`] polls whichever device it is
//! handed for a fixed number of frames, emitting one pitch line and one roll
//! line per frame.
//!
//! ## Quick Start
//!
//! ```
//! use std::time::Duration;
//!
//! use flightstick_core::{PollLoop, create_source};
//!
//! let mut source = create_source("keyboard").unwrap();
//! let mut out = Vec::new();
//! PollLoop::new()
//!     .frames(5)
//!     .pacing(Duration::ZERO)
//!     .run(source.as_mut(), &mut out)
//!     .unwrap();
//! assert!(!out.is_empty());
//! ```
//!
//! ## Architecture
//!
//! Registry (name → device) → InputSource (queries) → PollLoop → text
//!
//! Device draws are deterministic: each simulated device owns a fixed-seed
//! generator, so every run replays the same input pattern.

pub mod error;
pub mod poll;
pub mod registry;
pub mod source;
pub mod sources;

pub use error::{FlightstickError, Result};
pub use poll::{
    DEFAULT_FRAMES, DEFAULT_PACING, Pitch, PollLoop, Roll, SEPARATOR, resolve_pitch, resolve_roll,
};
pub use registry::{DEVICE_NAMES, create_source};
pub use source::{InputSource, SourceInfo, SourceKind};
pub use sources::all_sources;

/// Library version (from Cargo.toml).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
