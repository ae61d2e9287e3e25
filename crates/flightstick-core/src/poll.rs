//! Fixed-frame polling loop that turns raw directional queries into attitude
//! lines.
//!
//! Per frame the loop resolves each axis to exactly one outcome. Queries are
//! independent at the source, so both directions of an axis can fire in the
//! same frame; the first-queried direction wins (`up` over `down`, `left`
//! over `right`). That tie-break is a contract callers and tests rely on,
//! not an evaluation-order accident.

use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use crate::source::InputSource;

/// Line printed at the top of every frame.
pub const SEPARATOR: &str = "===================";

/// Frames a default loop runs before terminating.
pub const DEFAULT_FRAMES: u32 = 5;

/// Pause between frames in a default loop.
pub const DEFAULT_PACING: Duration = Duration::from_secs(1);

/// Pitch-axis outcome for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pitch {
    Up,
    Down,
    Level,
}

impl std::fmt::Display for Pitch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Up => write!(f, "Pitch up"),
            Self::Down => write!(f, "Pitch down"),
            Self::Level => write!(f, "Plane is level"),
        }
    }
}

/// Roll-axis outcome for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Roll {
    Left,
    Right,
    Straight,
}

impl std::fmt::Display for Roll {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Left => write!(f, "Roll left"),
            Self::Right => write!(f, "Roll right"),
            Self::Straight => write!(f, "Plane is flying straight"),
        }
    }
}

/// Resolve the pitch axis for one frame.
///
/// `up` is queried first and short-circuits `down`: a frame where both fire
/// reports [`Pitch::Up`], and `down` is never queried in that frame.
pub fn resolve_pitch(source: &mut dyn InputSource) -> Pitch {
    if source.up() {
        Pitch::Up
    } else if source.down() {
        Pitch::Down
    } else {
        Pitch::Level
    }
}

/// Resolve the roll axis for one frame. `left` wins over `right`, same
/// short-circuit as the pitch axis.
pub fn resolve_roll(source: &mut dyn InputSource) -> Roll {
    if source.left() {
        Roll::Left
    } else if source.right() {
        Roll::Right
    } else {
        Roll::Straight
    }
}

/// Fixed-frame consumer of an [`InputSource`].
///
/// Borrows the device for the duration of [`run`](PollLoop::run); it never
/// owns it. Each frame writes a separator, the pitch line, the roll line,
/// and a blank line, then sleeps for the pacing interval. Pacing exists only
/// to keep the output human-paced; `Duration::ZERO` disables it.
#[derive(Debug, Clone)]
pub struct PollLoop {
    frames: u32,
    pacing: Duration,
}

impl PollLoop {
    /// Loop with the default frame count and pacing.
    pub fn new() -> Self {
        Self {
            frames: DEFAULT_FRAMES,
            pacing: DEFAULT_PACING,
        }
    }

    /// Set the number of frames to run.
    pub fn frames(mut self, frames: u32) -> Self {
        self.frames = frames;
        self
    }

    /// Set the pause between frames.
    pub fn pacing(mut self, pacing: Duration) -> Self {
        self.pacing = pacing;
        self
    }

    /// Poll `source` for the configured number of frames, writing each
    /// frame's lines to `out`.
    ///
    /// Pitch resolves before roll within a frame, matching the query order
    /// the devices replay.
    pub fn run<W: Write>(&self, source: &mut dyn InputSource, out: &mut W) -> io::Result<()> {
        let mut remaining = self.frames;
        while remaining != 0 {
            writeln!(out, "{SEPARATOR}")?;
            let pitch = resolve_pitch(source);
            writeln!(out, "{pitch}")?;
            let roll = resolve_roll(source);
            writeln!(out, "{roll}")?;
            writeln!(out)?;
            // Flush so the frame lands before the pacing sleep.
            out.flush()?;
            log::debug!(
                "frame {}/{}: {pitch:?} / {roll:?}",
                self.frames - remaining + 1,
                self.frames
            );
            if !self.pacing.is_zero() {
                thread::sleep(self.pacing);
            }
            remaining -= 1;
        }
        Ok(())
    }
}

impl Default for PollLoop {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{SourceInfo, SourceKind};
    use crate::sources::null::NullSource;

    static TRIPWIRE_INFO: SourceInfo = SourceInfo {
        name: "tripwire",
        description: "Fires every winning direction, panics on the losing one",
        kind: SourceKind::Simulated,
        bias: 1.0,
    };

    /// `up` and `left` always fire; querying the short-circuited direction
    /// panics the test.
    #[derive(Debug)]
    struct TripwireSource;

    impl InputSource for TripwireSource {
        fn info(&self) -> &SourceInfo {
            &TRIPWIRE_INFO
        }

        fn up(&mut self) -> bool {
            true
        }

        fn down(&mut self) -> bool {
            panic!("down queried after up fired")
        }

        fn left(&mut self) -> bool {
            true
        }

        fn right(&mut self) -> bool {
            panic!("right queried after left fired")
        }
    }

    #[test]
    fn outcome_display_strings() {
        assert_eq!(Pitch::Up.to_string(), "Pitch up");
        assert_eq!(Pitch::Down.to_string(), "Pitch down");
        assert_eq!(Pitch::Level.to_string(), "Plane is level");
        assert_eq!(Roll::Left.to_string(), "Roll left");
        assert_eq!(Roll::Right.to_string(), "Roll right");
        assert_eq!(Roll::Straight.to_string(), "Plane is flying straight");
    }

    #[test]
    fn winning_direction_short_circuits_the_axis() {
        let mut src = TripwireSource;
        assert_eq!(resolve_pitch(&mut src), Pitch::Up);
        assert_eq!(resolve_roll(&mut src), Roll::Left);
    }

    #[test]
    fn null_source_frames_are_level_and_straight() {
        let mut src = NullSource::new();
        let mut out = Vec::new();
        PollLoop::new()
            .frames(3)
            .pacing(Duration::ZERO)
            .run(&mut src, &mut out)
            .unwrap();

        let text = String::from_utf8(out).unwrap();
        let frame = format!("{SEPARATOR}\nPlane is level\nPlane is flying straight\n\n");
        assert_eq!(text, frame.repeat(3));
    }

    #[test]
    fn zero_frames_writes_nothing() {
        let mut src = NullSource::new();
        let mut out = Vec::new();
        PollLoop::new()
            .frames(0)
            .pacing(Duration::ZERO)
            .run(&mut src, &mut out)
            .unwrap();
        assert!(out.is_empty());
    }
}
