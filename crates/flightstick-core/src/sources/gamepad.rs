//! GamepadSource — simulated game controller that fires less often than the
//! keyboard.
//!
//! Same mechanism as the keyboard, with a lower trigger probability and its
//! own fixed seed so the two devices replay distinct runs.

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::source::{InputSource, SourceInfo, SourceKind};

/// Probability that any single query reports its direction as pressed.
const GAMEPAD_BIAS: f64 = 0.3;

/// Fixed stream seed, distinct from the keyboard's.
const GAMEPAD_SEED: u64 = 99999;

static GAMEPAD_INFO: SourceInfo = SourceInfo {
    name: "gamecontroller",
    description: "Simulated game controller, less twitchy than a keyboard",
    kind: SourceKind::Simulated,
    bias: GAMEPAD_BIAS,
};

/// Simulated game controller input source.
#[derive(Debug)]
pub struct GamepadSource {
    rng: ChaCha8Rng,
}

impl GamepadSource {
    pub fn new() -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(GAMEPAD_SEED),
        }
    }

    /// Draw one stick state. One draw per query, shared stream across all
    /// four directions.
    fn sample(&mut self) -> bool {
        self.rng.random_bool(GAMEPAD_BIAS)
    }
}

impl Default for GamepadSource {
    fn default() -> Self {
        Self::new()
    }
}

impl InputSource for GamepadSource {
    fn info(&self) -> &SourceInfo {
        &GAMEPAD_INFO
    }

    fn up(&mut self) -> bool {
        self.sample()
    }

    fn down(&mut self) -> bool {
        self.sample()
    }

    fn left(&mut self) -> bool {
        self.sample()
    }

    fn right(&mut self) -> bool {
        self.sample()
    }
}
