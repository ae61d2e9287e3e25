//! The simulated input device implementations.

pub mod gamepad;
pub mod keyboard;
pub mod null;

use crate::source::InputSource;

/// All input device constructors. Each returns a boxed source.
pub fn all_sources() -> Vec<Box<dyn InputSource>> {
    vec![
        Box::new(keyboard::KeyboardSource::new()),
        Box::new(gamepad::GamepadSource::new()),
        Box::new(null::NullSource::new()),
    ]
}
