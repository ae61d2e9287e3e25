//! Name-keyed construction of input sources.
//!
//! The recognized device set is closed: three names, each bound to exactly
//! one constructor. Adding a device means one new module under `sources/`
//! and one new arm here; nothing else changes.

use crate::error::{FlightstickError, Result};
use crate::source::InputSource;
use crate::sources::{gamepad::GamepadSource, keyboard::KeyboardSource, null::NullSource};

/// Every device name the registry recognizes.
pub const DEVICE_NAMES: &[&str] = &["keyboard", "gamecontroller", "null"];

/// Construct the input source registered under `device`.
///
/// Returns a fully initialized source ready for querying, or
/// [`FlightstickError::UnknownDevice`] carrying the offending name. An
/// unknown name never yields a fallback device. Matching is exact and
/// case-sensitive.
pub fn create_source(device: &str) -> Result<Box<dyn InputSource>> {
    let source: Box<dyn InputSource> = match device {
        "keyboard" => Box::new(KeyboardSource::new()),
        "gamecontroller" => Box::new(GamepadSource::new()),
        "null" => Box::new(NullSource::new()),
        other => {
            return Err(FlightstickError::UnknownDevice {
                name: other.to_string(),
            });
        }
    };
    log::debug!("created input source '{}'", source.name());
    Ok(source)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_registered_name_constructs() {
        for name in DEVICE_NAMES {
            let mut src = create_source(name).expect("registered name failed to construct");
            assert_eq!(src.name(), *name);
            let _ = (src.up(), src.down(), src.left(), src.right());
        }
    }

    #[test]
    fn unknown_name_is_rejected() {
        let err = create_source("telepathy").unwrap_err();
        let FlightstickError::UnknownDevice { name } = err;
        assert_eq!(name, "telepathy");
    }

    #[test]
    fn matching_is_case_sensitive() {
        assert!(create_source("Keyboard").is_err());
        assert!(create_source("NULL").is_err());
    }
}
