//! Error types for the engine.
//!
//! The animations themselves never fail; errors only come from setup (a
//! missing surface, a bad config string). Hosts are expected to log them and
//! carry on without the effect.

use std::fmt;

#[derive(Debug)]
pub enum EngineError {
    /// The host could not provide a drawing surface or its container.
    SurfaceUnavailable(&'static str),
    /// A JSON config string could not be parsed.
    InvalidConfig(serde_json::Error),
    /// A viewport extent is negative or not finite.
    InvalidViewport { width: f32, height: f32 },
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::SurfaceUnavailable(what) => write!(f, "Drawing surface unavailable: {}", what),
            EngineError::InvalidConfig(e) => write!(f, "Invalid animation config: {}", e),
            EngineError::InvalidViewport { width, height } => {
                write!(f, "Viewport {}x{} is not a usable size", width, height)
            }
        }
    }
}

impl std::error::Error for EngineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EngineError::InvalidConfig(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for EngineError {
    fn from(e: serde_json::Error) -> Self {
        EngineError::InvalidConfig(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn display_messages() {
        let e = EngineError::SurfaceUnavailable("no 2d context");
        assert_eq!(e.to_string(), "Drawing surface unavailable: no 2d context");
        let e = EngineError::InvalidViewport { width: -1.0, height: 10.0 };
        assert_eq!(e.to_string(), "Viewport -1x10 is not a usable size");
    }

    #[test]
    fn config_error_keeps_source() {
        let json_err = serde_json::from_str::<u32>("nope").unwrap_err();
        let e: EngineError = json_err.into();
        assert!(e.source().is_some());
        assert!(e.to_string().starts_with("Invalid animation config"));
    }
}
