use crate::color::Rgb;
use crate::constants::{CLINIC_ACCENT_RGB, CLINIC_BASE_SPEED, DEV_ACCENT_RGB, DEV_BASE_SPEED};
use crate::error::AmbientError;
use std::fmt;
use std::str::FromStr;

/// Display theme supplied by the host page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DisplayMode {
    Dev,
    #[default]
    Clinic,
}

impl DisplayMode {
    pub fn accent(self) -> Rgb {
        match self {
            DisplayMode::Dev => Rgb::from(DEV_ACCENT_RGB),
            DisplayMode::Clinic => Rgb::from(CLINIC_ACCENT_RGB),
        }
    }

    /// Desktop particle speed in logical px per frame.
    pub fn base_speed(self) -> f32 {
        match self {
            DisplayMode::Dev => DEV_BASE_SPEED,
            DisplayMode::Clinic => CLINIC_BASE_SPEED,
        }
    }

    /// Parse a host-supplied flag, falling back to the default theme.
    pub fn parse_or_default(s: &str) -> Self {
        match s.parse() {
            Ok(m) => m,
            Err(e) => {
                log::warn!("{e}; using {}", DisplayMode::default());
                DisplayMode::default()
            }
        }
    }
}

impl FromStr for DisplayMode {
    type Err = AmbientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dev" => Ok(DisplayMode::Dev),
            "clinic" => Ok(DisplayMode::Clinic),
            _ => Err(AmbientError::UnknownMode(s.to_string())),
        }
    }
}

impl fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DisplayMode::Dev => f.write_str("dev"),
            DisplayMode::Clinic => f.write_str("clinic"),
        }
    }
}
