//! Tunables and the per-instance configuration derived from them.
//!
//! `FieldConfig::for_viewport` is the only place device-class branching
//! happens; rendering code only ever sees the resulting record.

use crate::color::Rgb;
use crate::constants::*;
use crate::error::{AmbientError, Result};
use crate::mode::DisplayMode;
use crate::spring::SpringConfig;

/// Logical (CSS pixel) viewport size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Replaces non-finite or non-positive extents with the desktop fallback.
    pub fn sanitized(self) -> Self {
        let fix = |v: f32, fallback: f32| if v.is_finite() && v > 0.0 { v } else { fallback };
        Self {
            width: fix(self.width, FALLBACK_VIEWPORT[0]),
            height: fix(self.height, FALLBACK_VIEWPORT[1]),
        }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Viewport::new(FALLBACK_VIEWPORT[0], FALLBACK_VIEWPORT[1])
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeviceClass {
    Mobile,
    Desktop,
}

impl DeviceClass {
    pub fn classify(viewport_width: f32, breakpoint: f32) -> Self {
        if viewport_width < breakpoint {
            DeviceClass::Mobile
        } else {
            DeviceClass::Desktop
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct FieldTuning {
    pub mobile_breakpoint: f32,
    pub desktop_count: usize,
    pub mobile_count: usize,
    pub desktop_connection_distance: f32,
    pub mobile_connection_distance: f32,
    pub mobile_speed_factor: f32,
    pub particle_alpha: f32,
    pub edge_max_alpha: f32,
    pub line_width: f32,
    pub max_radius: f32,
    pub resize_debounce_ms: u64,
}

impl Default for FieldTuning {
    fn default() -> Self {
        Self {
            mobile_breakpoint: MOBILE_BREAKPOINT,
            desktop_count: DESKTOP_PARTICLE_COUNT,
            mobile_count: MOBILE_PARTICLE_COUNT,
            desktop_connection_distance: DESKTOP_CONNECTION_DISTANCE,
            mobile_connection_distance: MOBILE_CONNECTION_DISTANCE,
            mobile_speed_factor: MOBILE_SPEED_FACTOR,
            particle_alpha: PARTICLE_ALPHA,
            edge_max_alpha: EDGE_MAX_ALPHA,
            line_width: EDGE_LINE_WIDTH,
            max_radius: MAX_PARTICLE_RADIUS,
            resize_debounce_ms: RESIZE_DEBOUNCE_MS,
        }
    }
}

impl FieldTuning {
    pub fn validate(&self) -> Result<()> {
        positive("mobile_breakpoint", self.mobile_breakpoint)?;
        positive("desktop_connection_distance", self.desktop_connection_distance)?;
        positive("mobile_connection_distance", self.mobile_connection_distance)?;
        positive("mobile_speed_factor", self.mobile_speed_factor)?;
        positive("line_width", self.line_width)?;
        positive("max_radius", self.max_radius)?;
        unit("particle_alpha", self.particle_alpha)?;
        unit("edge_max_alpha", self.edge_max_alpha)?;
        Ok(())
    }
}

/// Immutable parameters for one simulation instance.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldConfig {
    pub device: DeviceClass,
    pub mode: DisplayMode,
    pub count: usize,
    pub connection_distance: f32,
    pub speed: f32,
    pub accent: Rgb,
    pub particle_alpha: f32,
    pub edge_max_alpha: f32,
    pub line_width: f32,
    pub max_radius: f32,
}

impl FieldConfig {
    pub fn for_viewport(viewport_width: f32, mode: DisplayMode, tuning: &FieldTuning) -> Self {
        let device = DeviceClass::classify(viewport_width, tuning.mobile_breakpoint);
        let (count, connection_distance, speed) = match device {
            DeviceClass::Mobile => (
                tuning.mobile_count,
                tuning.mobile_connection_distance,
                mode.base_speed() * tuning.mobile_speed_factor,
            ),
            DeviceClass::Desktop => (
                tuning.desktop_count,
                tuning.desktop_connection_distance,
                mode.base_speed(),
            ),
        };
        Self {
            device,
            mode,
            count,
            connection_distance,
            speed,
            accent: mode.accent(),
            particle_alpha: tuning.particle_alpha,
            edge_max_alpha: tuning.edge_max_alpha,
            line_width: tuning.line_width,
            max_radius: tuning.max_radius,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct CursorTuning {
    pub halo_diameter: f32,
    pub halo_hover_diameter: f32,
    pub halo_opacity: f32,
    pub halo_hover_opacity: f32,
    pub hover_fill_alpha: f32,
    pub position_spring: SpringConfig,
    pub appearance_spring: SpringConfig,
}

impl Default for CursorTuning {
    fn default() -> Self {
        Self {
            halo_diameter: HALO_DIAMETER,
            halo_hover_diameter: HALO_HOVER_DIAMETER,
            halo_opacity: HALO_OPACITY,
            halo_hover_opacity: HALO_HOVER_OPACITY,
            hover_fill_alpha: HALO_HOVER_FILL_ALPHA,
            position_spring: SpringConfig::POSITION,
            appearance_spring: SpringConfig::APPEARANCE,
        }
    }
}

impl CursorTuning {
    pub fn validate(&self) -> Result<()> {
        positive("halo_diameter", self.halo_diameter)?;
        positive("halo_hover_diameter", self.halo_hover_diameter)?;
        unit("halo_opacity", self.halo_opacity)?;
        unit("halo_hover_opacity", self.halo_hover_opacity)?;
        unit("hover_fill_alpha", self.hover_fill_alpha)?;
        self.position_spring.validate()?;
        self.appearance_spring.validate()?;
        Ok(())
    }
}

pub(crate) fn positive(field: &'static str, v: f32) -> Result<()> {
    if v.is_finite() && v > 0.0 {
        Ok(())
    } else {
        Err(AmbientError::InvalidTuning {
            field,
            reason: "must be finite and > 0",
        })
    }
}

fn unit(field: &'static str, v: f32) -> Result<()> {
    if (0.0..=1.0).contains(&v) {
        Ok(())
    } else {
        Err(AmbientError::InvalidTuning {
            field,
            reason: "must be within 0..=1",
        })
    }
}
