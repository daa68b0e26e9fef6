//! Cursor state: raw pointer, spring-smoothed halo, hover styling.

use crate::color::{Rgb, Rgba};
use crate::config::CursorTuning;
use crate::constants::POINTER_PARKED;
use crate::hover::HoverProbe;
use crate::mode::DisplayMode;
use crate::spring::Spring;
use glam::Vec2;

/// Pointer precision as reported by the platform.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerPrecision {
    Fine,
    Coarse,
    /// The capability query itself is unavailable.
    Unknown,
}

impl PointerPrecision {
    /// Only attach the custom cursor when a fine pointer is confirmed.
    pub fn supports_custom_cursor(self) -> bool {
        matches!(self, PointerPrecision::Fine)
    }
}

/// Visual state of the halo ring.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HaloStyle {
    pub diameter: f32,
    pub opacity: f32,
    pub fill: Rgba,
    pub border: Rgb,
}

/// Resting style the halo animates toward.
pub fn halo_target(hovering: bool, mode: DisplayMode, tuning: &CursorTuning) -> HaloStyle {
    let accent = mode.accent();
    if hovering {
        HaloStyle {
            diameter: tuning.halo_hover_diameter,
            opacity: tuning.halo_hover_opacity,
            fill: accent.with_alpha(tuning.hover_fill_alpha),
            border: accent,
        }
    } else {
        HaloStyle {
            diameter: tuning.halo_diameter,
            opacity: tuning.halo_opacity,
            fill: Rgba::transparent(accent),
            border: accent,
        }
    }
}

/// Everything the renderer needs for one cursor frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CursorFrame {
    /// Raw pointer position; the crosshair never lags.
    pub crosshair: Vec2,
    pub halo_center: Vec2,
    pub halo: HaloStyle,
}

#[derive(Clone, Debug)]
pub struct PointerTracker {
    tuning: CursorTuning,
    mode: DisplayMode,
    raw: Vec2,
    hovering: bool,
    halo_x: Spring,
    halo_y: Spring,
    diameter: Spring,
    opacity: Spring,
    fill_alpha: Spring,
}

impl PointerTracker {
    pub fn new(mode: DisplayMode, tuning: CursorTuning) -> Self {
        let [px, py] = POINTER_PARKED;
        let rest = halo_target(false, mode, &tuning);
        let (pos, look) = (tuning.position_spring, tuning.appearance_spring);
        Self {
            mode,
            raw: Vec2::new(px, py),
            hovering: false,
            halo_x: Spring::new(px, pos),
            halo_y: Spring::new(py, pos),
            diameter: Spring::new(rest.diameter, look),
            opacity: Spring::new(rest.opacity, look),
            fill_alpha: Spring::new(rest.fill.alpha, look),
            tuning,
        }
    }

    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    pub fn is_hovering(&self) -> bool {
        self.hovering
    }

    pub fn pointer_moved(&mut self, x: f32, y: f32) {
        self.raw = Vec2::new(x, y);
        self.halo_x.set_target(x);
        self.halo_y.set_target(y);
    }

    /// Re-classify hover for the current raw point.
    pub fn pointer_entered<P: HoverProbe + ?Sized>(&mut self, probe: &P) {
        let hovering = probe.is_interactive_at(self.raw);
        self.set_hovering(hovering);
    }

    pub fn set_hovering(&mut self, hovering: bool) {
        self.hovering = hovering;
        self.retarget_appearance();
    }

    /// Swap the accent; the fill keeps animating from where it is.
    pub fn set_mode(&mut self, mode: DisplayMode) {
        self.mode = mode;
        self.retarget_appearance();
    }

    fn retarget_appearance(&mut self) {
        let target = halo_target(self.hovering, self.mode, &self.tuning);
        self.diameter.set_target(target.diameter);
        self.opacity.set_target(target.opacity);
        self.fill_alpha.set_target(target.fill.alpha);
    }

    pub fn is_settled(&self) -> bool {
        [
            &self.halo_x,
            &self.halo_y,
            &self.diameter,
            &self.opacity,
            &self.fill_alpha,
        ]
        .iter()
        .all(|s| s.is_at_rest())
    }

    pub fn tick(&mut self, dt_sec: f32) -> CursorFrame {
        let halo_center = Vec2::new(self.halo_x.step(dt_sec), self.halo_y.step(dt_sec));
        let accent = self.mode.accent();
        // the appearance spring is underdamped; keep overshoot out of CSS
        let halo = HaloStyle {
            diameter: self.diameter.step(dt_sec).max(0.0),
            opacity: self.opacity.step(dt_sec).clamp(0.0, 1.0),
            fill: accent.with_alpha(self.fill_alpha.step(dt_sec)),
            border: accent,
        };
        CursorFrame {
            crosshair: self.raw,
            halo_center,
            halo,
        }
    }
}
