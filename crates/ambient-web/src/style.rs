// CSS for the elements the layers own. Pure string building so it can be
// checked on the host.

use ambient_core::{HaloStyle, Rgb};
use glam::Vec2;

/// Backdrop canvas: fixed, full-viewport, behind content, never hit-tested.
pub const FIELD_CANVAS_STYLE: &[(&str, &str)] = &[
    ("position", "fixed"),
    ("inset", "0"),
    ("z-index", "0"),
    ("opacity", "0.4"),
    ("pointer-events", "none"),
    ("transition", "opacity 1000ms"),
];

pub const CROSSHAIR_STYLE: &[(&str, &str)] = &[
    ("position", "fixed"),
    ("top", "0"),
    ("left", "0"),
    ("z-index", "9999"),
    ("pointer-events", "none"),
    ("mix-blend-mode", "difference"),
    ("width", "16px"),
    ("height", "16px"),
    ("display", "flex"),
    ("align-items", "center"),
    ("justify-content", "center"),
];

pub const CROSSHAIR_VERTICAL_BAR: &[(&str, &str)] = &[
    ("width", "1px"),
    ("height", "12px"),
    ("background", "#fff"),
];

pub const CROSSHAIR_HORIZONTAL_BAR: &[(&str, &str)] = &[
    ("position", "absolute"),
    ("width", "12px"),
    ("height", "1px"),
    ("background", "#fff"),
];

pub const HALO_STYLE: &[(&str, &str)] = &[
    ("position", "fixed"),
    ("top", "0"),
    ("left", "0"),
    ("z-index", "9998"),
    ("pointer-events", "none"),
    ("border-radius", "50%"),
    ("border-width", "1px"),
    ("border-style", "solid"),
    ("box-sizing", "border-box"),
];

/// Places an element's center on `p` (viewport px).
pub fn centered_transform(p: Vec2) -> String {
    format!(
        "translate3d({:.2}px, {:.2}px, 0) translate(-50%, -50%)",
        p.x, p.y
    )
}

#[inline]
pub fn px(v: f32) -> String {
    format!("{:.2}px", v)
}

pub fn border_color(rgb: Rgb) -> String {
    rgb.to_string()
}

/// Per-frame halo properties.
pub fn halo_properties(center: Vec2, halo: &HaloStyle) -> [(&'static str, String); 6] {
    [
        ("transform", centered_transform(center)),
        ("width", px(halo.diameter)),
        ("height", px(halo.diameter)),
        ("opacity", format!("{:.3}", halo.opacity)),
        ("background-color", halo.fill.to_string()),
        ("border-color", border_color(halo.border)),
    ]
}
