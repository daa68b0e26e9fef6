use ambient_core::{ElementTraits, HoverProbe};
use glam::Vec2;
use web_sys as web;

/// Classifies the element under a viewport point using the live DOM.
pub struct DomHoverProbe {
    window: web::Window,
    document: web::Document,
}

impl DomHoverProbe {
    pub fn new(window: web::Window, document: web::Document) -> Self {
        Self { window, document }
    }
}

impl HoverProbe for DomHoverProbe {
    fn is_interactive_at(&self, point: Vec2) -> bool {
        self.document
            .element_from_point(point.x, point.y)
            .map(|el| element_traits(&self.window, &el).is_interactive())
            .unwrap_or(false)
    }
}

pub fn element_traits(window: &web::Window, el: &web::Element) -> ElementTraits {
    let has_ancestor = |selector: &str| matches!(el.closest(selector), Ok(Some(_)));
    let computed_cursor = window
        .get_computed_style(el)
        .ok()
        .flatten()
        .and_then(|s| s.get_property_value("cursor").ok())
        .unwrap_or_default();
    ElementTraits {
        tag_name: el.tag_name(),
        inside_link_or_button: has_ancestor("a, button"),
        marked_hoverable: has_ancestor("[data-hoverable=\"true\"]"),
        computed_cursor,
    }
}
