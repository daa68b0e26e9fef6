//! Deciding whether the pointer rests over something clickable.

use glam::Vec2;

/// Host-supplied query: is the given viewport point over an interactive
/// target?
pub trait HoverProbe {
    fn is_interactive_at(&self, point: Vec2) -> bool;
}

/// What the host could learn about the element under the pointer.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ElementTraits {
    pub tag_name: String,
    /// The element or one of its ancestors is an `a` or a `button`.
    pub inside_link_or_button: bool,
    /// The element or one of its ancestors has `data-hoverable="true"`.
    pub marked_hoverable: bool,
    pub computed_cursor: String,
}

impl ElementTraits {
    pub fn is_interactive(&self) -> bool {
        let tag = self.tag_name.as_str();
        tag.eq_ignore_ascii_case("button")
            || tag.eq_ignore_ascii_case("a")
            || self.inside_link_or_button
            || self.marked_hoverable
            || self.computed_cursor.trim() == "pointer"
    }
}
