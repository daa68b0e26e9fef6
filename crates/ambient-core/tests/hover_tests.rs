use ambient_core::ElementTraits;

fn el(tag: &str) -> ElementTraits {
    ElementTraits {
        tag_name: tag.to_string(),
        computed_cursor: "auto".to_string(),
        ..ElementTraits::default()
    }
}

#[test]
fn buttons_and_links_are_interactive() {
    assert!(el("BUTTON").is_interactive());
    assert!(el("A").is_interactive());
    // tag names from XHTML documents come back lowercase
    assert!(el("a").is_interactive());
}

#[test]
fn plain_elements_are_not() {
    for tag in ["DIV", "SPAN", "P", "SECTION", "ABBR"] {
        assert!(!el(tag).is_interactive(), "{tag}");
    }
}

#[test]
fn descendants_of_links_and_buttons_are_interactive() {
    let icon = ElementTraits {
        inside_link_or_button: true,
        ..el("SVG")
    };
    assert!(icon.is_interactive());
}

#[test]
fn hoverable_marker_is_interactive() {
    let card = ElementTraits {
        marked_hoverable: true,
        ..el("DIV")
    };
    assert!(card.is_interactive());
}

#[test]
fn pointer_cursor_style_is_interactive() {
    let custom = ElementTraits {
        computed_cursor: "pointer".to_string(),
        ..el("LI")
    };
    assert!(custom.is_interactive());

    let text = ElementTraits {
        computed_cursor: "text".to_string(),
        ..el("INPUT")
    };
    assert!(!text.is_interactive());
}
