use dioxus::prelude::*;

/// 16px caret-down glyph shown on parent node toggles. Rotation to the
/// expanded orientation is done in CSS via the toggle classes.
#[component]
pub fn CaretDownIcon(#[props(default)] class: String) -> Element {
    rsx! {
        svg {
            class: "{class}",
            xmlns: "http://www.w3.org/2000/svg",
            width: "16",
            height: "16",
            view_box: "0 0 16 16",
            fill: "currentColor",
            "aria-hidden": "true",
            path { d: "M8 11L3 6 3.9 5.1 8 9.2 12.1 5.1 13 6z" }
        }
    }
}
