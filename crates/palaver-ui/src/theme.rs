//! Widget frame: anchors the launcher and panel to a page corner and
//! carries the color scheme as a `data-theme` attribute.

use dioxus::prelude::*;
use palaver_core::{Position, Theme};

/// Class list for the outermost widget element.
pub fn frame_class(position: Position) -> String {
    format!("palaver-widget palaver-{}", position.css_value())
}

/// Themed, positioned root wrapper.
#[component]
pub fn WidgetFrame(position: Position, theme: Theme, children: Element) -> Element {
    let class = frame_class(position);

    rsx! {
        div {
            class: "{class}",
            "data-theme": "{theme.css_value()}",
            {children}
        }
    }
}
