//! Floating launcher button.

use dioxus::prelude::*;

/// Icon shown on the launcher for the given panel state.
pub fn launcher_icon(is_open: bool) -> &'static str {
    if is_open { "\u{2715}" } else { "\u{1f4ac}" }
}

#[component]
pub fn Launcher(is_open: bool, on_toggle: EventHandler<()>) -> Element {
    let label = if is_open { "Close chat" } else { "Open chat" };

    rsx! {
        button {
            class: if is_open { "palaver-launcher palaver-launcher-open" } else { "palaver-launcher" },
            r#type: "button",
            "aria-label": "{label}",
            "aria-expanded": "{is_open}",
            onclick: move |_| on_toggle.call(()),
            "{launcher_icon(is_open)}"
        }
    }
}
