//! Single message bubble.

use dioxus::prelude::*;
use palaver_core::{ContentFormat, Message, Origin};

use crate::markdown::render_markup_to_html;

/// Row class: user messages align right, bot messages left.
pub fn bubble_row_class(origin: Origin) -> &'static str {
    match origin {
        Origin::User => "palaver-row palaver-row-user",
        Origin::Bot => "palaver-row palaver-row-bot",
    }
}

#[component]
pub fn ChatBubble(message: Message) -> Element {
    let row_class = bubble_row_class(message.origin);
    let time = message.time_label();
    let body = match message.format {
        ContentFormat::Markup => {
            let html = render_markup_to_html(&message.content);
            rsx! {
                div { class: "palaver-markup", dangerous_inner_html: "{html}" }
            }
        }
        ContentFormat::Plain => rsx! {
            div { class: "palaver-plain", "{message.content}" }
        },
    };

    rsx! {
        div {
            class: "{row_class}",
            div {
                class: "palaver-bubble",
                title: "{time}",
                {body}
            }
        }
    }
}
