//! Conversation panel: header, history, and input.

use dioxus::prelude::*;
use palaver_core::Message;

use super::chat_input::ChatInput;
use super::chat_messages::ChatMessageList;

pub const PANEL_TITLE: &str = "Chat Support";

#[component]
pub fn ChatPanel(
    messages: Vec<Message>,
    draft: String,
    pending: bool,
    can_submit: bool,
    on_send: EventHandler<()>,
    on_close: EventHandler<()>,
    on_draft_change: EventHandler<String>,
) -> Element {
    rsx! {
        div {
            class: "palaver-panel",
            role: "dialog",
            "aria-label": PANEL_TITLE,

            div {
                class: "palaver-header",
                span { class: "palaver-title", "{PANEL_TITLE}" }
                button {
                    class: "palaver-close",
                    r#type: "button",
                    "aria-label": "Close chat",
                    onclick: move |_| on_close.call(()),
                    "\u{2715}"
                }
            }

            ChatMessageList { messages, pending }

            ChatInput { draft, pending, can_submit, on_send, on_draft_change }
        }
    }
}
