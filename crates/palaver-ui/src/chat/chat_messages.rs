//! Scrolling message list with the typing indicator.

use std::rc::Rc;

use dioxus::prelude::*;
use palaver_core::Message;

use super::chat_bubble::ChatBubble;

/// Message history. Scrolls to the newest entry whenever a message is
/// added or the typing indicator appears or goes away.
#[component]
pub fn ChatMessageList(messages: Vec<Message>, pending: bool) -> Element {
    let mut anchor = use_signal(|| None::<Rc<MountedData>>);
    let count = messages.len();

    use_effect(use_reactive((&count, &pending), move |(_count, _pending)| {
        if let Some(element) = anchor.read().clone() {
            spawn(async move {
                let _ = element.scroll_to(ScrollBehavior::Smooth).await;
            });
        }
    }));

    rsx! {
        div {
            class: "palaver-messages",
            role: "log",
            "aria-live": "polite",

            for message in messages {
                ChatBubble { key: "{message.id}", message }
            }

            if pending {
                TypingIndicator {}
            }

            div {
                class: "palaver-scroll-anchor",
                onmounted: move |evt| anchor.set(Some(evt.data())),
            }
        }
    }
}

/// Three animated dots shown while a reply is pending.
#[component]
pub fn TypingIndicator() -> Element {
    rsx! {
        div {
            class: "palaver-row palaver-row-bot",
            div {
                class: "palaver-bubble palaver-typing",
                "aria-label": "Assistant is typing",
                span { class: "palaver-dot" }
                span { class: "palaver-dot" }
                span { class: "palaver-dot" }
            }
        }
    }
}
