//! Message input row.

use dioxus::prelude::*;

pub const INPUT_PLACEHOLDER: &str = "Type your message...";

/// Text field and send button.
///
/// The field is disabled while a reply is pending. Enter or the send button
/// submits; the controller ignores blank drafts either way.
#[component]
pub fn ChatInput(
    draft: String,
    pending: bool,
    can_submit: bool,
    on_send: EventHandler<()>,
    on_draft_change: EventHandler<String>,
) -> Element {
    rsx! {
        div {
            class: "palaver-input-row",
            input {
                class: "palaver-input",
                r#type: "text",
                placeholder: INPUT_PLACEHOLDER,
                value: "{draft}",
                disabled: pending,
                oninput: move |evt| on_draft_change.call(evt.value()),
                onkeydown: move |evt: KeyboardEvent| {
                    if evt.key() == Key::Enter && !evt.modifiers().shift() {
                        evt.prevent_default();
                        on_send.call(());
                    }
                },
            }
            button {
                class: "palaver-send",
                r#type: "button",
                disabled: !can_submit,
                onclick: move |_| on_send.call(()),
                "Send"
            }
        }
    }
}
