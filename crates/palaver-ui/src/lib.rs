//! Dioxus components for the Palaver chat widget.
//!
//! [`ChatWidget`] is the whole widget: a floating launcher and a
//! conversation panel driven by a `palaver_core::WidgetController`.
//! Renderers that mount it from outside Rust (the browser embed, the
//! desktop preview) launch [`App`] with a `WidgetConfig` and optionally a
//! [`WidgetLink`] in context.

pub mod chat;
pub mod link;
pub mod markdown;
pub mod theme;
pub mod widget;

pub use chat::{ChatBubble, ChatInput, ChatMessageList, ChatPanel, Launcher};
pub use link::{LinkEnds, WidgetCommand, WidgetEvent, WidgetLink};
pub use markdown::render_markup_to_html;
pub use theme::{WidgetFrame, frame_class};
pub use widget::{App, ChatWidget};

/// Widget stylesheet. Rendered inline by [`ChatWidget`].
pub const WIDGET_CSS: &str = include_str!("../assets/widget.css");
