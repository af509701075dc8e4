//! Top-level widget component.
//!
//! [`ChatWidget`] owns one [`WidgetController`] in a signal. Every user
//! action goes through the controller; the chat components only render
//! snapshots of its state.

use dioxus::prelude::*;
use futures::StreamExt;
use palaver_core::{HttpTransport, WidgetConfig, WidgetController, deliver};
use tracing::{debug, warn};

use crate::WIDGET_CSS;
use crate::chat::{ChatPanel, Launcher};
use crate::link::{WidgetCommand, WidgetEvent, WidgetLink};
use crate::theme::WidgetFrame;

/// Launcher plus panel for one widget instance.
///
/// If a [`WidgetLink`] is in context, commands from the embedding page are
/// applied to the controller and panel closes are reported back.
#[component]
pub fn ChatWidget(
    config: WidgetConfig,
    #[props(default)] on_close: Option<EventHandler<()>>,
) -> Element {
    let link = try_use_context::<WidgetLink>();

    let mut controller = use_signal({
        let link = link.clone();
        move || {
            let transport = HttpTransport::new(&config);
            WidgetController::new(config, transport).with_close_callback(move || {
                if let Some(handler) = on_close {
                    handler.call(());
                }
                if let Some(link) = &link {
                    link.notify(WidgetEvent::Closed);
                }
            })
        }
    });

    use_hook(move || {
        let Some(mut commands) = link.as_ref().and_then(WidgetLink::take_commands) else {
            return;
        };
        spawn(async move {
            while let Some(command) = commands.next().await {
                debug!(?command, "Widget command");
                let mut ctrl = controller.write();
                match command {
                    WidgetCommand::Open => ctrl.open(),
                    WidgetCommand::Close => ctrl.close(),
                    WidgetCommand::Toggle => ctrl.toggle(),
                }
            }
        });
    });

    let on_send = move |_: ()| {
        let Some(exchange) = controller.write().begin_exchange() else {
            return;
        };
        let transport = controller.read().transport().clone();
        spawn(async move {
            let outcome = deliver(&transport, &exchange.request).await;
            if let Err(e) = controller.write().complete_exchange(&exchange, outcome) {
                warn!(error = %e, "Dropped chat reply");
            }
        });
    };

    let ctrl = controller.read();
    let state = ctrl.state();
    let is_open = state.is_panel_open();
    let messages = state.messages().to_vec();
    let draft = state.draft().to_string();
    let pending = state.is_pending();
    let can_submit = state.can_submit();
    let position = ctrl.config().position;
    let theme = ctrl.config().effective_theme();
    drop(ctrl);

    rsx! {
        style { {WIDGET_CSS} }
        WidgetFrame {
            position,
            theme,
            if is_open {
                ChatPanel {
                    messages,
                    draft,
                    pending,
                    can_submit,
                    on_send,
                    on_close: move |_| controller.write().close(),
                    on_draft_change: move |text: String| controller.write().set_draft(text),
                }
            }
            Launcher {
                is_open,
                on_toggle: move |_| controller.write().toggle(),
            }
        }
    }
}

/// Root component for renderers launched with a [`WidgetConfig`] in context.
#[component]
pub fn App() -> Element {
    let config = use_context::<WidgetConfig>();

    rsx! {
        ChatWidget { config }
    }
}
