//! Channel pair connecting a mounted widget to the handle returned to the
//! embedding page.
//!
//! The handle pushes [`WidgetCommand`]s; the widget reports [`WidgetEvent`]s
//! back. The widget side ([`WidgetLink`]) is provided to the component tree
//! as context, so it must be `Clone`.

use std::sync::Arc;

use futures::channel::mpsc::{self, UnboundedReceiver, UnboundedSender};
use parking_lot::Mutex;
use tracing::debug;

/// Panel commands issued by the embedding page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetCommand {
    Open,
    Close,
    Toggle,
}

/// Notifications from the widget to the embedding page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetEvent {
    /// The panel went from open to closed
    Closed,
}

/// Widget-side end of the link.
#[derive(Debug, Clone)]
pub struct WidgetLink {
    commands: Arc<Mutex<Option<UnboundedReceiver<WidgetCommand>>>>,
    events: UnboundedSender<WidgetEvent>,
}

/// Page-side ends of the link.
#[derive(Debug)]
pub struct LinkEnds {
    pub commands: UnboundedSender<WidgetCommand>,
    pub events: UnboundedReceiver<WidgetEvent>,
}

impl WidgetLink {
    /// Create a connected link and its page-side ends.
    pub fn pair() -> (WidgetLink, LinkEnds) {
        let (command_tx, command_rx) = mpsc::unbounded();
        let (event_tx, event_rx) = mpsc::unbounded();

        let link = WidgetLink {
            commands: Arc::new(Mutex::new(Some(command_rx))),
            events: event_tx,
        };
        let ends = LinkEnds {
            commands: command_tx,
            events: event_rx,
        };
        (link, ends)
    }

    /// Take the command stream. Only the first caller gets it.
    pub fn take_commands(&self) -> Option<UnboundedReceiver<WidgetCommand>> {
        self.commands.lock().take()
    }

    /// Report an event to the page. Dropped silently if the page side is gone.
    pub fn notify(&self, event: WidgetEvent) {
        if self.events.unbounded_send(event).is_err() {
            debug!(?event, "Widget event dropped; handle released");
        }
    }
}
