//! Handle returned to the embedding page

use futures::channel::mpsc::{UnboundedReceiver, UnboundedSender};
use palaver_ui::{LinkEnds, WidgetCommand, WidgetEvent};
use tracing::debug;

/// Controls one mounted widget.
///
/// Commands are queued and applied by the widget on its next turn of the
/// event loop. Dropping the handle leaves the widget running.
#[derive(Debug)]
pub struct WidgetHandle {
    selector: String,
    commands: UnboundedSender<WidgetCommand>,
    events: Option<UnboundedReceiver<WidgetEvent>>,
}

impl WidgetHandle {
    pub(crate) fn new(selector: String, ends: LinkEnds) -> Self {
        Self {
            selector,
            commands: ends.commands,
            events: Some(ends.events),
        }
    }

    /// Selector the widget was mounted with
    pub fn selector(&self) -> &str {
        &self.selector
    }

    pub fn open(&self) {
        self.send(WidgetCommand::Open);
    }

    pub fn close(&self) {
        self.send(WidgetCommand::Close);
    }

    pub fn toggle(&self) {
        self.send(WidgetCommand::Toggle);
    }

    /// Take the stream of widget events. Returns `None` after the first call.
    pub fn take_events(&mut self) -> Option<UnboundedReceiver<WidgetEvent>> {
        self.events.take()
    }

    fn send(&self, command: WidgetCommand) {
        if self.commands.unbounded_send(command).is_err() {
            debug!(?command, selector = %self.selector, "Widget no longer running");
        }
    }
}
