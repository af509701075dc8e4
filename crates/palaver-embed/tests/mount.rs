//! Mount tests against an in-memory page

use std::cell::RefCell;

use futures::StreamExt;
use futures::executor::block_on;
use palaver_core::{Position, Theme, WidgetConfig};
use palaver_embed::{EmbedOptions, MountError, WidgetHost, mount, try_mount};
use palaver_ui::{WidgetCommand, WidgetEvent, WidgetLink};

/// Page with a fixed set of selectors that resolve to elements
#[derive(Default)]
struct FakePage {
    elements: Vec<&'static str>,
    fail_launch: bool,
    mounted: RefCell<Vec<(String, WidgetConfig, WidgetLink)>>,
}

impl FakePage {
    fn with_elements(elements: &[&'static str]) -> Self {
        Self {
            elements: elements.to_vec(),
            ..Default::default()
        }
    }
}

impl WidgetHost for FakePage {
    type Container = String;

    fn find_container(&self, selector: &str) -> Option<String> {
        self.elements
            .iter()
            .find(|e| **e == selector)
            .map(|e| e.to_string())
    }

    fn launch(
        &self,
        container: String,
        config: WidgetConfig,
        link: WidgetLink,
    ) -> Result<(), MountError> {
        if self.fail_launch {
            return Err(MountError::Launch("renderer unavailable".into()));
        }
        self.mounted.borrow_mut().push((container, config, link));
        Ok(())
    }
}

fn options(selector: &str) -> EmbedOptions {
    EmbedOptions::new(selector, "demo-token-123", "https://api.example.com")
}

#[test]
fn test_mount_into_existing_container() {
    let page = FakePage::with_elements(&["#chat"]);
    let mut opts = options("#chat");
    opts.position = Some(Position::BottomLeft);
    opts.theme = Some(Theme::Dark);

    let handle = mount(&page, opts).expect("widget should mount");
    assert_eq!(handle.selector(), "#chat");

    let mounted = page.mounted.borrow();
    assert_eq!(mounted.len(), 1);
    let (container, config, _) = &mounted[0];
    assert_eq!(container, "#chat");
    assert_eq!(config.auth_token, "demo-token-123");
    assert_eq!(config.chat_endpoint(), "https://api.example.com/api/chat");
    assert_eq!(config.position, Position::BottomLeft);
    assert_eq!(config.theme, Some(Theme::Dark));
}

#[test]
fn test_missing_container_mounts_nothing() {
    let page = FakePage::with_elements(&["#chat"]);

    assert!(mount(&page, options("#missing")).is_none());
    assert!(page.mounted.borrow().is_empty());

    let err = try_mount(&page, options("#missing")).unwrap_err();
    assert_eq!(err, MountError::ContainerNotFound("#missing".into()));
}

#[test]
fn test_invalid_options_never_reach_the_page() {
    let page = FakePage::with_elements(&[""]);
    let err = try_mount(&page, options("")).unwrap_err();
    assert!(matches!(err, MountError::InvalidOptions(_)));
    assert!(page.mounted.borrow().is_empty());
}

#[test]
fn test_launch_failure_returns_none() {
    let page = FakePage {
        elements: vec!["#chat"],
        fail_launch: true,
        ..Default::default()
    };
    assert!(mount(&page, options("#chat")).is_none());
}

#[test]
fn test_handle_commands_reach_widget() {
    let page = FakePage::with_elements(&["#chat"]);
    let handle = mount(&page, options("#chat")).expect("mounted");

    handle.open();
    handle.toggle();
    handle.close();

    let link = page.mounted.borrow()[0].2.clone();
    let commands = link.take_commands().expect("command stream");
    let received: Vec<_> = block_on(commands.take(3).collect());
    assert_eq!(
        received,
        [WidgetCommand::Open, WidgetCommand::Toggle, WidgetCommand::Close]
    );
}

#[test]
fn test_close_events_reach_handle() {
    let page = FakePage::with_elements(&["#chat"]);
    let mut handle = mount(&page, options("#chat")).expect("mounted");
    let mut events = handle.take_events().expect("event stream");
    assert!(handle.take_events().is_none());

    let link = page.mounted.borrow()[0].2.clone();
    link.notify(WidgetEvent::Closed);
    assert_eq!(block_on(events.next()), Some(WidgetEvent::Closed));
}

#[test]
fn test_two_widgets_are_independent() {
    let page = FakePage::with_elements(&["#a", "#b"]);
    let first = mount(&page, options("#a")).expect("first");
    let _second = mount(&page, options("#b")).expect("second");

    first.open();

    let mounted = page.mounted.borrow();
    let mut a = mounted[0].2.take_commands().expect("a commands");
    let mut b = mounted[1].2.take_commands().expect("b commands");
    assert_eq!(block_on(a.next()), Some(WidgetCommand::Open));
    assert!(b.try_next().is_err());
}
