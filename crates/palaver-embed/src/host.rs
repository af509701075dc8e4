//! Seam between the mount logic and the page it mounts into.

use palaver_core::WidgetConfig;
use palaver_ui::WidgetLink;

use crate::error::MountResult;

/// A page that can host widgets.
///
/// The browser implementation lives in `web`; tests use an in-memory page.
pub trait WidgetHost {
    /// Handle to a container element
    type Container;

    /// Look up the first element matching `selector`.
    fn find_container(&self, selector: &str) -> Option<Self::Container>;

    /// Start rendering a widget inside `container`.
    fn launch(
        &self,
        container: Self::Container,
        config: WidgetConfig,
        link: WidgetLink,
    ) -> MountResult<()>;
}
