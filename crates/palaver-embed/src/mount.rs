//! Mounting a widget into a host page

use palaver_ui::WidgetLink;
use tracing::{error, info, instrument};

use crate::error::{MountError, MountResult};
use crate::handle::WidgetHandle;
use crate::host::WidgetHost;
use crate::options::EmbedOptions;

/// Mount a widget into the element matching `options.selector`.
///
/// Failures are logged and reported as `None`; the page is left untouched.
/// Use [`try_mount`] to get the reason.
#[instrument(skip_all, fields(selector = %options.selector))]
pub fn mount<H: WidgetHost>(host: &H, options: EmbedOptions) -> Option<WidgetHandle> {
    match try_mount(host, options) {
        Ok(handle) => Some(handle),
        Err(e) => {
            error!(error = %e, "Chat widget not mounted");
            None
        }
    }
}

/// Mount a widget, returning why it failed.
pub fn try_mount<H: WidgetHost>(
    host: &H,
    options: EmbedOptions,
) -> MountResult<WidgetHandle> {
    options.validate()?;
    let (selector, config) = options.into_parts();

    let container = host
        .find_container(&selector)
        .ok_or_else(|| MountError::ContainerNotFound(selector.clone()))?;

    let endpoint = config.chat_endpoint();
    let (link, ends) = WidgetLink::pair();
    host.launch(container, config, link)?;

    info!(%selector, %endpoint, "Chat widget mounted");
    Ok(WidgetHandle::new(selector, ends))
}
