//! # Palaver Embed
//!
//! Mount API for the Palaver chat widget.
//!
//! A host page calls [`mount`] (or `createChatWidget` from JavaScript when
//! built for `wasm32`) with an [`EmbedOptions`]. If the selector matches an
//! element, a widget is rendered inside it and a [`WidgetHandle`] is
//! returned for opening, closing, and listening for closes. If it does not,
//! the failure is logged and nothing on the page changes.
//!
//! Page access goes through the [`WidgetHost`] trait so the mount logic runs
//! the same against the browser and against an in-memory page in tests.

pub mod error;
pub mod handle;
pub mod host;
pub mod mount;
pub mod options;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use error::{MountError, MountResult};
pub use handle::WidgetHandle;
pub use host::WidgetHost;
pub use mount::{mount, try_mount};
pub use options::EmbedOptions;
