//! Browser bindings.
//!
//! Exposes `createChatWidget(options)` to JavaScript:
//!
//! ```js
//! const widget = createChatWidget({
//!     selector: "#chat",
//!     token: "demo-token-123",
//!     baseUrl: "https://api.example.com",
//! });
//! widget?.onClose(() => console.log("closed"));
//! widget?.open();
//! ```

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicUsize, Ordering};

use dioxus::prelude::VirtualDom;
use futures::StreamExt;
use palaver_core::WidgetConfig;
use palaver_logging::PalaverSubscriberBuilder;
use palaver_ui::{App, WidgetEvent, WidgetLink};
use tracing::{error, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element};

use crate::error::MountResult;
use crate::handle::WidgetHandle;
use crate::host::WidgetHost;
use crate::mount::mount;
use crate::options::EmbedOptions;

static NEXT_ROOT: AtomicUsize = AtomicUsize::new(1);

/// The page the script runs in
pub struct BrowserHost {
    document: Document,
}

impl BrowserHost {
    pub fn new() -> Option<Self> {
        let document = web_sys::window()?.document()?;
        Some(Self { document })
    }
}

impl WidgetHost for BrowserHost {
    type Container = Element;

    fn find_container(&self, selector: &str) -> Option<Element> {
        match self.document.query_selector(selector) {
            Ok(found) => found,
            Err(e) => {
                warn!(selector, error = ?e, "Invalid selector");
                None
            }
        }
    }

    fn launch(
        &self,
        container: Element,
        config: WidgetConfig,
        link: WidgetLink,
    ) -> MountResult<()> {
        // The renderer finds its root by id.
        let mut root_id = container.id();
        if root_id.is_empty() {
            root_id = format!("palaver-root-{}", NEXT_ROOT.fetch_add(1, Ordering::Relaxed));
            container.set_id(&root_id);
        }

        let vdom = VirtualDom::new(App)
            .with_root_context(config)
            .with_root_context(link);
        let web_config = dioxus::web::Config::new().rootname(root_id);

        spawn_local(async move {
            dioxus::web::run(vdom, web_config).await;
        });
        Ok(())
    }
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    // A second module instance on the same page keeps the first logger.
    let _ = PalaverSubscriberBuilder::new().init();
}

/// JavaScript handle for one mounted widget
#[wasm_bindgen]
pub struct ChatWidgetHandle {
    inner: WidgetHandle,
    close_listeners: Rc<RefCell<Vec<js_sys::Function>>>,
}

#[wasm_bindgen]
impl ChatWidgetHandle {
    pub fn open(&self) {
        self.inner.open();
    }

    pub fn close(&self) {
        self.inner.close();
    }

    pub fn toggle(&self) {
        self.inner.toggle();
    }

    /// Call `callback` every time the panel closes.
    #[wasm_bindgen(js_name = onClose)]
    pub fn on_close(&self, callback: js_sys::Function) {
        self.close_listeners.borrow_mut().push(callback);
    }
}

impl ChatWidgetHandle {
    fn new(mut inner: WidgetHandle) -> Self {
        let close_listeners: Rc<RefCell<Vec<js_sys::Function>>> = Rc::default();

        if let Some(mut events) = inner.take_events() {
            let listeners = close_listeners.clone();
            spawn_local(async move {
                while let Some(event) = events.next().await {
                    match event {
                        WidgetEvent::Closed => notify_all(&listeners),
                    }
                }
            });
        }

        Self {
            inner,
            close_listeners,
        }
    }
}

fn notify_all(listeners: &Rc<RefCell<Vec<js_sys::Function>>>) {
    // Clone out so a listener can register another without a borrow conflict.
    let snapshot = listeners.borrow().clone();
    for listener in snapshot {
        if let Err(e) = listener.call0(&JsValue::NULL) {
            warn!(error = ?e, "onClose listener threw");
        }
    }
}

/// Mount a widget. Returns `undefined` if the options are invalid or the
/// container does not exist.
#[wasm_bindgen(js_name = createChatWidget)]
pub fn create_chat_widget(options: JsValue) -> Option<ChatWidgetHandle> {
    let options: EmbedOptions = match serde_wasm_bindgen::from_value(options) {
        Ok(options) => options,
        Err(e) => {
            error!(error = %e, "Invalid chat widget options");
            return None;
        }
    };

    let Some(host) = BrowserHost::new() else {
        error!("No document to mount the chat widget into");
        return None;
    };

    mount(&host, options).map(ChatWidgetHandle::new)
}
