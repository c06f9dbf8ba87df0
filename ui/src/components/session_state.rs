use std::sync::Arc;

use dioxus::prelude::*;

use phumpanya_common::catalog::Catalog;
use phumpanya_common::config::StoreConfig;
use phumpanya_common::session::{Action, Session};

/// Build the browsing session from the built-in catalog.
///
/// A rejected catalog is logged and replaced with an empty one so the
/// storefront still renders.
pub fn new_session() -> Session {
    let catalog = Catalog::builtin().unwrap_or_else(|e| {
        tracing::error!("Built-in catalog rejected: {e}");
        Catalog::default()
    });
    Session::new(Arc::new(catalog), StoreConfig::default())
}

/// The session signal provided at the top of the app.
pub fn use_session() -> Signal<Session> {
    use_context::<Signal<Session>>()
}

/// Dispatch an action from a click handler.
pub fn send(mut session: Signal<Session>, action: Action) {
    if let Err(e) = session.write().dispatch(action) {
        tracing::debug!("UI action ignored: {e}");
    }
}

/// Dispatch a page-changing action and scroll back to the top.
pub fn send_and_scroll(session: Signal<Session>, action: Action) {
    send(session, action);
    #[cfg(target_family = "wasm")]
    {
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
    }
}
