use dioxus::prelude::*;

use phumpanya_common::session::Action;
use phumpanya_common::toast::Toast;

use super::session_state::{send, use_session};

/// How often the queue is swept for expired notifications.
#[cfg(target_family = "wasm")]
const SWEEP_MS: u32 = 1_000;

/// Stack of notifications. Each one disappears on its own after the
/// configured duration, or earlier when dismissed.
#[component]
pub fn ToastContainer() -> Element {
    let session = use_session();

    use_future(move || async move {
        loop {
            #[cfg(target_family = "wasm")]
            gloo_timers::future::TimeoutFuture::new(SWEEP_MS).await;
            #[cfg(not(target_family = "wasm"))]
            std::future::pending::<()>().await;

            if !session.peek().toasts().is_empty() {
                send(session, Action::ExpireToasts);
            }
        }
    });

    let toasts: Vec<Toast> = session.read().toasts().iter().cloned().collect();

    rsx! {
        div { class: "toast-container", aria_live: "polite",
            for toast in toasts {
                ToastCard { key: "{toast.id}", toast }
            }
        }
    }
}

#[component]
fn ToastCard(toast: Toast) -> Element {
    let session = use_session();
    let id = toast.id;
    let class = toast.kind.css_class();

    rsx! {
        div { class, role: "status",
            div { class: "toast-text",
                p { class: "toast-title", "{toast.title}" }
                p { class: "toast-message", "{toast.message}" }
            }
            button {
                class: "toast-close",
                aria_label: "ปิด",
                onclick: move |_| send(session, Action::DismissToast { id }),
                "×"
            }
        }
    }
}
