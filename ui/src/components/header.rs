use dioxus::prelude::*;

use phumpanya_common::navigation::Page;
use phumpanya_common::session::Action;

use super::session_state::{send_and_scroll, use_session};

pub const STORE_NAME: &str = "ตลาดภูมิปัญญา";

#[component]
pub fn Header() -> Element {
    let session = use_session();
    let mut menu_open = use_signal(|| false);

    let cart_count = session.read().cart().line_count();
    let current = session.read().page();

    rsx! {
        header { class: "app-header",
            div { class: "header-bar",
                button {
                    class: "brand",
                    onclick: move |_| {
                        send_and_scroll(session, Action::Navigate { page: Page::Home });
                        menu_open.set(false);
                    },
                    "{STORE_NAME}"
                }
                nav { class: "header-nav",
                    for page in Page::menu().iter().copied() {
                        button {
                            key: "{page}",
                            class: nav_class(current == page),
                            onclick: move |_| send_and_scroll(session, Action::Navigate { page }),
                            "{page.label()}"
                        }
                    }
                }
                div { class: "header-search",
                    SearchBar { on_search: move |_| menu_open.set(false) }
                }
                button {
                    class: "cart-button",
                    onclick: move |_| {
                        send_and_scroll(session, Action::Navigate { page: Page::Cart });
                        menu_open.set(false);
                    },
                    span { class: "sr-only", "{Page::Cart.label()}" }
                    "🛒"
                    if cart_count > 0 {
                        span { class: "cart-badge", "{cart_count}" }
                    }
                }
                button {
                    class: "menu-toggle",
                    aria_expanded: "{menu_open}",
                    onclick: move |_| menu_open.toggle(),
                    span { class: "sr-only", "เปิดเมนู" }
                    "☰"
                }
            }
            if menu_open() {
                div { class: "mobile-menu",
                    SearchBar { on_search: move |_| menu_open.set(false) }
                    for page in Page::menu().iter().copied() {
                        button {
                            key: "mobile-{page}",
                            class: "mobile-link",
                            onclick: move |_| {
                                send_and_scroll(session, Action::Navigate { page });
                                menu_open.set(false);
                            },
                            "{page.label()}"
                        }
                    }
                }
            }
        }
    }
}

fn nav_class(active: bool) -> &'static str {
    if active {
        "nav-link active"
    } else {
        "nav-link"
    }
}

/// Search box. Blank queries are not submitted.
#[component]
fn SearchBar(on_search: EventHandler<()>) -> Element {
    let session = use_session();
    let mut query = use_signal(String::new);

    rsx! {
        form {
            class: "search-bar",
            onsubmit: move |evt: FormEvent| {
                evt.prevent_default();
                let trimmed = query.read().trim().to_string();
                if !trimmed.is_empty() {
                    send_and_scroll(session, Action::Search { query: trimmed });
                    on_search.call(());
                }
            },
            input {
                r#type: "search",
                placeholder: "ค้นหาสินค้า...",
                value: "{query}",
                oninput: move |evt| query.set(evt.value()),
            }
            button { r#type: "submit", aria_label: "ค้นหา", "🔍" }
        }
    }
}
