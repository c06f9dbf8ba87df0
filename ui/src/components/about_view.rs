use dioxus::prelude::*;

use phumpanya_common::navigation::Page;
use phumpanya_common::session::Action;

use super::markdown::MarkdownPage;
use super::session_state::{send_and_scroll, use_session};

const ABOUT_MD: &str = include_str!("../../docs/about.md");

#[component]
pub fn AboutView() -> Element {
    let session = use_session();

    rsx! {
        MarkdownPage { source: ABOUT_MD,
            button {
                class: "primary-button",
                onclick: move |_| send_and_scroll(session, Action::Navigate { page: Page::Listing }),
                "เลือกซื้อสินค้า"
            }
        }
    }
}
