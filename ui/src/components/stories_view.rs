use dioxus::prelude::*;

use phumpanya_common::navigation::Page;
use phumpanya_common::session::Action;

use super::markdown::MarkdownPage;
use super::session_state::{send_and_scroll, use_session};

const STORIES_MD: &str = include_str!("../../docs/stories.md");

#[component]
pub fn StoriesView() -> Element {
    let session = use_session();

    rsx! {
        MarkdownPage { source: STORIES_MD,
            button {
                class: "primary-button",
                onclick: move |_| send_and_scroll(session, Action::Navigate { page: Page::Home }),
                "กลับสู่หน้าหลัก"
            }
        }
    }
}
