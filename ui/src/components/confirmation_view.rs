use dioxus::prelude::*;

use phumpanya_common::navigation::Page;
use phumpanya_common::session::Action;

use super::session_state::{send_and_scroll, use_session};

#[component]
pub fn ConfirmationView() -> Element {
    let session = use_session();

    rsx! {
        div { class: "confirmation-view",
            div { class: "confirmation-icon", "✓" }
            h2 { "ขอบคุณสำหรับคำสั่งซื้อ!" }
            p { "เราได้รับคำสั่งซื้อของคุณแล้วและกำลังดำเนินการจัดส่งให้เร็วที่สุด" }
            button {
                class: "primary-button",
                onclick: move |_| send_and_scroll(session, Action::Navigate { page: Page::Listing }),
                "เลือกซื้อสินค้าต่อ"
            }
        }
    }
}
