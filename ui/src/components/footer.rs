use chrono::Datelike;
use dioxus::prelude::*;

use phumpanya_common::navigation::Page;
use phumpanya_common::session::Action;

use super::header::STORE_NAME;
use super::session_state::{send_and_scroll, use_session};

const PARTNER_LOGOS: [(&str, &str); 3] = [
    ("https://www.sbpac.go.th/home/wp-content/uploads/2024/02/Sbpac_LOGO.jpg", "SBPAC Logo"),
    (
        "https://thainews.prd.go.th/_next/image/?url=https%3A%2F%2Fnnt-storage-thainews.prd.go.th%2Fmedia-news%2Fraw%2F2025%2F10%2F08%2Fef41841114f302d226a051ab124d0474.jpg&w=1080&q=75",
        "Partner Logo 2",
    ),
    ("https://www.xn--l3ca2hb.com/logo-removebg-preview.png", "Partner Logo 3"),
];

#[component]
pub fn Footer() -> Element {
    let session = use_session();
    let year = chrono::Utc::now().year();

    rsx! {
        footer { class: "app-footer",
            div { class: "footer-grid",
                div { class: "footer-brand",
                    h3 { "{STORE_NAME}" }
                    p { "เชื่อมโยงภูมิปัญญาของชาติกับโอกาสทางเศรษฐกิจยุคใหม่" }
                    div { class: "partner-logos",
                        for (src, alt) in PARTNER_LOGOS {
                            img { key: "{alt}", src, alt }
                        }
                    }
                }
                div { class: "footer-links",
                    h4 { "สำหรับผู้ซื้อ" }
                    ul {
                        li {
                            button {
                                class: "link-button",
                                onclick: move |_| send_and_scroll(session, Action::Navigate { page: Page::Listing }),
                                "สินค้าทั้งหมด"
                            }
                        }
                        li { a { href: "#", "โปรโมชั่น" } }
                        li { a { href: "#", "วิธีการสั่งซื้อ" } }
                    }
                }
                div { class: "footer-links",
                    h4 { "สำหรับผู้ขาย" }
                    ul {
                        li { a { href: "#", "สมัครเป็นผู้ขาย" } }
                        li { a { href: "#", "คู่มือการขาย" } }
                        li { a { href: "#", "ศูนย์ช่วยเหลือ" } }
                    }
                }
            }
            div { class: "footer-bottom",
                p { "© {year} {STORE_NAME}. All rights reserved." }
                div { class: "social-links",
                    a { href: "#", "Facebook" }
                    a { href: "#", "Instagram" }
                    a { href: "#", "Line" }
                }
            }
        }
    }
}
