use dioxus::prelude::*;

use phumpanya_common::navigation::Page;
use phumpanya_common::price::format_baht;
use phumpanya_common::product::Product;
use phumpanya_common::session::Action;

use super::session_state::{send, send_and_scroll, use_session};

#[derive(Clone, PartialEq)]
struct CartRow {
    product: Product,
    quantity: u32,
    total: String,
}

#[component]
pub fn CartView() -> Element {
    let session = use_session();

    let state = session.read();
    let rows: Vec<CartRow> = state
        .cart_items()
        .into_iter()
        .map(|(product, line)| CartRow {
            product: product.clone(),
            quantity: line.quantity,
            total: format_baht(state.cart().line_total(state.catalog(), line)),
        })
        .collect();
    let units = state.cart().unit_count();
    let subtotal = format_baht(state.cart_subtotal());
    drop(state);

    if rows.is_empty() {
        return rsx! {
            div { class: "cart-empty",
                h2 { "ตะกร้าสินค้าของคุณว่างเปล่า" }
                p { "ดูเหมือนว่าคุณยังไม่ได้เพิ่มสินค้าใดๆ ลงในตะกร้า" }
                button {
                    class: "primary-button",
                    onclick: move |_| send_and_scroll(session, Action::Navigate { page: Page::Listing }),
                    "เลือกซื้อสินค้าต่อ"
                }
            }
        };
    }

    rsx! {
        div { class: "cart-view",
            h1 { "ตะกร้าสินค้า" }
            div { class: "cart-layout",
                ul { class: "cart-lines",
                    for row in rows {
                        CartLineItem { key: "{row.product.id}", row }
                    }
                }
                section { class: "order-summary",
                    h2 { "สรุปคำสั่งซื้อ" }
                    dl {
                        div { class: "summary-row",
                            dt { "ราคาสินค้า ({units} ชิ้น)" }
                            dd { "{subtotal}" }
                        }
                        div { class: "summary-row summary-total",
                            dt { "ยอดรวมทั้งหมด" }
                            dd { "{subtotal}" }
                        }
                    }
                    button {
                        class: "primary-button checkout-button",
                        onclick: move |_| send_and_scroll(session, Action::Checkout),
                        "ดำเนินการชำระเงิน"
                    }
                    p { class: "continue-shopping",
                        span { "หรือ " }
                        button {
                            class: "link-button",
                            onclick: move |_| send_and_scroll(session, Action::Navigate { page: Page::Listing }),
                            "เลือกซื้อสินค้าต่อ →"
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn CartLineItem(row: CartRow) -> Element {
    let session = use_session();
    let id = row.product.id;
    let quantity = i64::from(row.quantity);
    let image = row.product.primary_image().to_string();

    rsx! {
        li { class: "cart-line",
            img { src: "{image}", alt: "{row.product.name}" }
            div { class: "cart-line-info",
                h3 { "{row.product.name}" }
                p { class: "producer", "{row.product.producer}" }
            }
            div { class: "quantity-control",
                button {
                    aria_label: "ลดจำนวน",
                    onclick: move |_| send(session, Action::UpdateQuantity { product_id: id, quantity: quantity - 1 }),
                    "-"
                }
                span { class: "quantity-value", "{row.quantity}" }
                button {
                    aria_label: "เพิ่มจำนวน",
                    onclick: move |_| send(session, Action::UpdateQuantity { product_id: id, quantity: quantity + 1 }),
                    "+"
                }
            }
            p { class: "line-total", "{row.total}" }
            button {
                class: "remove-button",
                onclick: move |_| send(session, Action::RemoveFromCart { product_id: id }),
                "ลบ"
            }
        }
    }
}
