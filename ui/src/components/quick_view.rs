use dioxus::prelude::*;

use phumpanya_common::display::QuantityPicker;
use phumpanya_common::product::ProductId;
use phumpanya_common::session::Action;

use super::product_controls::{current_quantity, reset_quantity, ImageGallery, QuantityControl, Scoped};
use super::rating::StarRating;
use super::session_state::{send, send_and_scroll, use_session};

/// Modal preview of the product picked from a card.
#[component]
pub fn QuickViewModal() -> Element {
    let session = use_session();
    let picker = use_signal(|| Scoped::new(ProductId(0), QuantityPicker::default()));

    let Some(product) = session.read().quick_view_product().cloned() else {
        return rsx! {};
    };
    let id = product.id;

    rsx! {
        div {
            class: "modal-backdrop",
            onclick: move |_| send(session, Action::CloseQuickView),
            div {
                class: "modal quick-view",
                onclick: move |evt: MouseEvent| evt.stop_propagation(),
                button {
                    class: "modal-close",
                    aria_label: "ปิด",
                    onclick: move |_| send(session, Action::CloseQuickView),
                    "×"
                }
                div { class: "quick-view-grid",
                    ImageGallery { product: product.clone(), max_thumbnails: 4 }
                    div { class: "quick-view-info",
                        span { class: "tag tag-category", "{product.category}" }
                        h2 { "{product.name}" }
                        p { class: "producer", "โดย {product.producer} · {product.province}" }
                        StarRating { rating: product.rating, review_count: product.review_count }
                        p { class: "price", "{product.price}" }
                        p { class: "story", "{product.story}" }
                        QuantityControl { product_id: id, picker }
                        button {
                            class: "primary-button",
                            onclick: move |_| {
                                let quantity = current_quantity(picker, id);
                                send(session, Action::AddToCart { product_id: id, quantity });
                                reset_quantity(picker, id);
                                send(session, Action::CloseQuickView);
                            },
                            "เพิ่มลงตะกร้า"
                        }
                        button {
                            class: "link-button",
                            onclick: move |_| send_and_scroll(session, Action::SelectProduct { product_id: id }),
                            "ดูรายละเอียดสินค้าฉบับเต็ม →"
                        }
                    }
                }
            }
        }
    }
}
