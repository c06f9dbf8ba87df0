use dioxus::prelude::*;

use phumpanya_common::product::Product;
use phumpanya_common::session::Action;

use super::rating::StarRating;
use super::session_state::{send, send_and_scroll, use_session};

#[component]
pub fn ProductCard(product: Product) -> Element {
    let session = use_session();
    let id = product.id;
    let image = product.primary_image().to_string();

    rsx! {
        div { class: "product-card",
            div {
                class: "product-card-image",
                onclick: move |_| send_and_scroll(session, Action::SelectProduct { product_id: id }),
                img { src: "{image}", alt: "{product.name}", loading: "lazy" }
                div { class: "product-card-tags",
                    span { class: "tag tag-province", "{product.province}" }
                    span { class: "tag tag-category", "{product.category}" }
                }
                button {
                    class: "quick-view-button",
                    onclick: move |evt: MouseEvent| {
                        evt.stop_propagation();
                        send(session, Action::OpenQuickView { product_id: id });
                    },
                    "ดูแบบด่วน"
                }
            }
            div { class: "product-card-body",
                h3 {
                    button {
                        class: "product-card-name",
                        onclick: move |_| send_and_scroll(session, Action::SelectProduct { product_id: id }),
                        "{product.name}"
                    }
                }
                div { class: "product-card-rating",
                    StarRating { rating: product.rating }
                    span { class: "review-count", "({product.review_count})" }
                }
                p { class: "price", "{product.price}" }
            }
        }
    }
}

/// Responsive grid of product cards.
#[component]
pub fn ProductGrid(products: Vec<Product>) -> Element {
    rsx! {
        div { class: "product-grid",
            for product in products {
                ProductCard { key: "{product.id}", product }
            }
        }
    }
}
