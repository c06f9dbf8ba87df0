use dioxus::prelude::*;

use phumpanya_common::display::QuantityPicker;
use phumpanya_common::product::Product;
use phumpanya_common::session::Action;
use phumpanya_common::share::ShareRequest;

use super::product_card::ProductGrid;
use super::product_controls::{current_quantity, ImageGallery, QuantityControl, Scoped};
use super::rating::StarRating;
use super::session_state::{send, send_and_scroll, use_session};
use super::share::{current_url, share};

#[component]
pub fn ProductDetail(product: Product) -> Element {
    let session = use_session();
    let id = product.id;
    let picker = use_signal(|| Scoped::new(id, QuantityPicker::default()));

    let related: Vec<Product> = session
        .read()
        .related_products()
        .into_iter()
        .cloned()
        .collect();

    let share_product = product.clone();

    rsx! {
        div { class: "product-detail",
            button {
                class: "back-button",
                onclick: move |_| send_and_scroll(session, Action::BackToList),
                "← กลับไปหน้าสินค้า"
            }
            div { class: "product-detail-grid",
                ImageGallery { product: product.clone() }
                div { class: "product-detail-info",
                    p { class: "producer", "{product.producer} · {product.province}" }
                    h1 { "{product.name}" }
                    StarRating { rating: product.rating, review_count: product.review_count }
                    p { class: "price price-large", "{product.price}" }
                    div { class: "long-story",
                        h3 { "เรื่องราวของผลงาน" }
                        p { "{product.long_story}" }
                    }
                    div { class: "purchase-row",
                        QuantityControl { product_id: id, picker }
                        button {
                            class: "primary-button",
                            onclick: move |_| {
                                let quantity = current_quantity(picker, id);
                                send(session, Action::AddToCart { product_id: id, quantity });
                            },
                            "เพิ่มลงตะกร้า"
                        }
                        button {
                            class: "share-button",
                            onclick: move |_| {
                                let request = ShareRequest::for_product(
                                    &share_product,
                                    current_url(),
                                    session.peek().config(),
                                );
                                spawn(async move {
                                    let outcome = share(request).await;
                                    send(session, Action::ShareResult { outcome });
                                });
                            },
                            "แชร์"
                        }
                    }
                }
            }
            if !related.is_empty() {
                section { class: "related-products",
                    h2 { "สินค้าอื่นในหมวด{product.category}" }
                    ProductGrid { products: related }
                }
            }
        }
    }
}
