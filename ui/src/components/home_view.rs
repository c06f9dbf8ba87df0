use dioxus::prelude::*;

use phumpanya_common::navigation::Page;
use phumpanya_common::product::{Product, ProductCategory};
use phumpanya_common::session::Action;

use super::header::STORE_NAME;
use super::product_card::ProductGrid;
use super::session_state::{send_and_scroll, use_session};

const HERO_IMAGE: &str = "https://www.nairobroo.com/wp-content/uploads/2019/03/13.2B.jpg";

const VALUE_PROPS: [(&str, &str, &str); 3] = [
    (
        "✦",
        "สินค้าแท้จากชุมชน",
        "เรารับประกันสินค้าทุกชิ้นส่งตรงจากผู้ผลิตและวิสาหกิจชุมชนทั่วประเทศ",
    ),
    (
        "☺",
        "สนับสนุนเศรษฐกิจท้องถิ่น",
        "ทุกการสั่งซื้อของคุณช่วยสร้างรายได้ที่ยั่งยืนและส่งเสริมชีวิตที่ดีขึ้นของผู้คนในชุมชน",
    ),
    (
        "📖",
        "เรื่องราวที่คัดสรร",
        "เรานำเสนอเรื่องราวเบื้องหลังผลิตภัณฑ์ เพื่อให้คุณได้สัมผัสถึงคุณค่าและภูมิปัญญาที่แท้จริง",
    ),
];

fn category_icon(category: ProductCategory) -> &'static str {
    match category {
        ProductCategory::Food => "🍲",
        ProductCategory::Apparel => "👕",
        ProductCategory::Household => "🧺",
        ProductCategory::Decor => "🏠",
        ProductCategory::Jewelry => "💍",
    }
}

#[component]
pub fn HomeView() -> Element {
    let session = use_session();

    let featured: Vec<Product> = session
        .read()
        .featured_products()
        .into_iter()
        .cloned()
        .collect();

    rsx! {
        section { class: "hero",
            div { class: "hero-text",
                h1 {
                    span { class: "hero-line", "สัมผัสคุณค่าจากมือผู้สร้างสรรค์" }
                    span { class: "hero-line accent", "ส่งตรงจากชุมชนถึงบ้านคุณ" }
                }
                p {
                    "'{STORE_NAME}' คือศูนย์รวมสินค้า OTOP และวิสาหกิจชุมชนไทย ที่เราคัดสรรคุณภาพและเรื่องราวมาให้คุณโดยเฉพาะ"
                }
                div { class: "hero-actions",
                    button {
                        class: "primary-button",
                        onclick: move |_| send_and_scroll(session, Action::Navigate { page: Page::Listing }),
                        "เลือกซื้อสินค้า"
                    }
                    button {
                        class: "secondary-button",
                        onclick: move |_| send_and_scroll(session, Action::Navigate { page: Page::Stories }),
                        "เรื่องราวของเรา"
                    }
                }
            }
            div { class: "hero-image desktop-only",
                img { src: HERO_IMAGE, alt: "ผ้าไหมมัดหมี่ลายจวนตานี" }
            }
        }

        section { class: "category-tiles",
            h2 { "เลือกชมตามหมวดหมู่" }
            div { class: "tile-grid",
                for category in ProductCategory::all().iter().copied() {
                    button {
                        key: "{category}",
                        class: "category-tile",
                        onclick: move |_| send_and_scroll(session, Action::SelectCategory { category }),
                        span { class: "category-icon", "{category_icon(category)}" }
                        span { class: "category-name", "{category}" }
                    }
                }
            }
        }

        section { class: "featured-products",
            div { class: "section-heading",
                h2 { "สินค้าแนะนำจากชุมชน" }
                p { "ผลิตภัณฑ์เด่นที่เราคัดสรรมาเพื่อคุณโดยเฉพาะ" }
            }
            ProductGrid { products: featured }
            div { class: "section-footer",
                button {
                    class: "primary-button",
                    onclick: move |_| send_and_scroll(session, Action::Navigate { page: Page::Listing }),
                    "ดูสินค้าทั้งหมด"
                }
            }
        }

        section { class: "value-props",
            for (icon, title, description) in VALUE_PROPS {
                div { key: "{title}", class: "value-prop",
                    div { class: "value-icon", "{icon}" }
                    h3 { "{title}" }
                    p { "{description}" }
                }
            }
        }
    }
}
