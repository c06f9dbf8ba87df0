use dioxus::prelude::*;

use phumpanya_common::filter::SortMode;
use phumpanya_common::product::{Product, ProductCategory};
use phumpanya_common::session::Action;

use super::product_card::ProductGrid;
use super::session_state::{send, use_session};

#[component]
pub fn ListingView() -> Element {
    let session = use_session();
    let mut filters_open = use_signal(|| false);

    let state = session.read();
    let products: Vec<Product> = state.visible_products().into_iter().cloned().collect();
    let query = state.filter().query.clone();
    drop(state);

    let empty_hint = if query.is_empty() {
        "ลองปรับเปลี่ยนตัวกรองของคุณ"
    } else {
        "ลองใช้คำค้นหาอื่น"
    };

    rsx! {
        div { class: "listing-view",
            div { class: "page-title",
                h1 { "สินค้าทั้งหมด" }
                p { "เลือกซื้อผลิตภัณฑ์จากภูมิปัญญาไทยที่คัดสรรมาอย่างดีจากทั่วประเทศ" }
            }
            div { class: "listing-layout",
                aside { class: "filter-sidebar desktop-only",
                    FilterSidebar {}
                }
                div { class: "listing-main",
                    div { class: "filter-toggle mobile-only",
                        h2 { "ตัวกรอง" }
                        button {
                            aria_expanded: "{filters_open}",
                            onclick: move |_| filters_open.toggle(),
                            "☰"
                        }
                    }
                    if filters_open() {
                        div { class: "filter-sidebar mobile-only",
                            FilterSidebar {}
                        }
                    }
                    if !query.is_empty() {
                        div { class: "search-banner",
                            div {
                                span { "ผลการค้นหาสำหรับ:" }
                                strong { " \"{query}\"" }
                            }
                            button {
                                class: "link-button",
                                onclick: move |_| send(session, Action::ClearSearch),
                                "✕ ล้างการค้นหา"
                            }
                        }
                    }
                    if products.is_empty() {
                        div { class: "empty-state",
                            h3 { "ไม่พบสินค้าที่ตรงกัน" }
                            p { "{empty_hint}" }
                        }
                    } else {
                        ProductGrid { products }
                    }
                }
            }
        }
    }
}

/// Category and province checkboxes plus the sort selector.
#[component]
fn FilterSidebar() -> Element {
    let session = use_session();

    let state = session.read();
    let categories: Vec<(ProductCategory, bool)> = state
        .category_options()
        .into_iter()
        .map(|c| (c, state.filter().categories.contains(&c)))
        .collect();
    let provinces: Vec<(String, bool)> = state
        .province_options()
        .into_iter()
        .map(|p| {
            let checked = state.filter().provinces.contains(&p);
            (p, checked)
        })
        .collect();
    let sort = state.filter().sort;
    drop(state);

    rsx! {
        div { class: "filter-group",
            h3 { "หมวดหมู่สินค้า" }
            for (category, checked) in categories {
                label { key: "{category}", class: "filter-option",
                    input {
                        r#type: "checkbox",
                        checked,
                        onchange: move |_| send(session, Action::ToggleCategory { category }),
                    }
                    span { "{category}" }
                }
            }
        }
        div { class: "filter-group",
            h3 { "จังหวัด" }
            for (province, checked) in provinces {
                label { key: "{province}", class: "filter-option",
                    input {
                        r#type: "checkbox",
                        checked,
                        onchange: {
                            let province = province.clone();
                            move |_| send(session, Action::ToggleProvince { province: province.clone() })
                        },
                    }
                    span { "{province}" }
                }
            }
        }
        div { class: "filter-group",
            h3 { "เรียงตาม" }
            select {
                value: "{sort.key()}",
                onchange: move |evt: FormEvent| {
                    match evt.value().parse::<SortMode>() {
                        Ok(sort) => send(session, Action::SetSort { sort }),
                        Err(e) => tracing::warn!("Ignoring sort option: {e}"),
                    }
                },
                for mode in SortMode::all().iter().copied() {
                    option {
                        key: "{mode.key()}",
                        value: "{mode.key()}",
                        selected: mode == sort,
                        "{mode.label()}"
                    }
                }
            }
        }
    }
}
