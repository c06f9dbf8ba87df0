use dioxus::prelude::*;

use phumpanya_common::display::{Gallery, QuantityPicker};
use phumpanya_common::product::{Product, ProductId};

/// Local widget state that belongs to one product and silently resets
/// when a different product is shown in the same slot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scoped<T> {
    pub product_id: ProductId,
    pub value: T,
}

impl<T: Copy> Scoped<T> {
    pub fn new(product_id: ProductId, value: T) -> Self {
        Self { product_id, value }
    }

    /// The stored value if it belongs to `product_id`, otherwise `fresh`.
    pub fn for_product(&self, product_id: ProductId, fresh: T) -> T {
        if self.product_id == product_id {
            self.value
        } else {
            fresh
        }
    }
}

/// Main image with prev/next controls and thumbnails.
#[component]
pub fn ImageGallery(product: Product, max_thumbnails: Option<usize>) -> Element {
    let id = product.id;
    let count = product.images.len();
    let mut cursor = use_signal(|| Scoped::new(id, Gallery::new(count)));

    let gallery = cursor.read().for_product(id, Gallery::new(count));
    let active = product
        .images
        .get(gallery.index())
        .cloned()
        .unwrap_or_default();
    let thumbnails: Vec<(usize, String)> = product
        .images
        .iter()
        .cloned()
        .enumerate()
        .take(max_thumbnails.unwrap_or(count))
        .collect();

    rsx! {
        div { class: "image-gallery",
            div { class: "gallery-main",
                img { src: "{active}", alt: "{product.name}" }
                if gallery.has_controls() {
                    button {
                        class: "gallery-prev",
                        aria_label: "Previous image",
                        onclick: move |_| move_cursor(cursor, id, count, |g| g.prev()),
                        "‹"
                    }
                    button {
                        class: "gallery-next",
                        aria_label: "Next image",
                        onclick: move |_| move_cursor(cursor, id, count, |g| g.next()),
                        "›"
                    }
                }
            }
            if gallery.has_controls() {
                div { class: "gallery-thumbnails",
                    for (index, src) in thumbnails {
                        button {
                            key: "{index}",
                            class: thumbnail_class(index == gallery.index()),
                            onclick: move |_| move_cursor(cursor, id, count, |g| g.select(index)),
                            img { src: "{src}", alt: "" }
                        }
                    }
                }
            }
        }
    }
}

fn move_cursor(
    mut cursor: Signal<Scoped<Gallery>>,
    id: ProductId,
    count: usize,
    change: impl FnOnce(&mut Gallery),
) {
    let mut gallery = cursor.peek().for_product(id, Gallery::new(count));
    change(&mut gallery);
    cursor.set(Scoped::new(id, gallery));
}

fn thumbnail_class(active: bool) -> &'static str {
    if active {
        "thumbnail active"
    } else {
        "thumbnail"
    }
}

/// Read the picker for `product_id`, starting from 1 for a new product.
pub fn current_quantity(picker: Signal<Scoped<QuantityPicker>>, product_id: ProductId) -> u32 {
    picker
        .read()
        .for_product(product_id, QuantityPicker::default())
        .value()
}

/// "- n +" stepper backed by a product-scoped picker.
#[component]
pub fn QuantityControl(product_id: ProductId, picker: Signal<Scoped<QuantityPicker>>) -> Element {
    let quantity = current_quantity(picker, product_id);

    rsx! {
        div { class: "quantity-control",
            button { aria_label: "ลดจำนวน", onclick: move |_| step_quantity(picker, product_id, -1), "-" }
            span { class: "quantity-value", "{quantity}" }
            button { aria_label: "เพิ่มจำนวน", onclick: move |_| step_quantity(picker, product_id, 1), "+" }
        }
    }
}

fn step_quantity(mut picker: Signal<Scoped<QuantityPicker>>, product_id: ProductId, delta: i64) {
    let mut quantity = picker.peek().for_product(product_id, QuantityPicker::default());
    quantity.step(delta);
    picker.set(Scoped::new(product_id, quantity));
}

/// Put the picker back to 1 after a successful add.
pub fn reset_quantity(mut picker: Signal<Scoped<QuantityPicker>>, product_id: ProductId) {
    picker.set(Scoped::new(product_id, QuantityPicker::default()));
}
