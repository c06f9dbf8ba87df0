use dioxus::prelude::*;

use phumpanya_common::display::StarBreakdown;

/// Row of full, half and empty stars, with an optional review count.
#[component]
pub fn StarRating(rating: f64, review_count: Option<u32>) -> Element {
    let stars = StarBreakdown::from_rating(rating);

    rsx! {
        div { class: "star-rating", title: "{rating}",
            for i in 0..stars.full {
                span { key: "full-{i}", class: "star star-full", "★" }
            }
            if stars.half {
                span { class: "star star-half", "★" }
            }
            for i in 0..stars.empty {
                span { key: "empty-{i}", class: "star star-empty", "☆" }
            }
            if let Some(count) = review_count {
                span { class: "review-count", "{count} รีวิว" }
            }
        }
    }
}
