use dioxus::prelude::*;

use phumpanya_common::navigation::Page;

use super::about_view::AboutView;
use super::cart_view::CartView;
use super::confirmation_view::ConfirmationView;
use super::footer::Footer;
use super::header::Header;
use super::home_view::HomeView;
use super::listing_view::ListingView;
use super::product_detail::ProductDetail;
use super::quick_view::QuickViewModal;
use super::session_state::{new_session, use_session};
use super::stories_view::StoriesView;
use super::toast_container::ToastContainer;

#[component]
pub fn App() -> Element {
    use_context_provider(|| Signal::new(new_session()));

    rsx! { AppLayout {} }
}

#[component]
fn AppLayout() -> Element {
    let session = use_session();

    let state = session.read();
    let page = state.effective_page();
    let selected = state.selected_product().cloned();
    drop(state);

    let content = match (page, selected) {
        (Page::Home, _) => rsx! { HomeView {} },
        (Page::ProductDetail, Some(product)) => rsx! { ProductDetail { product } },
        // A detail page without a selection renders the listing instead.
        (Page::Listing, _) | (Page::ProductDetail, None) => rsx! { ListingView {} },
        (Page::Cart, _) => rsx! { CartView {} },
        (Page::Stories, _) => rsx! { StoriesView {} },
        (Page::About, _) => rsx! { AboutView {} },
        (Page::Confirmation, _) => rsx! { ConfirmationView {} },
    };

    rsx! {
        div { class: "phumpanya-app",
            Header {}
            main { class: "page-content fade-in", {content} }
            Footer {}
            QuickViewModal {}
            ToastContainer {}
        }
    }
}
