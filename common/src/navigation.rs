use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::product::ProductId;

/// Top-level storefront pages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Page {
    #[default]
    Home,
    #[serde(rename = "all-products")]
    Listing,
    ProductDetail,
    Cart,
    Stories,
    About,
    Confirmation,
}

impl Page {
    pub fn all() -> &'static [Page] {
        &[
            Page::Home,
            Page::Listing,
            Page::ProductDetail,
            Page::Cart,
            Page::Stories,
            Page::About,
            Page::Confirmation,
        ]
    }

    pub fn key(&self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::Listing => "all-products",
            Page::ProductDetail => "product-detail",
            Page::Cart => "cart",
            Page::Stories => "stories",
            Page::About => "about",
            Page::Confirmation => "confirmation",
        }
    }

    /// Menu label, for pages that appear in the header or footer.
    pub fn label(&self) -> &'static str {
        match self {
            Page::Home => "หน้าหลัก",
            Page::Listing => "สินค้าทั้งหมด",
            Page::ProductDetail => "รายละเอียดสินค้า",
            Page::Cart => "ตะกร้าสินค้า",
            Page::Stories => "เรื่องราวจากชุมชน",
            Page::About => "เกี่ยวกับเรา",
            Page::Confirmation => "ยืนยันคำสั่งซื้อ",
        }
    }

    /// Pages linked from the header menu.
    pub fn menu() -> &'static [Page] {
        &[Page::Listing, Page::Stories, Page::About]
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Page {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Page::all()
            .iter()
            .copied()
            .find(|page| page.key() == s)
            .ok_or_else(|| format!("unknown page '{s}'"))
    }
}

/// Which page is showing and which products it is about.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationState {
    pub page: Page,
    pub selected: Option<ProductId>,
    pub quick_view: Option<ProductId>,
}

impl NavigationState {
    /// Move to `page`. Leaving the detail page drops the selection.
    pub fn go_to(&mut self, page: Page) {
        self.page = page;
        if page != Page::ProductDetail {
            self.selected = None;
        }
    }

    pub fn show_product(&mut self, id: ProductId) {
        self.selected = Some(id);
        self.page = Page::ProductDetail;
    }

    /// The page that actually renders: a detail page without a selection
    /// falls back to the listing.
    pub fn effective_page(&self) -> Page {
        match (self.page, self.selected) {
            (Page::ProductDetail, None) => Page::Listing,
            (page, _) => page,
        }
    }
}
