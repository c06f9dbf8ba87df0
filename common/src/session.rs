use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::cart::{Cart, CartLine};
use crate::catalog::Catalog;
use crate::config::StoreConfig;
use crate::error::{Error, Result};
use crate::filter::{self, FilterState, SortMode};
use crate::navigation::{NavigationState, Page};
use crate::product::{Product, ProductCategory, ProductId};
use crate::share::ShareOutcome;
use crate::toast::{ToastId, ToastKind, ToastQueue};

/// Every state change the storefront supports.
///
/// Serialized externally tagged in snake_case, e.g.
/// `{"add_to_cart": {"product_id": 1, "quantity": 2}}` or `"checkout"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    Navigate { page: Page },
    Search { query: String },
    ClearSearch,
    /// Home page category tile: exactly one category, nothing else.
    SelectCategory { category: ProductCategory },
    ToggleCategory { category: ProductCategory },
    ToggleProvince { province: String },
    SetSort { sort: SortMode },
    SelectProduct { product_id: ProductId },
    BackToList,
    OpenQuickView { product_id: ProductId },
    CloseQuickView,
    AddToCart { product_id: ProductId, quantity: u32 },
    UpdateQuantity { product_id: ProductId, quantity: i64 },
    RemoveFromCart { product_id: ProductId },
    Checkout,
    ShareResult { outcome: ShareOutcome },
    DismissToast { id: ToastId },
    ExpireToasts,
}

/// Root state container for one browsing session.
///
/// Views read through the accessors and change state only via [`Session::dispatch`].
#[derive(Debug, Clone)]
pub struct Session {
    catalog: Arc<Catalog>,
    config: StoreConfig,
    nav: NavigationState,
    filter: FilterState,
    cart: Cart,
    toasts: ToastQueue,
    featured_seed: u64,
}

impl Session {
    pub fn new(catalog: Arc<Catalog>, config: StoreConfig) -> Self {
        let featured_seed = config
            .featured_seed
            .unwrap_or_else(|| Utc::now().timestamp_millis().unsigned_abs());
        let toasts = ToastQueue::new(config.toast_duration());
        Self {
            catalog,
            config,
            nav: NavigationState::default(),
            filter: FilterState::default(),
            cart: Cart::new(),
            toasts,
            featured_seed,
        }
    }

    /// Apply an action using the wall clock for toast timestamps.
    pub fn dispatch(&mut self, action: Action) -> Result<()> {
        self.dispatch_at(action, Utc::now())
    }

    /// Apply an action at an explicit instant. Rejected actions leave state untouched.
    pub fn dispatch_at(&mut self, action: Action, now: DateTime<Utc>) -> Result<()> {
        tracing::debug!(?action, page = %self.nav.page, "Dispatching action");
        let result = self.apply(action, now);
        if let Err(ref e) = result {
            tracing::warn!("Action rejected: {e}");
        }
        result
    }

    fn apply(&mut self, action: Action, now: DateTime<Utc>) -> Result<()> {
        match action {
            Action::Navigate { page } => self.navigate(page),
            Action::Search { query } => self.search(&query),
            Action::ClearSearch => self.filter.query.clear(),
            Action::SelectCategory { category } => {
                self.filter.query.clear();
                self.filter.categories.clear();
                self.filter.categories.insert(category);
                self.filter.provinces.clear();
                self.nav.go_to(Page::Listing);
            }
            Action::ToggleCategory { category } => self.filter.toggle_category(category),
            Action::ToggleProvince { province } => self.filter.toggle_province(&province),
            Action::SetSort { sort } => self.filter.sort = sort,
            Action::SelectProduct { product_id } => {
                self.require(product_id)?;
                self.nav.show_product(product_id);
                self.nav.quick_view = None;
            }
            Action::BackToList => {
                self.nav.page = Page::Listing;
                self.nav.selected = None;
            }
            Action::OpenQuickView { product_id } => {
                self.require(product_id)?;
                self.nav.quick_view = Some(product_id);
            }
            Action::CloseQuickView => self.nav.quick_view = None,
            Action::AddToCart {
                product_id,
                quantity,
            } => self.add_to_cart(product_id, quantity, now)?,
            Action::UpdateQuantity {
                product_id,
                quantity,
            } => self.cart.update_quantity(product_id, quantity),
            Action::RemoveFromCart { product_id } => self.cart.remove(product_id),
            Action::Checkout => self.checkout(),
            Action::ShareResult { outcome } => {
                if let ShareOutcome::Failed(ref reason) = outcome {
                    tracing::warn!("Share failed: {reason}");
                }
                if let Some((kind, title, message)) = outcome.notification() {
                    self.toasts.push(kind, title, message, now);
                }
            }
            Action::DismissToast { id } => {
                self.toasts.dismiss(id);
            }
            Action::ExpireToasts => {
                self.toasts.expire(now);
            }
        }
        Ok(())
    }

    /// Leaving the listing resets filters; leaving the detail page drops the selection.
    fn navigate(&mut self, page: Page) {
        self.nav.go_to(page);
        if page != Page::Listing {
            self.filter = FilterState::default();
        }
    }

    fn search(&mut self, query: &str) {
        let query = query.trim();
        if query.is_empty() {
            return;
        }
        self.filter.query = query.to_string();
        self.nav.go_to(Page::Listing);
    }

    fn add_to_cart(&mut self, product_id: ProductId, quantity: u32, now: DateTime<Utc>) -> Result<()> {
        let catalog = Arc::clone(&self.catalog);
        let product = catalog
            .get(product_id)
            .ok_or(Error::UnknownProduct(product_id))?;
        self.cart.add(product, quantity)?;
        tracing::debug!(%product_id, quantity, lines = self.cart.line_count(), "Added to cart");
        self.toasts.push(
            ToastKind::Success,
            "เพิ่มสินค้าสำเร็จ!",
            format!("'{}' ถูกเพิ่มลงในตะกร้าแล้ว", product.name),
            now,
        );
        Ok(())
    }

    fn checkout(&mut self) {
        tracing::info!(
            lines = self.cart.line_count(),
            units = self.cart.unit_count(),
            subtotal = self.cart.subtotal(&self.catalog),
            "Checkout"
        );
        self.cart.clear();
        self.navigate(Page::Confirmation);
    }

    fn require(&self, product_id: ProductId) -> Result<&Product> {
        self.catalog
            .get(product_id)
            .ok_or(Error::UnknownProduct(product_id))
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    pub fn navigation(&self) -> &NavigationState {
        &self.nav
    }

    pub fn page(&self) -> Page {
        self.nav.page
    }

    /// The page to render, after the missing-selection fallback.
    pub fn effective_page(&self) -> Page {
        self.nav.effective_page()
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn toasts(&self) -> &ToastQueue {
        &self.toasts
    }

    pub fn selected_product(&self) -> Option<&Product> {
        self.nav.selected.and_then(|id| self.catalog.get(id))
    }

    pub fn quick_view_product(&self) -> Option<&Product> {
        self.nav.quick_view.and_then(|id| self.catalog.get(id))
    }

    /// Listing contents for the current filter.
    pub fn visible_products(&self) -> Vec<&Product> {
        filter::apply(&self.catalog, &self.filter)
    }

    pub fn category_options(&self) -> Vec<ProductCategory> {
        self.catalog.categories()
    }

    pub fn province_options(&self) -> Vec<String> {
        self.catalog.provinces()
    }

    pub fn featured_products(&self) -> Vec<&Product> {
        self.catalog
            .featured(self.config.featured_count, self.featured_seed)
    }

    /// Same-category suggestions for the product on the detail page.
    pub fn related_products(&self) -> Vec<&Product> {
        match self.selected_product() {
            Some(product) => self.catalog.related(product, self.config.related_count),
            None => Vec::new(),
        }
    }

    /// Cart lines joined with their catalog products.
    pub fn cart_items(&self) -> Vec<(&Product, &CartLine)> {
        self.cart
            .lines()
            .iter()
            .filter_map(|line| self.catalog.get(line.product_id).map(|p| (p, line)))
            .collect()
    }

    pub fn cart_subtotal(&self) -> f64 {
        self.cart.subtotal(&self.catalog)
    }
}
