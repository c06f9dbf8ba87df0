use std::sync::Arc;

use chrono::{DateTime, Duration, TimeZone, Utc};

use phumpanya_common::catalog::Catalog;
use phumpanya_common::config::StoreConfig;
use phumpanya_common::product::ProductId;
use phumpanya_common::session::{Action, Session};
use phumpanya_common::Result;

use crate::{builtin_catalog, ids, test_config};

/// One shopper driving a session against a manual clock.
pub struct Shopper {
    pub name: String,
    pub session: Session,
    now: DateTime<Utc>,
}

impl Shopper {
    pub fn new(name: &str, catalog: Arc<Catalog>, config: StoreConfig) -> Self {
        Self {
            name: name.to_string(),
            session: Session::new(catalog, config),
            now: Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap(),
        }
    }

    /// Dispatch at the shopper's clock, panicking on rejection.
    pub fn act(&mut self, action: Action) -> &mut Self {
        let described = format!("{action:?}");
        self.try_act(action)
            .unwrap_or_else(|e| panic!("{}: {described} rejected: {e}", self.name));
        self
    }

    pub fn try_act(&mut self, action: Action) -> Result<()> {
        tracing::debug!(shopper = %self.name, ?action, "act");
        self.session.dispatch_at(action, self.now)
    }

    /// Move the clock forward without touching the session.
    pub fn advance_ms(&mut self, ms: i64) -> &mut Self {
        self.now += Duration::milliseconds(ms);
        self
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.now
    }

    pub fn add(&mut self, id: u32, quantity: u32) -> &mut Self {
        self.act(Action::AddToCart {
            product_id: ProductId(id),
            quantity,
        })
    }

    pub fn visible_ids(&self) -> Vec<u32> {
        ids(self.session.visible_products())
    }

    /// (product id, quantity) for every cart line, in insertion order.
    pub fn cart_lines(&self) -> Vec<(u32, u32)> {
        self.session
            .cart()
            .lines()
            .iter()
            .map(|line| (line.product_id.0, line.quantity))
            .collect()
    }

    pub fn toast_titles(&self) -> Vec<String> {
        self.session.toasts().iter().map(|t| t.title.clone()).collect()
    }
}

/// Two independent shoppers over one shared catalog.
pub struct TestHarness {
    pub catalog: Arc<Catalog>,
    pub alice: Shopper,
    pub bob: Shopper,
}

impl TestHarness {
    pub fn setup() -> Self {
        tracing_subscriber::fmt::try_init().ok();
        let catalog = builtin_catalog();
        Self {
            alice: Shopper::new("Alice", Arc::clone(&catalog), test_config()),
            bob: Shopper::new("Bob", Arc::clone(&catalog), test_config()),
            catalog,
        }
    }
}
