use phumpanya_common::filter::SortMode;
use phumpanya_common::navigation::Page;
use phumpanya_common::product::{ProductCategory, ProductId};
use phumpanya_common::session::Action;
use phumpanya_session_integration::harness::TestHarness;

/// Home tile → category listing → narrow by province → sort by price.
#[test]
fn category_tile_then_province_then_sort() {
    let mut h = TestHarness::setup();
    let alice = &mut h.alice;

    alice.act(Action::SelectCategory { category: ProductCategory::Food });
    assert_eq!(alice.session.page(), Page::Listing);
    assert_eq!(alice.visible_ids().len(), 18);

    alice.act(Action::ToggleProvince { province: "ยะลา".into() });
    assert_eq!(alice.visible_ids(), vec![21, 22, 23, 24, 25]);

    alice.act(Action::SetSort { sort: SortMode::PriceAsc });
    assert_eq!(alice.visible_ids(), vec![25, 22, 23, 21, 24]);

    alice.act(Action::SetSort { sort: SortMode::PriceDesc });
    assert_eq!(alice.visible_ids(), vec![24, 21, 23, 22, 25]);
}

/// "120 ฿ / กก." sorts as 120.
#[test]
fn per_kilo_price_sorts_by_leading_number() {
    let mut h = TestHarness::setup();
    let alice = &mut h.alice;

    alice
        .act(Action::SelectCategory { category: ProductCategory::Food })
        .act(Action::ToggleProvince { province: "นราธิวาส".into() })
        .act(Action::SetSort { sort: SortMode::PriceAsc });
    assert_eq!(alice.visible_ids(), vec![26, 27, 28]);
}

#[test]
fn search_then_refine_then_clear() {
    let mut h = TestHarness::setup();
    let alice = &mut h.alice;

    alice.act(Action::Search { query: "  บาติก ".into() });
    assert_eq!(alice.session.page(), Page::Listing);
    assert_eq!(alice.session.filter().query, "บาติก");
    assert_eq!(alice.visible_ids(), vec![30, 35, 40]);

    alice.act(Action::ToggleProvince { province: "นราธิวาส".into() });
    assert_eq!(alice.visible_ids(), vec![35]);

    alice.act(Action::ClearSearch);
    assert!(alice.session.filter().query.is_empty());
    assert_eq!(alice.visible_ids().len(), 9);
}

#[test]
fn blank_search_changes_nothing() {
    let mut h = TestHarness::setup();
    let alice = &mut h.alice;

    alice.act(Action::Search { query: "   ".into() });
    assert_eq!(alice.session.page(), Page::Home);
    assert!(alice.session.filter().is_empty());
}

#[test]
fn no_match_yields_empty_listing() {
    let mut h = TestHarness::setup();
    h.alice.act(Action::Search { query: "pizza".into() });
    assert!(h.alice.visible_ids().is_empty());
}

/// Listing → detail → back keeps the filters; leaving the listing resets them.
#[test]
fn detail_round_trip_keeps_filters_until_leaving_listing() {
    let mut h = TestHarness::setup();
    let alice = &mut h.alice;

    alice
        .act(Action::SelectCategory { category: ProductCategory::Household })
        .act(Action::SelectProduct { product_id: ProductId(11) });
    assert_eq!(alice.session.page(), Page::ProductDetail);
    assert_eq!(alice.session.selected_product().map(|p| p.id.0), Some(11));

    let related: Vec<u32> = alice.session.related_products().iter().map(|p| p.id.0).collect();
    assert_eq!(related, vec![2, 32]);

    alice.act(Action::BackToList);
    assert_eq!(alice.session.page(), Page::Listing);
    assert!(alice.session.selected_product().is_none());
    assert_eq!(alice.visible_ids(), vec![2, 11, 32]);

    alice.act(Action::Navigate { page: Page::About });
    assert!(alice.session.filter().is_empty());
    alice.act(Action::Navigate { page: Page::Listing });
    assert_eq!(alice.visible_ids().len(), 40);
}

/// Searching or picking a category while viewing a product leaves the detail page behind.
#[test]
fn leaving_detail_via_search_or_category_clears_selection() {
    let mut h = TestHarness::setup();
    let alice = &mut h.alice;

    alice
        .act(Action::SelectProduct { product_id: ProductId(5) })
        .act(Action::Search { query: "กริช".into() });
    assert_eq!(alice.session.page(), Page::Listing);
    assert!(alice.session.selected_product().is_none());
    assert!(alice.session.related_products().is_empty());
    assert_eq!(alice.visible_ids(), vec![8]);

    alice.act(Action::Navigate { page: Page::ProductDetail });
    assert_eq!(alice.session.effective_page(), Page::Listing);

    alice
        .act(Action::SelectProduct { product_id: ProductId(11) })
        .act(Action::SelectCategory { category: ProductCategory::Jewelry });
    assert!(alice.session.selected_product().is_none());
    assert_eq!(alice.visible_ids(), vec![9]);
}

#[test]
fn unknown_product_is_rejected_without_state_change() {
    let mut h = TestHarness::setup();
    let alice = &mut h.alice;
    alice.act(Action::Navigate { page: Page::Cart });

    assert!(alice
        .try_act(Action::SelectProduct { product_id: ProductId(404) })
        .is_err());
    assert!(alice
        .try_act(Action::OpenQuickView { product_id: ProductId(404) })
        .is_err());
    assert_eq!(alice.session.page(), Page::Cart);
    assert!(alice.session.quick_view_product().is_none());
}

#[test]
fn quick_view_overlays_without_navigation() {
    let mut h = TestHarness::setup();
    let alice = &mut h.alice;

    alice
        .act(Action::Navigate { page: Page::Listing })
        .act(Action::OpenQuickView { product_id: ProductId(8) });
    assert_eq!(alice.session.page(), Page::Listing);
    assert_eq!(alice.session.quick_view_product().map(|p| p.name.as_str()), Some("กริช"));

    alice.act(Action::SelectProduct { product_id: ProductId(8) });
    assert_eq!(alice.session.page(), Page::ProductDetail);
    assert!(alice.session.quick_view_product().is_none());
}

#[test]
fn sessions_are_independent() {
    let mut h = TestHarness::setup();
    h.alice.act(Action::Search { query: "กาแฟ".into() });
    assert_eq!(h.alice.visible_ids(), vec![21, 23]);
    assert_eq!(h.bob.session.page(), Page::Home);
    assert_eq!(h.bob.visible_ids().len(), 40);
}

#[test]
fn featured_selection_is_stable_for_a_seed() {
    let h = TestHarness::setup();
    let alice: Vec<u32> = h.alice.session.featured_products().iter().map(|p| p.id.0).collect();
    let bob: Vec<u32> = h.bob.session.featured_products().iter().map(|p| p.id.0).collect();
    assert_eq!(alice.len(), 14);
    assert_eq!(alice, bob);
}
