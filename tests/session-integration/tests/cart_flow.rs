use phumpanya_common::navigation::Page;
use phumpanya_common::product::{ProductCategory, ProductId};
use phumpanya_common::session::{Action, Session};
use phumpanya_common::Error;
use phumpanya_session_integration::harness::TestHarness;
use phumpanya_session_integration::{make_catalog, make_dummy_product, test_config};

#[test]
fn add_same_product_twice_merges_lines() {
    let mut h = TestHarness::setup();
    let alice = &mut h.alice;

    alice.add(14, 2).add(1, 1).add(14, 3);
    assert_eq!(alice.cart_lines(), vec![(14, 5), (1, 1)]);
    assert_eq!(alice.session.cart().line_count(), 2);
    assert_eq!(alice.session.cart().unit_count(), 6);
    // 5 × 80 + 1 × 3,800
    assert_eq!(alice.session.cart_subtotal(), 4200.0);
}

#[test]
fn zero_quantity_is_rejected() {
    let mut h = TestHarness::setup();
    let err = h
        .alice
        .try_act(Action::AddToCart { product_id: ProductId(14), quantity: 0 })
        .unwrap_err();
    assert!(matches!(err, Error::ZeroQuantity));
    assert!(h.alice.session.cart().is_empty());
    assert!(h.alice.session.toasts().is_empty());
}

#[test]
fn update_and_remove() {
    let mut h = TestHarness::setup();
    let alice = &mut h.alice;
    alice.add(2, 1).add(11, 1).add(32, 1);

    alice.act(Action::UpdateQuantity { product_id: ProductId(11), quantity: 4 });
    assert_eq!(alice.cart_lines(), vec![(2, 1), (11, 4), (32, 1)]);

    alice.act(Action::UpdateQuantity { product_id: ProductId(2), quantity: 0 });
    assert_eq!(alice.cart_lines(), vec![(11, 4), (32, 1)]);

    alice.act(Action::UpdateQuantity { product_id: ProductId(32), quantity: -3 });
    assert_eq!(alice.cart_lines(), vec![(11, 4)]);

    // Updating something not in the cart does nothing.
    alice.act(Action::UpdateQuantity { product_id: ProductId(5), quantity: 2 });
    assert_eq!(alice.cart_lines(), vec![(11, 4)]);

    alice.act(Action::RemoveFromCart { product_id: ProductId(11) });
    alice.act(Action::RemoveFromCart { product_id: ProductId(11) });
    assert!(alice.session.cart().is_empty());
    assert_eq!(alice.session.cart_subtotal(), 0.0);
}

#[test]
fn checkout_clears_cart_and_confirms() {
    let mut h = TestHarness::setup();
    let alice = &mut h.alice;
    alice
        .add(8, 1)
        .act(Action::Navigate { page: Page::Cart })
        .act(Action::Checkout);

    assert_eq!(alice.session.page(), Page::Confirmation);
    assert!(alice.session.cart().is_empty());
    assert!(h.bob.session.cart().is_empty());
}

#[test]
fn quick_view_add_then_close() {
    let mut h = TestHarness::setup();
    let alice = &mut h.alice;
    alice
        .act(Action::OpenQuickView { product_id: ProductId(9) })
        .add(9, 2)
        .act(Action::CloseQuickView);
    assert!(alice.session.quick_view_product().is_none());
    assert_eq!(alice.cart_lines(), vec![(9, 2)]);
    assert_eq!(alice.session.cart_subtotal(), 6400.0);
}

/// Lines with an unparseable price count as zero in the subtotal.
#[test]
fn unpriced_line_contributes_nothing() {
    let catalog = make_catalog(vec![
        make_dummy_product(1, ProductCategory::Food, "ยะลา", "100 ฿"),
        make_dummy_product(2, ProductCategory::Food, "ยะลา", "สอบถามราคา"),
    ]);
    let mut session = Session::new(catalog, test_config());
    session
        .dispatch(Action::AddToCart { product_id: ProductId(1), quantity: 2 })
        .unwrap();
    session
        .dispatch(Action::AddToCart { product_id: ProductId(2), quantity: 5 })
        .unwrap();
    assert_eq!(session.cart().unit_count(), 7);
    assert_eq!(session.cart_subtotal(), 200.0);
}
