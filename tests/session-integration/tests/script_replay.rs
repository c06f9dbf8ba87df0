use phumpanya_common::navigation::Page;
use phumpanya_session_integration::harness::TestHarness;
use phumpanya_session_integration::parse_script;

const CHECKOUT_SCRIPT: &str = r#"[
    {"select_category": {"category": "อาหาร"}},
    {"set_sort": {"sort": "price-desc"}},
    {"select_product": {"product_id": 24}},
    {"add_to_cart": {"product_id": 24, "quantity": 2}},
    "back_to_list",
    {"add_to_cart": {"product_id": 26, "quantity": 1}},
    {"navigate": {"page": "cart"}},
    {"update_quantity": {"product_id": 26, "quantity": 3}},
    "checkout"
]"#;

#[test]
fn scripted_checkout() {
    let mut h = TestHarness::setup();
    let actions = parse_script(CHECKOUT_SCRIPT);
    assert_eq!(actions.len(), 9);

    let mut subtotal_before_checkout = 0.0;
    for action in actions {
        if action == phumpanya_common::session::Action::Checkout {
            subtotal_before_checkout = h.alice.session.cart_subtotal();
        }
        h.alice.act(action);
    }

    // 2 × 350 + 3 × 120
    assert_eq!(subtotal_before_checkout, 1060.0);
    assert_eq!(h.alice.session.page(), Page::Confirmation);
    assert!(h.alice.session.cart().is_empty());
    assert_eq!(h.alice.session.toasts().len(), 2);
}

#[test]
fn listing_page_is_spelled_all_products() {
    let actions = parse_script(r#"[{"navigate": {"page": "all-products"}}]"#);
    let mut h = TestHarness::setup();
    h.alice.act(actions[0].clone());
    assert_eq!(h.alice.session.page(), Page::Listing);
}

#[test]
#[should_panic(expected = "bad action script")]
fn unknown_action_is_rejected() {
    parse_script(r#"["teleport"]"#);
}
