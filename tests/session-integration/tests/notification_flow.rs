use phumpanya_common::product::ProductId;
use phumpanya_common::session::Action;
use phumpanya_common::share::ShareOutcome;
use phumpanya_common::toast::ToastKind;
use phumpanya_session_integration::harness::TestHarness;

#[test]
fn add_to_cart_announces_product() {
    let mut h = TestHarness::setup();
    h.alice.add(1, 1);

    let toast = h.alice.session.toasts().latest().cloned().unwrap();
    assert_eq!(toast.kind, ToastKind::Success);
    assert_eq!(toast.title, "เพิ่มสินค้าสำเร็จ!");
    assert_eq!(toast.message, "'ผ้าไหมมัดหมี่ลายจวนตานี' ถูกเพิ่มลงในตะกร้าแล้ว");
}

#[test]
fn ids_increase_and_toasts_expire_in_order() {
    let mut h = TestHarness::setup();
    let alice = &mut h.alice;

    alice.add(14, 1);
    alice.advance_ms(2_000).add(15, 1);
    alice.advance_ms(2_000).add(16, 1);
    let ids: Vec<u64> = alice.session.toasts().iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);

    // t = 5s: the first toast has been up for its full duration.
    alice.advance_ms(1_000).act(Action::ExpireToasts);
    let ids: Vec<u64> = alice.session.toasts().iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![2, 3]);

    alice.advance_ms(4_000).act(Action::ExpireToasts);
    assert!(alice.session.toasts().is_empty());
}

#[test]
fn dismiss_removes_only_that_toast() {
    let mut h = TestHarness::setup();
    let alice = &mut h.alice;
    alice.add(1, 1).add(2, 1);

    alice.act(Action::DismissToast { id: 1 });
    let ids: Vec<u64> = alice.session.toasts().iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![2]);

    // Dismissing again is harmless.
    alice.act(Action::DismissToast { id: 1 });
    assert_eq!(alice.session.toasts().len(), 1);
}

#[test]
fn share_outcomes() {
    let mut h = TestHarness::setup();
    let alice = &mut h.alice;
    alice.act(Action::SelectProduct { product_id: ProductId(4) });

    alice.act(Action::ShareResult { outcome: ShareOutcome::Shared });
    assert!(alice.session.toasts().is_empty());

    alice.act(Action::ShareResult { outcome: ShareOutcome::Copied });
    alice.act(Action::ShareResult {
        outcome: ShareOutcome::Failed("AbortError".into()),
    });
    assert_eq!(alice.toast_titles(), vec!["คัดลอกลิงก์แล้ว", "เกิดข้อผิดพลาด"]);
    let kinds: Vec<ToastKind> = alice.session.toasts().iter().map(|t| t.kind).collect();
    assert_eq!(kinds, vec![ToastKind::Info, ToastKind::Error]);
}
