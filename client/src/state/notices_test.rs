use super::*;

#[test]
fn push_assigns_increasing_ids_in_order() {
    let mut notices = Notices::default();
    let a = notices.push(NoticeKind::Success, "Product added successfully");
    let b = notices.push(NoticeKind::Error, "An error occurred. Please try again.");
    assert!(b > a);
    let kinds: Vec<_> = notices.items.iter().map(|n| n.kind).collect();
    assert_eq!(kinds, [NoticeKind::Success, NoticeKind::Error]);
}

#[test]
fn dismiss_removes_only_matching_notice() {
    let mut notices = Notices::default();
    let a = notices.push(NoticeKind::Success, "one");
    let b = notices.push(NoticeKind::Success, "two");
    notices.dismiss(a);
    assert_eq!(notices.items.len(), 1);
    assert_eq!(notices.items[0].id, b);
}

#[test]
fn dismiss_unknown_id_is_noop() {
    let mut notices = Notices::default();
    notices.push(NoticeKind::Error, "one");
    notices.dismiss(99);
    assert_eq!(notices.items.len(), 1);
}

#[test]
fn ids_are_not_reused_after_dismissal() {
    let mut notices = Notices::default();
    let a = notices.push(NoticeKind::Success, "one");
    notices.dismiss(a);
    let b = notices.push(NoticeKind::Success, "two");
    assert_ne!(a, b);
}
