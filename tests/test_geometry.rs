use sky_dodge::geometry::*;

use proptest::prelude::*;

#[test]
fn edges_and_center() {
    let r = Rect::new(10, 20, 30, 40);
    assert_eq!((r.left(), r.right(), r.top(), r.bottom()), (10, 40, 20, 60));
    assert_eq!(r.center(), (25, 40));
}

#[test]
fn centered_at_round_trips_center() {
    for (w, h) in [(20, 10), (25, 15), (1, 1)] {
        let r = Rect::centered_at(500, 250, w, h);
        assert_eq!(r.center(), (500, 250), "{}x{}", w, h);
    }
}

#[test]
fn translated_keeps_size() {
    let r = Rect::new(0, 0, 5, 5).translated(-3, 7);
    assert_eq!(r, Rect::new(-3, 7, 5, 5));
}

#[test]
fn shared_edge_is_not_overlap() {
    let a = Rect::new(0, 0, 10, 10);
    assert!(!a.intersects(&Rect::new(10, 0, 10, 10)));
    assert!(!a.intersects(&Rect::new(0, 10, 10, 10)));
    assert!(!a.intersects(&Rect::new(10, 10, 10, 10)));
}

#[test]
fn one_unit_overlap_counts() {
    let a = Rect::new(0, 0, 10, 10);
    assert!(a.intersects(&Rect::new(9, 9, 10, 10)));
    assert!(a.intersects(&Rect::new(-9, -9, 10, 10)));
}

#[test]
fn containment_counts() {
    let outer = Rect::new(0, 0, 100, 100);
    let inner = Rect::new(40, 40, 5, 5);
    assert!(outer.intersects(&inner));
    assert!(inner.intersects(&outer));
}

#[test]
fn clamp_pulls_back_inside() {
    assert_eq!(Rect::new(-4, -1, 10, 10).clamped_to(100, 50), Rect::new(0, 0, 10, 10));
    assert_eq!(Rect::new(95, 45, 10, 10).clamped_to(100, 50), Rect::new(90, 40, 10, 10));
    let inside = Rect::new(30, 20, 10, 10);
    assert_eq!(inside.clamped_to(100, 50), inside);
}

fn rect() -> impl Strategy<Value = Rect> {
    (-200i32..1200, -200i32..700, 1i32..120, 1i32..120).prop_map(|(x, y, w, h)| Rect::new(x, y, w, h))
}

proptest! {
    #[test]
    fn intersection_is_symmetric(a in rect(), b in rect()) {
        prop_assert_eq!(a.intersects(&b), b.intersects(&a));
    }

    #[test]
    fn intersection_matches_overlap_area(a in rect(), b in rect()) {
        let w = a.right().min(b.right()) - a.left().max(b.left());
        let h = a.bottom().min(b.bottom()) - a.top().max(b.top());
        prop_assert_eq!(a.intersects(&b), w > 0 && h > 0);
    }
}
