use arcade_shooter::geometry::{overlaps, Rect};

fn square(x: f64, y: f64, size: f64) -> Rect {
    Rect::from_origin(x, y, size, size)
}

#[test]
fn from_origin_builds_edges() {
    let r = Rect::from_origin(10.0, 20.0, 30.0, 40.0);
    assert_eq!(r.left, 10.0);
    assert_eq!(r.top, 20.0);
    assert_eq!(r.right, 40.0);
    assert_eq!(r.bottom, 60.0);
    assert_eq!(r.width(), 30.0);
    assert_eq!(r.height(), 40.0);
    assert_eq!(r.center_x(), 25.0);
}

#[test]
fn partial_overlap_collides() {
    let a = square(0.0, 0.0, 10.0);
    let b = square(5.0, 5.0, 10.0);
    assert!(overlaps(&a, &b));
    assert!(overlaps(&b, &a));
}

#[test]
fn fully_contained_box_collides() {
    let outer = square(0.0, 0.0, 100.0);
    let inner = square(40.0, 40.0, 5.0);
    assert!(overlaps(&outer, &inner));
    assert!(overlaps(&inner, &outer));
}

#[test]
fn one_unit_of_overlap_collides() {
    let a = square(0.0, 0.0, 10.0);
    let b = square(9.0, 0.0, 10.0);
    assert!(overlaps(&a, &b));
}

#[test]
fn touching_edges_do_not_collide() {
    let a = square(0.0, 0.0, 10.0);
    // Right edge of a meets left edge of b
    assert!(!overlaps(&a, &square(10.0, 0.0, 10.0)));
    // Bottom edge of a meets top edge of b
    assert!(!overlaps(&a, &square(0.0, 10.0, 10.0)));
    // And from the other side
    assert!(!overlaps(&a, &square(-10.0, 0.0, 10.0)));
    assert!(!overlaps(&a, &square(0.0, -10.0, 10.0)));
}

#[test]
fn separated_boxes_do_not_collide() {
    let a = square(0.0, 0.0, 10.0);
    assert!(!overlaps(&a, &square(50.0, 0.0, 10.0)));
    assert!(!overlaps(&a, &square(0.0, 50.0, 10.0)));
    assert!(!overlaps(&a, &square(-50.0, -50.0, 10.0)));
}

#[test]
fn method_matches_free_function() {
    let a = square(0.0, 0.0, 10.0);
    let b = square(3.0, 3.0, 2.0);
    assert_eq!(a.overlaps(&b), overlaps(&a, &b));
}
