mod common;

use std::cell::RefCell;
use std::rc::Rc;

use approx::assert_abs_diff_eq;

use common::{ids, lookup, stacked_layout};
use folio_core::sections::observer::intersection_ratio;
use folio_core::sections::{
    Bounds, GeometryObserver, IntersectionEntry, IntersectionSource, RatioBasis,
};

type Log = Rc<RefCell<Vec<Vec<IntersectionEntry>>>>;

fn recording_subscription(
    observer: &mut GeometryObserver,
    targets: &[String],
    threshold: f32,
) -> (Log, folio_core::sections::SubscriptionId) {
    let log: Log = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&log);
    let id = observer.subscribe(
        targets,
        threshold,
        Box::new(move |batch: &[IntersectionEntry]| sink.borrow_mut().push(batch.to_vec())),
    );
    (log, id)
}

// ---------------------------------------------------------------------------
// Bounds / ratio
// ---------------------------------------------------------------------------

#[test]
fn test_bounds_intersection() {
    let a = Bounds::new(0.0, 0.0, 10.0, 10.0);
    let b = Bounds::new(5.0, 5.0, 10.0, 10.0);
    let i = a.intersection(&b).unwrap();
    assert_eq!(i, Bounds::new(5.0, 5.0, 5.0, 5.0));
}

#[test]
fn test_bounds_touching_edges_do_not_intersect() {
    let a = Bounds::band(0.0, 100.0, 50.0);
    let b = Bounds::band(100.0, 100.0, 50.0);
    assert!(a.intersection(&b).is_none());
}

#[test]
fn test_ratio_target_basis() {
    let root = Bounds::band(0.0, 100.0, 100.0);
    // Target 200 tall, 100 of it visible.
    let target = Bounds::band(0.0, 200.0, 100.0);
    assert_abs_diff_eq!(intersection_ratio(&root, &target, RatioBasis::Target), 0.5);
    assert_abs_diff_eq!(intersection_ratio(&root, &target, RatioBasis::Root), 1.0);
}

#[test]
fn test_ratio_root_basis_small_target() {
    let root = Bounds::band(0.0, 100.0, 100.0);
    let target = Bounds::band(10.0, 40.0, 100.0);
    assert_abs_diff_eq!(intersection_ratio(&root, &target, RatioBasis::Target), 1.0);
    assert_abs_diff_eq!(intersection_ratio(&root, &target, RatioBasis::Root), 0.4);
}

#[test]
fn test_ratio_zero_area_target() {
    let root = Bounds::band(0.0, 100.0, 100.0);
    let target = Bounds::band(10.0, 0.0, 100.0);
    assert_eq!(intersection_ratio(&root, &target, RatioBasis::Target), 0.0);
}

// ---------------------------------------------------------------------------
// GeometryObserver
// ---------------------------------------------------------------------------

#[test]
fn test_first_poll_reports_every_target() {
    let mut observer = GeometryObserver::default();
    let targets = ids(&["a", "b", "c"]);
    let (log, _) = recording_subscription(&mut observer, &targets, 0.55);

    let layout = stacked_layout(&["a", "b", "c"], &[100.0, 100.0, 100.0], 100.0);
    let delivered = observer.poll(Bounds::band(0.0, 100.0, 100.0), lookup(&layout));

    assert_eq!(delivered, 3);
    let batches = log.borrow();
    assert_eq!(batches.len(), 1);
    let batch = &batches[0];
    assert_eq!(batch.iter().map(|e| e.target.as_str()).collect::<Vec<_>>(), ["a", "b", "c"]);
    assert!(batch[0].is_intersecting);
    assert!(!batch[1].is_intersecting);
    assert!(!batch[2].is_intersecting);
}

#[test]
fn test_only_changes_are_reported() {
    let mut observer = GeometryObserver::default();
    let (log, _) = recording_subscription(&mut observer, &ids(&["a", "b"]), 0.55);
    let layout = stacked_layout(&["a", "b"], &[100.0, 100.0], 100.0);

    observer.poll(Bounds::band(0.0, 100.0, 100.0), lookup(&layout));
    // Same viewport: nothing changed.
    assert_eq!(observer.poll(Bounds::band(0.0, 100.0, 100.0), lookup(&layout)), 0);
    // 40 px down: a is 60% visible, b 40%: still no crossing.
    assert_eq!(observer.poll(Bounds::band(40.0, 100.0, 100.0), lookup(&layout)), 0);
    // 60 px down: a drops to 40%, b rises to 60%.
    assert_eq!(observer.poll(Bounds::band(60.0, 100.0, 100.0), lookup(&layout)), 2);

    let batches = log.borrow();
    assert_eq!(batches.len(), 2);
    let last = &batches[1];
    assert_eq!(last[0].target, "a");
    assert!(!last[0].is_intersecting);
    assert_eq!(last[1].target, "b");
    assert!(last[1].is_intersecting);
    assert_abs_diff_eq!(last[1].ratio, 0.6, epsilon = 1e-5);
}

#[test]
fn test_missing_bounds_treated_as_hidden() {
    let mut observer = GeometryObserver::default();
    let (log, _) = recording_subscription(&mut observer, &ids(&["ghost"]), 0.5);
    observer.poll(Bounds::band(0.0, 100.0, 100.0), |_| None);

    let batches = log.borrow();
    assert_eq!(batches[0][0].ratio, 0.0);
    assert!(!batches[0][0].is_intersecting);
}

#[test]
fn test_unsubscribe_releases_callback() {
    let mut observer = GeometryObserver::default();
    let (log, id) = recording_subscription(&mut observer, &ids(&["a"]), 0.5);
    assert_eq!(observer.subscription_count(), 1);

    assert!(observer.unsubscribe(id));
    assert!(!observer.unsubscribe(id));
    assert_eq!(observer.subscription_count(), 0);

    let layout = stacked_layout(&["a"], &[100.0], 100.0);
    assert_eq!(observer.poll(Bounds::band(0.0, 100.0, 100.0), lookup(&layout)), 0);
    assert!(log.borrow().is_empty());
}

#[test]
fn test_root_basis_observer() {
    let mut observer = GeometryObserver::new(RatioBasis::Root);
    assert_eq!(observer.basis(), RatioBasis::Root);
    let (log, _) = recording_subscription(&mut observer, &ids(&["short"]), 0.55);
    // Fully visible but covers only 30% of the root.
    let layout = stacked_layout(&["short"], &[30.0], 100.0);
    observer.poll(Bounds::band(0.0, 100.0, 100.0), lookup(&layout));
    assert!(!log.borrow()[0][0].is_intersecting);
}
