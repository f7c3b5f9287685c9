mod common;

use common::{ids, lookup, stacked_layout};
use folio_core::config::page_sections;
use folio_core::consts::{INITIAL_SECTION, SECTION_VISIBILITY_THRESHOLD};
use folio_core::sections::{Bounds, GeometryObserver, SectionTracker};

const WIDTH: f32 = 800.0;

fn viewport_at(top: f32, height: f32) -> Bounds {
    Bounds::band(top, height, WIDTH)
}

#[test]
fn test_initial_section_before_notifications() {
    let mut observer = GeometryObserver::default();
    let tracker = SectionTracker::mount(
        &mut observer,
        &page_sections(),
        SECTION_VISIBILITY_THRESHOLD,
        Some(INITIAL_SECTION.to_string()),
    );
    assert!(tracker.is_observing());
    assert!(tracker.active().is("hero"));
}

#[test]
fn test_no_sections_observes_nothing() {
    let mut observer = GeometryObserver::default();
    let tracker = SectionTracker::mount(&mut observer, &[], 0.55, None);
    assert!(!tracker.is_observing());
    assert_eq!(observer.subscription_count(), 0);
    assert_eq!(tracker.active().get(), None);
}

#[test]
fn test_active_section_follows_scroll_order() {
    let names = ["a", "b", "c"];
    let layout = stacked_layout(&names, &[600.0, 600.0, 600.0], WIDTH);
    let mut observer = GeometryObserver::default();
    let tracker = SectionTracker::mount(&mut observer, &ids(&names), 0.55, None);

    let mut transitions: Vec<String> = Vec::new();
    let mut top = 0.0;
    while top <= 1200.0 {
        observer.poll(viewport_at(top, 600.0), lookup(&layout));
        let active = tracker.active().get().expect("active after first notification");
        assert!(names.contains(&active.as_str()), "unknown section {active}");
        if transitions.last() != Some(&active) {
            transitions.push(active);
        }
        top += 25.0;
    }

    assert_eq!(transitions, vec!["a", "b", "c"]);
}

#[test]
fn test_scrolling_back_up_reactivates_earlier_section() {
    let names = ["a", "b"];
    let layout = stacked_layout(&names, &[500.0, 500.0], WIDTH);
    let mut observer = GeometryObserver::default();
    let tracker = SectionTracker::mount(&mut observer, &ids(&names), 0.55, None);

    observer.poll(viewport_at(0.0, 500.0), lookup(&layout));
    observer.poll(viewport_at(500.0, 500.0), lookup(&layout));
    assert!(tracker.active().is("b"));
    observer.poll(viewport_at(0.0, 500.0), lookup(&layout));
    assert!(tracker.active().is("a"));
}

#[test]
fn test_last_intersecting_entry_in_batch_wins() {
    // Two short sections both fully visible on the first poll.
    let names = ["first", "second"];
    let layout = stacked_layout(&names, &[200.0, 200.0], WIDTH);
    let mut observer = GeometryObserver::default();
    let tracker = SectionTracker::mount(&mut observer, &ids(&names), 0.55, None);

    observer.poll(viewport_at(0.0, 600.0), lookup(&layout));
    assert!(tracker.active().is("second"));
}

#[test]
fn test_leaving_all_sections_keeps_last_active() {
    let names = ["a"];
    let layout = stacked_layout(&names, &[400.0], WIDTH);
    let mut observer = GeometryObserver::default();
    let tracker = SectionTracker::mount(&mut observer, &ids(&names), 0.55, Some("hero".into()));

    observer.poll(viewport_at(0.0, 400.0), lookup(&layout));
    observer.poll(viewport_at(2000.0, 400.0), lookup(&layout));
    assert!(tracker.active().is("a"));
}

#[test]
fn test_unmount_freezes_active_section() {
    let names = ["a", "b"];
    let layout = stacked_layout(&names, &[500.0, 500.0], WIDTH);
    let mut observer = GeometryObserver::default();
    let mut tracker = SectionTracker::mount(&mut observer, &ids(&names), 0.55, None);

    observer.poll(viewport_at(0.0, 500.0), lookup(&layout));
    assert!(tracker.active().is("a"));

    tracker.unmount(&mut observer);
    assert!(!tracker.is_observing());
    assert_eq!(observer.subscription_count(), 0);

    assert_eq!(observer.poll(viewport_at(500.0, 500.0), lookup(&layout)), 0);
    assert!(tracker.active().is("a"));

    // Unmounting twice is harmless.
    tracker.unmount(&mut observer);
}

#[test]
fn test_active_section_handle_is_shared() {
    let names = ["a", "b"];
    let layout = stacked_layout(&names, &[500.0, 500.0], WIDTH);
    let mut observer = GeometryObserver::default();
    let tracker = SectionTracker::mount(&mut observer, &ids(&names), 0.55, None);
    let nav_view = tracker.active().clone();

    observer.poll(viewport_at(500.0, 500.0), lookup(&layout));
    assert_eq!(nav_view.get().as_deref(), Some("b"));
}
