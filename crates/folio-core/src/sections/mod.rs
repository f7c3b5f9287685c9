//! Visibility-driven section tracking for navigation highlighting.

pub mod observer;
pub mod tracker;

pub use observer::{
    Bounds, GeometryObserver, IntersectionCallback, IntersectionEntry, IntersectionSource,
    RatioBasis, SubscriptionId,
};
pub use tracker::{ActiveSection, SectionTracker};
