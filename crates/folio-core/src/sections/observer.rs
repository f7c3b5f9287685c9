use serde::{Deserialize, Serialize};
use tracing::debug;

/// Axis-aligned rectangle in screen or page coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    /// Full-width horizontal band from `top` spanning `height`.
    pub fn band(top: f32, height: f32, width: f32) -> Self {
        Self::new(0.0, top, width, height)
    }

    pub fn area(&self) -> f32 {
        self.width * self.height
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn intersection(&self, other: &Bounds) -> Option<Bounds> {
        let left = self.x.max(other.x);
        let top = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());
        if right <= left || bottom <= top {
            return None;
        }
        Some(Bounds::new(left, top, right - left, bottom - top))
    }
}

/// Which area an intersection ratio is measured against.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RatioBasis {
    /// Visible fraction of the target itself.
    #[default]
    Target,
    /// Fraction of the root viewport covered by the target.
    Root,
}

impl std::fmt::Display for RatioBasis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Target => write!(f, "Target"),
            Self::Root => write!(f, "Root"),
        }
    }
}

/// Ratio of `target` visible within `root` under `basis`.
pub fn intersection_ratio(root: &Bounds, target: &Bounds, basis: RatioBasis) -> f32 {
    let Some(visible) = root.intersection(target) else {
        return 0.0;
    };
    let denominator = match basis {
        RatioBasis::Target => target.area(),
        RatioBasis::Root => root.area(),
    };
    if denominator <= 0.0 {
        return 0.0;
    }
    (visible.area() / denominator).clamp(0.0, 1.0)
}

/// One target's visibility in a notification batch.
#[derive(Clone, Debug, PartialEq)]
pub struct IntersectionEntry {
    pub target: String,
    pub ratio: f32,
    /// True when `ratio` is at or above the subscription threshold.
    pub is_intersecting: bool,
}

pub type IntersectionCallback = Box<dyn FnMut(&[IntersectionEntry])>;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Push-based source of visibility notifications.
pub trait IntersectionSource {
    /// Observe `targets`, delivering batches to `callback` whenever a
    /// target's visibility relative to `threshold` changes.
    fn subscribe(
        &mut self,
        targets: &[String],
        threshold: f32,
        callback: IntersectionCallback,
    ) -> SubscriptionId;

    /// Release every registration of `id`. Returns `false` if unknown.
    fn unsubscribe(&mut self, id: SubscriptionId) -> bool;
}

struct Subscription {
    id: SubscriptionId,
    targets: Vec<String>,
    threshold: f32,
    callback: IntersectionCallback,
    /// Last reported state per target; `None` until the first poll.
    reported: Vec<Option<bool>>,
}

/// Polling adapter: computes visibility from layout geometry on each poll.
pub struct GeometryObserver {
    basis: RatioBasis,
    subscriptions: Vec<Subscription>,
    next_id: u64,
}

impl GeometryObserver {
    pub fn new(basis: RatioBasis) -> Self {
        Self {
            basis,
            subscriptions: Vec::new(),
            next_id: 0,
        }
    }

    pub fn basis(&self) -> RatioBasis {
        self.basis
    }

    pub fn subscription_count(&self) -> usize {
        self.subscriptions.len()
    }

    /// Measure every observed target against `root` and notify subscribers.
    ///
    /// `bounds_of` returns the current bounds of a target, or `None` when it
    /// is not laid out (treated as not visible). Each batch lists, in target
    /// order, the targets whose state changed; the first poll after
    /// subscribing lists every target.
    pub fn poll(&mut self, root: Bounds, bounds_of: impl Fn(&str) -> Option<Bounds>) -> usize {
        let mut delivered = 0;
        for sub in &mut self.subscriptions {
            let mut batch = Vec::new();
            for (target, reported) in sub.targets.iter().zip(sub.reported.iter_mut()) {
                let ratio = bounds_of(target)
                    .map(|b| intersection_ratio(&root, &b, self.basis))
                    .unwrap_or(0.0);
                let is_intersecting = ratio > 0.0 && ratio >= sub.threshold;
                if *reported != Some(is_intersecting) {
                    *reported = Some(is_intersecting);
                    batch.push(IntersectionEntry {
                        target: target.clone(),
                        ratio,
                        is_intersecting,
                    });
                }
            }
            if !batch.is_empty() {
                (sub.callback)(&batch);
                delivered += batch.len();
            }
        }
        delivered
    }
}

impl Default for GeometryObserver {
    fn default() -> Self {
        Self::new(RatioBasis::default())
    }
}

impl IntersectionSource for GeometryObserver {
    fn subscribe(
        &mut self,
        targets: &[String],
        threshold: f32,
        callback: IntersectionCallback,
    ) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscriptions.push(Subscription {
            id,
            targets: targets.to_vec(),
            threshold,
            callback,
            reported: vec![None; targets.len()],
        });
        debug!(targets = targets.len(), threshold, "Intersection subscription added");
        id
    }

    fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscriptions.len();
        self.subscriptions.retain(|sub| sub.id != id);
        before != self.subscriptions.len()
    }
}

impl std::fmt::Debug for GeometryObserver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeometryObserver")
            .field("basis", &self.basis)
            .field("subscriptions", &self.subscriptions.len())
            .finish()
    }
}
