use std::cell::RefCell;
use std::rc::Rc;

use tracing::{debug, info};

use super::observer::{IntersectionEntry, IntersectionSource, SubscriptionId};

/// Shared, read-mostly view of the currently highlighted section.
#[derive(Clone, Debug, Default)]
pub struct ActiveSection(Rc<RefCell<Option<String>>>);

impl ActiveSection {
    pub fn new(initial: Option<String>) -> Self {
        Self(Rc::new(RefCell::new(initial)))
    }

    pub fn get(&self) -> Option<String> {
        self.0.borrow().clone()
    }

    pub fn is(&self, id: &str) -> bool {
        self.0.borrow().as_deref() == Some(id)
    }

    fn publish(&self, batch: &[IntersectionEntry]) {
        // Last intersecting entry in the batch wins.
        let Some(winner) = batch.iter().rev().find(|entry| entry.is_intersecting) else {
            return;
        };
        let mut current = self.0.borrow_mut();
        if current.as_deref() != Some(winner.target.as_str()) {
            debug!(section = %winner.target, ratio = winner.ratio, "Active section changed");
            *current = Some(winner.target.clone());
        }
    }
}

/// Publishes the id of the section currently in view.
#[derive(Debug)]
pub struct SectionTracker {
    active: ActiveSection,
    subscription: Option<SubscriptionId>,
}

impl SectionTracker {
    /// Start observing `sections` on `source`.
    ///
    /// With no sections nothing is observed and `active` keeps `initial`.
    pub fn mount<S>(
        source: &mut S,
        sections: &[String],
        threshold: f32,
        initial: Option<String>,
    ) -> Self
    where
        S: IntersectionSource + ?Sized,
    {
        let active = ActiveSection::new(initial);
        if sections.is_empty() {
            debug!("No sections to observe");
            return Self {
                active,
                subscription: None,
            };
        }

        let sink = active.clone();
        let id = source.subscribe(
            sections,
            threshold,
            Box::new(move |batch: &[IntersectionEntry]| sink.publish(batch)),
        );
        info!(sections = sections.len(), threshold, "Section tracker mounted");

        Self {
            active,
            subscription: Some(id),
        }
    }

    pub fn active(&self) -> &ActiveSection {
        &self.active
    }

    pub fn is_observing(&self) -> bool {
        self.subscription.is_some()
    }

    /// Release the observation. The active value is frozen afterwards.
    pub fn unmount<S>(&mut self, source: &mut S)
    where
        S: IntersectionSource + ?Sized,
    {
        if let Some(id) = self.subscription.take() {
            source.unsubscribe(id);
            info!("Section tracker unmounted");
        }
    }
}
