use std::collections::HashMap;

use folio_core::reveal::{HoverScale, RevealClock};
use folio_core::sections::Bounds;

/// Transient view state owned by the UI thread.
#[derive(Default)]
pub struct UIState {
    /// Mobile drawer open.
    pub menu_open: bool,
    /// Section to bring into view on the next frame (nav click).
    pub scroll_target: Option<String>,
    /// Screen rects of each section from the last layout pass.
    pub section_rects: HashMap<String, egui::Rect>,
    /// Enter-animation timing per element.
    pub reveals: RevealClock,
    /// Hover scale per card id.
    pub hover_scales: HashMap<String, HoverScale>,
    /// Status line shown in the footer (e.g. résumé saved).
    pub status: Option<String>,
    /// A hover scale was still easing during this frame.
    hover_animating: bool,
}

impl UIState {
    pub fn record_section(&mut self, id: &str, rect: egui::Rect) {
        self.section_rects.insert(id.to_string(), rect);
    }

    pub fn section_bounds(&self, id: &str) -> Option<Bounds> {
        self.section_rects.get(id).map(|r| to_bounds(*r))
    }

    /// Advance and return the hover scale for `id`.
    pub fn hover_scale(&mut self, id: &str, hover_scale: f32, hovered: bool, dt: f32) -> f32 {
        let scale = self
            .hover_scales
            .entry(id.to_string())
            .or_insert_with(|| HoverScale::new(hover_scale));
        let current = scale.update(hovered, dt);
        if !scale.is_settled(hovered) {
            self.hover_animating = true;
        }
        current
    }

    /// Whether any reveal or hover transition needs another frame. Clears
    /// the per-frame flags.
    pub fn take_animating(&mut self) -> bool {
        let reveals = self.reveals.take_animating();
        std::mem::take(&mut self.hover_animating) || reveals
    }
}

pub fn to_bounds(rect: egui::Rect) -> Bounds {
    Bounds::new(rect.min.x, rect.min.y, rect.width(), rect.height())
}
