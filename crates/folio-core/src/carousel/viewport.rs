/// Horizontal scroll container the carousel drives.
pub trait ScrollViewport {
    /// Total scrollable content width in pixels (the doubled item list).
    fn scroll_width(&self) -> f32;

    /// Apply a new horizontal scroll position.
    fn set_scroll_left(&mut self, offset: f32);
}

/// Viewport whose content width is measured by the renderer each frame.
///
/// The GUI reports the laid-out width of the card row after painting and
/// reads back `scroll_left` when it builds the next frame's scroll area.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MeasuredViewport {
    scroll_width: f32,
    scroll_left: f32,
}

impl MeasuredViewport {
    pub fn new(scroll_width: f32) -> Self {
        Self {
            scroll_width: scroll_width.max(0.0),
            scroll_left: 0.0,
        }
    }

    /// Record the content width measured during the last layout pass.
    pub fn set_scroll_width(&mut self, width: f32) {
        self.scroll_width = width.max(0.0);
    }

    pub fn scroll_left(&self) -> f32 {
        self.scroll_left
    }
}

impl ScrollViewport for MeasuredViewport {
    fn scroll_width(&self) -> f32 {
        self.scroll_width
    }

    fn set_scroll_left(&mut self, offset: f32) {
        self.scroll_left = offset;
    }
}
