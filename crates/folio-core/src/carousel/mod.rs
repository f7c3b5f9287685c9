//! Auto-scrolling project carousel.
//!
//! The card row is rendered as the item list followed by itself, so once the
//! offset passes half the scroll width the view looks exactly like offset 0.
//! Snapping back to 0 there gives a seamless infinite loop.

pub mod viewport;

use std::cell::RefCell;
use std::rc::Rc;

use tracing::{debug, info};

use crate::consts::CAROUSEL_SPEED_PX_PER_FRAME;
use crate::frame_loop::{FrameLoop, LoopHandle};

pub use viewport::{MeasuredViewport, ScrollViewport};

/// The item list concatenated with itself once, for the looping card row.
pub fn doubled<T>(items: &[T]) -> impl Iterator<Item = &T> + '_ {
    items.iter().chain(items.iter())
}

/// Half the content width. A width that is not a positive finite number
/// gives a reset point of 0, so the offset never grows past it.
fn reset_point(scroll_width: f32) -> f32 {
    if scroll_width.is_finite() && scroll_width > 0.0 {
        scroll_width / 2.0
    } else {
        0.0
    }
}

/// Offset/pause state plus the viewport it scrolls.
#[derive(Debug)]
pub struct Carousel<V> {
    viewport: V,
    offset: f32,
    speed: f32,
    paused: bool,
}

impl<V: ScrollViewport> Carousel<V> {
    pub fn new(viewport: V) -> Self {
        Self::with_speed(viewport, CAROUSEL_SPEED_PX_PER_FRAME)
    }

    pub fn with_speed(viewport: V, speed: f32) -> Self {
        Self {
            viewport,
            offset: 0.0,
            speed,
            paused: false,
        }
    }

    /// Advance one animation frame.
    ///
    /// Paused frames leave both the offset and the viewport untouched.
    pub fn step(&mut self) {
        if self.paused {
            return;
        }

        self.offset += self.speed;
        let reset_point = reset_point(self.viewport.scroll_width());
        if self.offset >= reset_point {
            self.offset = 0.0;
        }
        self.viewport.set_scroll_left(self.offset);
    }

    pub fn pointer_enter(&mut self) {
        self.paused = true;
    }

    pub fn pointer_leave(&mut self) {
        self.paused = false;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn viewport(&self) -> &V {
        &self.viewport
    }

    pub fn viewport_mut(&mut self) -> &mut V {
        &mut self.viewport
    }
}

/// A carousel whose step runs on a [`FrameLoop`].
///
/// Dropping this without calling [`MountedCarousel::unmount`] leaves the task
/// running, so the owner must unmount it on teardown.
#[derive(Debug)]
pub struct MountedCarousel<V> {
    carousel: Rc<RefCell<Carousel<V>>>,
    handle: LoopHandle,
}

/// Start the carousel loop over `viewport`.
///
/// Returns `None` without scheduling anything when the viewport is absent.
pub fn mount<V>(
    frames: &mut FrameLoop,
    viewport: Option<V>,
    speed: f32,
) -> Option<MountedCarousel<V>>
where
    V: ScrollViewport + 'static,
{
    let Some(viewport) = viewport else {
        debug!("Carousel viewport missing, not starting scroll loop");
        return None;
    };

    let carousel = Rc::new(RefCell::new(Carousel::with_speed(viewport, speed)));
    let task_state = Rc::clone(&carousel);
    let handle = frames.start(move || task_state.borrow_mut().step());
    info!(speed, "Carousel mounted");

    Some(MountedCarousel { carousel, handle })
}

impl<V: ScrollViewport> MountedCarousel<V> {
    pub fn pointer_enter(&self) {
        self.carousel.borrow_mut().pointer_enter();
    }

    pub fn pointer_leave(&self) {
        self.carousel.borrow_mut().pointer_leave();
    }

    /// Forward the current hover state, entering or leaving as needed.
    pub fn set_hovered(&self, hovered: bool) {
        let mut carousel = self.carousel.borrow_mut();
        if hovered != carousel.is_paused() {
            if hovered {
                carousel.pointer_enter();
            } else {
                carousel.pointer_leave();
            }
        }
    }

    pub fn is_paused(&self) -> bool {
        self.carousel.borrow().is_paused()
    }

    pub fn offset(&self) -> f32 {
        self.carousel.borrow().offset()
    }

    pub fn handle(&self) -> LoopHandle {
        self.handle
    }

    pub fn with_viewport<R>(&self, f: impl FnOnce(&V) -> R) -> R {
        f(self.carousel.borrow().viewport())
    }

    pub fn with_viewport_mut<R>(&self, f: impl FnOnce(&mut V) -> R) -> R {
        f(self.carousel.borrow_mut().viewport_mut())
    }

    /// Stop the frame task. No step runs after this returns.
    pub fn unmount(self, frames: &mut FrameLoop) {
        frames.stop(self.handle);
        info!(offset = self.offset(), "Carousel unmounted");
    }
}
