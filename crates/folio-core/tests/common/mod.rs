#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use folio_core::carousel::ScrollViewport;
use folio_core::sections::Bounds;

/// Viewport that records every scroll position applied to it.
///
/// Clones share the same log, so a test can keep one copy while the
/// carousel owns another.
#[derive(Clone, Debug)]
pub struct SpyViewport {
    pub scroll_width: Rc<RefCell<f32>>,
    pub writes: Rc<RefCell<Vec<f32>>>,
}

impl SpyViewport {
    pub fn new(scroll_width: f32) -> Self {
        Self {
            scroll_width: Rc::new(RefCell::new(scroll_width)),
            writes: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn write_count(&self) -> usize {
        self.writes.borrow().len()
    }

    pub fn last_write(&self) -> Option<f32> {
        self.writes.borrow().last().copied()
    }

    pub fn resize(&self, scroll_width: f32) {
        *self.scroll_width.borrow_mut() = scroll_width;
    }
}

impl ScrollViewport for SpyViewport {
    fn scroll_width(&self) -> f32 {
        *self.scroll_width.borrow()
    }

    fn set_scroll_left(&mut self, offset: f32) {
        self.writes.borrow_mut().push(offset);
    }
}

/// Reference model of the carousel step, in f32 like the real one.
pub fn expected_offset(frames: usize, speed: f32, scroll_width: f32) -> f32 {
    let reset_point = scroll_width / 2.0;
    let mut x = 0.0f32;
    for _ in 0..frames {
        x += speed;
        if x >= reset_point {
            x = 0.0;
        }
    }
    x
}

/// Stacked sections of the given heights, starting at y = 0.
pub fn stacked_layout(ids: &[&str], heights: &[f32], width: f32) -> Vec<(String, Bounds)> {
    let mut top = 0.0;
    ids.iter()
        .zip(heights)
        .map(|(id, h)| {
            let b = Bounds::band(top, *h, width);
            top += h;
            (id.to_string(), b)
        })
        .collect()
}

pub fn lookup(layout: &[(String, Bounds)]) -> impl Fn(&str) -> Option<Bounds> + '_ {
    move |id| layout.iter().find(|(name, _)| name == id).map(|(_, b)| *b)
}

pub fn ids(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}
