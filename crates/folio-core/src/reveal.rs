//! Enter and hover animations.
//!
//! [`Reveal`] describes a one-shot transition from an initial state (faded,
//! shifted, shrunk) to rest, played when an element scrolls into view.
//! [`RevealClock`] remembers when each element entered view so the renderer
//! can ask for its current frame. [`HoverScale`] eases a card's scale while
//! it is hovered.

use std::collections::HashMap;

use crate::consts::HOVER_SCALE_SETTLE_SECS;

/// Default transition length when none is specified, in seconds.
const DEFAULT_DURATION: f32 = 0.3;

/// Cubic ease-out on `t` in [0, 1].
pub fn ease_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Reveal {
    pub delay: f32,
    pub duration: f32,
    pub from_offset: [f32; 2],
    pub from_opacity: f32,
    pub from_scale: f32,
}

/// Interpolated state of a [`Reveal`] at some instant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealFrame {
    pub opacity: f32,
    pub offset: [f32; 2],
    pub scale: f32,
}

impl RevealFrame {
    pub const REST: RevealFrame = RevealFrame {
        opacity: 1.0,
        offset: [0.0, 0.0],
        scale: 1.0,
    };
}

impl Default for Reveal {
    fn default() -> Self {
        Self {
            delay: 0.0,
            duration: DEFAULT_DURATION,
            from_offset: [0.0, 0.0],
            from_opacity: 0.0,
            from_scale: 1.0,
        }
    }
}

impl Reveal {
    pub fn fade() -> Self {
        Self::default()
    }

    pub fn slide_y(dy: f32) -> Self {
        Self {
            from_offset: [0.0, dy],
            ..Self::default()
        }
    }

    pub fn slide_x(dx: f32) -> Self {
        Self {
            from_offset: [dx, 0.0],
            ..Self::default()
        }
    }

    pub fn zoom(from_scale: f32) -> Self {
        Self {
            from_scale,
            ..Self::default()
        }
    }

    pub fn with_duration(mut self, duration: f32) -> Self {
        self.duration = duration;
        self
    }

    pub fn with_delay(mut self, delay: f32) -> Self {
        self.delay = delay;
        self
    }

    /// Progress in [0, 1] after `elapsed` seconds, before easing.
    pub fn progress(&self, elapsed: f32) -> f32 {
        let t = elapsed - self.delay;
        if t <= 0.0 {
            return 0.0;
        }
        if self.duration <= 0.0 {
            return 1.0;
        }
        (t / self.duration).min(1.0)
    }

    pub fn is_done(&self, elapsed: f32) -> bool {
        self.progress(elapsed) >= 1.0
    }

    pub fn initial(&self) -> RevealFrame {
        RevealFrame {
            opacity: self.from_opacity,
            offset: self.from_offset,
            scale: self.from_scale,
        }
    }

    pub fn at(&self, elapsed: f32) -> RevealFrame {
        let t = ease_out_cubic(self.progress(elapsed));
        RevealFrame {
            opacity: lerp(self.from_opacity, 1.0, t),
            offset: [
                lerp(self.from_offset[0], 0.0, t),
                lerp(self.from_offset[1], 0.0, t),
            ],
            scale: lerp(self.from_scale, 1.0, t),
        }
    }
}

/// Tracks when each element last entered view.
#[derive(Debug, Default)]
pub struct RevealClock {
    entered: HashMap<String, f64>,
    animating: bool,
}

impl RevealClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seconds since `id` entered view, or `None` while it is out of view.
    ///
    /// Leaving view forgets the entry time, so the reveal replays the next
    /// time the element scrolls in.
    pub fn elapsed(&mut self, id: &str, now: f64, visible: bool) -> Option<f32> {
        if !visible {
            self.entered.remove(id);
            return None;
        }
        let start = *self.entered.entry(id.to_string()).or_insert(now);
        Some((now - start) as f32)
    }

    /// Frame of `reveal` for element `id` at time `now`.
    pub fn frame(&mut self, id: &str, reveal: &Reveal, now: f64, visible: bool) -> RevealFrame {
        match self.elapsed(id, now, visible) {
            Some(elapsed) => {
                if !reveal.is_done(elapsed) {
                    self.animating = true;
                }
                reveal.at(elapsed)
            }
            None => reveal.initial(),
        }
    }

    /// Whether any frame handed out since the last call was mid-transition.
    /// Clears the flag.
    pub fn take_animating(&mut self) -> bool {
        std::mem::take(&mut self.animating)
    }
}

/// Scale that eases toward `hover_scale` while hovered and back to 1.0.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HoverScale {
    hover_scale: f32,
    current: f32,
}

impl HoverScale {
    pub fn new(hover_scale: f32) -> Self {
        Self {
            hover_scale,
            current: 1.0,
        }
    }

    pub fn current(&self) -> f32 {
        self.current
    }

    /// Advance by `dt` seconds and return the new scale.
    pub fn update(&mut self, hovered: bool, dt: f32) -> f32 {
        let target = if hovered { self.hover_scale } else { 1.0 };
        // Exponential approach: ~95% of the way after HOVER_SCALE_SETTLE_SECS.
        let rate = 3.0 / HOVER_SCALE_SETTLE_SECS;
        let k = 1.0 - (-rate * dt.max(0.0)).exp();
        self.current += (target - self.current) * k;
        if (target - self.current).abs() < 1e-4 {
            self.current = target;
        }
        self.current
    }

    pub fn is_settled(&self, hovered: bool) -> bool {
        let target = if hovered { self.hover_scale } else { 1.0 };
        self.current == target
    }
}
