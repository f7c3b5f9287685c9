/// Carousel advance per animation frame, in pixels.
pub const CAROUSEL_SPEED_PX_PER_FRAME: f32 = 0.6;

/// Fraction of a section that must be visible before it counts as in view.
pub const SECTION_VISIBILITY_THRESHOLD: f32 = 0.55;

/// Section highlighted before the first visibility notification arrives.
pub const INITIAL_SECTION: &str = "hero";

/// Page sections in document order. Navigation entries must point at one of these.
pub const PAGE_SECTIONS: &[&str] = &[
    "hero",
    "about",
    "skills",
    "education",
    "projects",
    "certifications",
    "contact",
];

/// A demo address with this value means "no demo deployed".
pub const DEMO_PLACEHOLDER: &str = "#";

/// Duration of the hover scale easing, in seconds, to reach ~95% of the target.
pub const HOVER_SCALE_SETTLE_SECS: f32 = 0.15;
