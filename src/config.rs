//! Tuning constants for the landing page behaviors. Values here are
//! presentation defaults, kept in one place so the feel of the page can be
//! adjusted without touching the components.

/// The stepper's scroll window opens once the tracked section's top is this
/// fraction of the viewport height below the viewport top.
pub const SCROLL_WINDOW_START: f64 = 0.9;

/// The scroll window closes when the section's top reaches this fraction of
/// the section's own height, so the rail fills slightly before the section
/// scrolls away. Negative: above the viewport top.
pub const SCROLL_WINDOW_END: f64 = -0.2;

/// Slack on step threshold comparisons so a step doesn't flicker when the
/// computed progress lands exactly on its boundary.
pub const STEP_EPSILON: f64 = 0.001;

/// Intersection breakpoints for the stepper's visibility observer.
pub const STEPPER_BREAKPOINTS: [f64; 4] = [0.0, 0.1, 0.5, 1.0];

/// The sticky CTA appears once less than this fraction of the hero is visible.
pub const STICKY_HERO_RATIO: f64 = 0.5;

/// Intersection threshold for revealing a section.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Bottom margin for the reveal observer, so sections animate in a little
/// before their natural trigger point.
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

/// How long the keyboard activation transform stays applied, in milliseconds.
pub const KEY_FEEDBACK_MS: u32 = 150;

/// Lowercased user agent fragments treated as mobile platforms.
pub const MOBILE_UA_MARKERS: [&str; 8] = [
    "android",
    "webos",
    "iphone",
    "ipad",
    "ipod",
    "blackberry",
    "iemobile",
    "opera mini",
];
