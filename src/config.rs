//! Tuning constants shared by every story section.

/// Pinned scrollytelling is disabled outright below this viewport width;
/// content flows as a plain stacked column instead.
pub const TINY_SCREEN_WIDTH: f64 = 450.0;

/// The horizontal scroll-jacked row needs more room than the vertical
/// sections and falls back to stacked cards below this width.
pub const MOBILE_SCREEN_WIDTH: f64 = 768.0;

/// Resize events are debounced before the responsive mode is re-evaluated.
pub const RESIZE_DEBOUNCE_MS: u32 = 150;

/// Late image/font loads can shift section geometry after mount; regions
/// are re-measured once after this delay.
pub const LATE_LAYOUT_REMEASURE_MS: u32 = 500;

/// Exit phase: outgoing slide elements fade to their offset state.
pub const EXIT_DURATION_MS: f64 = 180.0;

/// Enter phase: incoming slide elements settle to rest.
pub const ENTER_DURATION_MS: f64 = 320.0;

/// Icon rotation flourish, independent of the text track.
pub const ICON_OUT_DURATION_MS: f64 = 200.0;
pub const ICON_IN_DURATION_MS: f64 = 400.0;

/// Overshoot factor for the back-out ease on incoming iconography.
pub const BACK_OVERSHOOT: f64 = 1.7;
