/// Scroll delta (px) that must be exceeded before the navbar changes
/// visibility. Deltas inside `[-threshold, threshold]` are treated as jitter.
pub const HYSTERESIS_THRESHOLD: f32 = 10.0;

/// Offset (px) past which the navbar switches to its elevated style.
pub const SCROLLED_THRESHOLD: f32 = 20.0;

/// Offset (px) at or below which the navbar is always revealed, regardless
/// of scroll direction.
pub const TOP_REVEAL_OFFSET: f32 = 10.0;

/// A section becomes a candidate once the scroll offset reaches
/// `section_top - SECTION_MARGIN`.
pub const SECTION_MARGIN: f32 = 150.0;

/// Distance (px) from the document end inside which the last section is
/// forced active.
pub const BOTTOM_MARGIN: f32 = 50.0;

/// Default damping for smooth scrolling: `remaining *= 1 - speed` per tick.
pub const DEFAULT_SMOOTH_SCROLL_SPEED: f32 = 0.35;

/// Slowest accepted smooth-scroll speed.
pub const MIN_SMOOTH_SCROLL_SPEED: f32 = 0.05;

/// Remaining distance (px) below which a smooth scroll snaps to its target.
pub const SMOOTH_SCROLL_SETTLE_PX: f32 = 0.5;

/// Upper bound on ticks for one smooth scroll, so a replay always terminates.
pub const SMOOTH_SCROLL_MAX_TICKS: usize = 120;

/// Viewport width (px) below which the navbar collapses into a menu button.
pub const MOBILE_BREAKPOINT: f32 = 768.0;
