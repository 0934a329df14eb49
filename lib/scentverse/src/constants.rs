//! Fixed timings, thresholds and class names used across the page features.

/// How long a product stays highlighted after being found.
pub const HIGHLIGHT_DURATION_MS : u32 = 2600;

/// CSS class marking the highlighted product.
pub const HIGHLIGHT_CLASS : &str = "highlight";

/// CSS class of reveal targets waiting to become visible.
pub const REVEAL_INIT_CLASS : &str = "reveal-init";

/// CSS class of revealed targets.
pub const REVEAL_IN_CLASS : &str = "reveal-in";

/// Visible fraction of a reveal target that triggers the reveal.
pub const REVEAL_THRESHOLD : f64 = 0.12;

/// Viewport margin of the reveal observer. The negative bottom margin delays the reveal until the
/// target is slightly above the bottom edge of the viewport.
pub const REVEAL_ROOT_MARGIN : &str = "0px 0px -6% 0px";

/// Hero background offset per pixel of page scroll.
pub const PARALLAX_SCROLL_FACTOR : f64 = -0.12;

/// Hero content offset in pixels per unit of normalized pointer offset from the hero center.
pub const PARALLAX_POINTER_FACTOR : f64 = 10.0;

/// Ripple diameter relative to the larger dimension of the clicked control.
pub const RIPPLE_SCALE : f64 = 1.2;

/// Delay after which the ripple starts fading out.
pub const RIPPLE_FADE_DELAY_MS : u32 = 350;

/// Delay after which the ripple is removed from the control.
pub const RIPPLE_REMOVE_DELAY_MS : u32 = 700;

/// Key which triggers the search from the search input.
pub const SEARCH_KEY : &str = "Enter";
