//! Compile-time tuning for the landing page.
//!
//! The page has no runtime configuration surface: everything here is fixed
//! at build time and shared by state, utilities, and components.

/// `localStorage` key holding the theme preference (`"light"` or `"dark"`).
pub const THEME_STORAGE_KEY: &str = "ielts_pro_theme";

/// Interval between automatic testimonial advances.
pub const CAROUSEL_INTERVAL_MS: u32 = 4000;

/// Scroll offset after which the navbar switches to its solid style.
pub const NAV_SCROLLED_THRESHOLD_PX: f64 = 20.0;

/// Scroll range over which the hero content drifts and fades.
pub const HERO_SCROLL_RANGE_PX: (f64, f64) = (0.0, 300.0);
/// Hero vertical drift across [`HERO_SCROLL_RANGE_PX`].
pub const HERO_DRIFT_PX: (f64, f64) = (0.0, -50.0);
/// Hero opacity across [`HERO_SCROLL_RANGE_PX`].
pub const HERO_FADE: (f64, f64) = (1.0, 0.8);

/// Viewport shrink applied before a section counts as "in view".
pub const IN_VIEW_MARGIN_PX: f64 = 100.0;

/// Degrees of hero tilt per pixel of pointer offset from the viewport center.
pub const PARALLAX_DEG_PER_PX: f64 = 0.01;
