//! Landing page sections and the animated wrappers they are built from.
//!
//! SYSTEM CONTEXT
//! ==============
//! Sections read static copy from `content` and shared state (theme) from
//! Leptos context. Animation is expressed through `motion::Motion` and
//! `motion::Ambient`; no section touches CSS transitions directly.

pub mod dark_mode_toggle;
pub mod features;
pub mod footer;
pub mod hero;
pub mod motion;
pub mod navbar;
pub mod section_heading;
pub mod testimonials;
