//! Client-side state owners.
//!
//! DESIGN
//! ======
//! The page has exactly two pieces of mutable state: the theme flag and the
//! testimonial carousel. Both are plain synchronous types so they can be
//! tested natively; components wrap them in Leptos signals or stored values.

pub mod carousel;
pub mod theme;
