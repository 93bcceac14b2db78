//! Browser-facing helpers shared across components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (storage, timers,
//! window listeners) from component markup. Each keeps its math pure and
//! gates the `web_sys` glue behind the `hydrate` feature.

pub mod dark_mode;
pub mod pointer;
pub mod scroll;
pub mod ticker;
