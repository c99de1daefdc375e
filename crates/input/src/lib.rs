//! Host events: lifecycle, size, paint and touch, as one tagged enum.
//!
//! # Invariants
//! - Hosts translate their native events into `Event` before the app sees them.
//! - A draw context travels only on the lifecycle event that makes the app visible.

pub mod event;

pub use event::{
    Crossing, Event, LifecycleEvent, PaintEvent, SizeEvent, Stage, TouchEvent, TouchKind,
};
