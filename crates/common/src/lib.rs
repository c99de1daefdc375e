//! Shared geometry units for the spincube workspace.
//!
//! # Invariants
//! - Screen measurements crossing crate boundaries are in points, never raw pixels.

mod geom;

pub use geom::{Point, Pt};
