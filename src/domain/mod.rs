//! Pure domain types with minimal dependencies
//!
//! This module contains the feature, marker and geometry types shared by the
//! codec and the annotation session. Types here know nothing about the
//! interchange format or the host UI.

pub mod feature;
pub mod geometry;
pub mod marker;

pub use feature::*;
pub use geometry::*;
pub use marker::*;
