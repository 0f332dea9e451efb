//! Core value types for the moor layout constraint system.
//!
//! This crate defines the vocabulary shared by the constraint engine and the
//! fluent layout layer:
//! - Identifiers for views, constraints, and tags
//! - Solver priorities with named levels
//! - Edge insets and the signed-offset table used by fill derivation
//! - Closed enums for axes, edges, attributes, and relations
//! - Axis-aligned bounds for guide geometry

mod errors;
mod geometry;
mod types;

pub use errors::ConstraintError;
pub use geometry::Bounds;
pub use types::{
    Attribute, Axis, ConstraintId, FillEdge, Insets, Priority, Relation, Tag, TextDirection,
    ViewId, XAlign,
};
