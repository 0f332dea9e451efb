//! Constraint activation engine for the moor layout system.
//!
//! This crate owns installed constraints and the view registry they refer to.
//! It is deliberately not a solver: it records (attribute, relation, target,
//! offset, priority) tuples in insertion order, resolves leading/trailing
//! against the configured writing direction, and supports lookup, activation
//! toggling, and removal by tag. Whether a given constraint set is
//! satisfiable is a solver-level concern outside this crate.
//!
//! # Example
//!
//! ```ignore
//! use moor_constraint::{ConstraintEngine, ConstraintSpec};
//!
//! let mut engine = ConstraintEngine::new();
//! let view = engine.register_view(Bounds::new(0.0, 0.0, 320.0, 480.0));
//! let id = engine.add_constraint(spec);
//! engine.set_active(id, false)?;
//! ```

mod anchor;
mod engine;

pub use anchor::{AnchorRef, Guide, GuideKind};
pub use engine::{Constraint, ConstraintEngine, ConstraintSpec};
