//! Error types for the moor layout system.

use thiserror::Error;

use crate::types::{ConstraintId, ViewId};

/// Errors raised by the constraint engine.
///
/// Constraint derivation itself is total; only lifecycle operations that
/// reference an identifier can fail.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConstraintError {
    #[error("unknown view: {0:?}")]
    UnknownView(ViewId),

    #[error("unknown constraint: {0:?}")]
    UnknownConstraint(ConstraintId),
}
