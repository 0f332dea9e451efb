//! Fluent fill-constraint derivation for the moor layout system.
//!
//! A [`Layout`] is a chainable handle bound to one subject view. Its fill
//! operations expand a single high-level intent into a deterministic set of
//! directional constraints against a target (a plain view or a synthesized
//! guide), with writing-direction-aware edges, per-edge exclusion, inset
//! control, and priority-split width capping.
//!
//! # Architecture
//!
//! 1. **Options**: optional knobs (inset, priority, tag, active) are one
//!    configuration value per operation, not parameter ladders
//! 2. **Edge resolution**: the edge → (attribute, signed inset field) table
//!    on [`moor_core::FillEdge`] drives every path
//! 3. **Priority split**: width-capped fills install the soft fill one step
//!    below the cap and alignment constraints
//!
//! # Example
//!
//! ```ignore
//! use moor_layout::{Layout, FillOptions};
//!
//! Layout::new(&mut engine, child)
//!     .fill(&parent, Axis::Both, &FillOptions::new().with_inset(8.0));
//! ```

mod layout;
mod options;

pub use layout::{Anchor, Layout};
pub use options::{EdgeOptions, FillOptions, FillWidthOptions};

pub use moor_constraint::{AnchorRef, ConstraintEngine, Guide, GuideKind};
pub use moor_core::{Attribute, Axis, FillEdge, Insets, Priority, Relation, Tag, ViewId, XAlign};
