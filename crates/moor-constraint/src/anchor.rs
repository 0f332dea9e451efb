//! Constraint targets: plain view anchors and synthesized guide anchors.

use moor_core::{Attribute, ViewId};

/// A synthesized edge-addressed region of a view.
///
/// Guides are not standalone views: a constraint against one must name which
/// of the guide's own edges it binds, so [`AnchorRef::Guide`] always carries
/// an explicit attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuideKind {
    /// The view's bounds inset by its layout margins.
    Margins,
    /// The view's bounds inset by its safe-area insets.
    SafeArea,
}

/// A handle to one guide of a view, usable as a constraint target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Guide {
    pub view: ViewId,
    pub kind: GuideKind,
}

impl Guide {
    /// The margins guide of `view`.
    pub fn margins(view: ViewId) -> Self {
        Self {
            view,
            kind: GuideKind::Margins,
        }
    }

    /// The safe-area guide of `view`.
    pub fn safe_area(view: ViewId) -> Self {
        Self {
            view,
            kind: GuideKind::SafeArea,
        }
    }
}

/// Fully-resolved right-hand side of a constraint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnchorRef {
    /// An attribute of a plain view.
    View { view: ViewId, attribute: Attribute },
    /// An attribute of a synthesized guide, edge named explicitly.
    Guide {
        view: ViewId,
        guide: GuideKind,
        attribute: Attribute,
    },
    /// A constant value (dimensional constraints).
    Constant(f64),
}
