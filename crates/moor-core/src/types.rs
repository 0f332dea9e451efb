//! Core value types for the moor layout system.

/// Unique identifier for a view registered with the constraint engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewId(pub u64);

/// Unique identifier for an installed constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConstraintId(pub u64);

/// Opaque caller-supplied label attached to constraints for later lookup or
/// removal. Never interpreted by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tag(pub u32);

/// Solver priority. Higher wins when constraints conflict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Priority(pub u16);

impl Priority {
    pub const WEAK: Self = Self(1);
    pub const LOW: Self = Self(250);
    pub const MEDIUM: Self = Self(500);
    pub const HIGH: Self = Self(750);
    pub const REQUIRED: Self = Self(1000);

    /// The priority one unit below this one, saturating at zero.
    pub fn step_down(self) -> Self {
        Self(self.0.saturating_sub(1))
    }
}

impl Default for Priority {
    fn default() -> Self {
        Self::REQUIRED
    }
}

impl std::ops::Sub<u16> for Priority {
    type Output = Priority;

    fn sub(self, rhs: u16) -> Priority {
        Priority(self.0.saturating_sub(rhs))
    }
}

/// Edge insets on all four sides.
///
/// Values are stored unsigned by convention; the fill resolver applies the
/// sign when it derives constraint offsets (see [`FillEdge::offset_in`]).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Insets {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Insets {
    /// Zero inset on every side.
    pub const ZERO: Self = Self {
        left: 0.0,
        top: 0.0,
        right: 0.0,
        bottom: 0.0,
    };

    pub fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Create uniform insets.
    pub fn uniform(value: f64) -> Self {
        Self {
            left: value,
            top: value,
            right: value,
            bottom: value,
        }
    }

    /// Create symmetric insets.
    pub fn symmetric(horizontal: f64, vertical: f64) -> Self {
        Self {
            left: horizontal,
            top: vertical,
            right: horizontal,
            bottom: vertical,
        }
    }

    /// Total horizontal inset.
    pub fn horizontal(&self) -> f64 {
        self.left + self.right
    }

    /// Total vertical inset.
    pub fn vertical(&self) -> f64 {
        self.top + self.bottom
    }
}

impl From<f64> for Insets {
    fn from(value: f64) -> Self {
        Insets::uniform(value)
    }
}

/// Which pair of edges a fill constrains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    /// Leading and trailing edges only.
    X,
    /// Top and bottom edges only.
    Y,
    /// All four edges.
    #[default]
    Both,
}

impl Axis {
    /// Whether this axis includes the leading/trailing pair.
    pub fn is_horizontal(self) -> bool {
        matches!(self, Axis::X | Axis::Both)
    }

    /// Whether this axis includes the top/bottom pair.
    pub fn is_vertical(self) -> bool {
        matches!(self, Axis::Y | Axis::Both)
    }
}

/// One edge of a fill, used both to drive emission order and to name the
/// single edge omitted from a fill-except request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FillEdge {
    Leading,
    Trailing,
    Top,
    Bottom,
}

impl FillEdge {
    /// All fill edges in emission order.
    pub const ALL: [FillEdge; 4] = [
        FillEdge::Leading,
        FillEdge::Trailing,
        FillEdge::Top,
        FillEdge::Bottom,
    ];

    /// The constraint attribute this edge binds on both sides.
    pub fn attribute(self) -> Attribute {
        match self {
            FillEdge::Leading => Attribute::Leading,
            FillEdge::Trailing => Attribute::Trailing,
            FillEdge::Top => Attribute::Top,
            FillEdge::Bottom => Attribute::Bottom,
        }
    }

    /// The signed constraint offset this edge reads from `inset`.
    ///
    /// Leading and top edges push inward with a positive offset; trailing and
    /// bottom edges push inward with a negated one. Every fill path derives
    /// its offsets through this table, so the field/sign pairing cannot drift
    /// between call sites.
    pub fn offset_in(self, inset: &Insets) -> f64 {
        match self {
            FillEdge::Leading => inset.left,
            FillEdge::Trailing => -inset.right,
            FillEdge::Top => inset.top,
            FillEdge::Bottom => -inset.bottom,
        }
    }
}

/// Alignment edge for width-capped fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum XAlign {
    Left,
    Right,
    #[default]
    Center,
    Leading,
    Trailing,
}

/// A directional or dimensional anchor attribute of a view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Attribute {
    Leading,
    Trailing,
    Left,
    Right,
    Top,
    Bottom,
    CenterX,
    CenterY,
    Width,
    Height,
}

/// Relation between the two sides of a constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Relation {
    Equal,
    LessOrEqual,
    GreaterOrEqual,
}

/// Writing direction used to resolve leading/trailing into left/right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TextDirection {
    #[default]
    LeftToRight,
    RightToLeft,
}
