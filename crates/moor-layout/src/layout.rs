//! The chainable layout handle and fill-constraint derivation.

use smallvec::SmallVec;

use moor_constraint::{AnchorRef, ConstraintEngine, ConstraintSpec, Guide};
use moor_core::{
    Attribute, Axis, ConstraintId, FillEdge, Insets, Priority, Relation, ViewId, XAlign,
};

use crate::options::{EdgeOptions, FillOptions, FillWidthOptions};

/// Anything that can serve as the right-hand side of a directional constraint.
///
/// A plain [`ViewId`] binds the same attribute on both sides implicitly. A
/// [`Guide`] is a synthesized edge set with no implicit default attribute, so
/// its anchors always name the bound edge explicitly. Switching target kinds
/// changes only the produced [`AnchorRef`] variant, never the count, order,
/// sign, or magnitude of the constraints a fill derives.
pub trait Anchor {
    /// The anchor for `attribute` on this target.
    fn anchor(&self, attribute: Attribute) -> AnchorRef;
}

impl Anchor for ViewId {
    fn anchor(&self, attribute: Attribute) -> AnchorRef {
        AnchorRef::View {
            view: *self,
            attribute,
        }
    }
}

impl Anchor for Guide {
    fn anchor(&self, attribute: Attribute) -> AnchorRef {
        AnchorRef::Guide {
            view: self.view,
            guide: self.kind,
            attribute,
        }
    }
}

/// A chainable constraint builder bound to exactly one subject view.
///
/// Every operation installs constraints in the engine and returns the handle
/// for further chaining. The handle owns no constraints itself; it only
/// remembers the identifiers it emitted so callers can toggle or remove them
/// later.
#[derive(Debug)]
pub struct Layout<'e> {
    engine: &'e mut ConstraintEngine,
    view: ViewId,
    emitted: SmallVec<[ConstraintId; 8]>,
}

impl<'e> Layout<'e> {
    /// Start a constraint chain for `view`.
    pub fn new(engine: &'e mut ConstraintEngine, view: ViewId) -> Self {
        Self {
            engine,
            view,
            emitted: SmallVec::new(),
        }
    }

    /// The subject of this chain.
    pub fn view(&self) -> ViewId {
        self.view
    }

    /// Identifiers of every constraint this chain has installed, in order.
    pub fn constraint_ids(&self) -> &[ConstraintId] {
        &self.emitted
    }

    fn push(
        mut self,
        attribute: Attribute,
        relation: Relation,
        target: AnchorRef,
        offset: f64,
        options: &EdgeOptions,
    ) -> Self {
        let id = self.engine.add_constraint(ConstraintSpec {
            subject: self.view,
            attribute,
            relation,
            target,
            offset,
            priority: options.priority.unwrap_or_default(),
            tag: options.tag,
            active: options.active,
        });
        self.emitted.push(id);
        self
    }

    // --- Directional primitives ---

    /// Constrain one attribute of the subject to the same attribute of
    /// `target`.
    pub fn edge(
        self,
        attribute: Attribute,
        relation: Relation,
        target: &impl Anchor,
        offset: f64,
        options: &EdgeOptions,
    ) -> Self {
        let anchor = target.anchor(attribute);
        self.push(attribute, relation, anchor, offset, options)
    }

    pub fn leading(self, target: &impl Anchor, offset: f64, options: &EdgeOptions) -> Self {
        self.edge(Attribute::Leading, Relation::Equal, target, offset, options)
    }

    pub fn trailing(self, target: &impl Anchor, offset: f64, options: &EdgeOptions) -> Self {
        self.edge(Attribute::Trailing, Relation::Equal, target, offset, options)
    }

    pub fn top(self, target: &impl Anchor, offset: f64, options: &EdgeOptions) -> Self {
        self.edge(Attribute::Top, Relation::Equal, target, offset, options)
    }

    pub fn bottom(self, target: &impl Anchor, offset: f64, options: &EdgeOptions) -> Self {
        self.edge(Attribute::Bottom, Relation::Equal, target, offset, options)
    }

    pub fn left(self, target: &impl Anchor, offset: f64, options: &EdgeOptions) -> Self {
        self.edge(Attribute::Left, Relation::Equal, target, offset, options)
    }

    pub fn right(self, target: &impl Anchor, offset: f64, options: &EdgeOptions) -> Self {
        self.edge(Attribute::Right, Relation::Equal, target, offset, options)
    }

    pub fn center_x(self, target: &impl Anchor, offset: f64, options: &EdgeOptions) -> Self {
        self.edge(Attribute::CenterX, Relation::Equal, target, offset, options)
    }

    /// Constrain the subject's width to be at most `maximum`.
    ///
    /// `maximum` is forwarded as-is; whether a negative cap is satisfiable is
    /// the solver's concern.
    pub fn width_at_most(self, maximum: f64, options: &EdgeOptions) -> Self {
        self.push(
            Attribute::Width,
            Relation::LessOrEqual,
            AnchorRef::Constant(maximum),
            0.0,
            options,
        )
    }

    // --- Fill derivation ---

    fn fill_edge(
        self,
        target: &impl Anchor,
        edge: FillEdge,
        inset: &Insets,
        options: &EdgeOptions,
    ) -> Self {
        self.edge(
            edge.attribute(),
            Relation::Equal,
            target,
            edge.offset_in(inset),
            options,
        )
    }

    /// Constrain the subject's edges to coincide with `target`'s, inset by
    /// `options.inset`.
    ///
    /// Emits leading then trailing for a horizontal axis, top then bottom for
    /// a vertical one, four constraints for [`Axis::Both`]. Every edge reads
    /// its own inset field (top from `inset.top`, bottom from `inset.bottom`),
    /// with leading/top offsets positive and trailing/bottom negated, for both
    /// plain-view and guide targets.
    pub fn fill(mut self, target: &impl Anchor, axis: Axis, options: &FillOptions) -> Self {
        let edge_options = options.edge_options();
        if axis.is_horizontal() {
            self = self.fill_edge(target, FillEdge::Leading, &options.inset, &edge_options);
            self = self.fill_edge(target, FillEdge::Trailing, &options.inset, &edge_options);
        }
        if axis.is_vertical() {
            self = self.fill_edge(target, FillEdge::Top, &options.inset, &edge_options);
            self = self.fill_edge(target, FillEdge::Bottom, &options.inset, &edge_options);
        }
        self
    }

    /// Like [`fill`](Self::fill) on both axes, but omits the single `except`
    /// edge. Emits exactly three constraints, in the fixed order leading,
    /// trailing, top, bottom minus the excluded one.
    pub fn fill_except(
        mut self,
        target: &impl Anchor,
        except: FillEdge,
        options: &FillOptions,
    ) -> Self {
        let edge_options = options.edge_options();
        for edge in FillEdge::ALL {
            if edge != except {
                self = self.fill_edge(target, edge, &options.inset, &edge_options);
            }
        }
        self
    }

    /// Fill the width of `target` up to a maximum, then align.
    ///
    /// Installs the horizontal fill one priority step below `options.priority`
    /// (default required), and the width cap plus exactly one alignment
    /// constraint at `options.priority` itself, so the cap and alignment win
    /// whenever the natural fill would exceed `maximum`.
    pub fn fill_width(
        mut self,
        target: &impl Anchor,
        maximum: f64,
        options: &FillWidthOptions,
    ) -> Self {
        let hard = options.priority.unwrap_or_default();
        let soft_fill = FillOptions {
            inset: options.inset,
            priority: Some(hard.step_down()),
            tag: options.tag,
            active: options.active,
        };
        self = self.fill(target, Axis::X, &soft_fill);

        let hard_options = EdgeOptions {
            priority: Some(hard),
            tag: options.tag,
            active: options.active,
        };
        self = self.width_at_most(maximum, &hard_options);

        let inset = &options.inset;
        match options.align {
            XAlign::Left => self.left(target, inset.left, &hard_options),
            XAlign::Right => self.right(target, -inset.right, &hard_options),
            XAlign::Center => self.center_x(target, 0.0, &hard_options),
            XAlign::Leading => self.leading(target, inset.left, &hard_options),
            XAlign::Trailing => self.trailing(target, -inset.right, &hard_options),
        }
    }
}
