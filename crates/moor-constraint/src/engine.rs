//! The constraint store and view registry.

use indexmap::IndexMap;
use smallvec::SmallVec;

use moor_core::{
    Attribute, Bounds, ConstraintError, ConstraintId, Insets, Priority, Relation, Tag,
    TextDirection, ViewId,
};

use crate::anchor::{AnchorRef, GuideKind};

/// A constraint request as issued by the layout layer.
///
/// `active` of `None` means "use the engine's default", which is active.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstraintSpec {
    pub subject: ViewId,
    pub attribute: Attribute,
    pub relation: Relation,
    pub target: AnchorRef,
    pub offset: f64,
    pub priority: Priority,
    pub tag: Option<Tag>,
    pub active: Option<bool>,
}

/// An installed constraint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Constraint {
    pub id: ConstraintId,
    pub subject: ViewId,
    pub attribute: Attribute,
    pub relation: Relation,
    pub target: AnchorRef,
    pub offset: f64,
    pub priority: Priority,
    pub tag: Option<Tag>,
    pub active: bool,
}

#[derive(Debug, Clone, Copy, Default)]
struct ViewRecord {
    bounds: Bounds,
    margins: Insets,
    safe_area: Insets,
}

/// Owns installed constraints and the views they refer to.
///
/// Constraints are kept in insertion order; the order a fill call emits its
/// constraints in is part of the observable contract and tests rely on it.
#[derive(Debug, Default)]
pub struct ConstraintEngine {
    views: IndexMap<ViewId, ViewRecord>,
    constraints: IndexMap<ConstraintId, Constraint>,
    tag_index: IndexMap<Tag, SmallVec<[ConstraintId; 4]>>,
    text_direction: TextDirection,
    next_view: u64,
    next_constraint: u64,
}

impl ConstraintEngine {
    pub fn new() -> Self {
        Self::default()
    }

    // --- View registry ---

    /// Register a view with the given frame and return its identifier.
    pub fn register_view(&mut self, bounds: Bounds) -> ViewId {
        let id = ViewId(self.next_view);
        self.next_view += 1;
        self.views.insert(
            id,
            ViewRecord {
                bounds,
                ..Default::default()
            },
        );
        id
    }

    /// The frame of a registered view.
    pub fn view_bounds(&self, view: ViewId) -> Result<Bounds, ConstraintError> {
        self.views
            .get(&view)
            .map(|record| record.bounds)
            .ok_or(ConstraintError::UnknownView(view))
    }

    /// Set the layout margins of a view.
    pub fn set_margins(&mut self, view: ViewId, margins: Insets) -> Result<(), ConstraintError> {
        let record = self
            .views
            .get_mut(&view)
            .ok_or(ConstraintError::UnknownView(view))?;
        record.margins = margins;
        Ok(())
    }

    /// Set the safe-area insets of a view.
    pub fn set_safe_area(&mut self, view: ViewId, insets: Insets) -> Result<(), ConstraintError> {
        let record = self
            .views
            .get_mut(&view)
            .ok_or(ConstraintError::UnknownView(view))?;
        record.safe_area = insets;
        Ok(())
    }

    /// The region a guide of `view` covers: the view's bounds inset by the
    /// guide's insets.
    pub fn guide_frame(&self, view: ViewId, guide: GuideKind) -> Result<Bounds, ConstraintError> {
        let record = self
            .views
            .get(&view)
            .ok_or(ConstraintError::UnknownView(view))?;
        let inset = match guide {
            GuideKind::Margins => record.margins,
            GuideKind::SafeArea => record.safe_area,
        };
        Ok(record.bounds.inset_by(&inset))
    }

    // --- Writing direction ---

    pub fn text_direction(&self) -> TextDirection {
        self.text_direction
    }

    pub fn set_text_direction(&mut self, direction: TextDirection) {
        self.text_direction = direction;
    }

    /// Resolve a writing-direction-relative attribute to a concrete one.
    ///
    /// Leading/trailing map to left/right under the current text direction;
    /// every other attribute is returned unchanged.
    pub fn resolve_attribute(&self, attribute: Attribute) -> Attribute {
        match (attribute, self.text_direction) {
            (Attribute::Leading, TextDirection::LeftToRight) => Attribute::Left,
            (Attribute::Leading, TextDirection::RightToLeft) => Attribute::Right,
            (Attribute::Trailing, TextDirection::LeftToRight) => Attribute::Right,
            (Attribute::Trailing, TextDirection::RightToLeft) => Attribute::Left,
            (other, _) => other,
        }
    }

    // --- Constraint lifecycle ---

    /// Install a constraint and return its identifier.
    pub fn add_constraint(&mut self, spec: ConstraintSpec) -> ConstraintId {
        let id = ConstraintId(self.next_constraint);
        self.next_constraint += 1;
        let constraint = Constraint {
            id,
            subject: spec.subject,
            attribute: spec.attribute,
            relation: spec.relation,
            target: spec.target,
            offset: spec.offset,
            priority: spec.priority,
            tag: spec.tag,
            active: spec.active.unwrap_or(true),
        };
        if let Some(tag) = spec.tag {
            self.tag_index.entry(tag).or_default().push(id);
        }
        self.constraints.insert(id, constraint);
        id
    }

    /// Look up an installed constraint.
    pub fn constraint(&self, id: ConstraintId) -> Option<&Constraint> {
        self.constraints.get(&id)
    }

    /// All installed constraints in insertion order.
    pub fn constraints(&self) -> impl Iterator<Item = &Constraint> {
        self.constraints.values()
    }

    pub fn len(&self) -> usize {
        self.constraints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.constraints.is_empty()
    }

    /// Toggle a constraint's active state.
    pub fn set_active(&mut self, id: ConstraintId, active: bool) -> Result<(), ConstraintError> {
        let constraint = self
            .constraints
            .get_mut(&id)
            .ok_or(ConstraintError::UnknownConstraint(id))?;
        constraint.active = active;
        Ok(())
    }

    // --- Tag index ---

    /// Identifiers of all constraints carrying `tag`, in insertion order.
    pub fn tagged(&self, tag: Tag) -> &[ConstraintId] {
        self.tag_index.get(&tag).map_or(&[], |ids| ids.as_slice())
    }

    /// Deactivate every constraint carrying `tag`; returns how many were hit.
    pub fn deactivate_tagged(&mut self, tag: Tag) -> usize {
        let ids: SmallVec<[ConstraintId; 4]> =
            self.tag_index.get(&tag).cloned().unwrap_or_default();
        for id in &ids {
            if let Some(constraint) = self.constraints.get_mut(id) {
                constraint.active = false;
            }
        }
        ids.len()
    }

    /// Remove every constraint carrying `tag`; returns how many were removed.
    ///
    /// Safe to call repeatedly with the same tag; later calls remove nothing.
    pub fn remove_tagged(&mut self, tag: Tag) -> usize {
        let Some(ids) = self.tag_index.swap_remove(&tag) else {
            return 0;
        };
        let mut removed = 0;
        for id in ids {
            if self.constraints.shift_remove(&id).is_some() {
                removed += 1;
            }
        }
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(subject: ViewId, target: AnchorRef) -> ConstraintSpec {
        ConstraintSpec {
            subject,
            attribute: Attribute::Leading,
            relation: Relation::Equal,
            target,
            offset: 0.0,
            priority: Priority::REQUIRED,
            tag: None,
            active: None,
        }
    }

    fn engine_with_views() -> (ConstraintEngine, ViewId, ViewId) {
        let mut engine = ConstraintEngine::new();
        let a = engine.register_view(Bounds::new(0.0, 0.0, 320.0, 480.0));
        let b = engine.register_view(Bounds::new(0.0, 0.0, 100.0, 100.0));
        (engine, a, b)
    }

    #[test]
    fn test_add_and_lookup() {
        let (mut engine, a, b) = engine_with_views();
        let id = engine.add_constraint(spec(
            a,
            AnchorRef::View {
                view: b,
                attribute: Attribute::Leading,
            },
        ));

        let constraint = engine.constraint(id).unwrap();
        assert_eq!(constraint.subject, a);
        assert_eq!(constraint.priority, Priority::REQUIRED);
        // `active: None` resolves to the engine default.
        assert!(constraint.active);
        assert_eq!(engine.len(), 1);
    }

    #[test]
    fn test_explicit_inactive() {
        let (mut engine, a, _) = engine_with_views();
        let id = engine.add_constraint(ConstraintSpec {
            active: Some(false),
            ..spec(a, AnchorRef::Constant(200.0))
        });
        assert!(!engine.constraint(id).unwrap().active);
    }

    #[test]
    fn test_set_active_unknown_constraint() {
        let (mut engine, _, _) = engine_with_views();
        let missing = ConstraintId(99);
        assert_eq!(
            engine.set_active(missing, true),
            Err(ConstraintError::UnknownConstraint(missing))
        );
    }

    #[test]
    fn test_tag_index_and_removal() {
        let (mut engine, a, b) = engine_with_views();
        let target = AnchorRef::View {
            view: b,
            attribute: Attribute::Top,
        };
        let tag = Tag(7);
        let tagged_a = engine.add_constraint(ConstraintSpec {
            tag: Some(tag),
            ..spec(a, target)
        });
        let untagged = engine.add_constraint(spec(a, target));
        let tagged_b = engine.add_constraint(ConstraintSpec {
            tag: Some(tag),
            ..spec(a, target)
        });

        assert_eq!(engine.tagged(tag), &[tagged_a, tagged_b]);

        assert_eq!(engine.remove_tagged(tag), 2);
        assert_eq!(engine.len(), 1);
        assert!(engine.constraint(untagged).is_some());
        // Idempotent: a second removal is a no-op.
        assert_eq!(engine.remove_tagged(tag), 0);
    }

    #[test]
    fn test_deactivate_tagged() {
        let (mut engine, a, b) = engine_with_views();
        let tag = Tag(1);
        let id = engine.add_constraint(ConstraintSpec {
            tag: Some(tag),
            ..spec(
                a,
                AnchorRef::View {
                    view: b,
                    attribute: Attribute::Bottom,
                },
            )
        });

        assert_eq!(engine.deactivate_tagged(tag), 1);
        assert!(!engine.constraint(id).unwrap().active);
        // The constraint stays installed and can be re-enabled by id.
        engine.set_active(id, true).unwrap();
        assert!(engine.constraint(id).unwrap().active);
    }

    #[test]
    fn test_resolve_attribute_ltr() {
        let engine = ConstraintEngine::new();
        assert_eq!(engine.resolve_attribute(Attribute::Leading), Attribute::Left);
        assert_eq!(
            engine.resolve_attribute(Attribute::Trailing),
            Attribute::Right
        );
        assert_eq!(engine.resolve_attribute(Attribute::Top), Attribute::Top);
    }

    #[test]
    fn test_resolve_attribute_rtl() {
        let mut engine = ConstraintEngine::new();
        engine.set_text_direction(TextDirection::RightToLeft);
        assert_eq!(
            engine.resolve_attribute(Attribute::Leading),
            Attribute::Right
        );
        assert_eq!(
            engine.resolve_attribute(Attribute::Trailing),
            Attribute::Left
        );
        assert_eq!(
            engine.resolve_attribute(Attribute::CenterX),
            Attribute::CenterX
        );
    }

    #[test]
    fn test_guide_frames() {
        let (mut engine, a, _) = engine_with_views();
        engine.set_margins(a, Insets::uniform(8.0)).unwrap();
        engine
            .set_safe_area(a, Insets::new(0.0, 44.0, 0.0, 34.0))
            .unwrap();

        assert_eq!(
            engine.guide_frame(a, GuideKind::Margins).unwrap(),
            Bounds::new(8.0, 8.0, 304.0, 464.0)
        );
        assert_eq!(
            engine.guide_frame(a, GuideKind::SafeArea).unwrap(),
            Bounds::new(0.0, 44.0, 320.0, 402.0)
        );
    }

    #[test]
    fn test_unknown_view() {
        let engine = ConstraintEngine::new();
        let missing = ViewId(42);
        assert_eq!(
            engine.view_bounds(missing),
            Err(ConstraintError::UnknownView(missing))
        );
        assert_eq!(
            engine.guide_frame(missing, GuideKind::Margins),
            Err(ConstraintError::UnknownView(missing))
        );
    }
}
