//! Per-operation configuration values.
//!
//! Each fill operation takes one options value with named, independently
//! defaultable fields instead of a ladder of optional parameters.

use moor_core::{Insets, Priority, Tag, XAlign};

/// Options forwarded unchanged to a single directional constraint.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct EdgeOptions {
    /// Solver priority; `None` means the engine default (required).
    pub priority: Option<Priority>,
    /// Label for later lookup or removal.
    pub tag: Option<Tag>,
    /// Install state; `None` means the engine default (active).
    pub active: Option<bool>,
}

impl EdgeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn with_tag(mut self, tag: Tag) -> Self {
        self.tag = Some(tag);
        self
    }

    pub fn with_active(mut self, active: bool) -> Self {
        self.active = Some(active);
        self
    }
}

/// Options for [`Layout::fill`](crate::Layout::fill) and
/// [`Layout::fill_except`](crate::Layout::fill_except).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FillOptions {
    /// Per-edge insets; a bare number gives uniform insets via `Into`.
    pub inset: Insets,
    pub priority: Option<Priority>,
    pub tag: Option<Tag>,
    pub active: Option<bool>,
}

impl FillOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the insets, accepting either structured [`Insets`] or a uniform
    /// numeric value.
    pub fn with_inset(mut self, inset: impl Into<Insets>) -> Self {
        self.inset = inset.into();
        self
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn with_tag(mut self, tag: Tag) -> Self {
        self.tag = Some(tag);
        self
    }

    pub fn with_active(mut self, active: bool) -> Self {
        self.active = Some(active);
        self
    }

    pub(crate) fn edge_options(&self) -> EdgeOptions {
        EdgeOptions {
            priority: self.priority,
            tag: self.tag,
            active: self.active,
        }
    }
}

/// Options for [`Layout::fill_width`](crate::Layout::fill_width).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FillWidthOptions {
    pub inset: Insets,
    /// Which edge the capped view aligns to. Defaults to center.
    pub align: XAlign,
    /// Hard priority for the cap and alignment; the fill itself is installed
    /// one step below. `None` means required (1000).
    pub priority: Option<Priority>,
    pub tag: Option<Tag>,
    pub active: Option<bool>,
}

impl FillWidthOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_inset(mut self, inset: impl Into<Insets>) -> Self {
        self.inset = inset.into();
        self
    }

    pub fn with_align(mut self, align: XAlign) -> Self {
        self.align = align;
        self
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn with_tag(mut self, tag: Tag) -> Self {
        self.tag = Some(tag);
        self
    }

    pub fn with_active(mut self, active: bool) -> Self {
        self.active = Some(active);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_defaults() {
        let options = FillOptions::new();
        assert_eq!(options.inset, Insets::ZERO);
        assert_eq!(options.priority, None);
        assert_eq!(options.tag, None);
        assert_eq!(options.active, None);
    }

    #[test]
    fn test_uniform_inset_setter() {
        let uniform = FillOptions::new().with_inset(12.0);
        let structured = FillOptions::new().with_inset(Insets::uniform(12.0));
        assert_eq!(uniform, structured);
    }

    #[test]
    fn test_fill_width_defaults_to_center() {
        let options = FillWidthOptions::new();
        assert_eq!(options.align, XAlign::Center);
        assert_eq!(options.priority, None);
    }
}
