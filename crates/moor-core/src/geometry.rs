//! Axis-aligned bounds used for view frames and guide regions.

use glam::Vec2;

use crate::types::Insets;

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    /// Create bounds with position and size.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Get position as Vec2.
    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x as f32, self.y as f32)
    }

    /// Get size as Vec2.
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }

    /// Get the right edge (x + width).
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Get the bottom edge (y + height).
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Get the center X coordinate.
    pub fn center_x(&self) -> f64 {
        self.x + self.width / 2.0
    }

    /// Get the center Y coordinate.
    pub fn center_y(&self) -> f64 {
        self.y + self.height / 2.0
    }

    /// Shrink these bounds by per-edge insets.
    ///
    /// Width and height are clamped at zero so oversized insets produce an
    /// empty region rather than a negative one.
    pub fn inset_by(&self, inset: &Insets) -> Bounds {
        Bounds {
            x: self.x + inset.left,
            y: self.y + inset.top,
            width: (self.width - inset.horizontal()).max(0.0),
            height: (self.height - inset.vertical()).max(0.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges() {
        let bounds = Bounds::new(10.0, 20.0, 100.0, 50.0);
        assert_eq!(bounds.right(), 110.0);
        assert_eq!(bounds.bottom(), 70.0);
        assert_eq!(bounds.center_x(), 60.0);
        assert_eq!(bounds.center_y(), 45.0);
    }

    #[test]
    fn test_vec_accessors() {
        let bounds = Bounds::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(bounds.position(), Vec2::new(1.0, 2.0));
        assert_eq!(bounds.size(), Vec2::new(3.0, 4.0));
    }

    #[test]
    fn test_inset_by() {
        let bounds = Bounds::new(0.0, 0.0, 100.0, 100.0);
        let region = bounds.inset_by(&Insets::new(10.0, 5.0, 20.0, 15.0));
        assert_eq!(region, Bounds::new(10.0, 5.0, 70.0, 80.0));
    }

    #[test]
    fn test_inset_by_clamps_to_empty() {
        let bounds = Bounds::new(0.0, 0.0, 10.0, 10.0);
        let region = bounds.inset_by(&Insets::uniform(20.0));
        assert_eq!(region.width, 0.0);
        assert_eq!(region.height, 0.0);
    }
}
