//! Axis-aligned bounding boxes and overlap tests
//!
//! Everything on the field is a box in grid units. Overlap is strict:
//! boxes that only share an edge or a corner do not touch.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned box spanning `min` (top-left) to `max` (bottom-right)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    /// Box at `pos` with extent `size`
    #[inline]
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self {
            min: pos,
            max: pos + size,
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.min.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.max.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.min.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.max.y
    }

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    /// Open-interval overlap on the X axis
    #[inline]
    pub fn overlaps_x(&self, other: &Aabb) -> bool {
        self.left() < other.right() && self.right() > other.left()
    }

    /// Open-interval overlap on the Y axis
    #[inline]
    pub fn overlaps_y(&self, other: &Aabb) -> bool {
        self.top() < other.bottom() && self.bottom() > other.top()
    }

    /// Identical boxes always intersect (even degenerate ones); otherwise
    /// both axes must strictly overlap.
    pub fn intersects(&self, other: &Aabb) -> bool {
        self == other || (self.overlaps_x(other) && self.overlaps_y(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_at(x: f32, y: f32) -> Aabb {
        Aabb::new(Vec2::new(x, y), Vec2::ONE)
    }

    #[test]
    fn test_shared_edge_does_not_intersect() {
        assert!(!unit_at(0.0, 0.0).intersects(&unit_at(1.0, 0.0)));
        assert!(!unit_at(0.0, 0.0).intersects(&unit_at(0.0, 1.0)));
    }

    #[test]
    fn test_shared_corner_does_not_intersect() {
        assert!(!unit_at(0.0, 0.0).intersects(&unit_at(1.0, 1.0)));
    }

    #[test]
    fn test_partial_overlap_intersects() {
        let wide = Aabb::new(Vec2::ZERO, Vec2::new(1.5, 1.0));
        assert!(wide.intersects(&unit_at(1.0, 0.0)));
        assert!(unit_at(1.0, 0.0).intersects(&wide));
    }

    #[test]
    fn test_containment_intersects() {
        let big = Aabb::new(Vec2::ZERO, Vec2::splat(4.0));
        let small = Aabb::new(Vec2::splat(1.0), Vec2::splat(0.5));
        assert!(big.intersects(&small));
        assert!(small.intersects(&big));
    }

    #[test]
    fn test_equal_degenerate_boxes_intersect() {
        let point = Aabb::new(Vec2::new(2.0, 3.0), Vec2::ZERO);
        assert!(point.intersects(&point));
    }

    #[test]
    fn test_far_apart_misses() {
        assert!(!unit_at(0.0, 0.0).intersects(&unit_at(5.0, 5.0)));
    }
}
