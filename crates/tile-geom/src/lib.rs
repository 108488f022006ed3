//! Geometry primitives shared across zonetile.
//!
//! [`Point`] and [`Rect`] are plain `f64` values in whatever space the caller
//! is working in. The [`space`] module adds the typed internal coordinate
//! space ([`InternalPoint`], [`InternalRect`]) and the [`Screen`] description
//! used to move between the three axis conventions of the host:
//!
//! - bottom-left desktop: native screen and pointer-event coordinates, y up
//! - global top-left: accessibility coordinates, origin at the primary screen's
//!   top-left, y down
//! - internal top-left: origin at one screen's top-left, y down
//!
//! Nothing in this crate panics or returns errors; degenerate input produces
//! degenerate output (`None` intersections, zero areas).

use serde::{Deserialize, Serialize};

mod space;

#[cfg(test)]
mod property_tests;

pub use space::{InternalPoint, InternalRect, Screen};

/// Tolerance used when comparing converted coordinates.
pub const EPSILON: f64 = 1e-6;

/// A 2D point.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl Point {
    /// Construct a point.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    #[inline]
    pub fn distance(&self, other: &Self) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// `a` and `b` differ by at most `eps`.
#[inline]
pub fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
    (a - b).abs() <= eps
}

/// An axis-aligned rectangle described by its origin corner and extent.
///
/// Which corner `(x, y)` names depends on the space: the lower-left corner in
/// bottom-left desktop space, the upper-left corner in both top-left spaces.
/// The `min_*`/`max_*` accessors are space-agnostic.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Origin x.
    pub x: f64,
    /// Origin y.
    pub y: f64,
    /// Width.
    pub w: f64,
    /// Height.
    pub h: f64,
}

impl Rect {
    /// Construct a rectangle.
    #[inline]
    pub const fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    /// Left edge.
    #[inline]
    pub fn min_x(&self) -> f64 {
        self.x
    }
    /// Right edge.
    #[inline]
    pub fn max_x(&self) -> f64 {
        self.x + self.w
    }
    /// Smaller y edge.
    #[inline]
    pub fn min_y(&self) -> f64 {
        self.y
    }
    /// Larger y edge.
    #[inline]
    pub fn max_y(&self) -> f64 {
        self.y + self.h
    }
    /// Center x.
    #[inline]
    pub fn cx(&self) -> f64 {
        self.x + self.w / 2.0
    }
    /// Center y.
    #[inline]
    pub fn cy(&self) -> f64 {
        self.y + self.h / 2.0
    }

    /// Center point.
    #[inline]
    pub fn center(&self) -> Point {
        Point::new(self.cx(), self.cy())
    }

    /// Area; zero for degenerate or inverted rectangles.
    #[inline]
    pub fn area(&self) -> f64 {
        self.w.max(0.0) * self.h.max(0.0)
    }

    /// True when both extents are strictly positive.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.w > 0.0 && self.h > 0.0
    }

    /// Inclusive containment: points on any of the four edges are contained.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.min_x() && p.x <= self.max_x() && p.y >= self.min_y() && p.y <= self.max_y()
    }

    /// Overlapping region with positive area, if any.
    pub fn intersection(&self, other: &Self) -> Option<Self> {
        let w = overlap_1d(self.min_x(), self.max_x(), other.min_x(), other.max_x());
        let h = overlap_1d(self.min_y(), self.max_y(), other.min_y(), other.max_y());
        if w <= 0.0 || h <= 0.0 {
            return None;
        }
        Some(Self::new(
            self.min_x().max(other.min_x()),
            self.min_y().max(other.min_y()),
            w,
            h,
        ))
    }

    /// True when the rectangles share a region of positive area. Touching
    /// edges do not count.
    #[inline]
    pub fn intersects(&self, other: &Self) -> bool {
        self.intersection(other).is_some()
    }

    /// Bounding rectangle covering both inputs.
    pub fn union(&self, other: &Self) -> Self {
        let min_x = self.min_x().min(other.min_x());
        let min_y = self.min_y().min(other.min_y());
        let max_x = self.max_x().max(other.max_x());
        let max_y = self.max_y().max(other.max_y());
        Self::new(min_x, min_y, max_x - min_x, max_y - min_y)
    }

    /// Component-wise comparison within `eps`.
    #[inline]
    pub fn approx_eq(&self, other: &Self, eps: f64) -> bool {
        approx_eq(self.x, other.x, eps)
            && approx_eq(self.y, other.y, eps)
            && approx_eq(self.w, other.w, eps)
            && approx_eq(self.h, other.h, eps)
    }
}

/// Length of the overlap between `[a1, a2]` and `[b1, b2]`, never negative.
#[inline]
pub fn overlap_1d(a1: f64, a2: f64, b1: f64, b2: f64) -> f64 {
    let l = a1.max(b1);
    let r = a2.min(b2);
    (r - l).max(0.0)
}

/// Bounding rectangle of an iterator of rectangles; `None` when empty.
pub fn union_all<I>(rects: I) -> Option<Rect>
where
    I: IntoIterator<Item = Rect>,
{
    rects.into_iter().reduce(|acc, r| acc.union(&r))
}
