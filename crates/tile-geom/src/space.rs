//! Typed internal coordinate space and conversions to and from host spaces.
//!
//! Internal coordinates are relative to a single screen's full frame, with
//! the origin at that screen's top-left corner and y growing downward. Every
//! conversion needs the [`Screen`] the value belongs to; mixing values from
//! different screens is the caller's responsibility to avoid.

use serde::{Deserialize, Serialize};

use crate::{Point, Rect};

/// One display as the host reports it.
///
/// `frame` and `visible_frame` are in bottom-left desktop coordinates (y up,
/// origin at the primary screen's lower-left). `primary_height` is the height
/// of the primary screen, which anchors the global top-left space.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Screen {
    /// Full screen frame.
    pub frame: Rect,
    /// Frame minus menu bar and dock.
    pub visible_frame: Rect,
    /// Height of the primary screen's frame.
    pub primary_height: f64,
}

impl Screen {
    /// Describe a screen.
    pub const fn new(frame: Rect, visible_frame: Rect, primary_height: f64) -> Self {
        Self {
            frame,
            visible_frame,
            primary_height,
        }
    }

    /// Describe the primary screen; its own height anchors the global space.
    pub const fn primary(frame: Rect, visible_frame: Rect) -> Self {
        Self::new(frame, visible_frame, frame.h)
    }

    /// Global top-left y of this screen's top edge.
    #[inline]
    pub fn global_top(&self) -> f64 {
        self.primary_height - self.frame.max_y()
    }

    /// The visible frame expressed in this screen's internal space. Zones are
    /// laid out inside this rectangle.
    pub fn work_area(&self) -> InternalRect {
        InternalRect::from_bottom_left(self.visible_frame, self)
    }

    /// Inclusive hit test for a bottom-left desktop point.
    #[inline]
    pub fn contains_desktop_point(&self, p: Point) -> bool {
        self.frame.contains(p)
    }

    /// Flip a bottom-left desktop point into global top-left space.
    #[inline]
    pub fn desktop_to_global(&self, p: Point) -> Point {
        Point::new(p.x, self.primary_height - p.y)
    }

    /// Flip a global top-left point into bottom-left desktop space.
    #[inline]
    pub fn global_to_desktop(&self, p: Point) -> Point {
        Point::new(p.x, self.primary_height - p.y)
    }
}

/// A point in a screen's internal top-left space.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct InternalPoint {
    /// Distance from the screen's left edge.
    pub x: f64,
    /// Distance below the screen's top edge.
    pub y: f64,
}

impl InternalPoint {
    /// Construct a point already in internal space.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Convert from bottom-left desktop coordinates.
    pub fn from_bottom_left(p: Point, screen: &Screen) -> Self {
        Self::new(p.x - screen.frame.x, screen.frame.max_y() - p.y)
    }

    /// Convert from global top-left (accessibility) coordinates.
    pub fn from_global_top_left(p: Point, screen: &Screen) -> Self {
        Self::new(p.x - screen.frame.x, p.y - screen.global_top())
    }

    /// Convert back to bottom-left desktop coordinates.
    pub fn to_bottom_left(self, screen: &Screen) -> Point {
        Point::new(self.x + screen.frame.x, screen.frame.max_y() - self.y)
    }

    /// Convert back to global top-left coordinates.
    pub fn to_global_top_left(self, screen: &Screen) -> Point {
        Point::new(self.x + screen.frame.x, self.y + screen.global_top())
    }

    /// Euclidean distance to `other`.
    #[inline]
    pub fn distance(&self, other: &Self) -> f64 {
        self.as_point().distance(&other.as_point())
    }

    /// The untyped point with the same coordinates.
    #[inline]
    pub const fn as_point(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// A rectangle in a screen's internal top-left space; `(x, y)` is the
/// upper-left corner.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct InternalRect {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Width.
    pub w: f64,
    /// Height.
    pub h: f64,
}

impl InternalRect {
    /// Construct a rectangle already in internal space.
    #[inline]
    pub const fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    /// Convert from a bottom-left desktop rectangle. The rectangle's top edge
    /// (`max_y` in desktop space) becomes the internal `y`.
    pub fn from_bottom_left(r: Rect, screen: &Screen) -> Self {
        Self::new(
            r.x - screen.frame.x,
            screen.frame.max_y() - r.max_y(),
            r.w,
            r.h,
        )
    }

    /// Convert from a global top-left rectangle.
    pub fn from_global_top_left(r: Rect, screen: &Screen) -> Self {
        Self::new(r.x - screen.frame.x, r.y - screen.global_top(), r.w, r.h)
    }

    /// Convert back to bottom-left desktop coordinates.
    pub fn to_bottom_left(self, screen: &Screen) -> Rect {
        Rect::new(
            self.x + screen.frame.x,
            screen.frame.max_y() - self.y - self.h,
            self.w,
            self.h,
        )
    }

    /// Convert back to global top-left coordinates; this is the space window
    /// frames are read and written in.
    pub fn to_global_top_left(self, screen: &Screen) -> Rect {
        Rect::new(
            self.x + screen.frame.x,
            self.y + screen.global_top(),
            self.w,
            self.h,
        )
    }

    /// The untyped rectangle with the same components.
    #[inline]
    pub const fn as_rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.w, self.h)
    }

    /// Retag an untyped rectangle as internal.
    #[inline]
    fn wrap(r: Rect) -> Self {
        Self::new(r.x, r.y, r.w, r.h)
    }

    /// Inclusive containment on all four edges.
    #[inline]
    pub fn contains(&self, p: InternalPoint) -> bool {
        self.as_rect().contains(p.as_point())
    }

    /// Center point.
    #[inline]
    pub fn center(&self) -> InternalPoint {
        let c = self.as_rect().center();
        InternalPoint::new(c.x, c.y)
    }

    /// Width times height.
    #[inline]
    pub fn area(&self) -> f64 {
        self.as_rect().area()
    }

    /// Overlapping region with positive area, if any.
    pub fn intersection(&self, other: &Self) -> Option<Self> {
        self.as_rect()
            .intersection(&other.as_rect())
            .map(Self::wrap)
    }

    /// Area of the overlap with `other`; zero when disjoint or touching.
    pub fn overlap_area(&self, other: &Self) -> f64 {
        self.intersection(other).map_or(0.0, |r| r.area())
    }

    /// Bounding rectangle covering both inputs.
    pub fn union(&self, other: &Self) -> Self {
        Self::wrap(self.as_rect().union(&other.as_rect()))
    }

    /// Component-wise comparison within `eps`.
    #[inline]
    pub fn approx_eq(&self, other: &Self, eps: f64) -> bool {
        self.as_rect().approx_eq(&other.as_rect(), eps)
    }
}
