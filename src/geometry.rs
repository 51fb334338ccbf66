//! Axis-aligned rectangles in screen space.
//!
//! The y axis points up: `y = 0` is the bottom of the screen and a rect's
//! `y` is its bottom edge.

/// An axis-aligned rectangle. Width and height are never negative.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        debug_assert!(w >= 0.0 && h >= 0.0, "negative rect size {w}x{h}");
        Self { x, y, w, h }
    }

    /// Right edge.
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    /// Top edge.
    pub fn top(&self) -> f32 {
        self.y + self.h
    }

    pub fn center_x(&self) -> f32 {
        self.x + self.w / 2.0
    }

    /// Shift in place by a velocity.
    pub fn translate(&mut self, v: Vec2) {
        self.x += v.dx;
        self.y += v.dy;
    }

    /// Same size, new bottom-left corner.
    pub fn moved_to(&self, x: f32, y: f32) -> Self {
        Self { x, y, ..*self }
    }

    /// Open-interval overlap test: rects that only share an edge do not
    /// intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.top()
            && self.top() > other.y
    }
}

/// Free-function form of [`Rect::intersects`].
pub fn intersects(a: &Rect, b: &Rect) -> bool {
    a.intersects(b)
}

/// Per-tick displacement.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Vec2 {
    pub dx: f32,
    pub dy: f32,
}

impl Vec2 {
    pub fn new(dx: f32, dy: f32) -> Self {
        Self { dx, dy }
    }
}
