//! Axis-aligned rectangles in logical playfield units.
//!
//! Edges follow the half-open convention: `right()` and `bottom()` are one
//! past the last covered unit, so two rectangles that merely share an edge
//! do not overlap.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Rect { x, y, width, height }
    }

    /// Rectangle of the given size whose centre is `(cx, cy)`.
    pub fn centered_at(cx: i32, cy: i32, width: i32, height: i32) -> Self {
        Rect::new(cx - width / 2, cy - height / 2, width, height)
    }

    pub fn left(&self) -> i32 {
        self.x
    }

    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    pub fn top(&self) -> i32 {
        self.y
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    pub fn center(&self) -> (i32, i32) {
        (self.x + self.width / 2, self.y + self.height / 2)
    }

    pub fn translated(&self, dx: i32, dy: i32) -> Rect {
        Rect { x: self.x + dx, y: self.y + dy, ..*self }
    }

    /// Non-empty intersection test.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }

    /// Pull the rectangle back inside `[0, width] x [0, height]`.
    /// Left/top are corrected before right/bottom.
    pub fn clamped_to(&self, width: i32, height: i32) -> Rect {
        let mut r = *self;
        if r.left() < 0 {
            r.x = 0;
        }
        if r.right() > width {
            r.x = width - r.width;
        }
        if r.top() < 0 {
            r.y = 0;
        }
        if r.bottom() > height {
            r.y = height - r.height;
        }
        r
    }
}

/// Width and height of a sprite in logical units.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub fn new(width: i32, height: i32) -> Self {
        Size { width, height }
    }
}
