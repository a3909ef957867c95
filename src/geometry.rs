/// Axis-aligned bounding boxes in playfield coordinates.
///
/// The playfield origin is the top-left corner; `y` grows downward, so a
/// box's `top` is numerically smaller than its `bottom`.

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Rect {
    /// Build a box from its top-left corner and size.
    pub fn from_origin(x: f64, y: f64, width: f64, height: f64) -> Self {
        Rect {
            left: x,
            top: y,
            right: x + width,
            bottom: y + height,
        }
    }

    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    pub fn center_x(&self) -> f64 {
        (self.left + self.right) / 2.0
    }

    pub fn overlaps(&self, other: &Rect) -> bool {
        overlaps(self, other)
    }
}

/// Separating-axis test.  Two boxes are apart when one lies entirely on
/// one side of the other on either axis; a shared edge counts as apart, so
/// only a strictly positive intersection area is an overlap.
pub fn overlaps(a: &Rect, b: &Rect) -> bool {
    !(a.top >= b.bottom || a.bottom <= b.top || a.right <= b.left || a.left >= b.right)
}
