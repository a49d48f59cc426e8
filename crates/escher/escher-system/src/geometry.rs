//! Coordinate helpers shared by the layout passes.
//!
//! Layout arithmetic is done on signed coordinates so intermediate values may
//! go negative when space runs out; lengths are converted back with
//! [`length`], which clamps at zero. All operations saturate.

use embedded_graphics::prelude::{Point, Size};
use embedded_graphics::primitives::Rectangle;

/// Convert a pixel length to a signed coordinate.
pub fn coord(length: u32) -> i32 {
    i32::try_from(length).unwrap_or(i32::MAX)
}

/// Convert a signed coordinate difference to a length, clamping at zero.
pub fn length(coord: i32) -> u32 {
    u32::try_from(coord).unwrap_or(0)
}

/// `length + margin`, or zero when there is nothing to pad.
///
/// An absent or empty view reserves no space, not even its margin.
///
/// ```
/// use escher_system::geometry::with_margin;
///
/// assert_eq!(with_margin(0, 10), 0);
/// assert_eq!(with_margin(20, 10), 30);
/// ```
pub fn with_margin(length: i32, margin: i32) -> i32 {
    if length == 0 {
        0
    } else {
        length.saturating_add(margin)
    }
}

/// Build a frame, clamping negative extents to zero.
pub fn frame(x: i32, y: i32, width: i32, height: i32) -> Rectangle {
    Rectangle::new(Point::new(x, y), Size::new(length(width), length(height)))
}

/// The cell's bounds minus `thickness` on every edge.
///
/// Bounds thinner than two borders give an empty rectangle anchored at the
/// border.
///
/// ```
/// use escher_system::geometry::inner_rect;
/// use embedded_graphics::prelude::{Point, Size};
///
/// let inner = inner_rect(Size::new(100, 30), 1);
/// assert_eq!(inner.top_left, Point::new(1, 1));
/// assert_eq!(inner.size, Size::new(98, 28));
///
/// assert_eq!(inner_rect(Size::new(1, 1), 1).size, Size::zero());
/// ```
pub fn inner_rect(bounds: Size, thickness: u32) -> Rectangle {
    let double = thickness.saturating_mul(2);
    Rectangle::new(
        Point::new(coord(thickness), coord(thickness)),
        Size::new(
            bounds.width.saturating_sub(double),
            bounds.height.saturating_sub(double),
        ),
    )
}

/// Clip `frame` so it lies inside `inner`.
///
/// The origin is clamped into `inner` first, then the size is cut at the far
/// edges. A frame already inside `inner` is returned unchanged.
pub fn confine(frame: Rectangle, inner: Rectangle) -> Rectangle {
    let left = inner.top_left.x;
    let top = inner.top_left.y;
    let right = left.saturating_add(coord(inner.size.width));
    let bottom = top.saturating_add(coord(inner.size.height));

    let x = frame.top_left.x.clamp(left, right);
    let y = frame.top_left.y.clamp(top, bottom);
    let width = frame.size.width.min(length(right.saturating_sub(x)));
    let height = frame.size.height.min(length(bottom.saturating_sub(y)));

    Rectangle::new(Point::new(x, y), Size::new(width, height))
}

/// Exclusive right edge of `rect`.
pub fn right(rect: &Rectangle) -> i32 {
    rect.top_left.x.saturating_add(coord(rect.size.width))
}

/// Exclusive bottom edge of `rect`.
pub fn bottom(rect: &Rectangle) -> i32 {
    rect.top_left.y.saturating_add(coord(rect.size.height))
}

/// Whether `rect` lies entirely inside `outer` (edges included).
pub fn contains_rect(outer: &Rectangle, rect: &Rectangle) -> bool {
    rect.top_left.x >= outer.top_left.x
        && rect.top_left.y >= outer.top_left.y
        && right(rect) <= right(outer)
        && bottom(rect) <= bottom(outer)
}

/// Whether two rectangles share at least one pixel.
///
/// An empty rectangle covers no pixel and overlaps nothing.
pub fn overlaps(a: &Rectangle, b: &Rectangle) -> bool {
    if a.is_zero_sized() || b.is_zero_sized() {
        return false;
    }
    a.top_left.x < right(b)
        && b.top_left.x < right(a)
        && a.top_left.y < bottom(b)
        && b.top_left.y < bottom(a)
}
