//! Background and border painting for bordered cells.
//!
//! A bordered cell paints its inner rect (bounds minus the separator on every
//! edge) with a background color, then draws the separator bands around it.
//! The two never overlap, so each pixel is written once per paint pass.
//!
//! # Example
//!
//! ```
//! use escher_system::render::*;
//! use escher_system::palette::Palette;
//! use embedded_graphics::mock_display::MockDisplay;
//! use embedded_graphics::pixelcolor::Rgb565;
//! use embedded_graphics::prelude::*;
//! use embedded_graphics::primitives::Rectangle;
//!
//! let mut display = MockDisplay::<Rgb565>::new();
//! let bounds = Rectangle::new(Point::zero(), Size::new(20, 10));
//!
//! draw_inner_rect(&mut display, bounds, 1, Palette::LIST_CELL_BACKGROUND)?;
//! draw_border_of_rect(&mut display, bounds, 1, Palette::LIST_CELL_BORDER)?;
//!
//! assert_eq!(display.affected_area(), bounds);
//! # Ok::<(), core::convert::Infallible>(())
//! ```

use embedded_graphics::{
    pixelcolor::Rgb565,
    prelude::*,
    primitives::{PrimitiveStyle, Rectangle},
};

use crate::geometry::{bottom, coord, right};

/// Fill `rect` with a solid color.
///
/// # Errors
///
/// Propagates the draw target's error.
pub fn render_background<D: DrawTarget<Color = Rgb565>>(
    rect: Rectangle,
    color: Rgb565,
    display: &mut D,
) -> Result<(), D::Error> {
    if rect.size.width == 0 || rect.size.height == 0 {
        return Ok(());
    }
    let style = PrimitiveStyle::with_fill(color);
    rect.into_styled(style).draw(display)?;
    Ok(())
}

/// Fill `bounds` minus `thickness` on every edge.
///
/// # Errors
///
/// Propagates the draw target's error.
pub fn draw_inner_rect<D: DrawTarget<Color = Rgb565>>(
    display: &mut D,
    bounds: Rectangle,
    thickness: u32,
    color: Rgb565,
) -> Result<(), D::Error> {
    let double = thickness.saturating_mul(2);
    let inner = Rectangle::new(
        Point::new(
            bounds.top_left.x.saturating_add(coord(thickness)),
            bounds.top_left.y.saturating_add(coord(thickness)),
        ),
        Size::new(
            bounds.size.width.saturating_sub(double),
            bounds.size.height.saturating_sub(double),
        ),
    );
    render_background(inner, color, display)
}

/// Draw a `thickness` wide band along every edge of `bounds`.
///
/// Top and bottom bands span the full width, side bands fill the height in
/// between. Bounds thinner than two bands are covered entirely.
///
/// # Errors
///
/// Propagates the draw target's error.
pub fn draw_border_of_rect<D: DrawTarget<Color = Rgb565>>(
    display: &mut D,
    bounds: Rectangle,
    thickness: u32,
    color: Rgb565,
) -> Result<(), D::Error> {
    let Size { width, height } = bounds.size;
    let top_band = thickness.min(height);
    let bottom_band = thickness.min(height.saturating_sub(top_band));
    let side_height = height.saturating_sub(top_band).saturating_sub(bottom_band);
    let left_band = thickness.min(width);
    let right_band = thickness.min(width.saturating_sub(left_band));

    let x = bounds.top_left.x;
    let y = bounds.top_left.y;
    let side_y = y.saturating_add(coord(top_band));

    let bands = [
        Rectangle::new(Point::new(x, y), Size::new(width, top_band)),
        Rectangle::new(
            Point::new(x, bottom(&bounds).saturating_sub(coord(bottom_band))),
            Size::new(width, bottom_band),
        ),
        Rectangle::new(Point::new(x, side_y), Size::new(left_band, side_height)),
        Rectangle::new(
            Point::new(right(&bounds).saturating_sub(coord(right_band)), side_y),
            Size::new(right_band, side_height),
        ),
    ];

    for band in bands {
        render_background(band, color, display)?;
    }
    Ok(())
}
