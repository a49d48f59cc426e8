//! Disclosure chevron accessory

use embedded_graphics::{
    pixelcolor::Rgb565,
    prelude::*,
    primitives::{Polyline, PrimitiveStyle, Rectangle},
};
use escher_system::palette::Palette;
use escher_system::view::{View, ViewFrame};

/// Bounding box of the chevron glyph.
pub const CHEVRON_SIZE: Size = Size::new(5, 9);

/// Right-pointing arrow shown on cells that open a sub-menu.
///
/// Always wants [`CHEVRON_SIZE`]; the glyph is centered in whatever frame it
/// gets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChevronView {
    color: Rgb565,
    frame: ViewFrame,
}

impl ChevronView {
    /// Chevron in the secondary text color.
    pub const fn new() -> Self {
        Self {
            color: Palette::CHEVRON,
            frame: ViewFrame::new(),
        }
    }

    /// Set glyph color
    #[must_use]
    pub const fn color(mut self, color: Rgb565) -> Self {
        self.color = color;
        self
    }

    fn points(&self) -> [Point; 3] {
        let c = self.frame.rect().center();
        [
            Point::new(c.x.saturating_sub(2), c.y.saturating_sub(4)),
            Point::new(c.x.saturating_add(2), c.y),
            Point::new(c.x.saturating_sub(2), c.y.saturating_add(4)),
        ]
    }
}

impl Default for ChevronView {
    fn default() -> Self {
        Self::new()
    }
}

impl View for ChevronView {
    fn minimal_size_for_optimal_display(&self) -> Size {
        CHEVRON_SIZE
    }

    fn set_frame(&mut self, frame: Rectangle, force: bool) {
        if self.frame.assign(frame, force) {
            self.frame.mark_laid_out();
        }
    }

    fn frame(&self) -> Rectangle {
        self.frame.rect()
    }

    fn draw<D: DrawTarget<Color = Rgb565>>(&self, target: &mut D) -> Result<(), D::Error> {
        let frame = self.frame.rect();
        if frame.size.width == 0 || frame.size.height == 0 {
            return Ok(());
        }
        let points = self.points();
        Polyline::new(&points)
            .into_styled(PrimitiveStyle::with_stroke(self.color, 1))
            .draw(&mut target.clipped(&frame))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::mock_display::MockDisplay;

    #[test]
    fn test_minimal_size_is_fixed() {
        let mut chevron = ChevronView::new();
        assert_eq!(chevron.minimal_size_for_optimal_display(), CHEVRON_SIZE);

        chevron.set_frame(Rectangle::new(Point::zero(), Size::new(40, 40)), false);
        assert_eq!(chevron.minimal_size_for_optimal_display(), CHEVRON_SIZE);
    }

    #[test]
    fn test_draw_centered() {
        let mut chevron = ChevronView::new();
        chevron.set_frame(Rectangle::new(Point::new(10, 10), Size::new(21, 21)), false);

        let mut display = MockDisplay::<Rgb565>::new();
        display.set_allow_overdraw(true);
        chevron.draw(&mut display).unwrap();

        // Center is (20, 20): tip at (22, 20), tails at x = 18.
        assert_eq!(
            display.affected_area(),
            Rectangle::new(Point::new(18, 16), CHEVRON_SIZE)
        );
        assert_eq!(display.get_pixel(Point::new(22, 20)), Some(Palette::CHEVRON));
        assert_eq!(display.get_pixel(Point::new(18, 16)), Some(Palette::CHEVRON));
        assert_eq!(display.get_pixel(Point::new(18, 20)), None);
    }

    #[test]
    fn test_draw_clipped_to_frame() {
        let mut chevron = ChevronView::new().color(Rgb565::RED);
        let frame = Rectangle::new(Point::new(0, 0), Size::new(5, 4));
        chevron.set_frame(frame, false);

        let mut display = MockDisplay::<Rgb565>::new();
        display.set_allow_overdraw(true);
        chevron.draw(&mut display).unwrap();

        let area = display.affected_area();
        assert!(frame.contains(area.top_left));
        assert!(frame.contains(area.bottom_right().unwrap()));
    }
}
