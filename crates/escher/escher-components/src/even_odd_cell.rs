//! Striped cells for tables with alternating row colors

use embedded_graphics::{pixelcolor::Rgb565, prelude::*, primitives::Rectangle};
use escher_system::cell_layout::CellLayout;
use escher_system::geometry::inner_rect;
use escher_system::palette::Palette;
use escher_system::view::{Empty, View};

use crate::table_cell::TableCell;
use crate::text_view::{TextSize, TextView};

/// Background of a striped row.
pub const fn even_odd_background(even: bool, highlighted: bool) -> Rgb565 {
    match (even, highlighted) {
        (true, false) => Palette::WALL_SCREEN,
        (false, false) => Palette::LIST_CELL_BACKGROUND,
        (true, true) => Palette::SELECT_DARK,
        (false, true) => Palette::SELECT,
    }
}

/// A [`TableCell`] whose background follows row parity as well as
/// highlight.
#[derive(Debug, Clone, PartialEq)]
pub struct EvenOddCell<L = Empty, A = Empty, S = Empty> {
    cell: TableCell<L, A, S>,
    even: bool,
}

impl<L: View, A: View, S: View> EvenOddCell<L, A, S> {
    /// Wrap `cell`; rows start odd.
    pub const fn new(cell: TableCell<L, A, S>) -> Self {
        Self { cell, even: false }
    }

    /// The wrapped cell.
    pub const fn cell(&self) -> &TableCell<L, A, S> {
        &self.cell
    }

    /// Mutable access to the wrapped cell.
    pub fn cell_mut(&mut self) -> &mut TableCell<L, A, S> {
        &mut self.cell
    }

    /// Whether this is an even row.
    pub const fn is_even(&self) -> bool {
        self.even
    }

    /// Set the row parity.
    pub fn set_even(&mut self, even: bool) {
        self.even = even;
    }

    /// Select the highlighted variant of the row color.
    pub fn set_highlighted(&mut self, highlighted: bool) {
        self.cell.set_highlighted(highlighted);
    }

    /// Whether the row is highlighted.
    pub const fn is_highlighted(&self) -> bool {
        self.cell.is_highlighted()
    }

    /// Background for the current parity and highlight.
    pub const fn background_color(&self) -> Rgb565 {
        even_odd_background(self.even, self.cell.is_highlighted())
    }

    /// Set the bounds; see [`TableCell::set_frame`].
    pub fn set_frame(&mut self, frame: Rectangle, force: bool) {
        self.cell.set_frame(frame, force);
    }

    /// Lay out the wrapped cell's children.
    pub fn layout_subviews(&mut self, force: bool) {
        self.cell.layout_subviews(force);
    }

    /// Paint the striped background and border.
    ///
    /// # Errors
    ///
    /// Propagates the draw target's error.
    pub fn draw_rect<D: DrawTarget<Color = Rgb565>>(&self, target: &mut D) -> Result<(), D::Error> {
        self.cell.draw_rect_with(target, self.background_color())
    }

    /// Paint the row, then its children.
    ///
    /// # Errors
    ///
    /// Propagates the draw target's error.
    pub fn draw<D: DrawTarget<Color = Rgb565>>(&self, target: &mut D) -> Result<(), D::Error> {
        self.draw_rect(target)?;
        self.cell.draw_subviews(target)
    }
}

impl Default for EvenOddCell {
    fn default() -> Self {
        Self::new(TableCell::new(CellLayout::Horizontal))
    }
}

/// Striped cell showing a single line of text across its full width.
///
/// The text view fills the cell minus the border and carries the row
/// background itself, so [`reload_cell`](Self::reload_cell) must run after
/// parity or highlight changes. The setters here do it.
#[derive(Debug, Clone, PartialEq)]
pub struct EvenOddTextCell {
    base: EvenOddCell,
    text_view: TextView,
}

impl EvenOddTextCell {
    /// Empty odd row with small text.
    pub fn new() -> Self {
        let mut cell = Self {
            base: EvenOddCell::default(),
            text_view: TextView::new("").size(TextSize::Small),
        };
        cell.reload_cell();
        cell
    }

    /// Set the text and its color
    pub fn set_text(&mut self, text: &'static str, color: Rgb565) {
        self.text_view.set_text(text);
        self.text_view.set_text_color(color);
    }

    /// The text view.
    pub fn text_view(&self) -> &TextView {
        &self.text_view
    }

    /// Re-apply the row background to the text view.
    pub fn reload_cell(&mut self) {
        self.text_view
            .set_background_color(Some(self.base.background_color()));
    }

    /// Set the row parity and reload.
    pub fn set_even(&mut self, even: bool) {
        self.base.set_even(even);
        self.reload_cell();
    }

    /// Whether this is an even row.
    pub const fn is_even(&self) -> bool {
        self.base.is_even()
    }

    /// Highlight the row and reload.
    pub fn set_highlighted(&mut self, highlighted: bool) {
        self.base.set_highlighted(highlighted);
        self.reload_cell();
    }

    /// Whether the row is highlighted.
    pub const fn is_highlighted(&self) -> bool {
        self.base.is_highlighted()
    }

    /// Cell bounds.
    pub const fn frame(&self) -> Rectangle {
        self.base.cell().frame()
    }

    /// Set the bounds and lay out the text view when they changed or `force`
    /// is set.
    pub fn set_frame(&mut self, frame: Rectangle, force: bool) {
        let changed = frame != self.frame() || force;
        self.base.set_frame(frame, force);
        if changed {
            self.layout_subviews(force);
        }
    }

    /// Give the text view the whole cell minus the border.
    pub fn layout_subviews(&mut self, force: bool) {
        let separator = self.base.cell().metrics().separator_thickness;
        let inner = inner_rect(self.frame().size, separator);
        self.text_view.set_frame(inner, force);
    }

    /// Always one: the text view.
    pub const fn number_of_subviews(&self) -> usize {
        1
    }

    /// The text view at index 0, `None` otherwise.
    pub fn subview_at_index(&self, index: usize) -> Option<&TextView> {
        (index == 0).then_some(&self.text_view)
    }

    /// Paint the row, then its children.
    ///
    /// # Errors
    ///
    /// Propagates the draw target's error.
    pub fn draw<D: DrawTarget<Color = Rgb565>>(&self, target: &mut D) -> Result<(), D::Error> {
        self.base.draw_rect(target)?;
        let frame = self.text_view.frame();
        if frame.size.width == 0 || frame.size.height == 0 {
            return Ok(());
        }
        let mut local = target.translated(self.frame().top_left);
        self.text_view.draw(&mut local.clipped(&frame))
    }
}

impl Default for EvenOddTextCell {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chevron_view::ChevronView;
    use embedded_graphics::mock_display::MockDisplay;

    fn bounds(width: u32, height: u32) -> Rectangle {
        Rectangle::new(Point::zero(), Size::new(width, height))
    }

    #[test]
    fn test_four_backgrounds_are_distinct() {
        let colors = [
            even_odd_background(true, false),
            even_odd_background(false, false),
            even_odd_background(true, true),
            even_odd_background(false, true),
        ];
        for (i, a) in colors.iter().enumerate() {
            for b in colors.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_even_odd_cell_background() {
        let mut cell = EvenOddCell::new(
            TableCell::new(CellLayout::Horizontal).with_accessory(ChevronView::new()),
        );
        assert!(!cell.is_even());
        assert_eq!(cell.background_color(), Palette::LIST_CELL_BACKGROUND);

        cell.set_even(true);
        assert_eq!(cell.background_color(), Palette::WALL_SCREEN);

        cell.set_highlighted(true);
        assert!(cell.is_highlighted());
        assert_eq!(cell.background_color(), Palette::SELECT_DARK);
    }

    #[test]
    fn test_even_odd_cell_draw_rect() {
        let mut cell = EvenOddCell::default();
        cell.set_even(true);
        cell.set_frame(bounds(30, 10), false);

        let mut display = MockDisplay::<Rgb565>::new();
        cell.draw_rect(&mut display).unwrap();

        assert_eq!(display.get_pixel(Point::new(15, 5)), Some(Palette::WALL_SCREEN));
        assert_eq!(display.get_pixel(Point::new(0, 5)), Some(Palette::LIST_CELL_BORDER));
    }

    #[test]
    fn test_even_odd_cell_lays_out_children() {
        let mut cell = EvenOddCell::new(
            TableCell::new(CellLayout::Horizontal).with_accessory(ChevronView::new()),
        );
        cell.set_frame(bounds(60, 20), false);

        // 60 - 1 - (5 + 10) = 44
        let chevron = cell.cell().accessory_view().unwrap();
        assert_eq!(
            chevron.frame(),
            Rectangle::new(Point::new(44, 1), Size::new(5, 18))
        );
    }

    #[test]
    fn test_text_cell_fills_inner_rect() {
        let mut cell = EvenOddTextCell::new();
        cell.set_text("3.14", Palette::TEXT);
        cell.set_frame(bounds(50, 16), false);

        assert_eq!(cell.number_of_subviews(), 1);
        assert!(cell.subview_at_index(1).is_none());
        let text = cell.subview_at_index(0).unwrap();
        assert_eq!(text.frame(), Rectangle::new(Point::new(1, 1), Size::new(48, 14)));
        assert_eq!(text.text(), "3.14");
    }

    #[test]
    fn test_text_cell_reload_follows_parity_and_highlight() {
        let mut cell = EvenOddTextCell::new();
        assert_eq!(
            cell.text_view().background_color(),
            Some(Palette::LIST_CELL_BACKGROUND)
        );

        cell.set_even(true);
        assert_eq!(cell.text_view().background_color(), Some(Palette::WALL_SCREEN));

        cell.set_highlighted(true);
        assert_eq!(cell.text_view().background_color(), Some(Palette::SELECT_DARK));

        cell.set_even(false);
        assert_eq!(cell.text_view().background_color(), Some(Palette::SELECT));
    }

    #[test]
    fn test_text_cell_draw() {
        let mut cell = EvenOddTextCell::new();
        cell.set_text("Hi", Rgb565::BLACK);
        cell.set_even(true);
        cell.set_frame(Rectangle::new(Point::new(0, 10), Size::new(40, 14)), false);

        let mut display = MockDisplay::<Rgb565>::new();
        display.set_allow_overdraw(true);
        cell.draw(&mut display).unwrap();

        assert_eq!(
            display.affected_area(),
            Rectangle::new(Point::new(0, 10), Size::new(40, 14))
        );
        assert_eq!(display.get_pixel(Point::new(0, 10)), Some(Palette::LIST_CELL_BORDER));
        assert_eq!(display.get_pixel(Point::new(35, 17)), Some(Palette::WALL_SCREEN));
    }

    #[test]
    fn test_text_cell_same_frame_not_relaid_out() {
        let mut cell = EvenOddTextCell::new();
        cell.set_frame(bounds(50, 16), false);
        let first = cell.text_view().frame();
        cell.set_frame(bounds(50, 16), false);
        assert_eq!(cell.text_view().frame(), first);
    }
}
