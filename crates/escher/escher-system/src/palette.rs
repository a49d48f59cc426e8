//! Fixed colors of the list cells.
//!
//! The panel is RGB565: red and blue channels take 0..=31, green 0..=63.

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};

/// Palette constants.
pub struct Palette;

impl Palette {
    /// Text and glyph color.
    pub const TEXT: Rgb565 = Rgb565::BLACK;
    /// Secondary text (values, hints).
    pub const TEXT_SECONDARY: Rgb565 = Rgb565::new(14, 29, 14);
    /// Cell background.
    pub const LIST_CELL_BACKGROUND: Rgb565 = Rgb565::WHITE;
    /// Cell background while highlighted.
    pub const LIST_CELL_BACKGROUND_SELECTED: Rgb565 = Rgb565::new(26, 54, 29);
    /// Separator around each cell.
    pub const LIST_CELL_BORDER: Rgb565 = Rgb565::new(28, 57, 28);
    /// Even-row background of striped tables.
    pub const WALL_SCREEN: Rgb565 = Rgb565::new(30, 61, 30);
    /// Highlighted odd row.
    pub const SELECT: Rgb565 = Rgb565::new(24, 52, 28);
    /// Highlighted even row.
    pub const SELECT_DARK: Rgb565 = Rgb565::new(22, 48, 26);
    /// Switch track when on.
    pub const SWITCH_ON: Rgb565 = Rgb565::new(3, 38, 24);
    /// Switch track when off.
    pub const SWITCH_OFF: Rgb565 = Rgb565::new(22, 44, 22);
    /// Disclosure chevron.
    pub const CHEVRON: Rgb565 = Rgb565::new(16, 33, 16);
}

/// Background of a plain list cell.
pub const fn cell_background(highlighted: bool) -> Rgb565 {
    if highlighted {
        Palette::LIST_CELL_BACKGROUND_SELECTED
    } else {
        Palette::LIST_CELL_BACKGROUND
    }
}
