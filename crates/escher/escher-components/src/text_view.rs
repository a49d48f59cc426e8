//! Single-line static text view

use embedded_graphics::{
    mono_font::{
        ascii::{FONT_10X20, FONT_6X10},
        MonoFont, MonoTextStyle,
    },
    pixelcolor::Rgb565,
    prelude::*,
    primitives::Rectangle,
    text::{Alignment, Baseline, Text, TextStyleBuilder},
};
use escher_system::geometry::right;
use escher_system::palette::Palette;
use escher_system::render::render_background;
use escher_system::view::{View, ViewFrame};

/// Text size variants
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TextSize {
    /// 6x10 font
    Small,
    /// 10x20 font
    #[default]
    Normal,
}

impl TextSize {
    /// Height of one line in pixels.
    pub const fn line_height(self) -> u32 {
        match self {
            TextSize::Small => 10,
            TextSize::Normal => 20,
        }
    }

    /// Advance of one glyph in pixels.
    pub const fn char_width(self) -> u32 {
        match self {
            TextSize::Small => 6,
            TextSize::Normal => 10,
        }
    }

    /// Monospace font backing this size.
    pub const fn font(self) -> &'static MonoFont<'static> {
        match self {
            TextSize::Small => &FONT_6X10,
            TextSize::Normal => &FONT_10X20,
        }
    }
}

/// Static text drawn on one line inside its frame.
///
/// Text is vertically centered and aligned horizontally per
/// [`alignment`](Self::alignment). Glyphs that do not fit are clipped at the
/// frame edges.
#[derive(Debug, Clone, PartialEq)]
pub struct TextView {
    text: &'static str,
    size: TextSize,
    color: Rgb565,
    background: Option<Rgb565>,
    alignment: Alignment,
    frame: ViewFrame,
}

impl TextView {
    /// Create a text view with the given text
    pub const fn new(text: &'static str) -> Self {
        Self {
            text,
            size: TextSize::Normal,
            color: Palette::TEXT,
            background: None,
            alignment: Alignment::Left,
            frame: ViewFrame::new(),
        }
    }

    /// Set text size
    #[must_use]
    pub const fn size(mut self, size: TextSize) -> Self {
        self.size = size;
        self
    }

    /// Set text color
    #[must_use]
    pub const fn color(mut self, color: Rgb565) -> Self {
        self.color = color;
        self
    }

    /// Fill the frame with `color` before drawing the text
    #[must_use]
    pub const fn background(mut self, color: Rgb565) -> Self {
        self.background = Some(color);
        self
    }

    /// Set horizontal alignment inside the frame
    #[must_use]
    pub const fn alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Current text.
    pub const fn text(&self) -> &'static str {
        self.text
    }

    /// Replace the text. The minimal size changes with it.
    pub fn set_text(&mut self, text: &'static str) {
        self.text = text;
    }

    /// Glyph color.
    pub const fn text_color(&self) -> Rgb565 {
        self.color
    }

    /// Change the glyph color.
    pub fn set_text_color(&mut self, color: Rgb565) {
        self.color = color;
    }

    /// Fill behind the text, if any.
    pub const fn background_color(&self) -> Option<Rgb565> {
        self.background
    }

    /// `None` leaves whatever is behind the view visible.
    pub fn set_background_color(&mut self, color: Option<Rgb565>) {
        self.background = color;
    }

    /// Font size in use.
    pub const fn text_size(&self) -> TextSize {
        self.size
    }

    /// Text anchor for the current alignment, vertically centered.
    fn anchor(&self, frame: &Rectangle) -> Point {
        let center = frame.center();
        let x = match self.alignment {
            Alignment::Left => frame.top_left.x,
            Alignment::Center => center.x,
            Alignment::Right => right(frame).saturating_sub(1),
        };
        Point::new(x, center.y)
    }
}

impl View for TextView {
    fn minimal_size_for_optimal_display(&self) -> Size {
        let chars = u32::try_from(self.text.chars().count()).unwrap_or(u32::MAX);
        Size::new(
            chars.saturating_mul(self.size.char_width()),
            self.size.line_height(),
        )
    }

    fn set_frame(&mut self, frame: Rectangle, force: bool) {
        if self.frame.assign(frame, force) {
            // Single-line text has no content to lay out.
            self.frame.mark_laid_out();
        }
    }

    fn frame(&self) -> Rectangle {
        self.frame.rect()
    }

    fn draw<D: DrawTarget<Color = Rgb565>>(&self, target: &mut D) -> Result<(), D::Error> {
        let frame = self.frame.rect();
        if let Some(background) = self.background {
            render_background(frame, background, target)?;
        }
        if self.text.is_empty() || frame.size.width == 0 || frame.size.height == 0 {
            return Ok(());
        }

        let character_style = MonoTextStyle::new(self.size.font(), self.color);
        let text_style = TextStyleBuilder::new()
            .alignment(self.alignment)
            .baseline(Baseline::Middle)
            .build();

        Text::with_text_style(self.text, self.anchor(&frame), character_style, text_style)
            .draw(&mut target.clipped(&frame))?;

        Ok(())
    }
}
