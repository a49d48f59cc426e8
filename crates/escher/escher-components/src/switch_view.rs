//! On/off toggle accessory

use embedded_graphics::{
    pixelcolor::Rgb565,
    prelude::*,
    primitives::{Circle, PrimitiveStyle, Rectangle, RoundedRectangle},
};
use escher_system::geometry::{coord, right};
use escher_system::palette::Palette;
use escher_system::view::{View, ViewFrame};

/// Size of the switch track.
pub const SWITCH_SIZE: Size = Size::new(24, 14);

const KNOB_INSET: u32 = 2;
const KNOB_DIAMETER: u32 = 10;

/// Toggle drawn as a rounded track with a sliding knob.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwitchView {
    on: bool,
    frame: ViewFrame,
}

impl SwitchView {
    /// Switch in the given state.
    pub const fn new(on: bool) -> Self {
        Self {
            on,
            frame: ViewFrame::new(),
        }
    }

    /// `true` when on.
    pub const fn state(&self) -> bool {
        self.on
    }

    /// Turn the switch on or off.
    pub fn set_state(&mut self, on: bool) {
        self.on = on;
    }

    /// Flip the state.
    pub fn toggle(&mut self) {
        self.on = !self.on;
    }

    /// Track rectangle, centered in the frame.
    fn track(&self) -> Rectangle {
        Rectangle::with_center(self.frame.rect().center(), SWITCH_SIZE)
    }

    fn knob(&self, track: &Rectangle) -> Circle {
        let inset = coord(KNOB_INSET);
        let x = if self.on {
            right(track)
                .saturating_sub(inset)
                .saturating_sub(coord(KNOB_DIAMETER))
        } else {
            track.top_left.x.saturating_add(inset)
        };
        Circle::new(
            Point::new(x, track.top_left.y.saturating_add(inset)),
            KNOB_DIAMETER,
        )
    }
}

impl Default for SwitchView {
    fn default() -> Self {
        Self::new(false)
    }
}

impl View for SwitchView {
    fn minimal_size_for_optimal_display(&self) -> Size {
        SWITCH_SIZE
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

        let track = self.track();
        let track_color = if self.on {
            Palette::SWITCH_ON
        } else {
            Palette::SWITCH_OFF
        };
        let radius = SWITCH_SIZE.height / 2;

        let mut clipped = target.clipped(&frame);
        RoundedRectangle::with_equal_corners(track, Size::new(radius, radius))
            .into_styled(PrimitiveStyle::with_fill(track_color))
            .draw(&mut clipped)?;
        self.knob(&track)
            .into_styled(PrimitiveStyle::with_fill(Palette::LIST_CELL_BACKGROUND))
            .draw(&mut clipped)
    }
}
