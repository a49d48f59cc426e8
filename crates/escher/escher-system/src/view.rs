//! The view contract consumed by the cell layout engine.
//!
//! A view reports the smallest size at which it renders without truncation,
//! accepts the frame its parent computed, and draws itself inside that frame.
//! Frames are expressed in the parent's coordinate system.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::{DrawTarget, Size};
use embedded_graphics::primitives::Rectangle;

/// A leaf of the cell hierarchy.
///
/// # Example
///
/// ```
/// use escher_system::view::{View, ViewFrame};
/// use embedded_graphics::pixelcolor::Rgb565;
/// use embedded_graphics::prelude::*;
/// use embedded_graphics::primitives::Rectangle;
///
/// struct Dot {
///     frame: ViewFrame,
/// }
///
/// impl View for Dot {
///     fn minimal_size_for_optimal_display(&self) -> Size {
///         Size::new(4, 4)
///     }
///
///     fn set_frame(&mut self, frame: Rectangle, force: bool) {
///         self.frame.assign(frame, force);
///     }
///
///     fn frame(&self) -> Rectangle {
///         self.frame.rect()
///     }
///
///     fn draw<D: DrawTarget<Color = Rgb565>>(&self, _target: &mut D) -> Result<(), D::Error> {
///         Ok(())
///     }
/// }
///
/// let mut dot = Dot { frame: ViewFrame::new() };
/// dot.set_frame(Rectangle::new(Point::new(2, 2), Size::new(4, 4)), false);
/// assert_eq!(dot.frame().top_left, Point::new(2, 2));
/// ```
pub trait View {
    /// Smallest size at which the view renders without degradation.
    fn minimal_size_for_optimal_display(&self) -> Size;

    /// Assign a frame. With `force` the view re-lays out its content even
    /// if the frame did not change.
    fn set_frame(&mut self, frame: Rectangle, force: bool);

    /// Frame assigned by the last [`set_frame`](Self::set_frame).
    fn frame(&self) -> Rectangle;

    /// Draw the view inside its frame.
    ///
    /// # Errors
    ///
    /// Propagates the draw target's error.
    fn draw<D: DrawTarget<Color = Rgb565>>(&self, target: &mut D) -> Result<(), D::Error>;
}

/// Frame storage for [`View`] implementors.
///
/// Remembers the current frame and whether content needs to be laid out
/// again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewFrame {
    rect: Rectangle,
    needs_layout: bool,
}

impl ViewFrame {
    /// Zero frame at the origin, content not laid out yet.
    pub const fn new() -> Self {
        Self {
            rect: Rectangle::zero(),
            needs_layout: true,
        }
    }

    /// Current frame.
    pub const fn rect(&self) -> Rectangle {
        self.rect
    }

    /// Store `rect`. Returns `true` when the owner must lay out its content:
    /// the frame changed, `force` was set, or the content was never laid out
    /// since the last [`mark_laid_out`](Self::mark_laid_out).
    ///
    /// ```
    /// use escher_system::view::ViewFrame;
    /// use embedded_graphics::prelude::*;
    /// use embedded_graphics::primitives::Rectangle;
    ///
    /// let rect = Rectangle::new(Point::new(1, 1), Size::new(10, 10));
    /// let mut frame = ViewFrame::new();
    ///
    /// assert!(frame.assign(rect, false));
    /// frame.mark_laid_out();
    /// assert!(!frame.assign(rect, false));
    /// assert!(frame.assign(rect, true));
    /// ```
    pub fn assign(&mut self, rect: Rectangle, force: bool) -> bool {
        if rect == self.rect && !force && !self.needs_layout {
            #[cfg(feature = "tracing")]
            tracing::debug!("frame unchanged, layout skipped");
            return false;
        }
        #[cfg(feature = "tracing")]
        {
            if rect == self.rect {
                tracing::debug!("frame unchanged, layout forced");
            }
        }
        self.rect = rect;
        self.needs_layout = true;
        true
    }

    /// Whether content must be laid out since the last
    /// [`mark_laid_out`](Self::mark_laid_out).
    pub const fn needs_layout(&self) -> bool {
        self.needs_layout
    }

    /// Record that content was laid out for the current frame.
    pub fn mark_laid_out(&mut self) {
        self.needs_layout = false;
    }
}

impl Default for ViewFrame {
    fn default() -> Self {
        Self::new()
    }
}

/// Placeholder for an unused cell slot.
///
/// Reports a zero size and draws nothing. A slot typed `Empty` is normally
/// left `None`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Empty;

impl View for Empty {
    fn minimal_size_for_optimal_display(&self) -> Size {
        Size::zero()
    }

    fn set_frame(&mut self, _frame: Rectangle, _force: bool) {}

    fn frame(&self) -> Rectangle {
        Rectangle::zero()
    }

    fn draw<D: DrawTarget<Color = Rgb565>>(&self, _target: &mut D) -> Result<(), D::Error> {
        Ok(())
    }
}
