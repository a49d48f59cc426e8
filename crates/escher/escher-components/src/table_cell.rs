//! Generic three-slot table cell
//!
//! [`TableCell`] owns up to three child views and positions them with
//! [`layout_cell`]. Unused slots are typed [`Empty`] and left `None`.
//!
//! # Example
//!
//! ```
//! use escher_components::prelude::*;
//! use escher_system::prelude::*;
//! use embedded_graphics::prelude::*;
//! use embedded_graphics::primitives::Rectangle;
//!
//! let mut cell = TableCell::new(CellLayout::Horizontal)
//!     .with_label(TextView::new("Wi-Fi").size(TextSize::Small))
//!     .with_accessory(SwitchView::new(true));
//!
//! cell.set_frame(Rectangle::new(Point::zero(), Size::new(120, 24)), false);
//!
//! assert_eq!(cell.number_of_subviews(), 2);
//! let switch = cell.accessory_view().unwrap();
//! assert_eq!(switch.frame().top_left, Point::new(85, 1));
//! ```

use embedded_graphics::{pixelcolor::Rgb565, prelude::*, primitives::Rectangle};
use escher_system::cell_layout::{layout_cell, CellFrames, CellLayout, Slot, SlotSizes};
use escher_system::metrics::CellMetrics;
use escher_system::palette::{cell_background, Palette};
use escher_system::render::{draw_border_of_rect, draw_inner_rect};
use escher_system::view::{Empty, View, ViewFrame};
use heapless::Vec;

/// A bordered list cell with a label, an accessory and a sub-accessory.
#[derive(Debug, Clone, PartialEq)]
pub struct TableCell<L = Empty, A = Empty, S = Empty> {
    layout: CellLayout,
    metrics: CellMetrics,
    frame: ViewFrame,
    highlighted: bool,
    label: Option<L>,
    accessory: Option<A>,
    sub_accessory: Option<S>,
}

impl TableCell {
    /// Empty cell with default metrics. The layout mode is fixed for the
    /// lifetime of the cell.
    pub const fn new(layout: CellLayout) -> Self {
        Self {
            layout,
            metrics: CellMetrics::DEFAULT,
            frame: ViewFrame::new(),
            highlighted: false,
            label: None,
            accessory: None,
            sub_accessory: None,
        }
    }
}

impl Default for TableCell {
    fn default() -> Self {
        Self::new(CellLayout::default())
    }
}

impl<L: View, A: View, S: View> TableCell<L, A, S> {
    /// Put `label` in the label slot
    pub fn with_label<V: View>(self, label: V) -> TableCell<V, A, S> {
        TableCell {
            layout: self.layout,
            metrics: self.metrics,
            frame: self.frame,
            highlighted: self.highlighted,
            label: Some(label),
            accessory: self.accessory,
            sub_accessory: self.sub_accessory,
        }
    }

    /// Put `accessory` in the accessory slot
    pub fn with_accessory<V: View>(self, accessory: V) -> TableCell<L, V, S> {
        TableCell {
            layout: self.layout,
            metrics: self.metrics,
            frame: self.frame,
            highlighted: self.highlighted,
            label: self.label,
            accessory: Some(accessory),
            sub_accessory: self.sub_accessory,
        }
    }

    /// Put `sub_accessory` in the sub-accessory slot
    pub fn with_sub_accessory<V: View>(self, sub_accessory: V) -> TableCell<L, A, V> {
        TableCell {
            layout: self.layout,
            metrics: self.metrics,
            frame: self.frame,
            highlighted: self.highlighted,
            label: self.label,
            accessory: self.accessory,
            sub_accessory: Some(sub_accessory),
        }
    }

    /// Replace the metrics, e.g. to override label or accessory margins
    #[must_use]
    pub fn with_metrics(mut self, metrics: CellMetrics) -> Self {
        self.metrics = metrics;
        self
    }

    /// Layout mode chosen at construction.
    pub const fn layout(&self) -> CellLayout {
        self.layout
    }

    /// Margins and separator thickness in use.
    pub const fn metrics(&self) -> &CellMetrics {
        &self.metrics
    }

    /// The label, if present.
    pub fn label_view(&self) -> Option<&L> {
        self.label.as_ref()
    }

    /// Mutable access to the label. Call [`layout_subviews`](Self::layout_subviews)
    /// after changing its size.
    pub fn label_view_mut(&mut self) -> Option<&mut L> {
        self.label.as_mut()
    }

    /// The accessory, if present.
    pub fn accessory_view(&self) -> Option<&A> {
        self.accessory.as_ref()
    }

    /// Mutable access to the accessory.
    pub fn accessory_view_mut(&mut self) -> Option<&mut A> {
        self.accessory.as_mut()
    }

    /// The sub-accessory, if present.
    pub fn sub_accessory_view(&self) -> Option<&S> {
        self.sub_accessory.as_ref()
    }

    /// Mutable access to the sub-accessory.
    pub fn sub_accessory_view_mut(&mut self) -> Option<&mut S> {
        self.sub_accessory.as_mut()
    }

    /// Take the label out, leaving the slot empty.
    pub fn take_label(&mut self) -> Option<L> {
        self.label.take()
    }

    /// Replace or clear the label. Takes effect on the next layout pass.
    pub fn set_label(&mut self, label: Option<L>) {
        self.label = label;
    }

    /// Replace or clear the accessory.
    pub fn set_accessory(&mut self, accessory: Option<A>) {
        self.accessory = accessory;
    }

    /// Replace or clear the sub-accessory.
    pub fn set_sub_accessory(&mut self, sub_accessory: Option<S>) {
        self.sub_accessory = sub_accessory;
    }

    /// Cell bounds in the owning table's coordinates.
    pub const fn frame(&self) -> Rectangle {
        self.frame.rect()
    }

    /// Set the cell bounds and lay out the children when they changed or
    /// `force` is set.
    pub fn set_frame(&mut self, frame: Rectangle, force: bool) {
        if self.frame.assign(frame, force) {
            self.layout_subviews(force);
        }
    }

    /// Minimal sizes of the present children.
    pub fn slot_sizes(&self) -> SlotSizes {
        SlotSizes {
            label: self.label.as_ref().map(View::minimal_size_for_optimal_display),
            accessory: self
                .accessory
                .as_ref()
                .map(View::minimal_size_for_optimal_display),
            sub_accessory: self
                .sub_accessory
                .as_ref()
                .map(View::minimal_size_for_optimal_display),
        }
    }

    /// Frames the children would get for the current bounds.
    pub fn compute_frames(&self) -> CellFrames {
        layout_cell(
            self.layout,
            self.frame.rect().size,
            &self.metrics,
            &self.slot_sizes(),
        )
    }

    /// Recompute and assign every child frame. `force` is forwarded to each
    /// child's `set_frame`.
    pub fn layout_subviews(&mut self, force: bool) {
        let frames = self.compute_frames();

        #[cfg(feature = "defmt")]
        defmt::trace!(
            "layout_subviews: {} children, force={}",
            self.number_of_subviews(),
            force
        );
        #[cfg(feature = "tracing")]
        tracing::debug!(
            children = self.number_of_subviews(),
            force,
            "layout_subviews"
        );

        if let (Some(view), Some(frame)) = (self.label.as_mut(), frames.label) {
            view.set_frame(frame, force);
        }
        if let (Some(view), Some(frame)) = (self.accessory.as_mut(), frames.accessory) {
            view.set_frame(frame, force);
        }
        if let (Some(view), Some(frame)) = (self.sub_accessory.as_mut(), frames.sub_accessory) {
            view.set_frame(frame, force);
        }
        self.frame.mark_laid_out();
    }

    /// Present slots in subview order: label, accessory, sub-accessory.
    pub fn present_slots(&self) -> Vec<Slot, 3> {
        let mut slots = Vec::new();
        for slot in Slot::ALL {
            let present = match slot {
                Slot::Label => self.label.is_some(),
                Slot::Accessory => self.accessory.is_some(),
                Slot::SubAccessory => self.sub_accessory.is_some(),
            };
            // Capacity matches `Slot::ALL`.
            if present && slots.push(slot).is_err() {
                break;
            }
        }
        slots
    }

    /// Count of present children.
    pub fn number_of_subviews(&self) -> usize {
        self.present_slots().len()
    }

    /// The `index`-th present child, `None` past the end.
    pub fn subview_at_index(&self, index: usize) -> Option<Slot> {
        self.present_slots().get(index).copied()
    }

    /// Current frame of a child, relative to the cell.
    pub fn subview_frame(&self, slot: Slot) -> Option<Rectangle> {
        match slot {
            Slot::Label => self.label.as_ref().map(View::frame),
            Slot::Accessory => self.accessory.as_ref().map(View::frame),
            Slot::SubAccessory => self.sub_accessory.as_ref().map(View::frame),
        }
    }

    /// Select the highlighted background. Does not affect layout.
    pub fn set_highlighted(&mut self, highlighted: bool) {
        self.highlighted = highlighted;
    }

    /// Whether the highlighted background is in use.
    pub const fn is_highlighted(&self) -> bool {
        self.highlighted
    }

    /// Background for the current highlight state.
    pub const fn background_color(&self) -> Rgb565 {
        cell_background(self.highlighted)
    }

    /// Paint the inner rect with the highlight background and the border
    /// around the full bounds.
    ///
    /// # Errors
    ///
    /// Propagates the draw target's error.
    pub fn draw_rect<D: DrawTarget<Color = Rgb565>>(&self, target: &mut D) -> Result<(), D::Error> {
        self.draw_rect_with(target, self.background_color())
    }

    /// Like [`draw_rect`](Self::draw_rect) with an explicit background.
    ///
    /// # Errors
    ///
    /// Propagates the draw target's error.
    pub fn draw_rect_with<D: DrawTarget<Color = Rgb565>>(
        &self,
        target: &mut D,
        background: Rgb565,
    ) -> Result<(), D::Error> {
        let bounds = self.frame.rect();
        let thickness = self.metrics.separator_thickness;
        draw_inner_rect(target, bounds, thickness, background)?;
        draw_border_of_rect(target, bounds, thickness, Palette::LIST_CELL_BORDER)
    }

    /// Draw every present child, each clipped to its own frame.
    ///
    /// # Errors
    ///
    /// Propagates the draw target's error.
    pub fn draw_subviews<D: DrawTarget<Color = Rgb565>>(&self, target: &mut D) -> Result<(), D::Error> {
        let mut local = target.translated(self.frame.rect().top_left);
        if let Some(view) = &self.label {
            draw_child(view, &mut local)?;
        }
        if let Some(view) = &self.accessory {
            draw_child(view, &mut local)?;
        }
        if let Some(view) = &self.sub_accessory {
            draw_child(view, &mut local)?;
        }
        Ok(())
    }

    /// Paint the cell, then its children.
    ///
    /// # Errors
    ///
    /// Propagates the draw target's error.
    pub fn draw<D: DrawTarget<Color = Rgb565>>(&self, target: &mut D) -> Result<(), D::Error> {
        self.draw_rect(target)?;
        self.draw_subviews(target)
    }
}

fn draw_child<V: View, D: DrawTarget<Color = Rgb565>>(view: &V, target: &mut D) -> Result<(), D::Error> {
    let frame = view.frame();
    if frame.size.width == 0 || frame.size.height == 0 {
        return Ok(());
    }
    view.draw(&mut target.clipped(&frame))
}
