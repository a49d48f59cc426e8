//! Three-slot table cell layout.
//!
//! A cell holds up to three views: a label, an accessory and a
//! sub-accessory. [`layout_cell`] computes a frame for each present view from
//! the cell bounds, the [`CellMetrics`] and the views' minimal sizes. It has
//! no side effects; the caller applies the returned [`CellFrames`].
//!
//! # Vertical layout
//!
//! ```text
//! +------------------------------+  separator
//! |  vertical margin             |
//! |  LABEL                       |
//! |  vertical margin             |
//! |  (free space)                |
//! |  SUB-ACCESSORY               |
//! |  ACCESSORY                   |
//! |  vertical margin             |
//! +------------------------------+  separator
//! ```
//!
//! The label grows down from the top, the sub-accessory/accessory pair is
//! anchored to the bottom. When they meet, the label wins, then the
//! sub-accessory; the accessory is compressed first.
//!
//! # Horizontal layouts
//!
//! ```text
//! | sep | lm | LABEL | lm | (free) | SUB-ACCESSORY | ACCESSORY | am | sep |
//! ```
//!
//! The label is anchored left, the sub-accessory/accessory pair right. Every
//! view spans the full height inside the separators. With
//! [`CellLayout::Horizontal`] the label keeps its width and pushes the
//! trailing views right (they are cut at the border); with
//! [`CellLayout::HorizontalRightOverlap`] the label is truncated instead so
//! the trailing views keep their anchors.
//!
//! # Example
//!
//! ```
//! use escher_system::cell_layout::{layout_cell, CellLayout, SlotSizes};
//! use escher_system::metrics::CellMetrics;
//! use embedded_graphics::prelude::{Point, Size};
//!
//! let sizes = SlotSizes::new()
//!     .label(Size::new(60, 12))
//!     .accessory(Size::new(20, 12));
//!
//! let frames = layout_cell(
//!     CellLayout::Horizontal,
//!     Size::new(160, 30),
//!     &CellMetrics::DEFAULT,
//!     &sizes,
//! );
//!
//! let label = frames.label.unwrap();
//! assert_eq!(label.top_left, Point::new(11, 1));
//! assert_eq!(label.size, Size::new(60, 28));
//!
//! let accessory = frames.accessory.unwrap();
//! assert_eq!(accessory.top_left, Point::new(129, 1));
//! assert_eq!(accessory.size, Size::new(20, 28));
//! ```

use embedded_graphics::prelude::Size;
use embedded_graphics::primitives::Rectangle;

use crate::geometry::{coord, confine, frame, inner_rect, with_margin};
use crate::metrics::{CellMetrics, MAX_METRIC};

/// Arrangement of the three slots inside a cell.
///
/// Chosen when the cell is built and never changed afterwards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CellLayout {
    /// Label, sub-accessory and accessory stacked top to bottom.
    Vertical,
    /// Side by side; the label may push the trailing views off the cell.
    #[default]
    Horizontal,
    /// Side by side; the label is truncated before the sub-accessory.
    HorizontalRightOverlap,
}

impl CellLayout {
    /// Whether the views are placed side by side.
    pub const fn is_horizontal(self) -> bool {
        !matches!(self, Self::Vertical)
    }
}

/// One of the three view slots of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Slot {
    /// Primary text.
    Label,
    /// Trailing control.
    Accessory,
    /// Secondary trailing control, placed before the accessory.
    SubAccessory,
}

impl Slot {
    /// All slots in subview order.
    pub const ALL: [Self; 3] = [Self::Label, Self::Accessory, Self::SubAccessory];
}

/// Minimal optimal size of each slot, `None` for an absent view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[must_use]
pub struct SlotSizes {
    /// Label size.
    pub label: Option<Size>,
    /// Accessory size.
    pub accessory: Option<Size>,
    /// Sub-accessory size.
    pub sub_accessory: Option<Size>,
}

impl SlotSizes {
    /// No views present.
    pub const fn new() -> Self {
        Self {
            label: None,
            accessory: None,
            sub_accessory: None,
        }
    }

    /// Set the label size.
    pub const fn label(mut self, size: Size) -> Self {
        self.label = Some(size);
        self
    }

    /// Set the accessory size.
    pub const fn accessory(mut self, size: Size) -> Self {
        self.accessory = Some(size);
        self
    }

    /// Set the sub-accessory size.
    pub const fn sub_accessory(mut self, size: Size) -> Self {
        self.sub_accessory = Some(size);
        self
    }

    /// Size of the given slot.
    pub const fn get(&self, slot: Slot) -> Option<Size> {
        match slot {
            Slot::Label => self.label,
            Slot::Accessory => self.accessory,
            Slot::SubAccessory => self.sub_accessory,
        }
    }
}

/// Frames computed by [`layout_cell`], relative to the cell's top-left
/// corner. A slot is `None` exactly when its size was `None`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CellFrames {
    /// Label frame.
    pub label: Option<Rectangle>,
    /// Accessory frame.
    pub accessory: Option<Rectangle>,
    /// Sub-accessory frame.
    pub sub_accessory: Option<Rectangle>,
}

impl CellFrames {
    /// Frame of the given slot.
    pub const fn get(&self, slot: Slot) -> Option<Rectangle> {
        match slot {
            Slot::Label => self.label,
            Slot::Accessory => self.accessory,
            Slot::SubAccessory => self.sub_accessory,
        }
    }

    /// Present frames in subview order.
    pub fn iter(&self) -> impl Iterator<Item = (Slot, Rectangle)> + '_ {
        Slot::ALL
            .into_iter()
            .filter_map(move |slot| self.get(slot).map(|rect| (slot, rect)))
    }
}

/// Largest bounds or view extent the layout passes work with.
///
/// Wider or taller inputs are treated as this size: views anchored to the far
/// edge of a larger cell end up at this offset instead.
pub const MAX_EXTENT: u32 = 0x00FF_FFFF;

/// Layout inputs as signed coordinates. Extents are clamped to
/// [`MAX_EXTENT`] and metrics to [`MAX_METRIC`] so the passes below can use
/// plain arithmetic.
struct Dims {
    width: i32,
    height: i32,
    separator: i32,
    vertical_margin: i32,
    horizontal_margin: i32,
    label_margin: i32,
    accessory_margin: i32,
}

fn clamped(value: u32) -> i32 {
    coord(value.min(MAX_EXTENT))
}

fn metric(value: u32) -> i32 {
    coord(value.min(MAX_METRIC))
}

impl Dims {
    fn new(bounds: Size, metrics: &CellMetrics) -> Self {
        Self {
            width: clamped(bounds.width),
            height: clamped(bounds.height),
            separator: metric(metrics.separator_thickness),
            vertical_margin: metric(metrics.vertical_margin),
            horizontal_margin: metric(metrics.horizontal_margin),
            label_margin: metric(metrics.label_margin),
            accessory_margin: metric(metrics.accessory_margin),
        }
    }
}

fn width_of(size: Option<Size>) -> i32 {
    size.map_or(0, |s| clamped(s.width))
}

fn height_of(size: Option<Size>) -> i32 {
    size.map_or(0, |s| clamped(s.height))
}

/// Compute the frame of every present view in a cell.
///
/// The result only depends on the arguments: calling it twice with the same
/// inputs gives the same frames. Every frame lies inside `bounds` shrunk by
/// the separator thickness, and no view gets more than its minimal size along
/// the layout axis. Nothing is rejected; when space runs out views shrink,
/// down to zero.
///
/// Bounds and view sizes are honored up to [`MAX_EXTENT`] on each axis.
pub fn layout_cell(
    layout: CellLayout,
    bounds: Size,
    metrics: &CellMetrics,
    sizes: &SlotSizes,
) -> CellFrames {
    #[cfg(feature = "defmt")]
    defmt::trace!(
        "cell layout {}: {=u32}x{=u32}",
        layout,
        bounds.width,
        bounds.height
    );
    #[cfg(feature = "tracing")]
    tracing::trace!(?layout, width = bounds.width, height = bounds.height, "cell layout");

    let dims = Dims::new(bounds, metrics);
    let frames = match layout {
        CellLayout::Vertical => layout_vertical(&dims, sizes),
        CellLayout::Horizontal => layout_horizontal(&dims, sizes, false),
        CellLayout::HorizontalRightOverlap => layout_horizontal(&dims, sizes, true),
    };

    let inner = inner_rect(bounds, metrics.separator_thickness);
    CellFrames {
        label: frames.label.map(|f| confine(f, inner)),
        accessory: frames.accessory.map(|f| confine(f, inner)),
        sub_accessory: frames.sub_accessory.map(|f| confine(f, inner)),
    }
}

// SAFETY: extents are clamped to 0..=0xFF_FFFF and metrics to 0..=0x7FFF by
// `Dims`; the longest expression sums six such terms, far from i32 overflow.
#[allow(clippy::arithmetic_side_effects)]
fn layout_vertical(d: &Dims, sizes: &SlotSizes) -> CellFrames {
    let mut frames = CellFrames::default();
    let accessory_height = height_of(sizes.accessory);
    let sub_accessory_height = height_of(sizes.sub_accessory);
    let accessory_reserved = with_margin(accessory_height, d.vertical_margin);

    let mut y = d.separator;
    if let Some(size) = sizes.label {
        y += d.vertical_margin;
        let inset = d.separator + d.label_margin;
        let height = clamped(size.height)
            .min(d.height - y - d.separator - d.vertical_margin)
            .max(0);
        frames.label = Some(frame(inset, y, d.width - 2 * inset, height));
        y += height + d.vertical_margin;
    }

    // Bottom-anchored pair; never above the label.
    y = y.max(
        d.height - d.separator - accessory_reserved - with_margin(sub_accessory_height, 0),
    );
    if sizes.sub_accessory.is_some() {
        // The sub-accessory outranks the accessory: it only leaves room for
        // the accessory's bottom margin and the accessory is compressed.
        let bottom_margin = if sizes.accessory.is_some() {
            d.vertical_margin
        } else {
            0
        };
        let inset = d.separator + d.horizontal_margin;
        let height = sub_accessory_height
            .min(d.height - y - d.separator - bottom_margin)
            .max(0);
        frames.sub_accessory = Some(frame(inset, y, d.width - 2 * inset, height));
        y += height;
    }

    y = y.max(d.height - d.separator - accessory_reserved);
    if sizes.accessory.is_some() {
        let inset = d.separator + d.accessory_margin;
        let height = accessory_height
            .min(d.height - y - d.separator - d.vertical_margin)
            .max(0);
        frames.accessory = Some(frame(inset, y, d.width - 2 * inset, height));
    }

    frames
}

// SAFETY: see `layout_vertical`.
#[allow(clippy::arithmetic_side_effects)]
fn layout_horizontal(d: &Dims, sizes: &SlotSizes, right_overlap: bool) -> CellFrames {
    let mut frames = CellFrames::default();
    let accessory_width = width_of(sizes.accessory);
    let sub_accessory_width = width_of(sizes.sub_accessory);
    let accessory_reserved = with_margin(accessory_width, d.accessory_margin);

    let y = d.separator;
    let height = d.height - 2 * d.separator;

    let label_x = d.separator + d.label_margin;
    let sub_accessory_x = (d.separator + d.horizontal_margin).max(
        d.width - d.separator - accessory_reserved - with_margin(sub_accessory_width, 0),
    );
    let accessory_x = (d.separator + d.accessory_margin).max(d.width - d.separator - accessory_reserved);

    let mut x = 0;
    if let Some(size) = sizes.label {
        x = label_x;
        let mut width = clamped(size.width).min(d.width - x - d.separator - d.label_margin);
        if right_overlap {
            width = width.min(sub_accessory_x - x - d.label_margin);
        }
        let width = width.max(0);
        frames.label = Some(frame(x, y, width, height));
        x += width + d.label_margin;
    }

    if sizes.sub_accessory.is_some() {
        x = x.max(sub_accessory_x);
        let mut width = sub_accessory_width.min(d.width - x - d.separator - d.horizontal_margin);
        if right_overlap {
            width = width.min(accessory_x - x);
        }
        let width = width.max(0);
        frames.sub_accessory = Some(frame(x, y, width, height));
        x += width;
    }

    if sizes.accessory.is_some() {
        x = x.max(accessory_x);
        let width = accessory_width
            .min(d.width - x - d.separator - d.accessory_margin)
            .max(0);
        frames.accessory = Some(frame(x, y, width, height));
    }

    frames
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{contains_rect, overlaps, right};
    use embedded_graphics::prelude::Point;

    fn metrics(separator: u32, vertical: u32, horizontal: u32) -> CellMetrics {
        CellMetrics::builder()
            .separator_thickness(separator)
            .vertical_margin(vertical)
            .horizontal_margin(horizontal)
            .build()
            .unwrap()
    }

    #[test]
    fn test_vertical_label_only() {
        let m = CellMetrics::builder()
            .separator_thickness(1)
            .vertical_margin(4)
            .label_margin(4)
            .build()
            .unwrap();
        let sizes = SlotSizes::new().label(Size::new(150, 20));

        let frames = layout_cell(CellLayout::Vertical, Size::new(200, 40), &m, &sizes);

        assert_eq!(frames.label, Some(frame(5, 5, 190, 20)));
        assert_eq!(frames.accessory, None);
        assert_eq!(frames.sub_accessory, None);
    }

    #[test]
    fn test_vertical_full_stack() {
        let m = metrics(1, 4, 10);
        let sizes = SlotSizes::new()
            .label(Size::new(50, 12))
            .sub_accessory(Size::new(40, 10))
            .accessory(Size::new(30, 14));

        let frames = layout_cell(CellLayout::Vertical, Size::new(120, 80), &m, &sizes);

        // Label at the top, below separator + margin.
        assert_eq!(frames.label, Some(frame(11, 5, 98, 12)));
        // Accessory: 80 - 1 - (14 + 4) = 61.
        assert_eq!(frames.accessory, Some(frame(11, 61, 98, 14)));
        // Sub-accessory sits right above the accessory.
        assert_eq!(frames.sub_accessory, Some(frame(11, 51, 98, 10)));
    }

    #[test]
    fn test_vertical_label_priority() {
        let m = metrics(1, 4, 10);
        let sizes = SlotSizes::new()
            .label(Size::new(50, 20))
            .sub_accessory(Size::new(40, 10))
            .accessory(Size::new(30, 14));

        // 40px tall: label takes 20, leaving 6px for the pair.
        let frames = layout_cell(CellLayout::Vertical, Size::new(120, 40), &m, &sizes);

        let label = frames.label.unwrap();
        assert_eq!(label.size.height, 20);

        // Sub-accessory gets what is left above the bottom margin, the
        // accessory nothing.
        let sub = frames.sub_accessory.unwrap();
        let accessory = frames.accessory.unwrap();
        assert_eq!(sub, frame(11, 29, 98, 6));
        assert_eq!(accessory.top_left.y, 35);
        assert_eq!(accessory.size.height, 0);
    }

    #[test]
    fn test_vertical_sub_accessory_compressed_before_label() {
        let m = metrics(1, 2, 4);
        let sizes = SlotSizes::new()
            .label(Size::new(50, 10))
            .sub_accessory(Size::new(40, 20));

        // Label ends at 1 + 2 + 10 + 2 = 15; pair wants to start at 30 - 1 - 20 = 9.
        let frames = layout_cell(CellLayout::Vertical, Size::new(80, 30), &m, &sizes);

        assert_eq!(frames.label, Some(frame(5, 3, 70, 10)));
        assert_eq!(frames.sub_accessory, Some(frame(5, 15, 70, 14)));
    }

    #[test]
    fn test_vertical_without_label_ignores_label_margin() {
        let sizes = SlotSizes::new()
            .sub_accessory(Size::new(40, 10))
            .accessory(Size::new(30, 14));
        let narrow = CellMetrics::builder().label_margin(0).build().unwrap();
        let wide = CellMetrics::builder().label_margin(40).build().unwrap();

        let a = layout_cell(CellLayout::Vertical, Size::new(120, 60), &narrow, &sizes);
        let b = layout_cell(CellLayout::Vertical, Size::new(120, 60), &wide, &sizes);

        assert_eq!(a, b);
    }

    #[test]
    fn test_horizontal_all_fit() {
        let m = metrics(1, 4, 10);
        let sizes = SlotSizes::new()
            .label(Size::new(40, 12))
            .sub_accessory(Size::new(30, 12))
            .accessory(Size::new(20, 12));

        let frames = layout_cell(CellLayout::Horizontal, Size::new(200, 30), &m, &sizes);

        assert_eq!(frames.label, Some(frame(11, 1, 40, 28)));
        // accessory_x = 200 - 1 - 30 = 169, sub_accessory_x = 169 - 30 = 139
        assert_eq!(frames.sub_accessory, Some(frame(139, 1, 30, 28)));
        assert_eq!(frames.accessory, Some(frame(169, 1, 20, 28)));
    }

    #[test]
    fn test_horizontal_accessory_clipped_after_label() {
        let m = metrics(1, 4, 10);
        let sizes = SlotSizes::new()
            .label(Size::new(80, 12))
            .accessory(Size::new(40, 12));

        let frames = layout_cell(CellLayout::Horizontal, Size::new(100, 30), &m, &sizes);

        let label = frames.label.unwrap();
        // Label capped by the right border: 100 - 11 - 1 - 10 = 78.
        assert_eq!(label, frame(11, 1, 78, 28));

        // Accessory starts after the label and its margin: 11 + 78 + 10 = 99.
        // Width: 100 - 1 - 10 - 99 < 0, clamped to zero.
        let accessory = frames.accessory.unwrap();
        assert_eq!(accessory.top_left, Point::new(99, 1));
        assert_eq!(accessory.size.width, 0);
    }

    #[test]
    fn test_horizontal_accessory_partially_fits() {
        let m = metrics(1, 4, 2);
        let sizes = SlotSizes::new()
            .label(Size::new(80, 12))
            .accessory(Size::new(40, 12));

        let frames = layout_cell(CellLayout::Horizontal, Size::new(100, 30), &m, &sizes);

        let label = frames.label.unwrap();
        let label_end = right(&label) + 2;
        assert_eq!(label_end, 85);

        let accessory = frames.accessory.unwrap();
        assert_eq!(accessory.top_left.x, label_end);
        assert_eq!(accessory.size.width, (100 - 1 - 2 - label_end) as u32);
    }

    #[test]
    fn test_right_overlap_truncates_label() {
        let m = metrics(1, 4, 10);
        let sizes = SlotSizes::new()
            .label(Size::new(150, 12))
            .sub_accessory(Size::new(30, 12))
            .accessory(Size::new(20, 12));

        let plain = layout_cell(CellLayout::Horizontal, Size::new(200, 30), &m, &sizes);
        let overlap = layout_cell(
            CellLayout::HorizontalRightOverlap,
            Size::new(200, 30),
            &m,
            &sizes,
        );

        // Plain: label keeps 150 and pushes the trailing views right.
        assert_eq!(plain.label.unwrap().size.width, 150);
        assert!(plain.sub_accessory.unwrap().top_left.x > 139);

        // Overlap: label stops before the sub-accessory anchor (139 - 11 - 10).
        assert_eq!(overlap.label.unwrap().size.width, 118);
        assert_eq!(overlap.sub_accessory, Some(frame(139, 1, 30, 28)));
        assert_eq!(overlap.accessory, Some(frame(169, 1, 20, 28)));
    }

    #[test]
    fn test_right_overlap_sub_accessory_capped_by_accessory() {
        let m = metrics(1, 4, 4);
        let sizes = SlotSizes::new()
            .sub_accessory(Size::new(200, 12))
            .accessory(Size::new(20, 12));

        let frames = layout_cell(
            CellLayout::HorizontalRightOverlap,
            Size::new(100, 20),
            &m,
            &sizes,
        );

        let sub = frames.sub_accessory.unwrap();
        let accessory = frames.accessory.unwrap();
        assert!(right(&sub) <= accessory.top_left.x);
        // accessory_x = 100 - 1 - 24 = 75
        assert_eq!(accessory, frame(75, 1, 20, 18));
    }

    #[test]
    fn test_wide_cell_keeps_accessory_right_anchored() {
        let sizes = SlotSizes::new()
            .label(Size::new(60, 12))
            .accessory(Size::new(20, 12));

        let frames = layout_cell(
            CellLayout::Horizontal,
            Size::new(40_000, 30),
            &CellMetrics::DEFAULT,
            &sizes,
        );

        // 40000 - 1 - (20 + 10) = 39969
        assert_eq!(frames.accessory, Some(frame(39_969, 1, 20, 28)));
    }

    #[test]
    fn test_oversized_bounds_stay_inside_border() {
        let sizes = SlotSizes::new()
            .label(Size::new(u32::MAX, u32::MAX))
            .accessory(Size::new(20, 12));
        let bounds = Size::new(u32::MAX, 40);

        let frames = layout_cell(CellLayout::Horizontal, bounds, &CellMetrics::DEFAULT, &sizes);

        let inner = inner_rect(bounds, 1);
        for (_, f) in frames.iter() {
            assert!(contains_rect(&inner, &f));
        }
        // Clamped to MAX_EXTENT, minus separator and both label margins.
        assert_eq!(frames.label.unwrap().size.width, 16_777_193);
    }

    #[test]
    fn test_no_views() {
        let frames = layout_cell(
            CellLayout::Vertical,
            Size::new(100, 30),
            &CellMetrics::DEFAULT,
            &SlotSizes::new(),
        );
        assert_eq!(frames, CellFrames::default());
        assert_eq!(frames.iter().count(), 0);
    }

    #[test]
    fn test_zero_bounds() {
        let sizes = SlotSizes::new()
            .label(Size::new(10, 10))
            .sub_accessory(Size::new(10, 10))
            .accessory(Size::new(10, 10));

        for layout in [
            CellLayout::Vertical,
            CellLayout::Horizontal,
            CellLayout::HorizontalRightOverlap,
        ] {
            let frames = layout_cell(layout, Size::zero(), &CellMetrics::DEFAULT, &sizes);
            for (_, f) in frames.iter() {
                assert_eq!(f.size, Size::zero());
            }
        }
    }

    #[test]
    fn test_frames_inside_border() {
        let m = metrics(2, 4, 6);
        let bounds = Size::new(90, 24);
        let inner = inner_rect(bounds, 2);
        let sizes = SlotSizes::new()
            .label(Size::new(70, 30))
            .sub_accessory(Size::new(50, 30))
            .accessory(Size::new(50, 30));

        for layout in [
            CellLayout::Vertical,
            CellLayout::Horizontal,
            CellLayout::HorizontalRightOverlap,
        ] {
            let frames = layout_cell(layout, bounds, &m, &sizes);
            assert_eq!(frames.iter().count(), 3);
            for (_, f) in frames.iter() {
                assert!(contains_rect(&inner, &f));
            }
        }
    }

    #[test]
    fn test_horizontal_frames_do_not_overlap() {
        let m = metrics(1, 4, 8);
        let sizes = SlotSizes::new()
            .label(Size::new(30, 12))
            .sub_accessory(Size::new(30, 12))
            .accessory(Size::new(30, 12));

        let frames = layout_cell(CellLayout::Horizontal, Size::new(160, 20), &m, &sizes);
        let label = frames.label.unwrap();
        let sub = frames.sub_accessory.unwrap();
        let accessory = frames.accessory.unwrap();

        assert!(!overlaps(&label, &sub));
        assert!(!overlaps(&label, &accessory));
        assert!(!overlaps(&sub, &accessory));
    }

    #[test]
    fn test_frames_iter_order() {
        let sizes = SlotSizes::new()
            .sub_accessory(Size::new(10, 10))
            .label(Size::new(10, 10))
            .accessory(Size::new(10, 10));
        let frames = layout_cell(
            CellLayout::Horizontal,
            Size::new(200, 20),
            &CellMetrics::DEFAULT,
            &sizes,
        );

        let mut order = frames.iter().map(|(slot, _)| slot);
        assert_eq!(order.next(), Some(Slot::Label));
        assert_eq!(order.next(), Some(Slot::Accessory));
        assert_eq!(order.next(), Some(Slot::SubAccessory));
        assert_eq!(order.next(), None);
    }

    #[test]
    fn test_layout_is_deterministic() {
        let sizes = SlotSizes::new()
            .label(Size::new(64, 14))
            .accessory(Size::new(12, 12));
        let a = layout_cell(
            CellLayout::HorizontalRightOverlap,
            Size::new(120, 24),
            &CellMetrics::DEFAULT,
            &sizes,
        );
        let b = layout_cell(
            CellLayout::HorizontalRightOverlap,
            Size::new(120, 24),
            &CellMetrics::DEFAULT,
            &sizes,
        );
        assert_eq!(a, b);
    }

    #[test]
    fn test_cell_layout_default_and_axis() {
        assert_eq!(CellLayout::default(), CellLayout::Horizontal);
        assert!(CellLayout::Horizontal.is_horizontal());
        assert!(CellLayout::HorizontalRightOverlap.is_horizontal());
        assert!(!CellLayout::Vertical.is_horizontal());
    }

    #[test]
    fn test_slot_sizes_get() {
        let sizes = SlotSizes::new().accessory(Size::new(3, 4));
        assert_eq!(sizes.get(Slot::Label), None);
        assert_eq!(sizes.get(Slot::Accessory), Some(Size::new(3, 4)));
        assert_eq!(sizes.get(Slot::SubAccessory), None);
    }
}
