//! Escher cell system
//!
//! Layout and drawing core for table-based list cells on small embedded
//! color displays.
//!
//! # Architecture
//!
//! - Metrics: [`metrics::CellMetrics`] (separator thickness and margins)
//! - Geometry: margin-aware clamping helpers shared by the layout passes
//! - Layout engine: [`cell_layout::layout_cell`], a pure function that
//!   places a label, an accessory and a sub-accessory inside a bordered cell
//! - Views: the [`view::View`] contract consumed by the engine
//! - Rendering: palette and border/background painting on top of
//!   embedded-graphics
//!
//! # Example
//!
//! ```
//! use escher_system::prelude::*;
//! use embedded_graphics::prelude::Size;
//!
//! let sizes = SlotSizes::new().label(Size::new(150, 20));
//! let metrics = CellMetrics::builder()
//!     .vertical_margin(4)
//!     .label_margin(4)
//!     .build()
//!     .unwrap();
//!
//! let frames = layout_cell(CellLayout::Vertical, Size::new(200, 40), &metrics, &sizes);
//! let label = frames.label.unwrap();
//! assert_eq!(label.top_left.x, 5);
//! assert_eq!(label.size, Size::new(190, 20));
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

pub mod cell_layout;
pub mod geometry;
pub mod metrics;
pub mod palette;
pub mod render;
pub mod view;

/// Glob-import of the layout engine, metrics, palette and view types.
pub mod prelude {
    // Layout engine (public API)
    pub use crate::cell_layout::{layout_cell, CellFrames, CellLayout, Slot, SlotSizes};

    // Metrics and configuration
    pub use crate::metrics::{CellMetrics, CellMetricsBuilder, MetricsError};

    // Views
    pub use crate::view::{Empty, View, ViewFrame};

    // Rendering
    pub use crate::palette::{cell_background, Palette};
    pub use crate::render::*;
}
