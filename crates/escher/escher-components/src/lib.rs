//! Escher cell components
//!
//! Concrete views and list cells built on the escher-system layout engine.
//!
//! # Components
//!
//! - `TextView` - Single-line static text
//! - `ChevronView` - Disclosure arrow accessory
//! - `SwitchView` - On/off toggle accessory
//! - `TableCell` - Bordered cell with label, accessory and sub-accessory slots
//! - `EvenOddCell` / `EvenOddTextCell` - Striped rows
//!
//! # Example
//!
//! ```
//! use escher_components::prelude::*;
//! use escher_system::prelude::*;
//! use embedded_graphics::mock_display::MockDisplay;
//! use embedded_graphics::pixelcolor::Rgb565;
//! use embedded_graphics::prelude::*;
//! use embedded_graphics::primitives::Rectangle;
//!
//! let mut cell = TableCell::new(CellLayout::Horizontal)
//!     .with_label(TextView::new("Sound").size(TextSize::Small))
//!     .with_accessory(ChevronView::new());
//! cell.set_frame(Rectangle::new(Point::zero(), Size::new(64, 16)), false);
//!
//! let mut display = MockDisplay::<Rgb565>::new();
//! display.set_allow_overdraw(true);
//! cell.draw(&mut display)?;
//! # Ok::<(), core::convert::Infallible>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

pub mod chevron_view;
pub mod even_odd_cell;
pub mod switch_view;
pub mod table_cell;
pub mod text_view;

/// Glob-import of every view and cell type.
pub mod prelude {
    pub use crate::chevron_view::*;
    pub use crate::even_odd_cell::*;
    pub use crate::switch_view::*;
    pub use crate::table_cell::*;
    pub use crate::text_view::*;
}
