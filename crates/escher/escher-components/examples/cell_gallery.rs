//! Cell gallery
//!
//! Renders a settings-style list in every layout mode on the desktop
//! simulator. Run with:
//!
//! ```text
//! RUST_LOG=escher_components=debug cargo run -p escher-components \
//!     --example cell_gallery --features simulator
//! ```

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, Window};
use escher_components::prelude::*;
use escher_system::prelude::*;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const SCREEN: Size = Size::new(320, 240);
const ROW_HEIGHT: u32 = 28;

fn row(index: u32) -> Rectangle {
    Rectangle::new(
        Point::new(0, i32::try_from(index * ROW_HEIGHT).unwrap_or(i32::MAX)),
        Size::new(SCREEN.width, ROW_HEIGHT),
    )
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "escher_components=info".into()))
        .with(fmt::layer())
        .init();

    let mut display = SimulatorDisplay::<Rgb565>::new(SCREEN);
    display.clear(Palette::WALL_SCREEN)?;

    tracing::info!("rendering cell gallery");

    let mut wifi = TableCell::new(CellLayout::Horizontal)
        .with_label(TextView::new("Wi-Fi"))
        .with_accessory(SwitchView::new(true));
    wifi.set_frame(row(0), false);
    wifi.draw(&mut display)?;

    let mut language = TableCell::new(CellLayout::Horizontal)
        .with_label(TextView::new("Language"))
        .with_sub_accessory(
            TextView::new("English")
                .size(TextSize::Small)
                .color(Palette::TEXT_SECONDARY),
        )
        .with_accessory(ChevronView::new());
    language.set_frame(row(1), false);
    language.set_highlighted(true);
    language.draw(&mut display)?;

    // Long label: truncated before the value instead of pushing it away.
    let mut storage = TableCell::new(CellLayout::HorizontalRightOverlap)
        .with_label(TextView::new("Storage and backup settings"))
        .with_sub_accessory(
            TextView::new("12 GB")
                .size(TextSize::Small)
                .color(Palette::TEXT_SECONDARY),
        )
        .with_accessory(ChevronView::new());
    storage.set_frame(row(2), false);
    storage.draw(&mut display)?;

    let mut brightness = TableCell::new(CellLayout::Vertical)
        .with_label(TextView::new("Brightness").size(TextSize::Small))
        .with_sub_accessory(TextView::new("Auto").size(TextSize::Small))
        .with_accessory(SwitchView::new(false));
    brightness.set_frame(
        Rectangle::new(row(3).top_left, Size::new(SCREEN.width, 60)),
        false,
    );
    brightness.draw(&mut display)?;

    let values = ["3.1415", "2.7182", "1.4142"];
    for (i, value) in (0u32..).zip(values) {
        let mut cell = EvenOddTextCell::new();
        cell.set_text(value, Palette::TEXT);
        cell.set_even(i % 2 == 0);
        let top = row(3).top_left.y + 60 + i32::try_from(i * 20).unwrap_or(0);
        cell.set_frame(
            Rectangle::new(Point::new(0, top), Size::new(SCREEN.width / 2, 20)),
            false,
        );
        cell.draw(&mut display)?;
    }

    let output_settings = OutputSettingsBuilder::new().scale(2).build();
    let mut window = Window::new("Escher cells", &output_settings);
    window.show_static(&display);

    Ok(())
}
