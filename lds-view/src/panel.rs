use embedded_graphics::mono_font::ascii::FONT_10X20;
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_graphics::text::{Alignment, Baseline, Text, TextStyleBuilder};

pub(crate) const PANEL_BACKGROUND: Rgb888 = Rgb888::new(0x15, 0x15, 0x15);
pub(crate) const COLOR_ORANGE: Rgb888 = Rgb888::new(0xFF, 0x55, 0x00);
pub(crate) const COLOR_PINK: Rgb888 = Rgb888::new(0xFF, 0x00, 0xAA);
pub(crate) const COLOR_TEAL: Rgb888 = Rgb888::new(0x00, 0xAA, 0xAA);
pub(crate) const COLOR_LIME: Rgb888 = Rgb888::new(0xAA, 0xFF, 0x00);

const BAR_WIDTH: u32 = 110;
const BAR_HEIGHT: u32 = 6;
const PRINT_BAR_WIDTH: u32 = 300;

enum BarSide {
    Above,
    Below,
}

fn label_centered<D>(target: &mut D, x: i32, y: i32, text: &str) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb888>,
{
    let character_style = MonoTextStyle::new(&FONT_10X20, Rgb888::WHITE);
    let text_style = TextStyleBuilder::new()
        .alignment(Alignment::Center)
        .baseline(Baseline::Top)
        .build();
    Text::with_text_style(text, Point::new(x, y), character_style, text_style).draw(target)?;
    Ok(())
}

/// Temperature readout: value text centered under its 100x100 tile.
/// Icon fonts are out of scope, so the tile itself stays empty.
fn temperature_section<D>(target: &mut D, x: i32, y: i32, temp_text: &str) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb888>,
{
    label_centered(target, x, y + 60, temp_text)
}

/// One menu entry: centered label under its 110x110 tile, with a colored
/// accent bar above or below.
fn menu_item<D>(
    target: &mut D,
    x: i32,
    y: i32,
    text: &str,
    bar_color: Rgb888,
    bar_side: BarSide,
    bar_width: u32,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb888>,
{
    label_centered(target, x, y + 65, text)?;

    let bar_top_left = match bar_side {
        BarSide::Above => Point::new(x - (bar_width as i32) / 2, y - 76),
        BarSide::Below => Point::new(x - (bar_width as i32) / 2, y + 95),
    };
    Rectangle::new(bar_top_left, Size::new(bar_width, BAR_HEIGHT))
        .into_styled(PrimitiveStyle::with_fill(bar_color))
        .draw(target)?;
    Ok(())
}

/// The whole printer control screen, laid out for an 800x480 canvas.
pub fn draw_panel<D>(target: &mut D) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb888>,
{
    target.clear(PANEL_BACKGROUND)?;

    temperature_section(target, 150, 120, "17C / 0C")?;
    temperature_section(target, 150, 320, "23C / 0C")?;

    menu_item(target, 400, 120, "Home", COLOR_ORANGE, BarSide::Above, BAR_WIDTH)?;
    menu_item(target, 400, 320, "Filament", COLOR_TEAL, BarSide::Below, BAR_WIDTH)?;
    menu_item(target, 650, 120, "Actions", COLOR_PINK, BarSide::Above, BAR_WIDTH)?;
    menu_item(
        target,
        650,
        320,
        "Configuration",
        COLOR_LIME,
        BarSide::Below,
        BAR_WIDTH,
    )?;
    menu_item(
        target,
        525,
        220,
        "Print",
        COLOR_PINK,
        BarSide::Below,
        PRINT_BAR_WIDTH,
    )?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framebuffer::FrameBuffer;

    #[test]
    fn test_panel_background_and_bars() {
        let mut fb = FrameBuffer::new(800, 480);
        draw_panel(&mut fb).unwrap();

        assert_eq!(fb.pixel(10, 400), Some(PANEL_BACKGROUND));
        // Home: accent bar above the tile.
        assert_eq!(fb.pixel(400, 46), Some(COLOR_ORANGE));
        // Filament: accent bar below the label.
        assert_eq!(fb.pixel(400, 417), Some(COLOR_TEAL));
        // Actions above, Configuration below.
        assert_eq!(fb.pixel(650, 46), Some(COLOR_PINK));
        assert_eq!(fb.pixel(650, 417), Some(COLOR_LIME));
        // Print: the long bar spans 300 px.
        assert_eq!(fb.pixel(525 - 149, 317), Some(COLOR_PINK));
        assert_eq!(fb.pixel(525 + 149, 317), Some(COLOR_PINK));
    }

    #[test]
    fn test_panel_labels_are_inked() {
        let mut fb = FrameBuffer::new(800, 480);
        draw_panel(&mut fb).unwrap();

        // "Home" label row: white glyph pixels near (400, 185).
        let mut inked = false;
        for x in 340..460 {
            for y in 185..205 {
                if fb.pixel(x, y) == Some(Rgb888::WHITE) {
                    inked = true;
                }
            }
        }
        assert!(inked);
    }
}
