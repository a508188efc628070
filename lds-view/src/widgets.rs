use crate::grid::BACKGROUND;
use embedded_graphics::mono_font::ascii::FONT_10X20;
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_graphics::text::{Baseline, Text};

pub(crate) const SLIDER_X: i32 = 650;
pub(crate) const SLIDER_Y: i32 = 80;
pub(crate) const SLIDER_WIDTH: i32 = 120;
pub(crate) const SLIDER_HEIGHT: i32 = 30;
pub(crate) const SLIDER_THUMB_WIDTH: i32 = 30;
const SLIDER_TRACK_COLOR: Rgb888 = Rgb888::new(0x55, 0x55, 0x55);
const SLIDER_THUMB_COLOR: Rgb888 = Rgb888::BLUE;

const RPM_RECT_X: i32 = 650;
const RPM_RECT_Y: i32 = 10;
const RPM_RECT_WIDTH: u32 = 140;
const RPM_RECT_HEIGHT: u32 = 40;

fn text_style() -> MonoTextStyle<'static, Rgb888> {
    MonoTextStyle::new(&FONT_10X20, Rgb888::BLACK)
}

pub fn draw_title<D>(target: &mut D) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb888>,
{
    Text::with_baseline("Xiaomi LIDAR", Point::new(10, 10), text_style(), Baseline::Top)
        .draw(target)?;
    Ok(())
}

/// Clears the label strip and prints the current rotation speed.
pub fn draw_rpm<D>(target: &mut D, rpm: f32) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb888>,
{
    Rectangle::new(
        Point::new(RPM_RECT_X, RPM_RECT_Y),
        Size::new(RPM_RECT_WIDTH, RPM_RECT_HEIGHT),
    )
    .into_styled(PrimitiveStyle::with_fill(BACKGROUND))
    .draw(target)?;
    Text::with_baseline(
        &format!("RPM: {:.1}", rpm),
        Point::new(RPM_RECT_X + 10, RPM_RECT_Y + 10),
        text_style(),
        Baseline::Top,
    )
    .draw(target)?;
    Ok(())
}

/// Track, thumb and numeric label of the zoom slider.
pub fn draw_slider<D>(target: &mut D, zoom: f32) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb888>,
{
    Rectangle::new(
        Point::new(SLIDER_X, SLIDER_Y),
        Size::new(SLIDER_WIDTH as u32, SLIDER_HEIGHT as u32),
    )
    .into_styled(PrimitiveStyle::with_fill(SLIDER_TRACK_COLOR))
    .draw(target)?;

    let thumb_x =
        SLIDER_X + ((zoom - 0.5) * ((SLIDER_WIDTH - SLIDER_THUMB_WIDTH) as f32) / 2.0) as i32;
    Rectangle::new(
        Point::new(thumb_x, SLIDER_Y),
        Size::new(SLIDER_THUMB_WIDTH as u32, SLIDER_HEIGHT as u32),
    )
    .into_styled(PrimitiveStyle::with_fill(SLIDER_THUMB_COLOR))
    .draw(target)?;

    Rectangle::new(
        Point::new(SLIDER_X, SLIDER_Y - 30),
        Size::new(SLIDER_WIDTH as u32, 25),
    )
    .into_styled(PrimitiveStyle::with_fill(BACKGROUND))
    .draw(target)?;
    Text::with_baseline(
        &format!("Zoom: {:.1}x", zoom),
        Point::new(SLIDER_X + 5, SLIDER_Y - 25),
        text_style(),
        Baseline::Top,
    )
    .draw(target)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framebuffer::FrameBuffer;

    #[test]
    fn test_slider_thumb_tracks_zoom() {
        let mut fb = FrameBuffer::new(800, 480);
        draw_slider(&mut fb, 0.5).unwrap();
        // Thumb flush left at minimum zoom.
        assert_eq!(fb.pixel(SLIDER_X + 1, SLIDER_Y + 15), Some(SLIDER_THUMB_COLOR));
        assert_eq!(
            fb.pixel(SLIDER_X + SLIDER_THUMB_WIDTH + 5, SLIDER_Y + 15),
            Some(SLIDER_TRACK_COLOR)
        );

        draw_slider(&mut fb, 2.5).unwrap();
        // At maximum zoom the thumb starts 90 px in.
        assert_eq!(
            fb.pixel(SLIDER_X + (SLIDER_WIDTH - SLIDER_THUMB_WIDTH) + 5, SLIDER_Y + 15),
            Some(SLIDER_THUMB_COLOR)
        );
        assert_eq!(fb.pixel(SLIDER_X + 1, SLIDER_Y + 15), Some(SLIDER_TRACK_COLOR));
    }

    #[test]
    fn test_rpm_label_clears_strip() {
        let mut fb = FrameBuffer::new(800, 480);
        draw_rpm(&mut fb, 4.7).unwrap();
        assert_eq!(fb.pixel(RPM_RECT_X + 1, RPM_RECT_Y + 1), Some(BACKGROUND));
        // Some glyph ink lands inside the strip.
        let mut inked = false;
        for x in RPM_RECT_X..RPM_RECT_X + RPM_RECT_WIDTH as i32 {
            for y in RPM_RECT_Y..RPM_RECT_Y + RPM_RECT_HEIGHT as i32 {
                if fb.pixel(x, y) == Some(Rgb888::BLACK) {
                    inked = true;
                }
            }
        }
        assert!(inked);
    }
}
