use embedded_graphics::mono_font::ascii::FONT_6X10;
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, Line, PrimitiveStyle};
use embedded_graphics::text::{Baseline, Text};

/// Largest radius (in px) the plot may occupy around the screen center.
pub(crate) const MAX_RADIUS: f32 = 215.0;
/// Distance (in mm) that maps onto MAX_RADIUS at zoom 1.0.
pub(crate) const REFERENCE_RANGE_MM: f32 = 2000.0;
pub(crate) const RING_STEP_MM: u16 = 400;
pub(crate) const RING_MAX_MM: u16 = 2000;
pub(crate) const SPOKE_STEP_DEG: i32 = 30;
pub(crate) const BACKGROUND: Rgb888 = Rgb888::WHITE;

pub(crate) fn scale_factor(zoom: f32) -> f32 {
    (MAX_RADIUS / REFERENCE_RANGE_MM) * zoom
}

/// Rim endpoint of the spoke for `angle_deg`.
///
/// The -270 degree offset and the swapped sin/cos (relative to the plot
/// point mapping) align sensor-forward with screen-up. Changing either
/// silently rotates the displayed scan.
pub(crate) fn spoke_end(center: Point, angle_deg: i32) -> Point {
    let rad = ((angle_deg - 270) as f32).to_radians();
    Point::new(
        center.x + (MAX_RADIUS * rad.sin()) as i32,
        center.y + (MAX_RADIUS * rad.cos()) as i32,
    )
}

pub(crate) fn draw_spoke<D>(target: &mut D, center: Point, angle_deg: i32) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb888>,
{
    Line::new(center, spoke_end(center, angle_deg))
        .into_styled(PrimitiveStyle::with_stroke(Rgb888::BLACK, 1))
        .draw(target)
}

/// Redraws the static plot background: range rings with mm labels and
/// angle spokes with degree labels, clipped to the plot disk.
pub fn draw_grid<D>(target: &mut D, zoom: f32) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb888>,
{
    let center = target.bounding_box().center();
    let scale = scale_factor(zoom);
    let label_style = MonoTextStyle::new(&FONT_6X10, Rgb888::BLACK);

    Circle::with_center(center, (MAX_RADIUS as u32 + 10) * 2 + 1)
        .into_styled(PrimitiveStyle::with_fill(BACKGROUND))
        .draw(target)?;

    let mut r = RING_STEP_MM;
    while r <= RING_MAX_MM {
        let radius = (r as f32 * scale) as i32;
        if radius as f32 <= MAX_RADIUS {
            Circle::with_center(center, (radius as u32) * 2 + 1)
                .into_styled(PrimitiveStyle::with_stroke(Rgb888::BLACK, 1))
                .draw(target)?;
            Text::with_baseline(
                &format!("{} mm", r),
                Point::new(center.x + radius, center.y - (r as i32) / 40),
                label_style,
                Baseline::Top,
            )
            .draw(target)?;
        }
        r += RING_STEP_MM;
    }

    let mut angle = 0;
    while angle < 360 {
        draw_spoke(target, center, angle)?;
        Text::with_baseline(
            &format!("{}", angle),
            spoke_end(center, angle),
            label_style,
            Baseline::Top,
        )
        .draw(target)?;
        angle += SPOKE_STEP_DEG;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framebuffer::FrameBuffer;

    #[test]
    fn test_grid_fills_plot_disk() {
        let mut fb = FrameBuffer::new(800, 480);
        draw_grid(&mut fb, 1.0).unwrap();

        // A spoke passes through the center, so the center pixel is ink.
        assert_eq!(fb.pixel(400, 240), Some(Rgb888::BLACK));
        // Just off the spokes and rings the disk is background.
        assert_eq!(fb.pixel(400 + 30, 240 + 7), Some(BACKGROUND));
        // Far outside the disk nothing is painted.
        assert_eq!(fb.pixel(20, 460), Some(Rgb888::BLACK));
    }

    /// Looks for ring ink at the given radius inside a 12-18 degree wedge,
    /// which no spoke or label crosses.
    fn ring_inked(fb: &FrameBuffer, radius: f32) -> bool {
        for step in 0..=20 {
            let t = (12.0 + 0.3 * step as f32).to_radians();
            let x = (400.0 + radius * t.cos()) as i32;
            let y = (240.0 + radius * t.sin()) as i32;
            for dx in -1..=1 {
                for dy in -1..=1 {
                    if fb.pixel(x + dx, y + dy) == Some(Rgb888::BLACK) {
                        return true;
                    }
                }
            }
        }
        false
    }

    #[test]
    fn test_ring_radius_scales_with_zoom() {
        // 400 mm ring: radius 43 px at zoom 1.0.
        let mut fb = FrameBuffer::new(800, 480);
        draw_grid(&mut fb, 1.0).unwrap();
        assert!(ring_inked(&fb, 43.0));
        assert!(!ring_inked(&fb, 64.0));

        // At zoom 2.0 the same ring lands at 86 px.
        let mut fb = FrameBuffer::new(800, 480);
        draw_grid(&mut fb, 2.0).unwrap();
        assert!(ring_inked(&fb, 86.0));
    }

    #[test]
    fn test_rings_beyond_max_radius_are_skipped() {
        // At zoom 2.5 only the 400 and 800 mm rings fit inside MAX_RADIUS;
        // 1200 mm would land at 322 px and is dropped.
        let mut fb = FrameBuffer::new(800, 480);
        draw_grid(&mut fb, 2.5).unwrap();

        assert!(ring_inked(&fb, 107.0));
        assert!(ring_inked(&fb, 215.0));
        // Between the two surviving rings the disk stays clean.
        assert!(!ring_inked(&fb, 150.0));
        assert!(!ring_inked(&fb, 161.0));
    }
}
