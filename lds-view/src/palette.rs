use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;

/// Maps a distance onto a green -> yellow -> red ramp over [min, max].
///
/// The lower half of the window ramps green to yellow, the upper half
/// yellow to red. Values outside the window clamp to the endpoints, and a
/// degenerate window (max <= min) pins everything to green.
pub(crate) fn color_for(value: u16, min: u16, max: u16) -> Rgb888 {
    let ratio = if max <= min {
        0.0
    } else {
        (value as f32 - min as f32) / (max as f32 - min as f32)
    };
    let ratio = ratio.clamp(0.0, 1.0);

    if ratio < 0.5 {
        Rgb888::new((255.0 * (ratio * 2.0)) as u8, 255, 0)
    } else {
        Rgb888::new(255, (255.0 - 255.0 * ((ratio - 0.5) * 2.0)) as u8, 0)
    }
}
