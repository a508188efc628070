use crate::grid::{
    draw_spoke, scale_factor, spoke_end, BACKGROUND, MAX_RADIUS, RING_MAX_MM, RING_STEP_MM,
    SPOKE_STEP_DEG,
};
use crate::palette::color_for;
use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, Line, PrimitiveStyle};
use lds_data::table::N_ANGLES;
use lds_data::DistanceTable;

/// Filled dot of radius 2.
const POINT_DIAMETER: u32 = 5;
/// How close (in px) an erased dot must be to a static grid element before
/// that element is redrawn over the erasure.
const HEAL_TOLERANCE: f32 = 3.0;
/// Half-angle (in rad) of the ring patch redrawn as a chord.
const RING_PATCH_HALF_ANGLE: f32 = 0.03;

/// Incremental scan plot.
///
/// Keeps a shadow copy of the distance table from the previous pass and
/// only touches angles whose value changed, erasing the stale dot and
/// healing whatever static grid pixels the erasure took with it. Per-pass
/// draw work stays proportional to scene movement, not to the full sweep.
pub struct PolarPlot {
    prev: [u16; N_ANGLES],
}

impl PolarPlot {
    pub fn new() -> PolarPlot {
        PolarPlot {
            prev: [0; N_ANGLES],
        }
    }

    /// Runs one plot pass and returns the number of angles updated.
    ///
    /// With `repaint_all` the erase/heal step is skipped (the caller just
    /// redrew the grid, wiping every dot) and every known point is drawn
    /// fresh; the shadow table is synced either way.
    pub fn pass<D>(
        &mut self,
        target: &mut D,
        table: &DistanceTable,
        zoom: f32,
        range: (u16, u16),
        repaint_all: bool,
    ) -> Result<usize, D::Error>
    where
        D: DrawTarget<Color = Rgb888>,
    {
        let center = target.bounding_box().center();
        let scale = scale_factor(zoom);
        let (min, max) = range;
        let mut updates = 0;

        for angle in 0..N_ANGLES as u16 {
            let distance = table.get(angle);
            let prev = self.prev[angle as usize];
            if distance == prev && !repaint_all {
                continue;
            }

            let rad = (((angle + 180) % 360) as f32).to_radians();

            if !repaint_all && prev > 0 {
                let prev_r = (prev as f32 * scale) as i32;
                if prev_r <= MAX_RADIUS as i32 {
                    let old = Point::new(
                        center.x + (prev_r as f32 * rad.cos()) as i32,
                        center.y + (prev_r as f32 * rad.sin()) as i32,
                    );
                    Circle::with_center(old, POINT_DIAMETER)
                        .into_styled(PrimitiveStyle::with_fill(BACKGROUND))
                        .draw(target)?;
                    heal_rings(target, center, old, scale)?;
                    heal_spokes(target, center, old)?;
                }
            }

            if distance > 0 {
                let r = (distance as f32 * scale) as i32;
                if r <= MAX_RADIUS as i32 {
                    let point = Point::new(
                        center.x + (r as f32 * rad.cos()) as i32,
                        center.y + (r as f32 * rad.sin()) as i32,
                    );
                    Circle::with_center(point, POINT_DIAMETER)
                        .into_styled(PrimitiveStyle::with_fill(color_for(distance, min, max)))
                        .draw(target)?;
                }
            }

            self.prev[angle as usize] = distance;
            updates += 1;
        }

        Ok(updates)
    }
}

impl Default for PolarPlot {
    fn default() -> PolarPlot {
        PolarPlot::new()
    }
}

/// Redraws a short chord of every range ring the erased dot overlapped.
fn heal_rings<D>(target: &mut D, center: Point, old: Point, scale: f32) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb888>,
{
    let dx = (old.x - center.x) as f32;
    let dy = (old.y - center.y) as f32;
    let dist = (dx * dx + dy * dy).sqrt();

    let mut r = RING_STEP_MM;
    while r <= RING_MAX_MM {
        let radius = (r as f32 * scale) as i32;
        if radius as f32 <= MAX_RADIUS && (dist - radius as f32).abs() < HEAL_TOLERANCE {
            let theta = dy.atan2(dx);
            let patch = |t: f32| {
                Point::new(
                    center.x + (radius as f32 * t.cos()) as i32,
                    center.y + (radius as f32 * t.sin()) as i32,
                )
            };
            Line::new(
                patch(theta - RING_PATCH_HALF_ANGLE),
                patch(theta + RING_PATCH_HALF_ANGLE),
            )
            .into_styled(PrimitiveStyle::with_stroke(Rgb888::BLACK, 1))
            .draw(target)?;
        }
        r += RING_STEP_MM;
    }

    Ok(())
}

/// Redraws every angle spoke the erased dot sat on.
fn heal_spokes<D>(target: &mut D, center: Point, old: Point) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb888>,
{
    let mut angle = 0;
    while angle < 360 {
        let end = spoke_end(center, angle);
        if point_to_segment_distance(old, center, end) < HEAL_TOLERANCE {
            draw_spoke(target, center, angle)?;
        }
        angle += SPOKE_STEP_DEG;
    }
    Ok(())
}

/// Distance from `p` to the segment `a`-`b`.
pub(crate) fn point_to_segment_distance(p: Point, a: Point, b: Point) -> f32 {
    let (px, py) = (p.x as f32, p.y as f32);
    let (ax, ay) = (a.x as f32, a.y as f32);
    let (bx, by) = (b.x as f32, b.y as f32);

    let dx = px - ax;
    let dy = py - ay;
    let sx = bx - ax;
    let sy = by - ay;

    let len_sq = sx * sx + sy * sy;
    let param = if len_sq != 0.0 {
        (dx * sx + dy * sy) / len_sq
    } else {
        -1.0
    };

    let (cx, cy) = if param < 0.0 {
        (ax, ay)
    } else if param > 1.0 {
        (bx, by)
    } else {
        (ax + param * sx, ay + param * sy)
    };

    let ex = px - cx;
    let ey = py - cy;
    (ex * ex + ey * ey).sqrt()
}
