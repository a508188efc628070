use crate::backend::DisplayBackend;
use crate::error::ViewError;
use crate::framebuffer::FrameBuffer;
use crate::grid;
use crate::polar::PolarPlot;
use crate::time::sleep_ms;
use crate::touch::ZoomSlider;
use crate::widgets;
use lds_data::{DistanceTable, Reading};
use std::sync::mpsc::Receiver;
use std::time::{Duration, Instant};

/// Min/max recomputation and rpm label cadence.
const STATS_INTERVAL: Duration = Duration::from_millis(100);
/// Plot pass cadence.
const RENDER_INTERVAL: Duration = Duration::from_millis(30);
/// Unconditional grid redraw cadence, to shake out accumulated pixel
/// damage from imperfect healing.
const GRID_RESYNC_INTERVAL: Duration = Duration::from_millis(5000);
const RPM_REDRAW_THRESHOLD: f32 = 0.2;

/// All mutable viewer state, owned by the main loop.
pub struct App {
    pub(crate) distances: DistanceTable,
    pub(crate) plot: PolarPlot,
    pub(crate) slider: ZoomSlider,
    pub(crate) rpm: f32,
    pub(crate) shown_rpm: f32,
    pub(crate) range: (u16, u16),
    pub(crate) grid_dirty: bool,
}

impl App {
    pub fn new() -> App {
        App {
            distances: DistanceTable::new(),
            plot: PolarPlot::new(),
            slider: ZoomSlider::new(),
            rpm: 0.0,
            shown_rpm: 0.0,
            range: (2000, 0),
            grid_dirty: true,
        }
    }

    /// Feeds one touch poll through the slider; a committed zoom change
    /// redraws the slider and invalidates the grid.
    pub(crate) fn handle_touch(
        &mut self,
        fb: &mut FrameBuffer,
        touch: Option<(i32, i32)>,
    ) -> Result<(), ViewError> {
        if let Some(zoom) = self.slider.update(touch) {
            widgets::draw_slider(fb, zoom)?;
            self.grid_dirty = true;
        }
        Ok(())
    }

    pub(crate) fn apply_reading(&mut self, reading: &Reading) {
        for sample in reading.samples.iter() {
            self.distances.record(*sample);
        }
        self.rpm = reading.rpm;
    }

    pub(crate) fn stats_tick(&mut self, fb: &mut FrameBuffer) -> Result<(), ViewError> {
        self.range = self.distances.range();
        if (self.rpm - self.shown_rpm).abs() > RPM_REDRAW_THRESHOLD {
            widgets::draw_rpm(fb, self.rpm)?;
            self.shown_rpm = self.rpm;
        }
        Ok(())
    }

    /// Redraws the grid when dirty, then runs one plot pass. Returns the
    /// number of angles the pass updated.
    pub(crate) fn render_tick(&mut self, fb: &mut FrameBuffer) -> Result<usize, ViewError> {
        let repaint_all = self.grid_dirty;
        if repaint_all {
            grid::draw_grid(fb, self.slider.zoom())?;
            self.grid_dirty = false;
        }
        let updates = self.plot.pass(
            fb,
            &self.distances,
            self.slider.zoom(),
            self.range,
            repaint_all,
        )?;
        Ok(updates)
    }
}

impl Default for App {
    fn default() -> App {
        App::new()
    }
}

/// Cooperative main loop: touch, serial drain, then the periodic tasks,
/// all on this one thread.
pub fn run(
    backend: &mut dyn DisplayBackend,
    reading_rx: &Receiver<Reading>,
    fb: &mut FrameBuffer,
) -> Result<(), ViewError> {
    let mut app = App::new();

    fb.fill(grid::BACKGROUND);
    widgets::draw_title(fb)?;
    widgets::draw_slider(fb, app.slider.zoom())?;
    app.render_tick(fb)?;
    backend.present(fb)?;

    let mut last_stats = Instant::now();
    let mut last_render = Instant::now();
    let mut last_resync = Instant::now();

    loop {
        if !backend.pump()? {
            return Ok(());
        }

        app.handle_touch(fb, backend.touch())?;

        while let Ok(reading) = reading_rx.try_recv() {
            app.apply_reading(&reading);
        }

        if last_stats.elapsed() >= STATS_INTERVAL {
            app.stats_tick(fb)?;
            last_stats = Instant::now();
        }

        if last_render.elapsed() >= RENDER_INTERVAL {
            app.render_tick(fb)?;
            last_render = Instant::now();
        }

        if last_resync.elapsed() >= GRID_RESYNC_INTERVAL {
            app.grid_dirty = true;
            app.render_tick(fb)?;
            last_resync = Instant::now();
        }

        backend.present(fb)?;
        sleep_ms(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lds_data::Measurement;

    fn reading(rpm: f32, angle: u16, distance: u16) -> Reading {
        let mut samples = [Measurement::default(); 4];
        samples[0] = Measurement { angle, distance };
        Reading { rpm, samples }
    }

    #[test]
    fn test_apply_reading_updates_table_and_rpm() {
        let mut app = App::new();
        app.apply_reading(&reading(4.5, 10, 700));
        assert_eq!(app.distances.get(10), 700);
        assert_eq!(app.rpm, 4.5);
    }

    #[test]
    fn test_first_render_tick_paints_grid_and_clears_dirty() {
        let mut app = App::new();
        let mut fb = FrameBuffer::new(800, 480);
        assert!(app.grid_dirty);
        let updates = app.render_tick(&mut fb).unwrap();
        assert_eq!(updates, 360);
        assert!(!app.grid_dirty);

        // With nothing changed, the next tick is a no-op pass.
        let updates = app.render_tick(&mut fb).unwrap();
        assert_eq!(updates, 0);
    }

    #[test]
    fn test_zoom_commit_invalidates_grid() {
        let mut app = App::new();
        let mut fb = FrameBuffer::new(800, 480);
        app.render_tick(&mut fb).unwrap();
        assert!(!app.grid_dirty);

        // A drag on the slider track commits a zoom change.
        app.handle_touch(&mut fb, Some((700, 95))).unwrap();
        assert!(app.grid_dirty);

        // A jitter-sized wiggle does not.
        app.grid_dirty = false;
        app.handle_touch(&mut fb, Some((701, 95))).unwrap();
        assert!(!app.grid_dirty);
    }

    #[test]
    fn test_rpm_label_redraws_only_past_threshold() {
        let mut app = App::new();
        let mut fb = FrameBuffer::new(800, 480);

        app.apply_reading(&reading(0.1, 0, 0));
        app.stats_tick(&mut fb).unwrap();
        assert_eq!(app.shown_rpm, 0.0);

        app.apply_reading(&reading(4.7, 0, 0));
        app.stats_tick(&mut fb).unwrap();
        assert_eq!(app.shown_rpm, 4.7);
    }

    #[test]
    fn test_stats_tick_recomputes_range() {
        let mut app = App::new();
        let mut fb = FrameBuffer::new(800, 480);
        app.apply_reading(&reading(1.0, 5, 600));
        app.apply_reading(&reading(1.0, 300, 1400));
        app.stats_tick(&mut fb).unwrap();
        assert_eq!(app.range, (600, 1400));
    }
}
