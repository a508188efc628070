use crate::measurement::Measurement;

/// Number of angular buckets, one per integer degree.
pub const N_ANGLES: usize = 360;

/// Seed for the minimum of a range scan; matches the reference range of the
/// sensor so an empty table yields (2000, 0).
const RANGE_MIN_SEED: u16 = 2000;

/// Last known distance per integer degree.
///
/// Cells hold the most recent valid distance in mm for each angle; 0 means
/// the angle has no known reading. Updates are sparse: a sample only
/// overwrites its own angle, and zero-distance samples are ignored so a
/// dropout does not erase an earlier reading.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DistanceTable {
    cells: [u16; N_ANGLES],
}

impl DistanceTable {
    pub fn new() -> DistanceTable {
        DistanceTable {
            cells: [0; N_ANGLES],
        }
    }

    /// Distance in mm recorded for `angle` (taken modulo 360), 0 if unknown.
    pub fn get(&self, angle: u16) -> u16 {
        self.cells[(angle as usize) % N_ANGLES]
    }

    /// Stores a sample. Zero-distance samples are dropped.
    pub fn record(&mut self, sample: Measurement) {
        if sample.distance > 0 {
            self.cells[(sample.angle as usize) % N_ANGLES] = sample.distance;
        }
    }

    /// (min, max) over all nonzero cells. An empty table yields (2000, 0).
    pub fn range(&self) -> (u16, u16) {
        let mut min = RANGE_MIN_SEED;
        let mut max = 0;
        for &d in self.cells.iter() {
            if d > 0 {
                min = min.min(d);
                max = max.max(d);
            }
        }
        (min, max)
    }
}

impl Default for DistanceTable {
    fn default() -> DistanceTable {
        DistanceTable::new()
    }
}
