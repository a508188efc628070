#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One angular sample reported by the sensor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Measurement {
    /// Angle in integer degrees, always in [0, 360).
    pub angle: u16,
    /// Distance to an object (in mm). 0 means no valid reading.
    pub distance: u16,
}

/// Decoded content of one sensor frame: four consecutive angular samples
/// plus the rotation speed the sensor reported for that frame.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Reading {
    pub rpm: f32,
    pub samples: [Measurement; 4],
}
