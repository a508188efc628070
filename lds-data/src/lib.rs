pub mod measurement;
pub mod table;

pub use measurement::{Measurement, Reading};
pub use table::DistanceTable;
