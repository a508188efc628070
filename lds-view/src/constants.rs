pub(crate) const PACKET_SIZE: usize = 22;
pub(crate) const PACKET_SYNC_BYTE: u8 = 0xFA;
pub(crate) const ANGLE_BUCKET_BASE: u8 = 0xA0;
// 90 buckets of 4 samples cover the full turn; anything above is a desynced
// or corrupt frame.
pub(crate) const N_ANGLE_BUCKETS: u8 = 90;
pub(crate) const SAMPLES_PER_PACKET: usize = 4;
pub(crate) const RPM_DIVISOR: f32 = 64.0;
pub(crate) const DISTANCE_HIGH_MASK: u8 = 0x3F;
pub(crate) const DISTANCE_INVALID_FLAG: u8 = 0x80;
// The sensor streams at a fixed rate; there is no command protocol.
pub(crate) const LDS_BAUD_RATE: u32 = 115_200;
pub(crate) const N_READ_TRIALS: usize = 3;
