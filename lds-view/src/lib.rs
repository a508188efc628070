use std::sync::mpsc;

mod constants;
mod driver_threads;
mod error;
mod numeric;
mod packet;
mod palette;
mod polar;
mod serial;
mod time;
mod touch;
mod widgets;
mod window;

pub mod app;
pub mod backend;
pub mod config;
pub mod framebuffer;
pub mod grid;
pub mod panel;

pub use crate::driver_threads::{join, DriverThreads};
pub use crate::error::ViewError;
pub use crate::packet::{decode_packet, PacketAssembler};

use crate::driver_threads::{parse_packets, read_device_signal};
use crossbeam_channel::bounded;
use lds_data::Reading;

/// Function to launch the LDS sensor pipeline.
///
/// Spawns one thread draining the serial port and one thread assembling
/// and decoding frames; decoded readings arrive on the returned channel.
///
/// # Arguments
///
/// * `port_name` - Serial port name such as `/dev/ttyUSB0`.
pub fn run_driver(
    port_name: &str,
) -> Result<(DriverThreads, mpsc::Receiver<Reading>), ViewError> {
    let maybe_port = serial::open_port(port_name);

    let mut port = match maybe_port {
        Ok(port) => port,
        Err(e) => {
            eprintln!("Failed to open \"{}\". Error: {}", port_name, e);
            std::process::exit(1);
        }
    };

    if !cfg!(test) {
        // In testing, keep pre-written dummy frames readable
        serial::flush(&mut port)?;
    }

    let (reader_terminator_tx, reader_terminator_rx) = bounded(10);
    let (parser_terminator_tx, parser_terminator_rx) = bounded(10);
    let (raw_data_tx, raw_data_rx) = mpsc::sync_channel::<Vec<u8>>(200);

    let reader_thread = Some(std::thread::spawn(move || {
        read_device_signal(&mut port, raw_data_tx, reader_terminator_rx);
    }));

    let (reading_tx, reading_rx) = mpsc::sync_channel::<Reading>(360);
    let parser_thread = Some(std::thread::spawn(move || {
        parse_packets(raw_data_rx, parser_terminator_rx, reading_tx);
    }));

    let driver_threads = DriverThreads {
        reader_thread,
        parser_thread,
        reader_terminator_tx,
        parser_terminator_tx,
    };

    Ok((driver_threads, reading_rx))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::sleep_ms;
    use lds_data::Measurement;
    use serialport::{SerialPort, TTYPort};
    use std::io::Write;

    #[test]
    fn test_run_driver_decodes_stream() {
        let (mut master, slave) = TTYPort::pair().expect("Unable to create ptty pair");

        let name = slave.name().unwrap();
        let (threads, reading_rx) = run_driver(&name).unwrap();

        let mut frame = [0u8; 22];
        frame[0] = 0xFA;
        frame[1] = 0xA1; // bucket 1 -> angles 4..=7
        frame[2] = 0x01; // rpm = 0x012C / 64
        frame[3] = 0x2C;
        frame[4] = 0xE8; // 1000 mm
        frame[5] = 0x03;
        frame[8] = 0x00; // invalid reading flag set
        frame[9] = 0x80;
        frame[12] = 0x34; // 0x1234 mm
        frame[13] = 0x12;

        // Garbage before the sync byte is skipped over.
        let mut stream = vec![0x00, 0x55, 0x21];
        stream.extend_from_slice(&frame);
        master.write(&stream).unwrap();

        let reading = reading_rx.recv().unwrap();
        assert_eq!(reading.rpm, 300.0 / 64.0);
        assert_eq!(
            reading.samples[0],
            Measurement {
                angle: 4,
                distance: 1000
            }
        );
        assert_eq!(
            reading.samples[1],
            Measurement {
                angle: 5,
                distance: 0
            }
        );
        assert_eq!(
            reading.samples[2],
            Measurement {
                angle: 6,
                distance: 0x1234
            }
        );
        assert_eq!(
            reading.samples[3],
            Measurement {
                angle: 7,
                distance: 0
            }
        );

        drop(threads);
    }

    #[test]
    fn test_run_driver_drops_desynced_frame() {
        let (mut master, slave) = TTYPort::pair().expect("Unable to create ptty pair");

        let name = slave.name().unwrap();
        let (threads, reading_rx) = run_driver(&name).unwrap();

        // A full frame whose angle bucket is out of range: decoded and
        // discarded without producing a reading.
        let mut bogus = [0u8; 22];
        bogus[0] = 0xFA;
        bogus[1] = 0x00;
        master.write(&bogus).unwrap();

        let mut frame = [0u8; 22];
        frame[0] = 0xFA;
        frame[1] = 0xA0;
        frame[2] = 0x00;
        frame[3] = 0x40;
        master.write(&frame).unwrap();

        sleep_ms(10);

        let reading = reading_rx.recv().unwrap();
        assert_eq!(reading.rpm, 1.0);
        assert_eq!(reading.samples[0].angle, 0);

        drop(threads);
    }
}
