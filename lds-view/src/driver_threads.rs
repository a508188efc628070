use crate::packet::{decode_packet, PacketAssembler};
use crate::serial::{get_n_read, read};
use crate::time::sleep_ms;
use crossbeam_channel::{Receiver, Sender};
use lds_data::Reading;
use serialport::SerialPort;
use std::sync::mpsc;
use std::thread::JoinHandle;

/// Struct that contains driver threads.
pub struct DriverThreads {
    pub(crate) reader_terminator_tx: Sender<bool>,
    pub(crate) parser_terminator_tx: Sender<bool>,
    pub(crate) reader_thread: Option<JoinHandle<()>>,
    pub(crate) parser_thread: Option<JoinHandle<()>>,
}

pub(crate) fn read_device_signal(
    port: &mut Box<dyn SerialPort>,
    raw_data_tx: mpsc::SyncSender<Vec<u8>>,
    reader_terminator_rx: Receiver<bool>,
) {
    loop {
        if do_terminate(&reader_terminator_rx) {
            return;
        }

        let n_read: usize = get_n_read(port).unwrap_or(0);
        if n_read == 0 {
            continue;
        }

        if let Ok(signal) = read(port, n_read) {
            if let Err(e) = raw_data_tx.send(signal) {
                eprintln!("{e}");
            }
        }
    }
}

pub(crate) fn parse_packets(
    raw_data_rx: mpsc::Receiver<Vec<u8>>,
    parser_terminator_rx: Receiver<bool>,
    reading_tx: mpsc::SyncSender<Reading>,
) {
    let mut assembler = PacketAssembler::new();
    while !do_terminate(&parser_terminator_rx) {
        let data = match raw_data_rx.try_recv() {
            Ok(data) => data,
            Err(_) => {
                sleep_ms(10);
                continue;
            }
        };

        for byte in data {
            let frame = match assembler.push(byte) {
                Some(frame) => frame,
                None => continue,
            };
            match decode_packet(&frame) {
                Some(reading) => {
                    if reading_tx.send(reading).is_err() {
                        // The consumer is gone; nothing left to parse for.
                        return;
                    }
                }
                None => log::debug!("dropped frame with out-of-range angle bucket"),
            }
        }
    }
}

pub(crate) fn do_terminate(terminator_rx: &Receiver<bool>) -> bool {
    terminator_rx.try_recv().unwrap_or(false)
}

/// Function to join driver threads.
/// This function is automatically called when `driver_threads` is dropped.
pub fn join(driver_threads: &mut DriverThreads) {
    let _ = driver_threads.reader_terminator_tx.send(true);
    let _ = driver_threads.parser_terminator_tx.send(true);

    if let Some(thread) = driver_threads.reader_thread.take() {
        thread.join().unwrap();
    }
    if let Some(thread) = driver_threads.parser_thread.take() {
        thread.join().unwrap();
    }
}

impl Drop for DriverThreads {
    fn drop(&mut self) {
        join(self);
    }
}
