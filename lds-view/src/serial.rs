use crate::constants::{LDS_BAUD_RATE, N_READ_TRIALS};
use crate::error::ViewError;
use crate::time::sleep_ms;
use serialport::SerialPort;
use std::io::Read;

/// Opens the sensor port. The LDS streams frames unconditionally at a fixed
/// baud rate; there is no handshake.
pub(crate) fn open_port(port_name: &str) -> Result<Box<dyn SerialPort>, serialport::Error> {
    serialport::new(port_name, LDS_BAUD_RATE)
        .timeout(std::time::Duration::from_millis(10))
        .open()
}

pub(crate) fn get_n_read(port: &mut Box<dyn SerialPort>) -> Result<usize, ViewError> {
    let n_u32: u32 = port.bytes_to_read()?;
    Ok(n_u32.try_into().unwrap_or(0))
}

/// Discards whatever is sitting in the receive buffer, so the assembler
/// starts from live data instead of a stale partial frame.
pub(crate) fn flush(port: &mut Box<dyn SerialPort>) -> Result<(), ViewError> {
    let n_read: usize = get_n_read(port).unwrap_or(0);
    if n_read == 0 {
        return Ok(());
    }
    let mut stale: Vec<u8> = vec![0; n_read];
    port.read(stale.as_mut_slice())?;
    Ok(())
}

pub(crate) fn read(
    port: &mut Box<dyn SerialPort>,
    data_size: usize,
) -> Result<Vec<u8>, ViewError> {
    assert!(data_size > 0);
    for _ in 0..N_READ_TRIALS {
        let n_read: usize = get_n_read(port)?;

        if n_read < data_size {
            sleep_ms(10);
            continue;
        }

        let mut packet: Vec<u8> = vec![0; data_size];
        if let Err(e) = port.read(packet.as_mut_slice()) {
            return Err(ViewError::IoError(e));
        }
        return Ok(packet);
    }
    Err(ViewError::TimeoutError())
}
