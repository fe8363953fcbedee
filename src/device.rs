//! RAK811 Device Interface
//!
//! This module provides the driver facade for a RAK811 module attached to a
//! UART. It supports both blocking operation through `embedded-io` and
//! asynchronous operation through `embedded-io-async`.
//!
//! The interface is built around the `Device<W, M, N>` struct which wraps a
//! serial writer and provides methods for:
//! - Sending raw AT lines
//! - Executing typed [`AtCommand`]s
//! - Sending hex-encoded payloads
//!
//! Every outgoing line is copied to an optional diagnostic mirror, such as a
//! debug UART. Replies from the module are never read.
//!
//! # Example
//! ```no_run
//! use rak811::{Device, P2pConfig, TransferMode, WorkMode};
//!
//! fn send_hello<W: embedded_io::Write>(serial: W) -> Result<(), rak811::Error<W::Error>> {
//!     let mut device = Device::new(serial);
//!
//!     device.set_work_mode(WorkMode::LoRaP2p)?;
//!     device.set_p2p_config(P2pConfig::default())?;
//!     device.set_transfer_mode(TransferMode::Sender)?;
//!     device.send_data(b"hello")
//! }
//! ```

use core::convert::Infallible;

use crate::commands::{
    AtCommand, P2pConfig, SetP2pConfig, SetTransferMode, SetWorkMode, TransferMode, WorkMode,
};
use crate::hex::encode_hex;
use crate::Error;

/// UART baud rate of the RAK811 AT interface
pub const BAUD_RATE: u32 = 115_200;

/// Terminator appended to every outgoing line
pub const LINE_TERMINATOR: &[u8] = b"\r\n";

/// Default capacity of the hex scratch buffer used by [`Device::send_data`]
pub const DEFAULT_SCRATCH_CAPACITY: usize = 512;

/// Serial ports whose baud rate can be changed at runtime.
///
/// Implemented by the HAL glue for the UART the module is attached to.
pub trait SetBaudRate: embedded_io::ErrorType {
    /// Reconfigures the port for `baud` bits per second.
    fn set_baud_rate(&mut self, baud: u32) -> Result<(), Self::Error>;
}

/// Diagnostic mirror that discards everything written to it.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoMirror;

impl embedded_io::ErrorType for NoMirror {
    type Error = Infallible;
}

impl embedded_io::Write for NoMirror {
    fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        Ok(buf.len())
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

impl embedded_io_async::Write for NoMirror {
    async fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        Ok(buf.len())
    }

    async fn flush(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Main device interface for the RAK811.
///
/// `W` is the serial port wired to the module, `M` the diagnostic mirror and
/// `N` the capacity of the hex scratch buffer. A payload is only sent if its
/// hex encoding is strictly shorter than `N`.
pub struct Device<W, M = NoMirror, const N: usize = DEFAULT_SCRATCH_CAPACITY> {
    serial: W,
    mirror: M,
}

impl<W> Device<W> {
    /// Creates a new Device without a diagnostic mirror.
    ///
    /// # Arguments
    /// * `serial` - The UART connected to the module's AT interface
    pub fn new(serial: W) -> Self {
        Self {
            serial,
            mirror: NoMirror,
        }
    }
}

impl<W, M, const N: usize> Device<W, M, N> {
    /// Creates a new Device that copies every outgoing line to `mirror`.
    ///
    /// # Arguments
    /// * `serial` - The UART connected to the module's AT interface
    /// * `mirror` - Diagnostic output; write errors on it are ignored
    pub fn with_mirror(serial: W, mirror: M) -> Self {
        Self { serial, mirror }
    }

    /// Releases the serial port and the mirror.
    pub fn release(self) -> (W, M) {
        (self.serial, self.mirror)
    }

    /// Capacity of the hex scratch buffer in bytes
    pub const fn scratch_capacity(&self) -> usize {
        N
    }
}

impl<W, M, const N: usize> Device<W, M, N>
where
    W: SetBaudRate,
{
    /// Configures the serial port for [`BAUD_RATE`].
    ///
    /// Safe to call again if the port tolerates being reconfigured.
    ///
    /// # Errors
    /// * `Error::Bus` - The port rejected the baud rate
    pub fn init(&mut self) -> Result<(), Error<W::Error>> {
        self.serial.set_baud_rate(BAUD_RATE).map_err(Error::Bus)
    }
}

impl<W, M, const N: usize> Device<W, M, N>
where
    W: embedded_io::Write,
    M: embedded_io::Write,
{
    /// Sends `message` followed by [`LINE_TERMINATOR`].
    ///
    /// # Errors
    /// * `Error::Bus` - Writing to the serial port failed
    pub fn send_message(&mut self, message: &str) -> Result<(), Error<W::Error>> {
        self.send_line(message.as_bytes())
    }

    /// Renders and sends a command.
    ///
    /// # Errors
    /// * `Error::CommandTooLong` - The command did not fit the line buffer, nothing was sent
    /// * `Error::Bus` - Writing to the serial port failed
    pub fn execute_command<C: AtCommand>(&mut self, command: C) -> Result<(), Error<W::Error>> {
        let line = command.render().map_err(|_| Error::CommandTooLong)?;
        self.send_line(line.as_bytes())
    }

    /// Selects the LoRaWAN or LoRa P2P stack.
    pub fn set_work_mode(&mut self, mode: WorkMode) -> Result<(), Error<W::Error>> {
        self.execute_command(SetWorkMode { mode })
    }

    /// Sets the LoRa P2P radio parameters.
    pub fn set_p2p_config(&mut self, config: P2pConfig) -> Result<(), Error<W::Error>> {
        self.execute_command(SetP2pConfig { config })
    }

    /// Switches LoRa P2P between sending and receiving.
    pub fn set_transfer_mode(&mut self, mode: TransferMode) -> Result<(), Error<W::Error>> {
        self.execute_command(SetTransferMode { mode })
    }

    /// Hex-encodes `data` and sends it as one line.
    ///
    /// # Errors
    /// * `Error::PayloadTooLarge` - `2 * data.len()` reaches the scratch capacity; an empty
    ///   line was sent in place of the payload
    /// * `Error::Bus` - Writing to the serial port failed
    pub fn send_data(&mut self, data: &[u8]) -> Result<(), Error<W::Error>> {
        let mut scratch = [0u8; N];
        match encode_payload(data, &mut scratch) {
            Some(len) => self.send_line(&scratch[..len]),
            None => {
                self.send_line(&[])?;
                Err(Error::PayloadTooLarge {
                    len: data.len(),
                    capacity: N,
                })
            }
        }
    }

    fn send_line(&mut self, line: &[u8]) -> Result<(), Error<W::Error>> {
        #[cfg(feature = "defmt")]
        defmt::debug!("rak811 <- {=[u8]:a}", line);

        embedded_io::Write::write_all(&mut self.serial, line).map_err(Error::Bus)?;
        embedded_io::Write::write_all(&mut self.serial, LINE_TERMINATOR).map_err(Error::Bus)?;
        embedded_io::Write::flush(&mut self.serial).map_err(Error::Bus)?;

        // Mirror failures never reach the caller.
        let _ = embedded_io::Write::write_all(&mut self.mirror, line);
        let _ = embedded_io::Write::write_all(&mut self.mirror, LINE_TERMINATOR);
        Ok(())
    }
}

impl<W, M, const N: usize> Device<W, M, N>
where
    W: embedded_io_async::Write,
    M: embedded_io_async::Write,
{
    /// Asynchronously sends `message` followed by [`LINE_TERMINATOR`].
    ///
    /// This is the async version of [`send_message`](Device::send_message).
    pub async fn send_message_async(&mut self, message: &str) -> Result<(), Error<W::Error>> {
        self.send_line_async(message.as_bytes()).await
    }

    /// Asynchronously renders and sends a command.
    ///
    /// This is the async version of [`execute_command`](Device::execute_command).
    pub async fn execute_command_async<C: AtCommand>(
        &mut self,
        command: C,
    ) -> Result<(), Error<W::Error>> {
        let line = command.render().map_err(|_| Error::CommandTooLong)?;
        self.send_line_async(line.as_bytes()).await
    }

    /// This is the async version of [`set_work_mode`](Device::set_work_mode).
    pub async fn set_work_mode_async(&mut self, mode: WorkMode) -> Result<(), Error<W::Error>> {
        self.execute_command_async(SetWorkMode { mode }).await
    }

    /// This is the async version of [`set_p2p_config`](Device::set_p2p_config).
    pub async fn set_p2p_config_async(
        &mut self,
        config: P2pConfig,
    ) -> Result<(), Error<W::Error>> {
        self.execute_command_async(SetP2pConfig { config }).await
    }

    /// This is the async version of [`set_transfer_mode`](Device::set_transfer_mode).
    pub async fn set_transfer_mode_async(
        &mut self,
        mode: TransferMode,
    ) -> Result<(), Error<W::Error>> {
        self.execute_command_async(SetTransferMode { mode }).await
    }

    /// Asynchronously hex-encodes `data` and sends it as one line.
    ///
    /// This is the async version of [`send_data`](Device::send_data).
    pub async fn send_data_async(&mut self, data: &[u8]) -> Result<(), Error<W::Error>> {
        let mut scratch = [0u8; N];
        match encode_payload(data, &mut scratch) {
            Some(len) => self.send_line_async(&scratch[..len]).await,
            None => {
                self.send_line_async(&[]).await?;
                Err(Error::PayloadTooLarge {
                    len: data.len(),
                    capacity: N,
                })
            }
        }
    }

    async fn send_line_async(&mut self, line: &[u8]) -> Result<(), Error<W::Error>> {
        #[cfg(feature = "defmt")]
        defmt::debug!("rak811 <- {=[u8]:a}", line);

        embedded_io_async::Write::write_all(&mut self.serial, line)
            .await
            .map_err(Error::Bus)?;
        embedded_io_async::Write::write_all(&mut self.serial, LINE_TERMINATOR)
            .await
            .map_err(Error::Bus)?;
        embedded_io_async::Write::flush(&mut self.serial)
            .await
            .map_err(Error::Bus)?;

        let _ = embedded_io_async::Write::write_all(&mut self.mirror, line).await;
        let _ = embedded_io_async::Write::write_all(&mut self.mirror, LINE_TERMINATOR).await;
        Ok(())
    }
}

/// Encodes `data` into `scratch`, or returns `None` if the hex text would
/// reach the buffer capacity.
fn encode_payload<const N: usize>(data: &[u8], scratch: &mut [u8; N]) -> Option<usize> {
    if data.len().saturating_mul(2) >= N {
        return None;
    }
    encode_hex(data, scratch).ok()
}
