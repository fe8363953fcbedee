#![cfg_attr(not(test), no_std)]
//! RAK811 LoRa Module Driver
//!
//! This crate drives a RAK Wireless RAK811 LoRa module over its UART AT-command
//! interface. The RAK811 pairs an SX1276 transceiver with an STM32L151 running
//! RAK's firmware, which exposes both a LoRaWAN stack and a raw point-to-point
//! (P2P) LoRa mode.
//!
//! The driver is write-only: it renders commands and payloads as AT lines and
//! sends them. Replies (`OK`, `ERROR:<code>`, received packets) are left to the
//! application.
//!
//! # Architecture
//! - [`device`]: Main device interface
//!   - Owns the serial port and an optional diagnostic mirror
//!   - Blocking (`embedded-io`) and async (`embedded-io-async`) operation
//!
//! - [`commands`]: Typed AT commands
//!   - [`commands::SetWorkMode`]: LoRaWAN / LoRa P2P selection
//!   - [`commands::SetP2pConfig`]: P2P frequency and modulation
//!   - [`commands::SetTransferMode`]: P2P sender / receiver
//!
//! - [`hex`]: Payload encoding
//!   - Payloads travel as two lowercase hex digits per byte
//!
//! # Usage
//! Bring-up of a P2P sender follows this sequence:
//!
//! 1. Create a [`Device`] with the UART wired to the module
//! 2. Call [`Device::init`] if the UART still needs its baud rate set
//! 3. Switch to [`WorkMode::LoRaP2p`]
//! 4. Configure radio parameters with a [`P2pConfig`]
//! 5. Select [`TransferMode::Sender`]
//! 6. Send payloads with [`Device::send_data`]
//!
//! # Important Notes
//! - The module runs at 115200 baud, 8N1
//! - Payloads whose hex encoding reaches the scratch buffer capacity are
//!   dropped; an empty line is sent and [`Error::PayloadTooLarge`] returned
//! - Nothing checks that the module accepted a command
//!
//! # Features
//! - `defmt`: logs every outgoing line at debug level and derives
//!   `defmt::Format` for the public types
//!
//! # Example
//! ```no_run
//! use rak811::{Device, P2pConfig, TransferMode, WorkMode, Error};
//!
//! async fn beacon<W: embedded_io_async::Write>(serial: W) -> Result<(), Error<W::Error>> {
//!     let mut device = Device::new(serial);
//!
//!     device.set_work_mode_async(WorkMode::LoRaP2p).await?;
//!     device.set_p2p_config_async(P2pConfig::default()).await?;
//!     device.set_transfer_mode_async(TransferMode::Sender).await?;
//!
//!     device.send_data_async(&[0xde, 0xad, 0xbe, 0xef]).await
//! }
//! ```

pub mod commands;
pub mod device;
mod error;
pub mod hex;

#[cfg(test)]
mod test_helper;

pub use commands::*;
pub use device::{
    Device, NoMirror, SetBaudRate, BAUD_RATE, DEFAULT_SCRATCH_CAPACITY, LINE_TERMINATOR,
};
pub use error::Error;
pub use hex::HexError;
