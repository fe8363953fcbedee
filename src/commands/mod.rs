//! AT command implementations
//!
//! Every configuration request understood by this driver is a small struct
//! implementing [`AtCommand`]. Commands render themselves as a single line of
//! the RAK811 AT dialect:
//!
//! ```text
//! at+set_config=<key>:<value>[:<value>...]
//! ```
//!
//! The line terminator is appended by the [`Device`](crate::Device) when the
//! command is sent, never by the command itself.
//!
//! # Command Categories
//! - [`lora`]: LoRa stack selection
//!   - Switch between LoRaWAN and LoRa P2P work modes
//!
//! - [`p2p`]: LoRa P2P configuration
//!   - Frequency and modulation parameters
//!   - Sender / receiver transfer mode
//!
//! # Important Notes
//! - The module answers every command with `OK` or `ERROR:<code>`; replies are
//!   not read by this driver
//! - P2P parameters are only accepted once the module is in LoRa P2P work mode
//! - Switching work mode restarts the module's LoRa stack

use core::fmt;

mod lora;
mod p2p;

pub use lora::*;
pub use p2p::*;

/// Maximum length of a rendered command line, excluding the terminator
pub const COMMAND_CAPACITY: usize = 64;

/// Fixed-capacity buffer holding one rendered command line
pub type CommandLine = heapless::String<COMMAND_CAPACITY>;

/// Error type for converting raw mode codes
///
/// Carries the rejected code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InvalidMode(pub u8);

/// A command in the RAK811 AT dialect.
pub trait AtCommand {
    /// Writes the command text, without line terminator, into `out`.
    fn write_command<W: fmt::Write>(&self, out: &mut W) -> fmt::Result;

    /// Renders the command into a [`CommandLine`].
    ///
    /// Fails if the command does not fit into [`COMMAND_CAPACITY`] bytes.
    fn render(&self) -> Result<CommandLine, fmt::Error> {
        let mut line = CommandLine::new();
        self.write_command(&mut line)?;
        Ok(line)
    }
}

/// Maps a raw mode code to its numeric value.
///
/// Both ASCII digits (`b'1'`) and plain numbers (`1`) are accepted.
pub(crate) fn mode_digit(code: u8) -> u8 {
    if code.is_ascii_digit() {
        code - b'0'
    } else {
        code
    }
}
