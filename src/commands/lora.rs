//! LoRa work mode commands

use core::fmt;

use super::{mode_digit, AtCommand, InvalidMode};

/// LoRa stack the module runs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum WorkMode {
    /// LoRaWAN stack (0)
    LoRaWan = 0,
    /// Point-to-point LoRa without a network server (1)
    LoRaP2p = 1,
}

impl TryFrom<u8> for WorkMode {
    type Error = InvalidMode;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match mode_digit(code) {
            0 => Ok(Self::LoRaWan),
            1 => Ok(Self::LoRaP2p),
            _ => Err(InvalidMode(code)),
        }
    }
}

/// `lora:work_mode` command
///
/// Selects between the LoRaWAN and LoRa P2P stacks.
///
/// # Important Notes
/// - The module restarts its LoRa stack after a work mode change
/// - P2P parameters must be configured again after switching to P2P
#[derive(Debug, Clone)]
pub struct SetWorkMode {
    /// Requested work mode
    pub mode: WorkMode,
}

impl AtCommand for SetWorkMode {
    fn write_command<W: fmt::Write>(&self, out: &mut W) -> fmt::Result {
        write!(out, "at+set_config=lora:work_mode:{}", self.mode as u8)
    }
}
