//! LoRa P2P configuration commands
//!
//! These commands only take effect while the module runs in
//! [`WorkMode::LoRaP2p`](super::WorkMode::LoRaP2p). Parameter values are sent
//! as given; the module itself rejects out-of-range values with an error reply.

use core::fmt;

use super::{mode_digit, AtCommand, InvalidMode};

/// LoRa signal bandwidth
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Bandwidth {
    /// 125 kHz (0)
    Khz125 = 0,
    /// 250 kHz (1)
    Khz250 = 1,
    /// 500 kHz (2)
    Khz500 = 2,
}

/// LoRa forward error correction coding rate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CodingRate {
    /// 4/5 (1)
    Cr4_5 = 1,
    /// 4/6 (2)
    Cr4_6 = 2,
    /// 4/7 (3)
    Cr4_7 = 3,
    /// 4/8 (4)
    Cr4_8 = 4,
}

/// LoRa P2P radio parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct P2pConfig {
    /// Carrier frequency in Hz
    pub frequency: u32,

    /// Spreading factor
    /// Valid range: 7 to 12
    pub spreading_factor: u8,

    /// Signal bandwidth
    pub bandwidth: Bandwidth,

    /// Coding rate
    pub coding_rate: CodingRate,

    /// Preamble length in symbols
    /// Valid range: 5 to 65535
    pub preamble_length: u16,

    /// TX power in dBm
    /// Valid range: 5 to 20
    pub power: u8,
}

impl Default for P2pConfig {
    fn default() -> Self {
        Self {
            frequency: 868_000_000,
            spreading_factor: 7,
            bandwidth: Bandwidth::Khz125,
            coding_rate: CodingRate::Cr4_5,
            preamble_length: 8,
            power: 14,
        }
    }
}

/// `lorap2p` parameter command
///
/// Sets frequency and modulation parameters for both TX and RX.
#[derive(Debug, Clone)]
pub struct SetP2pConfig {
    /// Radio parameters
    pub config: P2pConfig,
}

impl AtCommand for SetP2pConfig {
    fn write_command<W: fmt::Write>(&self, out: &mut W) -> fmt::Result {
        let c = &self.config;
        write!(
            out,
            "at+set_config=lorap2p:{}:{}:{}:{}:{}:{}",
            c.frequency,
            c.spreading_factor,
            c.bandwidth as u8,
            c.coding_rate as u8,
            c.preamble_length,
            c.power,
        )
    }
}

/// Direction of LoRa P2P traffic
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TransferMode {
    /// Listen for incoming packets (1)
    Receiver = 1,
    /// Transmit packets (2)
    Sender = 2,
}

impl TryFrom<u8> for TransferMode {
    type Error = InvalidMode;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match mode_digit(code) {
            1 => Ok(Self::Receiver),
            2 => Ok(Self::Sender),
            _ => Err(InvalidMode(code)),
        }
    }
}

/// `lorap2p:transfer_mode` command
#[derive(Debug, Clone)]
pub struct SetTransferMode {
    /// Requested transfer direction
    pub mode: TransferMode,
}

impl AtCommand for SetTransferMode {
    fn write_command<W: fmt::Write>(&self, out: &mut W) -> fmt::Result {
        write!(out, "at+set_config=lorap2p:transfer_mode:{}", self.mode as u8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_parameters_in_order() {
        let config = P2pConfig {
            frequency: 868_000_000,
            spreading_factor: 7,
            bandwidth: Bandwidth::Khz125,
            coding_rate: CodingRate::Cr4_5,
            preamble_length: 8,
            power: 14,
        };
        let line = SetP2pConfig { config }.render().unwrap();
        assert_eq!(line.as_str(), "at+set_config=lorap2p:868000000:7:0:1:8:14");
    }

    #[test]
    fn renders_values_verbatim_without_range_checks() {
        let config = P2pConfig {
            frequency: 915_000_000,
            spreading_factor: 42,
            bandwidth: Bandwidth::Khz500,
            coding_rate: CodingRate::Cr4_8,
            preamble_length: 65_535,
            power: 0,
        };
        let line = SetP2pConfig { config }.render().unwrap();
        assert_eq!(line.as_str(), "at+set_config=lorap2p:915000000:42:2:4:65535:0");
    }

    #[test]
    fn longest_config_fits_command_line() {
        let config = P2pConfig {
            frequency: u32::MAX,
            spreading_factor: u8::MAX,
            bandwidth: Bandwidth::Khz500,
            coding_rate: CodingRate::Cr4_8,
            preamble_length: u16::MAX,
            power: u8::MAX,
        };
        assert!(SetP2pConfig { config }.render().is_ok());
    }

    #[test]
    fn default_matches_eu868_profile() {
        let line = SetP2pConfig { config: P2pConfig::default() }.render().unwrap();
        assert_eq!(line.as_str(), "at+set_config=lorap2p:868000000:7:0:1:8:14");
    }

    #[test]
    fn renders_transfer_modes() {
        let sender = SetTransferMode { mode: TransferMode::Sender }.render().unwrap();
        assert_eq!(sender.as_str(), "at+set_config=lorap2p:transfer_mode:2");

        let receiver = SetTransferMode { mode: TransferMode::Receiver }.render().unwrap();
        assert_eq!(receiver.as_str(), "at+set_config=lorap2p:transfer_mode:1");
    }

    #[test]
    fn converts_raw_transfer_codes() {
        assert_eq!(TransferMode::try_from(b'1'), Ok(TransferMode::Receiver));
        assert_eq!(TransferMode::try_from(b'2'), Ok(TransferMode::Sender));
        assert_eq!(TransferMode::try_from(2), Ok(TransferMode::Sender));
        assert_eq!(TransferMode::try_from(b'0'), Err(InvalidMode(b'0')));
        assert_eq!(TransferMode::try_from(b'3'), Err(InvalidMode(b'3')));
    }
}
