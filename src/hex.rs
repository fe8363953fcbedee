//! Hex payload codec
//!
//! The RAK811 carries P2P payloads as ASCII hex: two lowercase digits per
//! byte, high nibble first, with no separator, prefix or checksum. All
//! functions work on caller-provided buffers and never allocate.

use core::fmt;

const DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Hex codec failures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HexError {
    /// A character outside `0-9`, `a-f` and `A-F` was found
    InvalidDigit(u8),
    /// Fewer than two characters were left to decode
    Truncated,
    /// The output buffer cannot hold the result
    BufferTooSmall,
}

impl fmt::Display for HexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDigit(c) => write!(f, "invalid hex digit 0x{c:02x}"),
            Self::Truncated => f.write_str("odd number of hex digits"),
            Self::BufferTooSmall => f.write_str("output buffer too small"),
        }
    }
}

/// Encodes `input` as lowercase hex into `out`.
///
/// Returns the number of ASCII bytes written, always `2 * input.len()`.
/// Nothing is written if `out` is shorter than that.
pub fn encode_hex(input: &[u8], out: &mut [u8]) -> Result<usize, HexError> {
    let needed = input.len() * 2;
    if needed > out.len() {
        return Err(HexError::BufferTooSmall);
    }

    for (pair, &byte) in out.chunks_exact_mut(2).zip(input) {
        pair[0] = DIGITS[(byte >> 4) as usize];
        pair[1] = DIGITS[(byte & 0x0f) as usize];
    }

    Ok(needed)
}

/// Decodes a single byte from the front of `cursor` and advances it by two.
///
/// Upper and lower case digits are accepted. On error the cursor is left
/// untouched.
///
/// ```
/// let mut cursor: &[u8] = b"4869";
/// assert_eq!(rak811::hex::decode_byte(&mut cursor), Ok(b'H'));
/// assert_eq!(rak811::hex::decode_byte(&mut cursor), Ok(b'i'));
/// assert!(cursor.is_empty());
/// ```
pub fn decode_byte(cursor: &mut &[u8]) -> Result<u8, HexError> {
    if cursor.len() < 2 {
        return Err(HexError::Truncated);
    }

    let byte = (nibble(cursor[0])? << 4) | nibble(cursor[1])?;
    *cursor = &cursor[2..];
    Ok(byte)
}

/// Decodes a whole hex string into `out`, returning the number of bytes written.
pub fn decode_hex(hex: &[u8], out: &mut [u8]) -> Result<usize, HexError> {
    if hex.len() % 2 != 0 {
        return Err(HexError::Truncated);
    }
    let len = hex.len() / 2;
    if len > out.len() {
        return Err(HexError::BufferTooSmall);
    }

    let mut cursor = hex;
    for slot in &mut out[..len] {
        *slot = decode_byte(&mut cursor)?;
    }

    Ok(len)
}

fn nibble(c: u8) -> Result<u8, HexError> {
    match c {
        b'0'..=b'9' => Ok(c - b'0'),
        b'a'..=b'f' => Ok(c - b'a' + 10),
        b'A'..=b'F' => Ok(c - b'A' + 10),
        _ => Err(HexError::InvalidDigit(c)),
    }
}
