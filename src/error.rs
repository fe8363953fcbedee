//! Driver error types

use core::fmt;

/// Errors returned by [`Device`](crate::Device) operations.
///
/// `E` is the error type of the underlying serial transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// Writing to or configuring the transport failed
    Bus(E),

    /// A rendered command did not fit into [`COMMAND_CAPACITY`](crate::COMMAND_CAPACITY) bytes
    CommandTooLong,

    /// The hex-encoded payload would not fit into the scratch buffer.
    ///
    /// An empty message has still been sent when this is returned.
    PayloadTooLarge {
        /// Payload length in bytes
        len: usize,
        /// Scratch buffer capacity in bytes
        capacity: usize,
    },
}

impl<E: fmt::Debug> fmt::Display for Error<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bus(err) => write!(f, "serial transport error: {err:?}"),
            Self::CommandTooLong => f.write_str("command exceeds line buffer"),
            Self::PayloadTooLarge { len, capacity } => write!(
                f,
                "{len} byte payload does not fit a {capacity} byte hex buffer"
            ),
        }
    }
}
