//! In-memory serial port for driver tests

use std::string::String;
use std::vec::Vec;

use crate::device::SetBaudRate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockError;

impl embedded_io::Error for MockError {
    fn kind(&self) -> embedded_io::ErrorKind {
        embedded_io::ErrorKind::Other
    }
}

/// Records every byte written. When `fail` is set, writes and baud changes error out.
#[derive(Debug, Default)]
pub struct MockSerial {
    pub written: Vec<u8>,
    pub baud: Option<u32>,
    pub flushes: usize,
    pub fail: bool,
}

impl MockSerial {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    /// Splits the recorded output on CR LF. Panics if the output does not end in a terminator.
    pub fn lines(&self) -> Vec<String> {
        let text = std::str::from_utf8(&self.written).unwrap();
        if text.is_empty() {
            return Vec::new();
        }
        let body = text
            .strip_suffix("\r\n")
            .unwrap_or_else(|| panic!("unterminated output: {text:?}"));
        body.split("\r\n").map(String::from).collect()
    }

    fn record(&mut self, buf: &[u8]) -> Result<usize, MockError> {
        if self.fail {
            return Err(MockError);
        }
        self.written.extend_from_slice(buf);
        Ok(buf.len())
    }
}

impl embedded_io::ErrorType for MockSerial {
    type Error = MockError;
}

impl embedded_io::Write for MockSerial {
    fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        self.record(buf)
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        self.flushes += 1;
        Ok(())
    }
}

impl embedded_io_async::Write for MockSerial {
    async fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        self.record(buf)
    }

    async fn flush(&mut self) -> Result<(), Self::Error> {
        self.flushes += 1;
        Ok(())
    }
}

impl SetBaudRate for MockSerial {
    fn set_baud_rate(&mut self, baud: u32) -> Result<(), Self::Error> {
        if self.fail {
            return Err(MockError);
        }
        self.baud = Some(baud);
        Ok(())
    }
}
