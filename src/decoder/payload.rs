/// Byte mode segment parsing (Mode 0100)
use crate::encoder::bitstream::MODE_BYTE;
use crate::error::QrError;

/// MSB-first reader over data codewords
struct BitReader<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> BitReader<'a> {
    fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, pos: 0 }
    }

    fn remaining(&self) -> usize {
        self.bytes.len() * 8 - self.pos
    }

    fn read(&mut self, count: usize) -> Option<u32> {
        if count > self.remaining() {
            return None;
        }
        let mut value = 0u32;
        for _ in 0..count {
            let bit = (self.bytes[self.pos / 8] >> (7 - self.pos % 8)) & 1;
            value = (value << 1) | bit as u32;
            self.pos += 1;
        }
        Some(value)
    }
}

/// Decode the single byte-mode segment at the start of the data codewords.
/// Returns the raw bytes and their UTF-8 text.
pub fn decode_payload(data_codewords: &[u8]) -> Result<(Vec<u8>, String), QrError> {
    let mut reader = BitReader::new(data_codewords);

    let mode = reader.read(4).ok_or(QrError::Truncated)? as u8;
    if mode != MODE_BYTE {
        return Err(QrError::UnsupportedMode { mode });
    }

    let count = reader.read(8).ok_or(QrError::Truncated)? as usize;
    let mut bytes = Vec::with_capacity(count);
    for _ in 0..count {
        bytes.push(reader.read(8).ok_or(QrError::Truncated)? as u8);
    }

    let content = String::from_utf8(bytes.clone()).map_err(|_| QrError::InvalidUtf8)?;
    Ok((bytes, content))
}
