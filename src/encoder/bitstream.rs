/// Data codeword construction for byte-mode payloads
use crate::error::QrError;
use crate::models::{DATA_CODEWORDS, MAX_PAYLOAD_BYTES};

/// Byte mode indicator
pub const MODE_BYTE: u8 = 0b0100;

const PAD_CODEWORDS: [u8; 2] = [0xEC, 0x11];

/// Append-only MSB-first bit buffer
#[derive(Debug, Default, Clone)]
pub struct BitBuffer {
    bits: Vec<bool>,
}

impl BitBuffer {
    pub fn with_capacity(bits: usize) -> Self {
        Self {
            bits: Vec::with_capacity(bits),
        }
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Append the low `count` bits of `value`, most significant first
    pub fn append_bits(&mut self, value: u32, count: usize) {
        debug_assert!(count <= 32 && (count == 32 || value >> count == 0));
        for i in (0..count).rev() {
            self.bits.push((value >> i) & 1 != 0);
        }
    }

    /// Pack into bytes, MSB first. The length must be a multiple of 8.
    pub fn to_bytes(&self) -> Vec<u8> {
        debug_assert_eq!(self.bits.len() % 8, 0);
        self.bits
            .chunks(8)
            .map(|chunk| chunk.iter().fold(0u8, |acc, &b| (acc << 1) | b as u8))
            .collect()
    }
}

/// Check that a payload fits one version 3-L byte segment
pub fn validate_payload(payload: &[u8]) -> Result<(), QrError> {
    if payload.is_empty() {
        return Err(QrError::EmptyPayload);
    }
    if payload.len() > MAX_PAYLOAD_BYTES {
        return Err(QrError::PayloadTooLong {
            len: payload.len(),
            max: MAX_PAYLOAD_BYTES,
        });
    }
    Ok(())
}

/// Build the 55 data codewords: mode, count, bytes, terminator, bit padding, pad codewords
pub fn encode_data_codewords(payload: &[u8]) -> Result<Vec<u8>, QrError> {
    validate_payload(payload)?;

    let capacity_bits = DATA_CODEWORDS * 8;
    let mut buffer = BitBuffer::with_capacity(capacity_bits);
    buffer.append_bits(MODE_BYTE as u32, 4);
    buffer.append_bits(payload.len() as u32, 8);
    for &byte in payload {
        buffer.append_bits(byte as u32, 8);
    }
    assert!(buffer.len() <= capacity_bits);

    let terminator = (capacity_bits - buffer.len()).min(4);
    buffer.append_bits(0, terminator);
    let to_boundary = (8 - buffer.len() % 8) % 8;
    buffer.append_bits(0, to_boundary);

    let mut codewords = buffer.to_bytes();
    codewords.extend(PAD_CODEWORDS.iter().cycle().take(DATA_CODEWORDS - codewords.len()));
    assert_eq!(codewords.len(), DATA_CODEWORDS);

    Ok(codewords)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_bits() {
        let mut buffer = BitBuffer::default();
        buffer.append_bits(0b101, 3);
        buffer.append_bits(0b00001, 5);
        assert_eq!(buffer.len(), 8);
        assert_eq!(buffer.to_bytes(), vec![0b1010_0001]);
    }

    #[test]
    fn test_header_and_payload() {
        let codewords = encode_data_codewords(b"HI").unwrap();
        // 0100 00000010 01001000 01001001 0000 -> 0x40 0x24 0x84 0x90
        assert_eq!(&codewords[..4], &[0x40, 0x24, 0x84, 0x90]);
        assert_eq!(&codewords[4..8], &[0xEC, 0x11, 0xEC, 0x11]);
        assert_eq!(codewords.len(), DATA_CODEWORDS);
    }

    #[test]
    fn test_max_payload_fills_exactly() {
        // 12 header bits + 53*8 = 436 bits, terminator clipped to 4 -> 440
        let payload = [0xFFu8; MAX_PAYLOAD_BYTES];
        let codewords = encode_data_codewords(&payload).unwrap();
        assert_eq!(codewords.len(), DATA_CODEWORDS);
        assert_eq!(codewords[0], 0x43); // 0100 0011
        assert_eq!(codewords[1], 0x5F); // 0101 1111
        assert_eq!(codewords[54], 0xF0); // last nibble + terminator
        assert!(!codewords.contains(&0xEC));
    }

    #[test]
    fn test_pads_alternate_to_the_end() {
        // 1 byte: 12 + 8 + 4 bits = 3 codewords, then 52 pads
        let codewords = encode_data_codewords(b"x").unwrap();
        assert_eq!(codewords.len(), DATA_CODEWORDS);
        for (i, &cw) in codewords[3..].iter().enumerate() {
            assert_eq!(cw, if i % 2 == 0 { 0xEC } else { 0x11 }, "pad {i}");
        }
    }

    #[test]
    fn test_52_bytes_has_one_pad() {
        let payload = [b'a'; 52];
        let codewords = encode_data_codewords(&payload).unwrap();
        assert_eq!(codewords[54], 0xEC);
    }

    #[test]
    fn test_rejects_out_of_range() {
        assert!(matches!(
            encode_data_codewords(b""),
            Err(QrError::EmptyPayload)
        ));
        assert!(matches!(
            encode_data_codewords(&[0u8; 54]),
            Err(QrError::PayloadTooLong { len: 54, max: 53 })
        ));
    }
}
