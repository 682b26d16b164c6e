//! Conversion between text and the MSB-first bitstream that gets spread over the color channels.
//!
//! Every character occupies exactly one byte, so only code points `0..=255` can be hidden.

use bitstream_io::{BigEndian, BitRead, BitReader};

use crate::error::LsbTextError;
use crate::result::Result;

/// Unit separator, terminates every hidden message
pub const SENTINEL: u8 = 0x1F;

/// [`SENTINEL`] as it appears in the bitstream
pub const SENTINEL_BITS: [bool; 8] = [false, false, false, true, true, true, true, true];

/// maps every character onto one byte, fails for code points above 255
pub fn text_to_bytes(text: &str) -> Result<Vec<u8>> {
    text.chars()
        .enumerate()
        .map(|(position, character)| {
            u8::try_from(character)
                .map_err(|_| LsbTextError::PayloadNotByteEncodable { character, position })
        })
        .collect()
}

/// expands bytes into bits, most significant bit first
pub fn bytes_to_bits(bytes: &[u8]) -> Result<Vec<bool>> {
    let mut reader = BitReader::endian(bytes, BigEndian);
    let bits = (0..bytes.len() << 3)
        .map(|_| reader.read_bit())
        .collect::<std::io::Result<Vec<bool>>>()?;

    Ok(bits)
}

pub fn string_to_bits(text: &str) -> Result<Vec<bool>> {
    bytes_to_bits(&text_to_bytes(text)?)
}

/// Packs complete groups of 8 bits into characters.
/// A trailing group shorter than 8 bits is dropped.
pub fn bits_to_string(bits: &[bool]) -> String {
    bits.chunks_exact(8)
        .map(|group| group.iter().fold(0u8, |byte, bit| (byte << 1) | u8::from(*bit)))
        .map(char::from)
        .collect()
}
