use image::{ImageBuffer, Pixel};

use super::iterators::{ColorIter, ColorIterMut};
use crate::bits::SENTINEL_BITS;

/// hides one bit in the least significant bit of a color channel
pub trait HideBit {
    fn hide_bit(self, bit: bool);
}

impl HideBit for &mut u8 {
    #[inline(always)]
    fn hide_bit(self, bit: bool) {
        *self = (*self & (u8::MAX - 1)) | u8::from(bit);
    }
}

/// reads the bit hidden in the least significant bit of a color channel
pub trait UnveilBit {
    fn unveil_bit(&self) -> bool;
}

impl UnveilBit for u8 {
    #[inline(always)]
    fn unveil_bit(&self) -> bool {
        self & 1 == 1
    }
}

/// LSB hiding and unveiling on 8 bit images, works for any channel count
pub struct LsbCodec;

impl LsbCodec {
    /// Writes `bits` into the color channels of `carrier`, one bit per channel.
    ///
    /// Stops right after the last bit, all channels behind it keep their values.
    /// Returns the number of channels that were written, which is smaller than
    /// `bits.len()` only if the carrier ran out of channels.
    pub fn hide<P>(carrier: &mut ImageBuffer<P, Vec<u8>>, bits: &[bool]) -> usize
    where
        P: Pixel<Subpixel = u8>,
    {
        let mut written = 0;
        for (color, bit) in ColorIterMut::from_pixels_mut(carrier.pixels_mut()).zip(bits) {
            color.hide_bit(*bit);
            written += 1;
        }

        written
    }

    /// Collects the least significant bit of every color channel of `carrier`
    pub fn unveil<P>(carrier: &ImageBuffer<P, Vec<u8>>) -> Vec<bool>
    where
        P: Pixel<Subpixel = u8>,
    {
        ColorIter::from_pixels(carrier.pixels())
            .map(|color| color.unveil_bit())
            .collect()
    }
}

/// Bit offset of the first occurrence of the sentinel pattern.
/// The offset does not have to be a multiple of 8.
pub fn find_sentinel(bits: &[bool]) -> Option<usize> {
    bits.windows(SENTINEL_BITS.len())
        .position(|window| window == &SENTINEL_BITS[..])
}
