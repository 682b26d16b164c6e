use std::fs::File;
use std::io::{Seek, Write};
use std::path::Path;

pub use image::{DynamicImage, RgbImage, RgbaImage};
use log::{debug, error};

use crate::bits::{bits_to_string, bytes_to_bits, text_to_bytes, SENTINEL};
use crate::error::LsbTextError;
use crate::media::image::{find_sentinel, LsbCodec};
use crate::result::Result;

use super::{ChannelLayout, Persist};

/// A decoded image with 8 bits per channel, the carrier for hidden messages.
///
/// The variant fixes the channel layout for the lifetime of the grid.
#[derive(Debug, Clone, PartialEq)]
pub enum PixelGrid {
    Rgb(RgbImage),
    Rgba(RgbaImage),
}

impl PixelGrid {
    pub fn from_rgb(img: RgbImage) -> Self {
        Self::Rgb(img)
    }

    pub fn from_rgba(img: RgbaImage) -> Self {
        Self::Rgba(img)
    }

    /// Loads a PNG image, the extension is checked case-insensitively.
    pub fn from_file(f: &Path) -> Result<Self> {
        let is_png = f
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("png"));
        if !is_png {
            return Err(LsbTextError::UnsupportedMedia);
        }

        let img = image::open(f).map_err(|e| {
            error!("Error decoding image {f:?}: {e}");
            LsbTextError::InvalidImageMedia
        })?;

        Self::try_from(img)
    }

    pub fn layout(&self) -> ChannelLayout {
        match self {
            PixelGrid::Rgb(_) => ChannelLayout::Rgb,
            PixelGrid::Rgba(_) => ChannelLayout::Rgba,
        }
    }

    pub fn dimensions(&self) -> (u32, u32) {
        match self {
            PixelGrid::Rgb(i) => i.dimensions(),
            PixelGrid::Rgba(i) => i.dimensions(),
        }
    }

    /// number of bits this grid can carry, including the terminating sentinel
    pub fn capacity(&self) -> usize {
        let (width, height) = self.dimensions();
        self.layout().capacity(width, height)
    }

    pub fn into_dynamic(self) -> DynamicImage {
        match self {
            PixelGrid::Rgb(i) => DynamicImage::ImageRgb8(i),
            PixelGrid::Rgba(i) => DynamicImage::ImageRgba8(i),
        }
    }

    /// Hides `message` followed by the sentinel in the channel LSBs.
    ///
    /// Nothing is modified when the message contains characters above 255
    /// or when it does not fit into the grid.
    pub fn hide_message(&mut self, message: &str) -> Result<&mut Self> {
        let mut payload = text_to_bytes(message)?;
        payload.push(SENTINEL);
        let bits = bytes_to_bits(&payload)?;

        let (width, height) = self.dimensions();
        let layout = self.layout();
        let available = layout.capacity(width, height);
        debug!(
            "hiding {} bits in a {layout} image of {width}x{height} with a capacity of {available} bits",
            bits.len()
        );
        if bits.len() > available {
            return Err(LsbTextError::CapacityExceeded {
                needed: bits.len(),
                available,
                layout,
                width,
                height,
            });
        }

        let written = match self {
            PixelGrid::Rgb(i) => LsbCodec::hide(i, &bits),
            PixelGrid::Rgba(i) => LsbCodec::hide(i, &bits),
        };
        debug_assert_eq!(written, bits.len());

        Ok(self)
    }

    /// Reads the message up to the first sentinel.
    ///
    /// Without a sentinel the whole image is interpreted as message,
    /// which gives noise for images that never had anything hidden.
    pub fn unveil_message(&self) -> String {
        let mut bits = match self {
            PixelGrid::Rgb(i) => LsbCodec::unveil(i),
            PixelGrid::Rgba(i) => LsbCodec::unveil(i),
        };

        match find_sentinel(&bits) {
            Some(end) => {
                debug!("sentinel found at bit {end}");
                bits.truncate(end);
            }
            None => debug!("no sentinel found in {} bits", bits.len()),
        }

        bits_to_string(&bits)
    }

    pub fn save_to_writer<W: Write + Seek>(&self, mut writer: W) -> Result<()> {
        let result = match self {
            PixelGrid::Rgb(i) => i.write_to(&mut writer, image::ImageFormat::Png),
            PixelGrid::Rgba(i) => i.write_to(&mut writer, image::ImageFormat::Png),
        };

        result.map_err(|e| {
            error!("Error saving image: {e}");
            LsbTextError::ImageEncodingError
        })
    }
}

impl TryFrom<DynamicImage> for PixelGrid {
    type Error = LsbTextError;

    fn try_from(img: DynamicImage) -> Result<Self> {
        match img {
            DynamicImage::ImageRgb8(i) => Ok(Self::Rgb(i)),
            DynamicImage::ImageRgba8(i) => Ok(Self::Rgba(i)),
            other => Err(LsbTextError::UnsupportedChannelLayout(other.color())),
        }
    }
}

impl Persist for PixelGrid {
    fn save_as(&mut self, file: &Path) -> Result<()> {
        let f = File::create(file).map_err(|e| {
            error!("Error creating file {file:?}: {e}");
            LsbTextError::WriteError { source: e }
        })?;
        self.save_to_writer(f)
    }
}
