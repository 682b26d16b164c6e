use std::fmt;

/// The channels of one pixel and the order in which they carry bits
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum ChannelLayout {
    /// red, green, blue
    Rgb,
    /// red, green, blue, alpha
    Rgba,
}

impl ChannelLayout {
    pub fn channels(&self) -> usize {
        match self {
            ChannelLayout::Rgb => 3,
            ChannelLayout::Rgba => 4,
        }
    }

    /// number of bits an image of the given dimensions can carry, one per channel
    pub fn capacity(&self, width: u32, height: u32) -> usize {
        self.channels() * width as usize * height as usize
    }
}

impl fmt::Display for ChannelLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChannelLayout::Rgb => write!(f, "RGB"),
            ChannelLayout::Rgba => write!(f, "RGBA"),
        }
    }
}
