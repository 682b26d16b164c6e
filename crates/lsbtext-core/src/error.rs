use std::path::PathBuf;

use image::ColorType;
use thiserror::Error;

use crate::media::ChannelLayout;

#[derive(Error, Debug)]
pub enum LsbTextError {
    /// Represents an unsupported carrier media. For example, a JPEG or a text file
    #[error("Media format is not supported, only PNG images are")]
    UnsupportedMedia,

    /// Represents an invalid carrier image media. For example, a broken PNG file
    #[error("Image media is invalid")]
    InvalidImageMedia,

    /// Represents a carrier media that does not exist on disk
    #[error("Media file {0:?} does not exist")]
    MediaNotFound(PathBuf),

    /// Represents a decoded image that is neither 8 bit RGB nor 8 bit RGBA, e.g. grayscale
    #[error("Unsupported channel layout {0:?}, only RGB and RGBA with 8 bits per channel are supported")]
    UnsupportedChannelLayout(ColorType),

    /// Represents a message character that does not fit into 8 bits
    #[error("The character {character:?} at position {position} cannot be encoded in 8 bits")]
    PayloadNotByteEncodable { character: char, position: usize },

    #[error(
        "Capacity Error: The message needs {needed} bits, but the {layout} image with the dimensions {width}x{height} only offers {available} bits"
    )]
    CapacityExceeded {
        needed: usize,
        available: usize,
        layout: ChannelLayout,
        width: u32,
        height: u32,
    },

    /// Represents a failure when encoding an image file.
    #[error("Image encoding error")]
    ImageEncodingError,

    /// Represents a failure to write target file.
    #[error("Write error")]
    WriteError { source: std::io::Error },

    /// Represents all other cases of `std::io::Error`.
    #[error(transparent)]
    IoError(#[from] std::io::Error),

    #[error("No carrier media set")]
    CarrierNotSet,

    #[error("No target file set")]
    TargetNotSet,

    #[error("API Error: Missing message")]
    MissingMessage,
}
