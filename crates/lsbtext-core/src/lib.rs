//! # lsbtext Core API
//!
//! Hides a text message in the least significant bits of the color channels of
//! an 8 bit RGB or RGBA image, and reveals it again.
//!
//! - [`hide`] and [`reveal`] work on an in-memory [`PixelGrid`]
//! - [`api::hide`] and [`api::reveal`] work on PNG files
//!
//! Every character of the message becomes one byte, so only the code points
//! `0..=255` are supported. The message is terminated by the unit separator
//! `0x1F`, which therefore must not be part of the message itself.
//!
//! # Usage Examples
//!
//! ## Hide and reveal a message in memory
//!
//! ```rust
//! use lsbtext_core::{hide, reveal, PixelGrid};
//!
//! let carrier = PixelGrid::from_rgb(image::RgbImage::new(16, 16));
//! let secret = hide(carrier, "Hello, World!").expect("Failed to hide message");
//!
//! assert_eq!(reveal(&secret), "Hello, World!");
//! ```
//!
//! ## Hide a message inside a PNG file
//!
//! ```rust
//! use tempfile::tempdir;
//!
//! let temp_dir = tempdir().expect("Failed to create temporary directory");
//! let carrier = temp_dir.path().join("carrier.png");
//! let secret = temp_dir.path().join("secret.png");
//! image::RgbaImage::new(32, 32).save(&carrier).expect("Failed to write carrier");
//!
//! lsbtext_core::api::hide::prepare()
//!     .with_image(&carrier)
//!     .with_output(&secret)
//!     .with_message("Hello, World!")
//!     .execute()
//!     .expect("Failed to hide message in image");
//!
//! let message = lsbtext_core::api::reveal::prepare()
//!     .from_secret_file(&secret)
//!     .execute()
//!     .expect("Failed to reveal message from image");
//! assert_eq!(message, "Hello, World!");
//! ```

#![warn(clippy::redundant_else)]

pub mod api;
pub mod bits;
pub mod codec;
pub mod commands;
pub mod error;
pub mod media;
pub mod result;

pub use crate::codec::{hide, reveal};
pub use crate::error::LsbTextError;
pub use crate::media::{ChannelLayout, Persist, PixelGrid};
pub use crate::result::Result;
