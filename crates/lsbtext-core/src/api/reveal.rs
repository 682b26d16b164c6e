use std::path::{Path, PathBuf};

use crate::media::PixelGrid;
use crate::LsbTextError;

pub fn prepare() -> RevealApi {
    RevealApi::default()
}

#[derive(Default, Debug)]
pub struct RevealApi {
    secret_media: Option<PathBuf>,
}

impl RevealApi {
    /// This is the secret image that contains the message to be revealed
    pub fn from_secret_file(mut self, secret_image: impl AsRef<Path>) -> Self {
        self.secret_media = Some(secret_image.as_ref().to_path_buf());
        self
    }

    /// Execute the reveal process and returns the hidden message
    pub fn execute(self) -> Result<String, LsbTextError> {
        let Some(secret_media) = self.secret_media else {
            return Err(LsbTextError::CarrierNotSet);
        };
        if !secret_media.exists() {
            return Err(LsbTextError::MediaNotFound(secret_media));
        }

        Ok(PixelGrid::from_file(&secret_media)?.unveil_message())
    }
}
