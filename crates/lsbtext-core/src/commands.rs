use std::path::Path;

use crate::LsbTextError;

pub fn hide(media: &Path, write_to_file: &Path, message: &str) -> Result<(), LsbTextError> {
    crate::api::hide::prepare()
        .with_image(media)
        .with_output(write_to_file)
        .with_message(message)
        .execute()
}

pub fn reveal(secret_media: &Path) -> Result<String, LsbTextError> {
    crate::api::reveal::prepare()
        .from_secret_file(secret_media)
        .execute()
}
