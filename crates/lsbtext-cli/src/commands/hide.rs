use std::path::PathBuf;

use clap::Args;
use log::debug;

use crate::cli::Folders;
use crate::CliResult;

/// Hides a text message in a PNG image
#[derive(Args, Debug)]
pub struct HideArgs {
    /// Carrier PNG image with RGB or RGBA colors, used readonly.
    #[arg(value_name = "INPUT_IMAGE")]
    pub input_image: PathBuf,

    /// The image with the hidden message will be stored as this PNG file
    #[arg(value_name = "OUTPUT_IMAGE")]
    pub output_image: PathBuf,

    /// The text message that will be hidden, characters up to U+00FF only
    #[arg(value_name = "MESSAGE")]
    pub message: String,
}

impl HideArgs {
    pub fn run(self, folders: &Folders) -> CliResult<()> {
        let input = folders.input(&self.input_image);
        let output = folders.output(&self.output_image);
        debug!("hide from {input:?} into {output:?}");

        lsbtext_core::commands::hide(&input, &output, &self.message)?;
        println!("Message hidden in {}", output.display());

        Ok(())
    }
}
