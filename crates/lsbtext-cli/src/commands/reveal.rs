use std::path::PathBuf;

use clap::Args;

use crate::cli::Folders;
use crate::CliResult;

/// Reveals the text message hidden in a PNG image
#[derive(Args, Debug)]
pub struct RevealArgs {
    /// Image that contains the hidden message
    #[arg(value_name = "IMAGE")]
    pub image: PathBuf,
}

impl RevealArgs {
    pub fn run(self, folders: &Folders) -> CliResult<()> {
        let image = folders.output(&self.image);
        let message = lsbtext_core::commands::reveal(&image)?;
        println!("Hidden message: {message}");

        Ok(())
    }
}
