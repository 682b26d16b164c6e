use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};

use crate::commands::*;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true, arg_required_else_help = true)]
pub struct CliArgs {
    #[command(flatten)]
    pub folders: Folders,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Hide(hide::HideArgs),
    Reveal(reveal::RevealArgs),
}

/// Base folders that relative image paths are resolved against
#[derive(Args, Debug, Default)]
pub struct Folders {
    /// Folder containing the carrier images
    #[arg(long, value_name = "DIR", global = true)]
    pub input_dir: Option<PathBuf>,

    /// Folder containing the images with hidden messages
    #[arg(long, value_name = "DIR", global = true)]
    pub output_dir: Option<PathBuf>,
}

impl Folders {
    pub fn input(&self, file: &Path) -> PathBuf {
        resolve(self.input_dir.as_deref(), file)
    }

    pub fn output(&self, file: &Path) -> PathBuf {
        resolve(self.output_dir.as_deref(), file)
    }
}

fn resolve(folder: Option<&Path>, file: &Path) -> PathBuf {
    match folder {
        Some(folder) => folder.join(file),
        None => file.to_path_buf(),
    }
}
