pub mod image;
mod layout;
mod types;

use std::path::Path;

pub use layout::ChannelLayout;
pub use types::*;

pub trait Persist {
    fn save_as(&mut self, _: &Path) -> crate::Result<()>;
}
