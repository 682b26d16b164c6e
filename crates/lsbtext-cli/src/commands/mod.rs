pub mod hide;
pub mod reveal;
