use crate::error::LsbTextError;

pub type Result<T> = std::result::Result<T, LsbTextError>;
