use crate::media::PixelGrid;
use crate::result::Result;

/// Hides `message` in `grid` and hands the modified grid back.
///
/// Fails with [`LsbTextError::PayloadNotByteEncodable`] for characters above 255
/// and with [`LsbTextError::CapacityExceeded`] if the message plus sentinel does
/// not fit. In both cases the grid is dropped unmodified.
///
/// [`LsbTextError::PayloadNotByteEncodable`]: crate::LsbTextError::PayloadNotByteEncodable
/// [`LsbTextError::CapacityExceeded`]: crate::LsbTextError::CapacityExceeded
pub fn hide(mut grid: PixelGrid, message: &str) -> Result<PixelGrid> {
    grid.hide_message(message)?;
    Ok(grid)
}

/// Recovers the text hidden in `grid`, never fails.
pub fn reveal(grid: &PixelGrid) -> String {
    grid.unveil_message()
}
