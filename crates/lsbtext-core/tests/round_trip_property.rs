use image::{ImageBuffer, Rgb, Rgba};
use proptest::prelude::*;

use lsbtext_core::{hide, reveal, PixelGrid};

// letters, digits and space never contain five consecutive 1 bits,
// so the sentinel pattern cannot show up before the real sentinel
const MESSAGE: &str = "[a-zA-Z0-9 ]{0,40}";

fn grid(rgba: bool, width: u32, height: u32, seed: u8) -> PixelGrid {
    if rgba {
        PixelGrid::from_rgba(ImageBuffer::from_fn(width, height, |x, y| {
            let i = (x as u8).wrapping_mul(31) ^ (y as u8).wrapping_add(seed);
            Rgba([i, i.rotate_left(1), i.rotate_left(2), i.rotate_left(3)])
        }))
    } else {
        PixelGrid::from_rgb(ImageBuffer::from_fn(width, height, |x, y| {
            let i = (x as u8).wrapping_mul(17) ^ (y as u8).wrapping_add(seed);
            Rgb([i, i.rotate_left(1), i.rotate_left(2)])
        }))
    }
}

proptest! {
    #[test]
    fn revealed_message_equals_hidden_message(
        message in MESSAGE,
        rgba in any::<bool>(),
        seed in any::<u8>(),
    ) {
        // 41 characters * 8 bits fit into 120 pixels of 3 channels
        let carrier = grid(rgba, 12, 10, seed);
        let secret = hide(carrier, &message).expect("message must fit");

        prop_assert_eq!(reveal(&secret), message);
    }

    #[test]
    fn hiding_keeps_dimensions_and_layout(
        message in MESSAGE,
        rgba in any::<bool>(),
    ) {
        let carrier = grid(rgba, 12, 10, 0);
        let layout = carrier.layout();
        let secret = hide(carrier, &message).expect("message must fit");

        prop_assert_eq!(secret.layout(), layout);
        prop_assert_eq!(secret.dimensions(), (12, 10));
    }
}
