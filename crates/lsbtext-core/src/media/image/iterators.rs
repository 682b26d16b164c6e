use image::buffer::{Pixels, PixelsMut};
use image::Pixel;
use std::slice::{Iter, IterMut};

/// Mutable access to all color channels of an image, one after the other.
///
/// Pixels are visited row by row from top to bottom, each row from left to right.
/// Inside a pixel the channels come in their storage order, e.g. R, G, B, A.
pub(crate) struct ColorIterMut<'a, P: Pixel + 'a> {
    pixels: PixelsMut<'a, P>,
    colors: IterMut<'a, P::Subpixel>,
}

impl<'a, P: Pixel + 'a> ColorIterMut<'a, P> {
    pub fn from_pixels_mut(pixels: PixelsMut<'a, P>) -> Self {
        Self {
            pixels,
            colors: Default::default(),
        }
    }
}

impl<'a, P: Pixel + 'a> Iterator for ColorIterMut<'a, P> {
    type Item = &'a mut P::Subpixel;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(color) = self.colors.next() {
                return Some(color);
            }
            self.colors = self.pixels.next()?.channels_mut().iter_mut();
        }
    }
}

/// Readonly counterpart of [`ColorIterMut`], same order
pub(crate) struct ColorIter<'a, P: Pixel + 'a> {
    pixels: Pixels<'a, P>,
    colors: Iter<'a, P::Subpixel>,
}

impl<'a, P: Pixel + 'a> ColorIter<'a, P> {
    pub fn from_pixels(pixels: Pixels<'a, P>) -> Self {
        Self {
            pixels,
            colors: Default::default(),
        }
    }
}

impl<'a, P: Pixel + 'a> Iterator for ColorIter<'a, P> {
    type Item = &'a P::Subpixel;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(color) = self.colors.next() {
                return Some(color);
            }
            self.colors = self.pixels.next()?.channels().iter();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::test_utils::{prepare_4x6_linear_growing_colors_rgb, prepare_5x5_image};
    use image::RgbImage;

    #[test]
    fn should_visit_rgb_colors_row_by_row() {
        let mut img = prepare_4x6_linear_growing_colors_rgb();
        let color_iter = ColorIter::from_pixels(img.pixels());
        for (i, c) in color_iter.enumerate() {
            let i: u8 = i as u8;
            assert_eq!(c, &i, "the ({i}+1)-th color was wrong");
        }

        // now the mut iterator
        let color_iter = ColorIterMut::from_pixels_mut(img.pixels_mut());
        for (i, c) in color_iter.enumerate() {
            let i: u8 = i as u8;
            assert_eq!(c, &i, "the ({i}+1)-th color was wrong");
        }
    }

    #[test]
    fn ensure_color_iterator_includes_the_alpha_channel() {
        let img = prepare_5x5_image();
        let (width, height) = img.dimensions();
        let mut color_iter = ColorIter::from_pixels(img.pixels());

        for y in 0..height {
            for x in 0..width {
                let expected_pixel = img.get_pixel(x, y);
                for color_idx in 0..4 {
                    let expected_color = expected_pixel.0.get(color_idx).unwrap();
                    let given_color = color_iter
                        .next()
                        .unwrap_or_else(|| panic!("Color at ({x}, {y}) was not even existing!"));

                    assert_eq!(
                        given_color, expected_color,
                        "Color at ({x}, {y}) does not match"
                    );
                }
            }
        }
        // ensure iterator is exhausted
        assert!(color_iter.next().is_none());
    }

    #[test]
    fn ensure_empty_images_yield_no_colors() {
        let mut img = RgbImage::new(0, 0);
        assert!(ColorIter::from_pixels(img.pixels()).next().is_none());
        assert!(ColorIterMut::from_pixels_mut(img.pixels_mut())
            .next()
            .is_none());
    }

    #[test]
    fn it_should_be_possible_to_mutate_colors() {
        let mut img = prepare_5x5_image();
        let first_pixel = *img.get_pixel(0, 0);
        {
            let mut colors = ColorIterMut::from_pixels_mut(img.pixels_mut());
            let red = colors.next().unwrap();
            *red += 0x2;
        }
        let first_pixel_changed = *img.get_pixel(0, 0);
        assert_ne!(
            first_pixel.0.first(),
            first_pixel_changed.0.first(),
            "First Color (Red-Channel) should have been changed."
        );
        assert_eq!(
            first_pixel.0.get(1),
            first_pixel_changed.0.get(1),
            "Second Color (Green-Channel) should be equal."
        );
    }
}
