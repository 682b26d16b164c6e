use criterion::{criterion_group, criterion_main, Criterion};
use image::{ImageBuffer, Rgb};
use lsbtext_core::{hide, reveal, PixelGrid};

pub fn image_decoding(c: &mut Criterion) {
    c.bench_function("Image Decoding", |b| {
        let plain_image = PixelGrid::from_rgb(ImageBuffer::from_fn(512, 512, |x, y| {
            Rgb([x as u8, y as u8, (x ^ y) as u8])
        }));
        let img = hide(plain_image, "Hello World!").expect("Cannot hide secret message");

        b.iter(|| reveal(&img))
    });
}

criterion_group!(benches, image_decoding);
criterion_main!(benches);
