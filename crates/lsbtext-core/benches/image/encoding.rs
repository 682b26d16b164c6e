use criterion::{criterion_group, criterion_main, Criterion};
use image::{ImageBuffer, Rgba};
use lsbtext_core::{hide, PixelGrid};

pub fn image_encoding(c: &mut Criterion) {
    c.bench_function("Image Encoding", |b| {
        let plain_image = PixelGrid::from_rgba(ImageBuffer::from_fn(512, 512, |x, y| {
            Rgba([x as u8, y as u8, (x ^ y) as u8, 255])
        }));
        let secret_message = "Hello World! ".repeat(1000);

        b.iter(|| hide(plain_image.clone(), &secret_message).expect("Cannot hide secret message"))
    });
}

criterion_group!(benches, image_encoding);
criterion_main!(benches);
