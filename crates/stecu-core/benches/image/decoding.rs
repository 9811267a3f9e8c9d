use criterion::{criterion_group, criterion_main, Criterion};
use image::{ImageBuffer, Rgb};
use stecu_core::media::image::DwtCodec;
use stecu_core::CodecOptions;

pub fn image_decoding(c: &mut Criterion) {
    c.bench_function("Image Decoding", |b| {
        let options = CodecOptions::default();
        let plain_image = ImageBuffer::from_fn(512, 512, |x, y| {
            Rgb([x as u8, (60 + (x * 7 + y * 13) % 120) as u8, y as u8])
        });
        let img = DwtCodec::hide(&plain_image, "Hello World!", &options)
            .expect("Cannot hide secret message");

        b.iter(|| {
            DwtCodec::unveil(&img, &options).expect("Failed to unveil the message")
        })
    });
}

criterion_group!(benches, image_decoding);
criterion_main!(benches);
