use criterion::{criterion_group, criterion_main, Criterion};
use image::{ImageBuffer, Rgb, RgbImage};
use stecu_core::media::image::DwtCodec;
use stecu_core::CodecOptions;

fn carrier_image() -> RgbImage {
    ImageBuffer::from_fn(512, 512, |x, y| {
        Rgb([x as u8, (60 + (x * 7 + y * 13) % 120) as u8, y as u8])
    })
}

pub fn image_encoding(c: &mut Criterion) {
    c.bench_function("Image Encoding", |b| {
        let plain_image = carrier_image();
        let options = CodecOptions::default();

        b.iter(|| {
            DwtCodec::hide(&plain_image, "Hello World!", &options)
                .expect("Cannot hide secret message")
        })
    });
}

criterion_group!(benches, image_encoding);
criterion_main!(benches);
