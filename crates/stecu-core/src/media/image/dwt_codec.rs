use image::RgbImage;

use super::embed::embed_message;
use super::extract::{extract_message, read_bitstreams, Extraction};
use crate::media::CodecOptions;
use crate::result::Result;

/// Entry point for hiding and unveiling text in the wavelet domain of an image
pub struct DwtCodec;

impl DwtCodec {
    /// returns a copy of `carrier` with the message hidden in the configured channel
    pub fn hide(carrier: &RgbImage, message: &str, opts: &CodecOptions) -> Result<RgbImage> {
        embed_message(carrier, message, opts)
    }

    pub fn unveil(image: &RgbImage, opts: &CodecOptions) -> Result<Extraction> {
        extract_message(image, opts)
    }

    /// The raw diagonal bitstream, without looking for markers
    pub fn unveil_raw(image: &RgbImage, opts: &CodecOptions) -> Vec<bool> {
        read_bitstreams(image, opts).0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framing::BitFrame;
    use crate::media::image::embed::{embed_frame, quantize};
    use crate::media::image::{
        Boundary, Channel, CoefficientSubbands, EmbeddingPlan, Matrix, Subband,
    };
    use crate::StecuError;
    use crate::test_utils::textured_image;

    /// hides the message like the codec does, but lets `tamper` change coefficients before reconstruction
    fn tampered_stego<F>(carrier: &RgbImage, message: &str, tamper: F) -> RgbImage
    where
        F: Fn(&mut CoefficientSubbands, &EmbeddingPlan, &BitFrame),
    {
        let opts = CodecOptions::default();
        let frame = BitFrame::encode(message, &opts.markers).unwrap();
        let (width, height) = carrier.dimensions();
        let plan = EmbeddingPlan::for_channel(width as usize, height as usize);
        let mut subbands =
            CoefficientSubbands::decompose(&Matrix::from_channel(carrier, Channel::Green));

        embed_frame(&mut subbands, &plan, &frame, opts.quantization_step);
        tamper(&mut subbands, &plan, &frame);

        let mut stego = carrier.clone();
        subbands
            .reconstruct()
            .merge_into_channel(&mut stego, Channel::Green)
            .unwrap();
        stego
    }

    fn force_bits(
        subbands: &mut CoefficientSubbands,
        plan: &EmbeddingPlan,
        band: Subband,
        indices: impl IntoIterator<Item = usize>,
        bit: impl Fn(usize) -> bool,
    ) {
        for index in indices {
            let slot = plan.primary(index).unwrap();
            let matrix = subbands.subband_mut(band);
            let value = matrix.get(slot.row, slot.col);
            matrix.set(slot.row, slot.col, quantize(value, bit(index), 4.0));
        }
    }

    const FLIPS: [usize; 6] = [0, 5, 11, 17, 23, 29];

    fn flip_start_marker(carrier: &RgbImage, diagonal: usize, vertical: usize) -> RgbImage {
        tampered_stego(carrier, "HELLO", |subbands, plan, frame| {
            let flipped = |index: usize| !frame.bits()[index];
            force_bits(subbands, plan, Subband::Diagonal, FLIPS[..diagonal].to_vec(), flipped);
            force_bits(subbands, plan, Subband::Vertical, FLIPS[..vertical].to_vec(), flipped);
        })
    }

    #[test]
    fn should_hide_and_unveil_hello() {
        let opts = CodecOptions::default();
        let stego = DwtCodec::hide(&textured_image(200, 200), "HELLO", &opts).unwrap();

        let extraction = DwtCodec::unveil(&stego, &opts).unwrap();

        assert_eq!(extraction.message, "HELLO");
        assert_eq!(extraction.start_offset, 0);
        assert_eq!(extraction.boundary, Boundary::EndMarker);
    }

    #[test]
    fn should_hide_and_unveil_with_odd_dimensions() {
        let opts = CodecOptions::default();
        let message = "Meet me at the old bridge at 9pm. Bring the documents; tell no one.";
        let stego = DwtCodec::hide(&textured_image(201, 151), message, &opts).unwrap();

        assert_eq!(DwtCodec::unveil(&stego, &opts).unwrap().message, message);
    }

    #[test]
    fn should_hide_and_unveil_in_every_channel() {
        let carrier = textured_image(160, 120);

        for channel in [Channel::Red, Channel::Green, Channel::Blue] {
            let opts = CodecOptions::default().with_channel(channel);
            let stego = DwtCodec::hide(&carrier, "per channel", &opts).unwrap();

            assert_eq!(
                DwtCodec::unveil(&stego, &opts).unwrap().message,
                "per channel",
                "channel {channel:?}"
            );
        }
    }

    #[test]
    fn should_expose_the_raw_frame_bits() {
        let opts = CodecOptions::default();
        let stego = DwtCodec::hide(&textured_image(200, 200), "raw", &opts).unwrap();
        let frame = BitFrame::encode("raw", &opts.markers).unwrap();

        let raw = DwtCodec::unveil_raw(&stego, &opts);

        assert_eq!(raw.len(), 10_000);
        assert_eq!(&raw[..frame.len()], frame.bits());
    }

    #[test]
    fn should_survive_4_flipped_start_marker_bits() {
        let stego = flip_start_marker(&textured_image(200, 200), 4, 0);

        let extraction = DwtCodec::unveil(&stego, &CodecOptions::default()).unwrap();

        assert_eq!(extraction.message, "HELLO");
    }

    #[test]
    fn should_recover_the_start_marker_from_the_vertical_copy() {
        let stego = flip_start_marker(&textured_image(200, 200), 5, 1);

        let extraction = DwtCodec::unveil(&stego, &CodecOptions::default()).unwrap();

        assert_eq!(extraction.message, "HELLO");
    }

    #[test]
    fn should_fail_once_both_start_marker_copies_are_broken() {
        let stego = flip_start_marker(&textured_image(200, 200), 5, 2);

        assert!(matches!(
            DwtCodec::unveil(&stego, &CodecOptions::default()),
            Err(StecuError::MarkerNotFound)
        ));
    }

    #[test]
    fn should_fall_back_to_printable_text_when_the_end_marker_is_destroyed() {
        let message = "The quick brown fox jumps over the lazy dog.";
        let stego = tampered_stego(&textured_image(200, 200), message, |subbands, plan, frame| {
            for band in [Subband::Diagonal, Subband::Vertical] {
                force_bits(subbands, plan, band, frame.end_marker_range(), |_| false);
            }
        });

        let extraction = DwtCodec::unveil(&stego, &CodecOptions::default()).unwrap();

        assert_eq!(extraction.boundary, Boundary::PrintableRun);
        assert_eq!(extraction.message, message);
    }

    #[test]
    fn should_not_carry_printable_noise_past_the_padding_into_the_message() {
        let noise: Vec<bool> = b"R'dX"
            .iter()
            .flat_map(|b| (0..8).rev().map(move |i| (b >> i) & 1 == 1))
            .collect();

        let carrier = textured_image(200, 200);

        for message in [
            "The quick brown fox jumps over the lazy dog.",
            "HELLO",
            "Attack at dawn",
        ] {
            let stego = tampered_stego(&carrier, message, |subbands, plan, frame| {
                let end = frame.end_marker_range();
                let first = end.start;
                for band in [Subband::Diagonal, Subband::Vertical] {
                    force_bits(subbands, plan, band, end.clone(), |i| noise[i - first]);
                }
            });

            let extraction = DwtCodec::unveil(&stego, &CodecOptions::default()).unwrap();

            assert_eq!(extraction.boundary, Boundary::PrintableRun);
            assert_eq!(extraction.message, message);
        }
    }

    #[test]
    fn should_not_find_a_message_in_a_plain_image() {
        let result = DwtCodec::unveil(&textured_image(200, 200), &CodecOptions::default());

        assert!(matches!(result, Err(StecuError::MarkerNotFound)));
    }

    #[test]
    fn should_not_unveil_with_another_channel() {
        let stego = DwtCodec::hide(&textured_image(200, 200), "HELLO", &CodecOptions::default())
            .unwrap();
        let opts = CodecOptions::default().with_channel(Channel::Red);

        assert!(matches!(
            DwtCodec::unveil(&stego, &opts),
            Err(StecuError::MarkerNotFound)
        ));
    }
}
