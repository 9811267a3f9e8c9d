use image::RgbImage;
use log::{debug, trace};

use super::channel::Matrix;
use super::plan::{EmbeddingPlan, Slot};
use super::transform::CoefficientSubbands;
use crate::framing::BitFrame;
use crate::media::CodecOptions;
use crate::result::Result;

/// Moves `value` to the nearest multiple of `step`, plus half a step for a `1` bit.
///
/// The residue modulo `step` ends up at `0` for a `0` bit and at `step / 2` for a `1` bit,
/// leaving a quarter step of slack in both directions for rounding noise.
pub fn quantize(value: f64, bit: bool, step: f64) -> f64 {
    let base = step * (value / step).round();

    if bit {
        base + step / 2.0
    } else {
        base
    }
}

/// Writes all frame bits into the subbands according to the plan.
///
/// The frame must fit into the plan, see [`super::capacity::CapacityPolicy`].
pub fn embed_frame(
    subbands: &mut CoefficientSubbands,
    plan: &EmbeddingPlan,
    frame: &BitFrame,
    step: f64,
) {
    for (index, bit) in frame.bits().iter().enumerate() {
        let slots = plan
            .primary(index)
            .into_iter()
            .chain(plan.redundant(index, frame));
        for Slot { band, row, col } in slots {
            let band = subbands.subband_mut(band);
            band.set(row, col, quantize(band.get(row, col), *bit, step));
        }
    }
}

/// Hides `message` in a copy of `carrier`.
///
/// All checks run before any coefficient is touched, in this order:
/// image size, character codes, capacity.
pub fn embed_message(carrier: &RgbImage, message: &str, options: &CodecOptions) -> Result<RgbImage> {
    let (width, height) = carrier.dimensions();
    options.capacity.check_size(width, height)?;

    let frame = BitFrame::encode(message, &options.markers)?;
    let plan = EmbeddingPlan::for_channel(width as usize, height as usize);
    debug!(
        "frame of {} bits ({} payload bits), capacity of {} coefficients, {} bits accepted",
        frame.len(),
        frame.payload().len(),
        plan.capacity(),
        options.capacity.allowed_bits(plan.capacity())
    );
    options.capacity.check_frame(frame.len(), plan.capacity())?;
    trace!("frame bits: {}", bit_string(frame.bits()));

    let channel = Matrix::from_channel(carrier, options.channel);
    let mut subbands = CoefficientSubbands::decompose(&channel);
    embed_frame(&mut subbands, &plan, &frame, options.quantization_step);

    let mut stego = carrier.clone();
    subbands
        .reconstruct()
        .merge_into_channel(&mut stego, options.channel)?;

    Ok(stego)
}

pub(crate) fn bit_string(bits: &[bool]) -> String {
    bits.iter().map(|b| if *b { '1' } else { '0' }).collect()
}
