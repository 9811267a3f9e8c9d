//! Recovers a message from a possibly noisy coefficient bitstream.
//!
//! The payload boundary is searched with a chain of strategies, the first one that succeeds wins:
//!
//! 1. fuzzy match of the end marker in the diagonal bitstream
//! 2. close match of the end marker copy in the vertical bitstream
//! 3. the leading run of printable characters after the start marker
//! 4. a fixed number of characters
//!
//! Every step is deterministic for a given bitstream.

use image::RgbImage;
use log::{debug, trace};
use std::ops::Range;

use super::channel::Matrix;
use super::embed::bit_string;
use super::plan::EmbeddingPlan;
use super::transform::{CoefficientSubbands, Subband};
use crate::framing::{byte_from_bits, is_printable, Marker, Markers};
use crate::media::CodecOptions;
use crate::result::Result;
use crate::StecuError;

/// Tunable limits of the marker search and of the fallback heuristics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecoveryThresholds {
    /// number of bit offsets probed for the start marker
    pub start_search_offsets: usize,
    /// accepted Hamming distance for the start marker
    pub start_tolerance: usize,
    /// accepted Hamming distance for marker copies in the vertical subband
    pub redundant_tolerance: usize,
    /// bits after the start marker searched for the end marker
    pub end_search_window: usize,
    /// accepted Hamming distance for the end marker
    pub end_tolerance: usize,
    /// bits after the start marker scanned for printable characters
    pub fallback_window: usize,
    /// characters returned when no printable character was found at all
    pub last_resort_chars: usize,
    /// non-printable characters in a row that stop decoding
    pub decode_stop_run: usize,
    /// identical trailing characters collapsed into one
    pub repeat_trim_len: usize,
}

impl Default for RecoveryThresholds {
    fn default() -> Self {
        Self {
            start_search_offsets: 1_000,
            start_tolerance: 4,
            redundant_tolerance: 1,
            end_search_window: 250_000,
            end_tolerance: 6,
            fallback_window: 25_000,
            last_resort_chars: 30,
            decode_stop_run: 5,
            repeat_trim_len: 5,
        }
    }
}

/// How the end of the payload was determined
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Boundary {
    EndMarker,
    RedundantEndMarker,
    PrintableRun,
    LastResort,
}

/// A recovered message and how it was found
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    pub message: String,
    /// bit offset of the start marker in the diagonal bitstream
    pub start_offset: usize,
    pub boundary: Boundary,
}

/// One bit per coefficient: residues near `0` read as `0`, residues near `step / 2` as `1`.
pub fn recover_bit(value: f64, step: f64) -> bool {
    let remainder = value.rem_euclid(step);

    !(remainder < step / 4.0 || remainder > 3.0 * step / 4.0)
}

/// reads the bits of one subband in plan order
pub fn recover_bits(
    subbands: &CoefficientSubbands,
    plan: &EmbeddingPlan,
    band: Subband,
    step: f64,
) -> Vec<bool> {
    let matrix = subbands.subband(band);

    plan.slots(band)
        .map(|slot| recover_bit(matrix.get(slot.row, slot.col), step))
        .collect()
}

/// Decomposes the embedding channel and reads the diagonal and the vertical bitstream.
pub fn read_bitstreams(image: &RgbImage, options: &CodecOptions) -> (Vec<bool>, Vec<bool>) {
    let (width, height) = image.dimensions();
    let plan = EmbeddingPlan::for_channel(width as usize, height as usize);
    let subbands = CoefficientSubbands::decompose(&Matrix::from_channel(image, options.channel));
    let step = options.quantization_step;

    (
        recover_bits(&subbands, &plan, Subband::Diagonal, step),
        recover_bits(&subbands, &plan, Subband::Vertical, step),
    )
}

pub fn extract_message(image: &RgbImage, options: &CodecOptions) -> Result<Extraction> {
    let (primary, redundant) = read_bitstreams(image, options);
    trace!(
        "diagonal bitstream starts with {}",
        bit_string(&primary[..primary.len().min(128)])
    );

    recover_message(&primary, &redundant, &options.markers, &options.recovery)
}

/// Locates the payload in the bitstreams and decodes it.
///
/// `primary` carries every frame bit, `redundant` repeats the marker bits at the same offsets.
pub fn recover_message(
    primary: &[bool],
    redundant: &[bool],
    markers: &Markers,
    thresholds: &RecoveryThresholds,
) -> Result<Extraction> {
    let start_offset = locate_start(primary, redundant, markers.start(), thresholds)
        .ok_or(StecuError::MarkerNotFound)?;
    let payload_start = start_offset + Marker::LEN;
    debug!("start marker found at bit {start_offset}");

    let tail = primary.get(payload_start..).unwrap_or_default();
    if tail.len() < 8 {
        return Err(StecuError::FormatError(format!(
            "only {} bits follow the start marker",
            tail.len()
        )));
    }
    let redundant_tail = redundant.get(payload_start..).unwrap_or_default();

    let (payload_len, boundary) = payload_boundary(tail, redundant_tail, markers.end(), thresholds);
    debug!("payload of {payload_len} bits delimited by {boundary:?}");

    let decoded = decode_characters(&tail[..payload_len.min(tail.len())], thresholds);
    let message = trim_artifacts(decoded, thresholds.repeat_trim_len);

    Ok(Extraction {
        message,
        start_offset,
        boundary,
    })
}

fn locate_start(
    primary: &[bool],
    redundant: &[bool],
    start: Marker,
    thresholds: &RecoveryThresholds,
) -> Option<usize> {
    let offsets = |bits: &[bool]| {
        0..thresholds
            .start_search_offsets
            .min((bits.len() + 1).saturating_sub(Marker::LEN))
    };

    find_marker(primary, start, offsets(primary), thresholds.start_tolerance).or_else(|| {
        find_marker(
            redundant,
            start,
            offsets(redundant),
            thresholds.redundant_tolerance,
        )
    })
}

/// first offset within `offsets` whose window is at most `tolerance` bits away from the marker
pub fn find_marker(
    bits: &[bool],
    marker: Marker,
    offsets: Range<usize>,
    tolerance: usize,
) -> Option<usize> {
    offsets
        .take_while(|offset| offset + Marker::LEN <= bits.len())
        .find(|offset| marker.distance(&bits[*offset..*offset + Marker::LEN]) <= tolerance)
}

/// payload length in bits, counted from the first bit after the start marker
fn payload_boundary(
    tail: &[bool],
    redundant_tail: &[bool],
    end: Marker,
    thresholds: &RecoveryThresholds,
) -> (usize, Boundary) {
    let window = |bits: &[bool]| 0..bits.len().min(thresholds.end_search_window);

    if let Some(offset) = find_marker(tail, end, window(tail), thresholds.end_tolerance) {
        return (offset.next_multiple_of(8), Boundary::EndMarker);
    }

    if let Some(offset) = find_marker(
        redundant_tail,
        end,
        window(redundant_tail),
        thresholds.redundant_tolerance,
    ) {
        return (offset.next_multiple_of(8), Boundary::RedundantEndMarker);
    }

    let scanned = &tail[..tail.len().min(thresholds.fallback_window)];
    match printable_run_end(scanned) {
        Some(run_end) => (run_end, Boundary::PrintableRun),
        None => (thresholds.last_resort_chars * 8, Boundary::LastResort),
    }
}

/// Bit position right after the leading run of printable characters.
///
/// The payload is followed by zero padding, so the run never reaches past the message.
fn printable_run_end(bits: &[bool]) -> Option<usize> {
    let run = bits
        .chunks_exact(8)
        .take_while(|group| is_printable(byte_from_bits(group)))
        .count();

    (run > 0).then_some(run * 8)
}

/// 8 bits per character, stops after too many non-printable characters in a row
fn decode_characters(bits: &[bool], thresholds: &RecoveryThresholds) -> String {
    let mut decoded = String::with_capacity(bits.len() / 8);
    let mut seen_printable = false;
    let mut non_printable_run = 0;

    for group in bits.chunks_exact(8) {
        let code = byte_from_bits(group);
        decoded.push(char::from(code));

        if is_printable(code) {
            seen_printable = true;
            non_printable_run = 0;
        } else {
            non_printable_run += 1;
            if seen_printable && non_printable_run >= thresholds.decode_stop_run {
                break;
            }
        }
    }

    decoded
}

/// Collapses a trailing run of `repeat_len` or more identical characters and strips
/// trailing non-printable characters.
fn trim_artifacts(mut decoded: String, repeat_len: usize) -> String {
    let tail: Vec<char> = decoded.chars().rev().take(repeat_len).collect();
    if repeat_len > 1 && tail.len() == repeat_len && tail.iter().all(|c| *c == tail[0]) {
        let repeated = tail[0];
        decoded.truncate(decoded.trim_end_matches(repeated).len());
        decoded.push(repeated);
    }

    let printable_len = decoded
        .trim_end_matches(|c: char| !u8::try_from(c).map(is_printable).unwrap_or(false))
        .len();
    decoded.truncate(printable_len);

    decoded
}
