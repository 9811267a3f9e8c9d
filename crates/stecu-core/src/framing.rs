//! Bit framing of text messages.
//!
//! A frame is laid out as
//!
//! ```text
//! | start marker (32) | payload (8 per char) | padding (16 zeros) | end marker (32) |
//! ```
//!
//! Payload characters are written as their 8-bit code, most significant bit first.
//! Turning a (possibly noisy) bitstream back into text is not done here, that is the
//! job of the extraction engine; this module only provides the building blocks for it.

use bitstream_io::{BigEndian, BitRead, BitReader, BitWrite, BitWriter};
use std::ops::Range;

use crate::result::Result;
use crate::StecuError;

/// Number of zero bits between the payload and the end marker.
pub const PADDING_BITS: usize = 16;

/// Number of bits a frame needs on top of the payload.
pub const FRAME_OVERHEAD_BITS: usize = 2 * Marker::LEN + PADDING_BITS;

/// Default start marker pattern.
pub const START_MARKER: Marker = Marker::new(0x5A3C_96E1);

/// Default end marker pattern. A printable code has its high bit clear and at
/// least one more zero bit, so any 32 bit window over printable text, aligned or
/// shifted, stays at least 7 bits away from an all ones pattern.
pub const END_MARKER: Marker = Marker::new(0xFFFF_FFFF);

/// A fixed 32 bit pattern that delimits the payload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Marker(u32);

impl Marker {
    pub const LEN: usize = 32;

    pub const fn new(pattern: u32) -> Self {
        Self(pattern)
    }

    pub fn pattern(&self) -> u32 {
        self.0
    }

    /// the marker bits, most significant bit first
    pub fn bits(&self) -> impl Iterator<Item = bool> + '_ {
        (0..Self::LEN).rev().map(move |i| (self.0 >> i) & 1 == 1)
    }

    /// Hamming distance between the marker and the first 32 bits of `window`.
    ///
    /// Missing bits of a too short window count as mismatches.
    pub fn distance(&self, window: &[bool]) -> usize {
        let matching = self
            .bits()
            .zip(window.iter())
            .filter(|(expected, actual)| expected == *actual)
            .count();

        Self::LEN - matching
    }
}

/// The pair of markers used for one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Markers {
    start: Marker,
    end: Marker,
}

impl Default for Markers {
    fn default() -> Self {
        Self {
            start: START_MARKER,
            end: END_MARKER,
        }
    }
}

impl Markers {
    pub fn new(start: Marker, end: Marker) -> Result<Self> {
        if start == end {
            return Err(StecuError::InvalidMarkers(start.pattern()));
        }

        Ok(Self { start, end })
    }

    pub fn start(&self) -> Marker {
        self.start
    }

    pub fn end(&self) -> Marker {
        self.end
    }
}

/// A fully delimited bit sequence, ready to be embedded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitFrame {
    bits: Vec<bool>,
    payload_len: usize,
}

impl BitFrame {
    /// Frames the message between the given markers.
    ///
    /// Fails with [`StecuError::FormatError`] for characters with a code above 255.
    pub fn encode(message: &str, markers: &Markers) -> Result<Self> {
        let codes = character_codes(message)?;
        let payload_len = codes.len() * 8;

        let mut bits = Vec::with_capacity(payload_len + FRAME_OVERHEAD_BITS);
        bits.extend(markers.start().bits());

        let mut reader = BitReader::endian(codes.as_slice(), BigEndian);
        for _ in 0..payload_len {
            bits.push(reader.read_bit()?);
        }

        bits.extend(std::iter::repeat(false).take(PADDING_BITS));
        bits.extend(markers.end().bits());

        Ok(Self { bits, payload_len })
    }

    pub fn bits(&self) -> &[bool] {
        &self.bits
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    pub fn payload(&self) -> &[bool] {
        &self.bits[self.payload_range()]
    }

    pub fn payload_range(&self) -> Range<usize> {
        Marker::LEN..Marker::LEN + self.payload_len
    }

    pub fn end_marker_range(&self) -> Range<usize> {
        self.bits.len() - Marker::LEN..self.bits.len()
    }

    /// true if the bit at `index` belongs to the start or the end marker
    pub fn is_marker_bit(&self, index: usize) -> bool {
        index < Marker::LEN || self.end_marker_range().contains(&index)
    }
}

fn character_codes(message: &str) -> Result<Vec<u8>> {
    message
        .chars()
        .map(|c| {
            u8::try_from(u32::from(c)).map_err(|_| {
                StecuError::FormatError(format!(
                    "character {c:?} (U+{:04X}) has no 8-bit code",
                    u32::from(c)
                ))
            })
        })
        .collect()
}

/// Assembles up to 8 bits, most significant first, into a character code.
pub fn byte_from_bits(group: &[bool]) -> u8 {
    group
        .iter()
        .take(8)
        .fold(0u8, |code, bit| (code << 1) | u8::from(*bit))
}

/// Codes 32 to 126, the printable ASCII range.
pub fn is_printable(code: u8) -> bool {
    (32..=126).contains(&code)
}

/// Packs a bitstream into bytes, most significant bit first. The last byte is padded with zeros.
pub fn pack_bits(bits: &[bool]) -> Result<Vec<u8>> {
    let mut writer = BitWriter::endian(Vec::with_capacity(bits.len() / 8 + 1), BigEndian);
    for bit in bits {
        writer.write_bit(*bit)?;
    }
    writer.byte_align()?;

    Ok(writer.into_writer())
}
