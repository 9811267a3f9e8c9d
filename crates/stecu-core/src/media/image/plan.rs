use super::transform::Subband;
use crate::framing::BitFrame;

/// A coefficient position inside one subband
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    pub band: Subband,
    pub row: usize,
    pub col: usize,
}

/// Maps frame bit indices to coefficient positions.
///
/// Only coefficients whose 2x2 pixel block lies fully inside the image are used, the ones
/// computed from padding pixels do not survive cropping. Positions are assigned row-major.
/// Every bit goes to the diagonal subband, marker bits are repeated at the same position
/// in the vertical subband.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmbeddingPlan {
    rows: usize,
    cols: usize,
}

impl EmbeddingPlan {
    /// plan for a channel of the given pixel dimensions
    pub fn for_channel(width: usize, height: usize) -> Self {
        Self {
            rows: height / 2,
            cols: width / 2,
        }
    }

    /// Number of usable coefficients per subband, the diagonal and the vertical subband share one grid.
    pub fn capacity(&self) -> usize {
        self.rows * self.cols
    }

    pub fn primary(&self, index: usize) -> Option<Slot> {
        self.position(index).map(|(row, col)| Slot {
            band: Subband::Diagonal,
            row,
            col,
        })
    }

    /// the redundant slot of a frame bit, only marker bits have one
    pub fn redundant(&self, index: usize, frame: &BitFrame) -> Option<Slot> {
        if !frame.is_marker_bit(index) {
            return None;
        }

        self.position(index).map(|(row, col)| Slot {
            band: Subband::Vertical,
            row,
            col,
        })
    }

    /// all slots of one subband in plan order
    pub fn slots(&self, band: Subband) -> impl Iterator<Item = Slot> + '_ {
        (0..self.capacity()).filter_map(move |index| {
            self.position(index)
                .map(|(row, col)| Slot { band, row, col })
        })
    }

    fn position(&self, index: usize) -> Option<(usize, usize)> {
        (index < self.capacity()).then(|| (index / self.cols, index % self.cols))
    }
}
