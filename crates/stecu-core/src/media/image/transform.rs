//! Single level 2D Haar wavelet decomposition.
//!
//! Every 2x2 block `[[a, b], [c, d]]` of the input maps to one coefficient per subband:
//!
//! ```text
//! approximation = (a + b + c + d) / 2
//! horizontal    = (a + b - c - d) / 2
//! vertical      = (a - b + c - d) / 2
//! diagonal      = (a - b - c + d) / 2
//! ```
//!
//! Odd dimensions are padded by repeating the last row / column, which for Haar is the
//! same as symmetric extension. The padding is cropped again on reconstruction.

use super::channel::Matrix;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Subband {
    Approximation,
    Horizontal,
    Vertical,
    Diagonal,
}

/// The four half resolution subbands of one channel
#[derive(Debug, Clone, PartialEq)]
pub struct CoefficientSubbands {
    approximation: Matrix,
    horizontal: Matrix,
    vertical: Matrix,
    diagonal: Matrix,
    width: usize,
    height: usize,
}

impl CoefficientSubbands {
    pub fn decompose(channel: &Matrix) -> Self {
        let (width, height) = (channel.width(), channel.height());
        let (cols, rows) = (width.div_ceil(2), height.div_ceil(2));
        let sample = |row: usize, col: usize| {
            channel.get(row.min(height - 1), col.min(width - 1))
        };

        let mut approximation = Matrix::new(cols, rows);
        let mut horizontal = Matrix::new(cols, rows);
        let mut vertical = Matrix::new(cols, rows);
        let mut diagonal = Matrix::new(cols, rows);

        for row in 0..rows {
            for col in 0..cols {
                let a = sample(2 * row, 2 * col);
                let b = sample(2 * row, 2 * col + 1);
                let c = sample(2 * row + 1, 2 * col);
                let d = sample(2 * row + 1, 2 * col + 1);

                approximation.set(row, col, (a + b + c + d) / 2.0);
                horizontal.set(row, col, (a + b - c - d) / 2.0);
                vertical.set(row, col, (a - b + c - d) / 2.0);
                diagonal.set(row, col, (a - b - c + d) / 2.0);
            }
        }

        Self {
            approximation,
            horizontal,
            vertical,
            diagonal,
            width,
            height,
        }
    }

    /// Inverse transform, cropped to the dimensions of the decomposed channel.
    /// Samples are neither rounded nor clipped.
    pub fn reconstruct(&self) -> Matrix {
        let mut channel = Matrix::new(self.width, self.height);

        for row in 0..self.approximation.height() {
            for col in 0..self.approximation.width() {
                let ll = self.approximation.get(row, col);
                let h = self.horizontal.get(row, col);
                let v = self.vertical.get(row, col);
                let d = self.diagonal.get(row, col);

                let block = [
                    (2 * row, 2 * col, (ll + h + v + d) / 2.0),
                    (2 * row, 2 * col + 1, (ll + h - v - d) / 2.0),
                    (2 * row + 1, 2 * col, (ll - h + v - d) / 2.0),
                    (2 * row + 1, 2 * col + 1, (ll - h - v + d) / 2.0),
                ];
                for (r, c, value) in block {
                    if r < self.height && c < self.width {
                        channel.set(r, c, value);
                    }
                }
            }
        }

        channel
    }

    pub fn subband(&self, band: Subband) -> &Matrix {
        match band {
            Subband::Approximation => &self.approximation,
            Subband::Horizontal => &self.horizontal,
            Subband::Vertical => &self.vertical,
            Subband::Diagonal => &self.diagonal,
        }
    }

    pub fn subband_mut(&mut self, band: Subband) -> &mut Matrix {
        match band {
            Subband::Approximation => &mut self.approximation,
            Subband::Horizontal => &mut self.horizontal,
            Subband::Vertical => &mut self.vertical,
            Subband::Diagonal => &mut self.diagonal,
        }
    }

    /// dimensions of the decomposed channel
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }
}
