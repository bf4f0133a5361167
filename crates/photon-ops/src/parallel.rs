//! Rayon-backed passes for the 2D FFT.
//!
//! Enabled with the `parallel` feature. Rows are independent within a pass,
//! so each row goes to its own task. Columns are handled by transposing
//! both planes, running the row pass, and transposing back, which keeps
//! every task writing to a disjoint chunk.
//!
//! Output is bit-identical to the serial passes: each row or column runs
//! exactly the same 1D transform.
//!
//! # Example
//!
//! ```rust
//! use photon_ops::fft::{fft_2d, ComplexField};
//!
//! let field = ComplexField::from_real(&vec![0.5f32; 256 * 128], 256, 128).unwrap();
//! let spectrum = fft_2d(field);
//! assert!((spectrum.get(0, 0).0 - 0.5 * 256.0 * 128.0).abs() < 1.0);
//! ```

use crate::fft::transform;
use rayon::prelude::*;

/// Parallel FFT over every row of a `width`-wide field.
pub(crate) fn rows_pass(re: &mut [f32], im: &mut [f32], width: usize) {
    re.par_chunks_mut(width)
        .zip(im.par_chunks_mut(width))
        .for_each(|(row_re, row_im)| transform(row_re, row_im));
}

/// Parallel FFT over every column via transpose, row pass, transpose.
pub(crate) fn columns_pass(re: &mut [f32], im: &mut [f32], width: usize, height: usize) {
    let mut t_re = transpose(re, width, height);
    let mut t_im = transpose(im, width, height);

    rows_pass(&mut t_re, &mut t_im, height);

    re.copy_from_slice(&transpose(&t_re, height, width));
    im.copy_from_slice(&transpose(&t_im, height, width));
}

/// Transpose a single-channel plane: rows become columns.
///
/// Input:  sample at (x, y) is at index `y * width + x`
/// Output: sample at (x, y) is at index `x * height + y`
fn transpose(src: &[f32], width: usize, height: usize) -> Vec<f32> {
    let mut dst = vec![0.0f32; width * height];

    dst.par_chunks_mut(height)
        .enumerate()
        .for_each(|(x, col)| {
            for (y, v) in col.iter_mut().enumerate() {
                *v = src[y * width + x];
            }
        });

    dst
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transpose_roundtrip() {
        let src: Vec<f32> = (0..12).map(|i| i as f32).collect();
        let t = transpose(&src, 4, 3);
        assert_eq!(t[0..3], [0.0, 4.0, 8.0]);
        assert_eq!(transpose(&t, 3, 4), src);
    }

    #[test]
    fn test_parallel_rows_match_serial_transform() {
        let (w, h) = (6, 5);
        let mut re: Vec<f32> = (0..w * h).map(|i| (i as f32 * 0.3).sin()).collect();
        let mut im = vec![0.0f32; w * h];
        let mut want_re = re.clone();
        let mut want_im = im.clone();

        rows_pass(&mut re, &mut im, w);
        for y in 0..h {
            transform(&mut want_re[y * w..(y + 1) * w], &mut want_im[y * w..(y + 1) * w]);
        }

        assert_eq!(re, want_re);
        assert_eq!(im, want_im);
    }
}
