//! Iterative radix-2 Cooley-Tukey FFT.
//!
//! Complex data is kept as two parallel `f32` planes (real, imaginary)
//! rather than an array of complex structs, so a grayscale image can be
//! dropped straight into the real plane.
//!
//! # Operations
//!
//! - [`fft_1d`] - Forward DFT of one complex sequence of any length
//! - [`fft_in_place`] - Same, writing back into caller-owned planes
//! - [`fft_2d`] - Separable 2D DFT (every row, then every column)
//! - [`bit_reverse_indices`], [`bit_reverse_permute`] - Reordering step
//!
//! # Lengths that are not a power of two
//!
//! Sequences are zero-padded to the next power of two, transformed, and the
//! result is truncated back to the input length. This is *not* the DFT of
//! the original N samples; it is the first N bins of the padded transform.
//! Every caller in this crate relies on the output having the input length.
//!
//! No scaling is applied: the transform is forward and unnormalized.
//!
//! # Example
//!
//! ```rust
//! use photon_ops::fft::fft_1d;
//!
//! let (re, im) = fft_1d(&[1.0, 0.0, 0.0, 0.0], &[0.0; 4]).unwrap();
//! assert_eq!(re, vec![1.0; 4]);
//! assert!(im.iter().all(|v| v.abs() < 1e-6));
//! ```

use crate::{OpsError, OpsResult};
use std::f64::consts::PI;
use tracing::trace;

/// Bit-reversal permutation of `0..n`.
///
/// `n` must be a power of two (or 0). Entry `i` holds `i` with its
/// `log2(n)` low bits reversed.
///
/// ```rust
/// use photon_ops::fft::bit_reverse_indices;
///
/// assert_eq!(bit_reverse_indices(8), vec![0, 4, 2, 6, 1, 5, 3, 7]);
/// ```
pub fn bit_reverse_indices(n: usize) -> Vec<usize> {
    debug_assert!(n == 0 || n.is_power_of_two());
    if n <= 1 {
        return vec![0; n];
    }
    let shift = usize::BITS - n.trailing_zeros();
    (0..n).map(|i| i.reverse_bits() >> shift).collect()
}

/// Reorders both planes into bit-reversed index order, in place.
///
/// Each pair is swapped once, from the lower index. Plane lengths must be
/// equal and a power of two.
pub fn bit_reverse_permute(re: &mut [f32], im: &mut [f32]) {
    debug_assert_eq!(re.len(), im.len());
    for (i, j) in bit_reverse_indices(re.len()).into_iter().enumerate() {
        if j > i {
            re.swap(i, j);
            im.swap(i, j);
        }
    }
}

/// Butterfly passes over data already in bit-reversed order.
///
/// Twiddles are evaluated directly with `sin_cos` for every butterfly.
fn butterflies(re: &mut [f32], im: &mut [f32]) {
    let n = re.len();
    let mut size = 2;
    while size <= n {
        let half = size / 2;
        for start in (0..n).step_by(size) {
            for j in 0..half {
                let angle = -2.0 * PI * j as f64 / size as f64;
                let (sin, cos) = angle.sin_cos();
                let (wr, wi) = (cos as f32, sin as f32);

                let k = start + j;
                let m = k + half;
                let tr = wr * re[m] - wi * im[m];
                let ti = wr * im[m] + wi * re[m];

                re[m] = re[k] - tr;
                im[m] = im[k] - ti;
                re[k] += tr;
                im[k] += ti;
            }
        }
        size <<= 1;
    }
}

/// Transforms a power-of-two length sequence in place.
fn transform_pow2(re: &mut [f32], im: &mut [f32]) {
    bit_reverse_permute(re, im);
    butterflies(re, im);
}

/// Transforms equal-length planes in place, padding internally when the
/// length is not a power of two.
pub(crate) fn transform(re: &mut [f32], im: &mut [f32]) {
    let n = re.len();
    if n <= 1 {
        return;
    }
    if n.is_power_of_two() {
        transform_pow2(re, im);
        return;
    }

    let padded = n.next_power_of_two();
    let mut pr = Vec::with_capacity(padded);
    let mut pi = Vec::with_capacity(padded);
    pr.extend_from_slice(re);
    pi.extend_from_slice(im);
    pr.resize(padded, 0.0);
    pi.resize(padded, 0.0);

    transform_pow2(&mut pr, &mut pi);

    re.copy_from_slice(&pr[..n]);
    im.copy_from_slice(&pi[..n]);
}

fn check_planes(re: &[f32], im: &[f32]) -> OpsResult<()> {
    if re.len() != im.len() {
        return Err(OpsError::SizeMismatch(format!(
            "real plane has {} samples, imaginary plane has {}",
            re.len(),
            im.len()
        )));
    }
    Ok(())
}

/// Forward FFT of a complex sequence.
///
/// Returns freshly allocated `(real, imaginary)` planes of the input length.
///
/// # Errors
///
/// [`OpsError::SizeMismatch`] if the planes differ in length.
///
/// # Example
///
/// ```rust
/// use photon_ops::fft::fft_1d;
///
/// // Length 5 is padded to 8 internally; the caller still sees 5 bins.
/// let (re, im) = fft_1d(&[1.0, 2.0, 3.0, 4.0, 5.0], &[0.0; 5]).unwrap();
/// assert_eq!(re.len(), 5);
/// assert_eq!(im.len(), 5);
/// assert!((re[0] - 15.0).abs() < 1e-4);
/// ```
pub fn fft_1d(re: &[f32], im: &[f32]) -> OpsResult<(Vec<f32>, Vec<f32>)> {
    check_planes(re, im)?;
    let mut out_re = re.to_vec();
    let mut out_im = im.to_vec();
    transform(&mut out_re, &mut out_im);
    Ok((out_re, out_im))
}

/// Forward FFT written back into the caller's planes.
///
/// # Errors
///
/// [`OpsError::SizeMismatch`] if the planes differ in length.
pub fn fft_in_place(re: &mut [f32], im: &mut [f32]) -> OpsResult<()> {
    check_planes(re, im)?;
    transform(re, im);
    Ok(())
}

/// A `width`x`height` complex field stored as two row-major planes.
#[derive(Debug, Clone, PartialEq)]
pub struct ComplexField {
    width: usize,
    height: usize,
    re: Vec<f32>,
    im: Vec<f32>,
}

impl ComplexField {
    /// Builds a field from real samples; the imaginary plane is all zero.
    ///
    /// # Errors
    ///
    /// [`OpsError::InvalidDimensions`] if `values.len() != width * height`.
    pub fn from_real(values: &[f32], width: usize, height: usize) -> OpsResult<Self> {
        let expected = width.checked_mul(height).ok_or_else(|| {
            OpsError::InvalidDimensions(format!("{}x{} overflows", width, height))
        })?;
        if values.len() != expected {
            return Err(OpsError::InvalidDimensions(format!(
                "expected {} samples for {}x{}, got {}",
                expected,
                width,
                height,
                values.len()
            )));
        }
        Ok(Self::from_real_vec(values.to_vec(), width, height))
    }

    /// Takes ownership of a real plane whose length is already known to be
    /// `width * height`.
    pub(crate) fn from_real_vec(re: Vec<f32>, width: usize, height: usize) -> Self {
        debug_assert_eq!(re.len(), width * height);
        let im = vec![0.0; re.len()];
        Self {
            width,
            height,
            re,
            im,
        }
    }

    /// Field width.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Field height.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Real plane.
    #[inline]
    pub fn re(&self) -> &[f32] {
        &self.re
    }

    /// Imaginary plane.
    #[inline]
    pub fn im(&self) -> &[f32] {
        &self.im
    }

    /// `(re, im)` at (x, y).
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> (f32, f32) {
        let i = y * self.width + x;
        (self.re[i], self.im[i])
    }

    /// Runs the 1D FFT over every row.
    pub fn fft_rows(&mut self) {
        if self.width == 0 || self.height == 0 {
            return;
        }
        rows_pass(&mut self.re, &mut self.im, self.width);
    }

    /// Runs the 1D FFT over every column.
    pub fn fft_columns(&mut self) {
        if self.width == 0 || self.height == 0 {
            return;
        }
        columns_pass(&mut self.re, &mut self.im, self.width, self.height);
    }
}

#[cfg(not(feature = "parallel"))]
fn rows_pass(re: &mut [f32], im: &mut [f32], width: usize) {
    for (row_re, row_im) in re.chunks_exact_mut(width).zip(im.chunks_exact_mut(width)) {
        transform(row_re, row_im);
    }
}

#[cfg(not(feature = "parallel"))]
fn columns_pass(re: &mut [f32], im: &mut [f32], width: usize, height: usize) {
    let mut col_re = vec![0.0f32; height];
    let mut col_im = vec![0.0f32; height];
    for x in 0..width {
        for y in 0..height {
            col_re[y] = re[y * width + x];
            col_im[y] = im[y * width + x];
        }
        transform(&mut col_re, &mut col_im);
        for y in 0..height {
            re[y * width + x] = col_re[y];
            im[y * width + x] = col_im[y];
        }
    }
}

#[cfg(feature = "parallel")]
use crate::parallel::{columns_pass, rows_pass};

/// 2D forward FFT: every row, then every column of the row-transformed
/// field.
///
/// # Example
///
/// ```rust
/// use photon_ops::fft::{fft_2d, ComplexField};
///
/// let field = ComplexField::from_real(&[1.0; 4], 2, 2).unwrap();
/// let spectrum = fft_2d(field);
/// assert_eq!(spectrum.get(0, 0), (4.0, 0.0));
/// assert_eq!(spectrum.get(1, 1), (0.0, 0.0));
/// ```
pub fn fft_2d(mut field: ComplexField) -> ComplexField {
    trace!(width = field.width, height = field.height, "fft_2d");
    field.fft_rows();
    field.fft_columns();
    field
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use rustfft::{num_complex::Complex, FftPlanner};

    fn signal(n: usize, seed: f32) -> Vec<f32> {
        (0..n).map(|i| ((i as f32 + 1.0) * seed).sin()).collect()
    }

    fn naive_dft(re: &[f32], im: &[f32]) -> (Vec<f64>, Vec<f64>) {
        let n = re.len();
        let mut out_re = vec![0.0f64; n];
        let mut out_im = vec![0.0f64; n];
        for k in 0..n {
            for t in 0..n {
                let angle = -2.0 * PI * (k * t) as f64 / n as f64;
                let (s, c) = angle.sin_cos();
                out_re[k] += re[t] as f64 * c - im[t] as f64 * s;
                out_im[k] += re[t] as f64 * s + im[t] as f64 * c;
            }
        }
        (out_re, out_im)
    }

    #[test]
    fn test_bit_reverse_small() {
        assert_eq!(bit_reverse_indices(0), Vec::<usize>::new());
        assert_eq!(bit_reverse_indices(1), vec![0]);
        assert_eq!(bit_reverse_indices(2), vec![0, 1]);
        assert_eq!(bit_reverse_indices(4), vec![0, 2, 1, 3]);
    }

    #[test]
    fn test_bit_reverse_is_involution() {
        let idx = bit_reverse_indices(64);
        for (i, &j) in idx.iter().enumerate() {
            assert_eq!(idx[j], i);
        }
    }

    #[test]
    fn test_bit_reverse_permute() {
        let mut re: Vec<f32> = (0..8).map(|i| i as f32).collect();
        let mut im: Vec<f32> = (0..8).map(|i| -(i as f32)).collect();
        bit_reverse_permute(&mut re, &mut im);
        assert_eq!(re, vec![0.0, 4.0, 2.0, 6.0, 1.0, 5.0, 3.0, 7.0]);
        assert_eq!(im, vec![0.0, -4.0, -2.0, -6.0, -1.0, -5.0, -3.0, -7.0]);
    }

    #[test]
    fn test_zero_input_stays_zero() {
        for n in 0..=17 {
            let zeros = vec![0.0f32; n];
            let (re, im) = fft_1d(&zeros, &zeros).unwrap();
            assert_eq!(re.len(), n);
            assert_eq!(im.len(), n);
            assert!(re.iter().chain(im.iter()).all(|&v| v == 0.0), "n = {}", n);
        }
    }

    #[test]
    fn test_trivial_lengths_unchanged() {
        let (re, im) = fft_1d(&[3.5], &[-1.25]).unwrap();
        assert_eq!((re, im), (vec![3.5], vec![-1.25]));

        let (re, im) = fft_1d(&[], &[]).unwrap();
        assert!(re.is_empty() && im.is_empty());
    }

    #[test]
    fn test_output_length_matches_input() {
        for n in [2usize, 3, 5, 6, 7, 8, 12, 16, 31, 33] {
            let re = signal(n, 0.7);
            let im = signal(n, 1.3);
            let (out_re, out_im) = fft_1d(&re, &im).unwrap();
            assert_eq!(out_re.len(), n);
            assert_eq!(out_im.len(), n);
        }
    }

    #[test]
    fn test_non_power_of_two_is_truncated_padded_transform() {
        let re = signal(5, 0.9);
        let im = signal(5, 0.4);
        let (out_re, out_im) = fft_1d(&re, &im).unwrap();

        let mut pr = re.clone();
        let mut pi = im.clone();
        pr.resize(8, 0.0);
        pi.resize(8, 0.0);
        let (full_re, full_im) = naive_dft(&pr, &pi);

        for k in 0..5 {
            assert_abs_diff_eq!(out_re[k] as f64, full_re[k], epsilon = 1e-4);
            assert_abs_diff_eq!(out_im[k] as f64, full_im[k], epsilon = 1e-4);
        }
    }

    #[test]
    fn test_matches_naive_dft_power_of_two() {
        let re = signal(16, 0.31);
        let im = signal(16, 0.77);
        let (out_re, out_im) = fft_1d(&re, &im).unwrap();
        let (ref_re, ref_im) = naive_dft(&re, &im);
        for k in 0..16 {
            assert_abs_diff_eq!(out_re[k] as f64, ref_re[k], epsilon = 1e-4);
            assert_abs_diff_eq!(out_im[k] as f64, ref_im[k], epsilon = 1e-4);
        }
    }

    #[test]
    fn test_matches_rustfft() {
        for n in [2usize, 4, 32, 256] {
            let re = signal(n, 0.113);
            let im = signal(n, 0.521);
            let (out_re, out_im) = fft_1d(&re, &im).unwrap();

            let mut planner = FftPlanner::<f32>::new();
            let fft = planner.plan_fft_forward(n);
            let mut buf: Vec<Complex<f32>> = re
                .iter()
                .zip(&im)
                .map(|(&r, &i)| Complex::new(r, i))
                .collect();
            fft.process(&mut buf);

            for k in 0..n {
                assert_abs_diff_eq!(out_re[k], buf[k].re, epsilon = 1e-3);
                assert_abs_diff_eq!(out_im[k], buf[k].im, epsilon = 1e-3);
            }
        }
    }

    #[test]
    fn test_linearity() {
        for n in [5usize, 8, 13] {
            let (ar, ai) = (signal(n, 0.2), signal(n, 0.9));
            let (br, bi) = (signal(n, 1.7), signal(n, 0.05));
            let sum_r: Vec<f32> = ar.iter().zip(&br).map(|(a, b)| a + b).collect();
            let sum_i: Vec<f32> = ai.iter().zip(&bi).map(|(a, b)| a + b).collect();

            let (fa_r, fa_i) = fft_1d(&ar, &ai).unwrap();
            let (fb_r, fb_i) = fft_1d(&br, &bi).unwrap();
            let (fs_r, fs_i) = fft_1d(&sum_r, &sum_i).unwrap();

            for k in 0..n {
                assert_abs_diff_eq!(fs_r[k], fa_r[k] + fb_r[k], epsilon = 1e-4);
                assert_abs_diff_eq!(fs_i[k], fa_i[k] + fb_i[k], epsilon = 1e-4);
            }
        }
    }

    #[test]
    fn test_impulse_has_flat_spectrum() {
        for n in [2usize, 8, 64] {
            let mut re = vec![0.0f32; n];
            re[0] = 1.0;
            let (out_re, out_im) = fft_1d(&re, &vec![0.0; n]).unwrap();
            for k in 0..n {
                let mag = (out_re[k] * out_re[k] + out_im[k] * out_im[k]).sqrt();
                assert_abs_diff_eq!(mag, 1.0, epsilon = 1e-6);
            }
        }
    }

    #[test]
    fn test_size_mismatch() {
        let err = fft_1d(&[1.0, 2.0], &[0.0]).unwrap_err();
        assert!(matches!(err, OpsError::SizeMismatch(_)));

        let mut re = [0.0f32; 3];
        let mut im = [0.0f32; 2];
        assert!(fft_in_place(&mut re, &mut im).is_err());
    }

    #[test]
    fn test_in_place_matches_fft_1d() {
        let re = signal(12, 0.66);
        let im = signal(12, 0.12);
        let (want_re, want_im) = fft_1d(&re, &im).unwrap();

        let mut got_re = re.clone();
        let mut got_im = im.clone();
        fft_in_place(&mut got_re, &mut got_im).unwrap();
        assert_eq!(got_re, want_re);
        assert_eq!(got_im, want_im);
    }

    #[test]
    fn test_from_real_checks_length() {
        assert!(ComplexField::from_real(&[0.0; 6], 3, 2).is_ok());
        let err = ComplexField::from_real(&[0.0; 5], 3, 2).unwrap_err();
        assert!(matches!(err, OpsError::InvalidDimensions(_)));
    }

    #[test]
    fn test_2d_row_column_order_independent() {
        let (w, h) = (8, 4);
        let values: Vec<f32> = (0..w * h).map(|i| ((i * 7 % 11) as f32) / 11.0).collect();

        let rows_first = fft_2d(ComplexField::from_real(&values, w, h).unwrap());

        let mut cols_first = ComplexField::from_real(&values, w, h).unwrap();
        cols_first.fft_columns();
        cols_first.fft_rows();

        for i in 0..w * h {
            assert_abs_diff_eq!(rows_first.re()[i], cols_first.re()[i], epsilon = 1e-4);
            assert_abs_diff_eq!(rows_first.im()[i], cols_first.im()[i], epsilon = 1e-4);
        }
    }

    #[test]
    fn test_2d_matches_rows_then_columns_of_1d() {
        let (w, h) = (4, 8);
        let values: Vec<f32> = (0..w * h).map(|i| (i as f32 * 0.37).cos()).collect();
        let spectrum = fft_2d(ComplexField::from_real(&values, w, h).unwrap());

        let mut re = values.clone();
        let mut im = vec![0.0f32; w * h];
        for y in 0..h {
            let (r, i) = fft_1d(&re[y * w..(y + 1) * w], &im[y * w..(y + 1) * w]).unwrap();
            re[y * w..(y + 1) * w].copy_from_slice(&r);
            im[y * w..(y + 1) * w].copy_from_slice(&i);
        }
        for x in 0..w {
            let col_r: Vec<f32> = (0..h).map(|y| re[y * w + x]).collect();
            let col_i: Vec<f32> = (0..h).map(|y| im[y * w + x]).collect();
            let (r, i) = fft_1d(&col_r, &col_i).unwrap();
            for y in 0..h {
                re[y * w + x] = r[y];
                im[y * w + x] = i[y];
            }
        }

        for i in 0..w * h {
            assert_abs_diff_eq!(spectrum.re()[i], re[i], epsilon = 1e-5);
            assert_abs_diff_eq!(spectrum.im()[i], im[i], epsilon = 1e-5);
        }
    }

    #[test]
    fn test_2d_dc_is_sum() {
        let values: Vec<f32> = (0..15).map(|i| i as f32 / 15.0).collect();
        let spectrum = fft_2d(ComplexField::from_real(&values, 5, 3).unwrap());
        assert_eq!((spectrum.width(), spectrum.height()), (5, 3));
        let sum: f32 = values.iter().sum();
        assert_abs_diff_eq!(spectrum.get(0, 0).0, sum, epsilon = 1e-4);
        assert_abs_diff_eq!(spectrum.get(0, 0).1, 0.0, epsilon = 1e-4);
    }

    #[test]
    fn test_2d_empty_field() {
        let spectrum = fft_2d(ComplexField::from_real(&[], 0, 7).unwrap());
        assert!(spectrum.re().is_empty());
    }
}
