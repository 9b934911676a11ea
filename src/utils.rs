//!
//! Numeric aliases and small math helpers shared across the crate.
//!
use num_traits::AsPrimitive;
use rustfft::num_complex::Complex;

pub type Int = i32; // sample type stored in data files
pub type Float = f64; // float type used for transforms and plotting
pub type CFloat = Complex<Float>;

/// Signal energy (sum of squares), accumulated as float so that
/// full-scale integer samples cannot overflow
pub fn energy<T, R>(vals: &[T]) -> R
where T: Copy + AsPrimitive<R>, R: 'static + num_traits::Float {
    vals.iter()
        .fold(R::zero(), |acc, &x| acc + x.as_() * x.as_())
}

/// Root-mean-square average of a sample slice
pub fn rms<T, R>(vals: &[T]) -> R
where
    T: Copy + AsPrimitive<R>,
    usize: AsPrimitive<R>,
    R: 'static + num_traits::Float
{
    if vals.is_empty() {
        return R::zero();
    }
    (energy::<T, R>(vals) / vals.len().as_()).sqrt()
}

/// Bin index of the largest magnitude, None for an empty spectrum
pub fn peak_bin(mags: &[Float]) -> Option<usize> {
    mags.iter()
        .enumerate()
        .max_by(|(_, a), (_, b)| a.total_cmp(b))
        .map(|(ix, _)| ix)
}
