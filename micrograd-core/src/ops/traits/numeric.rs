use num_traits::{Float, NumAssignOps};
use rand::Rng;
use rand_distr::StandardNormal;
use std::fmt::{Debug, Display};

/// A trait representing the floating point types a [`Node`](crate::Node) can hold.
///
/// Strictly reserved for `f32` and `f64`. Beyond the arithmetic of
/// [`Float`], implementors provide standard-normal sampling for weight
/// initialization.
pub trait Scalar:
    Float
    + NumAssignOps
    + Debug
    + Display
    + Default
    + Send
    + Sync
    + 'static
{
    /// Draws one sample from N(0, 1).
    fn sample_standard_normal<R: Rng + ?Sized>(rng: &mut R) -> Self;

    /// Lossy conversion to `f64`, used by diagnostics and gradient checking.
    fn as_f64(self) -> f64;

    /// Lossy conversion from `f64`.
    fn from_f64(value: f64) -> Self;
}

impl Scalar for f32 {
    fn sample_standard_normal<R: Rng + ?Sized>(rng: &mut R) -> Self {
        rng.sample(StandardNormal)
    }

    fn as_f64(self) -> f64 {
        self as f64
    }

    fn from_f64(value: f64) -> Self {
        value as f32
    }
}

impl Scalar for f64 {
    fn sample_standard_normal<R: Rng + ?Sized>(rng: &mut R) -> Self {
        rng.sample(StandardNormal)
    }

    fn as_f64(self) -> f64 {
        self
    }

    fn from_f64(value: f64) -> Self {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn process_scalar<T: Scalar>(value: T) -> T {
        value + T::one()
    }

    #[test]
    fn test_f32_impl_scalar() {
        assert_eq!(process_scalar(1.0f32), 2.0);
    }

    #[test]
    fn test_f64_impl_scalar() {
        assert_eq!(process_scalar(1.0f64), 2.0);
    }

    #[test]
    fn test_sampling_is_reproducible_with_seed() {
        let mut rng_a = StdRng::seed_from_u64(7);
        let mut rng_b = StdRng::seed_from_u64(7);
        let a: Vec<f64> = (0..4).map(|_| f64::sample_standard_normal(&mut rng_a)).collect();
        let b: Vec<f64> = (0..4).map(|_| f64::sample_standard_normal(&mut rng_b)).collect();
        assert_eq!(a, b);
        assert!(a.iter().all(|x| x.is_finite()));
    }
}
