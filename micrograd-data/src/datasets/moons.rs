// micrograd-data/src/datasets/moons.rs

use super::vec_dataset::VecDataset;
use micrograd_core::{Context, MicrogradError, Node, Scalar};
use rand::seq::SliceRandom;
use rand::Rng;
use rand_distr::{Distribution, Normal};
use std::f64::consts::PI;

/// Points of two interleaving half circles and their class labels.
#[derive(Debug, Clone, PartialEq)]
pub struct Moons {
    pub points: Vec<[f64; 2]>,
    /// 0 for the outer (upper) moon, 1 for the inner (lower) one.
    pub labels: Vec<usize>,
}

impl Moons {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// One leaf pair per point, recorded on `ctx`.
    pub fn inputs<T: Scalar>(&self, ctx: &Context<T>) -> Vec<Vec<Node<T>>> {
        self.points
            .iter()
            .map(|&[x, y]| ctx.values(&[T::from_f64(x), T::from_f64(y)]))
            .collect()
    }

    /// Labels mapped to `-1` (class 0) and `+1` (class 1), the targets of a
    /// max-margin loss.
    pub fn signed_labels(&self) -> Vec<f64> {
        self.labels
            .iter()
            .map(|&label| if label == 0 { -1.0 } else { 1.0 })
            .collect()
    }

    pub fn into_dataset(self) -> VecDataset<([f64; 2], usize)> {
        self.points.into_iter().zip(self.labels).collect()
    }
}

/// Generates two interleaving half circles.
///
/// The first `n_samples / 2` points lie on the outer moon
/// `(cos θ, sin θ)`, the rest on the inner moon
/// `(1 - cos θ, 0.5 - sin θ)`, with θ evenly spaced over `[0, π]`. When
/// `noise > 0`, every coordinate gets Gaussian noise of that standard
/// deviation. When `shuffle` is set, points and labels are permuted together.
///
/// # Errors
///
/// `MicrogradError::UnsupportedOperation` for fewer than two samples, or for
/// a `noise` that is negative, infinite or NaN.
pub fn make_moons<R: Rng + ?Sized>(
    n_samples: usize,
    noise: f64,
    shuffle: bool,
    rng: &mut R,
) -> Result<Moons, MicrogradError> {
    if n_samples < 2 {
        return Err(MicrogradError::UnsupportedOperation(format!(
            "make_moons needs at least 2 samples, got {}",
            n_samples
        )));
    }
    if !(noise >= 0.0 && noise.is_finite()) {
        return Err(MicrogradError::UnsupportedOperation(format!(
            "make_moons noise must be a finite non-negative standard deviation, got {}",
            noise
        )));
    }
    let normal = Normal::new(0.0, noise).map_err(|e| {
        MicrogradError::UnsupportedOperation(format!("Invalid moons noise {}: {}", noise, e))
    })?;

    let n_outer = n_samples / 2;
    let n_inner = n_samples - n_outer;

    let mut points: Vec<[f64; 2]> = Vec::with_capacity(n_samples);
    points.extend(half_circle_angles(n_outer).map(|theta| [theta.cos(), theta.sin()]));
    points.extend(
        half_circle_angles(n_inner).map(|theta| [1.0 - theta.cos(), 1.0 - theta.sin() - 0.5]),
    );
    let mut labels: Vec<usize> = std::iter::repeat(0)
        .take(n_outer)
        .chain(std::iter::repeat(1).take(n_inner))
        .collect();

    if noise > 0.0 {
        for point in &mut points {
            point[0] += normal.sample(&mut *rng);
            point[1] += normal.sample(&mut *rng);
        }
    }

    if shuffle {
        let mut order: Vec<usize> = (0..n_samples).collect();
        order.shuffle(&mut *rng);
        points = order.iter().map(|&i| points[i]).collect();
        labels = order.iter().map(|&i| labels[i]).collect();
    }

    log::debug!(
        "Generated {} moons samples ({} outer, {} inner), noise {}, shuffled: {}",
        n_samples,
        n_outer,
        n_inner,
        noise,
        shuffle
    );
    Ok(Moons { points, labels })
}

/// `count` angles evenly spaced over `[0, π]`; a single angle is 0.
fn half_circle_angles(count: usize) -> impl Iterator<Item = f64> {
    let step = if count > 1 {
        PI / (count - 1) as f64
    } else {
        0.0
    };
    (0..count).map(move |i| step * i as f64)
}

#[cfg(test)]
#[path = "moons_test.rs"]
mod tests;
