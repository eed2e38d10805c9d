//! Statistics over many independent walks.

use rand::Rng;
use tracing::debug;

use crate::error::{WalkError, WalkResult};
use crate::fit::{Fit, fit_power_law};
use crate::generator::WalkGenerator;
use crate::walk::norm;

/// Endpoints and distances of `trials` walks of `steps` steps each.
#[derive(Clone, Debug, PartialEq)]
pub struct Ensemble {
    pub steps: usize,
    pub endpoints: Vec<Vec<f64>>,
    pub distances: Vec<f64>,
}

impl Ensemble {
    pub fn sample<R: Rng>(generator: &mut WalkGenerator<R>, trials: usize, steps: usize) -> Self {
        Self::from_endpoints(steps, generator.get_endpoints(trials, steps))
    }

    pub fn from_endpoints(steps: usize, endpoints: Vec<Vec<f64>>) -> Self {
        let distances = endpoints.iter().map(|e| norm(e)).collect();
        Self {
            steps,
            endpoints,
            distances,
        }
    }

    pub fn len(&self) -> usize {
        self.endpoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.endpoints.is_empty()
    }

    pub fn mean_distance(&self) -> Option<f64> {
        mean(self.distances.iter().copied())
    }

    /// Mean of the squared endpoint distances.
    pub fn mean_square_displacement(&self) -> Option<f64> {
        mean(self.distances.iter().map(|d| d * d))
    }

    pub fn rms_distance(&self) -> Option<f64> {
        self.mean_square_displacement().map(f64::sqrt)
    }

    /// Componentwise mean of the endpoints; close to zero for unbiased walks.
    pub fn mean_endpoint(&self) -> Option<Vec<f64>> {
        let first = self.endpoints.first()?;
        let mut sum = vec![0.0; first.len()];
        for e in &self.endpoints {
            for (s, c) in sum.iter_mut().zip(e) {
                *s += c;
            }
        }
        let n = self.endpoints.len() as f64;
        Some(sum.into_iter().map(|s| s / n).collect())
    }
}

fn mean(values: impl Iterator<Item = f64>) -> Option<f64> {
    let (sum, count) = values.fold((0.0, 0usize), |(s, c), v| (s + v, c + 1));
    (count > 0).then(|| sum / count as f64)
}

/// Estimates how the RMS displacement scales with the number of steps.
///
/// Samples an ensemble of `trials` walks for every entry of `step_counts`
/// and fits `rms = A·N^b` by least squares in log-log coordinates. The
/// returned [`Fit::slope`] is the exponent `b` (0.5 for ordinary diffusion).
pub fn diffusion_exponent<R: Rng>(
    generator: &mut WalkGenerator<R>,
    step_counts: &[usize],
    trials: usize,
) -> WalkResult<Fit> {
    let mut xs = Vec::with_capacity(step_counts.len());
    let mut ys = Vec::with_capacity(step_counts.len());

    for &steps in step_counts {
        let rms = Ensemble::sample(generator, trials, steps)
            .rms_distance()
            .ok_or_else(|| WalkError::Fit("ensemble has no walks".into()))?;
        xs.push(steps as f64);
        ys.push(rms);
    }

    let fit = fit_power_law(&xs, &ys)?;
    debug!(
        policy = generator.policy().name(),
        exponent = fit.slope,
        r_squared = fit.r_squared,
        "fitted diffusion exponent"
    );
    Ok(fit)
}
