//! The random walk generator.
//!
//! A [`WalkGenerator`] pairs a [`StepPolicy`] with a space dimension and its
//! own random source. All three public operations draw fresh steps on every
//! call:
//! 1. [`WalkGenerator::get_walk`] — one trajectory of `N` steps.
//! 2. [`WalkGenerator::get_endpoints`] — final positions of `M` walks.
//! 3. [`WalkGenerator::get_distances`] — distances of those endpoints from
//!    the origin.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{ChiSquared, Distribution, Exp1, Pareto, StandardNormal};
use tracing::{debug, trace};

use crate::config::WalkConfig;
use crate::error::{WalkError, WalkResult};
use crate::policy::{Magnitude, StepPolicy};
use crate::walk::{Walk, norm};

/// Prepared step-size sampler for directional walks.
#[derive(Clone, Debug)]
enum MagnitudeSampler {
    Constant,
    Uniform,
    Gaussian { chi: ChiSquared<f64>, dof: f64 },
    Exponential,
    Pareto { lomax: Pareto<f64>, norm: f64 },
}

impl MagnitudeSampler {
    fn new(magnitude: Magnitude, dimension: usize) -> WalkResult<Self> {
        Ok(match magnitude {
            Magnitude::Constant => Self::Constant,
            Magnitude::Uniform => Self::Uniform,
            Magnitude::Gaussian => {
                let dof = dimension as f64;
                let chi = ChiSquared::new(dof).map_err(|e| WalkError::Distribution(e.to_string()))?;
                Self::Gaussian { chi, dof }
            }
            Magnitude::Exponential => Self::Exponential,
            Magnitude::Pareto { nu } => {
                if !(nu.is_finite() && nu > 0.0) {
                    return Err(WalkError::InvalidExponent(nu));
                }
                let lomax =
                    Pareto::new(1.0, nu).map_err(|e| WalkError::Distribution(e.to_string()))?;
                Self::Pareto {
                    lomax,
                    norm: Magnitude::pareto_norm(nu),
                }
            }
        })
    }

    fn sample<R: Rng>(&self, rng: &mut R) -> f64 {
        match self {
            Self::Constant => 1.0,
            Self::Uniform => 2.0 * rng.random::<f64>(),
            Self::Gaussian { chi, dof } => (chi.sample(rng) / dof).sqrt(),
            Self::Exponential => rng.sample(Exp1),
            // Classical Pareto with unit scale, shifted to start at zero.
            Self::Pareto { lomax, norm } => (lomax.sample(rng) - 1.0) * norm,
        }
    }
}

#[derive(Clone, Debug)]
enum StepKind {
    Lattice {
        basis: Vec<Vec<f64>>,
        /// Negate odd steps (honeycomb sublattices).
        alternate: bool,
    },
    Directional(MagnitudeSampler),
}

/// Draws a unit vector uniformly from the sphere in `dimension` dimensions.
///
/// Normal vectors are rotationally symmetric, so normalizing one gives a
/// uniform direction.
fn random_direction<R: Rng>(dimension: usize, rng: &mut R) -> Vec<f64> {
    loop {
        let v: Vec<f64> = (0..dimension)
            .map(|_| rng.sample::<f64, _>(StandardNormal))
            .collect();
        let len = norm(&v);
        if len > 0.0 {
            return v.into_iter().map(|c| c / len).collect();
        }
    }
}

/// Random walk generator for one step policy in a fixed dimension.
///
/// The generator owns its random source; nothing else is shared between
/// calls. For parallel ensembles give each worker its own generator with an
/// independent seed.
#[derive(Debug)]
pub struct WalkGenerator<R = StdRng> {
    policy: StepPolicy,
    dimension: usize,
    kind: StepKind,
    rng: R,
}

impl WalkGenerator<StdRng> {
    /// Creates a generator seeded from the operating system.
    pub fn new(policy: StepPolicy, dimension: usize) -> WalkResult<Self> {
        Self::with_rng(policy, dimension, StdRng::from_os_rng())
    }

    /// Creates a reproducible generator.
    pub fn seeded(policy: StepPolicy, dimension: usize, seed: u64) -> WalkResult<Self> {
        Self::with_rng(policy, dimension, StdRng::seed_from_u64(seed))
    }

    pub fn from_config(cfg: &WalkConfig) -> WalkResult<Self> {
        let policy = cfg.step_policy();
        let dimension = cfg.resolved_dimension();
        match cfg.seed {
            Some(seed) => Self::seeded(policy, dimension, seed),
            None => Self::new(policy, dimension),
        }
    }
}

impl<R: Rng> WalkGenerator<R> {
    /// Creates a generator that draws from `rng`.
    ///
    /// ### Errors
    /// - [`WalkError::ZeroDimension`] if `dimension` is 0.
    /// - [`WalkError::DimensionMismatch`] if the policy only exists in a
    ///   different dimension (triangular and honeycomb are 2-D).
    /// - [`WalkError::InvalidExponent`] for a Pareto exponent that is not
    ///   finite and positive.
    pub fn with_rng(policy: StepPolicy, dimension: usize, rng: R) -> WalkResult<Self> {
        if dimension == 0 {
            return Err(WalkError::ZeroDimension);
        }
        if let Some(expected) = policy.fixed_dimension()
            && expected != dimension
        {
            return Err(WalkError::DimensionMismatch {
                policy: policy.name(),
                expected,
                found: dimension,
            });
        }

        let kind = match policy {
            StepPolicy::Directional(magnitude) => {
                StepKind::Directional(MagnitudeSampler::new(magnitude, dimension)?)
            }
            lattice => StepKind::Lattice {
                basis: lattice.lattice_basis(dimension).unwrap_or_default(),
                alternate: matches!(lattice, StepPolicy::Honeycomb),
            },
        };

        debug!(policy = policy.name(), dimension, "created walk generator");

        Ok(Self {
            policy,
            dimension,
            kind,
            rng,
        })
    }

    pub fn policy(&self) -> StepPolicy {
        self.policy
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Draws `n` step vectors of length [`WalkGenerator::dimension`].
    ///
    /// Lattice policies pick a basis vector uniformly with replacement; the
    /// honeycomb lattice negates the pick on odd step indices. Directional
    /// policies multiply a uniform unit direction by a sampled step size.
    pub fn steps(&mut self, n: usize) -> Vec<Vec<f64>> {
        let Self {
            kind,
            rng,
            dimension,
            ..
        } = self;

        match kind {
            StepKind::Lattice { basis, alternate } => (0..n)
                .map(|i| {
                    let mut step = basis[rng.random_range(0..basis.len())].clone();
                    if *alternate && i % 2 == 1 {
                        for c in &mut step {
                            *c = -*c;
                        }
                    }
                    step
                })
                .collect(),
            StepKind::Directional(sampler) => (0..n)
                .map(|_| {
                    let mut step = random_direction(*dimension, rng);
                    let magnitude = sampler.sample(rng);
                    for c in &mut step {
                        *c *= magnitude;
                    }
                    step
                })
                .collect(),
        }
    }

    /// One walk of `n` steps: `n + 1` positions starting at the origin.
    pub fn get_walk(&mut self, n: usize) -> Walk {
        let steps = self.steps(n);
        Walk::from_steps(self.dimension, steps)
    }

    /// Endpoints of `m` independent walks of `n` steps each.
    ///
    /// `m == 0` is not an error: it returns an empty `Vec`.
    pub fn get_endpoints(&mut self, m: usize, n: usize) -> Vec<Vec<f64>> {
        trace!(policy = self.policy.name(), trials = m, steps = n, "sampling endpoints");
        (0..m)
            .map(|_| self.get_walk(n).into_positions().pop().unwrap_or_default())
            .collect()
    }

    /// Distances from the origin after `n` steps, for `m` independent walks.
    pub fn get_distances(&mut self, m: usize, n: usize) -> Vec<f64> {
        self.get_endpoints(m, n).iter().map(|e| norm(e)).collect()
    }
}
