//! Step policies: how a single step of a walk is drawn.
//!
//! A policy is either a lattice (steps are picked from a finite basis) or a
//! directional walk (uniform random direction times a random step size).

use glam::{DMat2, DVec2};
use std::f64::consts::{FRAC_PI_3, TAU};

/// Step-size distribution for directional walks.
///
/// Every variant is scaled so that the mean step size is 1, except
/// [`Magnitude::Gaussian`], whose mean *square* is 1, and
/// [`Magnitude::Pareto`], whose mean is only finite for `nu > 1`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Magnitude {
    /// Every step has length 1.
    Constant,
    /// Uniform on `[0, 2)`.
    Uniform,
    /// `sqrt(chi2(D) / D)`: the length of a normal vector, rescaled.
    Gaussian,
    /// Exponential with unit mean.
    Exponential,
    /// Lomax (Pareto II) with tail exponent `nu`, scaled by
    /// [`Magnitude::pareto_norm`].
    Pareto { nu: f64 },
}

impl Magnitude {
    pub fn name(&self) -> &'static str {
        match self {
            Magnitude::Constant => "constant",
            Magnitude::Uniform => "uniform",
            Magnitude::Gaussian => "gaussian",
            Magnitude::Exponential => "exponential",
            Magnitude::Pareto { .. } => "pareto",
        }
    }

    /// Scale applied to raw Lomax samples with exponent `nu`.
    ///
    /// The raw mean is `1 / (nu - 1)`, so the product has mean 1 whenever
    /// `nu > 1.01`. Below that the factor is clamped to `0.01`.
    #[inline]
    pub fn pareto_norm(nu: f64) -> f64 {
        (nu - 1.0).max(0.01)
    }
}

/// Strategy used by a [`crate::generator::WalkGenerator`] to draw steps.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum StepPolicy {
    /// Unit steps along `±e_i` in D dimensions.
    Cubic,
    /// Six unit steps at 60° increments (2-D only).
    Triangular,
    /// Three unit steps at 120° increments, negated on odd steps (2-D only).
    Honeycomb,
    /// Uniform random direction with a random step size.
    Directional(Magnitude),
}

impl StepPolicy {
    pub fn name(&self) -> &'static str {
        match self {
            StepPolicy::Cubic => "cubic",
            StepPolicy::Triangular => "triangular",
            StepPolicy::Honeycomb => "honeycomb",
            StepPolicy::Directional(m) => m.name(),
        }
    }

    /// The only dimension this policy supports, if it is restricted.
    pub fn fixed_dimension(&self) -> Option<usize> {
        match self {
            StepPolicy::Triangular | StepPolicy::Honeycomb => Some(2),
            StepPolicy::Cubic | StepPolicy::Directional(_) => None,
        }
    }

    pub fn default_dimension(&self) -> usize {
        self.fixed_dimension().unwrap_or(1)
    }

    pub fn is_lattice(&self) -> bool {
        !matches!(self, StepPolicy::Directional(_))
    }

    /// Legal steps of a lattice policy, or `None` for directional walks.
    ///
    /// The dimension is only used by [`StepPolicy::Cubic`]; the 2-D lattices
    /// ignore it.
    pub fn lattice_basis(&self, dimension: usize) -> Option<Vec<Vec<f64>>> {
        match self {
            StepPolicy::Cubic => Some(cubic_basis(dimension)),
            StepPolicy::Triangular => Some(rotated_basis(6, FRAC_PI_3)),
            StepPolicy::Honeycomb => Some(rotated_basis(3, TAU / 3.0)),
            StepPolicy::Directional(_) => None,
        }
    }
}

/// `+e_0, .., +e_{D-1}` followed by `-e_0, .., -e_{D-1}`.
pub fn cubic_basis(dimension: usize) -> Vec<Vec<f64>> {
    let mut basis = Vec::with_capacity(2 * dimension);
    for sign in [1.0, -1.0] {
        for axis in 0..dimension {
            let mut e = vec![0.0; dimension];
            e[axis] = sign;
            basis.push(e);
        }
    }
    basis
}

/// `count` images of `(0, 1)` under successive rotations by `angle`.
pub fn rotated_basis(count: usize, angle: f64) -> Vec<Vec<f64>> {
    let rot = DMat2::from_angle(angle);
    let mut v = DVec2::Y;
    let mut basis = Vec::with_capacity(count);
    for _ in 0..count {
        basis.push(v.to_array().to_vec());
        v = rot * v;
    }
    basis
}
