use serde::Deserialize;

use crate::policy::{Magnitude, StepPolicy};

/// Flat, serializable name of a [`StepPolicy`].
///
/// Directional walks are named after their step-size distribution; the
/// Pareto exponent lives in [`WalkConfig::nu`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PolicyKind {
    #[default]
    Cubic,
    Triangular,
    Honeycomb,
    Constant,
    Uniform,
    Gaussian,
    Exponential,
    Pareto,
}

impl PolicyKind {
    pub const ALL: [PolicyKind; 8] = [
        PolicyKind::Cubic,
        PolicyKind::Triangular,
        PolicyKind::Honeycomb,
        PolicyKind::Constant,
        PolicyKind::Uniform,
        PolicyKind::Gaussian,
        PolicyKind::Exponential,
        PolicyKind::Pareto,
    ];

    pub fn to_policy(self, nu: f64) -> StepPolicy {
        match self {
            PolicyKind::Cubic => StepPolicy::Cubic,
            PolicyKind::Triangular => StepPolicy::Triangular,
            PolicyKind::Honeycomb => StepPolicy::Honeycomb,
            PolicyKind::Constant => StepPolicy::Directional(Magnitude::Constant),
            PolicyKind::Uniform => StepPolicy::Directional(Magnitude::Uniform),
            PolicyKind::Gaussian => StepPolicy::Directional(Magnitude::Gaussian),
            PolicyKind::Exponential => StepPolicy::Directional(Magnitude::Exponential),
            PolicyKind::Pareto => StepPolicy::Directional(Magnitude::Pareto { nu }),
        }
    }

    pub fn label(self) -> &'static str {
        self.to_policy(2.0).name()
    }
}

/// Parameters for building a generator and sampling ensembles.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct WalkConfig {
    pub policy: PolicyKind,
    /// Space dimension. `None` uses the policy's default.
    pub dimension: Option<usize>,
    /// Pareto tail exponent; ignored by other policies.
    pub nu: f64,
    /// Fixed seed for reproducible runs. `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Steps per walk.
    pub steps: usize,
    /// Walks per ensemble.
    pub trials: usize,
}

impl Default for WalkConfig {
    fn default() -> Self {
        Self {
            policy: PolicyKind::Cubic,
            dimension: None,
            nu: 2.0,
            seed: None,
            steps: 1000,
            trials: 500,
        }
    }
}

impl WalkConfig {
    pub fn step_policy(&self) -> StepPolicy {
        self.policy.to_policy(self.nu)
    }

    pub fn resolved_dimension(&self) -> usize {
        self.dimension
            .unwrap_or_else(|| self.step_policy().default_dimension())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_fill_missing_fields() {
        let cfg: WalkConfig = toml::from_str("policy = \"honeycomb\"\nsteps = 50\n").unwrap();
        assert_eq!(cfg.policy, PolicyKind::Honeycomb);
        assert_eq!(cfg.steps, 50);
        assert_eq!(cfg.trials, WalkConfig::default().trials);
        assert_eq!(cfg.seed, None);
        assert_eq!(cfg.resolved_dimension(), 2);
    }

    #[test]
    fn pareto_kind_carries_exponent() {
        let cfg: WalkConfig =
            toml::from_str("policy = \"pareto\"\nnu = 1.5\ndimension = 3\nseed = 7\n").unwrap();
        assert_eq!(
            cfg.step_policy(),
            StepPolicy::Directional(Magnitude::Pareto { nu: 1.5 })
        );
        assert_eq!(cfg.resolved_dimension(), 3);
        assert_eq!(cfg.seed, Some(7));
    }

    #[test]
    fn empty_document_is_default() {
        let cfg: WalkConfig = toml::from_str("").unwrap();
        assert_eq!(cfg, WalkConfig::default());
        assert_eq!(cfg.resolved_dimension(), 1);
    }

    #[test]
    fn labels_match_policy_names() {
        for kind in PolicyKind::ALL {
            assert_eq!(kind.label(), kind.to_policy(3.0).name());
        }
        assert_eq!(PolicyKind::Gaussian.label(), "gaussian");
    }
}
