use walk_core::config::{PolicyKind, WalkConfig};
use walk_core::ensemble::{Ensemble, diffusion_exponent};
use walk_core::first_passage::first_passage;
use walk_core::walk::norm;
use walk_core::{Magnitude, StepPolicy, WalkError, WalkGenerator};

#[test]
fn every_configured_policy_builds_and_walks() {
    for kind in PolicyKind::ALL {
        let cfg = WalkConfig {
            policy: kind,
            seed: Some(17),
            steps: 40,
            trials: 12,
            ..WalkConfig::default()
        };
        let mut g = WalkGenerator::from_config(&cfg).unwrap();

        let walk = g.get_walk(cfg.steps);
        assert_eq!(walk.len(), cfg.steps + 1, "{}", kind.label());
        assert!(walk.origin().iter().all(|c| *c == 0.0));

        let distances = g.get_distances(cfg.trials, cfg.steps);
        assert_eq!(distances.len(), cfg.trials);
        assert!(distances.iter().all(|d| d.is_finite() && *d >= 0.0));
    }
}

#[test]
fn same_seed_same_ensemble() {
    let policy = StepPolicy::Directional(Magnitude::Pareto { nu: 1.5 });
    let mut a = WalkGenerator::seeded(policy, 2, 123).unwrap();
    let mut b = WalkGenerator::seeded(policy, 2, 123).unwrap();

    assert_eq!(Ensemble::sample(&mut a, 30, 30), Ensemble::sample(&mut b, 30, 30));
}

#[test]
fn honeycomb_walk_stays_on_the_lattice() {
    // Sites of the honeycomb lattice with unit bonds sit at integer
    // combinations of the three bond vectors, reached in an alternating
    // pattern, so after an even number of steps the walker is on the
    // sublattice of the origin: y is a multiple of 1.5 and x of sqrt(3)/2.
    let mut g = WalkGenerator::seeded(StepPolicy::Honeycomb, 2, 31).unwrap();
    let walk = g.get_walk(200);
    let half_root3 = 3f64.sqrt() / 2.0;

    for p in walk.positions().iter().step_by(2) {
        let ky = p[1] / 1.5;
        let kx = p[0] / half_root3;
        assert!((ky - ky.round()).abs() < 1e-9, "p={p:?}");
        assert!((kx - kx.round()).abs() < 1e-9, "p={p:?}");
    }
}

#[test]
fn lattice_rms_distance_grows_like_square_root() {
    let mut g = WalkGenerator::seeded(StepPolicy::Cubic, 1, 5).unwrap();
    let fit = diffusion_exponent(&mut g, &[25, 100, 400], 3000).unwrap();
    assert!((fit.slope - 0.5).abs() < 0.05, "slope={}", fit.slope);
}

#[test]
fn endpoint_norms_match_distances_for_exponential_steps() {
    let policy = StepPolicy::Directional(Magnitude::Exponential);
    let mut a = WalkGenerator::seeded(policy, 4, 64).unwrap();
    let mut b = WalkGenerator::seeded(policy, 4, 64).unwrap();

    let endpoints = a.get_endpoints(8, 16);
    let distances = b.get_distances(8, 16);
    for (e, d) in endpoints.iter().zip(distances) {
        assert_eq!(norm(e), d);
    }
}

#[test]
fn invalid_parameters_are_reported() {
    assert_eq!(
        WalkGenerator::new(StepPolicy::Cubic, 0).unwrap_err(),
        WalkError::ZeroDimension
    );

    let mut rng = rand::rng();
    assert!(first_passage(&mut rng, 10, 1, 2.0).is_err());
}
