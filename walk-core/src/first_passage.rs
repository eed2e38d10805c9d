//! First passage of a biased walker on the integers.

use rand::Rng;
use tracing::trace;

use crate::error::{WalkError, WalkResult};

/// Walks from 0 with steps of `+1` (probability `p`) or `-1` until the
/// walker first stands on `target`.
///
/// Positions are checked after each step, so a `target` of 0 counts the
/// first *return* to the origin.
///
/// ### Returns
/// - `Ok(Some(n))` - `target` was first reached after step `n` (1-based).
/// - `Ok(None)` - `target` was not reached within `max_steps` steps.
///
/// ### Errors
/// [`WalkError::InvalidProbability`] if `p` is not in `[0, 1]`.
pub fn first_passage<R: Rng>(
    rng: &mut R,
    max_steps: usize,
    target: i64,
    p: f64,
) -> WalkResult<Option<usize>> {
    if !(0.0..=1.0).contains(&p) {
        return Err(WalkError::InvalidProbability(p));
    }

    let mut x: i64 = 0;
    for n in 1..=max_steps {
        x += if rng.random::<f64>() < p { 1 } else { -1 };
        if x == target {
            return Ok(Some(n));
        }
    }
    Ok(None)
}

/// Mean first-passage time over `samples` independent walkers.
///
/// Walkers that never reach `target` are left out of the mean; `None` is
/// returned when none of them do.
pub fn mean_first_passage<R: Rng>(
    rng: &mut R,
    samples: usize,
    max_steps: usize,
    target: i64,
    p: f64,
) -> WalkResult<Option<f64>> {
    let mut total = 0.0;
    let mut reached = 0usize;
    for _ in 0..samples {
        if let Some(n) = first_passage(rng, max_steps, target, p)? {
            total += n as f64;
            reached += 1;
        }
    }
    trace!(target, samples, reached, "first passage ensemble");

    Ok((reached > 0).then(|| total / reached as f64))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn certain_right_steps_reach_target_in_target_steps() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(first_passage(&mut rng, 100, 5, 1.0).unwrap(), Some(5));
    }

    #[test]
    fn certain_left_steps_reach_negative_target() {
        let mut rng = StdRng::seed_from_u64(2);
        assert_eq!(first_passage(&mut rng, 100, -3, 0.0).unwrap(), Some(3));
        assert_eq!(first_passage(&mut rng, 100, 3, 0.0).unwrap(), None);
    }

    #[test]
    fn gives_up_after_max_steps() {
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(first_passage(&mut rng, 4, 5, 1.0).unwrap(), None);
        assert_eq!(first_passage(&mut rng, 0, 1, 1.0).unwrap(), None);
    }

    #[test]
    fn origin_target_means_first_return() {
        let mut rng = StdRng::seed_from_u64(4);
        assert_eq!(first_passage(&mut rng, 50, 0, 1.0).unwrap(), None);

        if let Some(n) = first_passage(&mut rng, 100_000, 0, 0.5).unwrap() {
            assert_eq!(n % 2, 0);
        }
    }

    #[test]
    fn unbiased_passage_time_has_matching_parity() {
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..50 {
            if let Some(n) = first_passage(&mut rng, 10_000, 3, 0.5).unwrap() {
                assert!(n >= 3);
                assert_eq!(n % 2, 1);
            }
        }
    }

    #[test]
    fn rejects_invalid_probability() {
        let mut rng = StdRng::seed_from_u64(6);
        for p in [-0.1, 1.5, f64::NAN] {
            assert!(matches!(
                first_passage(&mut rng, 10, 1, p),
                Err(WalkError::InvalidProbability(_))
            ));
        }
    }

    #[test]
    fn mean_over_deterministic_walkers() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(
            mean_first_passage(&mut rng, 20, 100, 7, 1.0).unwrap(),
            Some(7.0)
        );
        assert_eq!(mean_first_passage(&mut rng, 20, 100, 7, 0.0).unwrap(), None);
    }
}
