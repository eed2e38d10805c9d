/// Euclidean norm of a vector.
#[inline]
pub fn norm(v: &[f64]) -> f64 {
    v.iter().map(|c| c * c).sum::<f64>().sqrt()
}

/// A trajectory in D dimensions.
///
/// `positions[0]` is always the origin and `positions[i]` is
/// `positions[i - 1]` plus step `i`. A walk of `N` steps therefore holds
/// `N + 1` positions and is never empty.
#[derive(Clone, Debug, PartialEq)]
pub struct Walk {
    positions: Vec<Vec<f64>>,
}

impl Walk {
    /// Accumulates `steps` into a trajectory starting at the origin.
    ///
    /// ### Parameters
    /// - `dimension` - Length of every position vector.
    /// - `steps` - Per-step displacements, each of length `dimension`.
    pub fn from_steps<I>(dimension: usize, steps: I) -> Self
    where
        I: IntoIterator<Item = Vec<f64>>,
    {
        let steps = steps.into_iter();
        let mut positions = Vec::with_capacity(steps.size_hint().0 + 1);
        let mut current = vec![0.0; dimension];
        positions.push(current.clone());

        for step in steps {
            debug_assert_eq!(step.len(), dimension);
            for (c, s) in current.iter_mut().zip(&step) {
                *c += s;
            }
            positions.push(current.clone());
        }

        Self { positions }
    }

    pub fn positions(&self) -> &[Vec<f64>] {
        &self.positions
    }

    pub fn into_positions(self) -> Vec<Vec<f64>> {
        self.positions
    }

    /// Number of positions, origin included.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn step_count(&self) -> usize {
        self.positions.len() - 1
    }

    pub fn dimension(&self) -> usize {
        self.positions[0].len()
    }

    pub fn origin(&self) -> &[f64] {
        &self.positions[0]
    }

    pub fn endpoint(&self) -> &[f64] {
        &self.positions[self.positions.len() - 1]
    }

    /// Distance of the endpoint from the origin.
    pub fn distance(&self) -> f64 {
        norm(self.endpoint())
    }

    /// Displacements between consecutive positions.
    pub fn steps(&self) -> impl Iterator<Item = Vec<f64>> + '_ {
        self.positions
            .windows(2)
            .map(|w| w[1].iter().zip(&w[0]).map(|(b, a)| b - a).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_steps_accumulates_from_origin() {
        let walk = Walk::from_steps(2, vec![vec![1.0, 0.0], vec![0.0, -1.0], vec![1.0, 0.0]]);

        assert_eq!(walk.len(), 4);
        assert_eq!(walk.step_count(), 3);
        assert_eq!(walk.dimension(), 2);
        assert_eq!(walk.origin(), &[0.0, 0.0]);
        assert_eq!(walk.positions()[1], vec![1.0, 0.0]);
        assert_eq!(walk.positions()[2], vec![1.0, -1.0]);
        assert_eq!(walk.endpoint(), &[2.0, -1.0]);
        assert!((walk.distance() - 5f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn zero_steps_is_just_the_origin() {
        let walk = Walk::from_steps(3, Vec::new());
        assert_eq!(walk.len(), 1);
        assert!(!walk.is_empty());
        assert_eq!(walk.origin(), walk.endpoint());
        assert_eq!(walk.distance(), 0.0);
        assert_eq!(walk.steps().count(), 0);
    }

    #[test]
    fn steps_recovers_the_displacements() {
        let steps = vec![vec![0.5], vec![-2.0], vec![1.25]];
        let walk = Walk::from_steps(1, steps.clone());
        let recovered: Vec<Vec<f64>> = walk.steps().collect();
        assert_eq!(recovered, steps);
    }

    #[test]
    fn norm_of_vectors() {
        assert_eq!(norm(&[]), 0.0);
        assert_eq!(norm(&[3.0, 4.0]), 5.0);
        assert_eq!(norm(&[-2.0]), 2.0);
    }
}
