use crate::core::models::particle::Particle;
use serde::{Deserialize, Serialize};

/// An immutable range filter over a particle list and a paired property list.
///
/// Keeps particles whose property value lies strictly inside `(min, max)`,
/// optionally comparing the absolute value. The property list must be
/// index-aligned with the particle list; surplus entries on either side are
/// ignored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RangeSelection {
    pub min: f64,
    pub max: f64,
    pub absolute: bool,
}

impl RangeSelection {
    pub fn new(min: f64, max: f64) -> Self {
        Self {
            min,
            max,
            absolute: false,
        }
    }

    /// A selection comparing |value| against the bounds.
    pub fn absolute(min: f64, max: f64) -> Self {
        Self {
            min,
            max,
            absolute: true,
        }
    }

    pub fn contains(&self, value: f64) -> bool {
        let value = if self.absolute { value.abs() } else { value };
        value > self.min && value < self.max
    }

    pub fn apply(&self, particles: &[Particle], values: &[f64]) -> Vec<Particle> {
        particles
            .iter()
            .zip(values)
            .filter(|&(_, &value)| self.contains(value))
            .map(|(particle, _)| particle.clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_particles(n: usize) -> Vec<Particle> {
        (0..n)
            .map(|i| Particle::with_mass(i as f64 + 1.0, 0.0, 0.0, 0.105, -1.0))
            .collect()
    }

    #[test]
    fn keeps_values_strictly_inside_the_range() {
        let particles = make_particles(4);
        let values = [0.5, 1.0, 1.5, 2.0];
        let selected = RangeSelection::new(0.5, 2.0).apply(&particles, &values);
        assert_eq!(selected.len(), 2);
        assert_eq!(selected[0].momentum.x, 2.0);
        assert_eq!(selected[1].momentum.x, 3.0);
    }

    #[test]
    fn bounds_are_exclusive_on_both_ends() {
        let particles = make_particles(2);
        let selection = RangeSelection::new(0.0, 1.0);
        assert!(!selection.contains(0.0));
        assert!(!selection.contains(1.0));
        assert!(selection.contains(0.5));
        assert_eq!(selection.apply(&particles, &[0.0, 1.0]).len(), 0);
    }

    #[test]
    fn absolute_mode_folds_the_sign_away() {
        let particles = make_particles(3);
        let values = [-0.5, 0.98, -0.99];
        let selected = RangeSelection::absolute(0.0, 0.97).apply(&particles, &values);
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].momentum.x, 1.0);
    }

    #[test]
    fn surplus_entries_on_either_side_are_ignored() {
        let particles = make_particles(3);
        let selection = RangeSelection::new(0.0, 10.0);
        assert_eq!(selection.apply(&particles, &[1.0]).len(), 1);
        assert_eq!(selection.apply(&particles[..1], &[1.0, 2.0, 3.0]).len(), 1);
    }
}
