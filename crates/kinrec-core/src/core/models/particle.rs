use crate::core::kinematics::four_momentum::FourMomentum;
use crate::core::utils::pdg;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// A reconstructed particle as delivered by the detector reconstruction chain.
///
/// This is the universal input record of the library: resonance legs, isolation
/// candidates, and isolation universe members are all `Particle` values. A
/// record is immutable once read from the input collections; workflows clone
/// what they return and never mutate their inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    /// The three-momentum in GeV.
    pub momentum: Vector3<f64>,
    /// The total energy in GeV.
    pub energy: f64,
    /// The invariant mass in GeV. Energy and mass are related by the on-shell
    /// relation `E² = m² + |p|²`; the constructors derive one from the other.
    pub mass: f64,
    /// The electric charge in units of the elementary charge. Stored as a
    /// float to mirror the input data model; physical values are integers.
    pub charge: f64,
    /// Index of the particle's first track in the event's track collection,
    /// or `None` for track-less (neutral) objects. Used by truth matching.
    pub track_ref: Option<usize>,
}

impl Particle {
    /// Creates a particle from momentum components and a mass, deriving the
    /// energy from the on-shell relation.
    pub fn with_mass(px: f64, py: f64, pz: f64, mass: f64, charge: f64) -> Self {
        let p4 = FourMomentum::from_xyzm(px, py, pz, mass);
        Self {
            momentum: p4.momentum(),
            energy: p4.energy(),
            mass,
            charge,
            track_ref: None,
        }
    }

    /// Creates a particle from momentum components and an energy, deriving
    /// the mass from the on-shell relation (signed for spacelike records).
    pub fn with_energy(px: f64, py: f64, pz: f64, energy: f64, charge: f64) -> Self {
        let p4 = FourMomentum::from_xyze(px, py, pz, energy);
        Self {
            momentum: p4.momentum(),
            energy,
            mass: p4.mass(),
            charge,
            track_ref: None,
        }
    }

    /// Creates a particle of a named species (e.g. `"mu-"`), taking mass and
    /// charge from the static species table.
    ///
    /// Returns `None` for species not in the table.
    pub fn of_species(species: &str, px: f64, py: f64, pz: f64) -> Option<Self> {
        let mass = pdg::mass_gev(species)?;
        let charge = pdg::charge_of(species)?;
        Some(Self::with_mass(px, py, pz, mass, charge))
    }

    /// Attaches a track reference, consuming and returning the particle.
    pub fn with_track(mut self, track: usize) -> Self {
        self.track_ref = Some(track);
        self
    }

    /// Momentum magnitude |p| in GeV.
    pub fn p(&self) -> f64 {
        self.momentum.norm()
    }

    /// Transverse momentum magnitude in GeV.
    pub fn pt(&self) -> f64 {
        self.momentum.xy().norm()
    }

    pub fn is_neutral(&self) -> bool {
        self.charge == 0.0
    }

    /// The particle's four-momentum built from momentum and mass.
    pub fn four_momentum(&self) -> FourMomentum {
        FourMomentum::from_xyzm(self.momentum.x, self.momentum.y, self.momentum.z, self.mass)
    }

    /// The particle's four-momentum built from momentum and stored energy.
    ///
    /// For off-shell records (such as the synthetic missing-energy particle)
    /// this differs from [`four_momentum`](Particle::four_momentum).
    pub fn four_momentum_from_energy(&self) -> FourMomentum {
        FourMomentum::from_xyze(self.momentum.x, self.momentum.y, self.momentum.z, self.energy)
    }
}

/// A generator-level (truth) particle, as referenced by the reco-to-truth
/// association arrays.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TruthParticle {
    /// The three-momentum in GeV.
    pub momentum: Vector3<f64>,
    /// The invariant mass in GeV.
    pub mass: f64,
}

impl TruthParticle {
    pub fn new(px: f64, py: f64, pz: f64, mass: f64) -> Self {
        Self {
            momentum: Vector3::new(px, py, pz),
            mass,
        }
    }

    pub fn four_momentum(&self) -> FourMomentum {
        FourMomentum::from_xyzm(self.momentum.x, self.momentum.y, self.momentum.z, self.mass)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_mass_derives_the_on_shell_energy() {
        let particle = Particle::with_mass(3.0, 0.0, 4.0, 0.0, -1.0);
        assert!((particle.energy - 5.0).abs() < 1e-12);
        assert_eq!(particle.mass, 0.0);
        assert_eq!(particle.charge, -1.0);
        assert_eq!(particle.track_ref, None);
    }

    #[test]
    fn with_energy_derives_the_on_shell_mass() {
        let particle = Particle::with_energy(0.0, 0.0, 12.0, 13.0, 1.0);
        assert!((particle.mass - 5.0).abs() < 1e-9);
    }

    #[test]
    fn of_species_fills_mass_and_charge_from_the_table() {
        let muon = Particle::of_species("mu-", 0.0, 0.0, 45.0).unwrap();
        assert!((muon.mass - 0.1056583755).abs() < 1e-9);
        assert_eq!(muon.charge, -1.0);

        let antimuon = Particle::of_species("mu+", 0.0, 0.0, 45.0).unwrap();
        assert_eq!(antimuon.charge, 1.0);
    }

    #[test]
    fn of_species_returns_none_for_unknown_names() {
        assert!(Particle::of_species("graviton", 1.0, 0.0, 0.0).is_none());
    }

    #[test]
    fn with_track_attaches_a_track_reference() {
        let particle = Particle::with_mass(1.0, 0.0, 0.0, 0.105, -1.0).with_track(7);
        assert_eq!(particle.track_ref, Some(7));
    }

    #[test]
    fn neutrality_follows_the_charge_field() {
        assert!(Particle::with_mass(1.0, 0.0, 0.0, 0.0, 0.0).is_neutral());
        assert!(!Particle::with_mass(1.0, 0.0, 0.0, 0.0, -1.0).is_neutral());
    }

    #[test]
    fn four_momentum_variants_agree_for_on_shell_records() {
        let particle = Particle::with_mass(1.0, 2.0, 3.0, 0.493677, 1.0);
        let from_mass = particle.four_momentum();
        let from_energy = particle.four_momentum_from_energy();
        assert!((from_mass.energy() - from_energy.energy()).abs() < 1e-12);
        assert!((from_mass.mass() - from_energy.mass()).abs() < 1e-9);
    }

    #[test]
    fn truth_particle_four_momentum_is_on_shell() {
        let truth = TruthParticle::new(0.0, 3.0, 4.0, 0.105658);
        assert!((truth.four_momentum().energy() - (25.0f64 + 0.105658 * 0.105658).sqrt()).abs() < 1e-12);
    }
}
