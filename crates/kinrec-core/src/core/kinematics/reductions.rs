use crate::core::models::particle::Particle;
use nalgebra::Vector3;

/// Longitudinal/transverse decomposition of the event's energy flow.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EnergyImbalance {
    pub total: f64,
    pub transverse: f64,
    pub longitudinal: f64,
}

/// Sum of the energies of all particles with transverse momentum above
/// `pt_cutoff`.
pub fn visible_energy(particles: &[Particle], pt_cutoff: f64) -> f64 {
    particles
        .iter()
        .filter(|p| p.pt() >= pt_cutoff)
        .map(|p| p.energy)
        .sum()
}

/// Invariant mass of the summed visible four-momentum, or `None` when the
/// sum is spacelike.
pub fn visible_mass(particles: &[Particle], pt_cutoff: f64) -> Option<f64> {
    let (momentum, energy) = visible_sum(particles, pt_cutoff);
    let m2 = energy * energy - momentum.norm_squared();
    if m2 < 0.0 { None } else { Some(m2.sqrt()) }
}

/// The missing-energy record of the event: negated visible momentum sum with
/// energy `ecm − E_visible`, as a synthetic neutral particle.
pub fn missing_energy(ecm: f64, particles: &[Particle], pt_cutoff: f64) -> Particle {
    let (momentum, energy) = visible_sum(particles, pt_cutoff);
    Particle {
        momentum: -momentum,
        energy: ecm - energy,
        mass: 0.0,
        charge: 0.0,
        track_ref: None,
    }
}

/// Invariant mass of the missing four-momentum against a total energy `ecm`.
///
/// `None` when the visible energy exceeds `ecm` or the missing vector is
/// spacelike.
pub fn missing_mass(ecm: f64, particles: &[Particle], pt_cutoff: f64) -> Option<f64> {
    let (momentum, energy) = visible_sum(particles, pt_cutoff);
    if ecm < energy {
        return None;
    }
    let de2 = (ecm - energy) * (ecm - energy);
    let ptot2 = momentum.norm_squared();
    if de2 < ptot2 { None } else { Some((de2 - ptot2).sqrt()) }
}

/// |cos θ| of a missing-energy record's momentum direction.
pub fn cos_theta_miss(missing: &Particle) -> f64 {
    missing.four_momentum_from_energy().cos_theta().abs()
}

/// Acolinearity of the two leading particles: the angle between one momentum
/// and the reverse of the other. `None` for fewer than two particles or a
/// vanishing momentum.
pub fn acolinearity(particles: &[Particle]) -> Option<f64> {
    if particles.len() < 2 {
        return None;
    }
    let v1 = particles[0].momentum;
    let v2 = particles[1].momentum;
    let norms = v1.norm() * v2.norm();
    if norms == 0.0 {
        return None;
    }
    // Rounding can push the cosine just past +/-1.
    Some((-v1.dot(&v2) / norms).clamp(-1.0, 1.0).acos())
}

/// Acoplanarity of the two leading particles: π minus their azimuthal
/// separation folded into [0, π]. `None` for fewer than two particles.
pub fn acoplanarity(particles: &[Particle]) -> Option<f64> {
    if particles.len() < 2 {
        return None;
    }
    let mut acop = (particles[0].four_momentum().phi() - particles[1].four_momentum().phi()).abs();
    if acop > std::f64::consts::PI {
        acop = 2.0 * std::f64::consts::PI - acop;
    }
    Some(std::f64::consts::PI - acop)
}

/// Total, transverse, and longitudinal energy flow of the particle list.
/// Zero-momentum entries contribute to the total only.
pub fn energy_imbalance(particles: &[Particle]) -> EnergyImbalance {
    let mut imbalance = EnergyImbalance::default();
    for particle in particles {
        imbalance.total += particle.energy;
        let magnitude = particle.p();
        if magnitude == 0.0 {
            continue;
        }
        let cos_theta = particle.momentum.z / magnitude;
        let mut sin_theta = particle.pt() / magnitude;
        if particle.momentum.y < 0.0 {
            sin_theta = -sin_theta;
        }
        imbalance.longitudinal += cos_theta * particle.energy;
        imbalance.transverse += sin_theta * particle.energy;
    }
    imbalance.transverse = imbalance.transverse.abs();
    imbalance.longitudinal = imbalance.longitudinal.abs();
    imbalance
}

/// cos θ of every particle, index-aligned with the input.
pub fn cos_thetas(particles: &[Particle]) -> Vec<f64> {
    particles
        .iter()
        .map(|p| p.four_momentum().cos_theta())
        .collect()
}

/// Momentum magnitude of every particle, index-aligned with the input.
pub fn momenta(particles: &[Particle]) -> Vec<f64> {
    particles.iter().map(Particle::p).collect()
}

/// Polar angle of every particle, index-aligned with the input.
pub fn thetas(particles: &[Particle]) -> Vec<f64> {
    particles.iter().map(|p| p.four_momentum().theta()).collect()
}

/// Azimuthal angle of every particle, index-aligned with the input.
pub fn phis(particles: &[Particle]) -> Vec<f64> {
    particles.iter().map(|p| p.four_momentum().phi()).collect()
}

/// Charge of every particle, index-aligned with the input.
pub fn charges(particles: &[Particle]) -> Vec<f64> {
    particles.iter().map(|p| p.charge).collect()
}

fn visible_sum(particles: &[Particle], pt_cutoff: f64) -> (Vector3<f64>, f64) {
    let mut momentum = Vector3::zeros();
    let mut energy = 0.0;
    for particle in particles.iter().filter(|p| p.pt() >= pt_cutoff) {
        momentum += particle.momentum;
        energy += particle.energy;
    }
    (momentum, energy)
}
