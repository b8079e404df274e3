use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign, Sub, SubAssign};

const ETA_LIMIT: f64 = 1e10;

/// An energy-momentum four-vector `(px, py, pz, E)`.
///
/// Values are in GeV throughout. The type is a plain `Copy` value; sums of
/// on-shell particles are in general off-shell, so the invariant [`mass`]
/// is always recomputed from the components.
///
/// [`mass`]: FourMomentum::mass
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FourMomentum {
    momentum: Vector3<f64>,
    energy: f64,
}

impl FourMomentum {
    /// Builds an on-shell four-vector from momentum components and a mass.
    pub fn from_xyzm(px: f64, py: f64, pz: f64, mass: f64) -> Self {
        let momentum = Vector3::new(px, py, pz);
        let energy = (mass * mass + momentum.norm_squared()).sqrt();
        Self { momentum, energy }
    }

    /// Builds a four-vector directly from momentum components and an energy.
    pub fn from_xyze(px: f64, py: f64, pz: f64, energy: f64) -> Self {
        Self {
            momentum: Vector3::new(px, py, pz),
            energy,
        }
    }

    /// The beam four-vector `(0, 0, 0, ecm)` of a symmetric collider at
    /// center-of-mass energy `ecm`, used as the reference for recoil.
    pub fn beam(ecm: f64) -> Self {
        Self {
            momentum: Vector3::zeros(),
            energy: ecm,
        }
    }

    pub fn momentum(&self) -> Vector3<f64> {
        self.momentum
    }

    pub fn energy(&self) -> f64 {
        self.energy
    }

    /// Momentum magnitude |p|.
    pub fn p(&self) -> f64 {
        self.momentum.norm()
    }

    /// Transverse momentum magnitude.
    pub fn pt(&self) -> f64 {
        self.momentum.xy().norm()
    }

    /// Invariant mass squared, `E² − |p|²`. Negative for spacelike vectors.
    pub fn m2(&self) -> f64 {
        self.energy * self.energy - self.momentum.norm_squared()
    }

    /// Invariant mass with the signed convention: `−sqrt(−m²)` when `m² < 0`.
    ///
    /// Recoil vectors near the kinematic boundary can come out slightly
    /// spacelike; the signed value keeps them ordered instead of folding
    /// them back onto positive masses.
    pub fn mass(&self) -> f64 {
        let m2 = self.m2();
        if m2 < 0.0 { -(-m2).sqrt() } else { m2.sqrt() }
    }

    /// Polar angle θ with respect to the beam (z) axis.
    pub fn theta(&self) -> f64 {
        self.pt().atan2(self.momentum.z)
    }

    /// cos θ, defined as 1 for a vanishing momentum vector.
    pub fn cos_theta(&self) -> f64 {
        let p = self.p();
        if p == 0.0 { 1.0 } else { self.momentum.z / p }
    }

    /// Azimuthal angle φ in (−π, π].
    pub fn phi(&self) -> f64 {
        self.momentum.y.atan2(self.momentum.x)
    }

    /// Pseudorapidity η. Vectors parallel to the beam axis saturate at
    /// ±1e10; a vanishing momentum vector maps to 0.
    pub fn eta(&self) -> f64 {
        let cos_theta = self.cos_theta();
        if cos_theta * cos_theta < 1.0 {
            -0.5 * ((1.0 - cos_theta) / (1.0 + cos_theta)).ln()
        } else if self.momentum.z == 0.0 {
            0.0
        } else if self.momentum.z > 0.0 {
            ETA_LIMIT
        } else {
            -ETA_LIMIT
        }
    }
}

impl Add for FourMomentum {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            momentum: self.momentum + rhs.momentum,
            energy: self.energy + rhs.energy,
        }
    }
}

impl AddAssign for FourMomentum {
    fn add_assign(&mut self, rhs: Self) {
        self.momentum += rhs.momentum;
        self.energy += rhs.energy;
    }
}

impl Sub for FourMomentum {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self {
            momentum: self.momentum - rhs.momentum,
            energy: self.energy - rhs.energy,
        }
    }
}

impl SubAssign for FourMomentum {
    fn sub_assign(&mut self, rhs: Self) {
        self.momentum -= rhs.momentum;
        self.energy -= rhs.energy;
    }
}

/// Angular separation `sqrt(Δη² + Δφ²)` between two directions.
///
/// The φ difference is taken raw, without folding across the ±π seam.
pub fn delta_r(eta1: f64, phi1: f64, eta2: f64, phi2: f64) -> f64 {
    let d_eta = eta1 - eta2;
    let d_phi = phi1 - phi2;
    (d_eta * d_eta + d_phi * d_phi).sqrt()
}
