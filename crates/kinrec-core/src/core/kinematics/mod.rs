//! # Kinematics Module
//!
//! This module provides the pure kinematic math on which the selection and
//! isolation workflows are built.
//!
//! ## Overview
//!
//! Everything here is a stateless function (or a small immutable value type)
//! over particle records. The submodules cover:
//!
//! - **Four-momentum arithmetic** ([`four_momentum`]) - construction from momentum
//!   plus mass or energy, addition/subtraction, invariant mass, and the angular
//!   accessors (θ, φ, η) together with the ΔR angular separation
//! - **Event-level reductions** ([`reductions`]) - visible/missing energy and mass,
//!   acolinearity, acoplanarity, energy imbalance, and per-particle extractors
//! - **Range selection** ([`selection`]) - filtering a particle list by a paired
//!   property value

pub mod four_momentum;
pub mod reductions;
pub mod selection;
