//! # kinrec Core Library
//!
//! A library for reconstructing collision-event kinematic quantities from lists of
//! detected (or simulated) particles, as produced by an e+e- collider detector
//! simulation chain.
//!
//! ## Architectural Philosophy
//!
//! The library is designed with a strict three-layer architecture to ensure a clear
//! separation of concerns, making it modular, testable, and extensible.
//!
//! - **[`core`]: The Foundation.** Contains stateless data models (`Particle`,
//!   `TruthParticle`), pure four-momentum arithmetic (`FourMomentum`), single-pass
//!   event reductions (visible/missing energy and mass, angular observables), and
//!   the track-to-truth association lookup.
//!
//! - **[`engine`]: The Logic Core.** Holds the immutable configuration values and
//!   their validating builders, the error taxonomy, and the computational tasks:
//!   pair enumeration, candidate scoring, and cone isolation.
//!
//! - **[`workflows`]: The Public API.** This is the highest-level, user-facing
//!   layer. It ties the `engine` and `core` together to execute complete
//!   per-event procedures: best-resonance-candidate selection against a target
//!   mass/recoil hypothesis, and cone-isolation scoring of candidate particles.
//!
//! Every computation is a pure function of its inputs and a configuration value
//! captured at construction; there is no cross-event state, so one call-tree per
//! event can run concurrently under the hosting framework.

pub mod core;
pub mod engine;
pub mod workflows;
