//! Tasks composing the per-event selection and isolation computations.
//!
//! Tasks are the computational units driven by the workflows: enumerating
//! candidate leg pairings, scoring a pairing against the target mass/recoil
//! hypothesis, and summing momentum inside an isolation annulus. Each task is
//! a pure function of its arguments and a configuration value.

pub mod candidate_scoring;
pub mod cone_isolation;
pub mod pair_enumeration;
