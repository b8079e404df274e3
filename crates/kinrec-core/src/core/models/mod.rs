//! # Core Models Module
//!
//! This module contains the data structures used to represent particles entering
//! the reconstruction, providing the foundation for all kinematic operations.
//!
//! ## Overview
//!
//! The models module defines the input records consumed by every workflow. They
//! mirror the flat collections delivered by the surrounding event-processing
//! framework and are designed to:
//!
//! - **Represent detector output** - momentum, energy, mass, charge, and track linkage
//! - **Stay immutable** - records are read from input arrays and never mutated in place
//! - **Carry no event context** - all per-event state lives in the call arguments
//!
//! ## Key Components
//!
//! - [`particle`] - Reconstructed particle and truth (generator-level) particle records

pub mod particle;
