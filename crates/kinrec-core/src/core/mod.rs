//! # Core Module
//!
//! This module provides the fundamental building blocks for event kinematic
//! reconstruction in kinrec, serving as the computational core of the library.
//!
//! ## Overview
//!
//! The core module implements the essential data structures and pure functions
//! required to turn per-event particle lists into physics observables. It has no
//! mutable state and performs no I/O; every function is a single pass over its
//! arguments.
//!
//! ## Architecture
//!
//! The module is organized into specialized submodules that handle different
//! aspects of event reconstruction:
//!
//! - **Particle Representation** ([`models`]) - Reconstructed and truth-level particle records
//! - **Kinematics** ([`kinematics`]) - Four-momentum arithmetic, event-level reductions, and range selection
//! - **Truth Association** ([`truth`]) - Track-to-truth-particle index resolution
//! - **Reference Data** ([`utils`]) - Static particle-species properties
//!
//! ## Key Capabilities
//!
//! - **Four-momentum construction** from momentum plus mass or energy, with the
//!   angular accessors (θ, φ, η) used throughout the selection and isolation code
//! - **Event-level reductions** such as visible/missing energy and mass,
//!   acolinearity, acoplanarity, and energy imbalance
//! - **Typed degenerate-input handling** - reductions that are undefined for a
//!   given event return `None` rather than sentinel values

pub mod kinematics;
pub mod models;
pub mod truth;
pub mod utils;
