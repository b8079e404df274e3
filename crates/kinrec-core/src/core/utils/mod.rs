//! Shared reference data for the core layer.

pub mod pdg;
