//! # Workflows Module
//!
//! This module provides the high-level, user-facing entry points of kinrec.
//!
//! ## Overview
//!
//! Workflows tie the `engine` and `core` layers together into complete
//! per-event procedures. Each workflow is a single-shot pure computation: it
//! consumes the event's particle lists and an immutable configuration value,
//! and returns either its result or a typed, recoverable error. The hosting
//! event-processing framework decides per-event policy (skip, flag, abort)
//! and may run one call-tree per event concurrently.
//!
//! ## Architecture
//!
//! - **Resonance Selection** ([`resonance`]) - enumerates charge-neutral leg
//!   pairings, scores them against a target mass/recoil hypothesis, and
//!   returns the best candidate with its two legs.
//! - **Cone Isolation** ([`isolation`]) - scores each candidate particle by
//!   the momentum flow inside an angular annulus around it.

pub mod isolation;
pub mod resonance;
