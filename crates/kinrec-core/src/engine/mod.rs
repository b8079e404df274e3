//! # Engine Module
//!
//! This module implements the selection and isolation machinery of kinrec:
//! immutable configuration values, the error taxonomy, and the computational
//! tasks driven by the public workflows.
//!
//! ## Overview
//!
//! The engine owns everything between the raw particle records of [`crate::core`]
//! and the user-facing entry points of [`crate::workflows`]. It never performs
//! I/O on event data and holds no state across calls; configuration values are
//! constructed once (directly, through a builder, or from TOML) and treated as
//! immutable afterwards, which makes every call-tree reentrant.
//!
//! ## Architecture
//!
//! - **Configuration** ([`config`]) - resonance-selection and cone-isolation
//!   parameters with validating builders and TOML deserialization
//! - **Error Handling** ([`error`]) - the recoverable per-event error taxonomy
//! - **Tasks** (internal) - pair enumeration, candidate scoring, and cone
//!   isolation, composed by the workflows

pub mod config;
pub mod error;
pub(crate) mod tasks;
