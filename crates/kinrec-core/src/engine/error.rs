use thiserror::Error;

/// Per-event failure conditions of the selection and isolation workflows.
///
/// All variants are data-derived and recoverable at the call boundary: the
/// hosting event loop decides whether to skip, flag, or abort. The library
/// itself never terminates the process.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum EngineError {
    #[error("at least two legs are required to build a resonance, got {found}")]
    InsufficientLegs { found: usize },

    #[error("no charge-neutral pair exists among the {legs} supplied legs")]
    NoValidCombination { legs: usize },

    #[error("track of leg {leg_index} has no truth association")]
    TruthMatchMissing { leg_index: usize },

    #[error("isolation candidate {index} has zero momentum magnitude")]
    ZeroMomentumCandidate { index: usize },
}
