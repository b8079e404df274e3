use crate::core::kinematics::four_momentum::FourMomentum;
use crate::core::models::particle::Particle;
use crate::core::truth::TruthMatchContext;
use crate::engine::config::{KinematicsSource, MissingTruthPolicy, ResonanceConfig};
use crate::engine::error::EngineError;
use tracing::trace;

/// A charge-neutral leg pairing with its candidate four-momentum and its
/// weighted mass/recoil distance from the target hypothesis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredPair {
    pub candidate: FourMomentum,
    pub distance: f64,
    pub pair: (usize, usize),
}

/// Builds the candidate four-momentum of a leg pairing, or `Ok(None)` when
/// the pairing is not charge-neutral (or is skipped under
/// [`MissingTruthPolicy::SkipPair`]).
pub fn combine(
    legs: &[Particle],
    pair: (usize, usize),
    config: &ResonanceConfig,
    truth: Option<&TruthMatchContext>,
) -> Result<Option<FourMomentum>, EngineError> {
    let (i, j) = pair;
    if legs[i].charge + legs[j].charge != 0.0 {
        return Ok(None);
    }

    let Some(p4_a) = leg_four_momentum(&legs[i], i, config, truth)? else {
        return Ok(None);
    };
    let Some(p4_b) = leg_four_momentum(&legs[j], j, config, truth)? else {
        return Ok(None);
    };
    Ok(Some(p4_a + p4_b))
}

/// Scores a leg pairing: candidate four-momentum, recoil against the beam,
/// and the distance `(1−w)·(m − m_res)² + w·(m_recoil − m_rec)²`.
pub fn run(
    legs: &[Particle],
    pair: (usize, usize),
    config: &ResonanceConfig,
    truth: Option<&TruthMatchContext>,
) -> Result<Option<ScoredPair>, EngineError> {
    let Some(candidate) = combine(legs, pair, config, truth)? else {
        return Ok(None);
    };

    let recoil = FourMomentum::beam(config.ecm) - candidate;
    let mass_deviation = (candidate.mass() - config.resonance_mass).powi(2);
    let recoil_deviation = (recoil.mass() - config.recoil_mass).powi(2);
    let distance =
        (1.0 - config.recoil_weight) * mass_deviation + config.recoil_weight * recoil_deviation;

    trace!(
        first = pair.0,
        second = pair.1,
        mass = candidate.mass(),
        recoil_mass = recoil.mass(),
        distance,
        "Scored charge-neutral pair."
    );

    Ok(Some(ScoredPair {
        candidate,
        distance,
        pair,
    }))
}

fn leg_four_momentum(
    leg: &Particle,
    leg_index: usize,
    config: &ResonanceConfig,
    truth: Option<&TruthMatchContext>,
) -> Result<Option<FourMomentum>, EngineError> {
    match config.kinematics {
        KinematicsSource::Reconstructed => Ok(Some(reconstructed_leg(leg))),
        KinematicsSource::TruthMatched => {
            truth_matched_leg(leg, leg_index, config.on_missing_truth, truth)
        }
    }
}

fn reconstructed_leg(leg: &Particle) -> FourMomentum {
    leg.four_momentum()
}

fn truth_matched_leg(
    leg: &Particle,
    leg_index: usize,
    policy: MissingTruthPolicy,
    truth: Option<&TruthMatchContext>,
) -> Result<Option<FourMomentum>, EngineError> {
    let matched = leg
        .track_ref
        .and_then(|track| truth.and_then(|context| context.truth_for_track(track)));

    match matched {
        Some(truth_particle) => Ok(Some(truth_particle.four_momentum())),
        None => match policy {
            MissingTruthPolicy::Reject => Err(EngineError::TruthMatchMissing { leg_index }),
            MissingTruthPolicy::UseReconstructed => Ok(Some(reconstructed_leg(leg))),
            MissingTruthPolicy::SkipPair => Ok(None),
        },
    }
}
