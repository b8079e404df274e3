use crate::core::kinematics::four_momentum::FourMomentum;
use crate::core::models::particle::Particle;
use crate::core::truth::TruthMatchContext;
use crate::engine::config::ResonanceConfig;
use crate::engine::error::EngineError;
use crate::engine::tasks::candidate_scoring::{self, ScoredPair};
use crate::engine::tasks::pair_enumeration::PairIndices;
use tracing::{info, instrument};

/// The best resonance candidate of an event together with its two legs.
///
/// The legs are always the original reconstructed particles, even when the
/// selection scored truth-matched kinematics; truth substitution affects only
/// which pairing wins and the reported candidate mass. `distance` is `None`
/// when the two-leg shortcut returned the only possible pairing unranked.
#[derive(Debug, Clone, PartialEq)]
pub struct ResonanceSelection {
    pub resonance: Particle,
    pub leg_a: Particle,
    pub leg_b: Particle,
    /// Indices of the two legs in the input list, `pair.0 < pair.1`.
    pub pair: (usize, usize),
    pub distance: Option<f64>,
}

impl ResonanceSelection {
    /// The fixed `[resonance, legA, legB]` output triple.
    pub fn into_particles(self) -> [Particle; 3] {
        [self.resonance, self.leg_a, self.leg_b]
    }
}

/// Selects the leg pairing whose candidate best matches the configured
/// mass/recoil hypothesis.
///
/// Pairings are enumerated in lexicographic index order and compared with a
/// strictly-less distance test, so ties resolve to the first-seen pairing.
/// With exactly two legs the single charge-neutral pairing is returned
/// directly, without any distance ranking.
#[instrument(skip_all, name = "resonance_workflow", fields(legs = legs.len()))]
pub fn run(
    legs: &[Particle],
    truth: Option<&TruthMatchContext>,
    config: &ResonanceConfig,
) -> Result<ResonanceSelection, EngineError> {
    if legs.len() < 2 {
        return Err(EngineError::InsufficientLegs { found: legs.len() });
    }

    if legs.len() == 2 {
        let candidate = candidate_scoring::combine(legs, (0, 1), config, truth)?
            .ok_or(EngineError::NoValidCombination { legs: 2 })?;
        info!(mass = candidate.mass(), "Selected the only available leg pairing.");
        return Ok(make_selection(candidate, legs, (0, 1), None));
    }

    let mut best: Option<ScoredPair> = None;
    for pair in PairIndices::new(legs.len()) {
        let Some(scored) = candidate_scoring::run(legs, pair, config, truth)? else {
            continue;
        };
        let improves = match &best {
            Some(current) => scored.distance < current.distance,
            None => true,
        };
        if improves {
            best = Some(scored);
        }
    }

    let best = best.ok_or(EngineError::NoValidCombination { legs: legs.len() })?;
    info!(
        first = best.pair.0,
        second = best.pair.1,
        mass = best.candidate.mass(),
        distance = best.distance,
        "Selected best resonance candidate."
    );
    Ok(make_selection(best.candidate, legs, best.pair, Some(best.distance)))
}

fn make_selection(
    candidate: FourMomentum,
    legs: &[Particle],
    pair: (usize, usize),
    distance: Option<f64>,
) -> ResonanceSelection {
    let resonance = Particle {
        momentum: candidate.momentum(),
        energy: candidate.energy(),
        mass: candidate.mass(),
        charge: 0.0,
        track_ref: None,
    };
    ResonanceSelection {
        resonance,
        leg_a: legs[pair.0].clone(),
        leg_b: legs[pair.1].clone(),
        pair,
        distance,
    }
}
