use crate::core::kinematics::four_momentum::{FourMomentum, delta_r};
use crate::core::models::particle::Particle;
use crate::engine::config::IsolationConfig;
use crate::engine::error::EngineError;
use tracing::{debug, instrument};

/// Cone-isolation ratios of `candidates` against `universe`, index-aligned
/// with `candidates`.
///
/// For each candidate the momentum magnitudes of universe members inside the
/// open annulus `(dr_min, dr_max)` are summed, charged and neutral members
/// separately, and the combined sum is normalized by the candidate's own
/// momentum magnitude. An empty universe yields a ratio of 0 for every
/// candidate; a candidate with zero momentum is an error.
#[instrument(skip_all, name = "cone_isolation_task", fields(candidates = candidates.len(), universe = universe.len()))]
pub fn run(
    candidates: &[Particle],
    universe: &[Particle],
    config: &IsolationConfig,
) -> Result<Vec<f64>, EngineError> {
    let mut charged = Vec::new();
    let mut neutral = Vec::new();
    for member in universe {
        let p4 = member.four_momentum_from_energy();
        if member.is_neutral() {
            neutral.push(p4);
        } else {
            charged.push(p4);
        }
    }

    let mut ratios = Vec::with_capacity(candidates.len());
    for (index, candidate) in candidates.iter().enumerate() {
        let p4 = candidate.four_momentum_from_energy();
        let candidate_momentum = p4.p();
        if candidate_momentum == 0.0 {
            return Err(EngineError::ZeroMomentumCandidate { index });
        }

        let sum = annulus_momentum_sum(&p4, &charged, config)
            + annulus_momentum_sum(&p4, &neutral, config);
        ratios.push(sum / candidate_momentum);
    }

    debug!(
        charged = charged.len(),
        neutral = neutral.len(),
        "Cone isolation computed."
    );
    Ok(ratios)
}

fn annulus_momentum_sum(
    candidate: &FourMomentum,
    members: &[FourMomentum],
    config: &IsolationConfig,
) -> f64 {
    members
        .iter()
        .filter(|member| {
            let dr = delta_r(candidate.eta(), candidate.phi(), member.eta(), member.phi());
            dr > config.dr_min && dr < config.dr_max
        })
        .map(FourMomentum::p)
        .sum()
}
