use crate::core::models::particle::Particle;
use crate::engine::config::IsolationConfig;
use crate::engine::error::EngineError;
use crate::engine::tasks::cone_isolation;
use tracing::{info, instrument};

/// Computes the cone-isolation ratio of every candidate against the given
/// particle universe.
///
/// The output is index-aligned with `candidates`. See
/// [`IsolationConfig`] for the annulus definition; the universe may contain
/// the candidates themselves, which the exclusive inner bound keeps from
/// contributing to their own ratios.
#[instrument(skip_all, name = "isolation_workflow", fields(candidates = candidates.len()))]
pub fn run(
    candidates: &[Particle],
    universe: &[Particle],
    config: &IsolationConfig,
) -> Result<Vec<f64>, EngineError> {
    let ratios = cone_isolation::run(candidates, universe, config)?;
    info!(candidates = ratios.len(), "Cone isolation workflow complete.");
    Ok(ratios)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn workflow_matches_the_underlying_task() {
        let candidates = vec![Particle::of_species("mu-", 10.0, 0.0, 5.0).unwrap()];
        let universe = vec![
            Particle::of_species("mu+", 9.0, 1.0, 5.0).unwrap(),
            Particle::of_species("gamma", -3.0, 2.0, 0.0).unwrap(),
        ];
        let config = IsolationConfig::new(0.01, 0.5).unwrap();

        let from_workflow = run(&candidates, &universe, &config).unwrap();
        let from_task = cone_isolation::run(&candidates, &universe, &config).unwrap();
        assert_eq!(from_workflow, from_task);
        assert_eq!(from_workflow.len(), candidates.len());
    }

    #[test]
    fn errors_propagate_to_the_caller() {
        let candidates = vec![Particle::with_energy(0.0, 0.0, 0.0, 1.0, 0.0)];
        let config = IsolationConfig::new(0.01, 0.5).unwrap();
        let result = run(&candidates, &[], &config);
        assert_eq!(result, Err(EngineError::ZeroMomentumCandidate { index: 0 }));
    }
}
