use crate::core::models::particle::{Particle, TruthParticle};

/// Borrowed view over one event's reco-to-truth association data.
///
/// `rec_indices` and `mc_indices` are parallel arrays: entry `k` links the
/// reconstructed particle at `reco[rec_indices[k]]` to the truth particle at
/// `truth[mc_indices[k]]`. Negative or out-of-range entries are treated as
/// broken links and skipped.
#[derive(Debug, Clone, Copy)]
pub struct TruthMatchContext<'a> {
    pub rec_indices: &'a [i32],
    pub mc_indices: &'a [i32],
    pub reco: &'a [Particle],
    pub truth: &'a [TruthParticle],
}

impl<'a> TruthMatchContext<'a> {
    pub fn new(
        rec_indices: &'a [i32],
        mc_indices: &'a [i32],
        reco: &'a [Particle],
        truth: &'a [TruthParticle],
    ) -> Self {
        Self {
            rec_indices,
            mc_indices,
            reco,
            truth,
        }
    }

    /// Resolves a track reference to its truth particle, or `None` when the
    /// track has no (usable) association.
    pub fn truth_for_track(&self, track: usize) -> Option<&'a TruthParticle> {
        let index = track_to_truth_index(track, self.rec_indices, self.mc_indices, self.reco)?;
        self.truth.get(index)
    }
}

/// Maps a track reference to an index into the truth collection by scanning
/// the association arrays for the reconstructed particle owning that track.
///
/// Returns `None` when no linked reconstructed particle carries the track,
/// or when the association entry is negative.
pub fn track_to_truth_index(
    track: usize,
    rec_indices: &[i32],
    mc_indices: &[i32],
    reco: &[Particle],
) -> Option<usize> {
    for (k, &rec_index) in rec_indices.iter().enumerate() {
        let linked = usize::try_from(rec_index)
            .ok()
            .and_then(|index| reco.get(index));
        let Some(particle) = linked else { continue };

        if particle.track_ref == Some(track) {
            return mc_indices
                .get(k)
                .and_then(|&mc_index| usize::try_from(mc_index).ok());
        }
    }
    None
}
