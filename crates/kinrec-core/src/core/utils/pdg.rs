use phf::{Map, phf_map};

// (mass in GeV, charge in units of e), keyed by species name.
static SPECIES_PROPERTIES: Map<&'static str, (f64, f64)> = phf_map! {
    "e-" => (0.00051099895, -1.0),
    "e+" => (0.00051099895, 1.0),
    "mu-" => (0.1056583755, -1.0),
    "mu+" => (0.1056583755, 1.0),
    "tau-" => (1.77686, -1.0),
    "tau+" => (1.77686, 1.0),
    "gamma" => (0.0, 0.0),
    "pi+" => (0.13957039, 1.0),
    "pi-" => (0.13957039, -1.0),
    "pi0" => (0.1349768, 0.0),
    "K+" => (0.493677, 1.0),
    "K-" => (0.493677, -1.0),
    "KL0" => (0.497611, 0.0),
    "p" => (0.93827209, 1.0),
    "p~" => (0.93827209, -1.0),
    "n" => (0.93956542, 0.0),
};

/// Mass in GeV of a named species, or `None` if the species is unknown.
pub fn mass_gev(species: &str) -> Option<f64> {
    SPECIES_PROPERTIES.get(species).map(|&(mass, _)| mass)
}

/// Charge in units of the elementary charge of a named species.
pub fn charge_of(species: &str) -> Option<f64> {
    SPECIES_PROPERTIES.get(species).map(|&(_, charge)| charge)
}
