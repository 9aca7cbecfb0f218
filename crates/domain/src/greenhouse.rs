//! The greenhouse aggregate — single owner of all mutable domain state.

use crate::ideal::IdealParameters;
use crate::preconfiguration::{Preconfiguration, PreconfigurationCatalog};
use crate::rotation::SoilHistory;
use crate::setting::SettingsStore;

/// Everything the greenhouse knows: live setpoints, the preconfiguration
/// catalog, the soil history, and the reference thresholds.
///
/// Constructed once at startup from the three bootstrap sources and shared
/// behind one process-wide lock for the rest of the process lifetime. All
/// mutation goes through the component operations on its fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GreenhouseState {
    pub settings: SettingsStore,
    pub preconfigurations: PreconfigurationCatalog,
    pub soil_history: SoilHistory,
    pub ideal_parameters: IdealParameters,
}

impl GreenhouseState {
    /// Build the aggregate from bootstrap data.
    ///
    /// When the preconfiguration list is non-empty, its first record becomes
    /// the initial live settings.
    #[must_use]
    pub fn new(
        ideal_parameters: IdealParameters,
        soil_history: SoilHistory,
        preconfigurations: Vec<Preconfiguration>,
    ) -> Self {
        let mut settings = SettingsStore::default();
        let mut catalog = PreconfigurationCatalog::default();
        catalog.load(preconfigurations, &mut settings);
        Self {
            settings,
            preconfigurations: catalog,
            soil_history,
            ideal_parameters,
        }
    }
}
