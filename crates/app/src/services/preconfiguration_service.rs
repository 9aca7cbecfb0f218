//! Preconfiguration service — catalog reads, appends, and applications.

use greenhouse_domain::error::GreenhouseError;
use greenhouse_domain::preconfiguration::Preconfiguration;

use crate::shared::SharedGreenhouse;

/// Application service for the preconfiguration catalog.
#[derive(Debug, Clone)]
pub struct PreconfigurationService {
    state: SharedGreenhouse,
}

impl PreconfigurationService {
    #[must_use]
    pub fn new(state: SharedGreenhouse) -> Self {
        Self { state }
    }

    /// All catalog records, in insertion order.
    #[must_use]
    pub fn list(&self) -> Vec<Preconfiguration> {
        self.state.with(|gh| gh.preconfigurations.list().to_vec())
    }

    /// Append a record to the catalog.
    ///
    /// # Errors
    ///
    /// Returns [`GreenhouseError::InvalidValue`] for an out-of-range field
    /// or [`GreenhouseError::DuplicateConflict`] for an exact duplicate.
    pub fn add(&self, record: Preconfiguration) -> Result<(), GreenhouseError> {
        self.state.with(|gh| gh.preconfigurations.add(record))?;
        tracing::debug!("preconfiguration added");
        Ok(())
    }

    /// Apply catalog record `index` to the live settings.
    ///
    /// The whole-aggregate lock is held across the five-field copy, so no
    /// reader can observe a mix of old and new values.
    ///
    /// # Errors
    ///
    /// Returns [`GreenhouseError::IndexOutOfRange`] for a bad index; the
    /// settings are unchanged in that case.
    pub fn apply(&self, index: usize) -> Result<(), GreenhouseError> {
        self.state
            .with(|gh| gh.preconfigurations.apply(index, &mut gh.settings))?;
        tracing::info!(index, "preconfiguration applied");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::settings_service::SettingsService;

    fn record(plant: &str, temperature: f64) -> Preconfiguration {
        Preconfiguration {
            luminosity: 50.0,
            humidity: 60.0,
            temperature,
            carbon_dioxide: 40.0,
            plant_type: plant.to_owned(),
        }
    }

    #[test]
    fn should_list_records_in_insertion_order() {
        let svc = PreconfigurationService::new(SharedGreenhouse::default());
        svc.add(record("tomato", 22.0)).unwrap();
        svc.add(record("basil", 24.0)).unwrap();

        let listed = svc.list();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].plant_type, "tomato");
        assert_eq!(listed[1].plant_type, "basil");
    }

    #[test]
    fn should_reject_duplicate_addition() {
        let svc = PreconfigurationService::new(SharedGreenhouse::default());
        svc.add(record("tomato", 22.0)).unwrap();

        assert_eq!(
            svc.add(record("tomato", 22.0)),
            Err(GreenhouseError::DuplicateConflict)
        );
        assert_eq!(svc.list().len(), 1);
    }

    #[test]
    fn should_update_all_five_settings_when_applied() {
        let shared = SharedGreenhouse::default();
        let preconfigs = PreconfigurationService::new(shared.clone());
        let settings = SettingsService::new(shared);

        preconfigs.add(record("basil", 24.0)).unwrap();
        preconfigs.apply(0).unwrap();

        let snapshot = settings.snapshot();
        assert_eq!(snapshot.plant_type, "basil");
        assert!((snapshot.temperature - 24.0).abs() < f64::EPSILON);
        assert!((snapshot.luminosity - 50.0).abs() < f64::EPSILON);
        assert!((snapshot.humidity - 60.0).abs() < f64::EPSILON);
        assert!((snapshot.carbon_dioxide - 40.0).abs() < f64::EPSILON);
    }

    #[test]
    fn should_keep_settings_when_index_out_of_range() {
        let shared = SharedGreenhouse::default();
        let preconfigs = PreconfigurationService::new(shared.clone());
        let settings = SettingsService::new(shared);
        preconfigs.add(record("tomato", 22.0)).unwrap();

        let before = settings.snapshot();
        assert_eq!(
            preconfigs.apply(1),
            Err(GreenhouseError::IndexOutOfRange { index: 1, len: 1 })
        );
        assert_eq!(settings.snapshot(), before);
    }
}
