//! Preconfigurations — reusable setpoint bundles and their catalog.

use serde::{Deserialize, Serialize};

use crate::error::GreenhouseError;
use crate::setting::{SettingName, SettingsStore};

/// A bundle of four numeric setpoints plus a crop type, applied as a unit.
///
/// Immutable once stored in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preconfiguration {
    pub luminosity: f64,
    pub humidity: f64,
    pub temperature: f64,
    pub carbon_dioxide: f64,
    pub plant_type: String,
}

impl Preconfiguration {
    /// Check that every numeric field satisfies the rule of the setting it
    /// will be written into. Applying an unchecked record could otherwise
    /// push a live setting outside its range.
    ///
    /// # Errors
    ///
    /// Returns [`GreenhouseError::InvalidValue`] naming the first offending
    /// field.
    pub fn validate(&self) -> Result<(), GreenhouseError> {
        let fields = [
            (SettingName::Luminosity, self.luminosity),
            (SettingName::Humidity, self.humidity),
            (SettingName::Temperature, self.temperature),
            (SettingName::CarbonDioxide, self.carbon_dioxide),
        ];
        for (name, value) in fields {
            if !name.rule().allows(value) {
                return Err(GreenhouseError::InvalidValue {
                    name,
                    value: value.to_string(),
                });
            }
        }
        Ok(())
    }
}

/// Append-only ordered catalog of preconfigurations, indexed by position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PreconfigurationCatalog {
    records: Vec<Preconfiguration>,
}

impl PreconfigurationCatalog {
    /// Populate the catalog at bootstrap, in source order.
    ///
    /// When at least one record exists, record 0 is applied immediately to
    /// establish the initial live settings.
    pub fn load(&mut self, records: Vec<Preconfiguration>, settings: &mut SettingsStore) {
        self.records = records;
        if let Some(first) = self.records.first() {
            settings.apply_preconfiguration(first);
        }
    }

    /// Append a record to the catalog.
    ///
    /// Records identical in all five fields to an existing one are rejected,
    /// keeping the catalog free of exact duplicates.
    ///
    /// # Errors
    ///
    /// Returns [`GreenhouseError::InvalidValue`] when a numeric field is out
    /// of range, or [`GreenhouseError::DuplicateConflict`] for an exact
    /// duplicate.
    pub fn add(&mut self, record: Preconfiguration) -> Result<(), GreenhouseError> {
        record.validate()?;
        if self.records.contains(&record) {
            return Err(GreenhouseError::DuplicateConflict);
        }
        self.records.push(record);
        Ok(())
    }

    /// Copy all five fields of record `index` into the settings store.
    ///
    /// # Errors
    ///
    /// Returns [`GreenhouseError::IndexOutOfRange`] when `index >= len`;
    /// the settings are left untouched in that case.
    pub fn apply(&self, index: usize, settings: &mut SettingsStore) -> Result<(), GreenhouseError> {
        let record = self
            .records
            .get(index)
            .ok_or(GreenhouseError::IndexOutOfRange {
                index,
                len: self.records.len(),
            })?;
        settings.apply_preconfiguration(record);
        Ok(())
    }

    /// All stored records, in insertion order.
    #[must_use]
    pub fn list(&self) -> &[Preconfiguration] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(plant: &str) -> Preconfiguration {
        Preconfiguration {
            luminosity: 50.0,
            humidity: 60.0,
            temperature: 22.0,
            carbon_dioxide: 40.0,
            plant_type: plant.to_owned(),
        }
    }

    #[test]
    fn should_apply_first_record_on_load() {
        let mut settings = SettingsStore::default();
        let mut catalog = PreconfigurationCatalog::default();

        catalog.load(vec![record("tomato"), record("basil")], &mut settings);

        assert_eq!(catalog.len(), 2);
        assert_eq!(settings.get(SettingName::PlantType), "tomato");
        assert_eq!(settings.get(SettingName::Temperature), "22");
    }

    #[test]
    fn should_leave_settings_untouched_when_loading_empty() {
        let mut settings = SettingsStore::default();
        let mut catalog = PreconfigurationCatalog::default();

        catalog.load(Vec::new(), &mut settings);

        assert!(catalog.is_empty());
        assert_eq!(settings, SettingsStore::default());
    }

    #[test]
    fn should_append_records_in_order() {
        let mut catalog = PreconfigurationCatalog::default();
        catalog.add(record("tomato")).unwrap();
        catalog.add(record("basil")).unwrap();

        assert_eq!(catalog.list()[0].plant_type, "tomato");
        assert_eq!(catalog.list()[1].plant_type, "basil");
    }

    #[test]
    fn should_reject_exact_duplicate_record() {
        let mut catalog = PreconfigurationCatalog::default();
        catalog.add(record("tomato")).unwrap();

        let result = catalog.add(record("tomato"));
        assert_eq!(result, Err(GreenhouseError::DuplicateConflict));
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn should_accept_record_differing_in_one_field() {
        let mut catalog = PreconfigurationCatalog::default();
        catalog.add(record("tomato")).unwrap();

        let mut other = record("tomato");
        other.humidity = 61.0;
        catalog.add(other).unwrap();
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn should_reject_record_with_out_of_range_field() {
        let mut catalog = PreconfigurationCatalog::default();
        let mut bad = record("tomato");
        bad.temperature = 90.0;

        let result = catalog.add(bad);
        assert!(matches!(result, Err(GreenhouseError::InvalidValue { .. })));
        assert!(catalog.is_empty());
    }

    #[test]
    fn should_apply_record_by_index() {
        let mut settings = SettingsStore::default();
        let mut catalog = PreconfigurationCatalog::default();
        catalog.add(record("tomato")).unwrap();
        catalog.add(record("basil")).unwrap();

        catalog.apply(1, &mut settings).unwrap();
        assert_eq!(settings.get(SettingName::PlantType), "basil");
    }

    #[test]
    fn should_reject_out_of_range_index_and_keep_settings() {
        let mut settings = SettingsStore::default();
        let mut catalog = PreconfigurationCatalog::default();
        catalog.add(record("tomato")).unwrap();

        let before = settings.clone();
        let result = catalog.apply(1, &mut settings);

        assert_eq!(
            result,
            Err(GreenhouseError::IndexOutOfRange { index: 1, len: 1 })
        );
        assert_eq!(settings, before);
    }

    #[test]
    fn should_serialize_with_wire_keys() {
        let json = serde_json::to_value(record("tomato")).unwrap();
        assert!(json.get("carbonDioxide").is_some());
        assert!(json.get("plantType").is_some());
    }
}
