//! Settings — the seven named greenhouse setpoints and their validation.
//!
//! Each setting carries a declarative [`ValueRule`] baked into the store, so
//! the write path is a single parse → check → assign pipeline instead of a
//! branch chain per field. A write that fails validation leaves the previous
//! value intact.

use serde::{Deserialize, Serialize};

use crate::error::GreenhouseError;
use crate::preconfiguration::Preconfiguration;

/// Name of one of the seven known settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingName {
    Luminosity,
    Humidity,
    Temperature,
    CarbonDioxide,
    Area,
    WaterAmount,
    PlantType,
}

impl SettingName {
    /// All seven settings, in wire order.
    pub const ALL: [Self; 7] = [
        Self::Luminosity,
        Self::Humidity,
        Self::Temperature,
        Self::CarbonDioxide,
        Self::Area,
        Self::WaterAmount,
        Self::PlantType,
    ];

    /// The wire name (camelCase, as the request layer sends it).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Luminosity => "luminosity",
            Self::Humidity => "humidity",
            Self::Temperature => "temperature",
            Self::CarbonDioxide => "carbonDioxide",
            Self::Area => "area",
            Self::WaterAmount => "waterAmount",
            Self::PlantType => "plantType",
        }
    }

    /// The validation rule applied on every write to this setting.
    #[must_use]
    pub const fn rule(self) -> ValueRule {
        match self {
            Self::Luminosity | Self::Humidity | Self::CarbonDioxide => ValueRule::Range {
                min: 0.0,
                max: 100.0,
            },
            Self::Temperature => ValueRule::Range {
                min: 5.0,
                max: 35.0,
            },
            Self::Area | Self::WaterAmount => ValueRule::Min { min: 0.0 },
            Self::PlantType => ValueRule::Text,
        }
    }
}

impl std::fmt::Display for SettingName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SettingName {
    type Err = GreenhouseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| GreenhouseError::UnknownSetting(s.to_owned()))
    }
}

/// Declarative validation rule for a setting value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ValueRule {
    /// Numeric, inclusive on both ends.
    Range { min: f64, max: f64 },
    /// Numeric with a lower bound only.
    Min { min: f64 },
    /// Free-form string, accepted unconditionally.
    Text,
}

impl ValueRule {
    /// Whether a numeric value satisfies this rule.
    ///
    /// Non-finite values never do; [`ValueRule::Text`] has no numeric
    /// interpretation and rejects as well.
    #[must_use]
    pub fn allows(self, value: f64) -> bool {
        if !value.is_finite() {
            return false;
        }
        match self {
            Self::Range { min, max } => value >= min && value <= max,
            Self::Min { min } => value >= min,
            Self::Text => false,
        }
    }
}

/// Bulk read of all seven current values, in wire shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsSnapshot {
    pub luminosity: f64,
    pub humidity: f64,
    pub temperature: f64,
    pub carbon_dioxide: f64,
    pub area: f64,
    pub water_amount: f64,
    pub plant_type: String,
}

/// The seven live setpoints.
///
/// All mutation goes through [`SettingsStore::set`] or
/// [`SettingsStore::apply_preconfiguration`], which keep every numeric field
/// inside its declared range at all times.
#[derive(Debug, Clone, PartialEq)]
pub struct SettingsStore {
    luminosity: f64,
    humidity: f64,
    temperature: f64,
    carbon_dioxide: f64,
    area: f64,
    water_amount: f64,
    plant_type: String,
}

impl Default for SettingsStore {
    fn default() -> Self {
        Self {
            luminosity: 0.0,
            humidity: 0.0,
            // mid-range start; 0 would violate the [5, 35] rule
            temperature: 20.0,
            carbon_dioxide: 0.0,
            area: 0.0,
            water_amount: 0.0,
            plant_type: String::new(),
        }
    }
}

impl SettingsStore {
    /// Set one setting from its raw string value.
    ///
    /// Numeric settings are parsed with a fallible `f64` parse and checked
    /// against the setting's [`ValueRule`]; the stored value is replaced only
    /// when both succeed.
    ///
    /// # Errors
    ///
    /// Returns [`GreenhouseError::InvalidValue`] when the raw value does not
    /// parse as a number or falls outside the setting's range.
    pub fn set(&mut self, name: SettingName, raw: &str) -> Result<(), GreenhouseError> {
        if name.rule() == ValueRule::Text {
            self.plant_type = raw.to_owned();
            return Ok(());
        }

        let value: f64 = raw.parse().map_err(|_| GreenhouseError::InvalidValue {
            name,
            value: raw.to_owned(),
        })?;
        if !name.rule().allows(value) {
            return Err(GreenhouseError::InvalidValue {
                name,
                value: raw.to_owned(),
            });
        }

        match name {
            SettingName::Luminosity => self.luminosity = value,
            SettingName::Humidity => self.humidity = value,
            SettingName::Temperature => self.temperature = value,
            SettingName::CarbonDioxide => self.carbon_dioxide = value,
            SettingName::Area => self.area = value,
            SettingName::WaterAmount => self.water_amount = value,
            // unreachable: PlantType is the Text rule handled above
            SettingName::PlantType => {}
        }
        Ok(())
    }

    /// Current value of a setting, as its string representation.
    ///
    /// Numbers use `f64` display formatting (shortest round-trip form);
    /// the plant type passes through unchanged.
    #[must_use]
    pub fn get(&self, name: SettingName) -> String {
        match name {
            SettingName::Luminosity => self.luminosity.to_string(),
            SettingName::Humidity => self.humidity.to_string(),
            SettingName::Temperature => self.temperature.to_string(),
            SettingName::CarbonDioxide => self.carbon_dioxide.to_string(),
            SettingName::Area => self.area.to_string(),
            SettingName::WaterAmount => self.water_amount.to_string(),
            SettingName::PlantType => self.plant_type.clone(),
        }
    }

    /// Copy all five fields of a preconfiguration into the store.
    ///
    /// Single call so the aggregate-wide lock makes the five-field
    /// transition observable only as a unit.
    pub fn apply_preconfiguration(&mut self, record: &Preconfiguration) {
        self.luminosity = record.luminosity;
        self.humidity = record.humidity;
        self.temperature = record.temperature;
        self.carbon_dioxide = record.carbon_dioxide;
        self.plant_type = record.plant_type.clone();
    }

    /// Bulk read of all seven current values.
    #[must_use]
    pub fn snapshot(&self) -> SettingsSnapshot {
        SettingsSnapshot {
            luminosity: self.luminosity,
            humidity: self.humidity,
            temperature: self.temperature,
            carbon_dioxide: self.carbon_dioxide,
            area: self.area,
            water_amount: self.water_amount,
            plant_type: self.plant_type.clone(),
        }
    }

    /// Current growing area in square meters.
    #[must_use]
    pub const fn area(&self) -> f64 {
        self.area
    }

    /// Current temperature setpoint.
    #[must_use]
    pub const fn temperature(&self) -> f64 {
        self.temperature
    }

    /// Current plant type.
    #[must_use]
    pub fn plant_type(&self) -> &str {
        &self.plant_type
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_all_wire_names() {
        for name in SettingName::ALL {
            let parsed: SettingName = name.as_str().parse().unwrap();
            assert_eq!(parsed, name);
        }
    }

    #[test]
    fn should_reject_unknown_setting_name() {
        let result = "defrost".parse::<SettingName>();
        assert_eq!(
            result,
            Err(GreenhouseError::UnknownSetting("defrost".to_owned()))
        );
    }

    #[test]
    fn should_roundtrip_value_within_range() {
        let mut store = SettingsStore::default();
        store.set(SettingName::Humidity, "42.5").unwrap();
        assert_eq!(store.get(SettingName::Humidity), "42.5");
    }

    #[test]
    fn should_accept_any_plant_type_string() {
        let mut store = SettingsStore::default();
        store.set(SettingName::PlantType, "tomato").unwrap();
        assert_eq!(store.get(SettingName::PlantType), "tomato");
    }

    #[test]
    fn should_keep_previous_value_when_out_of_range() {
        let mut store = SettingsStore::default();
        store.set(SettingName::Temperature, "22").unwrap();

        let result = store.set(SettingName::Temperature, "40");
        assert!(matches!(
            result,
            Err(GreenhouseError::InvalidValue { .. })
        ));
        assert_eq!(store.get(SettingName::Temperature), "22");
    }

    #[test]
    fn should_keep_previous_value_when_unparsable() {
        let mut store = SettingsStore::default();
        store.set(SettingName::Luminosity, "55").unwrap();

        let result = store.set(SettingName::Luminosity, "bright");
        assert!(matches!(
            result,
            Err(GreenhouseError::InvalidValue { .. })
        ));
        assert_eq!(store.get(SettingName::Luminosity), "55");
    }

    #[test]
    fn should_accept_range_boundaries() {
        let mut store = SettingsStore::default();
        store.set(SettingName::Temperature, "5").unwrap();
        store.set(SettingName::Temperature, "35").unwrap();
        store.set(SettingName::Humidity, "0").unwrap();
        store.set(SettingName::Humidity, "100").unwrap();
    }

    #[test]
    fn should_reject_negative_area() {
        let mut store = SettingsStore::default();
        let result = store.set(SettingName::Area, "-1");
        assert!(result.is_err());
    }

    #[test]
    fn should_reject_non_finite_values() {
        let mut store = SettingsStore::default();
        assert!(store.set(SettingName::Area, "inf").is_err());
        assert!(store.set(SettingName::Humidity, "NaN").is_err());
    }

    #[test]
    fn should_serialize_snapshot_with_wire_keys() {
        let store = SettingsStore::default();
        let json = serde_json::to_value(store.snapshot()).unwrap();
        for name in SettingName::ALL {
            assert!(json.get(name.as_str()).is_some(), "missing {name}");
        }
    }

    #[test]
    fn should_apply_all_five_preconfiguration_fields() {
        let mut store = SettingsStore::default();
        let record = Preconfiguration {
            luminosity: 60.0,
            humidity: 70.0,
            temperature: 24.0,
            carbon_dioxide: 30.0,
            plant_type: "basil".to_owned(),
        };

        store.apply_preconfiguration(&record);

        assert_eq!(store.get(SettingName::Luminosity), "60");
        assert_eq!(store.get(SettingName::Humidity), "70");
        assert_eq!(store.get(SettingName::Temperature), "24");
        assert_eq!(store.get(SettingName::CarbonDioxide), "30");
        assert_eq!(store.get(SettingName::PlantType), "basil");
    }
}
