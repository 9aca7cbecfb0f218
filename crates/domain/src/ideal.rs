//! Ideal parameters — read-only reference thresholds loaded at startup.
//!
//! Informational only: no component enforces them against the live
//! settings.

use serde::{Deserialize, Serialize};

/// Reference thresholds for the four environmental setpoints.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdealParameters {
    pub luminosity: f64,
    pub humidity: f64,
    pub temperature: f64,
    pub carbon_dioxide: f64,
}

impl IdealParameters {
    #[must_use]
    pub const fn new(luminosity: f64, humidity: f64, temperature: f64, carbon_dioxide: f64) -> Self {
        Self {
            luminosity,
            humidity,
            temperature,
            carbon_dioxide,
        }
    }
}
