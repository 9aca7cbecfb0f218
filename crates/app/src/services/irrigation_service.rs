//! Irrigation service — watering schedule and water volume.

use greenhouse_domain::irrigation::{self, IrrigationPlan};

use crate::ports::Clock;
use crate::shared::SharedGreenhouse;

/// Application service for irrigation planning.
///
/// Generic over the clock so scheduling can be tested against fixed
/// instants.
#[derive(Debug, Clone)]
pub struct IrrigationService<C> {
    state: SharedGreenhouse,
    clock: C,
}

impl<C: Clock> IrrigationService<C> {
    #[must_use]
    pub fn new(state: SharedGreenhouse, clock: C) -> Self {
        Self { state, clock }
    }

    /// Water needed for one watering, from the current area and temperature
    /// setpoints.
    #[must_use]
    pub fn water_amount(&self) -> f64 {
        self.state
            .with(|gh| irrigation::water_volume(gh.settings.area(), gh.settings.temperature()))
    }

    /// The next planned watering, from the current wall-clock instant.
    /// Pure function of the clock; no aggregate state is consulted.
    #[must_use]
    pub fn next_irrigation(&self) -> IrrigationPlan {
        irrigation::next_irrigation(self.clock.now())
    }
}
