//! Shared application state for axum handlers.

use std::sync::Arc;

use greenhouse_app::ports::Clock;
use greenhouse_app::services::{
    IrrigationService, PreconfigurationService, RotationService, SettingsService,
};
use greenhouse_app::shared::SharedGreenhouse;

/// Application state shared across all axum handlers.
///
/// Generic over the clock implementation to avoid dynamic dispatch.
/// `Clone` is implemented manually so the clock itself does not need to be
/// `Clone` — only the `Arc` wrappers are cloned.
pub struct AppState<C> {
    /// Setpoint reads and writes.
    pub settings: Arc<SettingsService>,
    /// Catalog reads, appends, applications.
    pub preconfigurations: Arc<PreconfigurationService>,
    /// Soil history and crop suggestions.
    pub rotation: Arc<RotationService>,
    /// Watering schedule and volume.
    pub irrigation: Arc<IrrigationService<C>>,
}

impl<C> Clone for AppState<C> {
    fn clone(&self) -> Self {
        Self {
            settings: Arc::clone(&self.settings),
            preconfigurations: Arc::clone(&self.preconfigurations),
            rotation: Arc::clone(&self.rotation),
            irrigation: Arc::clone(&self.irrigation),
        }
    }
}

impl<C> AppState<C>
where
    C: Clock + Send + Sync + 'static,
{
    /// Wire all four services over one shared aggregate.
    pub fn new(shared: &SharedGreenhouse, clock: C) -> Self {
        Self {
            settings: Arc::new(SettingsService::new(shared.clone())),
            preconfigurations: Arc::new(PreconfigurationService::new(shared.clone())),
            rotation: Arc::new(RotationService::new(shared.clone())),
            irrigation: Arc::new(IrrigationService::new(shared.clone(), clock)),
        }
    }
}
