//! Rotation service — soil history appends and crop suggestions.

use crate::shared::SharedGreenhouse;

/// Application service for crop rotation.
#[derive(Debug, Clone)]
pub struct RotationService {
    state: SharedGreenhouse,
}

impl RotationService {
    #[must_use]
    pub fn new(state: SharedGreenhouse) -> Self {
        Self { state }
    }

    /// Record another season's crop in the soil history.
    pub fn add_plant(&self, crop: &str) {
        self.state.with(|gh| gh.soil_history.push(crop));
        tracing::debug!(crop, "plant added to soil history");
    }

    /// Suggest next season's crop from the history and the plant currently
    /// growing. Empty string when there is no history.
    #[must_use]
    pub fn suggestion(&self) -> String {
        self.state
            .with(|gh| gh.soil_history.suggest_next(gh.settings.plant_type()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::settings_service::SettingsService;

    #[test]
    fn should_return_empty_suggestion_without_history() {
        let svc = RotationService::new(SharedGreenhouse::default());
        assert_eq!(svc.suggestion(), "");
    }

    #[test]
    fn should_suggest_least_grown_crop() {
        let svc = RotationService::new(SharedGreenhouse::default());
        svc.add_plant("wheat");
        svc.add_plant("corn");
        svc.add_plant("wheat");

        assert_eq!(svc.suggestion(), "corn");
    }

    #[test]
    fn should_use_current_plant_type_as_the_growing_crop() {
        let shared = SharedGreenhouse::default();
        let rotation = RotationService::new(shared.clone());
        let settings = SettingsService::new(shared);

        rotation.add_plant("corn");
        rotation.add_plant("rye");
        settings.set_setting("plantType", "corn").unwrap();

        // corn is penalised for currently growing, rye wins
        assert_eq!(rotation.suggestion(), "rye");
    }
}
