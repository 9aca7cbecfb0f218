//! Application services — one per domain component.

pub mod irrigation_service;
pub mod preconfiguration_service;
pub mod rotation_service;
pub mod settings_service;

pub use irrigation_service::IrrigationService;
pub use preconfiguration_service::PreconfigurationService;
pub use rotation_service::RotationService;
pub use settings_service::SettingsService;
