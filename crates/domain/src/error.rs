//! Domain error taxonomy.
//!
//! Every fallible domain operation returns one of these variants. All of
//! them are recoverable: the boundary layer maps each to a response and no
//! failed operation leaves the aggregate partially written.

use crate::setting::SettingName;

/// Errors produced by domain operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GreenhouseError {
    /// The requested setting name is not one of the seven known settings.
    #[error("setting `{0}` was not found")]
    UnknownSetting(String),

    /// The raw value could not be parsed as a number, or it falls outside
    /// the setting's declared range.
    #[error("`{value}` is not a valid value for setting `{name}`")]
    InvalidValue {
        name: SettingName,
        value: String,
    },

    /// A preconfiguration index outside `0..len`.
    #[error("preconfiguration index {index} is out of range (catalog holds {len})")]
    IndexOutOfRange { index: usize, len: usize },

    /// An identical preconfiguration (all five fields equal) already exists.
    #[error("an identical preconfiguration is already in the catalog")]
    DuplicateConflict,
}
