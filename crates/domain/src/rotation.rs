//! Crop rotation — soil history and the next-crop suggestion.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Chronological record of past crops, one entry per growing season.
///
/// Append-only; entries are free-form crop names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SoilHistory {
    entries: Vec<String>,
}

impl SoilHistory {
    #[must_use]
    pub fn new(entries: Vec<String>) -> Self {
        Self { entries }
    }

    /// Record another season's crop. No validation, no duplicate check.
    pub fn push(&mut self, crop: impl Into<String>) {
        self.entries.push(crop.into());
    }

    #[must_use]
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Suggest the next crop given the one currently growing.
    #[must_use]
    pub fn suggest_next(&self, current_crop: &str) -> String {
        suggest(&self.entries, current_crop)
    }
}

/// Pick the least-grown crop from `history`.
///
/// Builds a frequency count over the history; a non-empty `current_crop`
/// adds one to its own count, penalising it as a choice for next season.
/// The history is then scanned in chronological order keeping the first
/// entry with a strictly smaller count than anything seen before, so ties
/// resolve to the earliest occurrence. Only crops literally present in the
/// history are candidates: `current_crop` can win only if it was also grown
/// before. An empty history yields an empty string.
#[must_use]
pub fn suggest(history: &[String], current_crop: &str) -> String {
    if history.is_empty() {
        return String::new();
    }

    let mut counts: HashMap<&str, usize> = HashMap::new();
    for crop in history {
        *counts.entry(crop.as_str()).or_default() += 1;
    }
    if !current_crop.is_empty() {
        *counts.entry(current_crop).or_default() += 1;
    }

    let mut best: Option<(&str, usize)> = None;
    for crop in history {
        let count = counts[crop.as_str()];
        if best.is_none_or(|(_, lowest)| count < lowest) {
            best = Some((crop, count));
        }
    }
    best.map(|(crop, _)| crop.to_owned()).unwrap_or_default()
}
