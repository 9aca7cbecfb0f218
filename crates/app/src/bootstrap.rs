//! Bootstrap parsing — the three whitespace-delimited startup sources.
//!
//! Formats:
//! - soil history: a count, then that many crop tokens
//! - ideal parameters: four numbers (luminosity, humidity, temperature,
//!   carbonDioxide)
//! - preconfigurations: a count, then rows of four numbers and one crop token
//!
//! Blank input parses to the empty/zero value so an empty file behaves like
//! a missing one. Malformed content is a hard error: bootstrap runs once at
//! startup and a silently half-loaded state is worse than refusing to start.

use greenhouse_domain::error::GreenhouseError;
use greenhouse_domain::ideal::IdealParameters;
use greenhouse_domain::preconfiguration::Preconfiguration;
use greenhouse_domain::rotation::SoilHistory;

/// Errors raised while parsing a bootstrap source.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum BootstrapError {
    /// A token that should have been a number.
    #[error("expected a number, found `{0}`")]
    InvalidNumber(String),
    /// The source declared more entries than it contains.
    #[error("expected {expected} entries, found only {found}")]
    TruncatedList { expected: usize, found: usize },
    /// A preconfiguration row with a field outside its setting's range.
    #[error("invalid preconfiguration: {0}")]
    InvalidPreconfiguration(#[from] GreenhouseError),
}

/// Parse the soil-history source.
///
/// # Errors
///
/// Returns [`BootstrapError`] when the leading count is not a number or the
/// source holds fewer crops than declared.
pub fn parse_soil_history(input: &str) -> Result<SoilHistory, BootstrapError> {
    if input.trim().is_empty() {
        return Ok(SoilHistory::default());
    }
    let mut tokens = input.split_whitespace();
    let count = next_count(&mut tokens)?;
    let entries: Vec<String> = tokens.take(count).map(ToOwned::to_owned).collect();
    if entries.len() < count {
        return Err(BootstrapError::TruncatedList {
            expected: count,
            found: entries.len(),
        });
    }
    Ok(SoilHistory::new(entries))
}

/// Parse the ideal-parameters source.
///
/// # Errors
///
/// Returns [`BootstrapError::InvalidNumber`] when any of the four values is
/// missing or not a number.
pub fn parse_ideal_parameters(input: &str) -> Result<IdealParameters, BootstrapError> {
    if input.trim().is_empty() {
        return Ok(IdealParameters::default());
    }
    let mut tokens = input.split_whitespace();
    let luminosity = next_f64(&mut tokens)?;
    let humidity = next_f64(&mut tokens)?;
    let temperature = next_f64(&mut tokens)?;
    let carbon_dioxide = next_f64(&mut tokens)?;
    Ok(IdealParameters::new(
        luminosity,
        humidity,
        temperature,
        carbon_dioxide,
    ))
}

/// Parse the preconfigurations source.
///
/// Every row is range-checked the same way the catalog checks additions, so
/// record 0 can be applied to the live settings without violating any
/// setting's rule.
///
/// # Errors
///
/// Returns [`BootstrapError`] for a malformed count, a short or non-numeric
/// row, or an out-of-range field.
pub fn parse_preconfigurations(input: &str) -> Result<Vec<Preconfiguration>, BootstrapError> {
    if input.trim().is_empty() {
        return Ok(Vec::new());
    }
    let mut tokens = input.split_whitespace();
    let count = next_count(&mut tokens)?;
    let mut records = Vec::with_capacity(count);
    for found in 0..count {
        let luminosity = next_f64(&mut tokens)?;
        let humidity = next_f64(&mut tokens)?;
        let temperature = next_f64(&mut tokens)?;
        let carbon_dioxide = next_f64(&mut tokens)?;
        let plant_type = tokens
            .next()
            .ok_or(BootstrapError::TruncatedList {
                expected: count,
                found,
            })?
            .to_owned();

        let record = Preconfiguration {
            luminosity,
            humidity,
            temperature,
            carbon_dioxide,
            plant_type,
        };
        record.validate()?;
        records.push(record);
    }
    Ok(records)
}

fn next_count<'a>(tokens: &mut impl Iterator<Item = &'a str>) -> Result<usize, BootstrapError> {
    let token = tokens.next().unwrap_or_default();
    token
        .parse()
        .map_err(|_| BootstrapError::InvalidNumber(token.to_owned()))
}

fn next_f64<'a>(tokens: &mut impl Iterator<Item = &'a str>) -> Result<f64, BootstrapError> {
    let token = tokens.next().unwrap_or_default();
    token
        .parse()
        .map_err(|_| BootstrapError::InvalidNumber(token.to_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_soil_history_in_order() {
        let soil = parse_soil_history("3 wheat corn wheat").unwrap();
        assert_eq!(soil.entries(), ["wheat", "corn", "wheat"]);
    }

    #[test]
    fn should_parse_soil_history_across_lines() {
        let soil = parse_soil_history("2\nwheat\ncorn\n").unwrap();
        assert_eq!(soil.entries(), ["wheat", "corn"]);
    }

    #[test]
    fn should_return_empty_history_for_blank_input() {
        assert!(parse_soil_history("  \n ").unwrap().is_empty());
    }

    #[test]
    fn should_reject_soil_history_shorter_than_declared() {
        let result = parse_soil_history("3 wheat corn");
        assert_eq!(
            result,
            Err(BootstrapError::TruncatedList {
                expected: 3,
                found: 2
            })
        );
    }

    #[test]
    fn should_reject_non_numeric_count() {
        let result = parse_soil_history("many wheat");
        assert_eq!(
            result,
            Err(BootstrapError::InvalidNumber("many".to_owned()))
        );
    }

    #[test]
    fn should_parse_ideal_parameters() {
        let ideal = parse_ideal_parameters("60 70 22.5 40").unwrap();
        assert!((ideal.luminosity - 60.0).abs() < f64::EPSILON);
        assert!((ideal.humidity - 70.0).abs() < f64::EPSILON);
        assert!((ideal.temperature - 22.5).abs() < f64::EPSILON);
        assert!((ideal.carbon_dioxide - 40.0).abs() < f64::EPSILON);
    }

    #[test]
    fn should_reject_short_ideal_parameters() {
        let result = parse_ideal_parameters("60 70 22.5");
        assert_eq!(result, Err(BootstrapError::InvalidNumber(String::new())));
    }

    #[test]
    fn should_parse_preconfiguration_rows() {
        let records = parse_preconfigurations("2 50 60 22 40 tomato 70 80 26 45 basil").unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].plant_type, "tomato");
        assert!((records[1].temperature - 26.0).abs() < f64::EPSILON);
    }

    #[test]
    fn should_return_no_records_for_blank_input() {
        assert!(parse_preconfigurations("").unwrap().is_empty());
    }

    #[test]
    fn should_reject_truncated_preconfiguration_row() {
        let result = parse_preconfigurations("1 50 60 22 40");
        assert_eq!(
            result,
            Err(BootstrapError::TruncatedList {
                expected: 1,
                found: 0
            })
        );
    }

    #[test]
    fn should_reject_out_of_range_preconfiguration_row() {
        let result = parse_preconfigurations("1 50 60 90 40 cactus");
        assert!(matches!(
            result,
            Err(BootstrapError::InvalidPreconfiguration(_))
        ));
    }
}
