//! Conversion: IntradayResponse → IntradaySeries (TryFrom + validation).

use super::wire::{self, INTRADAY_SERIES_KEY};
use super::{IntradaySeries, Observation};
use crate::error::MalformedDataError;

impl TryFrom<wire::IntradayResponse> for IntradaySeries {
    type Error = MalformedDataError;

    fn try_from(source: wire::IntradayResponse) -> Result<Self, Self::Error> {
        let series = source
            .time_series
            .ok_or(MalformedDataError::MissingSeriesKey(INTRADAY_SERIES_KEY))?;

        if series.0.is_empty() {
            return Err(MalformedDataError::EmptySeries);
        }

        let mut entries = Vec::with_capacity(series.0.len());
        for (timestamp, row) in series.0 {
            let observation = Observation {
                open: parse_field(&timestamp, "1. open", &row.open)?,
                high: parse_field(&timestamp, "2. high", &row.high)?,
                low: parse_field(&timestamp, "3. low", &row.low)?,
                close: parse_field(&timestamp, "4. close", &row.close)?,
                volume: parse_field(&timestamp, "5. volume", &row.volume)?,
            };
            entries.push((timestamp, observation));
        }

        Ok(IntradaySeries { entries })
    }
}

/// Parse one string-encoded decimal field.
///
/// `f64::from_str` happily accepts `"NaN"` and `"inf"`, so finiteness is
/// checked on top of the parse.
fn parse_field(
    timestamp: &str,
    field: &'static str,
    raw: &str,
) -> Result<f64, MalformedDataError> {
    let malformed = || MalformedDataError::NonNumericField {
        timestamp: timestamp.to_string(),
        field,
        value: raw.to_string(),
    };

    let value: f64 = raw.trim().parse().map_err(|_| malformed())?;
    if !value.is_finite() {
        return Err(malformed());
    }
    Ok(value)
}
