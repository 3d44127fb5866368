//! Wire types for the intraday endpoint (REST).

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// JSON key holding the intraday series in the backend response.
pub const INTRADAY_SERIES_KEY: &str = "Time Series (5min)";

/// Raw response for one symbol's intraday window.
///
/// Other top-level keys (metadata blocks and the like) are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntradayResponse {
    #[serde(
        rename = "Time Series (5min)",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub time_series: Option<SeriesMap>,
}

/// One raw observation row. All values are string-encoded decimals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObservationResponse {
    #[serde(rename = "1. open")]
    pub open: String,
    #[serde(rename = "2. high")]
    pub high: String,
    #[serde(rename = "3. low")]
    pub low: String,
    #[serde(rename = "4. close")]
    pub close: String,
    #[serde(rename = "5. volume")]
    pub volume: String,
}

/// Timestamp → observation rows, in the order the backend delivered them.
///
/// The backend emits newest-first and that order is semantic: the chart
/// reshaping reverses it to get chronological labels. A `HashMap` would
/// destroy it, so the pairs stay in a `Vec`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SeriesMap(pub Vec<(String, ObservationResponse)>);

impl Serialize for SeriesMap {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (timestamp, row) in &self.0 {
            map.serialize_entry(timestamp, row)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for SeriesMap {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct SeriesMapVisitor;

        impl<'de> Visitor<'de> for SeriesMapVisitor {
            type Value = SeriesMap;

            fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                f.write_str("a map of timestamp strings to observation rows")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((timestamp, row)) =
                    access.next_entry::<String, ObservationResponse>()?
                {
                    entries.push((timestamp, row));
                }
                Ok(SeriesMap(entries))
            }
        }

        deserializer.deserialize_map(SeriesMapVisitor)
    }
}
