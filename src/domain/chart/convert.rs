//! Conversion: IntradaySeries → ChartData (the chart reshaping).

use super::{ChartData, ChartSeries, SnapshotBreakdown};
use crate::domain::series::IntradaySeries;

impl From<&IntradaySeries> for ChartData {
    fn from(series: &IntradaySeries) -> Self {
        // Delivery order is newest-first; the widgets want chronological.
        let labels: Vec<String> = series
            .entries()
            .iter()
            .rev()
            .map(|(timestamp, _)| timestamp.clone())
            .collect();

        let prices: Vec<f64> = series
            .entries()
            .iter()
            .rev()
            .map(|(_, obs)| obs.open)
            .collect();

        let volumes: Vec<f64> = series
            .entries()
            .iter()
            .rev()
            .map(|(_, obs)| obs.volume)
            .collect();

        // The pie reads the row behind the first chronological label — the
        // OLDEST row in the window, not the newest. That indexing looks like
        // an off-by-ordering quirk, but it is the displayed behavior and is
        // kept literally (see DESIGN.md).
        let (_, snapshot_row) = series.oldest();
        let snapshot = SnapshotBreakdown {
            values: [
                snapshot_row.open,
                snapshot_row.high,
                snapshot_row.low,
                snapshot_row.close,
            ],
        };

        ChartData {
            price: ChartSeries {
                labels: labels.clone(),
                data: prices,
            },
            volume: ChartSeries {
                labels,
                data: volumes,
            },
            snapshot,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::chart::OhlcCategory;
    use crate::domain::series::wire::IntradayResponse;

    fn series_from_json(json: &str) -> IntradaySeries {
        let resp: IntradayResponse = serde_json::from_str(json).unwrap();
        IntradaySeries::try_from(resp).unwrap()
    }

    // The two-row window used throughout: 09:30 delivered first (newest),
    // 09:25 second.
    const TWO_ROWS: &str = r#"{
        "Time Series (5min)": {
            "2024-01-01 09:30": {"1. open": "1", "2. high": "2", "3. low": "0.5", "4. close": "1.5", "5. volume": "100"},
            "2024-01-01 09:25": {"1. open": "0.9", "2. high": "1.8", "3. low": "0.4", "4. close": "1.2", "5. volume": "90"}
        }
    }"#;

    #[test]
    fn test_labels_are_reverse_of_delivery_order() {
        let series = series_from_json(TWO_ROWS);
        let charts = ChartData::from(&series);
        assert_eq!(
            charts.price.labels,
            vec!["2024-01-01 09:25", "2024-01-01 09:30"]
        );

        // Reversing twice restores delivery order.
        let delivered: Vec<&str> = series.entries().iter().map(|(ts, _)| ts.as_str()).collect();
        let twice: Vec<&str> = charts.price.labels.iter().rev().map(String::as_str).collect();
        assert_eq!(twice, delivered);
    }

    #[test]
    fn test_price_and_volume_align_with_labels() {
        let charts = ChartData::from(&series_from_json(TWO_ROWS));
        assert_eq!(charts.price.data, vec![0.9, 1.0]);
        assert_eq!(charts.volume.data, vec![90.0, 100.0]);
        assert_eq!(charts.volume.labels, charts.price.labels);
    }

    #[test]
    fn test_snapshot_reads_oldest_row() {
        // Pinned quirk: the snapshot comes from the row behind labels[0]
        // after reversal — the oldest row — not the most recent raw entry.
        let charts = ChartData::from(&series_from_json(TWO_ROWS));
        assert_eq!(charts.snapshot.get(OhlcCategory::Open), 0.9);
        assert_eq!(charts.snapshot.get(OhlcCategory::High), 1.8);
        assert_eq!(charts.snapshot.get(OhlcCategory::Low), 0.4);
        assert_eq!(charts.snapshot.get(OhlcCategory::Close), 1.2);
    }

    #[test]
    fn test_snapshot_has_four_entries_in_fixed_order() {
        let charts = ChartData::from(&series_from_json(TWO_ROWS));
        let categories: Vec<OhlcCategory> =
            charts.snapshot.entries().map(|(c, _)| c).collect();
        assert_eq!(categories, OhlcCategory::ALL.to_vec());
    }

    #[test]
    fn test_label_and_data_lengths_match_for_any_window() {
        for n in 1..=5usize {
            let rows: Vec<String> = (0..n)
                .map(|i| {
                    format!(
                        r#""2024-01-01 09:{:02}": {{"1. open": "{}", "2. high": "2", "3. low": "0.5", "4. close": "1.5", "5. volume": "{}"}}"#,
                        30 - i * 5,
                        1.0 + i as f64,
                        100 * (i + 1)
                    )
                })
                .collect();
            let json = format!(r#"{{"Time Series (5min)": {{{}}}}}"#, rows.join(","));
            let charts = ChartData::from(&series_from_json(&json));
            assert_eq!(charts.price.labels.len(), n);
            assert_eq!(charts.price.data.len(), n);
            assert_eq!(charts.volume.labels.len(), n);
            assert_eq!(charts.volume.data.len(), n);
        }
    }

    #[test]
    fn test_single_row_window_snapshot_is_that_row() {
        let json = r#"{
            "Time Series (5min)": {
                "2024-01-01 09:30": {"1. open": "10", "2. high": "12", "3. low": "9", "4. close": "11", "5. volume": "5"}
            }
        }"#;
        let charts = ChartData::from(&series_from_json(json));
        assert_eq!(charts.price.labels, vec!["2024-01-01 09:30"]);
        assert_eq!(charts.snapshot.values, [10.0, 12.0, 9.0, 11.0]);
    }
}
