//! Turns a raw list of asset records into the figures shown on the dashboard.
use crate::core::asset::AssetRecord;
use serde::Serialize;
use std::collections::HashMap;
use tracing::debug;

/// A single slice of the distribution chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    pub label: String,
    /// Share of buy assets in percent, rounded to 2 decimals.
    pub value: f64,
}

/// Everything the view needs after one data load.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateResult {
    pub buy_assets: Vec<AssetRecord>,
    pub invested_value: f64,
    pub chart_series: Vec<ChartPoint>,
}

/// Builds the dashboard aggregates from `records`.
///
/// `buy_assets` keeps the input order. `invested_value` sums
/// `amount * price_per_unit` over *all* records, sells included; the
/// dashboard has always reported it that way, so it is kept literal even
/// though the label suggests buys only. `chart_series` counts buy assets per
/// `asset_type` in first-seen order and is empty when there are no buys.
pub fn aggregate(records: &[AssetRecord]) -> AggregateResult {
    let buy_assets: Vec<AssetRecord> = records.iter().filter(|r| r.is_buy()).cloned().collect();

    let invested_value = records.iter().fold(0.0, |acc, r| acc + r.value());

    let chart_series = distribution(&buy_assets);

    debug!(
        records = records.len(),
        buys = buy_assets.len(),
        categories = chart_series.len(),
        "Aggregated assets"
    );

    AggregateResult {
        buy_assets,
        invested_value,
        chart_series,
    }
}

fn distribution(buy_assets: &[AssetRecord]) -> Vec<ChartPoint> {
    if buy_assets.is_empty() {
        return Vec::new();
    }

    // Vec keeps insertion order, the map only indexes into it
    let mut counts: Vec<(&str, usize)> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();
    for asset in buy_assets {
        match index.get(asset.asset_type.as_str()) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(asset.asset_type.as_str(), counts.len());
                counts.push((asset.asset_type.as_str(), 1));
            }
        }
    }

    let total = buy_assets.len() as f64;
    counts
        .into_iter()
        .map(|(asset_type, count)| ChartPoint {
            label: category_label(asset_type),
            value: round_to_cents(count as f64 * 100.0 / total),
        })
        .collect()
}

/// Display label for an asset type: every `_` becomes a space.
pub fn category_label(asset_type: &str) -> String {
    asset_type.replace('_', " ")
}

/// Rounds to 2 decimal places, half away from zero.
pub fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(kind: &str, asset_type: &str, amount: f64, price_per_unit: f64) -> AssetRecord {
        AssetRecord {
            kind: kind.to_string(),
            asset_type: asset_type.to_string(),
            amount,
            price_per_unit,
            name: format!("{asset_type} holding"),
        }
    }

    #[test]
    fn test_end_to_end_example() {
        let records = vec![
            record("buy", "stock", 2.0, 100.0),
            record("buy", "bond", 1.0, 50.0),
            record("sell", "stock", 1.0, 100.0),
        ];

        let result = aggregate(&records);

        assert_eq!(result.invested_value, 350.0);
        assert_eq!(result.buy_assets.len(), 2);
        assert_eq!(
            result.chart_series,
            vec![
                ChartPoint {
                    label: "stock".to_string(),
                    value: 50.0
                },
                ChartPoint {
                    label: "bond".to_string(),
                    value: 50.0
                },
            ]
        );
    }

    #[test]
    fn test_empty_input() {
        let result = aggregate(&[]);
        assert_eq!(result.invested_value, 0.0);
        assert!(result.buy_assets.is_empty());
        assert!(result.chart_series.is_empty());
    }

    #[test]
    fn test_no_buys_gives_empty_series() {
        let records = vec![
            record("sell", "stock", 3.0, 10.0),
            record("sell", "crypto", 1.0, 5.0),
        ];
        let result = aggregate(&records);
        assert!(result.buy_assets.is_empty());
        assert!(result.chart_series.is_empty());
        assert_eq!(result.invested_value, 35.0);
    }

    #[test]
    fn test_buy_assets_preserve_order() {
        let records = vec![
            record("buy", "crypto", 1.0, 1.0),
            record("sell", "stock", 1.0, 1.0),
            record("buy", "stock", 2.0, 1.0),
            record("transfer", "stock", 1.0, 1.0),
            record("buy", "bond", 3.0, 1.0),
        ];
        let result = aggregate(&records);
        let types: Vec<&str> = result
            .buy_assets
            .iter()
            .map(|a| a.asset_type.as_str())
            .collect();
        assert_eq!(types, vec!["crypto", "stock", "bond"]);
    }

    #[test]
    fn test_series_uses_first_seen_order() {
        let records = vec![
            record("buy", "stock", 1.0, 1.0),
            record("buy", "bond", 1.0, 1.0),
            record("buy", "stock", 1.0, 1.0),
        ];
        let result = aggregate(&records);
        let labels: Vec<&str> = result
            .chart_series
            .iter()
            .map(|p| p.label.as_str())
            .collect();
        assert_eq!(labels, vec!["stock", "bond"]);
        assert_eq!(result.chart_series[0].value, 66.67);
        assert_eq!(result.chart_series[1].value, 33.33);
    }

    #[test]
    fn test_sell_records_do_not_affect_series() {
        let records = vec![
            record("sell", "crypto", 1.0, 1.0),
            record("buy", "stock", 1.0, 1.0),
        ];
        let result = aggregate(&records);
        assert_eq!(result.chart_series.len(), 1);
        assert_eq!(result.chart_series[0].label, "stock");
        assert_eq!(result.chart_series[0].value, 100.0);
    }

    #[test]
    fn test_label_replaces_all_underscores() {
        let records = vec![
            record("buy", "real_estate", 1.0, 1.0),
            record("buy", "private_equity_fund", 1.0, 1.0),
        ];
        let result = aggregate(&records);
        assert_eq!(result.chart_series[0].label, "real estate");
        assert_eq!(result.chart_series[1].label, "private equity fund");
        assert_eq!(category_label("cash"), "cash");
    }

    #[test]
    fn test_series_sums_to_hundred() {
        let types = ["stock", "bond", "crypto", "stock", "cash", "bond", "gold"];
        let records: Vec<AssetRecord> = types
            .iter()
            .map(|t| record("buy", t, 1.0, 1.0))
            .collect();
        let result = aggregate(&records);
        let sum: f64 = result.chart_series.iter().map(|p| p.value).sum();
        let tolerance = 0.01 * result.chart_series.len() as f64;
        assert!((sum - 100.0).abs() <= tolerance, "sum was {sum}");
    }

    #[test]
    fn test_round_to_cents() {
        assert_eq!(round_to_cents(200.0 / 3.0), 66.67);
        assert_eq!(round_to_cents(100.0 / 3.0), 33.33);
        assert_eq!(round_to_cents(100.0 / 7.0), 14.29);
        assert_eq!(round_to_cents(50.0), 50.0);
    }

    #[test]
    fn test_serialized_contract() {
        let result = aggregate(&[record("buy", "real_estate", 2.0, 10.0)]);
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["investedValue"], 20.0);
        assert_eq!(json["buyAssets"][0]["assetType"], "real_estate");
        assert_eq!(json["chartSeries"][0]["label"], "real estate");
        assert_eq!(json["chartSeries"][0]["value"], 100.0);
    }
}
