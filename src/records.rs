use crate::schema::{AggregatedReports, FinancialRecord, LineItems};
use log::debug;
use std::collections::BTreeMap;

/// Alternate spellings seen across eleven years of filings, tried in order.
/// First match wins; extend these lists when a new filing format introduces
/// yet another variant.
const REVENUE_KEYS: &[&str] = &["Revenue:", "Revenue"];
const TOTAL_REVENUE_KEYS: &[&str] = &["Total revenue", "Total"];
const NET_INCOME_KEYS: &[&str] = &["Net income"];

const PRODUCT_KEY: &str = "Product";
const SERVICE_KEY: &str = "Service and other";
const TOTAL_KEY: &str = "Total";

/// Cleans a financial string and converts it to a float.
///
/// Handles `$`, `,`, and `(...)` for negative numbers. Returns 0.0 when the
/// input is absent, empty after cleaning, or not a number; parse failures are
/// absorbed, never raised.
pub fn parse_financial_value(raw: Option<&str>) -> f64 {
    let Some(raw) = raw else {
        return 0.0;
    };

    let mut cleaned = raw.trim().replace(['$', ','], "");

    let mut negative = false;
    if cleaned.starts_with('(') && cleaned.ends_with(')') && cleaned.len() >= 2 {
        negative = true;
        cleaned = cleaned[1..cleaned.len() - 1].to_string();
    }

    let cleaned = cleaned.trim();
    if cleaned.is_empty() {
        return 0.0;
    }

    match cleaned.parse::<f64>() {
        Ok(value) if negative => -value,
        Ok(value) => value,
        Err(_) => 0.0,
    }
}

fn first_match<'a>(
    data: &'a LineItems,
    candidates: &[&str],
) -> Option<&'a BTreeMap<String, String>> {
    candidates.iter().find_map(|key| data.get(*key))
}

fn sub_value(subs: Option<&BTreeMap<String, String>>, candidates: &[&str]) -> f64 {
    let raw = subs.and_then(|map| {
        candidates
            .iter()
            .find_map(|key| map.get(*key))
            .map(String::as_str)
    });
    parse_financial_value(raw)
}

/// Flattens the aggregated reports into one numeric row per year, ascending.
///
/// Years that failed extraction, and years whose data carries no recognizable
/// Net income entry, are dropped.
pub fn build_records(reports: &AggregatedReports) -> Vec<FinancialRecord> {
    let mut records = Vec::new();

    for (&year, outcome) in reports {
        let Some(data) = outcome.data() else {
            continue;
        };

        let Some(net_income) = first_match(data, NET_INCOME_KEYS) else {
            debug!("Skipping year {year}: no net income entry");
            continue;
        };

        let revenue = first_match(data, REVENUE_KEYS);

        records.push(FinancialRecord {
            year,
            product_revenue: sub_value(revenue, &[PRODUCT_KEY]),
            service_revenue: sub_value(revenue, &[SERVICE_KEY]),
            total_revenue: sub_value(revenue, TOTAL_REVENUE_KEYS),
            net_income: sub_value(Some(net_income), &[TOTAL_KEY]),
        });
    }

    records
}
