use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One fiscal-year filing to scrape: the year it covers and where it lives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub year: i32,
    pub url: String,
}

impl Report {
    pub fn new(year: i32, url: impl Into<String>) -> Self {
        Self {
            year,
            url: url.into(),
        }
    }
}

/// Extracted income-statement rows: top-level metric label ("Revenue",
/// "Net income") to a map of sub-label ("Total", "Product", ...) to the raw
/// value string as it appeared in the filing. Values stay unparsed here;
/// numeric conversion happens in the record builder.
pub type LineItems = BTreeMap<String, BTreeMap<String, String>>;

/// What one page yielded: either line items or a failure reason.
///
/// Serialized untagged, so the persisted JSON holds a mapping for a good year
/// and a bare string for a failed one. Consumers distinguish by value shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ExtractionOutcome {
    Data(LineItems),
    Error(String),
}

impl ExtractionOutcome {
    pub fn data(&self) -> Option<&LineItems> {
        match self {
            Self::Data(items) => Some(items),
            Self::Error(_) => None,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }
}

/// Extraction result for a single fiscal year.
#[derive(Debug, Clone, PartialEq)]
pub struct Extraction {
    pub year: i32,
    pub outcome: ExtractionOutcome,
}

/// Year-keyed union of successful extractions and per-year error markers.
/// serde_json writes the integer keys as strings ("2020"), matching the
/// on-disk report file.
pub type AggregatedReports = BTreeMap<i32, ExtractionOutcome>;

/// Flattened, numeric, per-year row consumed by the chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialRecord {
    pub year: i32,
    pub product_revenue: f64,
    pub service_revenue: f64,
    pub total_revenue: f64,
    pub net_income: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_serializes_by_shape() {
        let mut items: LineItems = BTreeMap::new();
        items
            .entry("Revenue".to_string())
            .or_default()
            .insert("Total".to_string(), "1000".to_string());

        let data = ExtractionOutcome::Data(items);
        let json = serde_json::to_string(&data).unwrap();
        assert!(json.starts_with('{'), "data must serialize as a mapping");

        let error = ExtractionOutcome::Error("Tabla no encontrada".to_string());
        let json = serde_json::to_string(&error).unwrap();
        assert_eq!(json, "\"Tabla no encontrada\"");
    }

    #[test]
    fn test_outcome_deserializes_by_shape() {
        let parsed: ExtractionOutcome =
            serde_json::from_str("{\"Revenue\": {\"Total\": \"1000\"}}").unwrap();
        assert!(parsed.data().is_some());

        let parsed: ExtractionOutcome = serde_json::from_str("\"Tabla no encontrada\"").unwrap();
        assert!(parsed.is_error());
    }

    #[test]
    fn test_aggregated_reports_use_string_keys_in_json() {
        let mut reports = AggregatedReports::new();
        reports.insert(
            2021,
            ExtractionOutcome::Error("Tabla no encontrada".to_string()),
        );

        let json = serde_json::to_string(&reports).unwrap();
        assert_eq!(json, "{\"2021\":\"Tabla no encontrada\"}");

        let back: AggregatedReports = serde_json::from_str(&json).unwrap();
        assert_eq!(back, reports);
    }
}
