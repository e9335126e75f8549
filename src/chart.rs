use crate::schema::FinancialRecord;
use serde::{Deserialize, Serialize};

/// Column-oriented series behind the two-panel performance chart: a stacked
/// bar panel of Product vs Service revenue, and a dual line panel of Total
/// Revenue vs Net Income. Rendering is left to the charting front end; this
/// is the data contract it consumes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartDataset {
    pub years: Vec<i32>,
    pub product_revenue: Vec<f64>,
    pub service_revenue: Vec<f64>,
    pub total_revenue: Vec<f64>,
    pub net_income: Vec<f64>,
}

impl ChartDataset {
    /// Builds the dataset from record rows, keeping their order (the record
    /// builder already sorts ascending by year).
    pub fn from_records(records: &[FinancialRecord]) -> Self {
        let mut dataset = Self::default();
        for record in records {
            dataset.years.push(record.year);
            dataset.product_revenue.push(record.product_revenue);
            dataset.service_revenue.push(record.service_revenue);
            dataset.total_revenue.push(record.total_revenue);
            dataset.net_income.push(record.net_income);
        }
        dataset
    }

    pub fn len(&self) -> usize {
        self.years.len()
    }

    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
    }

    /// CSV rendering of the record table, one row per year.
    pub fn to_csv(&self) -> String {
        let mut out =
            String::from("Year,Product Revenue,Service Revenue,Total Revenue,Net Income\n");
        for i in 0..self.len() {
            out.push_str(&format!(
                "{},{:.2},{:.2},{:.2},{:.2}\n",
                self.years[i],
                self.product_revenue[i],
                self.service_revenue[i],
                self.total_revenue[i],
                self.net_income[i],
            ));
        }
        out
    }
}
