use crate::schema::{Extraction, ExtractionOutcome, LineItems};
use log::warn;
use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;

/// Heading text that precedes the income-statement table in every filing.
pub const INCOME_STATEMENT_MARKER: &str = "INCOME STATEMENTS";

/// Per-year failure reason recorded when a page carries no such table.
pub const TABLE_NOT_FOUND: &str = "Tabla no encontrada";

const TOTAL_KEY: &str = "Total";

static TABLE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("table").expect("valid table selector"));
static TR_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("tr").expect("valid tr selector"));
static TD_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("td").expect("valid td selector"));

/// How far a row label is indented, derived from the structural cue on the
/// label cell. The filings mark indentation with `indent`-bearing classes
/// (`cell-indent`, `cell-indent-double`); any such cue means the row breaks
/// down the most recent top-level metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndentLevel {
    /// A metric row with its own aggregate value ("Revenue", "Net income").
    TopLevel,
    /// A component row under the current metric ("Product", "Service and other").
    Breakdown,
}

fn indent_level(cell: ElementRef<'_>) -> IndentLevel {
    let indented = cell
        .value()
        .attr("class")
        .map(|classes| classes.split_whitespace().any(|c| c.contains("indent")))
        .unwrap_or(false);

    if indented {
        IndentLevel::Breakdown
    } else {
        IndentLevel::TopLevel
    }
}

fn cell_text(cell: ElementRef<'_>) -> String {
    cell.text().collect::<String>().trim().to_string()
}

/// Finds the first `<table>` that follows the marker text in document order.
///
/// An element only counts as the marker if its own subtree text contains the
/// marker and it does not itself contain a table; otherwise wrappers like
/// `<body>` would match before the heading does.
fn find_table_after_marker<'a>(document: &'a Html, marker: &str) -> Option<ElementRef<'a>> {
    let mut marker_seen = false;

    for node in document.root_element().descendants() {
        let Some(element) = ElementRef::wrap(node) else {
            continue;
        };

        if marker_seen {
            if element.value().name() == "table" {
                return Some(element);
            }
            continue;
        }

        if element.select(&TABLE_SELECTOR).next().is_none()
            && element.text().collect::<String>().contains(marker)
        {
            marker_seen = true;
        }
    }

    None
}

/// Extracts the income-statement table from one filing page.
///
/// Rows are grouped by indentation: a top-level row establishes the current
/// metric and records its value under `"Total"`; an indented row is recorded
/// under the current metric with its own label as sub-key. A top-level row
/// without a value (a heading like `Revenue:`) still establishes the metric
/// so that its breakdown rows attach to it. Rows with an empty label, and
/// indented rows with an empty value, are skipped.
pub fn extract_income_statement(page: &str, year: i32) -> Extraction {
    let document = Html::parse_document(page);

    let Some(table) = find_table_after_marker(&document, INCOME_STATEMENT_MARKER) else {
        return Extraction {
            year,
            outcome: ExtractionOutcome::Error(TABLE_NOT_FOUND.to_string()),
        };
    };

    let mut data = LineItems::new();
    let mut current_metric: Option<String> = None;

    for row in table.select(&TR_SELECTOR) {
        let mut cells = row.select(&TD_SELECTOR);
        let Some(label_cell) = cells.next() else {
            continue;
        };

        let label = cell_text(label_cell);
        if label.is_empty() {
            continue;
        }

        let value = cells.next().map(cell_text).unwrap_or_default();

        match indent_level(label_cell) {
            IndentLevel::TopLevel => {
                if !value.is_empty() {
                    data.entry(label.clone())
                        .or_default()
                        .insert(TOTAL_KEY.to_string(), value);
                }
                current_metric = Some(label);
            }
            IndentLevel::Breakdown => {
                if value.is_empty() {
                    continue;
                }
                match &current_metric {
                    Some(metric) => {
                        data.entry(metric.clone()).or_default().insert(label, value);
                    }
                    None => {
                        warn!("FY{year}: breakdown row '{label}' precedes any metric row, skipped");
                    }
                }
            }
        }
    }

    Extraction {
        year,
        outcome: ExtractionOutcome::Data(data),
    }
}
