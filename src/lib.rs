//! # Financial Report Scraper
//!
//! A library for scraping Microsoft investor-relations filings into structured
//! yearly financial data, with chart-ready records and an AI-generated
//! investment thesis on top.
//!
//! ## Core Concepts
//!
//! - **Report**: a known filing location for one fiscal year
//! - **Extraction**: what one page yielded — income-statement line items, or a
//!   failure reason ("Tabla no encontrada") kept as data instead of an error
//! - **AggregatedReports**: the year-keyed union of all extractions, persisted
//!   as JSON for later reuse
//! - **FinancialRecord / ChartDataset**: the flattened numeric rows behind the
//!   two-panel performance chart
//!
//! Extraction failures never abort other years; transport failures (HTTP
//! status errors) and Gemini upstream failures do abort the current operation.
//!
//! ## Example
//!
//! ```rust,ignore
//! use financial_report_scraper::*;
//!
//! let client = IrClient::new();
//! let aggregated = build_aggregated_reports(&client, &known_filings()).await?;
//!
//! save_reports(&resolve_download_path("reports.json")?, &aggregated)?;
//!
//! let records = build_records(&aggregated);
//! let dataset = ChartDataset::from_records(&records);
//!
//! let analyst = EquityAnalyst::new(GeminiClient::new(api_key));
//! let thesis = analyst.generate_thesis(&aggregated).await?;
//! ```

pub mod chart;
pub mod client;
pub mod collector;
pub mod error;
pub mod extractor;
pub mod llm;
pub mod records;
pub mod schema;
pub mod storage;

pub use chart::ChartDataset;
pub use client::{known_filings, IrClient};
pub use collector::{aggregate_extractions, build_aggregated_reports, collect_reports};
pub use error::{ReportError, Result};
pub use extractor::{extract_income_statement, IndentLevel, INCOME_STATEMENT_MARKER, TABLE_NOT_FOUND};
pub use llm::{EquityAnalyst, GeminiClient, DEFAULT_GEMINI_MODEL};
pub use records::{build_records, parse_financial_value};
pub use schema::*;
pub use storage::{downloads_dir, load_reports, resolve_download_path, save_reports};
