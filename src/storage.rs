use crate::error::{ReportError, Result};
use crate::schema::AggregatedReports;
use log::info;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, ErrorKind};
use std::path::{Path, PathBuf};

/// Directory under the working directory where scraped reports land.
const DOWNLOADS_DIR: &str = "downloads";

/// Resolves (and creates if needed) the downloads directory.
pub fn downloads_dir() -> Result<PathBuf> {
    let dir = std::env::current_dir()?.join(DOWNLOADS_DIR);
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Resolves a file name to its place in the downloads directory.
pub fn resolve_download_path(file_name: &str) -> Result<PathBuf> {
    Ok(downloads_dir()?.join(file_name))
}

/// Writes the aggregated reports as pretty JSON.
///
/// A permission failure is not an error here: the user gets a message and the
/// save is skipped. Everything else propagates.
pub fn save_reports(path: &Path, reports: &AggregatedReports) -> Result<()> {
    match write_json(path, reports) {
        Err(err) if is_permission_denied(&err) => {
            println!("{}", permission_message(path));
            Ok(())
        }
        other => other,
    }
}

/// Reads a previously saved report file.
pub fn load_reports(path: &Path) -> Result<AggregatedReports> {
    let file = File::open(path)?;
    Ok(serde_json::from_reader(BufReader::new(file))?)
}

fn write_json(path: &Path, reports: &AggregatedReports) -> Result<()> {
    let file = File::create(path)?;
    serde_json::to_writer_pretty(BufWriter::new(file), reports)?;
    info!("Saved aggregated reports to {}", path.display());
    Ok(())
}

fn is_permission_denied(err: &ReportError) -> bool {
    match err {
        ReportError::IoError(io_err) => io_err.kind() == ErrorKind::PermissionDenied,
        ReportError::SerializationError(json_err) => {
            json_err.io_error_kind() == Some(ErrorKind::PermissionDenied)
        }
        _ => false,
    }
}

fn permission_message(path: &Path) -> String {
    format!(
        "Permiso denegado: no se pudo escribir el archivo {}.",
        path.display()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::ExtractionOutcome;
    use std::collections::BTreeMap;

    fn sample_reports() -> AggregatedReports {
        let mut items: BTreeMap<String, BTreeMap<String, String>> = BTreeMap::new();
        items.entry("Revenue".to_string()).or_default().extend([
            ("Total".to_string(), "1000".to_string()),
            ("Product".to_string(), "800".to_string()),
        ]);

        let mut reports = AggregatedReports::new();
        reports.insert(2020, ExtractionOutcome::Data(items));
        reports.insert(
            2021,
            ExtractionOutcome::Error("Tabla no encontrada".to_string()),
        );
        reports
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("reports.json");
        let reports = sample_reports();

        save_reports(&path, &reports).unwrap();
        let loaded = load_reports(&path).unwrap();

        assert_eq!(loaded, reports);
    }

    #[test]
    fn test_saved_file_keys_are_year_strings() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("reports.json");

        save_reports(&path, &sample_reports()).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert!(text.contains("\"2020\""));
        assert!(text.contains("\"2021\": \"Tabla no encontrada\""));
    }

    #[test]
    fn test_non_permission_errors_propagate() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no-such-dir").join("reports.json");

        let result = save_reports(&path, &sample_reports());

        assert!(matches!(result, Err(ReportError::IoError(_))));
    }

    #[test]
    fn test_permission_denied_is_absorbed_with_message() {
        let err = ReportError::IoError(std::io::Error::new(
            ErrorKind::PermissionDenied,
            "denied",
        ));
        assert!(is_permission_denied(&err));

        let other = ReportError::IoError(std::io::Error::new(ErrorKind::NotFound, "missing"));
        assert!(!is_permission_denied(&other));

        let message = permission_message(Path::new("reports.json"));
        assert!(message.contains("Permiso"));
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_reports(&dir.path().join("absent.json"));

        assert!(matches!(result, Err(ReportError::IoError(_))));
    }
}
