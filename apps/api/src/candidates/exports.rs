use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::candidates::persistence::StoreError;

/// Writes a candidate's text report as `report_<Name>_<sequence>.txt` under `dir`.
///
/// Spaces in the name become underscores; path separators are dropped.
pub fn export_report(
    dir: &Path,
    candidate_name: &str,
    sequence: usize,
    report: &str,
) -> Result<PathBuf, StoreError> {
    fs::create_dir_all(dir).map_err(|source| StoreError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    let path = dir.join(report_file_name(candidate_name, sequence));
    fs::write(&path, report).map_err(|source| StoreError::Io {
        path: path.clone(),
        source,
    })?;

    info!("Report saved to {}", path.display());
    Ok(path)
}

fn report_file_name(candidate_name: &str, sequence: usize) -> String {
    let name: String = candidate_name
        .trim()
        .chars()
        .filter(|c| !matches!(c, '/' | '\\'))
        .map(|c| if c.is_whitespace() { '_' } else { c })
        .collect();
    format!("report_{name}_{sequence}.txt")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_file_name() {
        assert_eq!(report_file_name("John Doe", 1), "report_John_Doe_1.txt");
        assert_eq!(report_file_name("José García", 3), "report_José_García_3.txt");
        assert_eq!(report_file_name("../etc/passwd", 2), "report_..etcpasswd_2.txt");
    }

    #[test]
    fn test_export_writes_report() {
        let dir = tempfile::tempdir().unwrap();
        let reports = dir.path().join("reports");
        let path = export_report(&reports, "Jane Smith", 2, "REPORT BODY").unwrap();
        assert_eq!(path, reports.join("report_Jane_Smith_2.txt"));
        assert_eq!(fs::read_to_string(path).unwrap(), "REPORT BODY");
    }
}
