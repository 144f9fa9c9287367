//! CSV export of a match report.

use super::merge::MatchReport;
use crate::error::Result;
use once_cell::sync::Lazy;
use regex::Regex;
use std::path::{Path, PathBuf};
use tracing::info;

/// Header row of the exported file.
pub const CSV_HEADER: [&str; 4] = ["Time", "Category", "Set", "Details"];

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid regex"));
static NON_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^A-Za-z0-9_]").expect("valid regex"));

/// Make `s` safe for a filename: whitespace runs become `_`, any other
/// non-word character is dropped.
pub fn sanitize_filename_part(s: &str) -> String {
    let underscored = WHITESPACE.replace_all(s, "_");
    NON_WORD.replace_all(&underscored, "").into_owned()
}

/// `<set>_<team0>_vs_<team1>.csv`, each part sanitized.
pub fn export_filename(set_label: &str, team_names: &[String; 2]) -> String {
    format!(
        "{}_{}_vs_{}.csv",
        sanitize_filename_part(set_label),
        sanitize_filename_part(&team_names[0]),
        sanitize_filename_part(&team_names[1]),
    )
}

impl MatchReport {
    /// Render the report as CSV: a header row, then one row per event.
    /// Rows are separated by `\n` with no newline after the last one.
    pub fn to_csv(&self) -> Result<Vec<u8>> {
        let mut writer = csv::WriterBuilder::new()
            .terminator(csv::Terminator::Any(b'\n'))
            .from_writer(Vec::new());

        writer.write_record(CSV_HEADER)?;
        for row in self.rows() {
            writer.write_record([
                row.time.to_string().as_str(),
                row.category.as_str(),
                row.set.as_str(),
                row.details.as_str(),
            ])?;
        }

        let mut bytes = writer.into_inner()?;
        if bytes.last() == Some(&b'\n') {
            bytes.pop();
        }
        Ok(bytes)
    }

    /// Filename the report should be saved under.
    pub fn filename(&self) -> String {
        export_filename(self.set_label(), self.team_names())
    }

    /// Write the CSV into `dir` under [`filename`](Self::filename).
    pub fn write_to_dir(&self, dir: impl AsRef<Path>) -> Result<PathBuf> {
        let path = dir.as_ref().join(self.filename());
        std::fs::write(&path, self.to_csv()?)?;
        info!(path = %path.display(), rows = self.len(), "match report exported");
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_filename_part() {
        assert_eq!(sanitize_filename_part("Set 1"), "Set_1");
        assert_eq!(sanitize_filename_part("  Final   set! "), "_Final_set_");
        assert_eq!(sanitize_filename_part("Caf\u{e9} Club/B"), "Caf_ClubB");
    }

    #[test]
    fn test_export_filename() {
        let names = ["Team 1".to_string(), "St. Mary's".to_string()];
        assert_eq!(export_filename("Set 1", &names), "Set_1_Team_1_vs_St_Marys.csv");
    }
}
