//! Bank-statement CSV import for monthly deposit histories.
//!
//! Exports are `Month,Total Deposits` rows, oldest month first, matching the
//! template produced by [`template_csv`]. Parsing is permissive the same way
//! the intake form is: a blank or unreadable deposit cell counts as zero.

mod parser;

use crate::screening::domain::{RevenueHistory, StatementPeriod, MAX_STATEMENT_MONTHS};
use crate::screening::report::month_labels;
use std::io::Read;
use std::path::Path;

#[derive(Debug)]
pub enum StatementImportError {
    Io(std::io::Error),
    Csv(csv::Error),
}

impl std::fmt::Display for StatementImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StatementImportError::Io(err) => {
                write!(f, "failed to read statement export: {}", err)
            }
            StatementImportError::Csv(err) => write!(f, "invalid statement CSV data: {}", err),
        }
    }
}

impl std::error::Error for StatementImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StatementImportError::Io(err) => Some(err),
            StatementImportError::Csv(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for StatementImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for StatementImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

pub struct StatementImporter;

impl StatementImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<RevenueHistory, StatementImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    /// Read a deposit history from a CSV export. Unlabeled all-zero rows are
    /// treated as trailing padding; anything past the 24-month cap is
    /// ignored.
    pub fn from_reader<R: Read>(reader: R) -> Result<RevenueHistory, StatementImportError> {
        let deposits = parser::parse_rows(reader)?
            .into_iter()
            .filter(|row| !(row.month.is_empty() && row.total_deposits == 0.0))
            .take(MAX_STATEMENT_MONTHS)
            .map(|row| row.total_deposits);

        Ok(RevenueHistory::from_entries(deposits))
    }
}

/// Blank CSV template covering one statement period.
pub fn template_csv(period: StatementPeriod) -> String {
    let mut out = String::from("Month,Total Deposits\n");
    for label in month_labels(period) {
        out.push_str(&label);
        out.push_str(",\n");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn import_coerces_blank_and_unreadable_cells_to_zero() {
        let export = "Month,Total Deposits\nJan Y1,8200.50\nFeb Y1,\nMar Y1,n/a\n";

        let history =
            StatementImporter::from_reader(Cursor::new(export)).expect("export parses");

        assert_eq!(history.entries(), &[8200.50, 0.0, 0.0]);
    }

    #[test]
    fn import_skips_trailing_padding_and_caps_at_24_rows() {
        let mut export = String::from("Month,Total Deposits\n");
        for index in 0..30 {
            export.push_str(&format!("M{index},1000\n"));
        }
        export.push_str(",\n");

        let history =
            StatementImporter::from_reader(Cursor::new(export)).expect("export parses");

        assert_eq!(history.entries().len(), MAX_STATEMENT_MONTHS);
    }

    #[test]
    fn template_round_trips_through_the_importer() {
        let template = template_csv(StatementPeriod::TwelveMonths);

        assert!(template.starts_with("Month,Total Deposits\n"));
        assert!(template.contains("Jan Y1,"));
        assert!(template.contains("Dec Y1,"));

        let history =
            StatementImporter::from_reader(Cursor::new(template)).expect("template parses");
        assert_eq!(history.entries(), &[0.0; 12]);
    }

    #[test]
    fn template_covers_two_label_years_for_24_months() {
        let template = template_csv(StatementPeriod::TwentyFourMonths);

        assert!(template.contains("Jan Y2,"));
        assert!(template.contains("Dec Y2,"));
        assert_eq!(template.lines().count(), 25);
    }
}
