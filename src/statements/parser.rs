use serde::{Deserialize, Deserializer};
use std::io::Read;

#[derive(Debug, Deserialize)]
pub(crate) struct StatementRow {
    #[serde(rename = "Month", default)]
    pub(crate) month: String,
    #[serde(
        rename = "Total Deposits",
        default,
        deserialize_with = "amount_or_zero"
    )]
    pub(crate) total_deposits: f64,
}

pub(crate) fn parse_rows<R: Read>(reader: R) -> Result<Vec<StatementRow>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut rows = Vec::new();

    for record in csv_reader.deserialize::<StatementRow>() {
        rows.push(record?);
    }

    Ok(rows)
}

/// Blank or non-numeric deposit cells count as zero deposits.
fn amount_or_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .and_then(|value| value.parse::<f64>().ok())
        .unwrap_or(0.0))
}
