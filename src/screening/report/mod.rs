mod views;

pub use views::{month_labels, ApprovalOutlook, AssessmentView, ScoreComponentView};

/// Format whole dollars with thousands separators, e.g. `$1,234,567`.
pub fn format_currency(amount: f64) -> String {
    let rounded = amount.round();
    let negative = rounded < 0.0;
    let mut value = rounded.abs() as u64;

    let mut groups = Vec::new();
    loop {
        let group = value % 1000;
        value /= 1000;
        if value == 0 {
            groups.push(group.to_string());
            break;
        }
        groups.push(format!("{group:03}"));
    }
    groups.reverse();

    let joined = groups.join(",");
    if negative {
        format!("-${joined}")
    } else {
        format!("${joined}")
    }
}

/// Format a 0..1 share as a whole percentage, e.g. `28%`.
pub fn format_percent(share: f64) -> String {
    format!("{:.0}%", share * 100.0)
}
