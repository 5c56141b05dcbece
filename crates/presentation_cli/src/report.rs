//! Report rendering
//!
//! Turns a [`HolidayReport`] or a [`YearHolidaySet`] into the text or JSON
//! printed on stdout.

use std::fmt::Write as _;

use application::HolidayReport;
use domain::YearHolidaySet;
use infrastructure::OutputFormat;

/// Notice shown when the text contains no date-shaped tokens
pub const NO_DATES_NOTICE: &str = "No dates found in the document.";

/// Status shown for tokens that are not calendar dates
const NOT_A_DATE: &str = "Not a valid date";

const RULE_WIDTH: usize = 50;

/// Render a holiday check report
pub fn render_report(report: &HolidayReport, format: OutputFormat) -> serde_json::Result<String> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(report),
        OutputFormat::Text => Ok(render_report_text(report)),
    }
}

fn render_report_text(report: &HolidayReport) -> String {
    if !report.has_dates() {
        return format!("{NO_DATES_NOTICE}\n");
    }

    let mut out = String::new();
    out.push_str("=== HOLIDAY CHECK RESULTS ===\n\n");
    let _ = writeln!(out, "Dates found: {}", report.total_dates());
    let _ = writeln!(out, "Dates that are holidays: {}\n", report.holiday_count());

    if report.holiday_count() > 0 {
        out.push_str("HOLIDAYS FOUND:\n");
        let _ = writeln!(out, "{}", "-".repeat(RULE_WIDTH));
        for holiday in report.holidays() {
            let _ = writeln!(out, "Date: {} → {}", holiday.raw, holiday.name);
        }
    }

    let _ = writeln!(out, "\n{}", "=".repeat(RULE_WIDTH));
    out.push_str("\nAll dates found:\n");
    for entry in report.entries() {
        match &entry.status {
            Some(status) => {
                let _ = writeln!(out, "- {}: {status}", entry.raw);
            },
            None => {
                let _ = writeln!(out, "- {}: {NOT_A_DATE}", entry.raw);
            },
        }
    }

    out
}

/// Lookup failures as warning lines, one per failure
pub fn render_lookup_warnings(report: &HolidayReport) -> Vec<String> {
    report
        .lookup_errors()
        .iter()
        .map(|failure| {
            format!(
                "⚠️  Holiday lookup failed for {}: {}",
                failure.date, failure.message
            )
        })
        .collect()
}

/// Render one year's holidays
pub fn render_holiday_set(set: &YearHolidaySet, format: OutputFormat) -> serde_json::Result<String> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(set),
        OutputFormat::Text => {
            let mut out = String::new();
            if set.is_empty() {
                let _ = writeln!(
                    out,
                    "No public holidays listed for {} in {}.",
                    set.country(),
                    set.year()
                );
                return Ok(out);
            }
            let _ = writeln!(
                out,
                "📅 Public holidays in {} for {} ({}):",
                set.country(),
                set.year(),
                set.len()
            );
            for record in set.records() {
                match record.local_name.as_deref() {
                    Some(local) if local != record.name => {
                        let _ = writeln!(out, "- {}  {} ({local})", record.date, record.name);
                    },
                    _ => {
                        let _ = writeln!(out, "- {}  {}", record.date, record.name);
                    },
                }
            }
            Ok(out)
        },
    }
}
