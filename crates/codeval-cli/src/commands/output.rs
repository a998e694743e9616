//! Run summary formatting.

use anyhow::Result;
use codeval_core::RunSummary;
use std::path::Path;

use crate::OutputFormat;

/// Print the run summary in the specified format.
pub fn print(summary: &RunSummary, output_dir: &Path, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => print_text(summary, output_dir),
        OutputFormat::Json => return print_json(summary),
    }
    Ok(())
}

fn print_text(summary: &RunSummary, output_dir: &Path) {
    for report in &summary.reports {
        let count = report.violations.violation_count();
        let indicator = if !report.parsed {
            "\x1b[33mparse error\x1b[0m".to_string()
        } else if count > 0 {
            format!("\x1b[33m{count} violation(s)\x1b[0m")
        } else {
            "\x1b[32mok\x1b[0m".to_string()
        };
        println!("{}: {}", report.source.display(), indicator);
    }

    for path in &summary.skipped {
        println!("{}: skipped (empty)", path.display());
    }

    for failure in &summary.failures {
        println!(
            "{}: \x1b[31mfailed\x1b[0m\n  {}",
            failure.path.display(),
            failure.message
        );
    }

    let summary_color = if summary.has_failures() {
        "\x1b[31m"
    } else if summary.total_violations() > 0 {
        "\x1b[33m"
    } else {
        "\x1b[32m"
    };

    println!();
    println!(
        "{}Found {} violation(s) in {} of {} file(s); {} report(s) written to {}\x1b[0m",
        summary_color,
        summary.total_violations(),
        summary.files_with_violations(),
        summary.files_seen(),
        summary.reports.len(),
        output_dir.display()
    );
}

fn print_json(summary: &RunSummary) -> Result<()> {
    let json = serde_json::to_string_pretty(summary)?;
    println!("{json}");
    Ok(())
}
