//! CLI output formatting.
//!
//! Output is information-first: the primary line for every page is its
//! resolved title and positional index, with the filename as context. Each
//! formatter is a pure `format_*` function returning `Vec<String>` so tests
//! can assert on lines without capturing stdout; `print_*` wrappers do the
//! actual printing.
//!
//! ```text
//! 001 Widget
//!     Source: tool.html
//!     Description: does things
//! 002 Json Formatter
//!     Source: json-formatter.html
//!
//! Warning: broken.html: malformed descriptor block: ...
//!
//! Wrote 3 files
//! ```

use crate::assemble::Report;

fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

fn format_entries(report: &Report) -> Vec<String> {
    let mut lines = Vec::new();
    for (i, entry) in report.entries.iter().enumerate() {
        lines.push(format!("{} {}", format_index(i + 1), entry.title));
        lines.push(format!("    Source: {}", entry.filename));
        if entry.has_descriptor {
            lines.push(format!("    Description: {}", entry.description));
        }
    }
    for warning in &report.warnings {
        lines.push(String::new());
        lines.push(format!("Warning: {warning}"));
    }
    lines
}

/// Lines for a `build` run: page inventory, warnings, file count.
pub fn format_build_report(report: &Report) -> Vec<String> {
    let mut lines = format_entries(report);
    lines.push(String::new());
    lines.push(format!("Wrote {} files", report.files_written));
    lines
}

/// Lines for a `check` run: inventory and warnings only, nothing written.
pub fn format_check_report(report: &Report) -> Vec<String> {
    let mut lines = format_entries(report);
    lines.push(String::new());
    lines.push(format!(
        "{} pages, {} with descriptors",
        report.entries.len(),
        report.entries.iter().filter(|e| e.has_descriptor).count()
    ));
    lines
}

pub fn print_build_report(report: &Report) {
    for line in format_build_report(report) {
        println!("{line}");
    }
}

pub fn print_check_report(report: &Report) {
    for line in format_check_report(report) {
        println!("{line}");
    }
}
