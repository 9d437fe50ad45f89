//! Report formatting and printing utilities.
//!
//! Separate from core logic to allow catgen to be used as a library.

use std::{
    collections::BTreeMap,
    io::{self, Write},
};

use colored::Colorize;

use crate::core::{GenerateSummary, MissingTranslation};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print the outcome of a generation run to stdout.
pub fn print_summary(summary: &GenerateSummary, verbose: bool) {
    print_summary_to(summary, verbose, &mut io::stdout().lock());
}

/// Print the outcome of a generation run to a custom writer.
///
/// Missing translations are grouped per locale; verbose mode also lists
/// every missing identifier with its bundle.
pub fn print_summary_to<W: Write>(summary: &GenerateSummary, verbose: bool, writer: &mut W) {
    let written = summary.catalogs_written.len();
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Generated {} {} for {} {} in {} {}",
            written,
            plural(written, "catalog", "catalogs"),
            summary.bundle_count,
            plural(summary.bundle_count, "bundle", "bundles"),
            summary.locale_count,
            plural(summary.locale_count, "locale", "locales"),
        )
        .green()
    );

    let removed = summary.catalogs_removed.len();
    if removed > 0 {
        let _ = writeln!(
            writer,
            "  Removed {} stale {}",
            removed,
            plural(removed, "catalog", "catalogs")
        );
        if verbose {
            for path in &summary.catalogs_removed {
                let _ = writeln!(writer, "    {}", path.display().to_string().dimmed());
            }
        }
    }

    if summary.missing.is_empty() {
        return;
    }

    let by_locale = group_by_locale(&summary.missing);
    let total = summary.missing.len();
    let _ = writeln!(
        writer,
        "{} {}",
        FAILURE_MARK.yellow(),
        format!(
            "{} missing {} in {} {}",
            total,
            plural(total, "translation", "translations"),
            by_locale.len(),
            plural(by_locale.len(), "locale", "locales"),
        )
        .yellow()
    );

    for (locale, missing) in &by_locale {
        let _ = writeln!(writer, "  {}: {}", locale.bold(), missing.len());
        if verbose {
            for m in missing {
                let _ = writeln!(
                    writer,
                    "    {} {}",
                    m.identifier,
                    format!("({})", m.bundle).dimmed()
                );
            }
        }
    }
}

fn group_by_locale(missing: &[MissingTranslation]) -> BTreeMap<&str, Vec<&MissingTranslation>> {
    let mut grouped: BTreeMap<&str, Vec<&MissingTranslation>> = BTreeMap::new();
    for m in missing {
        grouped.entry(m.locale.as_str()).or_default().push(m);
    }
    grouped
}

fn plural<'a>(count: usize, one: &'a str, many: &'a str) -> &'a str {
    if count == 1 { one } else { many }
}
