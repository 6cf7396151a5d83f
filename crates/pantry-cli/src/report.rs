//! Plain-text missing-information report over a library audit.

use std::fmt::{self, Write as _};

use chrono::{DateTime, TimeZone};
use pantry_core::entities::RecipeAnalysis;
use pantry_core::enums::Severity;
use pantry_core::responses::LibraryAuditSummary;

const RULE_WIDTH: usize = 80;

const fn marker(severity: Severity) -> &'static str {
    match severity {
        Severity::High => "[HIGH]",
        Severity::Medium => "[MED] ",
        Severity::Low => "[LOW] ",
    }
}

/// Render the report with a generation timestamp.
#[must_use]
pub fn render_report<Tz>(summary: &LibraryAuditSummary, generated: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let mut out = String::new();
    // Writing into a String never fails.
    write_report(&mut out, summary, generated)
        .map(|()| out)
        .unwrap_or_default()
}

fn write_report<Tz>(
    out: &mut String,
    summary: &LibraryAuditSummary,
    generated: &DateTime<Tz>,
) -> fmt::Result
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let heavy = "=".repeat(RULE_WIDTH);
    let light = "-".repeat(RULE_WIDTH);

    writeln!(out, "{heavy}\nMISSING INFORMATION REPORT\n{heavy}")?;
    writeln!(out, "\nGenerated: {}", generated.format("%Y-%m-%d %H:%M:%S"))?;
    writeln!(out, "\nTotal Recipes Analyzed: {}", summary.total_recipes)?;
    writeln!(
        out,
        "Average Completeness: {:.1}%",
        summary.average_completeness
    )?;
    writeln!(out, "\nSummary:")?;
    writeln!(out, "  High Priority Issues: {}", summary.high_count)?;
    writeln!(out, "  Medium Priority Issues: {}", summary.medium_count)?;
    writeln!(out, "  Low Priority Issues: {}", summary.low_count)?;
    if !summary.failures.is_empty() {
        writeln!(out, "  Failed Recipes: {}", summary.failures.len())?;
    }
    writeln!(out, "\n{heavy}\n\nDETAILED FINDINGS:")?;

    for analysis in &summary.analyses {
        write_recipe(out, analysis)?;
        writeln!(out, "{light}")?;
    }

    if !summary.failures.is_empty() {
        writeln!(out, "\nFAILED RECIPES:")?;
        for failure in &summary.failures {
            writeln!(out, "\nRecipe: {}", failure.title)?;
            writeln!(out, "File: {}", failure.file_path)?;
            writeln!(out, "  Error: {}", failure.error)?;
            writeln!(out, "{light}")?;
        }
    }
    Ok(())
}

fn write_recipe(out: &mut String, analysis: &RecipeAnalysis) -> fmt::Result {
    writeln!(out, "\nRecipe: {}", analysis.recipe_name)?;
    writeln!(out, "Completeness: {:.1}%", analysis.completeness_score)?;
    writeln!(out, "File: {}", analysis.file_path)?;

    if analysis.issues.is_empty() {
        writeln!(out, "  All required information present")?;
    } else {
        writeln!(out, "\nMissing Information:")?;
        for issue in &analysis.issues {
            writeln!(
                out,
                "  {} {} ({}) - Location: {}",
                marker(issue.severity),
                issue.label,
                issue.section,
                issue.location
            )?;
        }
    }

    if !analysis.warnings.is_empty() {
        writeln!(out, "\nWarnings:")?;
        for warning in &analysis.warnings {
            writeln!(out, "  ! {warning}")?;
        }
    }
    Ok(())
}
