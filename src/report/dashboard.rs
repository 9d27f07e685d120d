//! Dashboard rendering for verdict reports
//!
//! Terminal-friendly ASCII rendering of a report snapshot, used as the
//! default `report` output.

use super::{format_recorded, LedgerReport, LedgerSummary};

/// Characters between the frame borders
const INNER_WIDTH: usize = 73;

/// Render a report as an ASCII dashboard
pub fn render_dashboard(report: &LedgerReport) -> String {
    let mut output = String::new();
    let summary = &report.summary;

    // Header
    output.push_str(&format!("┌{}┐\n", "─".repeat(INNER_WIDTH)));
    push_line(&mut output, "  RIG DIAGNOSTICS REPORT");
    push_line(
        &mut output,
        &format!(
            "  Generated: {}",
            report.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
        ),
    );
    output.push_str(&format!("├{}┤\n", "─".repeat(INNER_WIDTH)));

    // Verdict banner
    push_line(&mut output, "");
    push_line(&mut output, &format!("  {}", headline(summary)));
    push_line(&mut output, &format!("  SCORE: {}/100", summary.score));
    push_line(&mut output, "");

    // Summary
    push_rule(&mut output);
    push_line(&mut output, "  SUMMARY");
    push_rule(&mut output);
    push_line(&mut output, "");
    push_line(
        &mut output,
        &format!("  Recorded verdicts:   {:3}", summary.total),
    );
    push_line(
        &mut output,
        &format!(
            "  Passed:              {:3} ({:.0}%)",
            summary.passed,
            summary.pass_percentage()
        ),
    );
    push_line(
        &mut output,
        &format!(
            "  Failed:              {:3} ({:.0}%)",
            summary.failed,
            summary.fail_percentage()
        ),
    );
    push_line(
        &mut output,
        &format!(
            "  Skipped:             {:3} ({:.0}%)",
            summary.skipped,
            summary.skip_percentage()
        ),
    );
    push_line(
        &mut output,
        &format!(
            "  Catalog coverage:    {}/{} tests",
            summary.catalog_graded, summary.catalog_total
        ),
    );
    push_line(&mut output, "");

    // Verdicts
    push_rule(&mut output);
    push_line(&mut output, "  VERDICTS");
    push_rule(&mut output);
    push_line(&mut output, "");

    if report.results.is_empty() {
        push_line(&mut output, "  No verdicts recorded yet.");
    } else {
        for result in &report.results {
            push_line(
                &mut output,
                &format!(
                    "  {} {:<26} {:<8} {}",
                    result.status.symbol(),
                    result.test_name,
                    result.status.label(),
                    format_recorded(result.timestamp)
                ),
            );
            if let Some(notes) = &result.notes {
                push_line(&mut output, &format!("      note: {}", notes));
            }
        }
    }
    push_line(&mut output, "");

    output.push_str(&format!("└{}┘\n", "─".repeat(INNER_WIDTH)));

    output
}

/// One-line verdict banner for the top of the dashboard
fn headline(summary: &LedgerSummary) -> String {
    if summary.total == 0 {
        "○ NOTHING GRADED YET".to_string()
    } else if summary.failed > 0 {
        format!("✗ ISSUES DETECTED ({} failing)", summary.failed)
    } else if summary.passed == summary.total {
        "✓ ALL GRADED TESTS PASSING".to_string()
    } else {
        "✓ NO FAILURES IN GRADED TESTS".to_string()
    }
}

/// Push one framed body line, padded or truncated to the frame width
fn push_line(output: &mut String, content: &str) {
    let count = content.chars().count();
    let text = if count > INNER_WIDTH {
        let truncated: String = content.chars().take(INNER_WIDTH - 1).collect();
        format!("{}…", truncated)
    } else {
        format!("{}{}", content, " ".repeat(INNER_WIDTH - count))
    };
    output.push_str(&format!("│{}│\n", text));
}

/// Push a section separator line
fn push_rule(output: &mut String) {
    push_line(output, &format!("  {}", "═".repeat(INNER_WIDTH - 6)));
}
