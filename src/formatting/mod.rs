//! Human-oriented text rendering of validation results.
//!
//! Useful for logs and debug output; not a wire format and no byte-exact
//! compatibility is promised.

use crate::catalog::Factor;
use crate::integration::ScoreValidationResult;

const RULE: &str = "═══════════════════════════════════════════════════════════════";

/// Render a flattened validation result as a labeled multi-line block.
pub fn render_report(result: &ScoreValidationResult) -> String {
    let mut output = String::new();

    output.push_str(RULE);
    output.push('\n');
    output.push_str("SSB SCORE VALIDATION REPORT\n");
    output.push_str(RULE);
    output.push('\n');
    output.push('\n');
    output.push_str(&format!("RECOMMENDATION: {:?}\n", result.recommendation));
    output.push('\n');
    output.push_str(&format!("SUMMARY: {}\n", result.summary));
    output.push('\n');
    output.push_str("DETAILS:\n");
    output.push_str(&format!("  • Limitations: {}\n", result.limitation_count));
    if !result.limitations.is_empty() {
        let names: Vec<&str> = result
            .limitations
            .iter()
            .map(|olq| olq.display_name())
            .collect();
        output.push_str(&format!("    - {}\n", names.join(", ")));
    }
    output.push_str(&format!(
        "  • Exceeds Max Limitations: {}\n",
        result.exceeds_max_limitations
    ));
    output.push_str(&format!(
        "  • Critical Weakness: {}\n",
        result.has_critical_weakness
    ));
    if !result.critical_weaknesses.is_empty() {
        let names: Vec<&str> = result
            .critical_weaknesses
            .iter()
            .map(|olq| olq.display_name())
            .collect();
        output.push_str(&format!("    - {}\n", names.join(", ")));
    }
    output.push_str(&format!(
        "  • Factor II Auto-Reject: {}\n",
        result.factor_ii_auto_reject
    ));
    output.push_str(&format!(
        "  • Factor Inconsistency: {}\n",
        result.has_factor_inconsistency
    ));
    output.push('\n');
    output.push_str("FACTOR AVERAGES:\n");
    for (&number, &average) in &result.factor_averages {
        output.push_str(&format!("  • {}: {:.2}\n", factor_label(number), average));
    }
    output.push_str(RULE);
    output.push('\n');

    output
}

/// Resolve a factor number to its display label through the catalog.
fn factor_label(number: u8) -> String {
    match Factor::from_number(number) {
        Some(factor) => format!("Factor {} ({})", factor.numeral(), factor.name()),
        None => format!("Factor {number}"),
    }
}
