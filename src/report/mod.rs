//! Line-oriented rendering of evaluation results
//!
//! CDD Principle: Anti-Corruption Layer - Rendering translates domain objects to display text
//! - EvaluationResult (domain) is converted to a plain, line-oriented report
//! - Callers such as build-tool integrations do any further presentation themselves
//! - The core never prints; it only produces strings

use crate::domain::violations::EvaluationResult;

/// Render the violations of a result, one line per violation.
///
/// Returns an empty string for a satisfied result.
pub fn render_violations(result: &EvaluationResult) -> String {
    result
        .violations
        .iter()
        .map(|violation| format!(" - {violation}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render the full failure report for an unsatisfied rule: the rule description,
/// the violation count, and one line per violation.
pub fn render_failure_report(description: &str, result: &EvaluationResult) -> String {
    let count = result.violations.len();
    let times = if count == 1 { "time" } else { "times" };

    format!(
        "Rule '{description}' was violated ({count} {times}):\n{}",
        render_violations(result)
    )
}
