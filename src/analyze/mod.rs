//! SEO rule engine: `SignalRecord` -> ordered findings + summary score.
//!
//! The engine is pure, deterministic, and total: every record produces
//! exactly one finding per signal, in a fixed evaluation order, and the same
//! record always yields the same findings and score. A missing signal is an
//! analyzable condition, not an error.

mod rules;

use crate::config::{CRITICAL_PENALTY, SCORE_BASELINE, WARNING_PENALTY};
use crate::models::{Analysis, Finding, Severity, SignalRecord};

/// Evaluates every SEO rule against the extracted signals.
///
/// Rule order is fixed and drives output order: title, description, keywords,
/// canonical, robots, viewport, Open Graph, Twitter Card, favicon.
pub fn analyze(signals: &SignalRecord) -> Analysis {
    let findings = vec![
        rules::check_title(&signals.title),
        rules::check_description(&signals.description),
        rules::check_keywords(&signals.keywords),
        rules::check_canonical(&signals.canonical),
        rules::check_robots(&signals.robots),
        rules::check_viewport(&signals.viewport),
        rules::check_open_graph(&signals.og),
        rules::check_twitter(&signals.twitter),
        rules::check_favicon(&signals.favicon),
    ];

    let score = compute_score(&findings);
    log::debug!("Analysis produced {} findings, score {}", findings.len(), score);

    Analysis { findings, score }
}

/// Computes the summary score from findings.
///
/// Weighted penalties are subtracted from a perfect baseline and the result
/// is clipped to `[0, SCORE_BASELINE]`: critical costs `CRITICAL_PENALTY`
/// points, warning costs `WARNING_PENALTY`, good costs nothing.
fn compute_score(findings: &[Finding]) -> u32 {
    let penalty: u32 = findings
        .iter()
        .map(|finding| match finding.severity {
            Severity::Critical => CRITICAL_PENALTY,
            Severity::Warning => WARNING_PENALTY,
            Severity::Good => 0,
        })
        .sum();
    SCORE_BASELINE.saturating_sub(penalty)
}
