//! Risk pattern assessment over whole documents.
//!
//! A fixed ordered rule table drives detection: a rule fires when its pattern
//! matches anywhere in the text, and the finding carries the total number of
//! matches. Aggregation and cross-document change labels work on severity
//! ordinals, with absence counted as zero.

use lazy_static::lazy_static;
use regex::Regex;
use shared_types::{RiskChange, RiskChangeEntry, RiskComparison, RiskFinding, Severity};

/// (pattern, severity, finding label), in evaluation and reporting order.
const RISK_TABLE: &[(&str, Severity, &str)] = &[
    (
        r"(?i)\bwaiv\w*\b[^.!?]*\b(rights?|claims?)\b",
        Severity::High,
        "Waiver of rights",
    ),
    (
        r"(?i)\bclass\s+action\s+waiver\b|\bwaive\b[^.!?]*\bclass\s+action\b",
        Severity::High,
        "Class action waiver",
    ),
    (
        r"(?i)\b(binding|mandatory)\s+arbitration\b",
        Severity::High,
        "Mandatory arbitration",
    ),
    (
        r"(?i)\bsell\b[^.!?]*\bpersonal\s+(data|information)\b|\bshare\b[^.!?]*\bthird\s+part(y|ies)\b",
        Severity::High,
        "Data sharing with third parties",
    ),
    (
        r"(?i)\bterminat\w*\b[^.!?]*\bwithout\s+(notice|cause)\b",
        Severity::High,
        "Termination without notice",
    ),
    (
        r"(?i)\bunilateral\w*\b[^.!?]*\b(change|modify|amend)\b|\bsole\s+discretion\b",
        Severity::Medium,
        "Unilateral changes",
    ),
    (
        r"(?i)\bno\s+refunds?\b|\bnon-?refundable\b",
        Severity::Medium,
        "No refund policy",
    ),
    (
        r"(?i)\bauto(matic(ally)?)?[-\s]?renew\w*\b",
        Severity::Medium,
        "Automatic renewal",
    ),
    (
        r"(?i)\b(perpetual|irrevocable)\b[^.!?]*\blicen[sc]e\b",
        Severity::Medium,
        "Perpetual content license",
    ),
    (
        r"(?i)\bas\s+is\b|\bwithout\s+warrant(y|ies)\b",
        Severity::Medium,
        "Warranty disclaimer",
    ),
    (
        r"(?i)\blimit(ation)?s?\s+(of|on)\s+liability\b|\bnot\s+(be\s+)?liable\b",
        Severity::Medium,
        "Limitation of liability",
    ),
    (
        r"(?i)\bindemnif\w+\b",
        Severity::Medium,
        "Indemnification obligation",
    ),
    (
        r"(?i)\bgoverning\s+law\b|\bexclusive\s+jurisdiction\b",
        Severity::Low,
        "Choice of law",
    ),
    (
        r"(?i)\bcookies?\b|\btracking\s+technolog\w+\b",
        Severity::Low,
        "Tracking technologies",
    ),
    (
        r"(?i)\bthird[-\s]party\s+(links?|services?|websites?)\b",
        Severity::Low,
        "Third-party services",
    ),
];

lazy_static! {
    /// Rule table with patterns compiled once at startup.
    static ref RISK_RULES: Vec<(Regex, Severity, &'static str)> = RISK_TABLE
        .iter()
        .map(|(pattern, severity, label)| (Regex::new(pattern).unwrap(), *severity, *label))
        .collect();
}

/// Scan a whole document against the rule table.
pub fn assess(text: &str) -> Vec<RiskFinding> {
    RISK_RULES
        .iter()
        .filter_map(|(pattern, severity, label)| {
            let occurrences = pattern.find_iter(text).count();
            (occurrences > 0).then(|| RiskFinding {
                label: (*label).to_string(),
                severity: *severity,
                occurrences,
            })
        })
        .collect()
}

/// Collapse a document's findings to one severity:
/// high when more than two high findings, medium when at least one high or
/// more than three medium, low otherwise.
pub fn aggregate_severity(findings: &[RiskFinding]) -> Severity {
    let high = findings
        .iter()
        .filter(|f| f.severity == Severity::High)
        .count();
    let medium = findings
        .iter()
        .filter(|f| f.severity == Severity::Medium)
        .count();

    if high > 2 {
        Severity::High
    } else if high >= 1 || medium > 3 {
        Severity::Medium
    } else {
        Severity::Low
    }
}

fn recommendation(aggregate: Severity) -> String {
    match aggregate {
        Severity::High => {
            "Multiple high-severity clauses detected; legal review is strongly advised before accepting."
        }
        Severity::Medium => {
            "Some clauses warrant a closer look; review the flagged findings before accepting."
        }
        Severity::Low => "No high-severity clauses detected.",
    }
    .to_string()
}

/// Assess both documents and derive per-label change entries.
pub fn compare_risk(text_a: &str, text_b: &str) -> RiskComparison {
    let findings_a = assess(text_a);
    let findings_b = assess(text_b);
    let aggregate_a = aggregate_severity(&findings_a);
    let aggregate_b = aggregate_severity(&findings_b);

    let severity_of = |findings: &[RiskFinding], label: &str| {
        findings
            .iter()
            .find(|f| f.label == label)
            .map(|f| f.severity)
    };

    let changes = RISK_RULES
        .iter()
        .filter_map(|(_, _, label)| {
            let severity_a = severity_of(&findings_a, label);
            let severity_b = severity_of(&findings_b, label);
            if severity_a.is_none() && severity_b.is_none() {
                return None;
            }
            let ordinal_a = severity_a.map_or(0, Severity::ordinal);
            let ordinal_b = severity_b.map_or(0, Severity::ordinal);
            let change = match ordinal_b.cmp(&ordinal_a) {
                std::cmp::Ordering::Greater => RiskChange::Increased,
                std::cmp::Ordering::Less => RiskChange::Decreased,
                std::cmp::Ordering::Equal => RiskChange::Unchanged,
            };
            Some(RiskChangeEntry {
                label: (*label).to_string(),
                severity_a,
                severity_b,
                change,
            })
        })
        .collect();

    RiskComparison {
        recommendation_a: recommendation(aggregate_a),
        recommendation_b: recommendation(aggregate_b),
        findings_a,
        findings_b,
        aggregate_a,
        aggregate_b,
        changes,
    }
}
