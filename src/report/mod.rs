// SPDX-License-Identifier: PMPL-1.0-or-later
//! Report generation for analysis runs.
//!
//! Supports multiple output formats:
//! - Text: issues grouped by severity with the overall rating
//! - JSON: the report records as-is for programmatic consumption
//! - SARIF: Static Analysis Results Interchange Format for CI integration

use crate::issue::{Issue, Severity};
use crate::scanner::AnalysisReport;
use serde::Serialize;

/// Output format for reports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text
    Text,
    /// Structured JSON
    Json,
    /// SARIF for CI integration
    Sarif,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Sarif => write!(f, "sarif"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "sarif" => Ok(OutputFormat::Sarif),
            other => Err(format!("Unknown output format: {}", other)),
        }
    }
}

/// Render one report
pub fn generate_report(report: &AnalysisReport, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => generate_text_report(report),
        OutputFormat::Json => to_json(report),
        OutputFormat::Sarif => generate_sarif_report(std::slice::from_ref(report)),
    }
}

/// Render the reports of a directory scan
pub fn generate_batch_report(reports: &[AnalysisReport], format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => {
            let mut output: String = reports.iter().map(generate_text_report).collect::<Vec<_>>().join("\n");
            let total: usize = reports.iter().map(|r| r.issues.len()).sum();
            output.push_str(&format!(
                "\nScanned {} snapshot(s), {} issue(s) in total\n",
                reports.len(),
                total
            ));
            output
        }
        OutputFormat::Json => to_json(reports),
        OutputFormat::Sarif => generate_sarif_report(reports),
    }
}

fn generate_text_report(report: &AnalysisReport) -> String {
    let mut output = String::new();

    output.push_str("=== Sitebot Analysis Report ===\n");
    if let Some(ref url) = report.url {
        output.push_str(&format!("Page: {}\n", url));
    }
    output.push('\n');

    for note in &report.diagnostics {
        output.push_str(&format!("Note: {}\n", note));
    }
    if !report.diagnostics.is_empty() {
        output.push('\n');
    }

    if report.issues.is_empty() {
        output.push_str("No issues found. All checks passed.\n");
    } else {
        let summary = &report.summary;
        output.push_str(&format!(
            "Found {} issue(s): {} critical, {} high, {} medium, {} low\n\n",
            report.issues.len(),
            summary.count(Severity::Critical),
            summary.count(Severity::High),
            summary.count(Severity::Medium),
            summary.count(Severity::Low)
        ));

        for severity in Severity::ALL.iter().rev() {
            let issues: Vec<&Issue> = report.issues.iter().filter(|i| i.severity == *severity).collect();
            if issues.is_empty() {
                continue;
            }

            output.push_str(&format!("--- {} ({}) ---\n", severity, issues.len()));

            for issue in issues {
                output.push_str(&format!("[{}] {}\n", issue.rule_id, issue.message));
                if !issue.element_description.is_empty() {
                    output.push_str(&format!("  Element: {}\n", issue.element_description));
                }
                if let Some(ref criterion) = issue.wcag_criterion {
                    if let Some(ref level) = issue.wcag_level {
                        output.push_str(&format!("  WCAG: {} (Level {})\n", criterion, level));
                    }
                }
                if let Some(ref fix) = issue.suggested_fix {
                    output.push_str(&format!("  Fix: {}\n", fix));
                }
                output.push('\n');
            }
        }
    }

    for review in &report.manual_reviews {
        output.push_str(&format!("Manual review: {}\n", review));
    }
    if !report.manual_reviews.is_empty() {
        output.push('\n');
    }

    output.push_str(&format!("Overall rating: {}\n", report.summary.overall_rating));
    output
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string_pretty(value)
        .unwrap_or_else(|e| format!("{{\"error\": \"Failed to serialize report: {}\"}}", e))
}

#[derive(Debug, Serialize)]
struct SarifReport {
    #[serde(rename = "$schema")]
    schema: String,
    version: String,
    runs: Vec<SarifRun>,
}

#[derive(Debug, Serialize)]
struct SarifRun {
    tool: SarifTool,
    results: Vec<SarifResult>,
}

#[derive(Debug, Serialize)]
struct SarifTool {
    driver: SarifDriver,
}

#[derive(Debug, Serialize)]
struct SarifDriver {
    name: String,
    version: String,
}

#[derive(Debug, Serialize)]
struct SarifResult {
    #[serde(rename = "ruleId")]
    rule_id: String,
    level: String,
    message: SarifMessage,
    locations: Vec<SarifLocation>,
}

#[derive(Debug, Serialize)]
struct SarifMessage {
    text: String,
}

#[derive(Debug, Serialize)]
struct SarifLocation {
    #[serde(rename = "physicalLocation", skip_serializing_if = "Option::is_none")]
    physical_location: Option<SarifPhysicalLocation>,
    #[serde(rename = "logicalLocations")]
    logical_locations: Vec<SarifLogicalLocation>,
}

#[derive(Debug, Serialize)]
struct SarifPhysicalLocation {
    #[serde(rename = "artifactLocation")]
    artifact_location: SarifArtifactLocation,
}

#[derive(Debug, Serialize)]
struct SarifArtifactLocation {
    uri: String,
}

#[derive(Debug, Serialize)]
struct SarifLogicalLocation {
    name: String,
    kind: String,
}

fn sarif_level(severity: Severity) -> &'static str {
    match severity {
        Severity::Critical | Severity::High => "error",
        Severity::Medium => "warning",
        Severity::Low => "note",
    }
}

fn generate_sarif_report(reports: &[AnalysisReport]) -> String {
    let results: Vec<SarifResult> = reports
        .iter()
        .flat_map(|report| {
            report.issues.iter().map(move |issue| SarifResult {
                rule_id: issue.rule_id.clone(),
                level: sarif_level(issue.severity).to_string(),
                message: SarifMessage { text: issue.message.clone() },
                locations: vec![SarifLocation {
                    physical_location: report.url.as_ref().map(|url| SarifPhysicalLocation {
                        artifact_location: SarifArtifactLocation { uri: url.clone() },
                    }),
                    logical_locations: vec![SarifLogicalLocation {
                        name: issue.element_description.clone(),
                        kind: "element".to_string(),
                    }],
                }],
            })
        })
        .collect();

    let sarif = SarifReport {
        schema: "https://json.schemastore.org/sarif-2.1.0.json".to_string(),
        version: "2.1.0".to_string(),
        runs: vec![SarifRun {
            tool: SarifTool {
                driver: SarifDriver {
                    name: "sitebot".to_string(),
                    version: env!("CARGO_PKG_VERSION").to_string(),
                },
            },
            results,
        }],
    };

    to_json(&sarif)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::issue::WcagLevel;
    use crate::scanner::analyze_snapshot;
    use crate::snapshot::{DomSnapshot, ElementDescriptor, Rect, TagKind};

    fn report_with_missing_alt() -> AnalysisReport {
        let snapshot = DomSnapshot::new(vec![
            ElementDescriptor::new(0, TagKind::H1, Rect::new(0.0, 0.0, 300.0, 40.0)),
            ElementDescriptor::new(1, TagKind::Image, Rect::new(0.0, 50.0, 100.0, 100.0)),
        ]);
        let mut report = analyze_snapshot(&snapshot, &Config::default()).unwrap();
        report.url = Some("https://example.com/".to_string());
        report
    }

    #[test]
    fn test_text_report_empty() {
        let report = analyze_snapshot(&DomSnapshot::default(), &Config::default()).unwrap();
        let text = generate_report(&report, OutputFormat::Text);
        assert!(text.contains("No issues found"));
        assert!(text.contains("Overall rating: excellent"));
    }

    #[test]
    fn test_text_report_groups_by_severity() {
        let mut report = report_with_missing_alt();
        report.issues.push(
            Issue::new("contrast-aa", Severity::Medium, "contrast 2.00:1 below 4.5:1")
                .with_wcag("1.4.3", WcagLevel::AA),
        );
        let text = generate_report(&report, OutputFormat::Text);
        let high = text.find("--- HIGH").unwrap();
        let medium = text.find("--- MEDIUM").unwrap();
        assert!(high < medium);
        assert!(text.contains("[image-alt]"));
        assert!(text.contains("WCAG: 1.4.3 (Level AA)"));
    }

    #[test]
    fn test_text_report_lists_manual_reviews() {
        let report = report_with_missing_alt();
        let text = generate_report(&report, OutputFormat::Text);
        assert!(text.contains("Manual review: Full keyboard navigation testing"));
        let review = text.find("Manual review:").unwrap();
        let rating = text.find("Overall rating:").unwrap();
        assert!(review < rating);
    }

    #[test]
    fn test_json_report_uses_record_field_names() {
        let report = report_with_missing_alt();
        let json = generate_report(&report, OutputFormat::Json);
        let parsed: serde_json::Value = serde_json::from_str(&json).expect("valid JSON");
        assert_eq!(parsed["issues"][0]["rule_id"], "image-alt");
        assert_eq!(parsed["issues"][0]["severity"], "high");
        assert_eq!(parsed["summary"]["overall_rating"], "good");
        assert_eq!(parsed["summary"]["issue_counts_by_severity"]["high"], 1);
    }

    #[test]
    fn test_sarif_report() {
        let report = report_with_missing_alt();
        let sarif = generate_report(&report, OutputFormat::Sarif);
        let parsed: serde_json::Value = serde_json::from_str(&sarif).expect("valid JSON");
        assert_eq!(parsed["version"], "2.1.0");
        assert_eq!(parsed["runs"][0]["tool"]["driver"]["name"], "sitebot");
        let result = &parsed["runs"][0]["results"][0];
        assert_eq!(result["level"], "error");
        assert_eq!(
            result["locations"][0]["physicalLocation"]["artifactLocation"]["uri"],
            "https://example.com/"
        );
    }

    #[test]
    fn test_batch_report() {
        let reports = vec![report_with_missing_alt(), report_with_missing_alt()];
        let text = generate_batch_report(&reports, OutputFormat::Text);
        assert!(text.contains("Scanned 2 snapshot(s), 2 issue(s) in total"));

        let json = generate_batch_report(&reports, OutputFormat::Json);
        let parsed: serde_json::Value = serde_json::from_str(&json).expect("valid JSON");
        assert_eq!(parsed.as_array().map(|a| a.len()), Some(2));
    }

    #[test]
    fn test_output_format_parse() {
        assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("sarif".parse::<OutputFormat>().unwrap(), OutputFormat::Sarif);
        assert!("xml".parse::<OutputFormat>().is_err());
    }
}
