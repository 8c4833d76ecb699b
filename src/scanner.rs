// SPDX-License-Identifier: PMPL-1.0-or-later
//! Runs the analyzer battery over captured snapshots.
//!
//! A single snapshot is analyzed by every enabled analyzer in parallel on a
//! bounded worker pool. Directory scans walk the tree for `*.json` snapshot
//! files and reuse one pool for all of them.

use crate::analyzers::{self, consistency, Analyzer};
use crate::config::Config;
use crate::error::Result;
use crate::issue::Issue;
use crate::snapshot::{load_snapshot, DomSnapshot};
use crate::summary::{summarize_with, AnalysisSummary};
use chrono::{DateTime, Utc};
use rayon::prelude::*;
use rayon::ThreadPool;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, warn};
use uuid::Uuid;
use walkdir::WalkDir;

/// Snapshot file extension picked up by directory scans
const SNAPSHOT_EXTENSION: &str = "json";

/// Directories to skip
const SKIP_DIRS: &[&str] = &[
    "node_modules", ".git", "target", "dist", "build", "vendor", "coverage",
];

/// Everything one run produced for one snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub run_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub url: Option<String>,
    /// Issues in analyzer registry order
    pub issues: Vec<Issue>,
    pub summary: AnalysisSummary,
    pub consistency_groups: Vec<consistency::ConsistencyGroup>,
    /// Names of the analyzers that ran
    pub checks_performed: Vec<String>,
    /// Follow-up checks the enabled analyzers could not settle automatically
    #[serde(default)]
    pub manual_reviews: Vec<String>,
    /// Ingestion problems recovered before analysis
    pub diagnostics: Vec<String>,
}

impl AnalysisReport {
    fn new(snapshot: &DomSnapshot, issues: Vec<Issue>, config: &Config) -> Self {
        let summary = summarize_with(&issues, &config.rating);
        Self {
            run_id: Uuid::new_v4(),
            generated_at: Utc::now(),
            url: snapshot.url.clone(),
            issues,
            summary,
            consistency_groups: Vec::new(),
            checks_performed: Vec::new(),
            manual_reviews: Vec::new(),
            diagnostics: snapshot.diagnostics.clone(),
        }
    }

    /// Whether any issue is high or critical
    pub fn has_blocking(&self) -> bool {
        self.issues.iter().any(|i| i.severity.is_blocking())
    }
}

/// Build the bounded analyzer pool
pub fn build_pool(workers: usize) -> Result<ThreadPool> {
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(workers)
        .thread_name(|i| format!("sitebot-worker-{}", i))
        .build()?;
    Ok(pool)
}

/// Analyze one snapshot on a pool of `config.workers` threads
pub fn analyze_snapshot(snapshot: &DomSnapshot, config: &Config) -> Result<AnalysisReport> {
    let pool = build_pool(config.workers)?;
    analyze_snapshot_in(&pool, snapshot, config)
}

/// Analyze one snapshot on an existing pool
pub fn analyze_snapshot_in(
    pool: &ThreadPool,
    snapshot: &DomSnapshot,
    config: &Config,
) -> Result<AnalysisReport> {
    let label = snapshot.url.as_deref().unwrap_or("<snapshot>");

    if let Some(reason) = &snapshot.load_error {
        warn!("Page {} failed to load: {}", label, reason);
        return Ok(AnalysisReport::new(
            snapshot,
            vec![Issue::page_load_failure(reason)],
            config,
        ));
    }

    if snapshot.is_empty() {
        info!("Snapshot {} has no elements, nothing to analyze", label);
        return Ok(AnalysisReport::new(snapshot, Vec::new(), config));
    }

    let enabled = analyzers::enabled_analyzers(config);
    info!(
        "Analyzing {} ({} elements) with {} analyzers",
        label,
        snapshot.elements.len(),
        enabled.len()
    );

    let per_analyzer: Vec<Vec<Issue>> = pool.install(|| {
        enabled
            .par_iter()
            .map(|analyzer| run_analyzer(analyzer.as_ref(), snapshot, config))
            .collect::<Result<Vec<_>>>()
    })?;

    let issues: Vec<Issue> = per_analyzer.into_iter().flatten().collect();
    let mut report = AnalysisReport::new(snapshot, issues, config);
    report.checks_performed = enabled.iter().map(|a| a.name().to_string()).collect();
    report.manual_reviews = enabled
        .iter()
        .filter_map(|a| a.manual_review().map(str::to_string))
        .collect();
    if config.checks.consistency {
        report.consistency_groups =
            consistency::aggregate_consistency_with(snapshot.visible_elements(), &config.cta);
    }

    info!(
        "Found {} issues in {}, rated {}",
        report.issues.len(),
        label,
        report.summary.overall_rating
    );
    Ok(report)
}

fn run_analyzer(
    analyzer: &dyn Analyzer,
    snapshot: &DomSnapshot,
    config: &Config,
) -> Result<Vec<Issue>> {
    let issues = analyzer.analyze(snapshot, config)?;
    debug!("{} reported {} issues", analyzer.name(), issues.len());
    Ok(issues)
}

/// Load and analyze a single snapshot file
pub fn scan_file(path: &Path, config: &Config) -> Result<AnalysisReport> {
    let snapshot = load_snapshot(path)?;
    analyze_snapshot(&snapshot, config)
}

/// Analyze every snapshot file under `dir`. Unreadable files are skipped.
pub fn scan_directory(dir: &Path, config: &Config) -> Result<Vec<AnalysisReport>> {
    let pool = build_pool(config.workers)?;
    let mut reports = Vec::new();

    info!("Scanning directory: {}", dir.display());

    for entry in WalkDir::new(dir)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| {
            let name = e.file_name().to_str().unwrap_or("");
            !(e.file_type().is_dir() && SKIP_DIRS.contains(&name))
        })
    {
        let entry = match entry {
            Ok(e) => e,
            Err(_) => continue,
        };

        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) != Some(SNAPSHOT_EXTENSION) {
            continue;
        }

        let snapshot = match load_snapshot(path) {
            Ok(s) => s,
            Err(e) => {
                warn!("Skipping {}: {}", path.display(), e);
                continue;
            }
        };

        reports.push(analyze_snapshot_in(&pool, &snapshot, config)?);
    }

    info!("Scanned {} snapshots in {}", reports.len(), dir.display());

    Ok(reports)
}
