// SPDX-License-Identifier: PMPL-1.0-or-later
//! Sitebot - accessibility and style consistency analysis for captured pages
//!
//! Sitebot reads a DOM snapshot (tag, bounding box and computed style of the
//! key elements on a page, as recorded by a browser driver) and runs a fixed
//! battery of deterministic checks over it. Every check reports `Issue`
//! records; the run is rolled up into a single `AnalysisSummary`.
//!
//! ## Analyzers
//!
//! - **Contrast** (1.4.3): text/background contrast against the AA minimum
//! - **Consistency**: one style per role for headings, paragraphs and calls to action
//! - **Hierarchy** (1.3.1): H1 text larger than H2, H2 larger than body text
//! - **Alt Text** (1.1.1): image alternative text
//! - **Keyboard** (2.1.1/2.4.3): buttons and links reachable in a natural tab order
//! - **Document** (2.4.2/3.1.1): title, language, viewport and top-level heading
//!
//! Analyzers share nothing mutable and run side by side on a bounded worker
//! pool against the same snapshot.

pub mod analyzers;
pub mod color;
pub mod config;
pub mod error;
pub mod issue;
pub mod report;
pub mod scanner;
pub mod snapshot;
pub mod summary;

pub use error::{Result, SitebotError};
pub use issue::{Issue, Severity};
pub use scanner::{analyze_snapshot, AnalysisReport};
pub use snapshot::DomSnapshot;
pub use summary::{summarize, AnalysisSummary, Rating};
