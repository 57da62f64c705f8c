//! Probe outcomes and run summaries.
//!
//! Every probe resolves to exactly one [`ProbeOutcome`]: the expectation
//! held, the body came back without the expected substring, or the request
//! itself failed. Outcomes are collected into a [`RunSummary`] so a run can
//! be inspected without scraping console output.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Measurements from a single probe round-trip.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProbeMetrics {
    /// Wall-clock duration of the request.
    pub duration: Duration,
    /// HTTP status code, when a response arrived.
    pub status: Option<u16>,
    /// Response body length in bytes, when a response arrived.
    pub body_length: Option<usize>,
}

impl ProbeMetrics {
    pub fn with_duration(duration: Duration) -> Self {
        Self {
            duration,
            status: None,
            body_length: None,
        }
    }
}

/// Result of a single probe.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum ProbeOutcome {
    /// Status and body matched expectations.
    Pass {
        message: String,
        metrics: ProbeMetrics,
    },
    /// The endpoint answered 200 but the body did not contain the expected
    /// substring.
    Mismatch {
        message: String,
        /// The body that failed the assertion, for diagnosis.
        body: String,
        metrics: ProbeMetrics,
    },
    /// Non-200 status or a transport failure.
    Failure {
        message: String,
        error_details: String,
        metrics: Option<ProbeMetrics>,
    },
}

impl ProbeOutcome {
    pub fn is_pass(&self) -> bool {
        matches!(self, ProbeOutcome::Pass { .. })
    }

    pub fn is_mismatch(&self) -> bool {
        matches!(self, ProbeOutcome::Mismatch { .. })
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, ProbeOutcome::Failure { .. })
    }

    pub fn metrics(&self) -> Option<&ProbeMetrics> {
        match self {
            ProbeOutcome::Pass { metrics, .. } => Some(metrics),
            ProbeOutcome::Mismatch { metrics, .. } => Some(metrics),
            ProbeOutcome::Failure { metrics, .. } => metrics.as_ref(),
        }
    }
}

impl fmt::Display for ProbeOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProbeOutcome::Pass { message, metrics } => {
                write!(f, "✅ PASS: {} ({}ms)", message, metrics.duration.as_millis())
            }
            ProbeOutcome::Mismatch { message, body, .. } => {
                write!(f, "⚠️  MISMATCH: {} - Got: {}", message, body)
            }
            ProbeOutcome::Failure {
                message,
                error_details,
                ..
            } => {
                write!(f, "❌ FAILURE: {} - {}", message, error_details)
            }
        }
    }
}

/// One named entry in a run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CaseReport {
    pub name: String,
    pub outcome: ProbeOutcome,
}

/// Aggregated results for one full run of the suite.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSummary {
    pub started_at: DateTime<Utc>,
    /// Whether the initial health check passed. When false, no endpoint
    /// cases were attempted.
    pub endpoint_available: bool,
    pub cases: Vec<CaseReport>,
}

impl RunSummary {
    pub fn new() -> Self {
        Self {
            started_at: Utc::now(),
            endpoint_available: false,
            cases: Vec::new(),
        }
    }

    pub fn record(&mut self, name: impl Into<String>, outcome: ProbeOutcome) {
        self.cases.push(CaseReport {
            name: name.into(),
            outcome,
        });
    }

    pub fn passed(&self) -> usize {
        self.cases.iter().filter(|c| c.outcome.is_pass()).count()
    }

    pub fn mismatched(&self) -> usize {
        self.cases.iter().filter(|c| c.outcome.is_mismatch()).count()
    }

    pub fn failed(&self) -> usize {
        self.cases.iter().filter(|c| c.outcome.is_failure()).count()
    }

    pub fn all_passed(&self) -> bool {
        self.endpoint_available && self.mismatched() == 0 && self.failed() == 0
    }
}

impl Default for RunSummary {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} passed, {} mismatched, {} failed",
            self.passed(),
            self.mismatched(),
            self.failed()
        )
    }
}
