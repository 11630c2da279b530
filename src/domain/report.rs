use std::fmt;

use serde::Serialize;

/// How a violated check is classified.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Violation blocks the recipe.
    #[default]
    Fail,
    /// Violation is advisory only.
    Warn,
}

/// Status an assertion may hand back to the harness.
///
/// There is no `error` status: only the harness produces errors, when a
/// check faults.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerdictStatus {
    Pass,
    Fail,
    Warn,
}

/// Classified assertion result returned by a check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    pub status: VerdictStatus,
    pub message: String,
}

impl Verdict {
    pub fn pass() -> Self {
        Self {
            status: VerdictStatus::Pass,
            message: String::new(),
        }
    }

    /// Maps a boolean result onto pass or the status implied by `severity`.
    pub fn evaluate(result: bool, severity: Severity, message: impl Into<String>) -> Self {
        if result {
            return Self::pass();
        }
        let status = match severity {
            Severity::Fail => VerdictStatus::Fail,
            Severity::Warn => VerdictStatus::Warn,
        };
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn is_pass(&self) -> bool {
        self.status == VerdictStatus::Pass
    }
}

/// Final classification of one check in a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Pass,
    Fail,
    Warn,
    Error,
}

impl Outcome {
    pub fn glyph(self) -> char {
        match self {
            Self::Pass => '.',
            Self::Fail => 'F',
            Self::Warn => 'W',
            Self::Error => 'E',
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Pass => "PASS",
            Self::Fail => "FAIL",
            Self::Warn => "WARN",
            Self::Error => "ERROR",
        }
    }
}

impl From<VerdictStatus> for Outcome {
    fn from(status: VerdictStatus) -> Self {
        match status {
            VerdictStatus::Pass => Self::Pass,
            VerdictStatus::Fail => Self::Fail,
            VerdictStatus::Warn => Self::Warn,
        }
    }
}

/// One recorded check result.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ReportEntry {
    pub name: String,
    pub outcome: Outcome,
    pub message: String,
}

/// Everything one run of a tester produced, in execution order.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RunReport {
    pub subject: String,
    pub entries: Vec<ReportEntry>,
    pub elapsed_seconds: f64,
}

impl RunReport {
    pub fn passes(&self) -> Vec<&ReportEntry> {
        self.with_outcome(Outcome::Pass)
    }

    pub fn fails(&self) -> Vec<&ReportEntry> {
        self.with_outcome(Outcome::Fail)
    }

    pub fn warns(&self) -> Vec<&ReportEntry> {
        self.with_outcome(Outcome::Warn)
    }

    pub fn errors(&self) -> Vec<&ReportEntry> {
        self.with_outcome(Outcome::Error)
    }

    pub fn with_outcome(&self, outcome: Outcome) -> Vec<&ReportEntry> {
        self.entries
            .iter()
            .filter(|entry| entry.outcome == outcome)
            .collect()
    }

    pub fn entry(&self, name: &str) -> Option<&ReportEntry> {
        self.entries.iter().find(|entry| entry.name == name)
    }

    pub fn counts(&self) -> OutcomeCounts {
        let mut counts = OutcomeCounts::default();
        for entry in &self.entries {
            match entry.outcome {
                Outcome::Pass => counts.passes += 1,
                Outcome::Fail => counts.fails += 1,
                Outcome::Warn => counts.warns += 1,
                Outcome::Error => counts.errors += 1,
            }
        }
        counts
    }

    /// True when at least one check was classified `fail`.
    ///
    /// Errors and warnings do not count here; the exit-code policy only
    /// looks at failures.
    pub fn has_failures(&self) -> bool {
        self.entries
            .iter()
            .any(|entry| entry.outcome == Outcome::Fail)
    }

    pub fn status(&self) -> RunStatus {
        RunStatus::from_counts(&self.counts())
    }
}

/// Per-outcome totals for one run.
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
pub struct OutcomeCounts {
    pub passes: usize,
    pub fails: usize,
    pub warns: usize,
    pub errors: usize,
}

impl OutcomeCounts {
    pub fn total(&self) -> usize {
        self.passes + self.fails + self.warns + self.errors
    }
}

/// Final status line of a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    Ok,
    OkWithWarnings {
        warnings: usize,
    },
    Failed {
        failures: usize,
        errors: usize,
        warnings: usize,
    },
}

impl RunStatus {
    pub fn from_counts(counts: &OutcomeCounts) -> Self {
        if counts.fails > 0 || counts.errors > 0 {
            Self::Failed {
                failures: counts.fails,
                errors: counts.errors,
                warnings: counts.warns,
            }
        } else if counts.warns > 0 {
            Self::OkWithWarnings {
                warnings: counts.warns,
            }
        } else {
            Self::Ok
        }
    }
}

impl fmt::Display for RunStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ok => f.write_str("OK"),
            Self::OkWithWarnings { warnings } => write!(f, "OK (warnings={warnings})"),
            Self::Failed {
                failures,
                errors,
                warnings,
            } => {
                let parts: Vec<String> = [
                    ("failures", *failures),
                    ("errors", *errors),
                    ("warnings", *warnings),
                ]
                .into_iter()
                .filter(|(_, count)| *count > 0)
                .map(|(label, count)| format!("{label}={count}"))
                .collect();
                write!(f, "FAILED ({})", parts.join(", "))
            }
        }
    }
}
