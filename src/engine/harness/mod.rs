pub mod boundary;
pub mod render;

use std::convert::Infallible;
use std::fmt;
use std::io::{self, Write};
use std::time::Instant;

use tracing::{debug, info, warn};

use crate::domain::error::CheckFault;
use crate::domain::report::{Outcome, ReportEntry, RunReport, Verdict};

pub type CheckResult = Result<Verdict, CheckFault>;

/// Something a harness can run checks against.
pub trait Subject {
    /// Short name used in the report (usually a file path).
    fn name(&self) -> String;

    /// Line written before the first check runs.
    fn heading(&self) -> String {
        format!("Testing {}:", self.name())
    }
}

/// A named check bound to nothing until the harness runs it.
pub struct Check<S> {
    name: &'static str,
    run: fn(&S) -> CheckResult,
}

impl<S> Check<S> {
    pub const fn new(name: &'static str, run: fn(&S) -> CheckResult) -> Self {
        Self { name, run }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl<S> fmt::Debug for Check<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Check").field("name", &self.name).finish()
    }
}

/// Runs every registered check once, in registration order, against one
/// subject.
///
/// A check that returns a fault or panics is recorded as `error` and the
/// run carries on with the next check.
#[derive(Debug)]
pub struct Harness<S> {
    subject: S,
    checks: Vec<Check<S>>,
}

impl<S: Subject> Harness<S> {
    pub fn new(subject: S, checks: Vec<Check<S>>) -> Self {
        Self { subject, checks }
    }

    pub fn check_names(&self) -> Vec<&'static str> {
        self.checks.iter().map(Check::name).collect()
    }

    /// Runs all checks and writes the text report to `out` as they complete.
    pub fn run<W: Write>(&self, out: &mut W) -> io::Result<RunReport> {
        render::write_heading(out, &self.subject.heading())?;
        let report = self.execute(|entry| render::write_glyph(out, entry.outcome))?;
        render::write_summary(out, &report)?;
        Ok(report)
    }

    /// Runs all checks without writing anything.
    pub fn evaluate(&self) -> RunReport {
        match self.execute(|_| Ok::<(), Infallible>(())) {
            Ok(report) => report,
            Err(never) => match never {},
        }
    }

    fn execute<E>(
        &self,
        mut on_entry: impl FnMut(&ReportEntry) -> Result<(), E>,
    ) -> Result<RunReport, E> {
        let started = Instant::now();
        let mut entries = Vec::with_capacity(self.checks.len());
        for check in &self.checks {
            let entry = self.run_check(check);
            on_entry(&entry)?;
            entries.push(entry);
        }

        let report = RunReport {
            subject: self.subject.name(),
            entries,
            elapsed_seconds: started.elapsed().as_secs_f64(),
        };
        let counts = report.counts();
        info!(
            subject = %report.subject,
            passes = counts.passes,
            fails = counts.fails,
            warns = counts.warns,
            errors = counts.errors,
            "checks finished"
        );
        Ok(report)
    }

    fn run_check(&self, check: &Check<S>) -> ReportEntry {
        let (outcome, message) = match boundary::guard(|| (check.run)(&self.subject)) {
            Ok(Ok(verdict)) => (Outcome::from(verdict.status), verdict.message),
            Ok(Err(fault)) => {
                warn!(check = check.name, %fault, "check faulted");
                (Outcome::Error, boundary::describe_fault(&fault))
            }
            Err(panic) => {
                warn!(check = check.name, payload = %panic.payload, "check panicked");
                (Outcome::Error, panic.to_string())
            }
        };
        debug!(check = check.name, outcome = outcome.label(), "check finished");
        ReportEntry {
            name: check.name.to_string(),
            outcome,
            message,
        }
    }
}
