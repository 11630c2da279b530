use std::io::{self, Write};

use crate::domain::report::{Outcome, RunReport};

const BANNER_WIDTH: usize = 70;

/// Order in which non-passing entries are listed.
const DETAIL_ORDER: [Outcome; 3] = [Outcome::Fail, Outcome::Error, Outcome::Warn];

pub fn write_heading<W: Write>(out: &mut W, heading: &str) -> io::Result<()> {
    writeln!(out, "{heading}")
}

/// Writes one progress glyph and flushes so progress shows while checks run.
pub fn write_glyph<W: Write>(out: &mut W, outcome: Outcome) -> io::Result<()> {
    write!(out, "{}", outcome.glyph())?;
    out.flush()
}

/// Ends the progress line and writes details, timing and the status line.
pub fn write_summary<W: Write>(out: &mut W, report: &RunReport) -> io::Result<()> {
    writeln!(out)?;
    let counts = report.counts();
    if counts.fails + counts.errors + counts.warns > 0 {
        writeln!(out, "{}", "=".repeat(BANNER_WIDTH))?;
    }
    for outcome in DETAIL_ORDER {
        for entry in report.with_outcome(outcome) {
            writeln!(out, "{}: {}", outcome.label(), entry.name)?;
            writeln!(out, "-- Reason: {}", entry.message)?;
            writeln!(out, "{}", "-".repeat(BANNER_WIDTH))?;
        }
    }
    writeln!(
        out,
        "Ran {} tests in {:.4} seconds.",
        counts.total(),
        report.elapsed_seconds
    )?;
    writeln!(out)?;
    writeln!(out, "{}", report.status())?;
    out.flush()
}
