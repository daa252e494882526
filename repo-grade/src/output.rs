// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Text and JSON rendering of analysis reports.

use std::io;

use clap::ValueEnum;
use repo_grade_core::RenderedReport;

use crate::error::Error;

/// Output format selected on the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum,)]
pub enum OutputFormat
{
    /// Human readable evaluation.
    #[default]
    Text,
    /// Serialized [`RenderedReport`].
    Json,
}

/// Writes the report in the requested format.
///
/// # Errors
///
/// Returns [`Error::Output`] when the writer fails and [`Error::Serialize`]
/// when JSON encoding fails.
pub fn write_report<W: io::Write,>(
    writer: &mut W,
    report: &RenderedReport,
    format: OutputFormat,
    pretty: bool,
) -> Result<(), Error,>
{
    match format {
        OutputFormat::Text => write_text_report(writer, report,)?,
        OutputFormat::Json => write_json_report(writer, report, pretty,)?,
    }

    Ok((),)
}

/// Renders the evaluation block, the summary and the numbered roadmap.
///
/// # Errors
///
/// Propagates writer failures.
pub fn write_text_report<W: io::Write,>(writer: &mut W, report: &RenderedReport,) -> io::Result<(),>
{
    writeln!(writer, "\n===== Repository Evaluation =====")?;
    writeln!(writer, "Project       : {}", report.repository_name)?;
    writeln!(writer, "Score         : {:.2}/100", report.score)?;
    writeln!(writer, "Level         : {}", report.level)?;

    writeln!(writer, "\n--- Summary ---")?;
    writeln!(writer, "{}", report.summary_line)?;

    writeln!(writer, "\n--- Personalized Roadmap ---")?;
    for (index, step,) in report.roadmap_steps.iter().enumerate() {
        writeln!(writer, "{}. {}", index + 1, step)?;
    }

    Ok((),)
}

/// Serializes the report as JSON followed by a newline.
///
/// # Errors
///
/// Returns [`Error::Serialize`] or [`Error::Output`].
pub fn write_json_report<W: io::Write,>(
    writer: &mut W,
    report: &RenderedReport,
    pretty: bool,
) -> Result<(), Error,>
{
    if pretty {
        serde_json::to_writer_pretty(&mut *writer, report,)?;
    } else {
        serde_json::to_writer(&mut *writer, report,)?;
    }
    writeln!(writer)?;

    Ok((),)
}
