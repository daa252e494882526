// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Structured report handed to the presentation layer.

use serde::Serialize;

use crate::{
    roadmap::build_roadmap,
    score::{MaturityLevel, ScoreResult},
    signals::AnalysisSignals,
    url::RepositoryIdentifier,
};

/// File count above which the structure is described as clean.
const CLEAN_STRUCTURE_FILES: usize = 5;

/// Everything a CLI or web front-end needs to render an evaluation.
#[derive(Debug, Clone, PartialEq, Serialize,)]
pub struct RenderedReport
{
    /// Repository name as reported by the platform.
    pub repository_name: String,
    /// `owner/name` parsed from the input URL.
    pub repository:      String,
    /// Score in `[0, 100]`, rounded to two decimals.
    pub score:           f64,
    /// Maturity tier derived from the score.
    pub level:           MaturityLevel,
    /// One-line description of structure, documentation and tests.
    pub summary_line:    String,
    /// Recommendations in priority order.
    pub roadmap_steps:   Vec<String,>,
    /// Signals the score was derived from.
    pub signals:         AnalysisSignals,
}

impl RenderedReport
{
    /// Scores the signals and assembles the report.
    pub fn build(
        repository_name: impl Into<String,>,
        repository: &RepositoryIdentifier,
        signals: AnalysisSignals,
    ) -> Self
    {
        let ScoreResult {
            score,
            level,
        } = ScoreResult::from_signals(&signals,);
        let roadmap_steps =
            build_roadmap(&signals, score,).into_iter().map(str::to_owned,).collect();

        Self {
            repository_name: repository_name.into(),
            repository: repository.to_string(),
            score,
            level,
            summary_line: summary_line(&signals,),
            roadmap_steps,
            signals,
        }
    }
}

/// Describes structure, documentation and tests in a single sentence.
pub fn summary_line(signals: &AnalysisSignals,) -> String
{
    let mut summary = String::from(if signals.file_count > CLEAN_STRUCTURE_FILES {
        "Clean structure"
    } else {
        "Small or incomplete project"
    },);

    summary.push_str(if signals.has_readme {
        ", documentation present"
    } else {
        ", documentation missing"
    },);
    summary.push_str(if signals.has_tests { ", tests included" } else { ", tests missing" },);

    summary
}
