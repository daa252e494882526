// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Weighted score aggregation and maturity classification.
//!
//! The score is the sum of five sub-scores, each clamped to its own maximum
//! weight:
//!
//! | component          | formula                      | max |
//! |--------------------|------------------------------|-----|
//! | structure          | `min(files / 10, 1) * 20`    | 20  |
//! | documentation      | `readme ? 15 : 0`            | 15  |
//! | testing            | `tests ? 20 : 0`             | 20  |
//! | commit discipline  | `consistency * 20`           | 20  |
//! | technology breadth | `language_score * 25`        | 25  |
//!
//! The total is rounded half-up to two decimal places. Because every input
//! is non-negative, `f64::round` (half away from zero) behaves as half-up.

use serde::Serialize;

use crate::signals::AnalysisSignals;

pub const STRUCTURE_WEIGHT: f64 = 20.0;
pub const DOCUMENTATION_WEIGHT: f64 = 15.0;
pub const TESTING_WEIGHT: f64 = 20.0;
pub const COMMIT_WEIGHT: f64 = 20.0;
pub const LANGUAGE_WEIGHT: f64 = 25.0;

/// File count at which the structure sub-score saturates.
pub const STRUCTURE_SATURATION: usize = 10;

/// Lower bound (inclusive) of the intermediate tier.
pub const INTERMEDIATE_THRESHOLD: f64 = 40.0;
/// Lower bound (inclusive) of the advanced tier.
pub const ADVANCED_THRESHOLD: f64 = 70.0;

/// Discrete maturity tier derived from the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize,)]
pub enum MaturityLevel
{
    Beginner,
    Intermediate,
    Advanced,
}

impl MaturityLevel
{
    /// Classifies a score using half-open intervals `[0, 40)`, `[40, 70)` and
    /// `[70, 100]`.
    pub fn from_score(score: f64,) -> Self
    {
        if score < INTERMEDIATE_THRESHOLD {
            Self::Beginner
        } else if score < ADVANCED_THRESHOLD {
            Self::Intermediate
        } else {
            Self::Advanced
        }
    }

    /// Human readable label.
    pub fn as_str(self,) -> &'static str
    {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
        }
    }
}

impl std::fmt::Display for MaturityLevel
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_,>,) -> std::fmt::Result
    {
        f.write_str(self.as_str(),)
    }
}

/// Final score paired with its maturity level.
#[derive(Debug, Clone, Copy, PartialEq, Serialize,)]
pub struct ScoreResult
{
    /// Score in `[0, 100]`, rounded to two decimals.
    pub score: f64,
    /// Tier derived from `score`.
    pub level: MaturityLevel,
}

impl ScoreResult
{
    /// Scores the given signals.
    pub fn from_signals(signals: &AnalysisSignals,) -> Self
    {
        let score = calculate_score(
            signals.file_count,
            signals.has_readme,
            signals.has_tests,
            signals.commit_consistency,
            signals.language_score,
        );

        Self {
            score,
            level: MaturityLevel::from_score(score,),
        }
    }
}

/// Structure sub-score: `min(files / 10, 1) * 20`.
pub fn structure_sub_score(file_count: usize,) -> f64
{
    (file_count as f64 / STRUCTURE_SATURATION as f64).min(1.0,) * STRUCTURE_WEIGHT
}

/// Combines the five sub-scores into a value in `[0, 100]`.
///
/// Ratios outside `[0, 1]` are clamped so the result never leaves the range
/// even for hand-built inputs.
///
/// # Examples
///
/// ```
/// use repo_grade_core::calculate_score;
///
/// assert_eq!(calculate_score(12, true, true, 1.0, 1.0), 100.0);
/// assert_eq!(calculate_score(0, false, false, 0.0, 1.0 / 3.0), 8.33);
/// ```
pub fn calculate_score(
    file_count: usize,
    has_readme: bool,
    has_tests: bool,
    commit_consistency: f64,
    language_score: f64,
) -> f64
{
    let documentation = if has_readme { DOCUMENTATION_WEIGHT } else { 0.0 };
    let testing = if has_tests { TESTING_WEIGHT } else { 0.0 };

    let total = structure_sub_score(file_count,)
        + documentation
        + testing
        + unit_clamp(commit_consistency,) * COMMIT_WEIGHT
        + unit_clamp(language_score,) * LANGUAGE_WEIGHT;

    round_half_up(total,)
}

/// Rounds to two decimal places, ties away from zero.
pub fn round_half_up(value: f64,) -> f64
{
    (value * 100.0).round() / 100.0
}

fn unit_clamp(value: f64,) -> f64
{
    if value.is_nan() { 0.0 } else { value.clamp(0.0, 1.0,) }
}
