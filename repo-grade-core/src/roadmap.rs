// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Ordered improvement recommendations.
//!
//! Rules are evaluated in a fixed sequence and each appends its steps in the
//! listed order. Steps are never sorted or deduplicated, and the CI/CD step
//! always closes the list.

use crate::{score::ADVANCED_THRESHOLD, signals::AnalysisSignals};

pub const ADD_README: &str = "Add a clear README.md with setup, usage, and screenshots";
pub const ADD_TESTS: &str = "Introduce unit tests and basic test coverage";
pub const COMMIT_MORE: &str = "Commit more frequently with meaningful messages";
pub const REFACTOR: &str = "Refactor code for readability and modularity";
pub const APPLY_LINTING: &str = "Apply linting and formatting tools";
pub const ADD_CI: &str = "Add CI/CD using GitHub Actions";

/// Commit count below which more frequent commits are recommended.
pub const MIN_COMMITS: usize = 10;

/// Builds the roadmap for the given signals and final score.
///
/// The result holds between one and six steps.
///
/// # Examples
///
/// ```
/// use repo_grade_core::{AnalysisSignals, build_roadmap};
///
/// let signals = AnalysisSignals {
///     file_count:         12,
///     folder_count:       3,
///     has_tests:          true,
///     has_readme:         true,
///     total_commits:      45,
///     commit_consistency: 1.0,
///     language_score:     1.0,
/// };
/// assert_eq!(build_roadmap(&signals, 100.0,), vec!["Add CI/CD using GitHub Actions"]);
/// ```
pub fn build_roadmap(signals: &AnalysisSignals, score: f64,) -> Vec<&'static str,>
{
    roadmap_steps(signals.has_readme, signals.has_tests, signals.total_commits, score,)
}

/// [`build_roadmap`] over the individual signals it consumes.
pub fn roadmap_steps(
    has_readme: bool,
    has_tests: bool,
    total_commits: usize,
    score: f64,
) -> Vec<&'static str,>
{
    let mut steps = Vec::with_capacity(6,);

    if !has_readme {
        steps.push(ADD_README,);
    }
    if !has_tests {
        steps.push(ADD_TESTS,);
    }
    if total_commits < MIN_COMMITS {
        steps.push(COMMIT_MORE,);
    }
    if score < ADVANCED_THRESHOLD {
        steps.push(REFACTOR,);
        steps.push(APPLY_LINTING,);
    }
    steps.push(ADD_CI,);

    steps
}

#[cfg(test)]
mod tests
{
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn strong_repository_only_needs_ci()
    {
        assert_eq!(roadmap_steps(true, true, 45, 100.0,), vec![ADD_CI]);
    }

    #[test]
    fn weak_repository_gets_every_step_in_order()
    {
        assert_eq!(roadmap_steps(false, false, 0, 8.33,), vec![
            ADD_README,
            ADD_TESTS,
            COMMIT_MORE,
            REFACTOR,
            APPLY_LINTING,
            ADD_CI,
        ]);
    }

    #[test]
    fn commit_threshold_is_strict()
    {
        assert!(roadmap_steps(true, true, 9, 100.0,).contains(&COMMIT_MORE));
        assert!(!roadmap_steps(true, true, 10, 100.0,).contains(&COMMIT_MORE));
    }

    #[test]
    fn refactor_steps_follow_advanced_threshold()
    {
        assert_eq!(roadmap_steps(true, true, 30, 69.99,), vec![REFACTOR, APPLY_LINTING, ADD_CI]);
        assert_eq!(roadmap_steps(true, true, 30, 70.0,), vec![ADD_CI]);
    }

    #[test]
    fn missing_readme_precedes_commit_advice()
    {
        assert_eq!(roadmap_steps(false, true, 3, 85.0,), vec![ADD_README, COMMIT_MORE, ADD_CI]);
    }

    proptest! {
        #[test]
        fn roadmap_is_deterministic_and_ends_with_ci(
            readme in any::<bool>(),
            tests in any::<bool>(),
            commits in 0usize..100,
            score in 0.0f64..=100.0,
        ) {
            let first = roadmap_steps(readme, tests, commits, score);
            let second = roadmap_steps(readme, tests, commits, score);
            prop_assert_eq!(&first, &second);
            prop_assert!((1..=6).contains(&first.len()));
            prop_assert_eq!(first.last().copied(), Some(ADD_CI));
            prop_assert_eq!(first.iter().filter(|step| **step == ADD_CI).count(), 1);
        }
    }
}
