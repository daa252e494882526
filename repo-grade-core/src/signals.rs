// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Signal extraction from raw repository metadata.
//!
//! Each analyzer is a pure function over its own slice of the
//! [`RepositorySnapshot`] so they can run in any order. The results are
//! collected once into an immutable [`AnalysisSignals`] value consumed by the
//! score aggregator and the roadmap generator.

use serde::Serialize;

use crate::snapshot::{CommitRecord, ContentsEntry, EntryKind, LanguageMap, RepositorySnapshot};

/// Commit count at which the consistency ramp saturates.
pub const COMMIT_SATURATION: usize = 30;
/// Distinct language count at which the diversity ramp saturates.
pub const LANGUAGE_SATURATION: usize = 3;

const TEST_DIRECTORIES: &[&str] = &["test", "tests", "__tests__"];
const README_NAME: &str = "readme.md";

/// File and folder counts of the repository root.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq,)]
pub struct StructureSummary
{
    /// Number of top-level files.
    pub file_count:   usize,
    /// Number of top-level directories.
    pub folder_count: usize,
    /// Whether any entry looks like a test file or test directory.
    pub has_tests:    bool,
}

/// Commit history summary.
#[derive(Debug, Clone, Copy, Default, PartialEq,)]
pub struct CommitSummary
{
    /// Number of commits in the fetched window.
    pub total:       usize,
    /// Saturating ratio in `[0, 1]`.
    pub consistency: f64,
}

/// Immutable snapshot of every signal used for scoring.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize,)]
pub struct AnalysisSignals
{
    /// Root entries of type `file`.
    pub file_count:         usize,
    /// Root entries of type `dir`.
    pub folder_count:       usize,
    /// Whether any test file or test directory sits at the root.
    pub has_tests:          bool,
    /// Whether the root holds a `README.md` (case-insensitive).
    pub has_readme:         bool,
    /// Commits in the fetched window, at most 100.
    pub total_commits:      usize,
    /// Commit ratio saturating at 30 commits, in `[0, 1]`.
    pub commit_consistency: f64,
    /// Language ratio saturating at 3 languages, in `[0, 1]`.
    pub language_score:     f64,
}

impl AnalysisSignals
{
    /// Runs all four analyzers over the snapshot.
    pub fn from_snapshot(snapshot: &RepositorySnapshot,) -> Self
    {
        let structure = analyze_structure(&snapshot.contents,);
        let commits = analyze_commits(&snapshot.commits,);

        Self {
            file_count:         structure.file_count,
            folder_count:       structure.folder_count,
            has_tests:          structure.has_tests,
            has_readme:         detect_readme(&snapshot.contents,),
            total_commits:      commits.total,
            commit_consistency: commits.consistency,
            language_score:     language_score(&snapshot.languages,),
        }
    }
}

/// Counts files and folders and looks for test markers.
///
/// A file counts as a test marker when its lowercased name contains `test`
/// anywhere (`test_util.py`, `pytest.ini`, `Contest.java`). A directory only
/// counts when its lowercased name is exactly `test`, `tests` or `__tests__`.
/// Entries of any other kind are ignored.
pub fn analyze_structure(contents: &[ContentsEntry],) -> StructureSummary
{
    let mut summary = StructureSummary::default();

    for entry in contents {
        let lowered = entry.name.to_lowercase();
        match entry.kind {
            EntryKind::File => {
                summary.file_count += 1;
                if lowered.contains("test",) {
                    summary.has_tests = true;
                }
            }
            EntryKind::Directory => {
                summary.folder_count += 1;
                if TEST_DIRECTORIES.contains(&lowered.as_str(),) {
                    summary.has_tests = true;
                }
            }
            EntryKind::Other => {}
        }
    }

    summary
}

/// Returns `true` when some entry is named `README.md`, ignoring case.
///
/// `README`, `README.rst` and `docs/README.md` do not count.
pub fn detect_readme(contents: &[ContentsEntry],) -> bool
{
    contents.iter().any(|entry| entry.name.to_lowercase() == README_NAME,)
}

/// Counts commits and derives the consistency ratio `min(1, n / 30)`.
pub fn analyze_commits(commits: &[CommitRecord],) -> CommitSummary
{
    let total = commits.len();
    CommitSummary {
        total,
        consistency: commit_consistency(total,),
    }
}

/// Saturating ramp over the commit count.
pub fn commit_consistency(total_commits: usize,) -> f64
{
    saturating_ratio(total_commits, COMMIT_SATURATION,)
}

/// Saturating ramp over the number of distinct languages.
///
/// Byte counts are not weighted; a repository with one dominant language and
/// two trivial ones scores the same as three balanced languages.
pub fn language_score(languages: &LanguageMap,) -> f64
{
    language_score_for_count(languages.len(),)
}

/// [`language_score`] expressed over a bare language count.
pub fn language_score_for_count(distinct_languages: usize,) -> f64
{
    saturating_ratio(distinct_languages, LANGUAGE_SATURATION,)
}

fn saturating_ratio(value: usize, saturation: usize,) -> f64
{
    (value as f64 / saturation as f64).min(1.0,)
}

#[cfg(test)]
mod tests
{
    use proptest::prelude::*;

    use super::*;
    use crate::snapshot::{CommitRecord, ContentsEntry, EntryKind, LanguageMap};

    fn commits(count: usize,) -> Vec<CommitRecord,>
    {
        (0..count).map(|index| CommitRecord {
            sha: format!("{index:040x}"),
        },).collect()
    }

    fn languages(count: usize,) -> LanguageMap
    {
        (0..count).map(|index| (format!("Lang{index}"), 100 * index as u64,),).collect()
    }

    #[test]
    fn empty_listing_has_no_structure()
    {
        assert_eq!(analyze_structure(&[]), StructureSummary::default());
        assert!(!detect_readme(&[]));
    }

    #[test]
    fn counts_files_and_folders_separately()
    {
        let contents = vec![
            ContentsEntry::file("Cargo.toml"),
            ContentsEntry::directory("src"),
            ContentsEntry::file("LICENSE"),
            ContentsEntry::directory("docs"),
            ContentsEntry {
                name: "vendored".to_owned(), kind: EntryKind::Other,
            },
        ];

        let summary = analyze_structure(&contents,);
        assert_eq!(summary.file_count, 2);
        assert_eq!(summary.folder_count, 2);
        assert!(!summary.has_tests);
    }

    #[test]
    fn file_names_containing_test_mark_tests()
    {
        for name in ["test_util.py", "PyTest.ini", "contest.rs", "TESTING.md"] {
            let summary = analyze_structure(&[ContentsEntry::file(name,)],);
            assert!(summary.has_tests, "{name} should count as a test marker");
        }
    }

    #[test]
    fn only_exact_directory_names_mark_tests()
    {
        for name in ["test", "Tests", "__TESTS__"] {
            assert!(analyze_structure(&[ContentsEntry::directory(name,)]).has_tests);
        }
        for name in ["testdata", "integration-tests", "spec"] {
            assert!(
                !analyze_structure(&[ContentsEntry::directory(name,)]).has_tests,
                "{name} should not count as a test directory"
            );
        }
    }

    #[test]
    fn other_entries_named_test_are_ignored()
    {
        let entry = ContentsEntry {
            name: "tests".to_owned(), kind: EntryKind::Other,
        };
        assert_eq!(analyze_structure(&[entry]), StructureSummary::default());
    }

    #[test]
    fn readme_detection_is_case_insensitive_exact_match()
    {
        assert!(detect_readme(&[ContentsEntry::file("README.md")]));
        assert!(detect_readme(&[ContentsEntry::file("readme.MD")]));
        assert!(!detect_readme(&[ContentsEntry::file("README")]));
        assert!(!detect_readme(&[ContentsEntry::file("README.rst")]));
        assert!(!detect_readme(&[ContentsEntry::file("README.md.bak")]));
    }

    #[test]
    fn commit_consistency_saturates_at_thirty()
    {
        assert_eq!(commit_consistency(0), 0.0);
        assert_eq!(commit_consistency(15), 0.5);
        assert_eq!(commit_consistency(30), 1.0);
        assert_eq!(commit_consistency(60), 1.0);

        let summary = analyze_commits(&commits(45,),);
        assert_eq!(summary.total, 45);
        assert_eq!(summary.consistency, 1.0);
    }

    #[test]
    fn language_score_saturates_at_three()
    {
        assert_eq!(language_score(&languages(0,)), 0.0);
        assert!((language_score(&languages(1,)) - 1.0 / 3.0).abs() < 1e-12);
        assert_eq!(language_score(&languages(3,)), 1.0);
        assert_eq!(language_score(&languages(10,)), 1.0);
    }

    #[test]
    fn language_score_ignores_byte_counts()
    {
        let skewed: LanguageMap =
            [("Rust".to_owned(), 1_000_000,), ("C".to_owned(), 1,), ("Shell".to_owned(), 1,),]
                .into_iter()
                .collect();
        let balanced: LanguageMap =
            [("Rust".to_owned(), 10,), ("C".to_owned(), 10,), ("Shell".to_owned(), 10,),]
                .into_iter()
                .collect();
        assert_eq!(language_score(&skewed), language_score(&balanced));
    }

    proptest! {
        #[test]
        fn commit_consistency_is_bounded_and_monotonic(count in 0usize..500) {
            let current = commit_consistency(count);
            let next = commit_consistency(count + 1);
            prop_assert!((0.0..=1.0).contains(&current));
            prop_assert!(next >= current);
        }

        #[test]
        fn language_score_is_bounded_and_monotonic(count in 0usize..50) {
            let current = language_score_for_count(count);
            let next = language_score_for_count(count + 1);
            prop_assert!((0.0..=1.0).contains(&current));
            prop_assert!(next >= current);
        }
    }
}
