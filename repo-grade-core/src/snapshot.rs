// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Raw repository metadata as returned by the hosting platform.
//!
//! These records deserialize directly from the GitHub REST payloads. Fields
//! the analyzers do not consume are either omitted or kept optional so that
//! fixtures stay small.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Repository description returned by `GET /repos/{owner}/{repo}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize,)]
pub struct RepositoryInfo
{
    /// Repository name as displayed by the platform.
    pub name:           String,
    /// `owner/name` as reported by the platform.
    #[serde(default)]
    pub full_name:      Option<String,>,
    /// Free-form description, if any.
    #[serde(default)]
    pub description:    Option<String,>,
    /// Default branch name.
    #[serde(default)]
    pub default_branch: Option<String,>,
}

/// Kind of a top-level contents entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize,)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind
{
    /// Regular file.
    File,
    /// Directory.
    #[serde(rename = "dir")]
    Directory,
    /// Symlinks, submodules and anything else the platform reports.
    #[serde(other)]
    Other,
}

/// One entry of the repository root listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize,)]
pub struct ContentsEntry
{
    /// Entry name relative to the repository root.
    pub name: String,
    /// Entry kind.
    #[serde(rename = "type")]
    pub kind: EntryKind,
}

impl ContentsEntry
{
    /// Creates a file entry.
    pub fn file<N,>(name: N,) -> Self
    where
        N: Into<String,>,
    {
        Self {
            name: name.into(), kind: EntryKind::File,
        }
    }

    /// Creates a directory entry.
    pub fn directory<N,>(name: N,) -> Self
    where
        N: Into<String,>,
    {
        Self {
            name: name.into(), kind: EntryKind::Directory,
        }
    }
}

/// A commit from the recent history listing.
///
/// Only the number of records matters for scoring; the SHA is kept for
/// diagnostics.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize,)]
pub struct CommitRecord
{
    /// Commit hash.
    #[serde(default)]
    pub sha: String,
}

/// Language name to byte count, as returned by
/// `GET /repos/{owner}/{repo}/languages`.
pub type LanguageMap = BTreeMap<String, u64,>;

/// Everything fetched for a single analysis run.
#[derive(Debug, Clone, PartialEq, Eq,)]
pub struct RepositorySnapshot
{
    /// Repository description.
    pub info:      RepositoryInfo,
    /// Top-level contents listing in source order.
    pub contents:  Vec<ContentsEntry,>,
    /// Most recent commits, newest first.
    pub commits:   Vec<CommitRecord,>,
    /// Language breakdown.
    pub languages: LanguageMap,
}

#[cfg(test)]
mod tests
{
    use super::{ContentsEntry, EntryKind, LanguageMap, RepositoryInfo};

    #[test]
    fn contents_entries_deserialize_from_api_payload()
    {
        let payload = r#"[
            {"name": "README.md", "type": "file", "size": 120, "path": "README.md"},
            {"name": "src", "type": "dir", "size": 0, "path": "src"},
            {"name": "vendor", "type": "submodule", "path": "vendor"},
            {"name": "latest", "type": "symlink", "path": "latest"}
        ]"#;

        let entries: Vec<ContentsEntry,> =
            serde_json::from_str(payload,).expect("valid contents payload",);

        assert_eq!(entries.len(), 4);
        assert_eq!(entries[0], ContentsEntry::file("README.md"));
        assert_eq!(entries[1], ContentsEntry::directory("src"));
        assert_eq!(entries[2].kind, EntryKind::Other);
        assert_eq!(entries[3].kind, EntryKind::Other);
    }

    #[test]
    fn repository_info_ignores_unknown_fields()
    {
        let payload = r#"{"id": 1, "name": "hello", "full_name": "octocat/hello", "private": false}"#;
        let info: RepositoryInfo = serde_json::from_str(payload,).expect("valid repo payload",);

        assert_eq!(info.name, "hello");
        assert_eq!(info.full_name.as_deref(), Some("octocat/hello"));
        assert!(info.description.is_none());
    }

    #[test]
    fn language_map_keeps_keys_unique_and_sorted()
    {
        let payload = r#"{"Rust": 9000, "C": 12, "Shell": 340}"#;
        let languages: LanguageMap = serde_json::from_str(payload,).expect("valid languages",);

        let keys: Vec<&str,> = languages.keys().map(String::as_str,).collect();
        assert_eq!(keys, ["C", "Rust", "Shell"]);
    }
}
