// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Extraction of `(owner, repository)` pairs from GitHub URLs.
//!
//! Parsing is a pure function: no network access happens here, so a
//! malformed input is rejected before any metadata request is issued.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::error::Error;

static REPOSITORY_PATTERN: LazyLock<Regex,> = LazyLock::new(|| {
    Regex::new(r"github\.com/([^/\s?#]+)/([^/\s?#]+)",).expect("valid repository pattern",)
},);

/// Owner and name of a hosted repository.
///
/// Both components are non-empty and never contain a path separator.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize,)]
pub struct RepositoryIdentifier
{
    owner: String,
    name:  String,
}

impl RepositoryIdentifier
{
    /// Account or organization that owns the repository.
    pub fn owner(&self,) -> &str
    {
        &self.owner
    }

    /// Repository name without any `.git` suffix.
    pub fn name(&self,) -> &str
    {
        &self.name
    }
}

impl std::fmt::Display for RepositoryIdentifier
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_,>,) -> std::fmt::Result
    {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// Parses a repository URL into a [`RepositoryIdentifier`].
///
/// Surrounding whitespace, trailing slashes and a trailing `.git` suffix are
/// ignored. Any path after the repository segment (for example
/// `/tree/main`) is discarded.
///
/// # Errors
///
/// Returns [`Error::InvalidRepositoryUrl`] when the input does not contain
/// `github.com/` followed by two non-empty path segments, or when either
/// segment is `.` or `..`.
///
/// # Examples
///
/// ```
/// use repo_grade_core::parse_repository_url;
///
/// let id = parse_repository_url(" https://github.com/octocat/hello-world.git ",)?;
/// assert_eq!(id.owner(), "octocat");
/// assert_eq!(id.name(), "hello-world");
/// # Ok::<(), repo_grade_core::Error>(())
/// ```
pub fn parse_repository_url(input: &str,) -> Result<RepositoryIdentifier, Error,>
{
    let trimmed = input.trim().trim_end_matches('/',);
    let trimmed = trimmed.strip_suffix(".git",).unwrap_or(trimmed,);

    let captures =
        REPOSITORY_PATTERN.captures(trimmed,).ok_or_else(|| Error::invalid_url(input,),)?;

    let owner = &captures[1];
    let name = captures[2].strip_suffix(".git",).unwrap_or(&captures[2],);

    if is_invalid_segment(owner,) || is_invalid_segment(name,) {
        return Err(Error::invalid_url(input,),);
    }

    Ok(RepositoryIdentifier {
        owner: owner.to_owned(),
        name:  name.to_owned(),
    },)
}

/// Empty and dot segments would change the meaning of the API route.
fn is_invalid_segment(segment: &str,) -> bool
{
    matches!(segment, "" | "." | "..")
}
