// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Metadata source boundary and the end-to-end analysis entry point.
//!
//! The core never performs I/O itself. Callers provide a
//! [`MetadataFetcher`] implementation (the CLI ships one backed by the
//! GitHub REST API) and [`analyze`] drives it, then derives signals, score
//! and roadmap from the returned snapshot.

use std::future::Future;

use tracing::{debug, info};

use crate::{
    error::Error,
    report::RenderedReport,
    signals::AnalysisSignals,
    snapshot::{CommitRecord, ContentsEntry, LanguageMap, RepositoryInfo, RepositorySnapshot},
    url::{RepositoryIdentifier, parse_repository_url},
};

/// Source of raw repository metadata.
///
/// Every method may fail with [`Error::NotFound`], [`Error::RateLimited`],
/// [`Error::NetworkTimeout`] or [`Error::Fetch`]. Implementations own their
/// credentials, timeouts and retry policy.
pub trait MetadataFetcher
{
    /// Fetches the repository description.
    fn fetch_repo_info(
        &self,
        repository: &RepositoryIdentifier,
    ) -> impl Future<Output = Result<RepositoryInfo, Error,>,> + Send;

    /// Fetches the top-level contents listing.
    fn fetch_contents(
        &self,
        repository: &RepositoryIdentifier,
    ) -> impl Future<Output = Result<Vec<ContentsEntry,>, Error,>,> + Send;

    /// Fetches up to `per_page` of the most recent commits.
    fn fetch_commits(
        &self,
        repository: &RepositoryIdentifier,
        per_page: u8,
    ) -> impl Future<Output = Result<Vec<CommitRecord,>, Error,>,> + Send;

    /// Fetches the language byte-count breakdown.
    fn fetch_languages(
        &self,
        repository: &RepositoryIdentifier,
    ) -> impl Future<Output = Result<LanguageMap, Error,>,> + Send;
}

/// Upper bound of the commit window requested from the fetcher.
pub const MAX_COMMITS_PER_PAGE: u8 = 100;

/// Fetches all four metadata records, aborting on the first failure.
///
/// # Errors
///
/// Propagates fetcher errors unchanged.
pub async fn fetch_snapshot<F,>(
    fetcher: &F,
    repository: &RepositoryIdentifier,
    commits_per_page: u8,
) -> Result<RepositorySnapshot, Error,>
where
    F: MetadataFetcher,
{
    let per_page = commits_per_page.clamp(1, MAX_COMMITS_PER_PAGE,);

    let info = fetcher.fetch_repo_info(repository,).await?;
    let contents = fetcher.fetch_contents(repository,).await?;
    let commits = fetcher.fetch_commits(repository, per_page,).await?;
    let languages = fetcher.fetch_languages(repository,).await?;

    debug!(
        "Fetched {} entries, {} commits and {} languages for {}",
        contents.len(),
        commits.len(),
        languages.len(),
        repository
    );

    Ok(RepositorySnapshot {
        info,
        contents,
        commits,
        languages,
    },)
}

/// Derives the full report from an already fetched snapshot.
pub fn evaluate(repository: &RepositoryIdentifier, snapshot: &RepositorySnapshot,) -> RenderedReport
{
    let signals = AnalysisSignals::from_snapshot(snapshot,);
    let report = RenderedReport::build(snapshot.info.name.clone(), repository, signals,);

    info!("Scored {} at {:.2} ({})", repository, report.score, report.level);

    report
}

/// Parses the URL, fetches metadata and produces the report.
///
/// The URL is validated before the fetcher is touched, so malformed input
/// never causes network traffic.
///
/// # Errors
///
/// Returns [`Error::InvalidRepositoryUrl`] for malformed input and propagates
/// any fetcher error verbatim. No partial report is produced.
pub async fn analyze<F,>(fetcher: &F, repository_url: &str,) -> Result<RenderedReport, Error,>
where
    F: MetadataFetcher,
{
    analyze_with_page_size(fetcher, repository_url, MAX_COMMITS_PER_PAGE,).await
}

/// [`analyze`] with an explicit commit window.
///
/// # Errors
///
/// See [`analyze`].
pub async fn analyze_with_page_size<F,>(
    fetcher: &F,
    repository_url: &str,
    commits_per_page: u8,
) -> Result<RenderedReport, Error,>
where
    F: MetadataFetcher,
{
    let repository = parse_repository_url(repository_url,)?;
    debug!("Analyzing {}", repository);

    let snapshot = fetch_snapshot(fetcher, &repository, commits_per_page,).await?;

    Ok(evaluate(&repository, &snapshot,),)
}
