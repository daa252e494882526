// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

/// GitHub REST implementation of the metadata fetcher.
///
/// Wraps an [`Octocrab`] client configured with an optional bearer token and
/// maps HTTP failures onto the analysis error taxonomy.
use std::{future::Future, time::Duration};

use octocrab::Octocrab;
use repo_grade_core::{
    CommitRecord, ContentsEntry, Error, LanguageMap, MetadataFetcher, RepositoryIdentifier,
    RepositoryInfo,
};
use serde::{Serialize, de::DeserializeOwned};
use tracing::debug;

use crate::{
    config::FetchConfig,
    error,
    retry::{RetryConfig, retry_with_backoff},
};

#[derive(Debug, Serialize,)]
struct PageQuery
{
    per_page: u8,
}

/// Metadata fetcher backed by the GitHub REST API.
#[derive(Clone,)]
pub struct GitHubFetcher
{
    client:  Octocrab,
    timeout: Duration,
    retry:   RetryConfig,
}

impl std::fmt::Debug for GitHubFetcher
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_,>,) -> std::fmt::Result
    {
        f.debug_struct("GitHubFetcher",)
            .field("timeout", &self.timeout,)
            .field("retry", &self.retry,)
            .finish_non_exhaustive()
    }
}

impl GitHubFetcher
{
    /// Builds a fetcher from configuration and an optional token.
    ///
    /// The token is taken as an explicit argument; nothing is read from the
    /// environment here.
    ///
    /// # Errors
    ///
    /// Returns [`error::Error::Service`] when the client cannot be built,
    /// for example because the base URL is not a valid URI.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use repo_grade::{FetchConfig, GitHubFetcher};
    ///
    /// # async fn example() -> Result<(), repo_grade::Error> {
    /// let fetcher = GitHubFetcher::new(&FetchConfig::default(), None,)?;
    /// let report = repo_grade_core::analyze(&fetcher, "https://github.com/octocat/hello-world",)
    ///     .await?;
    /// println!("{} scored {}", report.repository_name, report.score);
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(config: &FetchConfig, token: Option<String,>,) -> Result<Self, error::Error,>
    {
        let mut builder = Octocrab::builder().base_uri(config.api_base_url.as_str(),).map_err(
            |e| error::Error::service(format!("invalid API base URL {}: {e}", config.api_base_url),),
        )?;

        if let Some(token,) = token.filter(|value| !value.trim().is_empty(),) {
            builder = builder.personal_token(token,);
        }

        let client = builder
            .build()
            .map_err(|e| error::Error::service(format!("failed to build GitHub client: {e}"),),)?;

        Ok(Self {
            client,
            timeout: config.timeout(),
            retry: config.retry.clone(),
        },)
    }

    async fn get_json<T, P,>(&self, route: String, query: Option<&P,>,) -> Result<T, Error,>
    where
        T: DeserializeOwned,
        P: Serialize + ?Sized + Sync,
    {
        retry_with_backoff(&self.retry, &route, || {
            let route = route.as_str();
            async move {
                debug!("GET {}", route);
                with_timeout(self.timeout, route, self.client.get::<T, _, P,>(route, query,),)
                    .await?
                    .map_err(|e| map_octocrab_error(route, &e,),)
            }
        },)
        .await
    }
}

impl MetadataFetcher for GitHubFetcher
{
    async fn fetch_repo_info(&self, repository: &RepositoryIdentifier,) -> Result<RepositoryInfo, Error,>
    {
        self.get_json(
            format!("/repos/{}/{}", repository.owner(), repository.name()),
            None::<&(),>,
        )
        .await
    }

    async fn fetch_contents(
        &self,
        repository: &RepositoryIdentifier,
    ) -> Result<Vec<ContentsEntry,>, Error,>
    {
        self.get_json(
            format!("/repos/{}/{}/contents", repository.owner(), repository.name()),
            None::<&(),>,
        )
        .await
    }

    async fn fetch_commits(
        &self,
        repository: &RepositoryIdentifier,
        per_page: u8,
    ) -> Result<Vec<CommitRecord,>, Error,>
    {
        self.get_json(
            format!("/repos/{}/{}/commits", repository.owner(), repository.name()),
            Some(&PageQuery {
                per_page,
            },),
        )
        .await
    }

    async fn fetch_languages(&self, repository: &RepositoryIdentifier,) -> Result<LanguageMap, Error,>
    {
        self.get_json(
            format!("/repos/{}/{}/languages", repository.owner(), repository.name()),
            None::<&(),>,
        )
        .await
    }
}

async fn with_timeout<T,>(
    timeout: Duration,
    route: &str,
    future: impl Future<Output = T,>,
) -> Result<T, Error,>
{
    tokio::time::timeout(timeout, future,).await.map_err(|_| Error::timeout(route,),)
}

/// Maps an octocrab failure onto the analysis taxonomy.
///
/// 404 means the repository is absent or private; 403 and 429 are what
/// GitHub answers when the rate limit is exhausted or the token is rejected.
fn map_octocrab_error(route: &str, error: &octocrab::Error,) -> Error
{
    match error {
        octocrab::Error::GitHub {
            source, ..
        } => classify_status(route, source.status_code.as_u16(), &source.message,),
        other => Error::fetch(format!("{route}: {other}"),),
    }
}

fn classify_status(route: &str, status: u16, message: &str,) -> Error
{
    match status {
        404 => Error::not_found(route,),
        403 | 429 => Error::rate_limited(format!("{status} {message}"),),
        _ => Error::fetch(format!("{route} returned {status}: {message}"),),
    }
}
