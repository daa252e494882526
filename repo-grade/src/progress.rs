// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Spinner feedback around any metadata fetcher.
//!
//! The wrapper updates an [`indicatif`] spinner before each request and
//! forwards the call unchanged, so errors and results are identical to the
//! wrapped fetcher.

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use repo_grade_core::{
    CommitRecord, ContentsEntry, Error, LanguageMap, MetadataFetcher, RepositoryIdentifier,
    RepositoryInfo,
};

/// Fetcher decorator that reports progress on a spinner.
#[derive(Debug,)]
pub struct ProgressFetcher<F,>
{
    inner:   F,
    spinner: ProgressBar,
}

impl<F,> ProgressFetcher<F,>
{
    /// Wraps `inner` with a spinner drawn on stderr.
    pub fn new(inner: F,) -> Self
    {
        let spinner = ProgressBar::new_spinner();
        if let Ok(style,) =
            ProgressStyle::default_spinner().template("{spinner:.yellow} [{elapsed_precise}] {msg}",)
        {
            spinner.set_style(style,);
        }
        spinner.enable_steady_tick(Duration::from_millis(100,),);

        Self::with_spinner(inner, spinner,)
    }

    /// Wraps `inner` with a caller-provided progress bar.
    ///
    /// Passing [`ProgressBar::hidden`] disables all drawing.
    pub fn with_spinner(inner: F, spinner: ProgressBar,) -> Self
    {
        Self {
            inner,
            spinner,
        }
    }

    /// Clears the spinner and returns the wrapped fetcher.
    pub fn finish(self,) -> F
    {
        self.spinner.finish_and_clear();
        self.inner
    }

    /// Last message shown on the spinner.
    pub fn message(&self,) -> String
    {
        self.spinner.message()
    }
}

impl<F,> MetadataFetcher for ProgressFetcher<F,>
where
    F: MetadataFetcher + Sync,
{
    async fn fetch_repo_info(&self, repository: &RepositoryIdentifier,) -> Result<RepositoryInfo, Error,>
    {
        self.spinner.set_message(format!("Fetching repository info for {repository}..."),);
        self.inner.fetch_repo_info(repository,).await
    }

    async fn fetch_contents(
        &self,
        repository: &RepositoryIdentifier,
    ) -> Result<Vec<ContentsEntry,>, Error,>
    {
        self.spinner.set_message(format!("Listing contents of {repository}..."),);
        self.inner.fetch_contents(repository,).await
    }

    async fn fetch_commits(
        &self,
        repository: &RepositoryIdentifier,
        per_page: u8,
    ) -> Result<Vec<CommitRecord,>, Error,>
    {
        self.spinner.set_message(format!("Fetching up to {per_page} commits for {repository}..."),);
        self.inner.fetch_commits(repository, per_page,).await
    }

    async fn fetch_languages(&self, repository: &RepositoryIdentifier,) -> Result<LanguageMap, Error,>
    {
        self.spinner.set_message(format!("Fetching languages for {repository}..."),);
        self.inner.fetch_languages(repository,).await
    }
}

#[cfg(test)]
mod tests
{
    use indicatif::ProgressBar;
    use repo_grade_core::{
        CommitRecord, ContentsEntry, Error, LanguageMap, MetadataFetcher, RepositoryIdentifier,
        RepositoryInfo, parse_repository_url,
    };

    use super::ProgressFetcher;

    struct StaticFetcher;

    impl MetadataFetcher for StaticFetcher
    {
        async fn fetch_repo_info(
            &self,
            repository: &RepositoryIdentifier,
        ) -> Result<RepositoryInfo, Error,>
        {
            Ok(RepositoryInfo {
                name:           repository.name().to_owned(),
                full_name:      Some(repository.to_string(),),
                description:    None,
                default_branch: Some("main".to_owned(),),
            },)
        }

        async fn fetch_contents(
            &self,
            _repository: &RepositoryIdentifier,
        ) -> Result<Vec<ContentsEntry,>, Error,>
        {
            Ok(vec![ContentsEntry::file("README.md",)],)
        }

        async fn fetch_commits(
            &self,
            _repository: &RepositoryIdentifier,
            _per_page: u8,
        ) -> Result<Vec<CommitRecord,>, Error,>
        {
            Err(Error::timeout("commits",),)
        }

        async fn fetch_languages(
            &self,
            _repository: &RepositoryIdentifier,
        ) -> Result<LanguageMap, Error,>
        {
            Ok(LanguageMap::new(),)
        }
    }

    #[tokio::test]
    async fn forwards_results_and_updates_message()
    {
        let id = parse_repository_url("https://github.com/octocat/hello",).expect("valid URL",);
        let fetcher = ProgressFetcher::with_spinner(StaticFetcher, ProgressBar::hidden(),);

        let info = fetcher.fetch_repo_info(&id,).await.expect("info",);
        assert_eq!(info.name, "hello");

        let contents = fetcher.fetch_contents(&id,).await.expect("contents",);
        assert_eq!(contents.len(), 1);
        assert_eq!(fetcher.message(), "Listing contents of octocat/hello...");
    }

    #[tokio::test]
    async fn forwards_errors_unchanged()
    {
        let id = parse_repository_url("https://github.com/octocat/hello",).expect("valid URL",);
        let fetcher = ProgressFetcher::with_spinner(StaticFetcher, ProgressBar::hidden(),);

        let error = fetcher.fetch_commits(&id, 100,).await.expect_err("timeout",);
        assert!(matches!(error, Error::NetworkTimeout { .. }));
        assert_eq!(fetcher.message(), "Fetching up to 100 commits for octocat/hello...");

        let _ = fetcher.finish();
    }
}
