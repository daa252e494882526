// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Fetcher configuration loaded from YAML and overridden by CLI flags.
//!
//! Every field has a default so an empty document (or no document at all)
//! yields a working configuration. The bearer token is not part of the file;
//! it is resolved at the process edge and handed to
//! [`GitHubFetcher::new`](crate::GitHubFetcher::new) explicitly.

use std::{fs, path::Path, time::Duration};

use repo_grade_core::MAX_COMMITS_PER_PAGE;
use serde::{Deserialize, Serialize};

use crate::{
    error::{self, Error},
    retry::RetryConfig,
};

/// Public GitHub REST endpoint.
pub const DEFAULT_API_BASE_URL: &str = "https://api.github.com";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Settings for the GitHub metadata fetcher.
///
/// # Examples
///
/// ```
/// use repo_grade::FetchConfig;
///
/// let config = FetchConfig::from_yaml("timeout_secs: 30\n",)?;
/// assert_eq!(config.timeout_secs, 30);
/// assert_eq!(config.commits_per_page, 100);
/// # Ok::<(), repo_grade::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize,)]
#[serde(default, deny_unknown_fields)]
pub struct FetchConfig
{
    /// Base URL of the REST API.
    #[serde(alias = "api-base-url", alias = "apiBaseUrl")]
    pub api_base_url:     String,
    /// Per-request deadline in seconds.
    #[serde(alias = "timeout-secs", alias = "timeoutSecs")]
    pub timeout_secs:     u64,
    /// Size of the recent commit window, `1..=100`.
    #[serde(alias = "commits-per-page", alias = "commitsPerPage")]
    pub commits_per_page: u8,
    /// Retry policy for transient failures.
    pub retry:            RetryConfig,
}

impl Default for FetchConfig
{
    fn default() -> Self
    {
        Self {
            api_base_url:     DEFAULT_API_BASE_URL.to_owned(),
            timeout_secs:     DEFAULT_TIMEOUT_SECS,
            commits_per_page: MAX_COMMITS_PER_PAGE,
            retry:            RetryConfig::default(),
        }
    }
}

impl FetchConfig
{
    /// Parses and validates a YAML document.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parse`] for malformed YAML and [`Error::Validation`]
    /// when a value is out of range.
    pub fn from_yaml(source: &str,) -> Result<Self, Error,>
    {
        let config: Self = if source.trim().is_empty() {
            Self::default()
        } else {
            serde_yaml::from_str(source,)?
        };
        config.validate()?;
        Ok(config,)
    }

    /// Per-request deadline.
    pub fn timeout(&self,) -> Duration
    {
        Duration::from_secs(self.timeout_secs,)
    }

    /// Checks value ranges.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] describing the first offending field.
    pub fn validate(&self,) -> Result<(), Error,>
    {
        if self.api_base_url.trim().is_empty() {
            return Err(Error::validation("api_base_url cannot be empty",),);
        }
        if self.timeout_secs == 0 {
            return Err(Error::validation("timeout_secs must be greater than zero",),);
        }
        if !(1..=MAX_COMMITS_PER_PAGE).contains(&self.commits_per_page,) {
            return Err(Error::validation(format!(
                "commits_per_page must be between 1 and {MAX_COMMITS_PER_PAGE}"
            ),),);
        }
        if self.retry.max_attempts == 0 {
            return Err(Error::validation("retry.max_attempts must be at least 1",),);
        }
        if self.retry.backoff_factor.is_nan() || self.retry.backoff_factor < 1.0 {
            return Err(Error::validation("retry.backoff_factor must be at least 1.0",),);
        }

        Ok((),)
    }
}

/// Loads fetcher configuration from a YAML file.
///
/// # Errors
///
/// Returns [`Error::Io`] when the file cannot be read, otherwise see
/// [`FetchConfig::from_yaml`].
pub fn load_config(path: &Path,) -> Result<FetchConfig, Error,>
{
    let contents = fs::read_to_string(path,).map_err(|source| error::io_error(path, source,),)?;
    FetchConfig::from_yaml(&contents,)
}
