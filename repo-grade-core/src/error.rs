#![allow(non_shorthand_field_patterns)]
// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Error taxonomy for repository analysis.
//!
//! Only two places can fail: parsing the repository URL and talking to the
//! metadata source. The analyzers, the aggregator and the roadmap generator
//! are total functions and never construct an [`Error`].

/// Unified error type surfaced by [`analyze`](crate::analyze).
#[derive(Debug, masterror::Error,)]
pub enum Error
{
    /// The input did not contain a `github.com/<owner>/<repo>` path.
    #[error("invalid GitHub repository URL: {input:?}")]
    InvalidRepositoryUrl
    {
        /// Raw input as supplied by the caller.
        input: String,
    },
    /// The repository does not exist or is private.
    #[error("repository not found or private: {resource}")]
    NotFound
    {
        /// API resource that returned the miss.
        resource: String,
    },
    /// The API refused the request because of rate limiting or an invalid
    /// token.
    #[error("rate limit exceeded or token invalid: {message}")]
    RateLimited
    {
        /// Message reported by the API.
        message: String,
    },
    /// The request did not complete within the configured timeout.
    #[error("GitHub API timed out while fetching {operation}")]
    NetworkTimeout
    {
        /// Operation that exceeded the deadline.
        operation: String,
    },
    /// Any other failure reported by the metadata source.
    #[error("GitHub API error: {message}")]
    Fetch
    {
        /// Human readable description of the failure.
        message: String,
    },
}

impl Error
{
    /// Constructs an [`Error::InvalidRepositoryUrl`] for the given input.
    pub fn invalid_url<I,>(input: I,) -> Self
    where
        I: Into<String,>,
    {
        Self::InvalidRepositoryUrl {
            input: input.into(),
        }
    }

    /// Constructs an [`Error::NotFound`] for the given resource.
    pub fn not_found<R,>(resource: R,) -> Self
    where
        R: Into<String,>,
    {
        Self::NotFound {
            resource: resource.into(),
        }
    }

    /// Constructs an [`Error::RateLimited`] with the API message.
    pub fn rate_limited<M,>(message: M,) -> Self
    where
        M: Into<String,>,
    {
        Self::RateLimited {
            message: message.into(),
        }
    }

    /// Constructs an [`Error::NetworkTimeout`] naming the stalled operation.
    pub fn timeout<O,>(operation: O,) -> Self
    where
        O: Into<String,>,
    {
        Self::NetworkTimeout {
            operation: operation.into(),
        }
    }

    /// Constructs a generic [`Error::Fetch`].
    pub fn fetch<M,>(message: M,) -> Self
    where
        M: Into<String,>,
    {
        Self::Fetch {
            message: message.into(),
        }
    }

    /// Returns `true` for failures that may succeed when repeated.
    ///
    /// Missing repositories and rate limits are never transient: repeating
    /// the request cannot change the answer before the limit window resets.
    pub fn is_transient(&self,) -> bool
    {
        matches!(self, Self::NetworkTimeout { .. } | Self::Fetch { .. })
    }
}
