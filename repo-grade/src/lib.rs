//! GitHub-backed front end for repository maturity scoring.
//!
//! The library wires the pure analysis engine from [`repo_grade_core`] to the
//! GitHub REST API through [`GitHubFetcher`], loads fetcher configuration
//! from YAML documents, and renders reports as text or JSON. Credentials are
//! passed explicitly; no module reads the process environment.

mod config;
mod error;
mod github;
mod output;
mod progress;
pub mod retry;

pub use config::{DEFAULT_API_BASE_URL, FetchConfig, load_config};
pub use error::{Error, io_error};
pub use github::GitHubFetcher;
pub use output::{OutputFormat, write_json_report, write_report, write_text_report};
pub use progress::ProgressFetcher;
