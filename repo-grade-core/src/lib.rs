//! Heuristic maturity scoring for hosted source repositories.
//!
//! The crate turns raw repository metadata (root listing, recent commits,
//! language breakdown) into a deterministic 0-100 score, a maturity level and
//! an ordered improvement roadmap. All analysis is pure; network access is
//! delegated to a caller-supplied [`MetadataFetcher`].

mod analyze;
mod error;
mod report;
mod roadmap;
mod score;
mod signals;
mod snapshot;
mod url;

pub use analyze::{
    MAX_COMMITS_PER_PAGE, MetadataFetcher, analyze, analyze_with_page_size, evaluate,
    fetch_snapshot,
};
pub use error::Error;
pub use report::{RenderedReport, summary_line};
pub use roadmap::{build_roadmap, roadmap_steps};
pub use score::{
    MaturityLevel, ScoreResult, calculate_score, round_half_up, structure_sub_score,
};
pub use signals::{
    AnalysisSignals, CommitSummary, StructureSummary, analyze_commits, analyze_structure,
    commit_consistency, detect_readme, language_score,
};
pub use snapshot::{
    CommitRecord, ContentsEntry, EntryKind, LanguageMap, RepositoryInfo, RepositorySnapshot,
};
pub use url::{RepositoryIdentifier, parse_repository_url};
