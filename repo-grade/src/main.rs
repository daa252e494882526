//! Command-line interface for the repo-grade binary.
//!
//! The CLI analyzes one public GitHub repository and prints its score,
//! maturity level, summary and roadmap. Invoking the binary with a bare URL
//! behaves like the `analyze` subcommand.

use std::{io, path::PathBuf, process};

use clap::{ArgAction, Args, Parser, Subcommand};
use repo_grade::{
    Error, FetchConfig, GitHubFetcher, OutputFormat, ProgressFetcher, load_config, write_report,
};
use repo_grade_core::{RenderedReport, analyze_with_page_size};
use tracing_subscriber::EnvFilter;

/// Command line interface for scoring GitHub repositories.
#[derive(Debug, Parser,)]
#[command(
    name = "repo-grade",
    version,
    about = "Score a public GitHub repository and suggest an improvement roadmap"
)]
/// Top-level CLI options parsed from user input.
struct Cli
{
    #[command(subcommand)]
    command: Option<Command,>,

    /// Repository URL analyzed when no subcommand is given.
    #[arg(value_name = "URL")]
    url: Option<String,>,

    #[command(flatten)]
    options: ReportOptions,
}

#[derive(Debug, Subcommand,)]
/// Supported commands exposed by the CLI.
enum Command
{
    /// Analyze a repository and print its evaluation.
    Analyze(AnalyzeArgs,),
}

#[derive(Debug, Args,)]
/// Arguments accepted by the `analyze` subcommand.
struct AnalyzeArgs
{
    /// Repository URL, for example https://github.com/owner/repo.
    #[arg(value_name = "URL")]
    url: String,
}

/// Options shared by every invocation form.
#[derive(Debug, Args, Default,)]
struct ReportOptions
{
    /// Output format.
    #[arg(long = "format", value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    /// Indent JSON output.
    #[arg(long = "pretty", action = ArgAction::SetTrue, global = true)]
    pretty: bool,

    /// GitHub token used to raise the API rate limit.
    #[arg(long = "token", env = "GITHUB_TOKEN", hide_env_values = true, global = true)]
    token: Option<String,>,

    /// YAML file with fetcher settings.
    #[arg(long = "config", value_name = "PATH", global = true)]
    config: Option<PathBuf,>,

    /// Override the REST API base URL.
    #[arg(long = "api-base-url", value_name = "URL", global = true)]
    api_base_url: Option<String,>,

    /// Override the per-request timeout in seconds.
    #[arg(long = "timeout-secs", value_name = "SECONDS", global = true)]
    timeout_secs: Option<u64,>,

    /// Emit debug logs on stderr.
    #[arg(short = 'v', long = "verbose", action = ArgAction::SetTrue, global = true)]
    verbose: bool,

    /// Suppress the progress spinner.
    #[arg(short = 'q', long = "quiet", action = ArgAction::SetTrue, global = true)]
    quiet: bool,
}

impl ReportOptions
{
    fn show_spinner(&self,) -> bool
    {
        !self.quiet && self.format == OutputFormat::Text
    }
}

/// Entry point that reports errors and sets the appropriate exit status.
#[tokio::main]
async fn main()
{
    if let Err(error,) = run().await {
        eprintln!("{}", error.to_display_string());
        process::exit(1,);
    }
}

/// Executes the CLI using parsed arguments.
///
/// # Errors
///
/// Propagates URL, configuration, fetch and output errors.
async fn run() -> Result<(), Error,>
{
    let cli = Cli::parse();
    init_tracing(cli.options.verbose,);

    let url = resolve_url(&cli,)?;
    let config = resolve_config(&cli.options,)?;
    let report = analyze_repository(url, &config, &cli.options,).await?;

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_report(&mut handle, &report, cli.options.format, cli.options.pretty,)
}

fn init_tracing(verbose: bool,)
{
    let default_directive = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive,),);

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter,)
        .with_writer(io::stderr,)
        .with_target(false,)
        .try_init();
}

fn resolve_url(cli: &Cli,) -> Result<&str, Error,>
{
    match &cli.command {
        Some(Command::Analyze(args,),) => Ok(args.url.as_str(),),
        None => cli
            .url
            .as_deref()
            .ok_or_else(|| Error::validation("missing required <URL> argument",),),
    }
}

/// Loads the optional YAML file and applies command line overrides.
fn resolve_config(options: &ReportOptions,) -> Result<FetchConfig, Error,>
{
    let mut config = match options.config.as_deref() {
        Some(path,) => load_config(path,)?,
        None => FetchConfig::default(),
    };

    if let Some(api_base_url,) = options.api_base_url.as_ref() {
        config.api_base_url = api_base_url.clone();
    }
    if let Some(timeout_secs,) = options.timeout_secs {
        config.timeout_secs = timeout_secs;
    }

    config.validate()?;
    Ok(config,)
}

async fn analyze_repository(
    url: &str,
    config: &FetchConfig,
    options: &ReportOptions,
) -> Result<RenderedReport, Error,>
{
    let fetcher = GitHubFetcher::new(config, options.token.clone(),)?;

    let report = if options.show_spinner() {
        let fetcher = ProgressFetcher::new(fetcher,);
        let result = analyze_with_page_size(&fetcher, url, config.commits_per_page,).await;
        fetcher.finish();
        result?
    } else {
        analyze_with_page_size(&fetcher, url, config.commits_per_page,).await?
    };

    Ok(report,)
}

#[cfg(test)]
mod tests
{
    use std::{fs, path::Path};

    use clap::Parser;
    use repo_grade::{Error, OutputFormat};
    use tempfile::tempdir;

    use super::{Cli, Command, ReportOptions, analyze_repository, resolve_config, resolve_url};

    #[test]
    fn cli_accepts_bare_url_invocation()
    {
        let cli = Cli::try_parse_from([env!("CARGO_PKG_NAME"), "https://github.com/octocat/hello",],)
            .expect("failed to parse CLI",);

        assert!(cli.command.is_none());
        assert_eq!(resolve_url(&cli,).expect("url",), "https://github.com/octocat/hello");
        assert_eq!(cli.options.format, OutputFormat::Text);
        assert!(!cli.options.pretty);
    }

    #[test]
    fn analyze_subcommand_accepts_trailing_options()
    {
        let cli = Cli::try_parse_from([
            env!("CARGO_PKG_NAME"),
            "analyze",
            "https://github.com/octocat/hello",
            "--format",
            "json",
            "--pretty",
            "--timeout-secs",
            "3",
        ],)
        .expect("failed to parse CLI",);

        match cli.command.as_ref().expect("missing analyze command",) {
            Command::Analyze(args,) => assert_eq!(args.url, "https://github.com/octocat/hello"),
        }
        assert_eq!(cli.options.format, OutputFormat::Json);
        assert!(cli.options.pretty);
        assert_eq!(cli.options.timeout_secs, Some(3));
        assert!(!cli.options.show_spinner());
    }

    #[test]
    fn missing_url_is_a_validation_error()
    {
        let cli = Cli::try_parse_from([env!("CARGO_PKG_NAME")],).expect("failed to parse CLI",);

        match resolve_url(&cli,) {
            Err(Error::Validation {
                message,
            },) => assert_eq!(message, "missing required <URL> argument"),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn rejects_unknown_format()
    {
        let result = Cli::try_parse_from([
            env!("CARGO_PKG_NAME"),
            "https://github.com/a/b",
            "--format",
            "yaml",
        ],);
        assert!(result.is_err());
    }

    #[test]
    fn flags_override_config_file()
    {
        let temp = tempdir().expect("failed to create tempdir",);
        let path = temp.path().join("repo-grade.yaml",);
        fs::write(&path, "timeout_secs: 30\ncommits_per_page: 40\n",).expect("failed to write",);

        let options = ReportOptions {
            config: Some(path,),
            timeout_secs: Some(2,),
            api_base_url: Some("https://ghe.example.com/api/v3".to_owned(),),
            ..ReportOptions::default()
        };

        let config = resolve_config(&options,).expect("config should resolve",);
        assert_eq!(config.timeout_secs, 2);
        assert_eq!(config.commits_per_page, 40);
        assert_eq!(config.api_base_url, "https://ghe.example.com/api/v3");
    }

    #[test]
    fn zero_timeout_override_is_rejected()
    {
        let options = ReportOptions {
            timeout_secs: Some(0,),
            ..ReportOptions::default()
        };

        assert!(matches!(resolve_config(&options), Err(Error::Validation { .. })));
    }

    #[test]
    fn missing_config_file_is_reported()
    {
        let options = ReportOptions {
            config: Some(Path::new("/nonexistent/repo-grade.yaml",).to_path_buf(),),
            ..ReportOptions::default()
        };

        assert!(matches!(resolve_config(&options), Err(Error::Io { .. })));
    }

    #[tokio::test]
    async fn malformed_url_fails_without_network()
    {
        let options = ReportOptions {
            quiet: true,
            ..ReportOptions::default()
        };
        let config = resolve_config(&options,).expect("defaults",);

        let error = analyze_repository("not-a-url", &config, &options,)
            .await
            .expect_err("expected invalid URL",);

        match error {
            Error::Analysis {
                source: repo_grade_core::Error::InvalidRepositoryUrl {
                    input,
                },
            } => assert_eq!(input, "not-a-url"),
            other => panic!("unexpected error variant: {other:?}"),
        }
    }
}
