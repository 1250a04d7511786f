mod commands;
mod core;
mod files;
mod github;
mod ui;
mod utils;

use clap::builder::FalseyValueParser;
use clap::{Args, Parser, Subcommand};
use commands::ReleaseFlags;
use core::context::{ApiSettings, DEFAULT_API_URL, DEFAULT_UPLOADS_URL, RunContext};
use core::error::{GreaseError, print_error};
use github::GitHubClient;
use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

/// Creates and updates releases on GitHub with assets
#[derive(Parser)]
#[command(name = "grease")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
#[command(styles = get_styles())]
struct Cli {
  /// Print verbose statements about what grease is doing
  #[arg(short, long, global = true, env = "DEBUG", value_parser = FalseyValueParser::new())]
  debug: bool,

  /// Prevent changes from being made; use with --debug to see what would change
  #[arg(short = 'n', long, global = true)]
  dry_run: bool,

  /// GitHub REST API base URL (GitHub Enterprise: https://HOST/api/v3)
  #[arg(long, global = true, env = "GITHUB_API_URL", default_value = DEFAULT_API_URL)]
  api_url: String,

  /// GitHub upload API base URL (GitHub Enterprise: https://HOST/api/uploads)
  #[arg(long, global = true, env = "GITHUB_UPLOADS_URL", default_value = DEFAULT_UPLOADS_URL)]
  uploads_url: String,

  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// Create a release on GitHub
  ///
  /// Creates a new GitHub release identified by TAG on the repository
  /// identified by REPO using the COMMITISH identifier.
  CreateRelease {
    /// REPO TAG COMMITISH
    #[arg(value_name = "REPO TAG COMMITISH")]
    args: Vec<String>,
    #[command(flatten)]
    release: ReleaseArgs,
    #[command(flatten)]
    auth: AuthArgs,
  },

  /// Update a release on GitHub
  ///
  /// Updates the GitHub release identified by TAG on the repository
  /// identified by REPO based on the flags passed on the command line.
  UpdateRelease {
    /// REPO TAG
    #[arg(value_name = "REPO TAG")]
    args: Vec<String>,
    #[command(flatten)]
    release: ReleaseArgs,
    #[command(flatten)]
    auth: AuthArgs,
  },

  /// Upload assets to an existing release on GitHub
  ///
  /// Takes all files found using the glob pattern at GLOB_PATTERN and uploads
  /// them as assets for the GitHub release identified by TAG on the
  /// repository identified by REPO.
  UploadAssets {
    /// REPO TAG GLOB_PATTERN
    #[arg(value_name = "REPO TAG GLOB_PATTERN")]
    args: Vec<String>,
    #[command(flatten)]
    auth: AuthArgs,
  },

  /// Print out the list of files found using the glob pattern
  ///
  /// Designed for trouble-shooting a glob pattern before using it to
  /// specify assets to upload.
  ListFiles {
    /// GLOB_PATTERN
    #[arg(value_name = "GLOB_PATTERN")]
    args: Vec<String>,
  },
}

#[derive(Args)]
struct ReleaseArgs {
  /// Name of the release, for example "v0.4.0 - 2017-08-22"
  #[arg(long)]
  name: Option<String>,
  /// Body of the release notes
  #[arg(long)]
  notes: Option<String>,
  /// Mark the release as a draft (unpublished)
  #[arg(long)]
  draft: bool,
  /// Mark the release as a pre-release
  #[arg(long = "pre-release", visible_alias = "pre")]
  pre_release: bool,
  /// Upload the assets at the given path (glob patterns enabled)
  #[arg(long)]
  assets: Option<String>,
}

impl From<ReleaseArgs> for ReleaseFlags {
  fn from(args: ReleaseArgs) -> Self {
    ReleaseFlags {
      name: args.name,
      notes: args.notes,
      draft: args.draft,
      pre_release: args.pre_release,
      assets: args.assets,
    }
  }
}

#[derive(Args)]
struct AuthArgs {
  /// Token used to authenticate with the GitHub API
  #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
  github_token: Option<String>,
}

fn get_styles() -> clap::builder::Styles {
  clap::builder::Styles::styled()
    .usage(
      anstyle::Style::new()
        .bold()
        .underline()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Yellow))),
    )
    .header(
      anstyle::Style::new()
        .bold()
        .underline()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Yellow))),
    )
    .literal(anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Green))))
    .invalid(
      anstyle::Style::new()
        .bold()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Red))),
    )
    .error(
      anstyle::Style::new()
        .bold()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Red))),
    )
    .valid(
      anstyle::Style::new()
        .bold()
        .underline()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Green))),
    )
    .placeholder(anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::White))))
}

/// Diagnostics go to stderr, colored only on a terminal; `RUST_LOG` wins over `--debug`
fn init_tracing(debug: bool) {
  let default = if debug { "warn,grease=debug" } else { "warn" };
  tracing_subscriber::fmt()
    .with_writer(std::io::stderr)
    .with_ansi(std::io::stderr().is_terminal())
    .with_target(false)
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)))
    .init();
}

fn main() {
  let cli = Cli::parse();
  init_tracing(cli.debug);

  let token = match &cli.command {
    Commands::CreateRelease { auth, .. } | Commands::UpdateRelease { auth, .. } | Commands::UploadAssets { auth, .. } => {
      auth.github_token.clone()
    }
    Commands::ListFiles { .. } => None,
  };

  let ctx = RunContext::new(
    cli.debug,
    cli.dry_run,
    ApiSettings::new(cli.api_url, cli.uploads_url),
    token,
  );
  let api = GitHubClient::new(ctx.api.clone());

  let result = match cli.command {
    Commands::CreateRelease { args, release, .. } => {
      tracing::debug!("preparing to create release");
      commands::run_create_release(&ctx, &api, &args, &release.into()).map(|_| ())
    }
    Commands::UpdateRelease { args, release, .. } => {
      tracing::debug!("preparing to update release");
      commands::run_update_release(&ctx, &api, &args, &release.into()).map(|_| ())
    }
    Commands::UploadAssets { args, .. } => {
      tracing::debug!("preparing to upload assets");
      commands::run_upload_assets(&ctx, &api, &args).map(|_| ())
    }
    Commands::ListFiles { args } => commands::run_list_files(&args).map(|_| ()),
  };

  if let Err(err) = result {
    handle_error(err);
  }
}

fn handle_error(err: GreaseError) -> ! {
  print_error(&err);
  std::process::exit(err.exit_code().as_i32());
}
