//! CLI argument parsing with clap derive

use std::ffi::OsString;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::builder::FalseyValueParser;
use clap::{ArgAction, CommandFactory, FromArgMatches, Parser};

use crate::app::{AppContext, AppFlags};
use crate::application::services::sequence::Sequence;
use crate::domain::outcome::clamp_exit_code;
use crate::domain::{Action, ConfigOverrides, final_exit_code, order_actions};
use crate::infra::config::YamlConfigStore;
use crate::output::TerminalReporter;

/// Deploy, restart and follow the OreSat star tracker service.
///
/// Actions run in the order their flags are given, e.g. `-prl` deploys,
/// restarts, then follows the journal.
#[derive(Parser, Debug)]
#[command(name = "startracker-dev", version, args_override_self = true)]
pub struct Cli {
    /// Copy source files into the target directory (skipped if it is missing)
    #[arg(short = 'p', long)]
    pub deploy: bool,

    /// Restart the service unit
    #[arg(short = 'r', long)]
    pub restart: bool,

    /// Follow the unit's journal until interrupted
    #[arg(short = 'l', long = "logs")]
    pub monitor: bool,

    /// Deploy target directory
    #[arg(long, value_name = "DIR")]
    pub target: Option<PathBuf>,

    /// Directory holding the files to deploy
    #[arg(long, value_name = "DIR")]
    pub source: Option<PathBuf>,

    /// Service unit to restart and follow
    #[arg(long, value_name = "NAME")]
    pub unit: Option<String>,

    /// Print what would be done without doing it
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Suppress non-error output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Disable colored output
    #[arg(long, env = "NO_COLOR", value_parser = FalseyValueParser::new())]
    pub no_color: bool,
}

/// Argument id of the flag selecting `action`.
fn arg_id(action: Action) -> &'static str {
    match action {
        Action::Deploy => "deploy",
        Action::Restart => "restart",
        Action::Monitor => "monitor",
    }
}

impl Cli {
    /// Parse `args` and return the selected actions in command-line order.
    ///
    /// # Errors
    ///
    /// Returns the clap error for malformed arguments, `--help` and
    /// `--version`.
    pub fn try_parse_ordered<I, T>(args: I) -> Result<(Self, Vec<Action>), clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = Self::command().try_get_matches_from(args)?;
        let cli = Self::from_arg_matches(&matches)?;

        let occurrences: Vec<(Action, usize)> = Action::ALL
            .into_iter()
            .filter(|&action| matches.get_flag(arg_id(action)))
            .filter_map(|action| matches.index_of(arg_id(action)).map(|i| (action, i)))
            .collect();

        Ok((cli, order_actions(&occurrences)))
    }

    /// Execute the selected actions.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be loaded or is invalid.
    /// Failures of individual actions are reported and folded into the
    /// returned exit code instead.
    pub async fn run(self, actions: Vec<Action>) -> Result<ExitCode> {
        let Cli {
            target,
            source,
            unit,
            dry_run,
            quiet,
            no_color,
            ..
        } = self;

        let flags = AppFlags {
            no_color,
            quiet,
            dry_run,
        };
        let overrides = ConfigOverrides {
            target_dir: target,
            source_dir: source,
            unit,
        };

        if actions.is_empty() {
            let ctx = crate::output::OutputContext::new(no_color, quiet);
            ctx.info("Nothing to do. Pass -p, -r or -l (see --help).");
            return Ok(ExitCode::SUCCESS);
        }

        let app = AppContext::new(&flags, overrides, &YamlConfigStore)?;
        tracing::debug!(?actions, unit = %app.config.service.unit, dry_run, "starting");

        let reporter = TerminalReporter::new(&app.output);
        let sequence = Sequence {
            config: &app.config,
            runner: &app.runner,
            fs: &app.fs,
            reporter: &reporter,
            dry_run: app.dry_run,
        };
        let outcomes = sequence.run(&actions).await;

        Ok(ExitCode::from(clamp_exit_code(final_exit_code(&outcomes))))
    }
}
