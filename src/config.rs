//! Run configuration derived from the command line.

use clap::ValueEnum;
use std::time::Duration;

use crate::cli::Cli;

/// Granularity used to group destinations for counting and membership checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CountBy {
    /// Public-suffix-aware registrable domain (sub.example.co.uk -> example.co.uk)
    Registrable,
    /// Full hostname as-is
    Host,
}

/// Everything the resolver and aggregator need to know about a run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Per-navigation-attempt timeout.
    pub timeout: Duration,
    /// Flat wait after navigation for client-side redirects to complete.
    pub js_settle: Duration,
    pub count_by: CountBy,
    pub user_agent: Option<String>,
    pub ignore_https_errors: bool,
}

impl From<&Cli> for RunConfig {
    fn from(cli: &Cli) -> Self {
        RunConfig {
            timeout: Duration::from_millis(cli.timeout),
            js_settle: Duration::from_millis(cli.js_settle),
            count_by: cli.count_by,
            user_agent: cli.user_agent.clone(),
            ignore_https_errors: cli.ignore_https_errors,
        }
    }
}
