use clap::Parser;
use std::path::PathBuf;

use crate::config::CountBy;

#[derive(Parser, Debug)]
#[command(name = "redirectmapper")]
#[command(about = "Map domains to their final redirect destinations via a real browser")]
#[command(version)]
pub struct Cli {
    /// Path to input CSV with a 'url' or 'domain' column (or first column)
    pub input_csv: PathBuf,

    /// Where to write the results CSV
    #[arg(short = 'o', long, default_value = "redirect_map.csv")]
    pub output_csv: PathBuf,

    /// Navigation timeout per attempt, in milliseconds
    #[arg(long, default_value = "15000")]
    pub timeout: u64,

    /// Extra time to let JavaScript/meta-refresh redirects finish, in milliseconds
    #[arg(long, default_value = "2000")]
    pub js_settle: u64,

    /// How to group destinations for counting
    #[arg(long, value_enum, default_value_t = CountBy::Registrable)]
    pub count_by: CountBy,

    /// Browser User-Agent to use (defaults to the engine's own)
    #[arg(long)]
    pub user_agent: Option<String>,

    /// Ignore HTTPS certificate errors
    #[arg(long)]
    pub ignore_https_errors: bool,

    /// Verbose logging (use -v for detailed, -vv for debug output)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn validate(&self) -> Result<(), String> {
        if self.timeout == 0 {
            return Err("Timeout must be greater than 0".to_string());
        }
        Ok(())
    }
}
