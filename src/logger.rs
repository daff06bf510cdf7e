//! User-facing run progress: a progress bar over the input list plus
//! per-domain result lines, gated by verbosity.
//!
//! Log lines are routed through the active progress bar so they don't fight
//! with its redraws; `tracing` handles the structured/diagnostic side.

use indicatif::{ProgressBar, ProgressStyle};

#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub enum VerbosityLevel {
    /// Only the progress bar and the final summary.
    Silent = 0,
    /// Per-domain result lines (default).
    Summary = 1,
    /// Detailed steps and warnings.
    Detailed = 2,
    /// Everything.
    Debug = 3,
}

impl VerbosityLevel {
    pub fn from_verbose_count(count: u8) -> Self {
        match count {
            0 => VerbosityLevel::Summary,
            1 => VerbosityLevel::Detailed,
            2.. => VerbosityLevel::Debug,
        }
    }
}

pub struct RunLogger {
    verbosity: VerbosityLevel,
    progress: Option<ProgressBar>,
}

impl RunLogger {
    pub fn new(verbosity: VerbosityLevel) -> Self {
        RunLogger {
            verbosity,
            progress: None,
        }
    }

    pub fn start_progress(&mut self, total: u64) {
        let pb = ProgressBar::new(total);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("[{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) eta {eta_precise} {msg}")
                .unwrap_or_else(|_| {
                    ProgressStyle::default_bar()
                        .template("{bar:40} {pos}/{len} {msg}")
                        .unwrap_or_else(|_| ProgressStyle::default_bar())
                })
                .progress_chars("=>-"),
        );
        self.progress = Some(pb);
    }

    /// Show which input is being resolved right now.
    pub fn set_current(&self, label: &str) {
        if let Some(pb) = &self.progress {
            pb.set_message(label.to_string());
        }
    }

    /// Print one per-domain result line and advance the bar.
    pub fn record_result(&self, index: usize, total: usize, source: &str, result: &str) {
        if self.verbosity >= VerbosityLevel::Summary {
            self.println(&format!(
                "[{}/{}] input: {} -> final: {}",
                index, total, source, result
            ));
        }
        if let Some(pb) = &self.progress {
            pb.inc(1);
        }
    }

    pub fn finish_progress(&mut self) {
        if let Some(pb) = self.progress.take() {
            pb.finish_and_clear();
        }
    }

    pub fn info(&self, message: &str) {
        if self.verbosity >= VerbosityLevel::Summary {
            self.println(message);
        }
    }

    pub fn detail(&self, message: &str) {
        if self.verbosity >= VerbosityLevel::Detailed {
            self.println(message);
        }
    }

    fn println(&self, message: &str) {
        // The bar's println keeps the bar pinned below interleaved output.
        match &self.progress {
            Some(pb) => pb.println(message),
            None => println!("{}", message),
        }
    }
}
