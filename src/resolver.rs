//! Redirect resolution: drive the page engine through the scheme-fallback
//! candidate chain and report where an input finally lands.

use std::time::Duration;
use tracing::debug;

use crate::browser::{NavigationError, PageEngine};
use crate::normalize::{self, NormalizedTarget};

/// Terminal outcome of resolving one input token.
/// Exactly one outcome is produced per input, in input order.
#[derive(Debug, Clone, PartialEq)]
pub enum ResolutionOutcome {
    Resolved {
        source: String,
        /// Absolute, scheme-qualified URL as observed after navigation
        /// and the settle wait.
        final_url: String,
        /// Destination full hostname, lowercased.
        host: String,
        /// Destination registrable domain.
        registrable: String,
    },
    Failed {
        source: String,
        reason: String,
    },
}

impl ResolutionOutcome {
    pub fn source(&self) -> &str {
        match self {
            ResolutionOutcome::Resolved { source, .. } => source,
            ResolutionOutcome::Failed { source, .. } => source,
        }
    }
}

/// Per-resolution knobs, split out so tests don't need a full `RunConfig`.
#[derive(Debug, Clone, Copy)]
pub struct ResolveOptions {
    pub timeout: Duration,
    pub js_settle: Duration,
}

/// Resolve a single normalized input to its final destination.
///
/// Tries each candidate base URL in order (HTTPS then HTTP, or only the
/// explicit scheme). The first candidate that navigates successfully wins:
/// after a flat settle wait for client-side redirects, the address bar is
/// read as the final URL. A redirect completing after the settle window is
/// not observed; that flat wait is the extent of settle detection.
///
/// Each candidate attempt gets its own page, released when the attempt ends
/// whatever the result. A failed candidate is never retried.
pub fn resolve(
    target: &NormalizedTarget,
    engine: &dyn PageEngine,
    opts: ResolveOptions,
) -> ResolutionOutcome {
    let candidates = target.candidates();
    let mut last_error: Option<NavigationError> = None;

    for candidate in &candidates {
        let mut page = match engine.open_page() {
            Ok(page) => page,
            Err(e) => {
                debug!("Could not open page for {}: {}", candidate, e);
                last_error = Some(e);
                continue;
            }
        };

        match page.navigate(candidate, opts.timeout) {
            Ok(()) => {
                page.wait(opts.js_settle);
                let final_url = page.current_url();
                let host = normalize::host_of(&final_url).unwrap_or_default();
                let registrable = normalize::registrable_domain(&host);
                return ResolutionOutcome::Resolved {
                    source: target.raw.clone(),
                    final_url,
                    host,
                    registrable,
                };
            }
            Err(e) => {
                debug!("Navigation to {} failed: {}", candidate, e);
                last_error = Some(e);
            }
        }
    }

    let reason = if candidates.len() > 1 {
        "all schemes failed".to_string()
    } else {
        last_error
            .map(|e| e.to_string())
            .unwrap_or_else(|| "all schemes failed".to_string())
    };

    ResolutionOutcome::Failed {
        source: target.raw.clone(),
        reason,
    }
}
