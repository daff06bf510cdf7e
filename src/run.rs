//! Run orchestration: the strictly sequential sweep over all inputs,
//! followed by the single aggregation pass.

use tracing::info;

use crate::aggregate::{self, OutputRecord};
use crate::browser::PageEngine;
use crate::config::RunConfig;
use crate::logger::RunLogger;
use crate::normalize::{self, NormalizedTarget};
use crate::resolver::{self, ResolutionOutcome, ResolveOptions};

/// Resolve every token one at a time, in file order, then aggregate.
///
/// Sequential by design: one input is fully resolved (all scheme-fallback
/// attempts plus the settle wait) before the next begins, for predictable
/// pacing toward external servers. Aggregation needs the complete outcome
/// set, so it runs exactly once, after the last resolution.
pub fn run(
    tokens: &[String],
    engine: &dyn PageEngine,
    config: &RunConfig,
    logger: &mut RunLogger,
) -> Vec<OutputRecord> {
    let targets: Vec<NormalizedTarget> = tokens.iter().map(|t| normalize::normalize(t)).collect();
    let total = targets.len();

    let opts = ResolveOptions {
        timeout: config.timeout,
        js_settle: config.js_settle,
    };

    let mut outcomes: Vec<ResolutionOutcome> = Vec::with_capacity(total);
    logger.start_progress(total as u64);

    for (i, target) in targets.iter().enumerate() {
        logger.set_current(&target.raw);
        let outcome = resolver::resolve(target, engine, opts);

        match &outcome {
            ResolutionOutcome::Resolved { final_url, .. } => {
                logger.record_result(i + 1, total, &target.raw, final_url);
            }
            ResolutionOutcome::Failed { reason, .. } => {
                logger.record_result(i + 1, total, &target.raw, "");
                logger.detail(&format!("{}: {}", target.raw, reason));
            }
        }

        outcomes.push(outcome);
    }

    logger.finish_progress();
    info!("Resolved {} input(s), aggregating destinations", total);

    aggregate::aggregate(&targets, &outcomes, config.count_by)
}
