//! Destination aggregation: given the complete, ordered outcome list, count
//! how many sources share each destination and flag destinations that are
//! themselves input domains.
//!
//! This is a pure function of the complete outcome set. It runs exactly once,
//! after the sequential resolution phase; counts depend on every destination,
//! so no partial or streaming aggregation is possible.

use std::collections::{HashMap, HashSet};

use crate::config::CountBy;
use crate::normalize::NormalizedTarget;
use crate::resolver::ResolutionOutcome;

/// One output row. Rows are emitted in input order, one per input token.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct OutputRecord {
    pub source_url: String,
    /// Empty for failed resolutions.
    pub destination_url: String,
    /// How many resolved sources (including this one) land on the same
    /// destination key. Zero for failed resolutions.
    pub pointing_to_count: u32,
    /// Whether the destination key matches the key of at least one input token.
    pub points_to_list_domain: bool,
}

fn destination_key(outcome: &ResolutionOutcome, count_by: CountBy) -> Option<&str> {
    match outcome {
        ResolutionOutcome::Resolved {
            host, registrable, ..
        } => Some(match count_by {
            CountBy::Registrable => registrable.as_str(),
            CountBy::Host => host.as_str(),
        }),
        ResolutionOutcome::Failed { .. } => None,
    }
}

fn input_key(target: &NormalizedTarget, count_by: CountBy) -> &str {
    match count_by {
        CountBy::Registrable => target.registrable.as_str(),
        CountBy::Host => target.host.as_str(),
    }
}

/// Produce one `OutputRecord` per outcome, in outcome order.
///
/// `targets` is the full normalized input set (membership is checked against
/// every input token, whether or not it resolved). The same key kind applies
/// to both sides of the membership comparison.
pub fn aggregate(
    targets: &[NormalizedTarget],
    outcomes: &[ResolutionOutcome],
    count_by: CountBy,
) -> Vec<OutputRecord> {
    let mut inbound: HashMap<&str, u32> = HashMap::new();
    for outcome in outcomes {
        if let Some(key) = destination_key(outcome, count_by) {
            if !key.is_empty() {
                *inbound.entry(key).or_insert(0) += 1;
            }
        }
    }

    let input_keys: HashSet<&str> = targets
        .iter()
        .map(|t| input_key(t, count_by))
        .filter(|k| !k.is_empty())
        .collect();

    outcomes
        .iter()
        .map(|outcome| match outcome {
            ResolutionOutcome::Resolved {
                source, final_url, ..
            } => {
                let key = destination_key(outcome, count_by).unwrap_or("");
                OutputRecord {
                    source_url: source.clone(),
                    destination_url: final_url.clone(),
                    pointing_to_count: inbound.get(key).copied().unwrap_or(0),
                    points_to_list_domain: !key.is_empty() && input_keys.contains(key),
                }
            }
            ResolutionOutcome::Failed { source, .. } => OutputRecord {
                source_url: source.clone(),
                destination_url: String::new(),
                pointing_to_count: 0,
                points_to_list_domain: false,
            },
        })
        .collect()
}
