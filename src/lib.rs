pub mod aggregate;
pub mod browser;
pub mod cli;
pub mod config;
pub mod export;
pub mod input;
pub mod logger;
pub mod normalize;
pub mod resolver;
pub mod run;

pub use aggregate::OutputRecord;
pub use config::{CountBy, RunConfig};
pub use normalize::NormalizedTarget;
pub use resolver::ResolutionOutcome;
