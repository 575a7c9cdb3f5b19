pub mod artifact;
pub mod classifier;
pub mod counter;
pub mod dictionary;
pub mod document;
pub mod error;
pub mod language;
pub mod normalize;
pub mod persist;
pub mod pipeline;
pub mod profile;
pub mod resolver;
pub mod search;
pub mod session;
pub mod store;

#[cfg(test)]
pub(crate) mod testing;

pub use classifier::DifficultWordMap;
pub use pipeline::{Engine, ProcessFailure, ProcessOutcome, ProcessRequest, RunControl};
pub use profile::{FrequencyProfile, ProficiencyTier};
pub use search::SearchOutcome;
pub use session::{BookSession, SessionState};
