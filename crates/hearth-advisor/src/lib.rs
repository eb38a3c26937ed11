//! Hearth Advisor - recipient suggestions for shared photos
//!
//! `SharingAdvisor::suggest` proposes who a batch of photos could be shared
//! with. Suggestions are advisory: nothing is granted until the caller
//! applies `SharingSuggestion::into_grants` to an album.

#![forbid(unsafe_code)]

pub mod advisor;
pub mod config;
pub mod suggestion;

pub use advisor::SharingAdvisor;
pub use config::AdvisorConfig;
pub use suggestion::{ConfidenceBand, SharingSuggestion, SuggestionReason};
