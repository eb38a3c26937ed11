//! Sharing suggestions and their display classification

use hearth_authorization::PermissionTier;
use hearth_core::{MemberId, PhotoRef, SuggestionId};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Range;

/// Signal a suggestion claims to be based on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionReason {
    /// Family faces appear in the photo
    FaceRecognition,
    /// Taken somewhere the family often goes
    Location,
    /// Taken at a time matching family activity
    Time,
    /// Looks like a gathering or occasion
    Event,
}

impl SuggestionReason {
    /// Rotation order.
    pub const ALL: [SuggestionReason; 4] = [
        SuggestionReason::FaceRecognition,
        SuggestionReason::Location,
        SuggestionReason::Time,
        SuggestionReason::Event,
    ];

    /// Fixed textual label.
    pub fn as_str(self) -> &'static str {
        match self {
            SuggestionReason::FaceRecognition => "face_recognition",
            SuggestionReason::Location => "location",
            SuggestionReason::Time => "time",
            SuggestionReason::Event => "event",
        }
    }

    /// Range confidence is drawn from for this reason.
    pub fn confidence_range(self) -> Range<f64> {
        match self {
            SuggestionReason::FaceRecognition => 0.85..0.95,
            SuggestionReason::Location => 0.75..0.90,
            SuggestionReason::Time => 0.70..0.90,
            SuggestionReason::Event => 0.80..0.95,
        }
    }

    /// Human-readable justification.
    pub fn justification(self) -> &'static str {
        match self {
            SuggestionReason::FaceRecognition => "Family members appear in this photo",
            SuggestionReason::Location => "Taken at a place the family often visits",
            SuggestionReason::Time => "Taken during a usual family time",
            SuggestionReason::Event => "Looks like a family gathering or special occasion",
        }
    }
}

impl fmt::Display for SuggestionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Display bucket for a confidence value. Never used for filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceBand {
    /// At least 0.8
    High,
    /// At least 0.6
    Medium,
    /// Below 0.6
    Low,
}

impl ConfidenceBand {
    /// Classify a confidence value.
    pub fn classify(confidence: f64) -> Self {
        if confidence >= 0.8 {
            ConfidenceBand::High
        } else if confidence >= 0.6 {
            ConfidenceBand::Medium
        } else {
            ConfidenceBand::Low
        }
    }

    /// Fixed textual label.
    pub fn as_str(self) -> &'static str {
        match self {
            ConfidenceBand::High => "high",
            ConfidenceBand::Medium => "medium",
            ConfidenceBand::Low => "low",
        }
    }
}

impl fmt::Display for ConfidenceBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Proposed recipients for one photo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SharingSuggestion {
    /// Suggestion identifier
    pub suggestion_id: SuggestionId,
    /// Photo the suggestion is about
    pub photo: PhotoRef,
    /// Suggested recipients, in roster order; never empty
    pub recipients: Vec<MemberId>,
    /// Claimed signal
    pub reason: SuggestionReason,
    /// Confidence in `[0, 1]`
    pub confidence: f64,
    /// Text shown alongside the suggestion
    pub justification: String,
}

impl SharingSuggestion {
    /// Display bucket for this suggestion's confidence.
    pub fn band(&self) -> ConfidenceBand {
        ConfidenceBand::classify(self.confidence)
    }

    /// Member/tier pairs to apply with `SharedAlbum::apply_preset`.
    pub fn into_grants(self, tier: PermissionTier) -> Vec<(MemberId, PermissionTier)> {
        self.recipients.into_iter().map(|m| (m, tier)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_boundaries() {
        assert_eq!(ConfidenceBand::classify(0.8), ConfidenceBand::High);
        assert_eq!(ConfidenceBand::classify(0.79), ConfidenceBand::Medium);
        assert_eq!(ConfidenceBand::classify(0.6), ConfidenceBand::Medium);
        assert_eq!(ConfidenceBand::classify(0.59), ConfidenceBand::Low);
        assert_eq!(ConfidenceBand::classify(0.0), ConfidenceBand::Low);
    }

    #[test]
    fn test_reason_ranges_lie_in_unit_interval() {
        for reason in SuggestionReason::ALL {
            let range = reason.confidence_range();
            assert!(range.start >= 0.0 && range.end <= 1.0);
            assert!(range.start < range.end);
        }
    }
}
