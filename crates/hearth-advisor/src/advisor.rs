//! Sharing Advisor
//!
//! Proposes recipients for a batch of photos. This is a placeholder ranking
//! policy: it inspects no pixels, locations, or calendars. Reasons rotate
//! in a fixed order, confidences are drawn from per-reason ranges, and the
//! recipients are a prefix of the active roster.
//!
//! Output depends only on the seed and the inputs. Groups that turned
//! smart suggestions off get none through
//! [`SharingAdvisor::suggest_for_group`].

use crate::config::AdvisorConfig;
use crate::suggestion::{SharingSuggestion, SuggestionReason};
use hearth_core::config::ConfigValidation;
use hearth_core::{HearthResult, MemberId, PhotoRef, SuggestionId};
use hearth_social::{FamilyGroup, Member};
use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Seeded recipient suggester.
#[derive(Debug, Clone, Default)]
pub struct SharingAdvisor {
    config: AdvisorConfig,
}

impl SharingAdvisor {
    /// Create an advisor from a validated configuration.
    pub fn new(config: AdvisorConfig) -> HearthResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Create an advisor with default limits and the given seed.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            config: AdvisorConfig {
                seed,
                ..AdvisorConfig::default()
            },
        }
    }

    /// Active configuration.
    pub fn config(&self) -> &AdvisorConfig {
        &self.config
    }

    /// Suggestions for `group`'s roster, honouring its sharing preferences.
    ///
    /// Returns nothing while the group has smart suggestions turned off.
    pub fn suggest_for_group(
        &self,
        group: &FamilyGroup,
        photos: &[PhotoRef],
    ) -> Vec<SharingSuggestion> {
        if !group.preferences().sharing.smart_suggestions {
            tracing::debug!(group_id = %group.group_id, "smart suggestions disabled");
            return Vec::new();
        }
        self.suggest(photos, group.members())
    }

    /// One suggestion per photo, up to `max_suggestions`.
    ///
    /// Members that are not active are never suggested. With no active
    /// members there is nothing to suggest.
    pub fn suggest(&self, photos: &[PhotoRef], members: &[Member]) -> Vec<SharingSuggestion> {
        let roster: Vec<MemberId> = members
            .iter()
            .filter(|m| m.is_active())
            .map(|m| m.member_id)
            .collect();
        if roster.is_empty() {
            return Vec::new();
        }

        let mut rng = ChaCha8Rng::seed_from_u64(self.config.seed);
        let limit = self.config.max_suggestions as usize;

        let suggestions: Vec<SharingSuggestion> = photos
            .iter()
            .take(limit)
            .enumerate()
            .map(|(index, photo)| {
                let reason = SuggestionReason::ALL[index % SuggestionReason::ALL.len()];
                let confidence = rng.gen_range(reason.confidence_range());
                let count = rng.gen_range(1..=roster.len());

                let mut entropy = [0u8; 32];
                rng.fill_bytes(&mut entropy);

                SharingSuggestion {
                    suggestion_id: SuggestionId::new_from_entropy(entropy),
                    photo: photo.clone(),
                    recipients: roster[..count].to_vec(),
                    reason,
                    confidence,
                    justification: reason.justification().to_string(),
                }
            })
            .collect();

        tracing::debug!(
            photos = photos.len(),
            roster = roster.len(),
            suggestions = suggestions.len(),
            "sharing suggestions generated"
        );
        suggestions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hearth_core::{PhotoId, PhysicalTime};
    use hearth_social::{MemberRole, MemberStatus};

    fn test_member(seed: u8, status: MemberStatus) -> Member {
        Member {
            member_id: MemberId::new_from_entropy([seed; 32]),
            display_name: format!("Member {seed}"),
            contact: format!("m{seed}@example.com"),
            role: MemberRole::Member,
            status,
            joined_at: PhysicalTime::from_ms(1_700_000_000_000),
        }
    }

    fn test_photos(count: u8) -> Vec<PhotoRef> {
        (0..count)
            .map(|seed| {
                PhotoRef::new(
                    PhotoId::new_from_entropy([seed; 32]),
                    format!("photos/{seed}.jpg"),
                    1_024,
                    PhysicalTime::from_ms(1_700_000_000_000),
                )
            })
            .collect()
    }

    #[test]
    fn test_reasons_rotate() {
        let members = vec![test_member(1, MemberStatus::Active)];
        let suggestions = SharingAdvisor::with_seed(7).suggest(&test_photos(5), &members);

        let reasons: Vec<SuggestionReason> = suggestions.iter().map(|s| s.reason).collect();
        assert_eq!(
            reasons,
            vec![
                SuggestionReason::FaceRecognition,
                SuggestionReason::Location,
                SuggestionReason::Time,
                SuggestionReason::Event,
                SuggestionReason::FaceRecognition,
            ]
        );
        for suggestion in &suggestions {
            assert!(suggestion.reason.confidence_range().contains(&suggestion.confidence));
        }
    }

    #[test]
    fn test_inactive_members_skipped() {
        let members = vec![
            test_member(1, MemberStatus::Inactive),
            test_member(2, MemberStatus::Pending),
        ];
        assert!(SharingAdvisor::default()
            .suggest(&test_photos(3), &members)
            .is_empty());

        let members = vec![
            test_member(1, MemberStatus::Inactive),
            test_member(2, MemberStatus::Active),
        ];
        for suggestion in SharingAdvisor::default().suggest(&test_photos(3), &members) {
            assert_eq!(suggestion.recipients, vec![members[1].member_id]);
        }
    }

    #[test]
    fn test_same_seed_same_output() {
        let members: Vec<Member> = (1..=4)
            .map(|seed| test_member(seed, MemberStatus::Active))
            .collect();
        let photos = test_photos(5);
        let first = SharingAdvisor::with_seed(42).suggest(&photos, &members);
        let second = SharingAdvisor::with_seed(42).suggest(&photos, &members);
        assert_eq!(first, second);
    }
}
