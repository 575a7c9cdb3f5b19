use std::fmt;

/// Named threshold profile controlling how aggressively words are flagged
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ProficiencyTier {
    Low,
    #[default]
    Medium,
    High,
}

impl ProficiencyTier {
    pub const ALL: [ProficiencyTier; 3] = [
        ProficiencyTier::Low,
        ProficiencyTier::Medium,
        ProficiencyTier::High,
    ];

    /// Resolve a tier by name, unknown names fall back to Medium
    pub fn from_name(name: &str) -> Self {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|tier| tier.as_str().eq_ignore_ascii_case(name))
            .unwrap_or_else(|| {
                tracing::warn!("Unknown proficiency level '{}', using Medium", name);
                ProficiencyTier::Medium
            })
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ProficiencyTier::Low => "Low",
            ProficiencyTier::Medium => "Medium",
            ProficiencyTier::High => "High",
        }
    }

    pub fn profile(&self) -> FrequencyProfile {
        match self {
            ProficiencyTier::Low => FrequencyProfile::LOW,
            ProficiencyTier::Medium => FrequencyProfile::MEDIUM,
            ProficiencyTier::High => FrequencyProfile::HIGH,
        }
    }
}

impl fmt::Display for ProficiencyTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrequencyProfile {
    /// Highest in-document count that still passes the local check
    pub local_limit: usize,
    /// Global frequencies below this count as rare
    pub global_freq_limit: f64,
    /// In-document count a globally common word must exceed to be learned
    pub common_word_lower_limit: usize,
}

impl FrequencyProfile {
    pub const LOW: Self = Self {
        local_limit: 70,
        global_freq_limit: 1e-5,
        common_word_lower_limit: 100,
    };

    pub const MEDIUM: Self = Self {
        local_limit: 45,
        global_freq_limit: 1e-6,
        common_word_lower_limit: 75,
    };

    pub const HIGH: Self = Self {
        local_limit: 30,
        global_freq_limit: 1e-7,
        common_word_lower_limit: 40,
    };

    pub fn for_level(name: &str) -> Self {
        ProficiencyTier::from_name(name).profile()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiers_resolve_by_name() {
        assert_eq!(ProficiencyTier::from_name("Low"), ProficiencyTier::Low);
        assert_eq!(ProficiencyTier::from_name(" high "), ProficiencyTier::High);
        assert_eq!(FrequencyProfile::for_level("Low").local_limit, 70);
        assert_eq!(FrequencyProfile::for_level("High").common_word_lower_limit, 40);
    }

    #[test]
    fn unknown_tier_falls_back_to_medium() {
        assert_eq!(ProficiencyTier::from_name("Expert"), ProficiencyTier::Medium);
        assert_eq!(FrequencyProfile::for_level(""), FrequencyProfile::MEDIUM);
    }

    #[test]
    fn stricter_tiers_have_tighter_limits() {
        let [low, medium, high] = ProficiencyTier::ALL.map(|tier| tier.profile());
        assert!(low.local_limit > medium.local_limit && medium.local_limit > high.local_limit);
        assert!(low.global_freq_limit > medium.global_freq_limit);
        assert!(medium.global_freq_limit > high.global_freq_limit);
    }
}
