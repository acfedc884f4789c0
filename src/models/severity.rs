use serde::{Deserialize, Serialize};

/// User-reported symptom severity on a 1–10 scale.
///
/// Out-of-range input is clamped rather than rejected — the UI slider
/// is the primary guard, this type is the backstop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SeverityLevel(u8);

impl SeverityLevel {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 10;

    /// Threshold at which fallback urgency escalates to `urgent`.
    pub const URGENT_THRESHOLD: u8 = 8;

    pub fn new(value: u8) -> Self {
        Self(value.clamp(Self::MIN, Self::MAX))
    }

    pub fn get(&self) -> u8 {
        self.0
    }

    /// Whether the fallback path should report `urgent` for this level.
    pub fn is_high(&self) -> bool {
        self.0 >= Self::URGENT_THRESHOLD
    }
}

impl Default for SeverityLevel {
    fn default() -> Self {
        Self(5)
    }
}

impl std::fmt::Display for SeverityLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/10", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_five() {
        assert_eq!(SeverityLevel::default().get(), 5);
    }

    #[test]
    fn clamps_out_of_range() {
        assert_eq!(SeverityLevel::new(0).get(), 1);
        assert_eq!(SeverityLevel::new(11).get(), 10);
        assert_eq!(SeverityLevel::new(7).get(), 7);
    }

    #[test]
    fn high_severity_starts_at_eight() {
        assert!(!SeverityLevel::new(7).is_high());
        assert!(SeverityLevel::new(8).is_high());
        assert!(SeverityLevel::new(10).is_high());
    }
}
