use crate::domain::model::{Score, Severity};

pub const SEVERE_THRESHOLD: Score = 70;
pub const WARNING_THRESHOLD: Score = 50;

impl Severity {
    pub fn from_score(score: Score) -> Self {
        if score >= SEVERE_THRESHOLD {
            Severity::Severe
        } else if score >= WARNING_THRESHOLD {
            Severity::Warning
        } else {
            Severity::Safe
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Severe => "severe",
            Severity::Warning => "warning",
            Severity::Safe => "safe",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bucket_boundaries() {
        assert_eq!(Severity::from_score(49), Severity::Safe);
        assert_eq!(Severity::from_score(50), Severity::Warning);
        assert_eq!(Severity::from_score(69), Severity::Warning);
        assert_eq!(Severity::from_score(70), Severity::Severe);
        assert_eq!(Severity::from_score(100), Severity::Severe);
        assert_eq!(Severity::from_score(0), Severity::Safe);
    }

    #[test]
    fn test_display_tokens() {
        assert_eq!(Severity::Severe.to_string(), "severe");
        assert_eq!(Severity::Safe.as_str(), "safe");
    }
}
