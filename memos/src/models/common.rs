use serde::{Deserialize, Serialize};

/// Fixed set of memo categories.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Default,
    Serialize,
    Deserialize,
    utoipa::ToSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum MemoCategory {
    #[default]
    Personal,
    Work,
    Study,
    Idea,
    Other,
}

impl MemoCategory {
    pub const ALL: [MemoCategory; 5] = [
        Self::Personal,
        Self::Work,
        Self::Study,
        Self::Idea,
        Self::Other,
    ];
}

impl std::fmt::Display for MemoCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Personal => write!(f, "personal"),
            Self::Work => write!(f, "work"),
            Self::Study => write!(f, "study"),
            Self::Idea => write!(f, "idea"),
            Self::Other => write!(f, "other"),
        }
    }
}

impl std::str::FromStr for MemoCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "personal" => Ok(Self::Personal),
            "work" => Ok(Self::Work),
            "study" => Ok(Self::Study),
            "idea" => Ok(Self::Idea),
            "other" => Ok(Self::Other),
            _ => Err(format!("Unknown memo category: {s}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_default() {
        assert_eq!(MemoCategory::default(), MemoCategory::Personal);
    }

    #[test]
    fn test_category_display_from_str() {
        for category in MemoCategory::ALL {
            let parsed: MemoCategory = category.to_string().parse().unwrap();
            assert_eq!(parsed, category);
        }
        assert_eq!("WORK".parse::<MemoCategory>(), Ok(MemoCategory::Work));
        assert!("groceries".parse::<MemoCategory>().is_err());
    }

    #[test]
    fn test_category_serde_lowercase() {
        let json = serde_json::to_string(&MemoCategory::Idea).unwrap();
        assert_eq!(json, "\"idea\"");
        let parsed: MemoCategory = serde_json::from_str("\"study\"").unwrap();
        assert_eq!(parsed, MemoCategory::Study);
    }
}
