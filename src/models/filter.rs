//! Export mode and filter configuration

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// How the filter options are chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportMode {
    /// Fixed defaults, no questions asked
    #[default]
    Basic,
    /// Every filter option is configurable
    Advanced,
}

impl FromStr for ExportMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "1" | "basic" => Ok(Self::Basic),
            "2" | "advanced" => Ok(Self::Advanced),
            other => Err(format!(
                "unknown mode '{}', expected 1/basic or 2/advanced",
                other
            )),
        }
    }
}

impl fmt::Display for ExportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Basic => write!(f, "basic"),
            Self::Advanced => write!(f, "advanced"),
        }
    }
}

/// Fully resolved filter options
///
/// Built once before the pipeline runs and never changed afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FilterConfig {
    /// Records with fewer known occurrences are dropped
    pub min_occurrences: u64,
    pub max_days_until_due: Option<u64>,
    pub max_card_level: Option<u64>,
    /// Keep suspended, blacklisted and banished cards
    pub include_banished: bool,
    pub include_never_forget: bool,
    /// Lower rank = more common word
    pub max_frequency_rank: Option<u64>,
    /// 0 = no cap
    pub max_results: usize,
}

impl FilterConfig {
    /// The options basic mode runs with
    pub fn basic() -> Self {
        Self::default()
    }

    /// Options under which every record passes
    pub fn permissive() -> Self {
        Self {
            include_banished: true,
            include_never_forget: true,
            ..Self::default()
        }
    }

    pub fn is_capped(&self) -> bool {
        self.max_results > 0
    }
}

impl fmt::Display for FilterConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn limit(value: Option<u64>) -> String {
            value.map_or_else(|| "no limit".to_string(), |v| v.to_string())
        }

        writeln!(f, "  Minimum occurrences:  {}", self.min_occurrences)?;
        writeln!(f, "  Max days until due:   {}", limit(self.max_days_until_due))?;
        writeln!(f, "  Max card level:       {}", limit(self.max_card_level))?;
        writeln!(f, "  Include banished:     {}", self.include_banished)?;
        writeln!(f, "  Include never-forget: {}", self.include_never_forget)?;
        writeln!(f, "  Max frequency rank:   {}", limit(self.max_frequency_rank))?;
        if self.is_capped() {
            write!(f, "  Max results:          {}", self.max_results)
        } else {
            write!(f, "  Max results:          all")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_parsing() {
        assert_eq!("1".parse::<ExportMode>(), Ok(ExportMode::Basic));
        assert_eq!("basic".parse::<ExportMode>(), Ok(ExportMode::Basic));
        assert_eq!(" 2 ".parse::<ExportMode>(), Ok(ExportMode::Advanced));
        assert_eq!("Advanced".parse::<ExportMode>(), Ok(ExportMode::Advanced));
        assert!("3".parse::<ExportMode>().is_err());
    }

    #[test]
    fn test_basic_defaults() {
        let config = FilterConfig::basic();
        assert_eq!(config.min_occurrences, 0);
        assert!(!config.include_banished);
        assert!(!config.include_never_forget);
        assert!(config.max_frequency_rank.is_none());
        assert!(!config.is_capped());
    }

    #[test]
    fn test_display_lists_limits() {
        let config = FilterConfig {
            max_frequency_rank: Some(500),
            max_results: 20,
            ..FilterConfig::permissive()
        };
        let text = config.to_string();
        assert!(text.contains("Max frequency rank:   500"));
        assert!(text.contains("Max days until due:   no limit"));
        assert!(text.contains("Max results:          20"));
    }
}
