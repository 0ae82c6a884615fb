//! Vocabulary filtering
//!
//! Checks run in a fixed order per record: occurrence floor, due-date
//! ceiling, card-level ceiling, state tags, frequency ceiling. Once the
//! result cap is reached no further records are examined.
//!
//! Missing or unreadable numbers pass the occurrence and card-level checks,
//! but a missing or unreadable frequency rank fails the frequency check, and
//! an unreadable due date fails the due check.

use std::collections::BTreeMap;
use std::fmt;

use crate::models::{FilterConfig, VocabularyRecord};

const SECONDS_PER_DAY: i64 = 86_400;

/// Why a record was filtered out
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rejection {
    TooFewOccurrences,
    UnreadableDueDate,
    DueTooLate,
    CardLevelTooHigh,
    Banished,
    NeverForget,
    UnknownFrequency,
    TooRare,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::TooFewOccurrences => "too few occurrences",
            Self::UnreadableDueDate => "unreadable due date",
            Self::DueTooLate => "due too late",
            Self::CardLevelTooHigh => "card level too high",
            Self::Banished => "banished",
            Self::NeverForget => "never-forget",
            Self::UnknownFrequency => "no frequency rank",
            Self::TooRare => "frequency rank too high",
        };
        write!(f, "{}", text)
    }
}

fn saturating_i64(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

/// Applies one [`FilterConfig`] at a fixed point in time
#[derive(Debug, Clone, Copy)]
pub struct FilterEngine {
    config: FilterConfig,
    /// Epoch seconds
    now: i64,
}

impl FilterEngine {
    pub fn new(config: FilterConfig, now: i64) -> Self {
        Self { config, now }
    }

    /// Run every check against one record
    pub fn evaluate(&self, record: &VocabularyRecord) -> Result<(), Rejection> {
        let config = &self.config;

        if let Some(occurrences) = record.occurrences.as_int() {
            if occurrences < saturating_i64(config.min_occurrences) {
                return Err(Rejection::TooFewOccurrences);
            }
        }

        if let Some(max_days) = config.max_days_until_due {
            let ceiling = self
                .now
                .saturating_add(saturating_i64(max_days).saturating_mul(SECONDS_PER_DAY));
            let due_at = if record.due_at.is_missing() {
                self.now
            } else {
                record.due_at.as_int().ok_or(Rejection::UnreadableDueDate)?
            };
            if due_at > ceiling {
                return Err(Rejection::DueTooLate);
            }
        }

        if let Some(max_level) = config.max_card_level {
            if let Some(level) = record.card_level.as_int() {
                if level > saturating_i64(max_level) {
                    return Err(Rejection::CardLevelTooHigh);
                }
            }
        }

        if record.card_state.is_banished() && !config.include_banished {
            return Err(Rejection::Banished);
        }
        if record.card_state.is_never_forget() && !config.include_never_forget {
            return Err(Rejection::NeverForget);
        }

        if let Some(max_rank) = config.max_frequency_rank {
            let rank = record
                .frequency_rank
                .as_int()
                .ok_or(Rejection::UnknownFrequency)?;
            if rank > saturating_i64(max_rank) {
                return Err(Rejection::TooRare);
            }
        }

        Ok(())
    }

    /// Filter `records`, keeping their order
    ///
    /// Records are pulled from the iterator one at a time and pulling stops
    /// as soon as the result cap is reached.
    pub fn apply<'a, I>(&self, records: I) -> Vec<VocabularyRecord>
    where
        I: IntoIterator<Item = &'a VocabularyRecord>,
    {
        let mut accepted = Vec::new();
        let mut rejected: BTreeMap<Rejection, usize> = BTreeMap::new();

        for record in records {
            match self.evaluate(record) {
                Ok(()) => accepted.push(record.clone()),
                Err(reason) => *rejected.entry(reason).or_default() += 1,
            }
            if self.config.is_capped() && accepted.len() >= self.config.max_results {
                tracing::debug!(cap = self.config.max_results, "result cap reached");
                break;
            }
        }

        for (reason, count) in &rejected {
            tracing::debug!(%reason, count, "records filtered out");
        }
        tracing::info!(kept = accepted.len(), "filtering complete");
        accepted
    }
}

/// Filter `records` with `config` as of `now` (epoch seconds)
pub fn apply_filters(
    records: &[VocabularyRecord],
    config: &FilterConfig,
    now: i64,
) -> Vec<VocabularyRecord> {
    FilterEngine::new(*config, now).apply(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CardState, Numeric, SenseId, VocabId};

    const NOW: i64 = 1_700_000_000;

    fn record(id: u64) -> VocabularyRecord {
        VocabularyRecord::new(VocabId::new(id), SenseId::new(id)).with_frequency_rank(100)
    }

    fn ids(records: &[VocabularyRecord]) -> Vec<u64> {
        records.iter().map(|r| r.vocab_id.get()).collect()
    }

    fn run(records: &[VocabularyRecord], config: FilterConfig) -> Vec<u64> {
        ids(&apply_filters(records, &config, NOW))
    }

    #[test]
    fn test_permissive_config_is_identity() {
        let records = vec![
            record(3).with_occurrences(0),
            record(1)
                .with_card_state(CardState::new(["suspended", "never-forget"]))
                .with_card_level(99),
            record(2)
                .with_due_at(Numeric::Invalid("x".into()))
                .with_frequency_rank(Numeric::Missing),
        ];

        let filtered = apply_filters(&records, &FilterConfig::permissive(), NOW);
        assert_eq!(filtered, records);
    }

    #[test]
    fn test_occurrence_floor() {
        let records = vec![record(1).with_occurrences(5)];

        let config = FilterConfig {
            min_occurrences: 6,
            ..FilterConfig::permissive()
        };
        assert!(run(&records, config).is_empty());

        let config = FilterConfig {
            min_occurrences: 5,
            ..FilterConfig::permissive()
        };
        assert_eq!(run(&records, config), vec![1]);
    }

    #[test]
    fn test_occurrence_floor_passes_unknown_counts() {
        let records = vec![
            record(1),
            record(2).with_occurrences(Numeric::Invalid("many".into())),
            record(3).with_occurrences(1),
        ];
        let config = FilterConfig {
            min_occurrences: 10,
            ..FilterConfig::permissive()
        };
        assert_eq!(run(&records, config), vec![1, 2]);
    }

    #[test]
    fn test_due_ceiling() {
        let records = vec![
            record(1).with_due_at(NOW + 172_800),
            record(2),
            record(3).with_due_at(NOW + 86_400),
            record(4).with_due_at(Numeric::Invalid("tomorrow".into())),
            record(5).with_due_at(NOW - 10),
        ];
        let config = FilterConfig {
            max_days_until_due: Some(1),
            ..FilterConfig::permissive()
        };
        assert_eq!(run(&records, config), vec![2, 3, 5]);
    }

    #[test]
    fn test_due_ceiling_unset_ignores_due_dates() {
        let records = vec![record(1).with_due_at(Numeric::Invalid("?".into()))];
        assert_eq!(run(&records, FilterConfig::permissive()), vec![1]);
    }

    #[test]
    fn test_card_level_ceiling() {
        let records = vec![
            record(1).with_card_level(3),
            record(2).with_card_level(4),
            record(3),
            record(4).with_card_level(Numeric::Invalid("new".into())),
        ];
        let config = FilterConfig {
            max_card_level: Some(3),
            ..FilterConfig::permissive()
        };
        assert_eq!(run(&records, config), vec![1, 3, 4]);
    }

    #[test]
    fn test_banished_states() {
        let records = vec![
            record(1).with_card_state(CardState::new(["suspended"])),
            record(2).with_card_state(CardState::new(["blacklisted"])),
            record(3).with_card_state(CardState::new(["banished"])),
            record(4).with_card_state(CardState::new(["learning"])),
        ];

        let config = FilterConfig {
            include_banished: false,
            ..FilterConfig::permissive()
        };
        assert_eq!(run(&records, config), vec![4]);

        assert_eq!(run(&records, FilterConfig::permissive()), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_never_forget_state() {
        let records = vec![
            record(1).with_card_state(CardState::new(["never-forget"])),
            record(2),
        ];
        let config = FilterConfig {
            include_never_forget: false,
            ..FilterConfig::permissive()
        };
        assert_eq!(run(&records, config), vec![2]);
    }

    #[test]
    fn test_frequency_ceiling_rejects_unknown_rank() {
        let records = vec![
            record(1).with_frequency_rank(Numeric::Missing),
            record(2).with_frequency_rank(499),
            record(3).with_frequency_rank(500),
            record(4).with_frequency_rank(501),
            record(5).with_frequency_rank(Numeric::Invalid("rare".into())),
        ];
        let config = FilterConfig {
            max_frequency_rank: Some(500),
            ..FilterConfig::permissive()
        };
        assert_eq!(run(&records, config), vec![2, 3]);
    }

    #[test]
    fn test_unknown_rank_passes_without_ceiling() {
        let records = vec![record(1).with_frequency_rank(Numeric::Missing)];
        assert_eq!(run(&records, FilterConfig::permissive()), vec![1]);
    }

    #[test]
    fn test_result_cap_keeps_first_in_order() {
        let records: Vec<_> = (1..=5).map(record).collect();
        let config = FilterConfig {
            max_results: 2,
            ..FilterConfig::permissive()
        };
        assert_eq!(run(&records, config), vec![1, 2]);
    }

    #[test]
    fn test_result_cap_counts_only_accepted() {
        let records = vec![
            record(1).with_card_state(CardState::new(["banished"])),
            record(2),
            record(3).with_card_state(CardState::new(["banished"])),
            record(4),
            record(5),
        ];
        let config = FilterConfig {
            max_results: 2,
            ..FilterConfig::basic()
        };
        assert_eq!(run(&records, config), vec![2, 4]);
    }

    #[test]
    fn test_result_cap_stops_pulling_records() {
        let records: Vec<_> = (1..=5).map(record).collect();
        let config = FilterConfig {
            max_results: 2,
            ..FilterConfig::permissive()
        };
        let mut pulled = 0;

        let filtered = FilterEngine::new(config, NOW).apply(records.iter().inspect(|_| pulled += 1));

        assert_eq!(filtered.len(), 2);
        assert_eq!(pulled, 2);
    }

    #[test]
    fn test_evaluate_reports_first_failing_check() {
        let engine = FilterEngine::new(
            FilterConfig {
                min_occurrences: 5,
                max_frequency_rank: Some(10),
                ..FilterConfig::basic()
            },
            NOW,
        );
        let rec = record(1)
            .with_occurrences(1)
            .with_card_state(CardState::new(["suspended"]));
        assert_eq!(engine.evaluate(&rec), Err(Rejection::TooFewOccurrences));

        let rec = record(1).with_card_state(CardState::new(["suspended"]));
        assert_eq!(engine.evaluate(&rec), Err(Rejection::Banished));

        let rec = record(1);
        assert_eq!(engine.evaluate(&rec), Err(Rejection::TooRare));
    }

    #[test]
    fn test_empty_input() {
        assert!(apply_filters(&[], &FilterConfig::basic(), NOW).is_empty());
    }
}
