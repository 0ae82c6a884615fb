//! Response decoding for the jpdb API
//!
//! jpdb answers with positional arrays ordered like the `fields` list in the
//! request. Each endpoint has exactly one function here that turns those
//! arrays into named records; nothing outside this module indexes a row.

use serde_json::Value;

use crate::error::{ExportError, ExportResult};
use crate::models::field::{stringify, text_from_json};
use crate::models::{CardState, DeckEntry, DeckSummary, Meanings, Numeric, SenseId, VocabId};

/// Fields requested from `list-user-decks`, in row order
pub const DECK_FIELDS: [&str; 7] = [
    "id",
    "name",
    "vocabulary_count",
    "word_count",
    "vocabulary_known_coverage",
    "vocabulary_in_progress_coverage",
    "is_built_in",
];

/// Fields requested from `lookup-vocabulary`, in row order
pub const LOOKUP_FIELDS: [&str; 6] = [
    "spelling",
    "reading",
    "frequency_rank",
    "meanings",
    "card_level",
    "card_state",
];

/// Detail fields for one looked-up vocabulary entry
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct VocabularyDetails {
    pub spelling: Option<String>,
    pub reading: Option<String>,
    pub frequency_rank: Numeric,
    pub meanings: Meanings,
    pub card_level: Numeric,
    pub card_state: CardState,
}

/// Value of `name` in a positional row; short rows yield `None`
fn field<'a>(fields: &[&str], row: &'a [Value], name: &str) -> Option<&'a Value> {
    let index = fields.iter().position(|f| *f == name)?;
    row.get(index)
}

fn as_array<'a>(
    body: &'a Value,
    key: &str,
    endpoint: &'static str,
) -> ExportResult<&'a Vec<Value>> {
    body.get(key)
        .ok_or_else(|| ExportError::unexpected(endpoint, format!("missing '{}'", key)))?
        .as_array()
        .ok_or_else(|| ExportError::unexpected(endpoint, format!("'{}' is not a list", key)))
}

/// Decode the `decks` array of a `list-user-decks` response
pub fn decode_decks(body: &Value) -> ExportResult<Vec<DeckSummary>> {
    const ENDPOINT: &str = "list-user-decks";

    as_array(body, "decks", ENDPOINT)?
        .iter()
        .map(|row| {
            let row = row
                .as_array()
                .ok_or_else(|| ExportError::unexpected(ENDPOINT, "deck entry is not a list"))?;
            let get = |name| field(&DECK_FIELDS, row, name);

            let id = match get("id") {
                None | Some(Value::Null) => {
                    return Err(ExportError::unexpected(ENDPOINT, "deck entry without id"))
                }
                Some(id) => stringify(id),
            };

            Ok(DeckSummary {
                id,
                name: text_from_json(get("name")).unwrap_or_else(|| "Unknown".to_string()),
                vocabulary_count: Numeric::from_json(get("vocabulary_count"))
                    .as_int()
                    .unwrap_or(0),
                word_count: Numeric::from_json(get("word_count")).as_int().unwrap_or(0),
                known_coverage: percentage(get("vocabulary_known_coverage")),
                in_progress_coverage: percentage(get("vocabulary_in_progress_coverage")),
                is_built_in: get("is_built_in").and_then(Value::as_bool).unwrap_or(false),
            })
        })
        .collect()
}

fn percentage(value: Option<&Value>) -> f64 {
    match value {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        Some(Value::String(s)) => s.trim().parse().unwrap_or(0.0),
        _ => 0.0,
    }
}

/// Zip the parallel `vocabulary` and `occurences` arrays of a
/// `deck/list-vocabulary` response
///
/// An index past the end of `occurences` (or a missing `occurences` array)
/// gives a missing occurrence count.
pub fn decode_deck_vocabulary(body: &Value) -> ExportResult<Vec<DeckEntry>> {
    const ENDPOINT: &str = "deck/list-vocabulary";

    let vocabulary = as_array(body, "vocabulary", ENDPOINT)?;
    let occurrences = body
        .get("occurences")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default();

    Ok(vocabulary
        .iter()
        .enumerate()
        .map(|(i, pair)| {
            let pair = pair.as_array().map(Vec::as_slice).unwrap_or_default();
            DeckEntry {
                vocab_id: pair.first().and_then(VocabId::from_json),
                sense_id: pair.get(1).and_then(SenseId::from_json),
                occurrences: Numeric::from_json(occurrences.get(i)),
            }
        })
        .collect())
}

/// Decode the `vocabulary_info` rows of a `lookup-vocabulary` response
///
/// The result has one slot per returned row; `None` marks an entry jpdb did
/// not find.
pub fn decode_lookup(body: &Value) -> ExportResult<Vec<Option<VocabularyDetails>>> {
    const ENDPOINT: &str = "lookup-vocabulary";

    as_array(body, "vocabulary_info", ENDPOINT)?
        .iter()
        .map(|row| match row {
            Value::Null => Ok(None),
            Value::Array(row) => {
                let get = |name| field(&LOOKUP_FIELDS, row, name);
                Ok(Some(VocabularyDetails {
                    spelling: text_from_json(get("spelling")),
                    reading: text_from_json(get("reading")),
                    frequency_rank: Numeric::from_json(get("frequency_rank")),
                    meanings: Meanings::from_json(get("meanings")),
                    card_level: Numeric::from_json(get("card_level")),
                    card_state: CardState::from_json(get("card_state")),
                }))
            }
            _ => Err(ExportError::unexpected(ENDPOINT, "row is neither a list nor null")),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_decks() {
        let body = json!({
            "decks": [
                [12, "Core 2k", 2000, 2400, 55.25, 10.0, false],
                [3, "Novel", 800, 12000, "12.5", null, true],
                [7]
            ]
        });

        let decks = decode_decks(&body).unwrap();
        assert_eq!(decks.len(), 3);
        assert_eq!(decks[0].id, "12");
        assert_eq!(decks[0].name, "Core 2k");
        assert_eq!(decks[0].vocabulary_count, 2000);
        assert_eq!(decks[0].known_coverage, 55.25);
        assert!(decks[1].is_built_in);
        assert_eq!(decks[1].known_coverage, 12.5);
        assert_eq!(decks[1].in_progress_coverage, 0.0);
        assert_eq!(decks[2].name, "Unknown");
        assert_eq!(decks[2].word_count, 0);
    }

    #[test]
    fn test_decode_decks_missing_key() {
        let err = decode_decks(&json!({"other": []})).unwrap_err();
        assert!(matches!(err, ExportError::UnexpectedResponse { .. }));
    }

    #[test]
    fn test_decode_decks_without_id() {
        assert!(decode_decks(&json!({"decks": [[]]})).is_err());
    }

    #[test]
    fn test_decode_deck_vocabulary_zips_by_index() {
        let body = json!({
            "vocabulary": [[100, 1], [200, 2], [300]],
            "occurences": [5, null]
        });

        let entries = decode_deck_vocabulary(&body).unwrap();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].vocab_id, Some(VocabId::new(100)));
        assert_eq!(entries[0].occurrences, Numeric::Value(5));
        assert_eq!(entries[1].occurrences, Numeric::Missing);
        assert_eq!(entries[2].sense_id, None);
        assert_eq!(entries[2].occurrences, Numeric::Missing);
    }

    #[test]
    fn test_decode_deck_vocabulary_without_occurrences() {
        let body = json!({"vocabulary": [[1, 2]]});
        let entries = decode_deck_vocabulary(&body).unwrap();
        assert_eq!(entries[0].occurrences, Numeric::Missing);
    }

    #[test]
    fn test_decode_deck_vocabulary_requires_vocabulary() {
        let err = decode_deck_vocabulary(&json!({"occurences": []})).unwrap_err();
        assert!(err.to_string().contains("deck/list-vocabulary"));
    }

    #[test]
    fn test_decode_lookup_by_field_name() {
        let body = json!({
            "vocabulary_info": [
                ["食べる", "たべる", 120, ["to eat"], 3, ["learning"]],
                null,
                ["猫", "ねこ"]
            ]
        });

        let rows = decode_lookup(&body).unwrap();
        assert_eq!(rows.len(), 3);

        let first = rows[0].as_ref().unwrap();
        assert_eq!(first.spelling.as_deref(), Some("食べる"));
        assert_eq!(first.frequency_rank, Numeric::Value(120));
        assert_eq!(first.meanings.joined(), "to eat");
        assert_eq!(first.card_level, Numeric::Value(3));
        assert!(first.card_state.contains("learning"));

        assert!(rows[1].is_none());

        let short = rows[2].as_ref().unwrap();
        assert_eq!(short.reading.as_deref(), Some("ねこ"));
        assert_eq!(short.frequency_rank, Numeric::Missing);
        assert_eq!(short.meanings, Meanings::Missing);
    }

    #[test]
    fn test_decode_lookup_rejects_object_rows() {
        let body = json!({"vocabulary_info": [{"spelling": "x"}]});
        assert!(decode_lookup(&body).is_err());
    }
}
