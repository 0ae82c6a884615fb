//! Loosely-typed remote field values
//!
//! The lookup endpoint returns whatever JSON it has for a field. The filter
//! rules need to tell "absent" apart from "present but not a number", so the
//! values keep that distinction instead of collapsing to `Option`.

use serde_json::Value;

/// State tags that count as banished
pub const BANISHED_TAGS: [&str; 3] = ["suspended", "blacklisted", "banished"];

/// State tag for cards marked never-forget
pub const NEVER_FORGET_TAG: &str = "never-forget";

/// An integer-valued remote field
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Numeric {
    #[default]
    Missing,
    Value(i64),
    /// Present, but not readable as an integer
    Invalid(String),
}

impl Numeric {
    /// Interpret a JSON value as an integer
    ///
    /// Integers are taken as-is, floats are truncated, numeric strings are
    /// parsed and booleans count as 0/1.
    pub fn from_json(value: Option<&Value>) -> Self {
        match value {
            None | Some(Value::Null) => Self::Missing,
            Some(Value::Bool(b)) => Self::Value(i64::from(*b)),
            Some(Value::Number(n)) => {
                if let Some(i) = n.as_i64() {
                    Self::Value(i)
                } else {
                    match n.as_f64() {
                        Some(f) if f.is_finite() && f.abs() < i64::MAX as f64 => {
                            Self::Value(f.trunc() as i64)
                        }
                        _ => Self::Invalid(n.to_string()),
                    }
                }
            }
            Some(Value::String(s)) => match s.trim().parse::<i64>() {
                Ok(i) => Self::Value(i),
                Err(_) => Self::Invalid(s.clone()),
            },
            Some(other) => Self::Invalid(other.to_string()),
        }
    }

    /// The integer value, if present and parseable
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Value(i) => Some(*i),
            _ => None,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }
}

impl From<i64> for Numeric {
    fn from(value: i64) -> Self {
        Self::Value(value)
    }
}

impl From<i32> for Numeric {
    fn from(value: i32) -> Self {
        Self::Value(i64::from(value))
    }
}

impl From<Option<i64>> for Numeric {
    fn from(value: Option<i64>) -> Self {
        value.map_or(Self::Missing, Self::Value)
    }
}

/// Definitions of a vocabulary entry
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Meanings {
    #[default]
    Missing,
    List(Vec<String>),
    /// Not list-shaped; kept in stringified form
    Other(String),
}

impl Meanings {
    pub fn from_json(value: Option<&Value>) -> Self {
        match value {
            None | Some(Value::Null) => Self::Missing,
            Some(Value::Array(items)) => Self::List(items.iter().map(stringify).collect()),
            Some(other) => Self::Other(stringify(other)),
        }
    }

    /// Meaning text for the export, list entries joined by "; "
    pub fn joined(&self) -> String {
        match self {
            Self::Missing => String::new(),
            Self::List(items) => items.join("; "),
            Self::Other(text) => text.clone(),
        }
    }
}

impl From<Vec<&str>> for Meanings {
    fn from(items: Vec<&str>) -> Self {
        Self::List(items.into_iter().map(str::to_string).collect())
    }
}

/// Card state tags reported by jpdb (e.g. "suspended", "never-forget")
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CardState(Vec<String>);

impl CardState {
    pub fn new<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(tags.into_iter().map(Into::into).collect())
    }

    /// A list becomes one tag per element; any other non-null value is a
    /// single tag.
    pub fn from_json(value: Option<&Value>) -> Self {
        match value {
            None | Some(Value::Null) => Self::default(),
            Some(Value::Array(items)) => Self(
                items
                    .iter()
                    .filter(|v| !v.is_null())
                    .map(stringify)
                    .collect(),
            ),
            Some(other) => Self(vec![stringify(other)]),
        }
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.0.iter().any(|t| t == tag)
    }

    pub fn is_banished(&self) -> bool {
        BANISHED_TAGS.iter().any(|tag| self.contains(tag))
    }

    pub fn is_never_forget(&self) -> bool {
        self.contains(NEVER_FORGET_TAG)
    }

    pub fn tags(&self) -> &[String] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Text for a JSON scalar without surrounding quotes
pub(crate) fn stringify(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Optional text field; non-string values are stringified
pub(crate) fn text_from_json(value: Option<&Value>) -> Option<String> {
    match value {
        None | Some(Value::Null) => None,
        Some(other) => Some(stringify(other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_numeric_from_json() {
        assert_eq!(Numeric::from_json(None), Numeric::Missing);
        assert_eq!(Numeric::from_json(Some(&json!(null))), Numeric::Missing);
        assert_eq!(Numeric::from_json(Some(&json!(12))), Numeric::Value(12));
        assert_eq!(Numeric::from_json(Some(&json!(-3))), Numeric::Value(-3));
        assert_eq!(Numeric::from_json(Some(&json!(4.9))), Numeric::Value(4));
        assert_eq!(Numeric::from_json(Some(&json!(" 7 "))), Numeric::Value(7));
        assert_eq!(Numeric::from_json(Some(&json!(true))), Numeric::Value(1));
        assert_eq!(
            Numeric::from_json(Some(&json!("soon"))),
            Numeric::Invalid("soon".into())
        );
        assert!(matches!(
            Numeric::from_json(Some(&json!([1]))),
            Numeric::Invalid(_)
        ));
    }

    #[test]
    fn test_numeric_as_int() {
        assert_eq!(Numeric::Value(3).as_int(), Some(3));
        assert_eq!(Numeric::Missing.as_int(), None);
        assert_eq!(Numeric::Invalid("x".into()).as_int(), None);
    }

    #[test]
    fn test_meanings_joined() {
        let meanings = Meanings::from_json(Some(&json!(["to eat", "to live on"])));
        assert_eq!(meanings.joined(), "to eat; to live on");

        assert_eq!(Meanings::from_json(None).joined(), "");
        assert_eq!(Meanings::from_json(Some(&json!("just text"))).joined(), "just text");
        assert_eq!(Meanings::from_json(Some(&json!(5))).joined(), "5");
        assert_eq!(Meanings::List(vec![]).joined(), "");
    }

    #[test]
    fn test_card_state_from_list() {
        let state = CardState::from_json(Some(&json!(["learning", "suspended"])));
        assert!(state.is_banished());
        assert!(!state.is_never_forget());
        assert_eq!(state.tags().len(), 2);
    }

    #[test]
    fn test_card_state_scalar_is_single_tag() {
        let state = CardState::from_json(Some(&json!("never-forget")));
        assert!(state.is_never_forget());
        assert_eq!(state.tags(), &["never-forget".to_string()]);

        assert!(CardState::from_json(Some(&json!(null))).is_empty());
    }

    #[test]
    fn test_each_banished_tag_counts() {
        for tag in BANISHED_TAGS {
            assert!(CardState::new([tag]).is_banished(), "{} should banish", tag);
        }
        assert!(!CardState::new(["known"]).is_banished());
    }
}
