//! Strongly-typed ID wrappers for remote identifiers
//!
//! jpdb identifies a vocabulary entry by a (vocabulary id, spelling id) pair.
//! Newtypes keep the two halves from being swapped.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Macro to generate numeric ID newtype wrappers
macro_rules! define_id {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(u64);

        impl $name {
            pub fn new(raw: u64) -> Self {
                Self(raw)
            }

            /// Get the raw numeric value
            pub fn get(&self) -> u64 {
                self.0
            }

            /// Read an ID from a JSON value, if it is a non-negative integer
            pub fn from_json(value: &serde_json::Value) -> Option<Self> {
                value.as_u64().map(Self)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<u64> for $name {
            fn from(raw: u64) -> Self {
                Self(raw)
            }
        }
    };
}

define_id!(VocabId);
define_id!(SenseId);
