//! Strongly-typed ID wrappers for the demo entities
//!
//! Identifiers come from the mock data set (e.g. `pot1`, `child2`) and travel
//! through route state as plain strings, so the wrappers hold a `String`.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! define_id {
    ($name:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Wrap an identifier
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Borrow the raw identifier
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }

        impl PartialEq<str> for $name {
            fn eq(&self, other: &str) -> bool {
                self.0 == other
            }
        }
    };
}

define_id!(PotId);
define_id!(ChildId);
define_id!(TransactionId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_display_and_compare() {
        let id = PotId::new("pot1");
        assert_eq!(id.to_string(), "pot1");
        assert!(id == *"pot1");
        assert_eq!(id, PotId::from("pot1"));
    }

    #[test]
    fn test_id_serializes_transparently() {
        let id = ChildId::new("child2");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"child2\"");
    }
}
