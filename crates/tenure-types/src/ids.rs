//! Type-safe integer identifier wrappers.
//!
//! Houses and households are both identified by plain integers, so each gets
//! a newtype to prevent accidental mixing at compile time. House ids come
//! from a [`HouseIdSequence`] that the experiment driver owns for the whole
//! process; household ids are the enumeration index of the population.

use serde::{Deserialize, Serialize};

/// Generates a newtype wrapper around `u64` with standard derives.
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub u64);

        impl $name {
            /// Wrap a raw integer identifier.
            pub const fn new(raw: u64) -> Self {
                Self(raw)
            }

            /// Return the inner integer value.
            pub const fn into_inner(self) -> u64 {
                self.0
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<u64> for $name {
            fn from(id: u64) -> Self {
                Self(id)
            }
        }

        impl From<$name> for u64 {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

define_id! {
    /// Unique identifier for a house. Never reused within a process.
    HouseId
}

define_id! {
    /// Identifier for a household: its index in the population.
    HouseholdId
}

/// Monotonic source of [`HouseId`] values, starting at 1.
///
/// One sequence is shared by every regime of an experiment, so the second
/// regime's houses continue numbering where the first regime stopped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HouseIdSequence {
    next: u64,
}

impl HouseIdSequence {
    /// Create a sequence whose first id is 1.
    pub const fn new() -> Self {
        Self { next: 1 }
    }

    /// Hand out the next id and advance the sequence.
    pub const fn next_id(&mut self) -> HouseId {
        let id = HouseId(self.next);
        self.next = self.next.saturating_add(1);
        id
    }

    /// Peek at the id the next call to [`next_id`](Self::next_id) returns.
    pub const fn peek(&self) -> HouseId {
        HouseId(self.next)
    }
}

impl Default for HouseIdSequence {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequence_starts_at_one() {
        let mut ids = HouseIdSequence::new();
        assert_eq!(ids.next_id(), HouseId(1));
        assert_eq!(ids.next_id(), HouseId(2));
        assert_eq!(ids.peek(), HouseId(3));
    }

    #[test]
    fn ids_display_as_integers() {
        assert_eq!(HouseId(9).to_string(), "9");
        assert_eq!(HouseholdId(0).to_string(), "0");
    }

    #[test]
    fn ids_serialize_transparently() {
        let json = serde_json::to_string(&HouseholdId(12)).ok();
        assert_eq!(json.as_deref(), Some("12"));
    }
}
