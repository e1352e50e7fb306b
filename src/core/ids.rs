//! Opaque identifiers for rooms and players.
//!
//! Ids are caller-visible strings: the engine never inspects their
//! contents, it only compares them. `RoomCode` is the short human-readable
//! join token, distinct from the room's id.

use serde::{Deserialize, Serialize};

macro_rules! string_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Wrap a raw identifier.
            #[must_use]
            pub fn new(raw: impl Into<String>) -> Self {
                Self(raw.into())
            }

            /// The raw identifier string.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(raw: &str) -> Self {
                Self::new(raw)
            }
        }
    };
}

string_id! {
    /// Unique room identifier.
    RoomId
}

string_id! {
    /// Unique player identifier.
    PlayerId
}

string_id! {
    /// Short human-readable room join token (uppercase alphanumeric).
    RoomCode
}
