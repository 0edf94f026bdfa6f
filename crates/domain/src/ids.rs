// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Identifier newtypes.
//!
//! Every cross-entity reference in the domain is one of these identifiers,
//! never a pointer to the entity itself. The registries that own the
//! entities resolve them.

use serde::{Deserialize, Serialize};

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Wraps an already-formatted identifier value.
            #[must_use]
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            /// Returns the identifier value.
            #[must_use]
            pub fn value(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }
    };
}

entity_id!(
    /// Identifies a team (`T0001`).
    TeamId
);
entity_id!(
    /// Identifies a player (`P0001`).
    PlayerId
);
entity_id!(
    /// Identifies a match (`M0001`).
    MatchId
);
entity_id!(
    /// Identifies a ticket (`TK000001`).
    TicketId
);
entity_id!(
    /// Identifies a booking (`B000001`).
    BookingId
);
