//! Numeric identifiers for the persisted records.
//!
//! Each id is its own type so an account id can never be passed where a role
//! id is expected.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! record_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            pub const fn new(value: i64) -> Self {
                Self(value)
            }

            pub const fn value(self) -> i64 {
                self.0
            }
        }

        impl From<i64> for $name {
            fn from(value: i64) -> Self {
                Self(value)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

record_id!(
    /// Identity of an [`Account`](crate::Account).
    AccountId
);
record_id!(ActivationTokenId);
record_id!(RoleAssignmentId);
record_id!(
    /// Role granted through a [`RoleAssignment`](crate::RoleAssignment).
    RoleId
);
record_id!(
    /// Staff record an account is linked to.
    CollaboratorId
);
record_id!(
    /// Guardian record an account is linked to.
    GuardianId
);
