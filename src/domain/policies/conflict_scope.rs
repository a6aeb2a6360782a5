//! Conflict Scope Policy
//!
//! Decides which existing reservations a candidate must be compared against.

use serde::{Deserialize, Serialize};

use crate::domain::entities::Reservation;
use crate::domain::value_objects::RoomNumber;

/// Which reservations compete for the same days
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ConflictScope {
    /// Every reservation competes with every other one.
    #[default]
    Global,
    /// Only reservations for the same room compete. A reservation that
    /// names no room still competes globally.
    SameRoom,
}

impl ConflictScope {
    /// Whether `existing` must be checked for a date overlap with `candidate`
    pub fn applies(&self, candidate: &Reservation, existing: &Reservation) -> bool {
        self.applies_to_rooms(candidate.room(), existing.room())
    }

    /// Same decision as [`applies`](Self::applies), from the rooms alone
    pub fn applies_to_rooms(
        &self,
        candidate: Option<RoomNumber>,
        existing: Option<RoomNumber>,
    ) -> bool {
        match self {
            ConflictScope::Global => true,
            ConflictScope::SameRoom => match (candidate, existing) {
                (Some(a), Some(b)) => a == b,
                _ => true,
            },
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ConflictScope::Global => "global",
            ConflictScope::SameRoom => "same-room",
        }
    }

    /// Parse the config/env spelling
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "global" => Some(ConflictScope::Global),
            "same-room" | "same_room" | "room" => Some(ConflictScope::SameRoom),
            _ => None,
        }
    }
}

impl std::fmt::Display for ConflictScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
