//! Core types for the scorebook.

use crate::error::{Result, ScorebookError};
use chrono::{NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of roster slots (court positions) per team.
pub const ROSTER_SIZE: usize = 6;

/// Display format for timestamps, e.g. `2024-05-01 18:30:05`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One of the two teams on the scoresheet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TeamId {
    /// Team at index 0.
    Home,
    /// Team at index 1.
    Away,
}

impl TeamId {
    /// Both teams, in index order.
    pub const ALL: [TeamId; 2] = [TeamId::Home, TeamId::Away];

    /// Position of this team in index order (0 or 1).
    pub fn index(self) -> usize {
        match self {
            TeamId::Home => 0,
            TeamId::Away => 1,
        }
    }
}

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.index())
    }
}

/// Global append position of an event (shared by all logs).
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
pub struct Sequence(pub u64);

impl fmt::Debug for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Seq({})", self.0)
    }
}

impl Sequence {
    pub fn next(self) -> Self {
        Sequence(self.0 + 1)
    }
}

/// Local wall-clock time at whole-second resolution.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Timestamp(NaiveDateTime);

impl Timestamp {
    /// Wrap a date-time, dropping any sub-second part.
    pub fn new(value: NaiveDateTime) -> Self {
        Timestamp(value.with_nanosecond(0).unwrap_or(value))
    }

    /// Parse a `YYYY-MM-DD HH:MM:SS` string.
    pub fn parse(s: &str) -> Result<Self> {
        NaiveDateTime::parse_from_str(s.trim(), TIMESTAMP_FORMAT)
            .map(Timestamp::new)
            .map_err(|e| ScorebookError::InvalidTimestamp(format!("{s:?}: {e}")))
    }

    /// Timestamp `secs` seconds later (earlier if negative).
    pub fn plus_seconds(self, secs: i64) -> Self {
        Timestamp(self.0 + chrono::Duration::seconds(secs))
    }
}

impl fmt::Debug for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Timestamp({self})")
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(TIMESTAMP_FORMAT))
    }
}

/// Six ordered player-name slots. Slot 0 is court position 1 (the server).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster([String; ROSTER_SIZE]);

impl Roster {
    /// Roster with every slot empty.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, slot: usize) -> Option<&str> {
        self.0.get(slot).map(String::as_str)
    }

    /// Put `name` into `slot`, returning the previous occupant.
    /// Returns `None` (and changes nothing) if `slot` is out of range.
    pub fn replace(&mut self, slot: usize, name: impl Into<String>) -> Option<String> {
        self.0
            .get_mut(slot)
            .map(|current| std::mem::replace(current, name.into()))
    }

    /// Anti-clockwise rotation: slot i takes slot i+1, slot 0 moves to slot 5.
    pub fn rotate(&mut self) {
        self.0.rotate_left(1);
    }

    /// Roster after one rotation, leaving `self` unchanged.
    pub fn rotated(&self) -> Self {
        let mut next = self.clone();
        next.rotate();
        next
    }
}

impl From<[&str; ROSTER_SIZE]> for Roster {
    fn from(names: [&str; ROSTER_SIZE]) -> Self {
        Roster(names.map(String::from))
    }
}

impl From<[String; ROSTER_SIZE]> for Roster {
    fn from(names: [String; ROSTER_SIZE]) -> Self {
        Roster(names)
    }
}

impl fmt::Display for Roster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.0.join("; "))
    }
}

/// One team's live state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub name: String,
    pub roster: Roster,
    pub score: u32,
    pub timeouts_remaining: u32,
}

impl Team {
    pub fn new(name: impl Into<String>, timeouts: u32) -> Self {
        Self {
            name: name.into(),
            roster: Roster::new(),
            score: 0,
            timeouts_remaining: timeouts,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_team_index_matches_all_order() {
        for (i, team) in TeamId::ALL.into_iter().enumerate() {
            assert_eq!(team.index(), i);
        }
        assert_eq!(TeamId::Away.to_string(), "1");
    }

    #[test]
    fn test_timestamp_parse_and_display() {
        let ts = Timestamp::parse("2024-05-01 09:03:07").unwrap();
        assert_eq!(ts.to_string(), "2024-05-01 09:03:07");
        assert_eq!(ts.plus_seconds(60).to_string(), "2024-05-01 09:04:07");
    }

    #[test]
    fn test_timestamp_rejects_garbage() {
        let result = Timestamp::parse("yesterday");
        assert!(matches!(result, Err(ScorebookError::InvalidTimestamp(_))));
    }

    #[test]
    fn test_roster_rotates_anticlockwise() {
        let mut roster = Roster::from(["A", "B", "C", "D", "E", "F"]);
        roster.rotate();
        assert_eq!(roster, Roster::from(["B", "C", "D", "E", "F", "A"]));
        assert_eq!(roster.to_string(), "[B; C; D; E; F; A]");
    }

    #[test]
    fn test_roster_replace_out_of_range() {
        let mut roster = Roster::from(["A", "B", "C", "D", "E", "F"]);
        assert_eq!(roster.replace(2, "X"), Some("C".to_string()));
        assert_eq!(roster.replace(6, "Y"), None);
        assert_eq!(roster.get(2), Some("X"));
        assert_eq!(roster.get(6), None);
    }
}
