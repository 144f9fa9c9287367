//! The five append-only event logs.

use super::event::{Event, EventCategory, EventKind};
use crate::types::{Sequence, TeamId, Timestamp};

/// Append-only match logs.
///
/// Events are routed to one log per category; rotations are additionally
/// split per team. Every append gets the next global [`Sequence`], so the
/// relative append order of any two events is recoverable after a merge.
#[derive(Clone, Debug, Default)]
pub struct EventLog {
    scores: Vec<Event>,
    rotations: [Vec<Event>; 2],
    substitutions: Vec<Event>,
    serves: Vec<Event>,
    timeouts: Vec<Event>,

    /// Next sequence to assign.
    next_sequence: Sequence,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an event and return the sequence it was given.
    pub fn append(&mut self, timestamp: Timestamp, set: impl Into<String>, kind: EventKind) -> Sequence {
        let sequence = self.next_sequence;
        self.next_sequence = sequence.next();

        let event = Event {
            sequence,
            timestamp,
            set: set.into(),
            kind,
        };

        match event.category() {
            EventCategory::Score => self.scores.push(event),
            EventCategory::Rotation => {
                let team = event.team();
                self.rotations[team.index()].push(event)
            }
            EventCategory::Substitution => self.substitutions.push(event),
            EventCategory::Serving => self.serves.push(event),
            EventCategory::Timeout => self.timeouts.push(event),
        }

        sequence
    }

    // --- Removal (undo only) ---

    pub fn pop_score(&mut self) -> Option<Event> {
        self.scores.pop()
    }

    /// Remove the rotation of `team` that was given `sequence`. Newer
    /// entries (a lineup logged after it) stay in place.
    pub fn remove_rotation(&mut self, team: TeamId, sequence: Sequence) -> Option<Event> {
        let log = &mut self.rotations[team.index()];
        let position = log.iter().rposition(|e| e.sequence == sequence)?;
        Some(log.remove(position))
    }

    pub fn pop_substitution(&mut self) -> Option<Event> {
        self.substitutions.pop()
    }

    pub fn pop_serve(&mut self) -> Option<Event> {
        self.serves.pop()
    }

    pub fn pop_timeout(&mut self) -> Option<Event> {
        self.timeouts.pop()
    }

    // --- Reads ---

    pub fn scores(&self) -> &[Event] {
        &self.scores
    }

    pub fn rotations(&self, team: TeamId) -> &[Event] {
        &self.rotations[team.index()]
    }

    pub fn substitutions(&self) -> &[Event] {
        &self.substitutions
    }

    pub fn serves(&self) -> &[Event] {
        &self.serves
    }

    pub fn timeouts(&self) -> &[Event] {
        &self.timeouts
    }

    /// Every event, log by log (scores, rotations, substitutions, serves,
    /// timeouts). Not chronological across logs.
    pub fn iter(&self) -> impl Iterator<Item = &Event> {
        self.scores
            .iter()
            .chain(self.rotations[0].iter())
            .chain(self.rotations[1].iter())
            .chain(self.substitutions.iter())
            .chain(self.serves.iter())
            .chain(self.timeouts.iter())
    }

    /// Total number of events across all logs.
    pub fn len(&self) -> usize {
        self.scores.len()
            + self.rotations[0].len()
            + self.rotations[1].len()
            + self.substitutions.len()
            + self.serves.len()
            + self.timeouts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
